//! Theme configuration and stylesheet generation.
//!
//! Colors, breakpoints and fonts are an explicit configuration object rather
//! than ambient context: the stylesheet is generated from a [`Theme`] value
//! and injected once at boot.

/// Color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
	/// Page background.
	pub background_primary: String,
	/// Card and panel background.
	pub background_secondary: String,
	/// Primary text color.
	pub text_primary: String,
	/// Muted text color.
	pub text_secondary: String,
	/// Primary button and active-control color.
	pub button_primary: String,
	/// Error text and alert color.
	pub danger: String,
}

/// Min-width media queries, smallest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
	/// Small screens.
	pub sm: String,
	/// Medium screens.
	pub md: String,
	/// Large screens.
	pub lg: String,
	/// Extra large screens.
	pub xl: String,
}

/// Font families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fonts {
	/// Body text.
	pub body: String,
	/// Logo and headings.
	pub title: String,
}

/// The full theme configuration passed to page shells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
	/// Color palette.
	pub colors: ThemeColors,
	/// Responsive breakpoints.
	pub breakpoints: Breakpoints,
	/// Font families.
	pub fonts: Fonts,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			colors: ThemeColors {
				background_primary: "#161719".to_string(),
				background_secondary: "#222426".to_string(),
				text_primary: "#f5f5f5".to_string(),
				text_secondary: "#b8bcc0".to_string(),
				button_primary: "#6577e8".to_string(),
				danger: "#e85a5a".to_string(),
			},
			breakpoints: Breakpoints {
				sm: "(min-width: 540px)".to_string(),
				md: "(min-width: 768px)".to_string(),
				lg: "(min-width: 1024px)".to_string(),
				xl: "(min-width: 1280px)".to_string(),
			},
			fonts: Fonts {
				body: "'Inter', system-ui, sans-serif".to_string(),
				title: "'Poppins', system-ui, sans-serif".to_string(),
			},
		}
	}
}

/// Generates the application stylesheet from a theme.
pub fn stylesheet(theme: &Theme) -> String {
	let colors = &theme.colors;
	let bp = &theme.breakpoints;
	let fonts = &theme.fonts;

	format!(
		r#"
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
html {{ font-size: 62.5%; }}
body {{
	background: {background_primary};
	color: {text_primary};
	font-family: {body_font};
	font-size: 1.6rem;
}}
a {{ color: inherit; text-decoration: none; }}
ul {{ list-style: none; }}
button {{ font: inherit; color: inherit; background: none; border: none; cursor: pointer; }}

@keyframes appear {{
	from {{ opacity: 0; }}
	to {{ opacity: 1; }}
}}
@keyframes scale-bounce {{
	0%, 80%, 100% {{ transform: scaleY(0.4); }}
	40% {{ transform: scaleY(1); }}
}}

.main-container {{ padding: 1rem 0 4rem; }}
@media {md} {{
	.main-container {{ padding: 1rem 1rem 4rem; }}
}}
.wrapper {{ max-width: 1050px; margin: 0 auto; width: 100%; }}
@media {xl} {{
	.wrapper {{ max-width: 1180px; }}
}}

/* Loading indicator */
.scale-loading {{ display: flex; gap: 3px; align-items: center; }}
.scale-loading--center {{ justify-content: center; }}
.scale-loading__bar {{
	width: 4px;
	height: 28px;
	background: {button_primary};
	animation: scale-bounce 1s ease-in-out infinite;
}}
.scale-loading__bar:nth-child(2) {{ animation-delay: 0.1s; }}
.scale-loading__bar:nth-child(3) {{ animation-delay: 0.2s; }}
.scale-loading__bar:nth-child(4) {{ animation-delay: 0.3s; }}
.scale-loading__bar:nth-child(5) {{ animation-delay: 0.4s; }}

/* Alerts */
.alert-danger {{
	color: {danger};
	padding: 0.8rem 1.2rem;
	border: 1px solid {danger};
	border-radius: 3px;
	margin: 0.8rem 0;
	animation: appear 0.25s ease;
}}

.alert-success {{
	color: {button_primary};
	padding: 0.8rem 1.2rem;
	border: 1px solid {button_primary};
	border-radius: 3px;
	margin: 0.8rem 0;
	animation: appear 0.25s ease;
}}

/* Avatar */
.avatar {{
	display: inline-flex;
	align-items: center;
	justify-content: center;
	border-radius: 50%;
	background: {background_secondary};
	color: {text_secondary};
	font-weight: 600;
	object-fit: cover;
	overflow: hidden;
}}

/* Icon button */
.icon-button {{
	display: inline-flex;
	align-items: center;
	justify-content: center;
	border-radius: 50%;
	padding: 6px;
	transition: background 0.15s ease, color 0.15s ease;
	color: {text_primary};
}}
.icon-button:hover {{ background: rgba(255, 255, 255, 0.08); }}
.icon-button--active {{ color: {button_primary}; }}
.icon-button[disabled] {{ opacity: 0.5; cursor: default; }}
.icon-button--small svg {{ width: 1.9rem; height: 1.9rem; }}
.icon-button svg {{ width: 2.4rem; height: 2.4rem; }}

/* Buttons */
.button {{
	display: inline-flex;
	align-items: center;
	justify-content: center;
	background: {button_primary};
	color: {text_primary};
	border-radius: 3px;
	padding: 1rem 1.6rem;
	font-size: 1.5rem;
	font-weight: 600;
	transition: opacity 0.15s ease;
}}
.button:hover {{ opacity: 0.9; }}
.button--secondary {{ background: {background_secondary}; }}
.button[disabled] {{ opacity: 0.5; cursor: default; }}

/* Post detail */
.post-details {{
	display: flex;
	max-width: 815px;
	margin: 0 auto;
	background: {background_secondary};
	border-radius: 3px;
	overflow: hidden;
	padding: 0.8rem 1.6rem;
	animation: appear 0.25s ease;
}}
.post-details--modal {{ margin: 30px auto; animation: none; }}
.post-details__column1 {{ margin-bottom: auto; margin-right: 12px; }}
.post-details__column2 {{
	position: relative;
	display: flex;
	flex-direction: column;
	width: 100%;
	overflow: hidden;
}}
.post-details__username-row {{ font-weight: 600; font-size: 1.5rem; margin-bottom: 4px; }}
.post-details__more {{ position: absolute; top: 0; right: 0; }}
.post-details__more-anchor {{ position: relative; }}
.post-details__message {{
	display: inline-block;
	font-size: 1.6rem;
	margin-bottom: 8px;
	width: 100%;
	flex-grow: 1;
	overflow-wrap: break-word;
}}
.post-details__image-container {{
	position: relative;
	display: flex;
	align-items: center;
	justify-content: center;
	background: #000;
	width: 100%;
	min-height: 225px;
	max-height: 675px;
}}
@media {md} {{
	.post-details__image-container {{ min-height: 450px; }}
}}
.post-details__image-wrapper {{ max-height: 575px; width: 100%; }}
@media {md} {{
	.post-details__image-wrapper {{ max-height: 675px; }}
}}
.post-details__image {{
	display: block;
	width: 100%;
	height: 100%;
	object-fit: cover;
	max-height: 575px;
}}
@media {md} {{
	.post-details__image {{ max-height: 675px; }}
}}
.post-details__tags {{
	display: flex;
	flex-wrap: wrap;
	margin: 10px 0;
	gap: 8px;
	word-break: break-word;
}}
.post-details__tag {{
	display: inline-block;
	opacity: 0.65;
	font-size: 1.35rem;
	cursor: pointer;
	line-height: 1;
}}
.post-details__tag:hover {{ text-decoration: underline; }}
.post-details__actions {{
	display: flex;
	place-content: center flex-start;
	padding: 1rem;
	gap: 7px;
}}
.post-details--modal .post-details__actions {{ place-content: center space-around; }}
.post-details__action {{
	display: flex;
	align-items: center;
	font-size: 1.7rem;
	color: {text_primary};
	font-weight: 400;
	transition: all 0.15s ease;
}}
.post-details__action > span {{ margin-left: 2px; }}

/* More options menu */
.post-more-options {{
	position: absolute;
	top: 100%;
	right: 0;
	z-index: 20;
	min-width: 160px;
	background: {background_primary};
	border-radius: 3px;
	box-shadow: 0 2px 12px rgba(0, 0, 0, 0.45);
	animation: appear 0.15s ease;
}}
.post-more-options__item {{
	display: block;
	width: 100%;
	text-align: left;
	padding: 1rem 1.4rem;
	font-size: 1.4rem;
}}
.post-more-options__item:hover {{ background: rgba(255, 255, 255, 0.06); }}

/* Feed */
.posts-grid {{
	display: grid;
	grid-template-columns: 1fr;
	gap: 16px;
}}
@media {sm} {{
	.posts-grid {{ grid-template-columns: repeat(2, 1fr); }}
}}
@media {lg} {{
	.posts-grid {{ grid-template-columns: repeat(3, 1fr); }}
}}
.post-card {{
	display: flex;
	flex-direction: column;
	background: {background_secondary};
	border-radius: 3px;
	overflow: hidden;
	animation: appear 0.25s ease;
}}
.post-card__image {{ width: 100%; aspect-ratio: 4 / 3; object-fit: cover; display: block; }}
.post-card__body {{ padding: 0.8rem 1.2rem; }}
.post-card__creator {{ font-weight: 600; font-size: 1.4rem; }}
.post-card__message {{
	font-size: 1.4rem;
	color: {text_secondary};
	overflow: hidden;
	display: -webkit-box;
	-webkit-line-clamp: 2;
	-webkit-box-orient: vertical;
}}
.post-card__likes {{ font-size: 1.3rem; color: {text_secondary}; margin-top: 4px; }}
.posts-empty {{ text-align: center; padding: 4rem 0; color: {text_secondary}; }}

/* Landing */
.landing {{ min-height: 100vh; }}
.hero {{ display: grid; place-items: center; position: relative; height: 95vh; width: 100%; }}
.hero__background {{
	position: absolute;
	inset: 0;
	background-color: {background_primary};
	background-repeat: no-repeat;
	background-size: cover;
	background-position: 50% 50%;
	animation: appear 0.25s ease;
	z-index: -1;
}}
.hero__background::after {{
	content: "";
	position: absolute;
	inset: 0;
	background: rgba(0, 0, 0, 0.38);
}}
.hero__panel {{
	display: grid;
	grid-template-columns: 1fr;
	justify-items: center;
	color: {text_primary};
	max-width: 350px;
	width: 92vw;
	border-radius: 3px;
	padding: 6.5rem 2rem;
	animation: appear 0.25s ease;
}}
.hero__logo {{
	font-size: 4rem;
	font-weight: 700;
	letter-spacing: 1px;
	font-family: {title_font};
	margin-bottom: 20px;
}}
@media {sm} {{ .hero__logo {{ font-size: 4.4rem; }} }}
@media {md} {{ .hero__logo {{ font-size: 4.8rem; }} }}
@media {lg} {{ .hero__logo {{ font-size: 5.3rem; }} }}
.hero__text {{ font-size: 1.7rem; text-align: center; margin-bottom: 20px; }}
@media {lg} {{ .hero__text {{ font-size: 2rem; }} }}
.hero__buttons {{ display: flex; flex-direction: column; width: 100%; gap: 15px 0; }}

.scroll-nav {{ display: none; }}
@media {sm} {{
	.scroll-nav {{
		position: fixed;
		left: 5%;
		top: 50%;
		transform: translateY(-50%);
		display: flex;
		flex-direction: column;
		gap: 10px 0;
		z-index: 10;
	}}
}}
.scroll-nav__dot {{
	height: 16px;
	width: 16px;
	border-radius: 50%;
	box-shadow: inset 0 0 0 3px #fff;
	opacity: 0.5;
	cursor: pointer;
	transition: background 0.2s ease, opacity 0.2s ease;
}}
.scroll-nav__dot:hover {{ opacity: 1; }}

.feature-row {{ display: flex; background: {background_primary}; }}
.feature-row--reverse {{ background: {background_secondary}; }}
.feature-row__wrapper {{
	display: flex;
	flex-direction: column;
	padding: 5.6rem 2rem;
	min-height: 450px;
	gap: 0 40px;
	width: 100%;
	max-width: 1050px;
	margin: 0 auto;
}}
@media {md} {{
	.feature-row__wrapper {{ flex-direction: row; padding: 12rem 2rem; }}
	.feature-row--reverse .feature-row__wrapper {{ flex-direction: row-reverse; }}
}}
.feature-row__media {{ display: flex; position: relative; flex-basis: 60%; min-height: 125px; }}
.feature-row__media img {{ width: 100%; }}
.feature-row__copy {{ flex-basis: 40%; display: flex; flex-direction: column; margin-top: 20px; }}
.feature-row__copy > h2 {{ font-weight: 700; line-height: 120%; font-size: clamp(2rem, 3vw, 3.8rem); }}
.feature-row__copy > p {{
	margin-top: 24px;
	font-size: clamp(1.5rem, 1.8vw, 2rem);
	line-height: 1.625;
	font-weight: 300;
	opacity: 0.9;
}}
@media {md} {{ .feature-row__copy {{ margin-top: 0; }} }}

/* Settings */
.settings {{ display: flex; max-width: 950px; margin: 2rem auto; gap: 0 24px; padding: 0 1rem; }}
.settings__nav {{ flex-basis: 220px; flex-shrink: 0; }}
.settings__nav-item {{ display: block; padding: 1rem 1.2rem; border-radius: 3px; font-size: 1.5rem; }}
.settings__nav-item:hover {{ background: {background_secondary}; }}
.settings__nav-item--active {{ background: {background_secondary}; font-weight: 600; }}
.settings__content {{ flex: 1; background: {background_secondary}; border-radius: 3px; padding: 2rem; }}
.form-field {{ margin-bottom: 1.6rem; }}
.form-field label {{ display: block; font-size: 1.4rem; color: {text_secondary}; margin-bottom: 6px; }}
.form-field input {{
	width: 100%;
	background: {background_primary};
	border: 1px solid rgba(255, 255, 255, 0.12);
	border-radius: 3px;
	color: {text_primary};
	padding: 1rem 1.2rem;
	font-size: 1.5rem;
}}

/* Footer */
.footer {{
	padding: 2rem 1rem;
	text-align: center;
	color: {text_secondary};
	font-size: 1.3rem;
}}
"#,
		background_primary = colors.background_primary,
		background_secondary = colors.background_secondary,
		text_primary = colors.text_primary,
		text_secondary = colors.text_secondary,
		button_primary = colors.button_primary,
		danger = colors.danger,
		body_font = fonts.body,
		title_font = fonts.title,
		sm = bp.sm,
		md = bp.md,
		lg = bp.lg,
		xl = bp.xl,
	)
}

/// Creates a `<style>` element with the generated stylesheet and appends it
/// to the document head.
#[cfg(client)]
pub fn inject_stylesheet(theme: &Theme) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let Some(head) = document.head() else {
		return;
	};
	if let Ok(style) = document.create_element("style") {
		style.set_text_content(Some(&stylesheet(theme)));
		let _ = head.append_child(&style);
	}
}
