//! Page shells: home, landing, settings, post detail and not-found.
//!
//! Each shell applies its head metadata and composes app components into a
//! full routed view.

use postly_pages::builder::html::{a, div, h1, h2, img, main, nav, p, section};
use postly_pages::component::{Head, IntoView, View};

#[cfg(client)]
use postly_pages::dom::EventType;

use crate::apps::post::client::components::{PostDetailsProps, post_details, posts_list};
use crate::apps::profile::client::components::profile_settings;
use crate::core::client::components::common::{custom_button_link, page_footer};

/// Hero background images, one picked at random per visit.
const HERO_BACKGROUNDS: [&str; 5] = [
	"/images/home_background_1.jpg",
	"/images/home_background_2.jpg",
	"/images/home_background_3.jpg",
	"/images/home_background_4.jpg",
	"/images/home_background_5.jpg",
];

/// Home feed page.
pub fn home_page_view() -> View {
	Head::new()
		.title("Home • Postly")
		.meta("description", "Discover and enjoy the magic of Postly")
		.apply();

	View::fragment([
		main()
			.attr("class", "main-container")
			.child(div().attr("class", "wrapper").child(posts_list(12)))
			.into_view(),
		page_footer(),
	])
}

/// Landing page for signed-out visitors.
pub fn landing_page_view() -> View {
	Head::new().title("Postly").apply();

	let background = HERO_BACKGROUNDS[random_background_index()];

	div()
		.attr("class", "landing")
		.child(
			nav()
				.attr("class", "scroll-nav")
				.child(scroll_dot("hero"))
				.child(scroll_dot("rows")),
		)
		.child(
			div()
				.attr("class", "hero")
				.attr("id", "hero")
				.child(
					div()
						.attr("class", "hero__background")
						.attr("style", format!("background-image: url({background});")),
				)
				.child(
					div()
						.attr("class", "hero__panel")
						.child(div().attr("class", "hero__logo").child("Postly"))
						.child(
							p().attr("class", "hero__text")
								.child("Create, admire, chat and find related souls."),
						)
						.child(
							div()
								.attr("class", "hero__buttons")
								.child(custom_button_link("Sign in", "/login", false))
								.child(custom_button_link(
									"Create Account",
									"/createAccount",
									true,
								)),
						),
				),
		)
		.child(
			section()
				.attr("id", "rows")
				.child(feature_row(
					"/images/easy_posting.svg",
					"Share the moments that matter",
					"Post a picture with a message and tags, and it lands in the feed \
					 for everyone to admire. Tags connect your post to every related \
					 soul browsing the same topics.",
					false,
				))
				.child(feature_row(
					"/images/rwd.svg",
					"Made for every screen",
					"The feed, post pages and settings adapt from a phone in one hand \
					 to a widescreen desktop, with the same fast navigation everywhere.",
					true,
				)),
		)
		.into_view()
}

/// Account settings page.
pub fn settings_page_view() -> View {
	Head::new()
		.title("Profile Settings • Postly")
		.meta("description", "Manage your Postly profile")
		.apply();

	settings_template(profile_settings())
}

/// Canonical post detail page.
pub fn post_page_view(post_id: String) -> View {
	Head::new().title("Post • Postly").apply();

	main()
		.attr("class", "main-container")
		.child(post_details(PostDetailsProps {
			post_id,
			is_in_modal: false,
			initial: None,
		}))
		.into_view()
}

/// Fallback for unknown paths.
pub fn not_found_page_view() -> View {
	Head::new().title("Not found • Postly").apply();

	main()
		.attr("class", "main-container")
		.child(
			div()
				.attr("class", "posts-empty")
				.child(h1().child("404"))
				.child(p().child("This page does not exist."))
				.child(
					a().attr("href", "/home")
						.attr("data-link", "true")
						.attr("class", "button")
						.child("Back to the feed"),
				),
		)
		.into_view()
}

/// Settings layout: navigation column plus content panel.
fn settings_template(content: View) -> View {
	div()
		.attr("class", "settings")
		.child(
			nav()
				.attr("class", "settings__nav")
				.child(
					a().attr("class", "settings__nav-item settings__nav-item--active")
						.attr("href", "/settings")
						.attr("data-link", "true")
						.child("Profile"),
				)
				.child(
					a().attr("class", "settings__nav-item")
						.attr("href", "/home")
						.attr("data-link", "true")
						.child("Back to feed"),
				),
		)
		.child(div().attr("class", "settings__content").child(content))
		.into_view()
}

/// One marketing row: image beside heading and copy.
fn feature_row(image: &str, heading: &str, body: &str, reverse: bool) -> View {
	let class = if reverse {
		"feature-row feature-row--reverse"
	} else {
		"feature-row"
	};

	div()
		.attr("class", class)
		.child(
			div()
				.attr("class", "feature-row__wrapper")
				.child(
					div().attr("class", "feature-row__media").child(
						img()
							.attr("src", image.to_string())
							.attr("alt", heading.to_string())
							.attr("draggable", "false"),
					),
				)
				.child(
					div()
						.attr("class", "feature-row__copy")
						.child(h2().child(heading.to_string()))
						.child(p().child(body.to_string())),
				),
		)
		.into_view()
}

/// Scroll-navigation dot that smooth-scrolls to a page section.
fn scroll_dot(target: &'static str) -> View {
	let mut dot = a()
		.attr("class", "scroll-nav__dot")
		.attr("role", "button")
		.attr("aria-label", format!("Scroll to {target}"));

	#[cfg(client)]
	{
		dot = dot.on(EventType::Click, move |_event: web_sys::Event| {
			scroll_to(target);
		});
	}
	#[cfg(server)]
	{
		dot = dot.attr("data-reactive", "true");
	}

	dot.into_view()
}

/// Smoothly scrolls the section with the given id into view.
#[cfg(client)]
fn scroll_to(id: &str) {
	if let Some(element) = postly_pages::dom::document().get_element_by_id(id) {
		let options = web_sys::ScrollIntoViewOptions::new();
		options.set_behavior(web_sys::ScrollBehavior::Smooth);
		element
			.inner()
			.scroll_into_view_with_scroll_into_view_options(&options);
	}
}

/// Random index into the hero backgrounds.
fn random_background_index() -> usize {
	#[cfg(client)]
	{
		(js_sys::Math::random() * HERO_BACKGROUNDS.len() as f64) as usize % HERO_BACKGROUNDS.len()
	}
	#[cfg(server)]
	{
		0
	}
}
