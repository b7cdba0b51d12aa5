//! SVG icons.
//!
//! Material-style outline icons as inline SVG, sized by the surrounding
//! icon button.

use postly_pages::builder::html::{path, svg};
use postly_pages::component::{ElementView, IntoView};

fn icon(d: &'static str) -> ElementView {
	svg()
		.attr("viewBox", "0 0 24 24")
		.attr("fill", "currentColor")
		.attr("aria-hidden", "true")
		.child(path().attr("d", d).into_view())
}

/// Horizontal ellipsis ("more options").
pub fn more_horiz_icon() -> ElementView {
	icon(
		"M6 10c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm12 0c-1.1 0-2 .9-2 2s.9 2 2 2 \
		 2-.9 2-2-.9-2-2-2zm-6 0c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z",
	)
}

/// Outlined thumbs-up.
pub fn thumb_up_icon() -> ElementView {
	icon(
		"M9 21h9c.83 0 1.54-.5 1.84-1.22l3.02-7.05c.09-.23.14-.47.14-.73v-2c0-1.1-.9-2-2-2h-6.31l.95-4.57.03-.32c0-.41-.17-.79-.44-1.06L14.17 1 7.58 7.59C7.22 7.95 7 8.45 7 9v10c0 1.1.9 2 2 2zm0-12l4.34-4.34L12 10h9v2l-3 7H9V9zM1 9h4v12H1z",
	)
}

/// Open-in-new-page arrow.
pub fn open_in_new_icon() -> ElementView {
	icon(
		"M19 19H5V5h7V3H5c-1.11 0-2 .9-2 2v14c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2v-7h-2v7zM14 \
		 3v2h3.59l-9.83 9.83 1.41 1.41L19 6.41V10h2V3h-7z",
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_icons_are_svg() {
		for icon in [more_horiz_icon(), thumb_up_icon(), open_in_new_icon()] {
			let html = icon.into_view().render_to_string();
			assert!(html.starts_with("<svg"));
			assert!(html.contains("viewBox=\"0 0 24 24\""));
			assert!(html.contains("<path"));
		}
	}
}
