//! Common UI components.
//!
//! Reusable pieces shared by the pages:
//! - `icon_button` - round icon control, returned as an element so callers
//!   can attach their own click handlers
//! - `user_avatar` - avatar image with initial-letter fallback
//! - `scale_loading` - animated loading indicator
//! - `error_alert` - error message display
//! - `custom_button_link` - filled button-style anchor
//! - `page_footer` - shared footer

use postly_pages::builder::html::{a, button, div, footer, img, span};
use postly_pages::component::{ElementView, IntoView, View};

/// Icon button size variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconButtonSize {
	/// Small control (1.9rem icon).
	Small,
	/// Default control (2.4rem icon).
	#[default]
	Medium,
}

/// Round icon control.
///
/// Returned as an [`ElementView`] so the caller decides whether to attach a
/// click handler (client) or a `data-reactive` marker (server rendering).
pub fn icon_button(
	icon: ElementView,
	aria_label: &str,
	size: IconButtonSize,
	active: bool,
	disabled: bool,
) -> ElementView {
	let mut class = String::from("icon-button");
	if size == IconButtonSize::Small {
		class.push_str(" icon-button--small");
	}
	if active {
		class.push_str(" icon-button--active");
	}

	button()
		.attr("class", class)
		.attr("type", "button")
		.attr("aria-label", aria_label.to_string())
		.attr("disabled", if disabled { "true" } else { "false" })
		.child(icon)
}

/// User avatar.
///
/// Renders the image when a source is known, otherwise a circle with the
/// username's first letter.
pub fn user_avatar(src: Option<&str>, username: &str, size: u32) -> View {
	let dimension = format!("{size}px");
	match src {
		Some(src) if !src.is_empty() => img()
			.attr("class", "avatar")
			.attr("src", src.to_string())
			.attr("alt", username.to_string())
			.attr("width", dimension.clone())
			.attr("height", dimension)
			.attr("draggable", "false")
			.into_view(),
		_ => {
			let initial = username
				.chars()
				.next()
				.unwrap_or('U')
				.to_uppercase()
				.to_string();
			div()
				.attr("class", "avatar")
				.attr(
					"style",
					format!(
						"width: {dim}; height: {dim}; font-size: {font}px;",
						dim = dimension,
						font = size / 2
					),
				)
				.attr("aria-label", username.to_string())
				.child(initial)
				.into_view()
		}
	}
}

/// Animated loading indicator.
pub fn scale_loading(center: bool, margin_top: u32) -> View {
	let class = if center {
		"scale-loading scale-loading--center"
	} else {
		"scale-loading"
	};

	let mut container = div()
		.attr("class", class)
		.attr("role", "status")
		.attr("aria-label", "Loading");
	if margin_top > 0 {
		container = container.attr("style", format!("margin-top: {margin_top}px;"));
	}
	container
		.children((0..5).map(|_| span().attr("class", "scale-loading__bar")))
		.into_view()
}

/// Error message display.
pub fn error_alert(message: &str) -> View {
	div()
		.attr("class", "alert-danger")
		.attr("role", "alert")
		.child(message.to_string())
		.into_view()
}

/// Filled button-style anchor, used on the landing page.
///
/// Targets backend-served pages (sign in, account creation), so it is a
/// plain anchor rather than a router link.
pub fn custom_button_link(text: &str, href: &str, secondary: bool) -> View {
	let class = if secondary {
		"button button--secondary"
	} else {
		"button"
	};
	a().attr("class", class)
		.attr("href", href.to_string())
		.child(text.to_string())
		.into_view()
}

/// Shared page footer.
pub fn page_footer() -> View {
	footer()
		.attr("class", "footer")
		.child(span().child("Postly — create, admire, chat and find related souls."))
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_icon_button_classes() {
		let icon = crate::core::client::components::icons::thumb_up_icon;

		let html = icon_button(icon(), "Like post", IconButtonSize::Small, true, false)
			.into_view()
			.render_to_string();
		assert!(html.contains("icon-button--small"));
		assert!(html.contains("icon-button--active"));
		assert!(html.contains("aria-label=\"Like post\""));
		assert!(!html.contains("disabled"));

		let html = icon_button(icon(), "Like post", IconButtonSize::Medium, false, true)
			.into_view()
			.render_to_string();
		assert!(!html.contains("icon-button--active"));
		assert!(html.contains("disabled=\"true\""));
	}

	#[test]
	fn test_avatar_with_image() {
		let html = user_avatar(Some("/images/alice.png"), "alice", 48).render_to_string();
		assert!(html.contains("<img"));
		assert!(html.contains("src=\"/images/alice.png\""));
		assert!(html.contains("alt=\"alice\""));
		assert!(html.contains("width=\"48px\""));
	}

	#[test]
	fn test_avatar_fallback_initial() {
		let html = user_avatar(None, "alice", 48).render_to_string();
		assert!(!html.contains("<img"));
		assert!(html.contains(">A<"));

		let html = user_avatar(Some(""), "", 48).render_to_string();
		assert!(html.contains(">U<"));
	}

	#[test]
	fn test_scale_loading_bars() {
		let html = scale_loading(true, 30).render_to_string();
		assert!(html.contains("scale-loading--center"));
		assert!(html.contains("margin-top: 30px"));
		assert_eq!(html.matches("scale-loading__bar").count(), 5);
	}

	#[test]
	fn test_error_alert() {
		let html = error_alert("post not found").render_to_string();
		assert!(html.contains("role=\"alert\""));
		assert!(html.contains("post not found"));
	}

	#[test]
	fn test_custom_button_link() {
		let html = custom_button_link("Sign in", "/login", false).render_to_string();
		assert!(html.contains("href=\"/login\""));
		assert!(html.contains("class=\"button\""));

		let html = custom_button_link("Create Account", "/createAccount", true).render_to_string();
		assert!(html.contains("button--secondary"));
	}
}
