//! Component trait definition.

use super::into_view::View;

/// Trait for reusable UI components.
///
/// Components encapsulate state and rendering logic into reusable units.
/// Function components (plain `fn(...) -> View`) are the common case; this
/// trait exists for components that carry configuration, like
/// [`crate::router::Link`].
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::into_view::{ElementView, IntoView};

	struct Greeting {
		message: String,
	}

	impl Component for Greeting {
		fn render(&self) -> View {
			ElementView::new("div")
				.child(self.message.clone())
				.into_view()
		}

		fn name() -> &'static str {
			"Greeting"
		}
	}

	#[test]
	fn test_component_render() {
		let comp = Greeting {
			message: "Hello".to_string(),
		};
		assert_eq!(comp.render().render_to_string(), "<div>Hello</div>");
	}

	#[test]
	fn test_component_name() {
		assert_eq!(Greeting::name(), "Greeting");
	}
}
