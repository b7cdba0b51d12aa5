//! Head metadata management.
//!
//! Page shells declare their title and meta tags through [`Head`]. On the
//! client `apply` writes them into the live document; `render_to_string`
//! serializes them for server-rendered shells.

use super::into_view::{ElementView, IntoView, View};

/// A `<meta name=... content=...>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
	/// The `name` attribute.
	pub name: String,
	/// The `content` attribute.
	pub content: String,
}

/// Declarative head section for a page.
#[derive(Debug, Clone, Default)]
pub struct Head {
	title: Option<String>,
	metas: Vec<MetaTag>,
}

impl Head {
	/// Creates an empty head section.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Adds a meta tag.
	pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
		self.metas.push(MetaTag {
			name: name.into(),
			content: content.into(),
		});
		self
	}

	/// The configured title, if any.
	pub fn title_text(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// The configured meta tags.
	pub fn metas(&self) -> &[MetaTag] {
		&self.metas
	}

	/// Serializes the head section to HTML.
	pub fn render_to_string(&self) -> String {
		let mut views: Vec<View> = Vec::new();
		if let Some(title) = &self.title {
			views.push(ElementView::new("title").child(title.clone()).into_view());
		}
		for meta in &self.metas {
			views.push(
				ElementView::new("meta")
					.attr("name", meta.name.clone())
					.attr("content", meta.content.clone())
					.into_view(),
			);
		}
		View::Fragment(views).render_to_string()
	}

	/// Writes the title and meta tags into the live document.
	#[cfg(target_arch = "wasm32")]
	pub fn apply(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};

		if let Some(title) = &self.title {
			document.set_title(title);
		}

		let Some(head) = document.head() else {
			return;
		};

		for meta in &self.metas {
			let selector = format!("meta[name=\"{}\"]", meta.name);
			let existing = document.query_selector(&selector).ok().flatten();
			match existing {
				Some(element) => {
					let _ = element.set_attribute("content", &meta.content);
				}
				None => {
					if let Ok(element) = document.create_element("meta") {
						let _ = element.set_attribute("name", &meta.name);
						let _ = element.set_attribute("content", &meta.content);
						let _ = head.append_child(&element);
					}
				}
			}
		}
	}

	/// Applying head metadata is client-only.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn apply(&self) {}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_head_render() {
		let head = Head::new()
			.title("Home • Postly")
			.meta("description", "Discover posts");
		let html = head.render_to_string();
		assert!(html.contains("<title>Home • Postly</title>"));
		assert!(html.contains("name=\"description\""));
		assert!(html.contains("content=\"Discover posts\""));
	}

	#[test]
	fn test_head_accessors() {
		let head = Head::new().title("Postly").meta("a", "b");
		assert_eq!(head.title_text(), Some("Postly"));
		assert_eq!(head.metas().len(), 1);
	}

	#[test]
	fn test_empty_head_renders_nothing() {
		assert_eq!(Head::new().render_to_string(), "");
	}
}
