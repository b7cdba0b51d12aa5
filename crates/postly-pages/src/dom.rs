//! DOM abstraction layer.
//!
//! Thin wrappers over `web_sys` so that component code never touches raw
//! bindings. On non-WASM targets the types are inert placeholders; mounting
//! is a no-op there and rendering goes through `render_to_string` instead.

/// DOM event kinds that elements can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
	/// Mouse click.
	Click,
	/// Input value change (fires per keystroke).
	Input,
	/// Committed value change.
	Change,
	/// Form submission.
	Submit,
	/// Key pressed down.
	KeyDown,
	/// Element gained focus.
	Focus,
	/// Element lost focus.
	Blur,
}

impl EventType {
	/// The DOM event name, as passed to `addEventListener`.
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Click => "click",
			EventType::Input => "input",
			EventType::Change => "change",
			EventType::Submit => "submit",
			EventType::KeyDown => "keydown",
			EventType::Focus => "focus",
			EventType::Blur => "blur",
		}
	}
}

/// A DOM element handle.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct Element {
	inner: web_sys::Element,
}

#[cfg(target_arch = "wasm32")]
impl Element {
	/// Wraps a raw `web_sys::Element`.
	pub fn new(inner: web_sys::Element) -> Self {
		Self { inner }
	}

	/// The underlying `web_sys::Element`.
	pub fn inner(&self) -> &web_sys::Element {
		&self.inner
	}

	/// Sets an attribute.
	pub fn set_attribute(&self, name: &str, value: &str) -> Result<(), wasm_bindgen::JsValue> {
		self.inner.set_attribute(name, value)
	}

	/// Appends a child element.
	pub fn append_child(&self, child: Element) -> Result<(), wasm_bindgen::JsValue> {
		self.inner.append_child(child.inner()).map(|_| ())
	}
}

/// A DOM element handle (non-WASM placeholder).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct Element;

#[cfg(not(target_arch = "wasm32"))]
impl Element {
	/// Sets an attribute (no-op outside the browser).
	pub fn set_attribute(&self, _name: &str, _value: &str) -> Result<(), ()> {
		Ok(())
	}

	/// Appends a child element (no-op outside the browser).
	pub fn append_child(&self, _child: Element) -> Result<(), ()> {
		Ok(())
	}
}

/// The browser document.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct Document {
	inner: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl Document {
	/// The underlying `web_sys::Document`.
	pub fn inner(&self) -> &web_sys::Document {
		&self.inner
	}

	/// Creates a new element by tag name.
	pub fn create_element(&self, tag: &str) -> Result<Element, wasm_bindgen::JsValue> {
		self.inner.create_element(tag).map(Element::new)
	}

	/// Looks up an element by id.
	pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
		self.inner.get_element_by_id(id).map(Element::new)
	}
}

/// The browser document (non-WASM placeholder).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct Document;

#[cfg(not(target_arch = "wasm32"))]
impl Document {
	/// Creates a new element by tag name (no-op outside the browser).
	pub fn create_element(&self, _tag: &str) -> Result<Element, ()> {
		Ok(Element)
	}

	/// Looks up an element by id (always `None` outside the browser).
	pub fn get_element_by_id(&self, _id: &str) -> Option<Element> {
		None
	}
}

/// Returns the browser document.
///
/// # Panics
///
/// Panics on WASM when no window/document is available (never the case in a
/// browser).
#[cfg(target_arch = "wasm32")]
pub fn document() -> Document {
	let window = web_sys::window().expect("window should be available");
	let inner = window.document().expect("document should be available");
	Document { inner }
}

/// Returns the document placeholder (non-WASM).
#[cfg(not(target_arch = "wasm32"))]
pub fn document() -> Document {
	Document
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_event_type_names() {
		assert_eq!(EventType::Click.as_str(), "click");
		assert_eq!(EventType::Input.as_str(), "input");
		assert_eq!(EventType::Submit.as_str(), "submit");
		assert_eq!(EventType::KeyDown.as_str(), "keydown");
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn test_placeholder_document() {
		let doc = document();
		assert!(doc.create_element("div").is_ok());
		assert!(doc.get_element_by_id("missing").is_none());
	}
}
