//! HTML element builder helpers.
//!
//! Free functions named after their tags, so component code reads close to
//! the markup it produces:
//!
//! ```ignore
//! div().attr("class", "card")
//! 	.child(h1().child("Hello"))
//! 	.child(p().child("World"))
//! ```

use crate::component::ElementView;

macro_rules! element_fns {
	($($(#[$doc:meta])* $name:ident => $tag:literal),* $(,)?) => {
		$(
			$(#[$doc])*
			pub fn $name() -> ElementView {
				ElementView::new($tag)
			}
		)*
	};
}

element_fns! {
	/// `<a>` anchor element.
	a => "a",
	/// `<button>` element.
	button => "button",
	/// `<div>` element.
	div => "div",
	/// `<footer>` element.
	footer => "footer",
	/// `<form>` element.
	form => "form",
	/// `<h1>` element.
	h1 => "h1",
	/// `<h2>` element.
	h2 => "h2",
	/// `<h3>` element.
	h3 => "h3",
	/// `<header>` element.
	header => "header",
	/// `<img>` element (void).
	img => "img",
	/// `<input>` element (void).
	input => "input",
	/// `<label>` element.
	label => "label",
	/// `<li>` element.
	li => "li",
	/// `<main>` element.
	main => "main",
	/// `<nav>` element.
	nav => "nav",
	/// `<ol>` element.
	ol => "ol",
	/// `<p>` element.
	p => "p",
	/// `<path>` element (SVG).
	path => "path",
	/// `<section>` element.
	section => "section",
	/// `<span>` element.
	span => "span",
	/// `<svg>` element.
	svg => "svg",
	/// `<textarea>` element.
	textarea => "textarea",
	/// `<ul>` element.
	ul => "ul",
}
