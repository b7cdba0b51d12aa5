//! Browser-side post detail tests (wasm-pack / wasm-bindgen-test).

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use postly::apps::post::client::components::{PostDetailsProps, post_details};
use postly::apps::post::shared::types::Post;
use postly::core::client::session::set_current_user;
use postly_pages::dom::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_post() -> Post {
	Post {
		id: "p1".to_string(),
		creator: "alice".to_string(),
		creator_image: None,
		message: "hi".to_string(),
		image: "/images/p1.jpg".to_string(),
		tags: vec!["fun".to_string()],
		likes: vec!["bob".to_string()],
		title: "a post".to_string(),
	}
}

fn mount_details(post: Post) -> web_sys::Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let host = document.create_element("div").unwrap();
	document
		.document_element()
		.unwrap()
		.append_child(&host)
		.unwrap();

	post_details(PostDetailsProps {
		post_id: post.id.clone(),
		is_in_modal: false,
		initial: Some(Ok(post)),
	})
	.mount(&Element::new(host.clone()))
	.unwrap();

	host
}

#[wasm_bindgen_test]
fn renders_loaded_post() {
	set_current_user(Some("bob".to_string()));
	let host = mount_details(sample_post());
	set_current_user(None);

	let html = host.inner_html();
	assert!(html.contains("alice"));
	assert!(html.contains("#fun"));
	assert!(html.contains("icon-button--active"));
}

#[wasm_bindgen_test]
fn like_click_flips_optimistically() {
	set_current_user(Some("carol".to_string()));
	let host = mount_details(sample_post());

	assert!(!host.inner_html().contains("icon-button--active"));

	let button = host
		.query_selector("button[aria-label=\"Like post\"]")
		.unwrap()
		.unwrap();
	let event = web_sys::Event::new("click").unwrap();
	button.dispatch_event(&event).unwrap();

	// Optimistic update lands synchronously; the mutation settles later.
	let html = host.inner_html();
	assert!(html.contains("icon-button--active"));
	assert!(html.contains("<span>2</span>"));

	set_current_user(None);
}
