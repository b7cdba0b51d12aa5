//! Post components.
//!
//! `post_details` is the interactive detail view: it resolves post data
//! either from shell-supplied initial data or its own fetch, renders the
//! three fetch states, and wires the like button, overflow menu and
//! open-in-new-page affordance. `posts_list`/`post_card` build the home
//! feed.

use std::rc::Rc;

use postly_pages::builder::html::{a, button, div, img, li, span, ul};
use postly_pages::component::{IntoView, View};
use postly_pages::reactive::{Resource, ResourceState, Signal, create_resource};

#[cfg(client)]
use postly_pages::dom::EventType;

use crate::apps::post::client::api::{fetch_post_by_key, fetch_posts_by_key, post_key, posts_key};
use crate::apps::post::client::like::{LikeToggle, use_like_toggle};
use crate::apps::post::shared::types::Post;
use crate::core::client::components::common::{
	IconButtonSize, error_alert, icon_button, scale_loading, user_avatar,
};
use crate::core::client::components::icons::{more_horiz_icon, open_in_new_icon, thumb_up_icon};
use crate::core::client::session::current_user;

/// Inputs of [`post_details`].
#[derive(Debug, Clone)]
pub struct PostDetailsProps {
	/// The post to show.
	pub post_id: String,
	/// Whether the view is rendered inside an overlay.
	///
	/// Controls margins, action layout and the open-in-new-page affordance.
	pub is_in_modal: bool,
	/// Shell-supplied data, when the post (or its fetch error) is already
	/// known. `None` makes the view fetch for itself.
	pub initial: Option<Result<Post, String>>,
}

/// Post detail view.
///
/// Renders Loading, Error or the full interactive view, driven entirely by
/// the fetch state. A failed fetch stays in the error state until the
/// resource's own revalidation (window refocus) succeeds.
pub fn post_details(props: PostDetailsProps) -> View {
	let PostDetailsProps {
		post_id,
		is_in_modal,
		initial,
	} = props;

	let (state, resource): (Signal<ResourceState<Post>>, Option<Resource<Post>>) = match initial {
		Some(Ok(post)) => (Signal::new(ResourceState::Loaded(post)), None),
		Some(Err(message)) => (Signal::new(ResourceState::Error(message)), None),
		None => {
			let resource = create_resource(Some(post_key(&post_id)), fetch_post_by_key);
			(resource.state(), Some(resource))
		}
	};

	// One overflow menu flag per rendered instance, surviving re-renders of
	// the fetch state.
	let more_open = Signal::new(false);

	View::reactive(move || {
		// The resource lives as long as this region; dropping it would
		// cancel revalidation.
		let _keep_alive = &resource;
		match state.get() {
			ResourceState::Loading => scale_loading(true, 30),
			ResourceState::Error(message) => error_alert(&message),
			ResourceState::Loaded(post) => loaded_post_view(&post, is_in_modal, more_open.clone()),
		}
	})
}

/// The fully loaded, interactive detail view.
fn loaded_post_view(post: &Post, is_in_modal: bool, more_open: Signal<bool>) -> View {
	let viewer = current_user();
	let like = use_like_toggle(&post.likes, viewer.as_deref());

	let container_class = if is_in_modal {
		"post-details post-details--modal"
	} else {
		"post-details"
	};

	let profile_href = format!("/profile/{}", urlencoding::encode(&post.creator));

	let column1 = div().attr("class", "post-details__column1").child(
		a().attr("href", profile_href.clone())
			.child(user_avatar(post.creator_image.as_deref(), &post.creator, 48)),
	);

	let mut more_button = icon_button(
		more_horiz_icon(),
		"Open more options",
		IconButtonSize::Small,
		false,
		false,
	);
	#[cfg(client)]
	{
		let more_open = more_open.clone();
		more_button = more_button.on(EventType::Click, move |_event: web_sys::Event| {
			more_open.update(|open| *open = !*open);
		});
	}
	#[cfg(server)]
	{
		more_button = more_button.attr("data-reactive", "true");
	}

	let on_close: Rc<dyn Fn()> = {
		let more_open = more_open.clone();
		Rc::new(move || more_open.set(false))
	};
	let menu = post_more_options(
		more_open.clone(),
		on_close,
		post.id.clone(),
		post.creator.clone(),
	);

	let username_row = div()
		.attr("class", "post-details__username-row")
		.child(a().attr("href", profile_href).child(post.creator.clone()))
		.child(
			div().attr("class", "post-details__more").child(
				div()
					.attr("class", "post-details__more-anchor")
					.child(more_button)
					.child(menu),
			),
		);

	let message_row = div()
		.attr("class", "post-details__message")
		.child(post.message.clone());

	let image_row = div().attr("class", "post-details__image-container").child(
		div().attr("class", "post-details__image-wrapper").child(
			img()
				.attr("class", "post-details__image")
				.attr("src", post.image.clone())
				.attr("alt", post.title.clone())
				.attr("draggable", "false"),
		),
	);

	let mut actions = div().attr("class", "post-details__actions").child(
		div()
			.attr("class", "post-details__action")
			.child(like_button(like.clone(), post.id.clone()))
			.child(like_count_label(like.like_count.clone())),
	);
	if is_in_modal {
		actions = actions.child(
			div().attr("class", "post-details__action").child(
				a().attr("href", format!("/post/{}", urlencoding::encode(&post.id)))
					.attr("data-link", "true")
					.attr("class", "icon-button icon-button--small")
					.attr("aria-label", "View in new page")
					.child(open_in_new_icon()),
			),
		);
	}

	let column2 = div()
		.attr("class", "post-details__column2")
		.child(username_row)
		.child(message_row)
		.child(image_row)
		.child(tags_row(&post.tags))
		.child(actions)
		.child(mutation_error_display(like.error.clone()));

	div()
		.attr("class", container_class)
		.child(column1)
		.child(column2)
		.into_view()
}

/// Tags row, rendered only when at least one tag exists.
fn tags_row(tags: &[String]) -> View {
	if tags.is_empty() {
		return View::empty();
	}
	ul().attr("class", "post-details__tags")
		.children(tags.iter().map(|tag| {
			li().attr("class", "post-details__tag").child(
				a().attr("href", format!("/tagged/{}", urlencoding::encode(tag)))
					.child(format!("#{tag}")),
			)
		}))
		.into_view()
}

/// Like control, re-rendered on toggle and in-flight changes.
fn like_button(like: LikeToggle, post_id: String) -> View {
	View::reactive(move || {
		let is_liked = like.is_liked.get();
		let loading = like.loading.get();

		let mut control = icon_button(
			thumb_up_icon(),
			"Like post",
			IconButtonSize::Small,
			is_liked,
			loading,
		);
		#[cfg(client)]
		{
			let like = like.clone();
			let post_id = post_id.clone();
			control = control.on(EventType::Click, move |_event: web_sys::Event| {
				like.submit(&post_id);
			});
		}
		#[cfg(server)]
		{
			let _ = &post_id;
			control = control.attr("data-reactive", "true");
		}
		control.into_view()
	})
}

/// Reactive like count; always the liker set length as last known.
fn like_count_label(count: Signal<usize>) -> View {
	View::reactive(move || span().child(count.get().to_string()).into_view())
}

/// Shows the last mutation failure, if any.
fn mutation_error_display(error: Signal<Option<String>>) -> View {
	View::reactive(move || match error.get() {
		Some(message) => error_alert(&message),
		None => View::empty(),
	})
}

/// Overflow menu for a post.
///
/// Visibility is owned by the caller's signal; the menu itself only ever
/// requests closing through `on_close`.
pub fn post_more_options(
	is_open: Signal<bool>,
	on_close: Rc<dyn Fn()>,
	post_id: String,
	post_creator: String,
) -> View {
	View::reactive(move || {
		if !is_open.get() {
			return View::empty();
		}

		let open_post = a()
			.attr("class", "post-more-options__item")
			.attr("href", format!("/post/{}", urlencoding::encode(&post_id)))
			.attr("data-link", "true")
			.child("Open post");

		let mut report = button()
			.attr("class", "post-more-options__item")
			.attr("type", "button")
			.child("Report post");
		let mut close = button()
			.attr("class", "post-more-options__item")
			.attr("type", "button")
			.child("Close");

		#[cfg(client)]
		{
			let on_close_after_report = on_close.clone();
			let creator = post_creator.clone();
			report = report.on(EventType::Click, move |_event: web_sys::Event| {
				postly_pages::info_log!("reported post by {}", creator);
				on_close_after_report();
			});

			let on_close_direct = on_close.clone();
			close = close.on(EventType::Click, move |_event: web_sys::Event| {
				on_close_direct();
			});
		}
		#[cfg(server)]
		{
			let _ = (&on_close, &post_creator);
			report = report.attr("data-reactive", "true");
			close = close.attr("data-reactive", "true");
		}

		div()
			.attr("class", "post-more-options")
			.attr("role", "menu")
			.child(open_post)
			.child(report)
			.child(close)
			.into_view()
	})
}

/// Feed card for one post, linking to its detail page.
pub fn post_card(post: &Post) -> View {
	let likes = post.likes.len();
	let like_label = if likes == 1 {
		"1 like".to_string()
	} else {
		format!("{likes} likes")
	};

	a().attr("class", "post-card")
		.attr("href", format!("/post/{}", urlencoding::encode(&post.id)))
		.attr("data-link", "true")
		.child(
			img()
				.attr("class", "post-card__image")
				.attr("src", post.image.clone())
				.attr("alt", post.title.clone())
				.attr("draggable", "false"),
		)
		.child(
			div()
				.attr("class", "post-card__body")
				.child(div().attr("class", "post-card__creator").child(post.creator.clone()))
				.child(div().attr("class", "post-card__message").child(post.message.clone()))
				.child(div().attr("class", "post-card__likes").child(like_label)),
		)
		.into_view()
}

/// Home feed: fetches the post list and renders loading/error/empty/grid.
pub fn posts_list(limit: usize) -> View {
	let resource = create_resource(Some(posts_key(limit)), fetch_posts_by_key);
	let state = resource.state();

	View::reactive(move || {
		let _keep_alive = &resource;
		match state.get() {
			ResourceState::Loading => scale_loading(true, 30),
			ResourceState::Error(message) => error_alert(&message),
			ResourceState::Loaded(posts) if posts.is_empty() => div()
				.attr("class", "posts-empty")
				.child("No posts yet. Be the first to share something!")
				.into_view(),
			ResourceState::Loaded(posts) => ul()
				.attr("class", "posts-grid")
				.children(posts.iter().map(|post| li().child(post_card(post))))
				.into_view(),
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::client::session::set_current_user;
	use serial_test::serial;

	fn sample_post() -> Post {
		Post {
			id: "p1".to_string(),
			creator: "alice".to_string(),
			creator_image: None,
			message: "hi".to_string(),
			image: "/images/p1.jpg".to_string(),
			tags: vec!["fun".to_string(), "meme".to_string()],
			likes: vec!["bob".to_string()],
			title: "a post".to_string(),
		}
	}

	fn details(post: Post, is_in_modal: bool) -> String {
		post_details(PostDetailsProps {
			post_id: post.id.clone(),
			is_in_modal,
			initial: Some(Ok(post)),
		})
		.render_to_string()
	}

	#[test]
	#[serial]
	fn test_loaded_view_for_viewer_in_liker_set() {
		set_current_user(Some("bob".to_string()));
		let html = details(sample_post(), false);
		set_current_user(None);

		// Active like control with count "1"
		assert!(html.contains("icon-button--active"));
		assert!(html.contains("<span>1</span>"));
		// Tag links
		assert!(html.contains("href=\"/tagged/fun\""));
		assert!(html.contains("href=\"/tagged/meme\""));
		assert!(html.contains("#fun"));
		assert!(html.contains("#meme"));
		// Creator links to the profile
		assert!(html.contains("href=\"/profile/alice\""));
		// Message as plain text
		assert!(html.contains("hi"));
	}

	#[test]
	#[serial]
	fn test_loaded_view_for_other_viewer_is_inactive() {
		set_current_user(Some("carol".to_string()));
		let html = details(sample_post(), false);
		set_current_user(None);

		assert!(!html.contains("icon-button--active"));
		assert!(html.contains("<span>1</span>"));
	}

	#[test]
	#[serial]
	fn test_like_count_equals_liker_set_length() {
		let mut post = sample_post();
		post.likes = vec!["a".into(), "b".into(), "c".into()];
		let html = details(post, false);
		assert!(html.contains("<span>3</span>"));
	}

	#[test]
	#[serial]
	fn test_loading_state_renders_spinner() {
		let html = post_details(PostDetailsProps {
			post_id: "p1".to_string(),
			is_in_modal: true,
			initial: None,
		})
		.render_to_string();
		assert!(html.contains("scale-loading"));
		assert!(!html.contains("post-details__column2"));
	}

	#[test]
	#[serial]
	fn test_error_state_renders_message() {
		let html = post_details(PostDetailsProps {
			post_id: "p1".to_string(),
			is_in_modal: false,
			initial: Some(Err("post not found".to_string())),
		})
		.render_to_string();
		assert!(html.contains("role=\"alert\""));
		assert!(html.contains("post not found"));
		assert!(!html.contains("post-details__column2"));
	}

	#[test]
	#[serial]
	fn test_tags_row_absent_without_tags() {
		let mut post = sample_post();
		post.tags.clear();
		let html = details(post, false);
		assert!(!html.contains("post-details__tags"));
	}

	#[test]
	#[serial]
	fn test_open_in_new_page_only_in_modal() {
		let html = details(sample_post(), true);
		assert!(html.contains("post-details--modal"));
		assert!(html.contains("aria-label=\"View in new page\""));
		assert!(html.contains("href=\"/post/p1\""));

		let html = details(sample_post(), false);
		assert!(!html.contains("post-details--modal"));
		assert!(!html.contains("View in new page"));
	}

	#[test]
	#[serial]
	fn test_more_options_menu_closed_by_default() {
		let html = details(sample_post(), false);
		assert!(html.contains("aria-label=\"Open more options\""));
		assert!(!html.contains("post-more-options\""));
	}

	#[test]
	#[serial]
	fn test_more_options_open_and_close() {
		let is_open = Signal::new(false);
		let close_flag = is_open.clone();
		let menu = post_more_options(
			is_open.clone(),
			Rc::new(move || close_flag.set(false)),
			"p1".to_string(),
			"alice".to_string(),
		);

		assert_eq!(menu.render_to_string(), "");

		is_open.set(true);
		let html = menu.render_to_string();
		assert!(html.contains("role=\"menu\""));
		assert!(html.contains("Open post"));
		assert!(html.contains("href=\"/post/p1\""));

		// The menu's collaborator requests closing
		is_open.set(false);
		assert_eq!(menu.render_to_string(), "");
	}

	#[test]
	#[serial]
	fn test_menus_are_independent_per_instance() {
		let first = Signal::new(false);
		let second = Signal::new(false);
		let first_menu = post_more_options(
			first.clone(),
			Rc::new(|| {}),
			"p1".to_string(),
			"alice".to_string(),
		);
		let second_menu = post_more_options(
			second.clone(),
			Rc::new(|| {}),
			"p2".to_string(),
			"carol".to_string(),
		);

		first.set(true);
		assert!(!first_menu.render_to_string().is_empty());
		assert!(second_menu.render_to_string().is_empty());
	}

	#[test]
	#[serial]
	fn test_post_card_links_to_detail() {
		let html = post_card(&sample_post()).render_to_string();
		assert!(html.contains("href=\"/post/p1\""));
		assert!(html.contains("data-link=\"true\""));
		assert!(html.contains("1 like"));
	}

	#[test]
	#[serial]
	fn test_posts_list_starts_loading() {
		let html = posts_list(12).render_to_string();
		assert!(html.contains("scale-loading"));
	}
}
