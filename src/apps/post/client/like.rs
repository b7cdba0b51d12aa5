//! Like toggle handler.
//!
//! Local state is derived from the liker set via `is_liked_by`, flipped
//! optimistically on submit, and explicitly reconciled when the mutation
//! settles:
//! - success: adopt the server's liker set when the acknowledgement carries
//!   one, otherwise keep the optimistic values;
//! - failure: revert flag and count to their pre-toggle snapshot and surface
//!   the error message.
//!
//! A `loading` flag guards against re-entrancy: submits while a mutation is
//! in flight are no-ops, so each settled round-trip corresponds to exactly
//! one request.

use postly_pages::reactive::Signal;

use crate::apps::post::shared::types::{LikeAck, is_liked_by};

/// Reactive state of one post's like control.
#[derive(Clone)]
pub struct LikeToggle {
	/// Whether the current viewer has liked the post.
	pub is_liked: Signal<bool>,
	/// Displayed like count; always the liker set length as last known.
	pub like_count: Signal<usize>,
	/// True while a mutation is in flight; disables the control.
	pub loading: Signal<bool>,
	/// Message of the last failed mutation, if any.
	pub error: Signal<Option<String>>,
	viewer: Option<String>,
}

/// Pre-toggle values, kept for rollback.
#[derive(Debug, Clone, Copy)]
struct LikeSnapshot {
	was_liked: bool,
	was_count: usize,
}

/// Creates the like state for a post's liker set and the current viewer.
pub fn use_like_toggle(likes: &[String], viewer: Option<&str>) -> LikeToggle {
	let is_liked = viewer.map(|v| is_liked_by(likes, v)).unwrap_or(false);
	LikeToggle {
		is_liked: Signal::new(is_liked),
		like_count: Signal::new(likes.len()),
		loading: Signal::new(false),
		error: Signal::new(None),
		viewer: viewer.map(str::to_string),
	}
}

impl LikeToggle {
	/// The viewer this state was derived for.
	pub fn viewer(&self) -> Option<&str> {
		self.viewer.as_deref()
	}

	/// Submits a like/unlike for `post_id`.
	///
	/// No-op while a mutation is in flight or when no viewer is signed in
	/// (liking requires authentication, which is owned by the backend).
	pub fn submit(&self, post_id: &str) {
		if self.loading.get_untracked() {
			return;
		}
		if self.viewer.is_none() {
			return;
		}

		let snapshot = LikeSnapshot {
			was_liked: self.is_liked.get_untracked(),
			was_count: self.like_count.get_untracked(),
		};

		// Optimistic update, reconciled below once the call settles.
		self.is_liked.set(!snapshot.was_liked);
		self.like_count.set(if snapshot.was_liked {
			snapshot.was_count.saturating_sub(1)
		} else {
			snapshot.was_count + 1
		});
		self.error.set(None);
		self.loading.set(true);

		#[cfg(client)]
		{
			let this = self.clone();
			let post_id = post_id.to_string();
			postly_pages::spawn::spawn_task(async move {
				match crate::apps::post::client::api::like_post(&post_id).await {
					Ok(ack) => this.reconcile(ack),
					Err(err) => this.rollback(snapshot, err.to_string()),
				}
			});
		}
		#[cfg(server)]
		{
			// Mutations are client-only; the in-flight guard still holds.
			let _ = post_id;
		}
	}

	/// Applies a successful acknowledgement.
	#[cfg_attr(server, allow(dead_code))]
	fn reconcile(&self, ack: LikeAck) {
		self.loading.set(false);
		if let Some(likes) = ack.likes {
			self.like_count.set(likes.len());
			if let Some(viewer) = &self.viewer {
				self.is_liked.set(is_liked_by(&likes, viewer));
			}
		}
	}

	/// Reverts the optimistic update after a failed mutation.
	#[cfg_attr(server, allow(dead_code))]
	fn rollback(&self, snapshot: LikeSnapshot, message: String) {
		self.loading.set(false);
		self.is_liked.set(snapshot.was_liked);
		self.like_count.set(snapshot.was_count);
		self.error.set(Some(message));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	fn likers(names: &[&str]) -> Vec<String> {
		names.iter().map(|n| n.to_string()).collect()
	}

	#[test]
	#[serial]
	fn test_initial_state_derived_from_liker_set() {
		let toggle = use_like_toggle(&likers(&["bob"]), Some("bob"));
		assert!(toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 1);
		assert!(!toggle.loading.get_untracked());

		let toggle = use_like_toggle(&likers(&["bob"]), Some("alice"));
		assert!(!toggle.is_liked.get_untracked());
	}

	#[test]
	#[serial]
	fn test_submit_flips_optimistically() {
		let toggle = use_like_toggle(&likers(&["bob"]), Some("alice"));
		toggle.submit("p1");
		assert!(toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 2);
		assert!(toggle.loading.get_untracked());
		assert_eq!(toggle.error.get_untracked(), None);
	}

	#[test]
	#[serial]
	fn test_unlike_decrements_count() {
		let toggle = use_like_toggle(&likers(&["bob"]), Some("bob"));
		toggle.submit("p1");
		assert!(!toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 0);
	}

	#[test]
	#[serial]
	fn test_in_flight_guard_makes_repeat_submit_noop() {
		let toggle = use_like_toggle(&likers(&["bob"]), Some("alice"));
		toggle.submit("p1");
		let after_first = toggle.like_count.get_untracked();

		// Rapid repeated invocations while loading: no further change.
		toggle.submit("p1");
		toggle.submit("p1");
		assert_eq!(toggle.like_count.get_untracked(), after_first);
		assert!(toggle.is_liked.get_untracked());
	}

	#[test]
	#[serial]
	fn test_submit_without_viewer_is_noop() {
		let toggle = use_like_toggle(&likers(&["bob"]), None);
		toggle.submit("p1");
		assert!(!toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 1);
		assert!(!toggle.loading.get_untracked());
	}

	#[test]
	#[serial]
	fn test_rollback_reverts_to_snapshot() {
		let toggle = use_like_toggle(&likers(&["bob"]), Some("alice"));
		toggle.submit("p1");

		toggle.rollback(
			LikeSnapshot {
				was_liked: false,
				was_count: 1,
			},
			"network error: offline".to_string(),
		);

		assert!(!toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 1);
		assert!(!toggle.loading.get_untracked());
		assert_eq!(
			toggle.error.get_untracked(),
			Some("network error: offline".to_string())
		);
	}

	#[test]
	#[serial]
	fn test_reconcile_adopts_server_liker_set() {
		let toggle = use_like_toggle(&likers(&["bob"]), Some("alice"));
		toggle.submit("p1");

		toggle.reconcile(LikeAck {
			likes: Some(likers(&["bob", "alice", "carol"])),
		});

		assert!(toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 3);
		assert!(!toggle.loading.get_untracked());
	}

	#[test]
	#[serial]
	fn test_reconcile_without_liker_set_keeps_optimistic_values() {
		let toggle = use_like_toggle(&likers(&["bob"]), Some("alice"));
		toggle.submit("p1");

		toggle.reconcile(LikeAck { likes: None });

		assert!(toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 2);
		assert!(!toggle.loading.get_untracked());
	}

	#[test]
	#[serial]
	fn test_guard_releases_after_settle() {
		let toggle = use_like_toggle(&likers(&[]), Some("alice"));
		toggle.submit("p1");
		toggle.reconcile(LikeAck { likes: None });

		// Settled: the next submit goes through again.
		toggle.submit("p1");
		assert!(!toggle.is_liked.get_untracked());
		assert_eq!(toggle.like_count.get_untracked(), 0);
	}
}
