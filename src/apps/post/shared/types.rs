//! Shared types for the post application.
//!
//! Wire-compatible with the existing backend JSON: posts arrive with `_id`
//! and camelCase field names.

use serde::{Deserialize, Serialize};

/// A user-authored content item.
///
/// Created server-side and fetched read-only; the only indirect mutation is
/// the like action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
	/// Backend identifier.
	#[serde(rename = "_id")]
	pub id: String,
	/// Creator's username.
	pub creator: String,
	/// Creator's avatar URL, when set.
	#[serde(rename = "creatorImage", default, skip_serializing_if = "Option::is_none")]
	pub creator_image: Option<String>,
	/// Message text, rendered as plain text.
	pub message: String,
	/// Post image URL.
	pub image: String,
	/// Ordered tag list.
	#[serde(default)]
	pub tags: Vec<String>,
	/// Identities of viewers who liked the post.
	#[serde(default)]
	pub likes: Vec<String>,
	/// Post title (used as image alt text).
	#[serde(default)]
	pub title: String,
}

/// Like mutation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRequest {
	/// The post to like or unlike.
	#[serde(rename = "postId")]
	pub post_id: String,
}

/// Like mutation acknowledgement.
///
/// The backend may return the updated liker set; when it does, the client
/// reconciles its optimistic state against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeAck {
	/// Updated liker set, when provided.
	#[serde(default)]
	pub likes: Option<Vec<String>>,
}

/// Whether `viewer` appears in the liker set.
///
/// The single derivation the like toggle's local state is computed from.
pub fn is_liked_by(likes: &[String], viewer: &str) -> bool {
	likes.iter().any(|liker| liker == viewer)
}
