//! Post API endpoints.
//!
//! Request shapes are fixed by the existing backend:
//! - `GET /api/posts?limit=<N>` - feed
//! - `GET /api/posts/post/<id>` - single post
//! - `PUT /api/posts/like` with `{"postId": ...}` - like toggle

use crate::apps::post::shared::types::{LikeAck, LikeRequest, Post};
use crate::core::client::http::{FetchError, get_json, put_json};

/// Feed endpoint base path.
pub const POSTS_ENDPOINT: &str = "/api/posts";

/// Like mutation endpoint.
pub const LIKE_ENDPOINT: &str = "/api/posts/like";

/// Builds the feed fetch key for a result limit.
pub fn posts_key(limit: usize) -> String {
	format!(
		"{}?{}={}",
		POSTS_ENDPOINT,
		urlencoding::encode("limit"),
		limit
	)
}

/// Builds the detail fetch key for a post id.
pub fn post_key(post_id: &str) -> String {
	format!("{}/post/{}", POSTS_ENDPOINT, urlencoding::encode(post_id))
}

/// Fetches the feed by its resource key.
///
/// Takes the already-built key so it can serve directly as a resource
/// fetcher; errors are flattened to their display message.
pub async fn fetch_posts_by_key(key: String) -> Result<Vec<Post>, String> {
	get_json::<Vec<Post>>(&key).await.map_err(|e| e.to_string())
}

/// Fetches a single post by its resource key.
pub async fn fetch_post_by_key(key: String) -> Result<Post, String> {
	get_json::<Post>(&key).await.map_err(|e| e.to_string())
}

/// Issues the like mutation for a post.
pub async fn like_post(post_id: &str) -> Result<LikeAck, FetchError> {
	put_json(
		LIKE_ENDPOINT,
		&LikeRequest {
			post_id: post_id.to_string(),
		},
	)
	.await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_posts_key() {
		assert_eq!(posts_key(12), "/api/posts?limit=12");
	}

	#[test]
	fn test_post_key() {
		assert_eq!(post_key("p1"), "/api/posts/post/p1");
	}

	#[test]
	fn test_post_key_encodes_id() {
		assert_eq!(post_key("a b"), "/api/posts/post/a%20b");
	}
}
