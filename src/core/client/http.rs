//! HTTP plumbing shared by the apps.
//!
//! All endpoints speak JSON and share one error payload convention: a body
//! of the form `{"error": {"message": "..."}}` signals a failure regardless
//! of the HTTP status code, and its message is what views display.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy for API calls.
///
/// Every failure is local to the view that issued the call; nothing here is
/// fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),
	/// The backend reported an application error via the error payload
	/// convention.
	#[error("{0}")]
	Api(String),
	/// Non-success status without a decodable error payload.
	#[error("server returned {code}: {message}")]
	Status {
		/// HTTP status code.
		code: u16,
		/// HTTP status text.
		message: String,
	},
	/// The response body could not be decoded.
	#[error("malformed response: {0}")]
	Decode(String),
}

/// The backend's error payload convention: `{"error": {"message": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
	/// The error wrapper object.
	pub error: ApiErrorMessage,
}

/// Inner error object carrying the display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorMessage {
	/// Human-readable message, rendered in place of content.
	pub message: String,
}

/// Decodes a response body, honoring the error payload convention.
///
/// An error payload wins over the status code; a non-success status without
/// one becomes [`FetchError::Status`].
pub fn decode_body<T: DeserializeOwned>(
	status: u16,
	status_text: &str,
	body: &str,
) -> Result<T, FetchError> {
	if let Ok(err_body) = serde_json::from_str::<ApiErrorBody>(body) {
		return Err(FetchError::Api(err_body.error.message));
	}
	if !(200..300).contains(&status) {
		return Err(FetchError::Status {
			code: status,
			message: status_text.to_string(),
		});
	}
	serde_json::from_str::<T>(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Issues a GET request and decodes the JSON response.
#[cfg(client)]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
	use gloo_net::http::Request;

	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| FetchError::Network(e.to_string()))?;

	let status = response.status();
	let status_text = response.status_text();
	let body = response
		.text()
		.await
		.map_err(|e| FetchError::Decode(e.to_string()))?;

	decode_body(status, &status_text, &body)
}

/// Issues a PUT request with a JSON body and decodes the JSON response.
#[cfg(client)]
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
	url: &str,
	payload: &B,
) -> Result<T, FetchError> {
	use gloo_net::http::Request;

	let request = Request::put(url)
		.json(payload)
		.map_err(|e| FetchError::Decode(e.to_string()))?;

	let response = request
		.send()
		.await
		.map_err(|e| FetchError::Network(e.to_string()))?;

	let status = response.status();
	let status_text = response.status_text();
	let body = response
		.text()
		.await
		.map_err(|e| FetchError::Decode(e.to_string()))?;

	decode_body(status, &status_text, &body)
}

/// Issues a PATCH request with a JSON body and decodes the JSON response.
#[cfg(client)]
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
	url: &str,
	payload: &B,
) -> Result<T, FetchError> {
	use gloo_net::http::Request;

	let request = Request::patch(url)
		.json(payload)
		.map_err(|e| FetchError::Decode(e.to_string()))?;

	let response = request
		.send()
		.await
		.map_err(|e| FetchError::Network(e.to_string()))?;

	let status = response.status();
	let status_text = response.status_text();
	let body = response
		.text()
		.await
		.map_err(|e| FetchError::Decode(e.to_string()))?;

	decode_body(status, &status_text, &body)
}

/// API calls are client-only (non-WASM stub).
#[cfg(server)]
pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, FetchError> {
	Err(FetchError::Network(
		"API calls not supported outside the browser".to_string(),
	))
}

/// API calls are client-only (non-WASM stub).
#[cfg(server)]
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
	_url: &str,
	_payload: &B,
) -> Result<T, FetchError> {
	Err(FetchError::Network(
		"API calls not supported outside the browser".to_string(),
	))
}

/// API calls are client-only (non-WASM stub).
#[cfg(server)]
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
	_url: &str,
	_payload: &B,
) -> Result<T, FetchError> {
	Err(FetchError::Network(
		"API calls not supported outside the browser".to_string(),
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq, serde::Deserialize)]
	struct Payload {
		value: i32,
	}

	#[test]
	fn test_decode_success() {
		let result: Payload = decode_body(200, "OK", r#"{"value": 7}"#).unwrap();
		assert_eq!(result, Payload { value: 7 });
	}

	#[test]
	fn test_decode_error_payload_convention() {
		let result: Result<Payload, _> =
			decode_body(200, "OK", r#"{"error": {"message": "post not found"}}"#);
		assert_eq!(result, Err(FetchError::Api("post not found".to_string())));
	}

	#[test]
	fn test_decode_error_payload_wins_over_status() {
		let result: Result<Payload, _> =
			decode_body(404, "Not Found", r#"{"error": {"message": "gone"}}"#);
		assert_eq!(result, Err(FetchError::Api("gone".to_string())));
	}

	#[test]
	fn test_decode_status_error_without_payload() {
		let result: Result<Payload, _> = decode_body(500, "Internal Server Error", "oops");
		assert_eq!(
			result,
			Err(FetchError::Status {
				code: 500,
				message: "Internal Server Error".to_string()
			})
		);
	}

	#[test]
	fn test_decode_malformed_success_body() {
		let result: Result<Payload, _> = decode_body(200, "OK", "not json");
		assert!(matches!(result, Err(FetchError::Decode(_))));
	}

	#[test]
	fn test_fetch_error_display() {
		assert_eq!(
			FetchError::Api("post not found".to_string()).to_string(),
			"post not found"
		);
		assert_eq!(
			FetchError::Status {
				code: 503,
				message: "Service Unavailable".to_string()
			}
			.to_string(),
			"server returned 503: Service Unavailable"
		);
	}
}
