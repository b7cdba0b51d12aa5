//! Shared types for the profile application.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile settings form payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct ProfileSettingsForm {
	/// Display name, also the profile URL segment.
	#[validate(length(
		min = 3,
		max = 32,
		message = "Username must be between 3 and 32 characters"
	))]
	pub username: String,
	/// Avatar image URL, when set.
	#[serde(rename = "avatarUrl", skip_serializing_if = "Option::is_none")]
	#[validate(length(max = 300, message = "Avatar URL must be at most 300 characters"))]
	pub avatar_url: Option<String>,
}

impl ProfileSettingsForm {
	/// Builds a validated form from raw input values.
	///
	/// Whitespace is trimmed; an empty avatar field means "unset". Returns
	/// the first validation message on failure.
	pub fn from_input(username: &str, avatar_url: &str) -> Result<Self, String> {
		let form = Self {
			username: username.trim().to_string(),
			avatar_url: {
				let trimmed = avatar_url.trim();
				if trimmed.is_empty() {
					None
				} else {
					Some(trimmed.to_string())
				}
			},
		};
		form.validate().map_err(first_validation_message)?;
		Ok(form)
	}
}

fn first_validation_message(errors: validator::ValidationErrors) -> String {
	errors
		.field_errors()
		.into_values()
		.flatten()
		.filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
		.next()
		.unwrap_or_else(|| "Invalid input".to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_valid_form() {
		let form = ProfileSettingsForm::from_input("alice", "/images/alice.png").unwrap();
		assert_eq!(form.username, "alice");
		assert_eq!(form.avatar_url.as_deref(), Some("/images/alice.png"));
	}

	#[test]
	fn test_empty_avatar_is_unset() {
		let form = ProfileSettingsForm::from_input("alice", "   ").unwrap();
		assert_eq!(form.avatar_url, None);

		let json = serde_json::to_string(&form).unwrap();
		assert!(!json.contains("avatarUrl"));
	}

	#[test]
	fn test_short_username_rejected() {
		let err = ProfileSettingsForm::from_input("ab", "").unwrap_err();
		assert!(err.contains("between 3 and 32"));
	}

	#[test]
	fn test_username_is_trimmed() {
		let form = ProfileSettingsForm::from_input("  alice  ", "").unwrap();
		assert_eq!(form.username, "alice");
	}

	#[test]
	fn test_wire_shape_uses_camel_case() {
		let form = ProfileSettingsForm {
			username: "alice".to_string(),
			avatar_url: Some("/a.png".to_string()),
		};
		let json = serde_json::to_string(&form).unwrap();
		assert_eq!(json, r#"{"username":"alice","avatarUrl":"/a.png"}"#);
	}
}
