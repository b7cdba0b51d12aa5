//! Profile API endpoints.

use crate::apps::profile::shared::types::ProfileSettingsForm;
use crate::core::client::http::{FetchError, patch_json};

/// Profile settings endpoint for the signed-in user.
pub const PROFILE_ENDPOINT: &str = "/api/users/me";

/// Saves the profile settings, returning the stored values.
pub async fn update_profile(form: &ProfileSettingsForm) -> Result<ProfileSettingsForm, FetchError> {
	patch_json(PROFILE_ENDPOINT, form).await
}
