//! Profile settings components.

use postly_pages::builder::html::{button, div, input, label};
use postly_pages::component::{IntoView, View};
use postly_pages::reactive::Signal;

#[cfg(client)]
use postly_pages::dom::EventType;

use crate::apps::profile::shared::types::ProfileSettingsForm;
use crate::core::client::components::common::error_alert;
use crate::core::client::session::current_user;

/// Profile settings form: username and avatar URL with validation.
pub fn profile_settings() -> View {
	let username = Signal::new(current_user().unwrap_or_default());
	let avatar_url = Signal::new(String::new());
	let saving = Signal::new(false);
	let error = Signal::new(None::<String>);
	let saved = Signal::new(false);

	let fields = div()
		.child(text_field("username", "Username", username.clone()))
		.child(text_field("avatarUrl", "Avatar URL", avatar_url.clone()));

	let save = save_button(
		username,
		avatar_url,
		saving.clone(),
		error.clone(),
		saved.clone(),
	);

	div()
		.child(fields)
		.child(save)
		.child(status_display(error, saved))
		.into_view()
}

/// Labeled text input bound to a signal.
fn text_field(id: &'static str, text: &'static str, value: Signal<String>) -> View {
	let mut field = input()
		.attr("type", "text")
		.attr("id", id)
		.attr("name", id)
		.attr("value", value.get_untracked());

	#[cfg(client)]
	{
		use wasm_bindgen::JsCast;

		field = field.on(EventType::Input, move |event: web_sys::Event| {
			if let Some(target) = event.target()
				&& let Ok(input_el) = target.dyn_into::<web_sys::HtmlInputElement>()
			{
				value.set(input_el.value());
			}
		});
	}
	#[cfg(server)]
	{
		field = field.attr("data-reactive", "true");
	}

	div()
		.attr("class", "form-field")
		.child(label().attr("for", id).child(text))
		.child(field)
		.into_view()
}

/// Save button, disabled while a save is in flight.
fn save_button(
	username: Signal<String>,
	avatar_url: Signal<String>,
	saving: Signal<bool>,
	error: Signal<Option<String>>,
	saved: Signal<bool>,
) -> View {
	View::reactive(move || {
		let in_flight = saving.get();

		let mut control = button()
			.attr("class", "button")
			.attr("type", "button")
			.attr("disabled", if in_flight { "true" } else { "false" })
			.child(if in_flight { "Saving..." } else { "Save" });

		#[cfg(client)]
		{
			let username = username.clone();
			let avatar_url = avatar_url.clone();
			let saving = saving.clone();
			let error = error.clone();
			let saved = saved.clone();
			control = control.on(EventType::Click, move |_event: web_sys::Event| {
				if saving.get_untracked() {
					return;
				}
				match ProfileSettingsForm::from_input(
					&username.get_untracked(),
					&avatar_url.get_untracked(),
				) {
					Err(message) => error.set(Some(message)),
					Ok(form) => {
						error.set(None);
						saved.set(false);
						saving.set(true);

						let saving = saving.clone();
						let error = error.clone();
						let saved = saved.clone();
						postly_pages::spawn::spawn_task(async move {
							match crate::apps::profile::client::api::update_profile(&form).await {
								Ok(_) => {
									saving.set(false);
									saved.set(true);
								}
								Err(err) => {
									saving.set(false);
									error.set(Some(err.to_string()));
								}
							}
						});
					}
				}
			});
		}
		#[cfg(server)]
		{
			let _ = (&username, &avatar_url, &error, &saved);
			control = control.attr("data-reactive", "true");
		}

		control.into_view()
	})
}

/// Error or success note below the form.
fn status_display(error: Signal<Option<String>>, saved: Signal<bool>) -> View {
	View::reactive(move || {
		if let Some(message) = error.get() {
			return error_alert(&message);
		}
		if saved.get() {
			return div()
				.attr("class", "alert-success")
				.attr("role", "status")
				.child("Profile updated.")
				.into_view();
		}
		View::empty()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::client::session::set_current_user;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_form_renders_fields_and_save() {
		set_current_user(Some("alice".to_string()));
		let html = profile_settings().render_to_string();
		set_current_user(None);

		assert!(html.contains("for=\"username\""));
		assert!(html.contains("for=\"avatarUrl\""));
		assert!(html.contains("value=\"alice\""));
		assert!(html.contains(">Save</button>"));
	}

	#[test]
	#[serial]
	fn test_save_button_disabled_while_saving() {
		let saving = Signal::new(true);
		let html = save_button(
			Signal::new("alice".to_string()),
			Signal::new(String::new()),
			saving,
			Signal::new(None),
			Signal::new(false),
		)
		.render_to_string();
		assert!(html.contains("disabled=\"true\""));
		assert!(html.contains("Saving..."));
	}

	#[test]
	#[serial]
	fn test_status_shows_error_over_success() {
		let error = Signal::new(Some("Username must be between 3 and 32 characters".to_string()));
		let saved = Signal::new(true);
		let html = status_display(error.clone(), saved).render_to_string();
		assert!(html.contains("role=\"alert\""));

		error.set(None);
		let html = status_display(error, Signal::new(true)).render_to_string();
		assert!(html.contains("Profile updated."));
	}
}
