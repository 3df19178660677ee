//! Sign-in messages describing an authentication flow to resume after login.

// self
use crate::{_prelude::*, request::ClientId};

/// Context of a deferred authentication request.
///
/// The message is persisted by a [`MessageStore`](crate::store::MessageStore) and referenced
/// by the returned id; the login UI loads it to learn where to send the user afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInMessage {
	/// URL that resumes the authorization request once the user has signed in.
	pub return_url: Url,
	/// Client that triggered the sign-in.
	pub client_id: Option<ClientId>,
	/// Identity provider requested through `acr_values` or `idp`.
	pub idp: Option<String>,
	/// Login hint forwarded from the authorization request.
	pub login_hint: Option<String>,
	/// Requested OIDC `display` mode.
	pub display_mode: Option<String>,
	/// Requested UI locales.
	pub ui_locales: Option<String>,
	/// Requested authentication context class references.
	pub acr_values: Vec<String>,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}
impl SignInMessage {
	/// Creates a message that resumes the flow at `return_url`.
	pub fn new(return_url: Url) -> Self {
		Self {
			return_url,
			client_id: None,
			idp: None,
			login_hint: None,
			display_mode: None,
			ui_locales: None,
			acr_values: Vec::new(),
			created_at: OffsetDateTime::now_utc(),
		}
	}

	/// Sets the client that triggered the sign-in.
	pub fn with_client_id(mut self, client_id: ClientId) -> Self {
		self.client_id = Some(client_id);

		self
	}

	/// Sets the requested identity provider.
	pub fn with_idp(mut self, idp: impl Into<String>) -> Self {
		self.idp = Some(idp.into());

		self
	}

	/// Sets the login hint.
	pub fn with_login_hint(mut self, hint: impl Into<String>) -> Self {
		self.login_hint = Some(hint.into());

		self
	}

	/// Sets the display mode.
	pub fn with_display_mode(mut self, display: impl Into<String>) -> Self {
		self.display_mode = Some(display.into());

		self
	}

	/// Sets the UI locales.
	pub fn with_ui_locales(mut self, locales: impl Into<String>) -> Self {
		self.ui_locales = Some(locales.into());

		self
	}

	/// Replaces the ACR values.
	pub fn with_acr_values<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.acr_values = values.into_iter().map(Into::into).collect();

		self
	}

	/// Overrides the creation instant.
	pub fn with_created_at(mut self, instant: OffsetDateTime) -> Self {
		self.created_at = instant;

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn message_serializes_with_rfc3339_timestamp() {
		let message = SignInMessage::new(
			Url::parse("https://idp.example.com/connect/authorize?client_id=c")
				.expect("Return URL fixture should parse."),
		)
		.with_acr_values(["idp:google", "tenant:acme"])
		.with_created_at(time::macros::datetime!(2025-11-10 12:00 UTC));
		let payload = serde_json::to_value(&message).expect("Message should serialize.");

		assert_eq!(payload["created_at"], "2025-11-10T12:00:00Z");
		assert_eq!(payload["acr_values"][1], "tenant:acme");

		let back: SignInMessage =
			serde_json::from_value(payload).expect("Message should deserialize.");

		assert_eq!(back, message);
	}
}
