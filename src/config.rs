//! Responder configuration.

// self
use crate::{_prelude::*, error::ConfigError};

const DEFAULT_SIGNIN_PARAMETER: &str = "signin";

/// Tunables applied by [`Responder`](crate::results::Responder).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponderConfig {
	/// Also suppresses interactive pages for user errors when the client sent `prompt=none`.
	///
	/// Client errors are always suppressed under `prompt=none`.
	pub suppress_user_errors_on_prompt_none: bool,
	/// Login page the browser is sent to for deferred authentication.
	pub login_page: Option<Url>,
	/// Query parameter carrying the sign-in message id on the login page.
	pub signin_parameter: String,
}
impl ResponderConfig {
	/// Parses a JSON configuration document, reporting the offending path on failure.
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(raw);

		serde_path_to_error::deserialize(de).map_err(|source| ConfigError::Parse { source })
	}

	/// Sets the user-error suppression flag.
	pub fn suppress_user_errors_on_prompt_none(mut self, suppress: bool) -> Self {
		self.suppress_user_errors_on_prompt_none = suppress;

		self
	}

	/// Sets the login page.
	pub fn login_page(mut self, url: Url) -> Self {
		self.login_page = Some(url);

		self
	}

	/// Overrides the sign-in query parameter name.
	pub fn signin_parameter(mut self, name: impl Into<String>) -> Self {
		self.signin_parameter = name.into();

		self
	}
}
impl Default for ResponderConfig {
	fn default() -> Self {
		Self {
			suppress_user_errors_on_prompt_none: false,
			login_page: None,
			signin_parameter: DEFAULT_SIGNIN_PARAMETER.into(),
		}
	}
}
