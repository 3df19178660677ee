//! Response and prompt modes negotiated by the authorization request.

// self
use crate::{_prelude::*, error::ConfigError};

/// Mechanism used to deliver authorization result parameters back to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
	/// Parameters appended to the redirect URI query string.
	Query,
	/// Parameters appended to the redirect URI fragment.
	Fragment,
	/// Parameters posted by an auto-submitting HTML form.
	FormPost,
}
impl ResponseMode {
	/// Returns the protocol identifier for the mode.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResponseMode::Query => "query",
			ResponseMode::Fragment => "fragment",
			ResponseMode::FormPost => "form_post",
		}
	}

	/// Resolves a raw `response_mode` value, rejecting anything outside the supported set.
	pub fn parse(raw: &str) -> Result<Self, ConfigError> {
		match raw {
			"query" => Ok(ResponseMode::Query),
			"fragment" => Ok(ResponseMode::Fragment),
			"form_post" => Ok(ResponseMode::FormPost),
			other => Err(ConfigError::UnsupportedResponseMode { mode: other.to_owned() }),
		}
	}
}
impl Display for ResponseMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ResponseMode {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

/// OIDC `prompt` values understood by the result builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptMode {
	/// No interactive UI may be shown.
	None,
	/// Force re-authentication.
	Login,
	/// Force the consent screen.
	Consent,
	/// Ask the user to pick an account.
	SelectAccount,
}
impl PromptMode {
	/// Returns the protocol identifier for the prompt.
	pub const fn as_str(self) -> &'static str {
		match self {
			PromptMode::None => "none",
			PromptMode::Login => "login",
			PromptMode::Consent => "consent",
			PromptMode::SelectAccount => "select_account",
		}
	}

	/// Returns `true` when interactive pages must be suppressed.
	pub const fn is_none(self) -> bool {
		matches!(self, PromptMode::None)
	}
}
impl Display for PromptMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
