//! Localization contract for error messages shown on interactive error pages.

// self
use crate::_prelude::*;

/// Boxed future returned by [`Localizer::lookup`].
pub type LocalizeFuture<'a> =
	Pin<Box<dyn Future<Output = Result<Option<String>, LocalizationError>> + 'a + Send>>;

/// Message catalog consulted when rendering error pages.
///
/// Returning `Ok(None)`, an empty string, or an error makes the caller fall back to the raw
/// error code; lookups never abort result building.
pub trait Localizer
where
	Self: Send + Sync,
{
	/// Looks up the display text for `code`.
	fn lookup<'a>(&'a self, code: &'a str) -> LocalizeFuture<'a>;
}

/// Failure reported by a localization backend.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Localization backend failure: {message}.")]
pub struct LocalizationError {
	/// Human-readable error payload.
	pub message: String,
}

/// In-process [`Localizer`] backed by a fixed message table.
#[derive(Clone, Debug, Default)]
pub struct StaticLocalizer(HashMap<String, String>);
impl StaticLocalizer {
	/// Creates a localizer without any translations.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Creates a localizer seeded with English texts for the standard protocol error codes.
	pub fn english() -> Self {
		[
			("access_denied", "The resource owner or authorization server denied the request."),
			("consent_required", "The user must consent before the request can be completed."),
			("interaction_required", "The request requires user interaction."),
			("invalid_request", "The request is missing a parameter or is otherwise malformed."),
			("invalid_scope", "The requested scope is invalid, unknown, or malformed."),
			("login_required", "The user must sign in before the request can be completed."),
			("server_error", "The server encountered an unexpected condition."),
			("temporarily_unavailable", "The server is temporarily unable to handle the request."),
			("unauthorized_client", "The client is not authorized to make this request."),
			("unsupported_response_type", "The requested response type is not supported."),
		]
		.into_iter()
		.fold(Self::empty(), |localizer, (code, text)| localizer.with_message(code, text))
	}

	/// Adds or overrides the text for `code`.
	pub fn with_message(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
		self.0.insert(code.into(), text.into());

		self
	}

	fn lookup_now(&self, code: &str) -> Option<String> {
		self.0.get(code).cloned()
	}
}
impl Localizer for StaticLocalizer {
	fn lookup<'a>(&'a self, code: &'a str) -> LocalizeFuture<'a> {
		Box::pin(async move { Ok(self.lookup_now(code)) })
	}
}
