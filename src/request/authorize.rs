//! Validated authorization requests and the protocol responses built from them.

// self
use crate::{
	_prelude::*,
	encode::ResponseParameters,
	error::ConfigError,
	request::{ClientId, PromptMode, ResponseMode},
};

const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Relying application that issued the authorization request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
	/// Client identifier.
	pub id: ClientId,
	/// Human-readable client name shown on error pages.
	pub name: String,
}
impl Client {
	/// Creates a client record.
	pub fn new(id: ClientId, name: impl Into<String>) -> Self {
		Self { id, name: name.into() }
	}
}

/// Immutable record of an authorization request that passed validation.
///
/// The negotiated `response_mode` is kept exactly as the validator handed it over.
/// Builders resolve it with [`ValidatedAuthorizeRequest::resolve_response_mode`] and refuse
/// to proceed when the value is outside the supported set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedAuthorizeRequest {
	/// Raw negotiated response mode.
	pub response_mode: String,
	/// Requesting client.
	pub client: Client,
	/// Redirect URI registered for (and requested by) the client, when known.
	pub redirect_uri: Option<Url>,
	/// Opaque client state echoed back on redirect.
	pub state: Option<String>,
	/// Authenticated subject, when the user is signed in.
	pub subject: Option<String>,
	/// Requested prompt behaviour.
	pub prompt_mode: Option<PromptMode>,
}
impl ValidatedAuthorizeRequest {
	/// Creates a request for the provided client and negotiated response mode.
	pub fn new(client: Client, response_mode: impl Into<String>) -> Self {
		Self {
			response_mode: response_mode.into(),
			client,
			redirect_uri: None,
			state: None,
			subject: None,
			prompt_mode: None,
		}
	}

	/// Sets the redirect URI.
	pub fn with_redirect_uri(mut self, uri: Url) -> Self {
		self.redirect_uri = Some(uri);

		self
	}

	/// Sets the client state.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Sets the authenticated subject.
	pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = Some(subject.into());

		self
	}

	/// Sets the prompt mode.
	pub fn with_prompt_mode(mut self, prompt: PromptMode) -> Self {
		self.prompt_mode = Some(prompt);

		self
	}

	/// Client identifier of the requesting client.
	pub fn client_id(&self) -> &ClientId {
		&self.client.id
	}

	/// Returns `true` when the client asked for no interactive UI.
	pub fn is_prompt_none(&self) -> bool {
		self.prompt_mode.is_some_and(PromptMode::is_none)
	}

	/// Resolves the negotiated response mode.
	pub fn resolve_response_mode(&self) -> Result<ResponseMode, ConfigError> {
		ResponseMode::parse(&self.response_mode)
	}
}

/// Protocol parameters to deliver to the client once authorization completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeResponse {
	/// Request the response answers.
	pub request: ValidatedAuthorizeRequest,
	/// Authorization code.
	pub code: Option<String>,
	/// Identity token.
	pub id_token: Option<String>,
	/// Access token.
	pub access_token: Option<String>,
	/// Access token lifetime, emitted as `expires_in`.
	pub access_token_lifetime: Option<Duration>,
	/// Granted scope.
	pub scope: Option<String>,
	/// OIDC session state.
	pub session_state: Option<String>,
	/// Error code for responses that report a silent failure.
	pub error: Option<String>,
}
impl AuthorizeResponse {
	/// Creates an empty response for the request.
	pub fn new(request: ValidatedAuthorizeRequest) -> Self {
		Self {
			request,
			code: None,
			id_token: None,
			access_token: None,
			access_token_lifetime: None,
			scope: None,
			session_state: None,
			error: None,
		}
	}

	/// Creates a response that reports `error` to the client without user interaction.
	pub fn error(request: ValidatedAuthorizeRequest, error: impl Into<String>) -> Self {
		let mut response = Self::new(request);

		response.error = Some(error.into());

		response
	}

	/// Sets the authorization code.
	pub fn with_code(mut self, code: impl Into<String>) -> Self {
		self.code = Some(code.into());

		self
	}

	/// Sets the identity token.
	pub fn with_id_token(mut self, token: impl Into<String>) -> Self {
		self.id_token = Some(token.into());

		self
	}

	/// Sets the access token together with its lifetime.
	pub fn with_access_token(mut self, token: impl Into<String>, lifetime: Duration) -> Self {
		self.access_token = Some(token.into());
		self.access_token_lifetime = Some(lifetime);

		self
	}

	/// Sets the granted scope.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Sets the OIDC session state.
	pub fn with_session_state(mut self, session_state: impl Into<String>) -> Self {
		self.session_state = Some(session_state.into());

		self
	}

	/// Returns `true` when the response reports an error.
	pub fn is_error(&self) -> bool {
		self.error.is_some()
	}

	/// Protocol parameters to deliver to the client.
	pub fn parameters(&self) -> ResponseParameters {
		let mut params = ResponseParameters::new();

		params.insert_opt("code", self.code.as_deref());
		params.insert_opt("id_token", self.id_token.as_deref());

		if let Some(token) = &self.access_token {
			params.insert("access_token", token);
			params.insert("token_type", TOKEN_TYPE_BEARER);

			if let Some(lifetime) = self.access_token_lifetime {
				params.insert("expires_in", lifetime.whole_seconds().max(0).to_string());
			}
		}

		params.insert_opt("scope", self.scope.as_deref());
		params.insert_opt("session_state", self.session_state.as_deref());
		params.insert_opt("error", self.error.as_deref());
		params.insert_opt("state", self.request.state.as_deref());

		params
	}
}
