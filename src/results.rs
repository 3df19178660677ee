//! Authorization endpoint results and the [`Responder`] that builds them.
//!
//! The hosting layer calls exactly one of the three entry points per inbound request:
//!
//! - [`Responder::create_error_result`] for failed requests,
//! - [`Responder::create_authorize_result`] for successful authorizations,
//! - [`Responder::create_login_result`] when the user must sign in first.
//!
//! Each returns a single [`AuthorizeEndpointResult`] variant; callers dispatch on the variant,
//! never on error codes. Only configuration defects and store failures surface as [`Error`].

mod authorize;
mod error;
mod login;

// self
use crate::{
	_prelude::*,
	config::ResponderConfig,
	encode::{EncodedResponse, ResponseModeEncoder},
	localize::Localizer,
	request::{AuthorizeResponse, Client, ClientId, MessageId, RequestId},
	store::MessageStore,
	track::ClientTracker,
};

/// Who caused an authorization error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
	/// End-user caused; there is no safe place to redirect to.
	User,
	/// Relying-application misconfiguration; bounced back to the client when possible.
	Client,
}

/// Rejected [`ReturnInfo`] payload.
#[derive(Debug, ThisError)]
#[error("Return info must carry a post body exactly when `is_post` is set (is_post = {is_post}).")]
pub struct ReturnInfoError {
	/// Offending flag value.
	pub is_post: bool,
}

/// Data needed to bounce a client-caused error back to the client's redirect URI.
///
/// `post_body` is present exactly when `is_post` is set; deserialization rejects payloads that
/// break this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReturnInfo")]
pub struct ReturnInfo {
	/// Client identifier.
	pub client_id: ClientId,
	/// Client display name.
	pub client_name: String,
	/// Redirect target, or the form action when `is_post` is set.
	pub uri: Url,
	/// Whether the error must be delivered by form post.
	pub is_post: bool,
	/// Auto-submitting form; present iff `is_post`.
	pub post_body: Option<String>,
}
impl ReturnInfo {
	/// Builds return information for `client` from an encoded error response.
	pub fn new(client: &Client, encoded: EncodedResponse) -> Self {
		let is_post = encoded.is_post();
		let (uri, post_body) = encoded.into_parts();

		Self {
			client_id: client.id.clone(),
			client_name: client.name.clone(),
			uri,
			is_post,
			post_body,
		}
	}
}

#[derive(Deserialize)]
struct RawReturnInfo {
	client_id: ClientId,
	client_name: String,
	uri: Url,
	is_post: bool,
	post_body: Option<String>,
}
impl TryFrom<RawReturnInfo> for ReturnInfo {
	type Error = ReturnInfoError;

	fn try_from(raw: RawReturnInfo) -> Result<Self, Self::Error> {
		if raw.is_post != raw.post_body.is_some() {
			return Err(ReturnInfoError { is_post: raw.is_post });
		}

		Ok(Self {
			client_id: raw.client_id,
			client_name: raw.client_name,
			uri: raw.uri,
			is_post: raw.is_post,
			post_body: raw.post_body,
		})
	}
}

/// View model of an interactive error page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPageModel {
	/// Protocol error code.
	pub error_code: String,
	/// Localized message, or the error code when no translation exists.
	pub error_message: String,
	/// Correlation id of the failed request.
	pub request_id: Option<RequestId>,
	/// Set only for client errors with a known redirect URI.
	pub return_info: Option<ReturnInfo>,
}

/// Reference to a stored sign-in message the login page should resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPage {
	/// Store-assigned message id.
	pub id: MessageId,
}
impl LoginPage {
	/// Builds the browser redirect to `login_page` carrying the id as `parameter`.
	pub fn redirect_uri(&self, login_page: &Url, parameter: &str) -> Url {
		let mut uri = login_page.clone();

		uri.query_pairs_mut().append_pair(parameter, &self.id);

		uri
	}
}

/// Outcome of an authorization endpoint call, handed to the hosting layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorizeEndpointResult {
	/// Render an interactive error page.
	ErrorPage(ErrorPageModel),
	/// Complete the flow without UI; the response carries the error to deliver.
	Authorize(AuthorizeResponse),
	/// Redirect the browser.
	AuthorizeRedirect {
		/// Redirect target carrying the response parameters.
		uri: Url,
	},
	/// Serve an auto-submitting form.
	AuthorizeFormPost {
		/// Form action target.
		uri: Url,
		/// Complete HTML document.
		body: String,
	},
	/// Redirect the browser to the login page.
	LoginPage(LoginPage),
}

/// Builds authorization endpoint results on top of injected collaborators.
#[derive(Clone)]
pub struct Responder {
	/// Store persisting sign-in messages for deferred authentication.
	pub messages: Arc<dyn MessageStore>,
	/// Catalog used to translate error codes.
	pub localizer: Arc<dyn Localizer>,
	/// Tracker recording clients the user has authorized.
	pub client_tracker: Arc<dyn ClientTracker>,
	/// Response-mode encoder.
	pub encoder: ResponseModeEncoder,
	/// Behaviour tunables.
	pub config: ResponderConfig,
}
impl Responder {
	/// Creates a responder with the default configuration.
	pub fn new(
		messages: Arc<dyn MessageStore>,
		localizer: Arc<dyn Localizer>,
		client_tracker: Arc<dyn ClientTracker>,
	) -> Self {
		Self {
			messages,
			localizer,
			client_tracker,
			encoder: ResponseModeEncoder,
			config: ResponderConfig::default(),
		}
	}

	/// Replaces the configuration.
	pub fn with_config(mut self, config: ResponderConfig) -> Self {
		self.config = config;

		self
	}
}
impl Debug for Responder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Responder").field("config", &self.config).finish()
	}
}
