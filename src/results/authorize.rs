//! Successful authorization results delivered per the negotiated response mode.

// self
use crate::{
	_prelude::*,
	encode::EncodedResponse,
	error::ConfigError,
	obs::{self, BuildOutcome, BuildSpan, ResultKind},
	request::AuthorizeResponse,
	results::{AuthorizeEndpointResult, Responder},
};

const OPERATION: &str = "authorize";

impl Responder {
	/// Builds the redirect or form-post result for a successful authorization.
	///
	/// The client is recorded with the client tracker before the response mode is resolved, so
	/// tracking happens even when the mode turns out to be unrecognized. Fails with
	/// [`Error::InvalidOperation`] in that case, or when the request carries no redirect URI.
	pub async fn create_authorize_result(
		&self,
		response: &AuthorizeResponse,
	) -> Result<AuthorizeEndpointResult> {
		const KIND: ResultKind = ResultKind::Authorize;

		let span = BuildSpan::new(KIND, "create_authorize_result");

		span.record_response_mode(&response.request.response_mode);
		obs::record_build_outcome(KIND, BuildOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = &response.request;

				self.client_tracker.track(request.client_id());

				let mode = request
					.resolve_response_mode()
					.map_err(|source| Error::InvalidOperation { operation: OPERATION, source })?;
				let redirect_uri = request.redirect_uri.as_ref().ok_or(Error::InvalidOperation {
					operation: OPERATION,
					source: ConfigError::MissingRedirectUri,
				})?;

				Ok(match self.encoder.encode(redirect_uri, &response.parameters(), mode) {
					EncodedResponse::Redirect(uri) =>
						AuthorizeEndpointResult::AuthorizeRedirect { uri },
					EncodedResponse::FormPost { uri, body } =>
						AuthorizeEndpointResult::AuthorizeFormPost { uri, body },
				})
			})
			.await;

		match &result {
			Ok(_) => obs::record_build_outcome(KIND, BuildOutcome::Success),
			Err(e) => {
				obs::error_build_failed(KIND, e);
				obs::record_build_outcome(KIND, BuildOutcome::Failure);
			},
		}

		result
	}
}
