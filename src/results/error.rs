//! Error result building: interactive error pages, client bounce-back, and prompt suppression.

// self
use crate::{
	_prelude::*,
	encode::ResponseParameters,
	obs::{self, BuildOutcome, BuildSpan, ResultKind},
	request::{AuthorizeResponse, RequestContext, ValidatedAuthorizeRequest},
	results::{AuthorizeEndpointResult, ErrorPageModel, ErrorType, Responder, ReturnInfo},
};

const OPERATION: &str = "error";

impl Responder {
	/// Builds the result for a failed authorization request.
	///
	/// Client errors under `prompt=none` complete silently through
	/// [`AuthorizeEndpointResult::Authorize`]; user errors do too when
	/// [`ResponderConfig::suppress_user_errors_on_prompt_none`](crate::config::ResponderConfig)
	/// is set. Everything else renders an [`AuthorizeEndpointResult::ErrorPage`], with return
	/// information attached for client errors whose redirect URI is known.
	///
	/// Suppression does not look at the redirect URI: a suppressed error on a request without one
	/// still yields [`AuthorizeEndpointResult::Authorize`], and delivering it through
	/// [`Responder::create_authorize_result`] then fails with
	/// [`ConfigError::MissingRedirectUri`](crate::error::ConfigError::MissingRedirectUri).
	///
	/// Fails with [`Error::InvalidOperation`] when the request's response mode is unrecognized
	/// and the result would have to be delivered to the client.
	pub async fn create_error_result(
		&self,
		context: &RequestContext,
		error_type: ErrorType,
		error_code: &str,
		request: &ValidatedAuthorizeRequest,
	) -> Result<AuthorizeEndpointResult> {
		const KIND: ResultKind = ResultKind::Error;

		let span = BuildSpan::new(KIND, "create_error_result");

		span.record_response_mode(&request.response_mode);
		obs::record_build_outcome(KIND, BuildOutcome::Attempt);

		let result = span
			.instrument(async move {
				if self.suppresses_page(error_type, request) {
					request.resolve_response_mode().map_err(invalid_operation)?;

					return Ok(AuthorizeEndpointResult::Authorize(AuthorizeResponse::error(
						request.clone(),
						error_code,
					)));
				}

				let return_info = match (error_type, &request.redirect_uri) {
					(ErrorType::Client, Some(redirect_uri)) => {
						let mode = request.resolve_response_mode().map_err(invalid_operation)?;
						let mut params = ResponseParameters::new();

						params.insert("error", error_code);
						params.insert_opt("state", request.state.as_deref());

						Some(ReturnInfo::new(
							&request.client,
							self.encoder.encode(redirect_uri, &params, mode),
						))
					},
					_ => None,
				};
				let error_message = self.localized_message(error_code).await;

				Ok(AuthorizeEndpointResult::ErrorPage(ErrorPageModel {
					error_code: error_code.to_owned(),
					error_message,
					request_id: context.request_id.clone(),
					return_info,
				}))
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

	fn suppresses_page(&self, error_type: ErrorType, request: &ValidatedAuthorizeRequest) -> bool {
		if !request.is_prompt_none() {
			return false;
		}

		match error_type {
			ErrorType::Client => true,
			ErrorType::User => self.config.suppress_user_errors_on_prompt_none,
		}
	}

	async fn localized_message(&self, error_code: &str) -> String {
		match self.localizer.lookup(error_code).await {
			Ok(Some(text)) if !text.is_empty() => text,
			Ok(_) => error_code.to_owned(),
			Err(e) => {
				obs::warn_localization_fallback(error_code, &e);

				error_code.to_owned()
			},
		}
	}
}

fn invalid_operation(source: crate::error::ConfigError) -> Error {
	Error::InvalidOperation { operation: OPERATION, source }
}
