//! Login redirects for requests that need the user to authenticate first.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	message::SignInMessage,
	obs::{self, BuildOutcome, BuildSpan, ResultKind},
	results::{AuthorizeEndpointResult, LoginPage, Responder},
	store::MessageStore,
};

impl Responder {
	/// Persists `message` and returns a login-page result referencing its store id.
	pub async fn create_login_result(
		&self,
		message: SignInMessage,
	) -> Result<AuthorizeEndpointResult> {
		const KIND: ResultKind = ResultKind::Login;

		let span = BuildSpan::new(KIND, "create_login_result");

		obs::record_build_outcome(KIND, BuildOutcome::Attempt);

		let result = span
			.instrument(async move {
				let id = <dyn MessageStore>::store(self.messages.as_ref(), message)
					.await
					.map_err(Error::from)?;

				Ok(AuthorizeEndpointResult::LoginPage(LoginPage { id }))
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

	/// Browser redirect to the configured login page for `page`.
	pub fn login_redirect_uri(&self, page: &LoginPage) -> Result<Url> {
		let login_page = self.config.login_page.as_ref().ok_or(ConfigError::MissingLoginPage)?;

		Ok(page.redirect_uri(login_page, &self.config.signin_parameter))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::{build_test_responder, build_test_responder_with},
		config::ResponderConfig,
		localize::StaticLocalizer,
		request::MessageId,
		store::{StoreError, StoreFuture},
	};

	struct FailingStore;
	impl MessageStore for FailingStore {
		fn store(&self, _: SignInMessage) -> StoreFuture<'_, MessageId> {
			Box::pin(async { Err(StoreError::Backend { message: "unreachable".into() }) })
		}

		fn load<'a>(&'a self, _: &'a MessageId) -> StoreFuture<'a, Option<SignInMessage>> {
			Box::pin(async { Ok(None) })
		}

		fn remove<'a>(&'a self, _: &'a MessageId) -> StoreFuture<'a, Option<SignInMessage>> {
			Box::pin(async { Ok(None) })
		}
	}

	fn message() -> SignInMessage {
		SignInMessage::new(
			Url::parse("https://idp.example.com/connect/authorize?client_id=c")
				.expect("Return URL fixture should parse."),
		)
	}

	#[tokio::test]
	async fn store_failures_propagate() {
		let (mut responder, _) = build_test_responder();

		responder.messages = Arc::new(FailingStore);

		let err = responder
			.create_login_result(message())
			.await
			.expect_err("Store failure should abort the login result.");

		assert!(matches!(err, Error::Storage(StoreError::Backend { .. })));
	}

	#[tokio::test]
	async fn login_redirect_requires_configured_page() {
		let page = LoginPage { id: MessageId::new("m1").expect("Message id should be valid.") };
		let (unconfigured, _) = build_test_responder();
		let (configured, _) = build_test_responder_with(
			StaticLocalizer::empty(),
			ResponderConfig::default()
				.login_page(Url::parse("https://idp.example.com/login").expect("URL should parse."))
				.signin_parameter("message"),
		);

		assert!(matches!(
			unconfigured.login_redirect_uri(&page),
			Err(Error::Config(ConfigError::MissingLoginPage))
		));
		assert_eq!(
			configured
				.login_redirect_uri(&page)
				.expect("Configured login page should produce a redirect.")
				.as_str(),
			"https://idp.example.com/login?message=m1"
		);
	}
}
