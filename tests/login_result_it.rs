// self
use oauth2_authorize_result::{
	_preludet::*,
	config::ResponderConfig,
	localize::StaticLocalizer,
	message::SignInMessage,
	request::ClientId,
	results::{AuthorizeEndpointResult, LoginPage},
	store::MessageStore,
};

fn build_message() -> SignInMessage {
	SignInMessage::new(
		Url::parse("https://idp.example.com/connect/authorize?client_id=client-42&state=123")
			.expect("Return URL fixture should parse."),
	)
	.with_client_id(ClientId::new("client-42").expect("Client identifier should be valid."))
	.with_acr_values(["idp:google"])
}

fn into_login_page(result: AuthorizeEndpointResult) -> LoginPage {
	match result {
		AuthorizeEndpointResult::LoginPage(page) => page,
		other => panic!("Expected a login page, got {other:?}."),
	}
}

#[tokio::test]
async fn each_call_stores_exactly_one_message() {
	let (responder, collaborators) = build_test_responder();

	for expected_len in 1..=3 {
		let message = build_message();
		let page = into_login_page(
			responder
				.create_login_result(message.clone())
				.await
				.expect("Login result should build."),
		);

		assert_eq!(collaborators.messages.len(), expected_len);

		let stored = collaborators
			.messages
			.load(&page.id)
			.await
			.expect("Loading the stored message should succeed.")
			.expect("Returned id should reference the stored message.");

		assert_eq!(stored, message);
	}
}

#[tokio::test]
async fn concurrent_calls_never_share_ids() {
	let (responder, collaborators) = build_test_responder();
	let responder = Arc::new(responder);
	let tasks = (0..32)
		.map(|_| {
			let responder = responder.clone();

			tokio::spawn(async move {
				into_login_page(
					responder
						.create_login_result(build_message())
						.await
						.expect("Concurrent login result should build."),
				)
				.id
			})
		})
		.collect::<Vec<_>>();
	let mut ids = BTreeSet::new();

	for task in tasks {
		ids.insert(task.await.expect("Login task should not panic."));
	}

	assert_eq!(ids.len(), 32);
	assert_eq!(collaborators.messages.len(), 32);
}

#[tokio::test]
async fn login_page_redirect_uses_configured_parameter() {
	let config = ResponderConfig::default()
		.login_page(Url::parse("https://idp.example.com/login").expect("Login URL should parse."));
	let (responder, _) = build_test_responder_with(StaticLocalizer::english(), config);
	let page = into_login_page(
		responder.create_login_result(build_message()).await.expect("Login result should build."),
	);
	let redirect = responder
		.login_redirect_uri(&page)
		.expect("Configured login page should produce a redirect.");
	let pairs: HashMap<_, _> = redirect.query_pairs().into_owned().collect();

	assert_eq!(redirect.path(), "/login");
	assert_eq!(pairs.get("signin").map(String::as_str), Some(&*page.id));
}
