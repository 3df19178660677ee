// crates.io
use time::macros;
// self
use oauth2_authorize_result::{
	_preludet::*,
	message::SignInMessage,
	request::{ClientId, MessageId},
	store::{MemoryMessageStore, MessageStore},
};

fn build_message(client: &str) -> SignInMessage {
	SignInMessage::new(
		Url::parse(&format!("https://idp.example.com/connect/authorize?client_id={client}"))
			.expect("Return URL fixture should parse."),
	)
	.with_client_id(ClientId::new(client).expect("Client fixture should be valid."))
	.with_login_hint("alice@example.com")
	.with_created_at(macros::datetime!(2025-11-10 12:00 UTC))
}

#[tokio::test]
async fn store_and_load_round_trip() {
	let store = MemoryMessageStore::default();
	let message = build_message("client-a");
	let id = store.store(message.clone()).await.expect("Storing a message should succeed.");
	let loaded = store
		.load(&id)
		.await
		.expect("Loading a message should succeed.")
		.expect("Stored message should remain present.");

	assert_eq!(loaded, message);
	assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn remove_consumes_the_message() {
	let store = MemoryMessageStore::default();
	let id = store.store(build_message("client-a")).await.expect("Storing should succeed.");
	let removed = store.remove(&id).await.expect("Removing should succeed.");

	assert!(removed.is_some());
	assert_eq!(store.remove(&id).await.expect("Second removal should succeed."), None);
	assert_eq!(store.load(&id).await.expect("Loading should succeed."), None);
	assert!(store.is_empty());
}

#[tokio::test]
async fn unknown_ids_are_absent() {
	let store = MemoryMessageStore::default();
	let unknown = MessageId::new("never-issued").expect("Message id fixture should be valid.");

	assert_eq!(store.load(&unknown).await.expect("Loading should succeed."), None);
}

#[tokio::test]
async fn expired_messages_are_not_returned() {
	let store = MemoryMessageStore::with_ttl(Duration::milliseconds(20));
	let id = store.store(build_message("client-a")).await.expect("Storing should succeed.");

	tokio::time::sleep(std::time::Duration::from_millis(40)).await;

	assert_eq!(store.load(&id).await.expect("Loading should succeed."), None);
	assert!(store.is_empty());
}

#[tokio::test]
async fn concurrent_writers_receive_distinct_ids() {
	let store = MemoryMessageStore::default();
	let tasks = (0..64)
		.map(|i| {
			let store = store.clone();

			tokio::spawn(async move {
				store
					.store(build_message(&format!("client-{i}")))
					.await
					.expect("Concurrent store should succeed.")
			})
		})
		.collect::<Vec<_>>();
	let mut ids = BTreeSet::new();

	for task in tasks {
		ids.insert(task.await.expect("Store task should not panic."));
	}

	assert_eq!(ids.len(), 64);
	assert_eq!(store.len(), 64);
}
