//! Thread-safe in-memory [`MessageStore`] implementation for single-node hosts and tests.

// self
use crate::{
	_prelude::*,
	message::SignInMessage,
	request::MessageId,
	store::{MessageStore, StoreFuture},
};

type MessageMap = Arc<RwLock<HashMap<MessageId, StoredMessage>>>;

#[derive(Clone, Debug)]
struct StoredMessage {
	message: SignInMessage,
	stored_at: OffsetDateTime,
}

/// Thread-safe storage backend that keeps sign-in messages in-process.
///
/// Messages older than the configured TTL are treated as absent. Expired entries are reclaimed on
/// every write, so abandoned sign-ins never accumulate.
#[derive(Clone, Debug)]
pub struct MemoryMessageStore {
	map: MessageMap,
	ttl: Duration,
}
impl MemoryMessageStore {
	/// Default lifetime of a stored message.
	pub const DEFAULT_TTL: Duration = Duration::minutes(10);

	/// Creates a store whose messages expire after `ttl`.
	pub fn with_ttl(ttl: Duration) -> Self {
		Self { map: Default::default(), ttl: if ttl.is_negative() { Duration::ZERO } else { ttl } }
	}

	/// Number of live messages.
	pub fn len(&self) -> usize {
		let now = OffsetDateTime::now_utc();

		self.map.read().values().filter(|entry| !self.is_expired(entry, now)).count()
	}

	/// Returns `true` when no live message is stored.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops every expired message.
	pub fn purge_expired(&self) {
		let now = OffsetDateTime::now_utc();

		self.map.write().retain(|_, entry| !self.is_expired(entry, now));
	}

	fn is_expired(&self, entry: &StoredMessage, now: OffsetDateTime) -> bool {
		now - entry.stored_at >= self.ttl
	}

	fn store_now(&self, message: SignInMessage) -> MessageId {
		let now = OffsetDateTime::now_utc();
		let mut guard = self.map.write();

		guard.retain(|_, entry| !self.is_expired(entry, now));

		let mut id = MessageId::generate();

		while guard.contains_key(&id) {
			id = MessageId::generate();
		}

		guard.insert(id.clone(), StoredMessage { message, stored_at: now });

		id
	}

	fn load_now(&self, id: &MessageId) -> Option<SignInMessage> {
		let now = OffsetDateTime::now_utc();

		{
			let guard = self.map.read();

			match guard.get(id) {
				Some(entry) if !self.is_expired(entry, now) => return Some(entry.message.clone()),
				Some(_) => {},
				None => return None,
			}
		}

		self.map.write().remove(id);

		None
	}

	fn remove_now(&self, id: &MessageId) -> Option<SignInMessage> {
		let now = OffsetDateTime::now_utc();

		self.map.write().remove(id).filter(|entry| !self.is_expired(entry, now)).map(|e| e.message)
	}
}
impl Default for MemoryMessageStore {
	fn default() -> Self {
		Self::with_ttl(Self::DEFAULT_TTL)
	}
}
impl MessageStore for MemoryMessageStore {
	fn store(&self, message: SignInMessage) -> StoreFuture<'_, MessageId> {
		Box::pin(async move { Ok(self.store_now(message)) })
	}

	fn load<'a>(&'a self, id: &'a MessageId) -> StoreFuture<'a, Option<SignInMessage>> {
		Box::pin(async move { Ok(self.load_now(id)) })
	}

	fn remove<'a>(&'a self, id: &'a MessageId) -> StoreFuture<'a, Option<SignInMessage>> {
		Box::pin(async move { Ok(self.remove_now(id)) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn message() -> SignInMessage {
		SignInMessage::new(
			Url::parse("https://idp.example.com/connect/authorize?client_id=c")
				.expect("Return URL fixture should parse."),
		)
	}

	#[tokio::test]
	async fn zero_ttl_expires_immediately() {
		let store = MemoryMessageStore::with_ttl(Duration::ZERO);
		let id = store.store(message()).await.expect("Storing should succeed.");

		assert!(store.is_empty());
		assert_eq!(store.load(&id).await, Ok(None));
		assert_eq!(store.remove(&id).await, Ok(None));
	}

	#[tokio::test]
	async fn negative_ttl_is_clamped() {
		let store = MemoryMessageStore::with_ttl(Duration::seconds(-5));

		store.store(message()).await.expect("Storing should succeed.");
		store.purge_expired();

		assert_eq!(store.map.read().len(), 0);
	}

	#[tokio::test]
	async fn writes_reclaim_expired_entries() {
		let store = MemoryMessageStore::with_ttl(Duration::ZERO);

		for _ in 0..1_000 {
			store.store(message()).await.expect("Storing should succeed.");
		}

		assert_eq!(store.map.read().len(), 1);
	}

	#[tokio::test]
	async fn writes_keep_live_entries() {
		let store = MemoryMessageStore::default();
		let first = store.store(message()).await.expect("Storing should succeed.");

		store.store(message()).await.expect("Storing should succeed.");

		assert_eq!(store.map.read().len(), 2);
		assert!(store.load(&first).await.expect("Loading should succeed.").is_some());
	}
}
