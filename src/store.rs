//! Storage contract and built-in store for sign-in messages.

pub mod memory;

pub use memory::MemoryMessageStore;

// self
use crate::{_prelude::*, message::SignInMessage, request::MessageId};

/// Boxed future returned by [`MessageStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract for sign-in messages.
///
/// Implementations assign ids that are URL-safe and never shared by two live messages, even
/// under concurrent writers. Expiry policy belongs to the implementation.
pub trait MessageStore
where
	Self: Send + Sync,
{
	/// Persists `message` and returns its newly assigned id.
	fn store(&self, message: SignInMessage) -> StoreFuture<'_, MessageId>;

	/// Fetches the message stored under `id`, if it is still live.
	fn load<'a>(&'a self, id: &'a MessageId) -> StoreFuture<'a, Option<SignInMessage>>;

	/// Removes and returns the message stored under `id`, if it is still live.
	fn remove<'a>(&'a self, id: &'a MessageId) -> StoreFuture<'a, Option<SignInMessage>>;
}

/// Error type produced by [`MessageStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
