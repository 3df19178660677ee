//! Client-activity tracking used by account management to list authorized clients.

// self
use crate::{_prelude::*, request::ClientId};

/// Records clients the current user has authorized.
pub trait ClientTracker
where
	Self: Send + Sync,
{
	/// Adds `client_id` to the tracked set. Repeated calls for the same client are no-ops.
	fn track(&self, client_id: &ClientId);
}

/// Thread-safe in-process [`ClientTracker`] keeping an ordered set of client identifiers.
#[derive(Clone, Debug, Default)]
pub struct MemoryClientTracker(Arc<RwLock<BTreeSet<ClientId>>>);
impl MemoryClientTracker {
	/// Returns `true` if `client_id` has been tracked.
	pub fn contains(&self, client_id: &str) -> bool {
		self.0.read().contains(client_id)
	}

	/// Snapshot of tracked clients in identifier order.
	pub fn clients(&self) -> Vec<ClientId> {
		self.0.read().iter().cloned().collect()
	}
}
impl ClientTracker for MemoryClientTracker {
	fn track(&self, client_id: &ClientId) {
		self.0.write().insert(client_id.clone());
	}
}
