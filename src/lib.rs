//! Protocol-correct OAuth 2.0/OIDC authorization endpoint results: response-mode encoding,
//! client-aware error pages, and deferred sign-in redirects behind narrow collaborator contracts.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod encode;
pub mod error;
pub mod localize;
pub mod message;
pub mod obs;
pub mod request;
pub mod results;
pub mod store;
pub mod track;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		config::ResponderConfig,
		localize::{Localizer, StaticLocalizer},
		results::Responder,
		store::{MemoryMessageStore, MessageStore},
		track::{ClientTracker, MemoryClientTracker},
	};

	/// Collaborators backing a responder built by [`build_test_responder`].
	#[derive(Clone, Debug)]
	pub struct TestCollaborators {
		/// In-memory message store shared with the responder.
		pub messages: Arc<MemoryMessageStore>,
		/// In-memory client tracker shared with the responder.
		pub tracker: Arc<MemoryClientTracker>,
		/// Static localizer shared with the responder.
		pub localizer: Arc<StaticLocalizer>,
	}

	/// Constructs a [`Responder`] backed by in-memory collaborators and the provided config.
	pub fn build_test_responder_with(
		localizer: StaticLocalizer,
		config: ResponderConfig,
	) -> (Responder, TestCollaborators) {
		let messages = Arc::new(MemoryMessageStore::default());
		let tracker = Arc::new(MemoryClientTracker::default());
		let localizer = Arc::new(localizer);
		let responder = Responder::new(
			messages.clone() as Arc<dyn MessageStore>,
			localizer.clone() as Arc<dyn Localizer>,
			tracker.clone() as Arc<dyn ClientTracker>,
		)
		.with_config(config);

		(responder, TestCollaborators { messages, tracker, localizer })
	}

	/// Constructs a [`Responder`] with an empty localizer and default config.
	pub fn build_test_responder() -> (Responder, TestCollaborators) {
		build_test_responder_with(StaticLocalizer::empty(), ResponderConfig::default())
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, BTreeSet, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use {color_eyre as _, tokio as _};
