//! Crate-level error types shared by the encoder, builders, and collaborators.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
///
/// None of these variants describe an end-user or client mistake; those are rendered as
/// result artifacts. Every variant here is a fault the hosting layer must surface loudly.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// A builder met a request whose state should have been rejected earlier in the pipeline.
	#[error("Cannot build the {operation} result.")]
	InvalidOperation {
		/// Builder that refused the request.
		operation: &'static str,
		/// Configuration defect that caused the refusal.
		#[source]
		source: ConfigError,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Response mode outside `query`, `fragment`, and `form_post`.
	#[error("Response mode `{mode}` is not supported.")]
	UnsupportedResponseMode {
		/// Raw response mode value.
		mode: String,
	},
	/// Result must be delivered to the client but the request carries no redirect URI.
	#[error("Request has no redirect URI.")]
	MissingRedirectUri,
	/// Login redirect requested but no login page is configured.
	#[error("No login page is configured.")]
	MissingLoginPage,
	/// Configuration document could not be parsed.
	#[error("Configuration is invalid.")]
	Parse {
		/// Path-aware parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
