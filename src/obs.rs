//! Optional observability helpers for result builders.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_authorize_result.build` with the
//!   `result` (builder) and `stage` (call site) fields, plus the raw `response_mode` for builders
//!   that deliver to the client.
//! - Enable `metrics` to increment the `oauth2_authorize_result_total` counter for every
//!   attempt/success/failure, labeled by `result` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Result builders observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
	/// Error page (or silent error) builder.
	Error,
	/// Successful authorization builder.
	Authorize,
	/// Login redirect builder.
	Login,
}
impl ResultKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResultKind::Error => "error",
			ResultKind::Authorize => "authorize",
			ResultKind::Login => "login",
		}
	}
}
impl Display for ResultKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildOutcome {
	/// Entry to a builder.
	Attempt,
	/// A result artifact was produced.
	Success,
	/// A fatal error was propagated back to the caller.
	Failure,
}
impl BuildOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			BuildOutcome::Attempt => "attempt",
			BuildOutcome::Success => "success",
			BuildOutcome::Failure => "failure",
		}
	}
}
impl Display for BuildOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Logs a localization fallback (when tracing is enabled).
pub fn warn_localization_fallback(code: &str, reason: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		::tracing::warn!(code, %reason, "Falling back to the raw error code.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (code, reason);
	}
}

/// Logs a fatal builder failure (when tracing is enabled).
pub fn error_build_failed(kind: ResultKind, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		::tracing::error!(result = kind.as_str(), %error, "Result building aborted.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}
