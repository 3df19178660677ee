// self
use crate::{_prelude::*, obs::ResultKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedBuild<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedBuild<F> = F;

/// A span builder used by the result builders.
#[derive(Clone, Debug)]
pub struct BuildSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl BuildSpan {
	/// Creates a new span tagged with the provided result kind + stage.
	pub fn new(kind: ResultKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth2_authorize_result.build",
				result = kind.as_str(),
				stage,
				response_mode = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Records the negotiated `response_mode` exactly as the request carried it.
	pub fn record_response_mode(&self, mode: &str) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("response_mode", mode);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = mode;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedBuild<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = BuildSpan::new(ResultKind::Authorize, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[tokio::test]
	async fn response_mode_is_recorded_before_resolution() {
		let span = BuildSpan::new(ResultKind::Error, "record_response_mode");

		span.record_response_mode("web_message");

		assert_eq!(span.instrument(async { "done" }).await, "done");
	}
}
