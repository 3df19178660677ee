// self
use crate::obs::{BuildOutcome, ResultKind};

/// Records a builder outcome via the global metrics recorder (when enabled).
pub fn record_build_outcome(kind: ResultKind, outcome: BuildOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_authorize_result_total",
			"result" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
