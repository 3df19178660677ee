//! Request-scoped context supplied by the hosting layer.

// self
use crate::{_prelude::*, request::RequestId};

/// Ambient data of the inbound HTTP request, passed explicitly into every builder call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
	/// Correlation identifier assigned by the hosting layer.
	pub request_id: Option<RequestId>,
}
impl RequestContext {
	/// Creates a context carrying the provided correlation identifier.
	pub fn new(request_id: RequestId) -> Self {
		Self { request_id: Some(request_id) }
	}

	/// Creates a context with a freshly generated correlation identifier.
	pub fn generated() -> Self {
		Self::new(RequestId::generate())
	}
}
