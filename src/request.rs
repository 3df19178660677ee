//! Validated authorization request data handed over by the request pipeline.

pub mod authorize;
pub mod context;
pub mod id;
pub mod mode;

pub use authorize::*;
pub use context::*;
pub use id::*;
pub use mode::*;
