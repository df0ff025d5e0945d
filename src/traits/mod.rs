//! Extension traits tying chained errors into ordinary `Result` code.
//!
//! - [`ResultExt`]: wraps the error of any `Result` into a chain
//! - [`TraceResultExt`]: records failures through `tracing` (requires the
//!   `tracing` feature)

pub mod result_ext;

pub use result_ext::ResultExt;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceResultExt;
