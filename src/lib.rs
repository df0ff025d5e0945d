//! Structured, causally linked errors.
//!
//! An [`Error`] carries an optional classification [`Kind`], a user-facing
//! message, an optional cause, key/value fields and the call-site it was
//! constructed at. Wrapping errors in one another forms a chain that can be
//! inspected without losing any of that information:
//!
//! - [`is`] branches on kinds anywhere in the chain
//! - [`message`] produces text that is safe to show to end users
//! - [`fields`], [`fields_slice`] and [`stack`] prepare structured data for
//!   loggers
//! - `Display` renders the chain compactly, `{:#}` verbosely
//! - [`fatal`] turns an error into a panic carrying the whole chain
//!
//! # Examples
//!
//! ## Building and inspecting a chain
//!
//! ```
//! use chained_error::{err, is, message, wrap, Kind};
//!
//! const USER_NOT_FOUND: Kind = Kind::from_static("user not found");
//!
//! let root = err!(USER_NOT_FOUND, "we could not find that user").with_field("username", "ada");
//! let err = wrap!(root, "profile: load failed").unwrap().with_field("request_id", 17);
//!
//! assert!(is(&err, [USER_NOT_FOUND]));
//! assert_eq!(message(&err), "profile: load failed");
//! assert_eq!(err.merged_fields().unwrap().len(), 2);
//! ```
//!
//! ## Foreign causes
//!
//! ```
//! use chained_error::{err, stack, Arg};
//! use std::io;
//!
//! let err = err!("reading settings", Arg::foreign(io::Error::other("permission denied")));
//! let frames = stack(&err);
//!
//! assert_eq!(frames.len(), 2);
//! assert_eq!(frames[1].message, "permission denied");
//! assert!(err.to_string().ends_with(": permission denied"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Read-only queries over error chains
pub mod chain;
/// Constructor macros capturing the full call-site
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result`
pub mod traits;
/// The error node and its building blocks
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{
    fatal, fatal_at, fields, fields_slice, is, links, message, stack, AsChain, Link, Links,
    Matcher, FALLBACK_MESSAGE,
};
pub use traits::*;
pub use types::{
    error_formatter::{ErrorFormatBuilder, ErrorFormatConfig},
    Arg, CallSite, Cause, DynError, Error, FieldMap, IntoCause, Kind, Result, StackFrame, Value,
};
