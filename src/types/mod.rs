//! Error types and utilities.
//!
//! This module holds the chain node [`Error`] together with the values it is
//! made of: [`Kind`] tags, field [`Value`]s, the captured [`CallSite`] and the
//! serializable [`StackFrame`] snapshots.
//!
//! # Examples
//!
//! ```
//! use chained_error::{err, fields, wrap, Kind};
//!
//! const DB: Kind = Kind::from_static("db");
//!
//! let root = err!(DB, "connection refused", fields! { "host" => "db-1", "port" => 5432 });
//! let err = wrap!(root, "loading orders").unwrap();
//!
//! println!("{}", err);
//! // Output: [main]: loading orders: [main]: connection refused (db)
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod call_site;
pub mod chain_error;
pub mod error_formatter;
pub mod kind;
pub mod stack_frame;
pub mod value;

pub use call_site::CallSite;
pub use chain_error::*;
pub use kind::Kind;
pub use stack_frame::StackFrame;
pub use value::{FieldMap, Value};

/// SmallVec-backed collection used while walking a chain.
///
/// Chains are rarely deeper than a handful of nodes, so per-node scratch data
/// stays inline.
pub type ChainVec<T> = SmallVec<[T; 4]>;

/// Result alias for operations failing with a chained [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
