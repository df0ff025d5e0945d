//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use chained_error::prelude::*;
//!
//! const NOT_FOUND: Kind = Kind::from_static("not found");
//!
//! fn find(id: u32) -> Result<()> {
//!     Err(err!(NOT_FOUND, "no such record", fields! { "id" => id }))
//! }
//!
//! let err = find(7).unwrap_err();
//! assert!(is(&err, [NOT_FOUND]));
//! assert_eq!(fields_slice(&err), Some(vec![Value::from("id"), Value::from(7u32)]));
//! ```

// Macros, plus the `fatal` and `fields` functions sharing their names
pub use crate::{err, fatal, fields, wrap};

// Core types
pub use crate::types::{Arg, Cause, Error, FieldMap, Kind, Result, StackFrame, Value};

// Chain queries
pub use crate::chain::{fields_slice, is, message, stack};

// Traits
pub use crate::traits::ResultExt;
