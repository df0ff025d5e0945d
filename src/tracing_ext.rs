//! Tracing integration for chained errors.
//!
//! This module hands the data a chain carries to the `tracing` ecosystem: the
//! resolved message becomes the event message, and the head node's kind and
//! call-site plus the merged fields of the whole chain become event fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! chained-error = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::{self, Display};

use crate::chain::{fields, message, AsChain, Link};
use crate::types::alloc_type::Cow;
use crate::types::{Error, FieldMap, Kind};

/// Emits one `ERROR` level event describing `err`.
///
/// Does nothing when there is no error.
///
/// ```rust,ignore
/// use chained_error::tracing_ext::record;
///
/// if let Err(err) = load_user(id) {
///     record(&err);
/// }
/// ```
pub fn record<'a>(err: impl AsChain<'a>) {
    let Some(head) = err.head() else {
        return;
    };

    match head {
        Link::Node(node) => {
            let site = node.call_site();
            let kind = node.kind().map(Kind::as_str).unwrap_or_default();
            tracing::error!(
                kind,
                caller = site.caller(),
                file = site.file(),
                line = site.line(),
                fields = %DisplayFields(fields(head)),
                error = %node,
                "{}",
                message(head)
            );
        },
        Link::Foreign(foreign) => {
            tracing::error!(error = %foreign, "{}", message(head));
        },
    }
}

/// Renders merged fields as `{key=value, ...}`.
struct DisplayFields<'a>(Option<Cow<'a, FieldMap>>);

impl Display for DisplayFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().flat_map(|map| map.iter()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

/// Extension trait recording failed results through `tracing`.
pub trait TraceResultExt {
    /// Records the error, if any, and returns the result unchanged.
    fn trace_err(self) -> Self;
}

impl<T> TraceResultExt for Result<T, Error> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(err) = &self {
            record(err);
        }
        self
    }
}
