//! Serializable per-node snapshot of an error chain.

use crate::chain::Link;
use crate::types::alloc_type::{Cow, String};
use crate::types::{FieldMap, Kind};
use core::fmt::Write;
#[cfg(feature = "serde")]
use serde::Serialize;

/// One node of an error chain, as produced by [`stack`](crate::stack).
///
/// Every field may be empty: a frame for a foreign error only carries that
/// error's text. When serialized, empty fields are left out.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StackFrame<'a> {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "str::is_empty"))]
    pub kind: &'a str,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_empty_text"))]
    pub message: Cow<'a, str>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "str::is_empty"))]
    pub caller: &'a str,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "str::is_empty"))]
    pub file: &'a str,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub line: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_empty_fields"))]
    pub fields: Option<&'a FieldMap>,
}

impl<'a> StackFrame<'a> {
    /// Snapshot of a single link. Node frames borrow from the chain; a foreign
    /// frame owns the rendered text of the foreign error.
    pub fn from_link(link: Link<'a>) -> Self {
        match link {
            Link::Node(node) => {
                let site = node.call_site();
                Self {
                    kind: node.kind().map(Kind::as_str).unwrap_or_default(),
                    message: Cow::Borrowed(node.message().unwrap_or_default()),
                    caller: site.caller(),
                    file: site.file(),
                    line: site.line(),
                    fields: node.fields(),
                }
            },
            Link::Foreign(foreign) => {
                let mut text = String::new();
                let _ = write!(text, "{}", foreign);
                Self { message: Cow::Owned(text), ..Self::default() }
            },
        }
    }
}

#[cfg(feature = "serde")]
fn is_empty_text(text: &Cow<'_, str>) -> bool {
    text.is_empty()
}

#[cfg(feature = "serde")]
fn is_zero(line: &u32) -> bool {
    *line == 0
}

#[cfg(feature = "serde")]
fn is_empty_fields(fields: &Option<&FieldMap>) -> bool {
    fields.map_or(true, |fields| fields.is_empty())
}
