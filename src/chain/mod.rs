//! Read-only queries over an error chain.
//!
//! Every function here accepts anything implementing [`AsChain`]: an
//! [`Error`], an optional one, a [`Cause`], or a `&dyn Error`. A missing error
//! ("no error occurred") always produces a neutral answer rather than a panic.
//!
//! - [`is`]: kind classification anywhere in the chain
//! - [`message`]: first user-facing message, with a generic fallback
//! - [`fields`] / [`fields_slice`]: structured fields merged across the chain
//! - [`stack`]: one serializable frame per link
//! - [`fatal`]: opt-in escalation of an error into a panic

use crate::types::alloc_type::{Cow, Vec};
use crate::types::{Cause, ChainVec, DynError, Error, FieldMap, Result, StackFrame, Value};

mod fatal;
mod matcher;

pub use fatal::{fatal, fatal_at};
pub use matcher::Matcher;

/// Returned by [`message`] when no link of the chain carries a message.
pub const FALLBACK_MESSAGE: &str =
    "An internal error has occurred. Please contact technical support.";

/// Borrowed view of one link of a chain.
#[derive(Debug, Clone, Copy)]
pub enum Link<'a> {
    Node(&'a Error),
    Foreign(&'a DynError),
}

impl<'a> Link<'a> {
    #[inline]
    pub fn as_error(self) -> Option<&'a Error> {
        match self {
            Self::Node(node) => Some(node),
            Self::Foreign(_) => None,
        }
    }

    /// The link below this one. Foreign errors end the chain.
    #[inline]
    pub fn next(self) -> Option<Link<'a>> {
        match self {
            Self::Node(node) => node.cause().map(Cause::link),
            Self::Foreign(_) => None,
        }
    }
}

/// Anything that may be the head of an error chain.
pub trait AsChain<'a> {
    /// The first link, or `None` when there is no error at all.
    fn head(self) -> Option<Link<'a>>;
}

impl<'a> AsChain<'a> for Link<'a> {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        Some(self)
    }
}

impl<'a> AsChain<'a> for Option<Link<'a>> {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        self
    }
}

impl<'a> AsChain<'a> for &'a Error {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        Some(Link::Node(self))
    }
}

impl<'a> AsChain<'a> for Option<&'a Error> {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        self.map(Link::Node)
    }
}

impl<'a> AsChain<'a> for &'a Option<Error> {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        self.as_ref().map(Link::Node)
    }
}

impl<'a, T> AsChain<'a> for &'a Result<T> {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        self.as_ref().err().map(Link::Node)
    }
}

impl<'a> AsChain<'a> for &'a Cause {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        Some(self.link())
    }
}

impl<'a> AsChain<'a> for Option<&'a Cause> {
    #[inline]
    fn head(self) -> Option<Link<'a>> {
        self.map(Cause::link)
    }
}

/// Type-erased errors are inspected: an [`Error`] behind the trait object keeps
/// the chain going, anything else is a foreign terminator.
impl<'a> AsChain<'a> for &'a DynError {
    fn head(self) -> Option<Link<'a>> {
        Some(match self.downcast_ref::<Error>() {
            Some(node) => Link::Node(node),
            None => Link::Foreign(self),
        })
    }
}

/// Iterator over the links of a chain, head first.
#[derive(Debug, Clone)]
pub struct Links<'a> {
    next: Option<Link<'a>>,
}

impl<'a> Iterator for Links<'a> {
    type Item = Link<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}

impl core::iter::FusedIterator for Links<'_> {}

/// Walks `err` from the head down to its root cause.
#[inline]
pub fn links<'a>(err: impl AsChain<'a>) -> Links<'a> {
    Links { next: err.head() }
}

/// Reports whether `err` or any of its causes matches one of `candidates`.
///
/// Kind candidates compare against each node's kind; an empty kind never
/// matches. Cause candidates match a node whose cause is the very same shared
/// allocation. Every candidate is checked against a node before moving on to
/// its cause, and the walk stops at the first foreign error.
///
/// ```
/// use chained_error::{err, is, wrap, Kind};
///
/// const NOT_FOUND: Kind = Kind::from_static("not found");
/// const INACTIVE: Kind = Kind::from_static("inactive");
///
/// let err = wrap!(err!(INACTIVE), "lookup failed").unwrap();
/// assert!(is(&err, [NOT_FOUND, INACTIVE]));
/// assert!(!is(&err, [NOT_FOUND]));
/// assert!(!is(None::<&chained_error::Error>, [INACTIVE]));
/// ```
pub fn is<'a, 'm, I>(err: impl AsChain<'a>, candidates: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Matcher<'m>>,
{
    let candidates: ChainVec<Matcher<'m>> = candidates.into_iter().map(Into::into).collect();

    for link in links(err) {
        let Link::Node(node) = link else {
            return false;
        };
        if candidates.iter().any(|candidate| candidate.matches(node)) {
            return true;
        }
    }
    false
}

/// Resolves the user-facing message of a chain.
///
/// Returns the first non-empty message from the head down, or
/// [`FALLBACK_MESSAGE`] if there is none. A missing error yields `""`.
pub fn message<'a>(err: impl AsChain<'a>) -> &'a str {
    let Some(head) = err.head() else {
        return "";
    };

    for link in links(head) {
        match link {
            Link::Node(node) => {
                if let Some(message) = node.message().filter(|m| !m.is_empty()) {
                    return message;
                }
            },
            Link::Foreign(_) => break,
        }
    }
    FALLBACK_MESSAGE
}

/// Merges the fields of every node in the chain.
///
/// Nodes closer to the head override same-named fields of their causes. When
/// only one node carries fields its map is returned borrowed; otherwise a new
/// map is built and no node is modified. Returns `None` when there are no
/// fields anywhere.
pub fn fields<'a>(err: impl AsChain<'a>) -> Option<Cow<'a, FieldMap>> {
    let maps: ChainVec<&'a FieldMap> =
        links(err).filter_map(Link::as_error).filter_map(Error::fields).collect();

    match maps.as_slice() {
        [] => None,
        [only] => Some(Cow::Borrowed(*only)),
        _ => {
            let mut merged = FieldMap::new();
            for map in maps.iter().rev() {
                merged.extend(map.iter().map(|(key, value)| (key.clone(), value.clone())));
            }
            Some(Cow::Owned(merged))
        },
    }
}

/// Merged fields as an alternating `[key, value, ...]` list in ascending key
/// order, ready for loggers taking flat key/value arguments.
pub fn fields_slice<'a>(err: impl AsChain<'a>) -> Option<Vec<Value>> {
    let merged = fields(err)?;
    if merged.is_empty() {
        return None;
    }

    let mut flat = Vec::with_capacity(merged.len() * 2);
    for (key, value) in merged.iter() {
        flat.push(Value::String(key.clone()));
        flat.push(value.clone());
    }
    Some(flat)
}

/// One [`StackFrame`] per link, head first.
///
/// A foreign root cause contributes a final frame holding only its text. A
/// missing error yields an empty vector.
pub fn stack<'a>(err: impl AsChain<'a>) -> Vec<StackFrame<'a>> {
    let head = err.head();
    let mut frames = Vec::with_capacity(links(head).count());
    frames.extend(links(head).map(StackFrame::from_link));
    frames
}
