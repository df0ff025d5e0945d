use crate::types::alloc_type::{Arc, Cow};
use crate::types::{Cause, DynError, Error, Kind};

/// A candidate for [`is`](crate::is).
///
/// Kinds and plain strings are compared against each node's kind. Causes,
/// shared errors and foreign errors are compared by identity against each
/// node's cause.
///
/// A plain string is not a distinct candidate type: it converts into the same
/// `Matcher::Kind` a [`Kind`] does, so `is(&err, ["x"])` matches a node whose
/// kind is `Kind::from_static("x")`. Callers that need strings and kinds kept
/// apart must compare [`Error::kind`] themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher<'m> {
    Kind(Cow<'m, str>),
    Cause(*const ()),
}

impl Matcher<'_> {
    pub(crate) fn matches(&self, node: &Error) -> bool {
        match self {
            Self::Kind(kind) => node
                .kind()
                .is_some_and(|own| !own.is_empty() && own.as_str() == kind.as_ref()),
            Self::Cause(addr) => node.cause().is_some_and(|cause| cause.addr() == *addr),
        }
    }
}

impl From<Kind> for Matcher<'_> {
    #[inline]
    fn from(kind: Kind) -> Self {
        Self::Kind(kind.into_inner())
    }
}

impl<'m> From<&'m Kind> for Matcher<'m> {
    #[inline]
    fn from(kind: &'m Kind) -> Self {
        Self::Kind(Cow::Borrowed(kind.as_str()))
    }
}

impl<'m> From<&'m str> for Matcher<'m> {
    #[inline]
    fn from(kind: &'m str) -> Self {
        Self::Kind(Cow::Borrowed(kind))
    }
}

impl<'m> From<&'m Cause> for Matcher<'m> {
    #[inline]
    fn from(cause: &'m Cause) -> Self {
        Self::Cause(cause.addr())
    }
}

impl<'m> From<&'m Arc<Error>> for Matcher<'m> {
    #[inline]
    fn from(error: &'m Arc<Error>) -> Self {
        Self::Cause(Arc::as_ptr(error) as *const ())
    }
}

impl<'m> From<&'m Arc<DynError>> for Matcher<'m> {
    #[inline]
    fn from(error: &'m Arc<DynError>) -> Self {
        Self::Cause(Arc::as_ptr(error) as *const ())
    }
}
