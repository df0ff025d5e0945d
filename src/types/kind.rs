//! Classification tags for errors.

use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque classification tag used to branch on errors independently of their
/// message text.
///
/// Kinds are compared by value, so they can be declared as constants in any
/// crate and checked with [`is`](crate::is):
///
/// ```
/// use chained_error::{err, Kind};
///
/// const USER_NOT_FOUND: Kind = Kind::from_static("user not found");
///
/// let err = err!(USER_NOT_FOUND, "no such user");
/// assert!(err.is(USER_NOT_FOUND));
/// ```
///
/// An empty kind means "no classification" and never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Kind(Cow<'static, str>);

impl Kind {
    /// Creates a kind from a static string, usable in `const` items.
    #[inline]
    pub const fn from_static(kind: &'static str) -> Self {
        Self(Cow::Borrowed(kind))
    }

    /// Creates a kind from any owned or static string.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(kind: S) -> Self {
        Self(kind.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_inner(self) -> Cow<'static, str> {
        self.0
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Kind {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Kind {
    #[inline]
    fn from(kind: &'static str) -> Self {
        Self::from_static(kind)
    }
}

impl From<String> for Kind {
    #[inline]
    fn from(kind: String) -> Self {
        Self(Cow::Owned(kind))
    }
}

impl PartialEq<str> for Kind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Kind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
