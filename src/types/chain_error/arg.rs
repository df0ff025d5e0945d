//! Tagged constructor arguments and error causes.

use super::Error;
use crate::chain::Link;
use crate::types::alloc_type::{Arc, Box, Cow, String};
use crate::types::{FieldMap, Kind};

/// Any foreign error that can terminate a chain.
pub type DynError = dyn core::error::Error + Send + Sync + 'static;

/// The error an [`Error`] was caused by.
///
/// A cause is either another node of the chain or a foreign error, which always
/// terminates the chain.
#[derive(Debug, Clone)]
pub enum Cause {
    Node(Arc<Error>),
    Foreign(Arc<DynError>),
}

impl Cause {
    /// Wraps an arbitrary error as a cause.
    ///
    /// An [`Error`] passed through here is recognised and kept as a node, so
    /// the chain continues through it.
    pub fn foreign<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from(Box::new(error) as Box<DynError>)
    }

    /// Returns the cause as a chain node, if it is one.
    #[inline]
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Self::Node(node) => Some(node),
            Self::Foreign(_) => None,
        }
    }

    /// Borrowed view of this cause as a chain link.
    #[inline]
    pub fn link(&self) -> Link<'_> {
        match self {
            Self::Node(node) => Link::Node(node),
            Self::Foreign(foreign) => Link::Foreign(&**foreign),
        }
    }

    /// Address of the shared allocation, used for identity matching.
    #[inline]
    pub(crate) fn addr(&self) -> *const () {
        match self {
            Self::Node(node) => Arc::as_ptr(node) as *const (),
            Self::Foreign(foreign) => Arc::as_ptr(foreign) as *const (),
        }
    }
}

impl From<Error> for Cause {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Node(Arc::new(error))
    }
}

/// Shallow duplicate: scalar parts are copied, the field map is shared until
/// either side writes to it.
impl From<&Error> for Cause {
    #[inline]
    fn from(error: &Error) -> Self {
        Self::Node(Arc::new(error.clone()))
    }
}

impl From<Arc<Error>> for Cause {
    #[inline]
    fn from(error: Arc<Error>) -> Self {
        Self::Node(error)
    }
}

impl From<Box<DynError>> for Cause {
    fn from(error: Box<DynError>) -> Self {
        match error.downcast::<Error>() {
            Ok(node) => Self::Node(Arc::from(node)),
            Err(foreign) => Self::Foreign(Arc::from(foreign)),
        }
    }
}

impl From<Arc<DynError>> for Cause {
    fn from(error: Arc<DynError>) -> Self {
        match error.downcast_ref::<Error>() {
            Some(node) => Self::Node(Arc::new(node.clone())),
            None => Self::Foreign(error),
        }
    }
}

/// Conversion into an optional cause, accepted by [`Error::wrap`] and
/// [`fatal`](crate::fatal).
///
/// `None` means there is nothing to wrap.
pub trait IntoCause {
    fn into_cause(self) -> Option<Cause>;
}

macro_rules! impl_into_cause {
    ($($source:ty),*) => {
        $(
            impl IntoCause for $source {
                #[inline]
                fn into_cause(self) -> Option<Cause> {
                    Some(Cause::from(self))
                }
            }
        )*
    };
}

impl_into_cause!(Error, &Error, Arc<Error>, Box<DynError>, Arc<DynError>);

impl IntoCause for Cause {
    #[inline]
    fn into_cause(self) -> Option<Cause> {
        Some(self)
    }
}

impl<C: IntoCause> IntoCause for Option<C> {
    #[inline]
    fn into_cause(self) -> Option<Cause> {
        self.and_then(IntoCause::into_cause)
    }
}

/// A single constructor argument.
///
/// Each variant lands in a different part of the error, so arguments can be
/// given in any order. A later argument of the same variant replaces an earlier
/// one.
#[derive(Debug, Clone)]
pub enum Arg {
    Kind(Kind),
    Message(String),
    Cause(Cause),
    Fields(FieldMap),
}

impl Arg {
    /// Uses an arbitrary error as the cause.
    #[inline]
    pub fn foreign<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Cause(Cause::foreign(error))
    }
}

impl From<Kind> for Arg {
    #[inline]
    fn from(kind: Kind) -> Self {
        Self::Kind(kind)
    }
}

impl From<&Kind> for Arg {
    #[inline]
    fn from(kind: &Kind) -> Self {
        Self::Kind(kind.clone())
    }
}

impl From<&str> for Arg {
    #[inline]
    fn from(message: &str) -> Self {
        Self::Message(message.into())
    }
}

impl From<&String> for Arg {
    #[inline]
    fn from(message: &String) -> Self {
        Self::Message(message.clone())
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<Cow<'_, str>> for Arg {
    #[inline]
    fn from(message: Cow<'_, str>) -> Self {
        Self::Message(message.into_owned())
    }
}

impl From<FieldMap> for Arg {
    #[inline]
    fn from(fields: FieldMap) -> Self {
        Self::Fields(fields)
    }
}

impl From<Cause> for Arg {
    #[inline]
    fn from(cause: Cause) -> Self {
        Self::Cause(cause)
    }
}

macro_rules! impl_cause_arg {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Arg {
                #[inline]
                fn from(cause: $source) -> Self {
                    Self::Cause(Cause::from(cause))
                }
            }
        )*
    };
}

impl_cause_arg!(Error, &Error, Arc<Error>, Box<DynError>, Arc<DynError>);
