//! The chained error node.
//!
//! [`Error`] carries an optional classification [`Kind`], a user-facing
//! message, an optional [`Cause`], structured fields and the [`CallSite`] it was
//! built at. Wrapping one error in another forms a chain that the functions in
//! [`crate::chain`] walk.

use crate::chain::{self, Link, Links, Matcher};
use crate::types::alloc_type::{Arc, Cow, String, Vec};
use crate::types::error_formatter::{ErrorFormatBuilder, ErrorFormatConfig};
use crate::types::{CallSite, FieldMap, Kind, StackFrame, Value};

mod arg;
mod traits;

pub use arg::{Arg, Cause, DynError, IntoCause};

/// A node in an error chain.
///
/// Build one with [`err!`](crate::err) or [`Error::new`], link it to an earlier
/// error with [`wrap!`](crate::wrap) or [`Error::wrap`], and attach fields right
/// after construction with the `with_field*` family.
///
/// ```
/// use chained_error::{err, wrap, Kind};
///
/// const TIMEOUT: Kind = Kind::from_static("timeout");
///
/// let inner = err!(TIMEOUT, "request timed out").with_field("attempt", 3);
/// let outer = wrap!(inner, "could not load profile").unwrap();
///
/// assert!(outer.is(TIMEOUT));
/// assert_eq!(outer.user_message(), "could not load profile");
/// assert_eq!(outer.stack().len(), 2);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Error {
    kind: Option<Kind>,
    message: Option<String>,
    cause: Option<Cause>,
    fields: Option<Arc<FieldMap>>,
    call_site: CallSite,
}

impl Error {
    /// Builds an error from its arguments, recording the caller's file and
    /// line.
    ///
    /// # Panics
    ///
    /// Panics when `args` is empty.
    #[track_caller]
    #[inline]
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self::build(args, CallSite::here())
    }

    /// Wraps `cause` in a new error built from `args`.
    ///
    /// Returns `None` when there is no cause, so a fallible call can be
    /// wrapped and returned in one expression.
    #[track_caller]
    #[inline]
    pub fn wrap<C, I>(cause: C, args: I) -> Option<Self>
    where
        C: IntoCause,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self::wrap_at(cause, args, CallSite::here())
    }

    #[doc(hidden)]
    pub fn build<I>(args: I, call_site: CallSite) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let mut error = Self::bare(call_site);
        let mut empty = true;
        for arg in args {
            empty = false;
            error.apply(arg.into());
        }
        if empty {
            panic!("chained_error: call to Error::new with no arguments");
        }
        error
    }

    #[doc(hidden)]
    pub fn wrap_at<C, I>(cause: C, args: I, call_site: CallSite) -> Option<Self>
    where
        C: IntoCause,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let cause = cause.into_cause()?;
        let mut error = Self::bare(call_site);
        for arg in args {
            error.apply(arg.into());
        }
        // The positional cause always wins over one passed in `args`.
        error.cause = Some(cause);
        Some(error)
    }

    pub(crate) fn caused_by(cause: Cause, call_site: CallSite) -> Self {
        Self { cause: Some(cause), ..Self::bare(call_site) }
    }

    #[inline]
    fn bare(call_site: CallSite) -> Self {
        Self { kind: None, message: None, cause: None, fields: None, call_site }
    }

    fn apply(&mut self, arg: Arg) {
        match arg {
            Arg::Kind(kind) => self.kind = Some(kind),
            Arg::Message(message) => self.message = Some(message),
            Arg::Cause(cause) => self.cause = Some(cause),
            Arg::Fields(fields) => self.fields = Some(Arc::new(fields)),
        }
    }

    /// Attaches one field to this node.
    #[inline]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert_field(key, value);
        self
    }

    /// Attaches one field in place.
    ///
    /// A map still shared with a duplicate taken by wrapping is copied before
    /// the write, so the wrapped chain keeps the fields it was built with.
    pub fn insert_field<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let fields = self.fields.get_or_insert_with(Default::default);
        Arc::make_mut(fields).insert(key.into(), value.into());
        self
    }

    /// Attaches every `(key, value)` pair.
    pub fn with_fields<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            self.insert_field(key, value);
        }
        self
    }

    /// Attaches fields from a flat `[key, value, key, value, ...]` list.
    ///
    /// # Panics
    ///
    /// Panics if the list has an odd length or a key position does not hold a
    /// string.
    ///
    /// ```
    /// use chained_error::{err, Value};
    ///
    /// let err = err!("oops").with_fields_flat([
    ///     Value::from("user"),
    ///     Value::from("ada"),
    ///     Value::from("attempt"),
    ///     Value::from(2),
    /// ]);
    /// assert_eq!(err.fields().map(|f| f.len()), Some(2));
    /// ```
    pub fn with_fields_flat<I>(mut self, kvs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let kvs: Vec<Value> = kvs.into_iter().map(Into::into).collect();
        if kvs.len() % 2 != 0 {
            panic!(
                "chained_error: invalid argument count for with_fields_flat, expected even number of fields, got {}",
                kvs.len()
            );
        }

        let mut kvs = kvs.into_iter();
        let mut index = 0;
        while let (Some(key), Some(value)) = (kvs.next(), kvs.next()) {
            let Value::String(key) = key else {
                panic!(
                    "chained_error: invalid type for key passed to with_fields_flat at index {}",
                    index
                );
            };
            self.insert_field(key, value);
            index += 2;
        }
        self
    }

    /// Classification tag of this node only.
    #[inline]
    pub fn kind(&self) -> Option<&Kind> {
        self.kind.as_ref()
    }

    /// Message stored on this node only. See [`user_message`](Self::user_message)
    /// for the resolved, user-facing text.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Fields attached to this node only. See
    /// [`merged_fields`](Self::merged_fields) for the whole chain.
    #[inline]
    pub fn fields(&self) -> Option<&FieldMap> {
        self.fields.as_deref()
    }

    #[inline]
    pub fn call_site(&self) -> CallSite {
        self.call_site
    }

    /// Iterates this node and every cause below it, head first.
    #[inline]
    pub fn links(&self) -> Links<'_> {
        chain::links(self)
    }

    /// The last link of the chain.
    pub fn root_cause(&self) -> Link<'_> {
        let mut current = Link::Node(self);
        for link in self.links() {
            current = link;
        }
        current
    }

    /// Reports whether this error or any cause has the given kind.
    #[inline]
    pub fn is<'m, M: Into<Matcher<'m>>>(&self, kind: M) -> bool {
        chain::is(self, [kind])
    }

    /// Reports whether this error or any cause matches one of `candidates`.
    #[inline]
    pub fn is_any<'m, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Matcher<'m>>,
    {
        chain::is(self, candidates)
    }

    /// The first message found in the chain, or the generic fallback.
    #[inline]
    pub fn user_message(&self) -> &str {
        chain::message(self)
    }

    /// All fields of the chain merged, outermost nodes winning.
    #[inline]
    pub fn merged_fields(&self) -> Option<Cow<'_, FieldMap>> {
        chain::fields(self)
    }

    #[inline]
    pub fn fields_slice(&self) -> Option<Vec<Value>> {
        chain::fields_slice(self)
    }

    #[inline]
    pub fn stack(&self) -> Vec<StackFrame<'_>> {
        chain::stack(self)
    }

    /// Returns a builder for customising how this error is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// Multi-line rendering with file, line and fields of every node.
    #[must_use]
    pub fn format_verbose(&self) -> String {
        ErrorFormatConfig::verbose().render(self)
    }
}
