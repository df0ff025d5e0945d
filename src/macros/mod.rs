//! Constructor macros that capture the full call-site.
//!
//! - [`macro@crate::err`] - builds a new [`Error`](crate::Error) from any mix of
//!   kind, message, cause and fields.
//! - [`macro@crate::wrap`] - wraps an optional cause, yielding `None` when there
//!   is nothing to wrap.
//! - [`macro@crate::fatal`] - escalates an error into a panic.
//! - [`macro@crate::fields`] - builds a [`FieldMap`](crate::FieldMap) literal.
//!
//! Unlike the `#[track_caller]` functions they expand to, these macros also
//! record the name of the enclosing function.
//!
//! # Examples
//!
//! ```
//! use chained_error::{err, fields, wrap, Kind};
//!
//! const ERR_TIMEOUT: Kind = Kind::from_static("timeout");
//!
//! fn fetch() -> Result<(), chained_error::Error> {
//!     Err(err!(ERR_TIMEOUT, "client: HTTP request timed out"))
//! }
//!
//! fn load() -> Option<chained_error::Error> {
//!     wrap!(fetch().err(), "accom: fetch failed", fields! { "tti_code" => 42 })
//! }
//!
//! let err = load().unwrap();
//! assert_eq!(err.call_site().caller(), "load");
//! assert_eq!(
//!     err.to_string(),
//!     "[load]: accom: fetch failed: [fetch]: client: HTTP request timed out (timeout)"
//! );
//! ```

/// Builds an [`Error`](crate::Error) from its arguments.
///
/// Each argument converts into an [`Arg`](crate::Arg): a [`Kind`](crate::Kind)
/// sets the kind, a string the message, an `Error` or
/// [`Cause`](crate::Cause) the cause and a [`FieldMap`](crate::FieldMap) the
/// fields.
///
/// # Panics
///
/// Panics when called without arguments.
///
/// ```
/// use chained_error::{err, Kind};
///
/// let err = err!(Kind::from_static("testing"), "oops");
/// assert_eq!(err.message(), Some("oops"));
/// ```
#[macro_export]
macro_rules! err {
    () => {
        $crate::Error::build(::core::iter::empty::<$crate::Arg>(), $crate::__call_site!())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Error::build(
            [$(::core::convert::Into::<$crate::Arg>::into($arg)),+],
            $crate::__call_site!(),
        )
    };
}

/// Wraps an optional cause in a new [`Error`](crate::Error).
///
/// Evaluates to `None` when the cause is `None`.
///
/// ```
/// use chained_error::{err, wrap, Error};
///
/// assert!(wrap!(None::<Error>, "nothing happened").is_none());
///
/// let err = wrap!(err!("inner"), "outer").unwrap();
/// assert_eq!(err.user_message(), "outer");
/// ```
#[macro_export]
macro_rules! wrap {
    ($cause:expr $(,)?) => {
        $crate::Error::wrap_at(
            $cause,
            ::core::iter::empty::<$crate::Arg>(),
            $crate::__call_site!(),
        )
    };
    ($cause:expr, $($arg:expr),+ $(,)?) => {
        $crate::Error::wrap_at(
            $cause,
            [$(::core::convert::Into::<$crate::Arg>::into($arg)),+],
            $crate::__call_site!(),
        )
    };
}

/// Panics with the full rendering of an error, unless it is `None`.
///
/// See [`fatal`](crate::fatal()).
#[macro_export]
macro_rules! fatal {
    ($err:expr $(,)?) => {
        $crate::fatal_at($err, $crate::__call_site!())
    };
}

/// Builds a [`FieldMap`](crate::FieldMap) from `key => value` pairs.
///
/// ```
/// use chained_error::{fields, Value};
///
/// let map = fields! { "user" => "ada", "attempt" => 3 };
/// assert_eq!(map.get("attempt"), Some(&Value::I64(3)));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::FieldMap::new();
        $(
            map.insert(
                ::core::convert::Into::into($key),
                ::core::convert::Into::<$crate::Value>::into($value),
            );
        )+
        map
    }};
}

/// Captures the enclosing function name, file and line.
#[macro_export]
#[doc(hidden)]
macro_rules! __call_site {
    () => {
        $crate::CallSite::new(
            {
                fn __probe() {}
                $crate::types::call_site::short_function_name(::core::any::type_name_of_val(
                    &__probe,
                ))
            },
            file!(),
            line!(),
        )
    };
}
