//! Extension trait for wrapping the error of a `Result`.
//!
//! # Examples
//!
//! ```
//! use chained_error::traits::ResultExt;
//! use chained_error::{Arg, Kind};
//!
//! const CONFIG: Kind = Kind::from_static("config");
//!
//! fn load_config() -> chained_error::Result<String> {
//!     std::fs::read_to_string("/nonexistent/config.toml")
//!         .wrap_err([Arg::from(CONFIG), Arg::from("loading configuration file")])
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.is(CONFIG));
//! assert_eq!(err.stack().len(), 2);
//! ```

use crate::types::{Arg, CallSite, Cause, Error};

/// Wraps the error of a `Result` in a chained [`Error`].
///
/// Any error type can be wrapped; an [`Error`] stays part of the chain, other
/// errors become its foreign root cause. The call-site records the file and
/// line of the caller.
pub trait ResultExt<T> {
    /// Wraps the error with the given arguments.
    #[track_caller]
    fn wrap_err<I>(self, args: I) -> Result<T, Error>
    where
        I: IntoIterator,
        I::Item: Into<Arg>;

    /// Wraps the error with arguments built only on failure.
    #[track_caller]
    fn wrap_err_with<F, I>(self, args: F) -> Result<T, Error>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Arg>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn wrap_err<I>(self, args: I) -> Result<T, Error>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(wrap_with(error, args, CallSite::here())),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_err_with<F, I>(self, args: F) -> Result<T, Error>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(wrap_with(error, args(), CallSite::here())),
        }
    }
}

fn wrap_with<E, I>(error: E, args: I, call_site: CallSite) -> Error
where
    E: core::error::Error + Send + Sync + 'static,
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let cause = Arg::Cause(Cause::foreign(error));
    Error::build(args.into_iter().map(Into::into).chain(core::iter::once(cause)), call_site)
}
