//! Call-site capture for error construction.

use core::panic::Location;
#[cfg(feature = "serde")]
use serde::Serialize;

/// The function, file and line an error was constructed at.
///
/// Captured automatically by the constructors. The `#[track_caller]`
/// constructors only know the file and line; the [`err!`](crate::err) family of
/// macros also records the enclosing function's name. Any component that could
/// not be determined is left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CallSite {
    caller: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    #[doc(hidden)]
    #[inline]
    pub const fn new(caller: &'static str, file: &'static str, line: u32) -> Self {
        Self { caller, file, line }
    }

    /// Captures the file and line of the code calling into the current
    /// `#[track_caller]` chain.
    #[track_caller]
    #[inline]
    pub fn here() -> Self {
        let location = Location::caller();
        Self { caller: "", file: location.file(), line: location.line() }
    }

    /// Name of the constructing function, without its module path.
    #[inline]
    pub fn caller(&self) -> &'static str {
        self.caller
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.caller.is_empty() && self.file.is_empty() && self.line == 0
    }
}

/// Reduces the type name of a probe function declared inside the caller to the
/// caller's bare name.
///
/// `app::users::load::{{closure}}::__probe` becomes `load`.
#[doc(hidden)]
pub fn short_function_name(probe: &'static str) -> &'static str {
    let mut path = probe.strip_suffix("::__probe").unwrap_or(probe);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(idx) => &path[idx + 2..],
        None => path,
    }
}
