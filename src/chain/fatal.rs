use crate::chain::message;
use crate::types::{CallSite, Cause, Error, IntoCause};

/// Escalates an error into a panic.
///
/// Does nothing when there is no error. Otherwise the error is wrapped in a
/// node attributed to the caller and the process panics with the resolved
/// message followed by the verbose rendering of the chain. Prefer
/// [`fatal!`](crate::fatal) which also records the calling function's name.
///
/// ```should_panic
/// use chained_error::{err, fatal};
///
/// fatal(None::<chained_error::Error>);
/// fatal(err!("disk full"));
/// ```
#[track_caller]
#[inline]
pub fn fatal<C: IntoCause>(err: C) {
    fatal_at(err, CallSite::here())
}

#[doc(hidden)]
pub fn fatal_at<C: IntoCause>(err: C, call_site: CallSite) {
    let Some(cause) = err.into_cause() else {
        return;
    };

    // A node built at this very call-site would only repeat the frame below it.
    let wrapped = match cause {
        Cause::Node(node) if same_site(node.call_site(), call_site) => node,
        cause => Error::caused_by(cause, call_site).into(),
    };

    panic!("fatal error: {}\n\n{:#}", message(&*wrapped), wrapped);
}

/// Compares file and line, and the caller only when both sides recorded one.
fn same_site(built: CallSite, site: CallSite) -> bool {
    let callers_agree =
        built.caller().is_empty() || site.caller().is_empty() || built.caller() == site.caller();
    callers_agree && built.file() == site.file() && built.line() == site.line()
}
