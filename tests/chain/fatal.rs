use chained_error::{err, fatal, wrap, Cause, Error, FALLBACK_MESSAGE};
use std::io;
use std::panic::{self, AssertUnwindSafe};

fn panic_payload(f: impl FnOnce()) -> String {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).expect_err("expected a panic");
    match payload.downcast::<String>() {
        Ok(text) => *text,
        Err(other) => other.downcast_ref::<&str>().map(|s| s.to_string()).unwrap_or_default(),
    }
}

#[test]
fn fatal_without_an_error_returns() {
    fatal(None::<Error>);
    fatal!(None::<&Error>);
}

#[test]
fn fatal_payload_contains_every_message() {
    let err = wrap!(err!("inner problem"), "outer problem").expect("wrapped");

    let payload = panic_payload(|| fatal(&err));

    assert!(payload.starts_with("fatal error: outer problem\n\nError"));
    assert!(payload.contains("outer problem"));
    assert!(payload.contains("inner problem"));
    assert!(payload.contains("Caused by"));
}

#[test]
fn fatal_adds_a_frame_for_a_different_call_site() {
    let err = err!("boom");

    let payload = panic_payload(|| fatal!(&err));

    assert_eq!(payload.matches("File: ").count(), 2);
    assert!(payload.contains("Caused by: [fatal_adds_a_frame_for_a_different_call_site]: boom"));
}

#[test]
fn fatal_drops_a_frame_duplicating_the_original() {
    let payload = panic_payload(|| fatal!(err!("boom")));

    assert!(payload.starts_with(
        "fatal error: boom\n\nError: [fatal_drops_a_frame_duplicating_the_original]: boom\n"
    ));
    assert_eq!(payload.matches("File: ").count(), 1);
    assert!(!payload.contains("Caused by"));
}

#[test]
fn fatal_fn_drops_a_frame_built_on_the_same_line() {
    let line = line!() + 1;
    let payload = panic_payload(|| fatal(err!("boom")));

    assert!(payload.starts_with(
        "fatal error: boom\n\nError: [fatal_fn_drops_a_frame_built_on_the_same_line]: boom\n"
    ));
    assert!(payload.ends_with(&format!("line {}\n", line)));
    assert_eq!(payload.matches("File: ").count(), 1);
    assert!(!payload.contains("Caused by"));
}

#[test]
fn fatal_fn_keeps_a_frame_from_another_line() {
    let err = err!("boom");

    let payload = panic_payload(|| fatal(&err));

    assert_eq!(payload.matches("File: ").count(), 2);
    assert!(payload.contains("Caused by: [fatal_fn_keeps_a_frame_from_another_line]: boom"));
}

#[test]
fn fatal_renders_foreign_errors() {
    let payload = panic_payload(|| fatal(Cause::foreign(io::Error::other("disk gone"))));

    assert!(payload.starts_with(&format!("fatal error: {}", FALLBACK_MESSAGE)));
    assert!(payload.ends_with("Caused by: disk gone"));
}
