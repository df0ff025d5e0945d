use chained_error::{
    err, fields, fields_slice, is, message, stack, wrap, Arg, Cause, DynError, Error, Kind,
    Matcher, Value, FALLBACK_MESSAGE,
};
use std::borrow::Cow;
use std::io;
use std::sync::Arc;

mod fatal;

const TESTING: Kind = Kind::from_static("testing");
const OTHER: Kind = Kind::from_static("other");
const UNUSED: Kind = Kind::from_static("unused");

// ============================================================================
// is
// ============================================================================

#[test]
fn is_matches_the_head_kind() {
    assert!(is(&err!(TESTING), [TESTING]));
}

#[test]
fn is_matches_kinds_deeper_in_the_chain() {
    let err = wrap!(wrap!(err!(TESTING), OTHER), "outer").expect("wrapped");

    assert!(is(&err, [TESTING]));
    assert!(is(&err, [OTHER]));
    assert!(err.is(TESTING));
}

#[test]
fn is_matches_any_of_several_kinds() {
    let err = err!(OTHER);

    assert!(is(&err, [UNUSED, OTHER]));
    assert!(err.is_any([&TESTING, &OTHER]));
    assert!(!is(&err, [UNUSED, TESTING]));
}

#[test]
fn is_accepts_plain_strings() {
    assert!(is(&err!(TESTING), ["testing"]));
}

#[test]
fn is_is_false_without_an_error() {
    assert!(!is(None::<&Error>, [TESTING]));
}

#[test]
fn empty_kinds_never_match() {
    let err = err!(Kind::new(""), "no kind");

    assert!(!is(&err, [Kind::new("")]));
    assert!(!is(&err, [""]));
}

#[test]
fn is_stops_at_foreign_errors() {
    let err = err!(Arg::foreign(io::Error::other("eof")));

    assert!(!is(&err, ["eof"]));
}

#[test]
fn is_matches_a_shared_foreign_cause_by_identity() {
    let eof: Arc<DynError> = Arc::new(io::Error::other("eof"));
    let unrelated: Arc<DynError> = Arc::new(io::Error::other("eof"));
    let err = wrap!(err!("read failed", Arc::clone(&eof)), "outer").expect("wrapped");

    assert!(is(&err, [&eof]));
    assert!(!is(&err, [&unrelated]));
}

#[test]
fn is_matches_a_shared_node_cause_by_identity() {
    let shared = Arc::new(err!("inner"));
    let err = err!("outer", Arc::clone(&shared));

    assert!(is(&err, [&shared]));
    assert!(!is(&err!("outer", &*shared), [&shared]));
}

#[test]
fn is_mixes_kinds_and_causes() {
    let eof: Arc<DynError> = Arc::new(io::Error::other("eof"));
    let err = err!("read failed", Arc::clone(&eof));

    assert!(is(&err, [Matcher::from(TESTING), Matcher::from(&eof)]));
}

#[test]
fn is_sees_through_trait_objects_and_results() {
    let boxed: Box<DynError> = Box::new(wrap!(err!(TESTING), "outer").expect("wrapped"));
    assert!(is(&*boxed, [TESTING]));

    let result: chained_error::Result<()> = Err(err!(TESTING));
    assert!(is(&result, [TESTING]));

    let ok: chained_error::Result<()> = Ok(());
    assert!(!is(&ok, [TESTING]));
}

// ============================================================================
// message
// ============================================================================

#[test]
fn message_falls_back_without_any_message() {
    assert_eq!(message(&err!(TESTING)), FALLBACK_MESSAGE);
    assert_eq!(
        FALLBACK_MESSAGE,
        "An internal error has occurred. Please contact technical support."
    );
}

#[test]
fn message_returns_the_head_message() {
    assert_eq!(message(&err!("custom")), "custom");
}

#[test]
fn message_descends_the_chain() {
    let err = wrap!(err!("inner")).expect("wrapped");

    assert_eq!(message(&err), "inner");
    assert_eq!(err.user_message(), "inner");
}

#[test]
fn message_prefers_the_outermost_message() {
    let err = wrap!(err!("inner"), "outer").expect("wrapped");

    assert_eq!(message(&err), "outer");
}

#[test]
fn message_is_empty_without_an_error() {
    assert_eq!(message(None::<&Error>), "");
}

#[test]
fn message_does_not_leak_foreign_text() {
    let err = err!(TESTING, Arg::foreign(io::Error::other("secret path /etc/shadow")));

    assert_eq!(message(&err), FALLBACK_MESSAGE);
    assert_eq!(message(err.cause()), FALLBACK_MESSAGE);
}

// ============================================================================
// fields / fields_slice
// ============================================================================

#[test]
fn fields_of_the_head_win() {
    let inner = err!("x").with_field("foo", "qux");
    let err = wrap!(inner).expect("wrapped").with_field("foo", "bar");

    let merged = fields(&err).expect("fields");
    assert_eq!(merged["foo"], Value::from("bar"));
}

#[test]
fn fields_merge_across_the_chain() {
    let inner = err!("x").with_field("baz", "qux").with_field("foo", "inner");
    let err = wrap!(inner, "outer").expect("wrapped").with_field("foo", "bar");

    let merged = err.merged_fields().expect("fields");
    assert!(matches!(merged, Cow::Owned(_)));
    assert_eq!(merged.len(), 2);
    assert_eq!(merged["baz"], Value::from("qux"));
    assert_eq!(merged["foo"], Value::from("bar"));

    // Merging leaves every node's own map alone.
    assert_eq!(err.fields().map(|f| f.len()), Some(1));
    let inner = err.cause().and_then(Cause::as_error).expect("node cause");
    assert_eq!(inner.fields().expect("fields")["foo"], Value::from("inner"));
}

#[test]
fn fields_of_a_single_node_are_borrowed() {
    let inner = err!("x").with_field("foo", "bar");
    let err = wrap!(inner, "outer").expect("wrapped");

    assert!(matches!(fields(&err), Some(Cow::Borrowed(_))));
}

#[test]
fn fields_are_absent_without_any() {
    assert!(fields(None::<&Error>).is_none());
    assert!(fields(&wrap!(err!("x"), "y").expect("wrapped")).is_none());
    assert!(fields_slice(&err!("x")).is_none());
}

#[test]
fn fields_slice_is_sorted_by_key() {
    let inner = err!("x").with_field("foo", "bar");
    let err = wrap!(inner).expect("wrapped").with_field("baz", "qux");

    let flat = fields_slice(&err).expect("fields");
    assert_eq!(
        flat,
        vec![Value::from("baz"), Value::from("qux"), Value::from("foo"), Value::from("bar")]
    );
}

#[test]
fn fields_are_idempotent() {
    let err = wrap!(err!("x").with_field("a", 1), "y").expect("wrapped").with_field("b", 2);

    assert_eq!(fields(&err), fields(&err));
    assert_eq!(fields_slice(&err), fields_slice(&err));
}

// ============================================================================
// stack
// ============================================================================

#[test]
fn stack_has_one_frame_per_node() {
    let err = wrap!(wrap!(err!("root"), "middle"), "head").expect("wrapped");

    let frames = stack(&err);
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].message, "head");
    assert_eq!(frames[1].message, "middle");
    assert_eq!(frames[2].message, "root");
}

#[test]
fn stack_ends_with_a_foreign_frame() {
    let err = wrap!(err!(TESTING, Arg::foreign(io::Error::other("eof"))), "head").expect("wrapped");

    let frames = err.stack();
    assert_eq!(frames.len(), 3);

    let last = &frames[2];
    assert_eq!(last.message, "eof");
    assert!(last.kind.is_empty());
    assert!(last.caller.is_empty());
    assert!(last.file.is_empty());
    assert_eq!(last.line, 0);
    assert!(last.fields.is_none());
}

#[test]
fn stack_frames_keep_raw_node_data() {
    let inner = err!(TESTING, "inner").with_field("attempt", 1);
    let err = wrap!(inner).expect("wrapped");

    let frames = stack(&err);
    assert_eq!(frames[0].message, "");
    assert_eq!(frames[0].caller, "stack_frames_keep_raw_node_data");
    assert!(frames[0].file.ends_with("mod.rs"));
    assert!(frames[0].line > 0);
    assert!(frames[0].fields.is_none());
    assert_eq!(frames[1].kind, "testing");
    assert_eq!(frames[1].fields.map(|f| f.len()), Some(1));
}

#[test]
fn stack_of_nothing_is_empty() {
    assert!(stack(None::<&Error>).is_empty());
}

#[test]
fn stack_of_a_foreign_error_is_one_frame() {
    let cause = Cause::foreign(io::Error::other("eof"));

    let frames = stack(&cause);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].message, "eof");
}

#[test]
fn stack_is_idempotent() {
    let err = wrap!(err!("x").with_field("a", 1), "y").expect("wrapped");

    assert_eq!(stack(&err), stack(&err));
}
