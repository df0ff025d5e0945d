use chained_error::{err, wrap, Arg, Error, ErrorFormatConfig, Kind};
use std::io;

const TESTING: Kind = Kind::from_static("testing");

#[test]
fn compact_formatting_shows_caller_message_and_kind() {
    let err = err!(TESTING, "oops");

    assert_eq!(
        err.to_string(),
        "[compact_formatting_shows_caller_message_and_kind]: oops (testing)"
    );
}

#[test]
fn compact_formatting_renders_the_whole_chain() {
    let err = wrap!(err!(TESTING, "inner"), "outer").expect("wrapped");

    assert_eq!(
        err.to_string(),
        "[compact_formatting_renders_the_whole_chain]: outer: \
         [compact_formatting_renders_the_whole_chain]: inner (testing)"
    );
}

#[test]
fn compact_formatting_omits_missing_parts() {
    assert_eq!(Error::new(["oops"]).to_string(), "oops");
    assert_eq!(Error::new([TESTING]).to_string(), "(testing)");

    let err = Error::wrap(Error::new(["inner"]), [TESTING]).expect("wrapped");
    assert_eq!(err.to_string(), "(testing): inner");
}

#[test]
fn compact_formatting_appends_foreign_causes() {
    let err = Error::new([Arg::from("read failed"), Arg::foreign(io::Error::other("eof"))]);

    assert_eq!(err.to_string(), "read failed: eof");
}

#[test]
fn empty_kinds_and_messages_are_not_rendered() {
    let err = Error::new([Arg::from(Kind::new("")), Arg::from("")]);

    assert_eq!(err.to_string(), "");
}

#[test]
fn verbose_formatting_adds_location_and_fields() {
    let line = line!() + 1;
    let err = Error::new([
        Arg::from(TESTING),
        Arg::from("oops"),
        Arg::foreign(io::Error::other("eof")),
    ])
    .with_field("foo", "bar");

    let expected = format!(
        "Error: oops (testing)\n    File: \"{}\", line {}\n    With fields:\n    - \"foo\": bar\nCaused by: eof",
        file!(),
        line
    );
    assert_eq!(format!("{:#}", err), expected);
    assert_eq!(err.format_verbose(), expected);
}

#[test]
fn verbose_formatting_sorts_fields_and_marks_causes() {
    let inner = err!("inner").with_field("b", 2).with_field("a", 1);
    let err = wrap!(inner, TESTING, "outer").expect("wrapped");

    let output = format!("{:#}", err);
    assert!(output.starts_with(
        "Error: [verbose_formatting_sorts_fields_and_marks_causes]: outer (testing)\n"
    ));
    assert!(
        output.contains("Caused by: [verbose_formatting_sorts_fields_and_marks_causes]: inner\n")
    );
    assert!(output.contains("    - \"a\": 1\n    - \"b\": 2\n"));
    assert_eq!(output.matches("File: ").count(), 2);
    assert_eq!(output.matches("With fields:").count(), 1);
}

#[test]
fn builder_can_hide_location_and_fields() {
    let err = Error::new(["oops"]).with_field("foo", "bar");

    let output = err.fmt().verbose().show_location(false).show_fields(false).to_string();
    assert_eq!(output, "Error: oops\n");
}

#[test]
fn builder_accepts_custom_markers() {
    let err = Error::wrap(Error::new(["inner"]), ["outer"]).expect("wrapped");

    let output = err
        .fmt()
        .with_config(ErrorFormatConfig::verbose())
        .header("Failure")
        .cause_marker("Because")
        .show_location(false)
        .to_string();
    assert_eq!(output, "Failure: outer\nBecause: inner\n");
}

#[test]
fn builder_defaults_to_compact() {
    let err = Error::wrap(Error::new(["inner"]), ["outer"]).expect("wrapped");

    assert_eq!(err.fmt().to_string(), err.to_string());
    assert_eq!(format!("{:#}", err.fmt()), err.to_string());
    assert_eq!(err.fmt().verbose().to_string(), format!("{:#}", err));
}
