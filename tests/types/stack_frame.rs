#![cfg(feature = "serde")]

use chained_error::{err, stack, wrap, Arg, Error, Kind};
use serde_json::json;
use std::io;

const TESTING: Kind = Kind::from_static("testing");

#[test]
fn serialized_frames_omit_empty_fields() {
    let err = Error::new([Arg::from("read failed"), Arg::foreign(io::Error::other("eof"))]);

    let frames = serde_json::to_value(stack(&err)).expect("serializable");
    let head = frames[0].as_object().expect("object");

    assert_eq!(head["message"], json!("read failed"));
    assert_eq!(head["file"], json!(file!()));
    assert!(head.contains_key("line"));
    assert!(!head.contains_key("kind"));
    assert!(!head.contains_key("caller"));
    assert!(!head.contains_key("fields"));
    assert_eq!(frames[1], json!({ "message": "eof" }));
}

#[test]
fn serialized_frames_carry_kind_caller_and_own_fields() {
    let inner = err!(TESTING, "inner").with_field("attempt", 3);
    let err = wrap!(inner, "outer").expect("wrapped").with_field("user", "ada");

    let frames = serde_json::to_value(err.stack()).expect("serializable");

    assert_eq!(frames[0]["caller"], json!("serialized_frames_carry_kind_caller_and_own_fields"));
    assert_eq!(frames[0]["fields"], json!({ "user": "ada" }));
    assert_eq!(frames[1]["kind"], json!("testing"));
    assert_eq!(frames[1]["fields"], json!({ "attempt": 3 }));
}

#[test]
fn empty_field_maps_are_omitted() {
    let err = Error::new([Arg::from("oops"), Arg::from(chained_error::FieldMap::new())]);

    let frames = serde_json::to_value(stack(&err)).expect("serializable");
    assert!(frames[0].get("fields").is_none());
}
