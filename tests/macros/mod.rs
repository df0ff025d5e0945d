use chained_error::{err, fields, wrap, Error, Kind, Value};

const TESTING: Kind = Kind::from_static("testing");

struct Repository;

impl Repository {
    fn load(&self) -> Error {
        err!(TESTING, "missing row")
    }
}

fn fetch() -> Option<Error> {
    Some(err!("timed out"))
}

fn load_profile() -> Option<Error> {
    wrap!(fetch(), "profile: fetch failed")
}

#[test]
fn err_captures_the_enclosing_function() {
    let line = line!() + 1;
    let err = err!("oops");

    let site = err.call_site();
    assert_eq!(site.caller(), "err_captures_the_enclosing_function");
    assert_eq!(site.file(), file!());
    assert_eq!(site.line(), line);
}

#[test]
fn closures_are_attributed_to_their_function() {
    let build = || err!("oops");

    assert_eq!(build().call_site().caller(), "closures_are_attributed_to_their_function");
}

#[test]
fn methods_are_attributed_by_name() {
    assert_eq!(Repository.load().call_site().caller(), "load");
}

#[test]
fn wrap_is_attributed_to_the_wrapping_function() {
    let err = load_profile().expect("wrapped");

    assert_eq!(err.call_site().caller(), "load_profile");
    assert_eq!(err.to_string(), "[load_profile]: profile: fetch failed: [fetch]: timed out");
}

#[test]
fn macros_accept_trailing_commas() {
    let err = err!(TESTING, "oops",);
    let wrapped = wrap!(err, "outer",).expect("wrapped");

    assert!(wrapped.is(TESTING));
}

#[test]
fn fields_macro_builds_a_map() {
    let map = fields! { "user" => "ada", "attempt" => 3u32 };

    assert_eq!(map.len(), 2);
    assert_eq!(map["attempt"], Value::U64(3));
    assert!(fields! {}.is_empty());
}
