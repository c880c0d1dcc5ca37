use errorc::{new, with, Error, Field, WrappedError};
use std::fmt;

#[derive(Debug)]
struct TypedError {
    message: &'static str,
}

impl fmt::Display for TypedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for TypedError {}

#[test]
fn renders_cause_then_fields_in_order() {
    let err = with(
        new("test error"),
        [Field::string("", "message"), Field::string("key2", "value2")],
    )
    .unwrap();

    assert_eq!(err.to_string(), "test error, message, key2: value2");
}

#[test]
fn empty_cause_message_still_gets_separator() {
    let err = with(new(""), [Field::string("key1", "value1")]).unwrap();

    assert_eq!(err.to_string(), ", key1: value1");
}

#[test]
fn all_empty_field_costs_a_separator() {
    let err = with(new(""), [Field::string("", "")]).unwrap();

    assert_eq!(err.to_string(), ", ");
}

#[test]
fn only_absent_fields_return_cause_unchanged() {
    let base = new("");
    let err = with(base.clone(), [Field::error("cause", None::<Error>)]).unwrap();

    assert!(err.ptr_eq(&base));
    assert_eq!(err.to_string(), "");
}

#[test]
fn integer_fields_render_decimal() {
    assert_eq!(with(new("base"), [Field::int("count", 5)]).unwrap().to_string(), "base, count: 5");
    assert_eq!(with(new("base"), [Field::int("", -42)]).unwrap().to_string(), "base, -42");
}

#[test]
fn error_field_renders_captured_message() {
    let err = with(new("operation failed"), [Field::error("cause", Some(new("disk full")))]);

    assert_eq!(err.unwrap().to_string(), "operation failed, cause: disk full");
}

#[test]
fn typed_cause_renders_through_layers() {
    let inner = Error::from(TypedError { message: "typed error" }).with(std::iter::empty::<Field>());
    let err = inner.with([Field::string("key1", "value1"), Field::string("key2", "value2")]);

    assert_eq!(err.to_string(), "typed error, key1: value1, key2: value2");
}

#[test]
fn absent_fields_are_filtered_out() {
    let with_absent = with(
        new("base"),
        [Field::error("cause", None::<Error>), Some(Field::string("key", "value"))],
    )
    .unwrap();
    let without = with(new("base"), [Field::string("key", "value")]).unwrap();

    assert_eq!(with_absent.to_string(), without.to_string());
    assert_eq!(with_absent.downcast_ref::<WrappedError>().unwrap().fields().len(), 1);
}

#[test]
fn render_matches_display_and_is_repeatable() {
    let err = new("base").with([
        Field::string("key", "value"),
        Field::int("n", -3),
        Field::bool("ok", false),
        Field::string("", ""),
    ]);
    let wrapped = err.downcast_ref::<WrappedError>().unwrap();

    let first = wrapped.render();
    let second = wrapped.render();
    assert_eq!(first, second);
    assert_eq!(first, err.to_string());
    assert_eq!(first, "base, key: value, n: -3, ok: false, ");
}

#[test]
fn exposes_cause_and_fields() {
    let cause = new("cause");
    let err = cause.clone().with([Field::string("a", "1"), Field::string("b", "2")]);
    let wrapped = err.downcast_ref::<WrappedError>().unwrap();

    assert!(wrapped.cause().ptr_eq(&cause));
    let keys: Vec<&str> = wrapped.fields().iter().map(Field::key).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn nested_wrapping_appends_outer_fields_last() {
    let err = new("root")
        .with([Field::string("inner", "1")])
        .with([Field::string("outer", "2")]);

    assert_eq!(err.to_string(), "root, inner: 1, outer: 2");
}

#[test]
fn wrapped_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<WrappedError>();
    assert_send_sync::<Error>();
    assert_send_sync::<Field>();
}
