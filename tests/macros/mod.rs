use errorc::{new, with, Error, Field};

#[test]
fn with_macro_accepts_mixed_fields() {
    let missing: Option<Error> = None;
    let err = with!(
        new("operation failed"),
        Field::string("op", "sync"),
        Field::error("cause", missing),
        Field::error("inner", Some(new("disk full"))),
        Field::int("attempt", 3),
    )
    .unwrap();

    assert_eq!(err.to_string(), "operation failed, op: sync, inner: disk full, attempt: 3");
}

#[test]
fn with_macro_without_fields_returns_cause() {
    let base = new("base");
    let err = with!(base.clone()).unwrap();

    assert!(err.ptr_eq(&base));
}

#[test]
fn with_macro_propagates_none() {
    assert!(with!(None::<Error>, Field::bool("retry", true)).is_none());
}

#[test]
fn with_macro_matches_function_form() {
    let by_macro = with!(new("base"), Field::string("k", "v"), Field::bool("b", true)).unwrap();
    let by_fn = with(new("base"), [Field::string("k", "v"), Field::bool("b", true)]).unwrap();

    assert_eq!(by_macro.to_string(), by_fn.to_string());
}
