use errorc::inspect::{self, Chain};
use errorc::{new, with, Error, Field, Message, WrappedError};
use std::fmt;

#[derive(Debug)]
struct ValidationError {
    message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

#[test]
fn identity_check_succeeds_through_wrap() {
    let sentinel = new("invalid input");
    let err = with(
        sentinel.clone(),
        [Field::string("field1", "value1"), Field::string("field2", "value2")],
    )
    .unwrap();

    assert!(err.is(&sentinel));
    assert!(inspect::is(err.as_dyn(), sentinel.as_dyn()));
}

#[test]
fn identity_check_rejects_lookalike() {
    let sentinel = new("invalid input");
    let lookalike = new("invalid input");
    let err = sentinel.with([Field::string("k", "v")]);

    assert!(!err.is(&lookalike));
}

#[test]
fn chained_unwrap_reaches_original_cause() {
    let original = new("original");
    let once = original.clone().with([Field::string("layer", "1")]);
    let twice = once.clone().with([Field::string("layer", "2")]);

    let first = twice.source().unwrap();
    let second = first.source().unwrap();

    assert!(inspect::is(first, once.as_dyn()));
    assert!(inspect::is(second, original.as_dyn()));
    assert!(second.source().is_none());
    assert!(twice.is(&original));
    assert!(twice.is(&once));
}

#[test]
fn type_recovery_succeeds_through_wrap() {
    let err = Error::from(ValidationError { message: "invalid input" })
        .with([Field::string("field1", "value1")])
        .with([Field::int("attempt", 2)]);

    let found = err.downcast_ref::<ValidationError>().unwrap();
    assert_eq!(found.message, "invalid input");
    assert!(err.is_type::<WrappedError>());
    assert!(!err.is_type::<Message>());
}

#[test]
fn find_returns_outermost_match() {
    let err = new("root").with([Field::string("a", "1")]).with([Field::string("b", "2")]);

    let outer = inspect::find::<WrappedError>(err.as_dyn()).unwrap();
    assert_eq!(outer.fields()[0].key(), "b");
}

#[test]
fn chain_walks_every_layer() {
    let err = new("root").with([Field::string("a", "1")]).with([Field::string("b", "2")]);

    let messages: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(messages, ["root, a: 1, b: 2", "root, a: 1", "root"]);
    assert_eq!(Chain::new(err.as_dyn()).count(), 3);
}

#[test]
fn rendering_does_not_disturb_inspection() {
    let sentinel = new("sentinel");
    let err = sentinel.clone().with([Field::bool("retry", false)]);

    let before = err.to_string();
    let after = err.to_string();

    assert_eq!(before, after);
    assert!(err.is(&sentinel));
    assert!(err.is_type::<Message>());
}
