use errorc::{
    key_factory, new_key, with_namespace, with_segments, Field, Key, KeyFactory, KeyNamespace,
    KeyOption, KeySegment,
};

#[test]
fn no_options_non_empty_base() {
    assert_eq!(new_key("field1", &[]), "field1");
}

#[test]
fn no_options_empty_base() {
    assert_eq!(new_key("", &[]), "");
    assert!(new_key("", &[]).is_empty());
}

#[test]
fn namespace_only() {
    assert_eq!(new_key("field", &[with_namespace("ns")]), "ns.field");
}

#[test]
fn segments_only() {
    assert_eq!(new_key("field", &[with_segments(["one", "two"])]), "one.two.field");
}

#[test]
fn explicitly_empty_namespace_is_skipped() {
    let key = new_key("field", &[with_namespace(""), with_segments(["one", "two"])]);

    assert_eq!(key, "one.two.field");
}

#[test]
fn empty_segment_is_skipped() {
    assert_eq!(new_key("field", &[with_segments(["", "x"])]), "x.field");
}

#[test]
fn namespace_and_segments() {
    let key = new_key("field", &[with_namespace("ns"), with_segments(["one"])]);

    assert_eq!(key, "ns.one.field");
}

#[test]
fn namespace_stays_leftmost_regardless_of_order() {
    let key = new_key("field", &[with_segments(["one"]), with_namespace("ns")]);

    assert_eq!(key, "ns.one.field");
}

#[test]
fn later_namespace_wraps_earlier_one() {
    let key = new_key("id", &[with_namespace("storage"), with_namespace("environment")]);

    assert_eq!(key, "environment.storage.id");
}

#[test]
fn composes_database_user_id() {
    assert_eq!(new_key("id", &[with_segments(["database", "user"])]), "database.user.id");
}

#[test]
fn empty_base_with_prefix_has_no_trailing_separator() {
    assert_eq!(new_key("", &[with_namespace("ns"), with_segments(["a"])]), "ns.a");
}

#[test]
fn typed_components_are_accepted() {
    const NS: KeyNamespace = KeyNamespace::from_static("billing");
    const SEGMENT: KeySegment = KeySegment::from_static("invoice");

    let options = [KeyOption::Namespace(NS), with_segments([SEGMENT])];
    assert_eq!(new_key("total", &options), "billing.invoice.total");
}

#[test]
fn factory_matches_direct_composition() {
    let options = [with_namespace("db"), with_segments(["users", "profile"])];
    let factory = KeyFactory::new(options.clone());

    assert_eq!(factory.key("email"), new_key("email", &options));
    assert_eq!(factory.prefix(), "db.users.profile");
}

#[test]
fn factory_applies_per_call_options_after_bound_ones() {
    let factory = key_factory([with_namespace("db"), with_segments(["users"])]);

    assert_eq!(factory.key_with("street", &[with_segments(["address"])]), "db.users.address.street");
    assert_eq!(factory.key_with("id", &[with_namespace("app")]), "app.db.users.id");
}

#[test]
fn extended_factory_keeps_parent_untouched() {
    let parent = KeyFactory::new([with_namespace("db")]);
    let child = parent.extend([with_segments(["orders"])]);

    assert_eq!(parent.key("id"), "db.id");
    assert_eq!(child.key("id"), "db.orders.id");
}

#[test]
fn default_factory_returns_bare_name() {
    assert_eq!(KeyFactory::default().key("name"), "name");
}

#[test]
fn key_works_as_field_key() {
    let key: Key = new_key("id", &[with_segments(["user"])]);

    assert_eq!(Field::string(key, "42").to_string(), "user.id: 42");
}

#[test]
fn key_conversions_round_trip_text() {
    let owned = Key::from(String::from("a.b"));

    assert_eq!(owned.as_str(), "a.b");
    assert_eq!(owned.to_string(), "a.b");
    assert_eq!(owned.into_inner(), "a.b");
}
