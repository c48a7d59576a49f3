use lazy_url::{KeyVal, ParseErrorKind, Url};

#[test]
fn query_preserves_order_and_duplicates() {
    let mut u = Url::from("?a=1&b=2&a=3");
    assert_eq!(
        u.query().unwrap(),
        [
            KeyVal::new("a", "1"),
            KeyVal::new("b", "2"),
            KeyVal::new("a", "3"),
        ]
    );
}

#[test]
fn query_distinguishes_key_only_from_empty_value() {
    let mut u = Url::from("?a&b=");
    let q = u.query().unwrap();
    assert_eq!(q[0], KeyVal::key_only("a"));
    assert_eq!(q[0].value(), None);
    assert_eq!(q[1], KeyVal::new("b", ""));
    assert_eq!(q[1].value(), Some(""));

    // The distinction survives a rebuild.
    u.push_query_key("c").unwrap();
    assert_eq!(u.to_raw().unwrap(), "?a&b=&c");
}

#[test]
fn query_skips_empty_tokens() {
    let mut u = Url::from("?&&a=1&");
    assert_eq!(u.query().unwrap(), [KeyVal::new("a", "1")]);

    let mut u = Url::from("?");
    assert!(u.query().unwrap().is_empty());
}

#[test]
fn query_splits_at_first_equals() {
    let mut u = Url::from("?k=a=b");
    assert_eq!(u.query().unwrap(), [KeyVal::new("k", "a=b")]);

    // The embedded '=' is escaped on rebuild and decodes back.
    u.push_query_key("z").unwrap();
    assert_eq!(u.to_raw().unwrap(), "?k=a%3Db&z");
    let mut r = Url::parse("?k=a%3Db&z").unwrap();
    assert_eq!(r.query().unwrap()[0].value(), Some("a=b"));
}

#[test]
fn query_at_bounds() {
    let mut u = Url::from("?a=1&b=2");
    assert_eq!(u.query_at(1).unwrap(), &KeyVal::new("b", "2"));

    let e = u.query_at(2).unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::IndexOutOfRange);
    assert_eq!(e.index(), 2);
}

#[test]
fn set_query_at_replaces_in_place() {
    let mut u = Url::from("?a=1&b=2");
    u.set_query_at(0, KeyVal::new("x", "9")).unwrap();
    assert_eq!(u.to_raw().unwrap(), "?x=9&b=2");

    assert!(u.set_query_at(5, KeyVal::key_only("y")).is_err());
}

#[test]
fn set_query_replaces_whole_sequence() {
    let mut u = Url::from("http://h/?a=1");
    u.set_query(vec![KeyVal::new("x", "1"), KeyVal::key_only("y")])
        .unwrap();
    assert_eq!(u.to_raw().unwrap(), "http://h/?x=1&y");

    u.set_query(Vec::new()).unwrap();
    assert_eq!(u.to_raw().unwrap(), "http://h/");
}

#[test]
fn push_query_variants() {
    let mut u = Url::new();
    u.push_query(KeyVal::new("a", "1")).unwrap();
    u.push_query_pair("b", "2").unwrap();
    u.push_query_key("c").unwrap();
    assert_eq!(u.to_raw().unwrap(), "?a=1&b=2&c");
}

#[test]
fn keyval_accessors() {
    let mut kv = KeyVal::new("k", "v");
    assert_eq!(kv.key(), "k");
    assert_eq!(kv.value(), Some("v"));

    kv.set_key("k2");
    kv.set_value("v2");
    assert_eq!((kv.key(), kv.value()), ("k2", Some("v2")));

    kv.unset_value();
    assert_eq!(kv.value(), None);

    let mut a = KeyVal::new("a", "1");
    let mut b = KeyVal::key_only("b");
    a.swap(&mut b);
    assert_eq!(a, KeyVal::key_only("b"));
    assert_eq!(b, KeyVal::new("a", "1"));
}

#[test]
fn query_keys_decode_and_reencode() {
    let mut u = Url::from("?na%20me=fer%26ret");
    assert_eq!(u.query().unwrap(), [KeyVal::new("na me", "fer&ret")]);

    u.set_fragment("x").unwrap();
    assert_eq!(u.to_raw().unwrap(), "?na%20me=fer%26ret#x");
}
