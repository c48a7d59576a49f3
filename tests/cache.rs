use lazy_url::{ParseErrorKind, Url};

#[test]
fn adoption_defers_errors_to_first_access() {
    // `From` never fails; the error surfaces on the first accessor.
    let mut u = Url::from("http://%zz");
    let e = u.host().unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);

    // Every later access reports the same error, while the raw text
    // itself stays available verbatim.
    assert!(u.path().is_err());
    assert_eq!(u.to_raw().unwrap(), "http://%zz");
}

#[test]
fn unmodified_url_keeps_original_text() {
    // Lowercase hex and an escaped-but-allowed byte would both be
    // normalized away by a rebuild.
    let raw = "http://example.com/a%2fb%61?x=1";
    let mut u = Url::from(raw);

    assert_eq!(u.path().unwrap(), "/a/ba");
    assert_eq!(u.to_raw().unwrap(), raw);
}

#[test]
fn no_op_mutation_keeps_original_text() {
    let raw = "http://example.com/a%2fb?x=1";
    let mut u = Url::from(raw);

    u.set_scheme("http").unwrap();
    u.set_host("example.com").unwrap();
    u.set_path("/a/b").unwrap();
    let q = u.query().unwrap().to_vec();
    u.set_query(q).unwrap();

    assert_eq!(u.to_raw().unwrap(), raw);
}

#[test]
fn mutation_rebuilds_canonically() {
    let mut u = Url::from("http://example.com/a%2fb?x=1");
    u.set_fragment("f").unwrap();
    // The rebuild re-encodes from decoded fields; the original escape
    // of '/' is not preserved.
    assert_eq!(u.to_raw().unwrap(), "http://example.com/a/b?x=1#f");
}

#[test]
fn failed_mutation_keeps_original_text() {
    let raw = "http://example.com:8080/";
    let mut u = Url::from(raw);
    assert!(u.set_port("70000").is_err());
    assert!(u.set_scheme("1x").is_err());
    assert_eq!(u.to_raw().unwrap(), raw);
}

#[test]
fn assign_replaces_and_defers_parsing() {
    let mut u = Url::from("http://example.com/");
    assert_eq!(u.host().unwrap(), "example.com");

    u.assign("ftp://other.example/x");
    assert_eq!(u.scheme().unwrap(), "ftp");
    assert_eq!(u.host().unwrap(), "other.example");

    // Invalid text is accepted here and rejected on access.
    u.assign("//[broken");
    assert!(u.host().is_err());
}

#[test]
fn clear_resets_to_empty() {
    let mut u = Url::from("http://example.com/");
    u.clear();
    assert_eq!(u.to_raw().unwrap(), "");
    assert_eq!(u.host().unwrap(), "");
}

#[test]
fn take_leaves_empty_behind() {
    let mut u = Url::from("foo:bar");
    let mut taken = u.take();
    assert_eq!(u.to_raw().unwrap(), "");
    assert_eq!(taken.to_raw().unwrap(), "foo:bar");
}

#[test]
fn from_str_parses_eagerly() {
    let u: Url = "http://example.com/".parse().unwrap();
    assert_eq!(u.into_string().unwrap(), "http://example.com/");

    assert!("http://example.com:70000/".parse::<Url>().is_err());
}

#[test]
fn repeated_serialization_is_stable() {
    let mut u = Url::from("HTTP://Example.com:80/%7Ea?k");
    u.set_path("/x").unwrap();

    let first = u.to_raw().unwrap().to_owned();
    assert_eq!(first, "http://Example.com:80/x?k");
    assert_eq!(u.to_raw().unwrap(), first);

    // A rebuilt form parses back to the same fields.
    let mut r = Url::parse(first.clone()).unwrap();
    assert_eq!(r.to_raw().unwrap(), first);
}
