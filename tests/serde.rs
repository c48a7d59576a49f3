#![cfg(feature = "serde")]

use lazy_url::Url;

#[test]
fn serializes_as_raw_text() {
    let u = Url::from("http://example.com/a%2fb");
    // Adopted text is serialized verbatim, without reparsing.
    assert_eq!(
        serde_json::to_string(&u).unwrap(),
        r#""http://example.com/a%2fb""#
    );
}

#[test]
fn serializes_built_form_when_fields_changed() {
    let mut u = Url::from("http://example.com/");
    u.set_path("/x y").unwrap();
    assert_eq!(
        serde_json::to_string(&u).unwrap(),
        r#""http://example.com/x%20y""#
    );
}

#[test]
fn serialization_surfaces_build_errors() {
    let mut u = Url::new();
    u.set_host("example.com").unwrap();
    u.set_path("rel").unwrap();
    assert!(serde_json::to_string(&u).is_err());
}

#[test]
fn deserializes_eagerly() {
    let mut u: Url = serde_json::from_str(r#""http://example.com/?a=1""#).unwrap();
    assert_eq!(u.host().unwrap(), "example.com");

    // Deserialization validates up front.
    assert!(serde_json::from_str::<Url>(r#""http://example.com:70000/""#).is_err());
    assert!(serde_json::from_str::<Url>("42").is_err());
}

#[test]
fn round_trips_through_json() {
    let raw = r#""ldap://[2001:db8::7]/c=GB?objectClass?one""#;
    let u: Url = serde_json::from_str(raw).unwrap();
    assert_eq!(serde_json::to_string(&u).unwrap(), raw);
}
