//! URL components: host classification and query key/value pairs.

use crate::ip;
use std::mem;

/// The classified kind of a host field.
///
/// A kind recorded through [`Url::set_host_with_kind`] acts as a hint
/// that is re-validated against the host text when the URL is built.
///
/// [`Url::set_host_with_kind`]: crate::Url::set_host_with_kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostKind {
    /// No host is present.
    #[default]
    Unspecified,
    /// A registered name.
    Name,
    /// An IPv4 dotted-quad address.
    Ipv4,
    /// An IPv6 literal address.
    Ipv6,
}

/// Classifies decoded, unbracketed host text by its syntax.
pub(crate) fn classify(host: &str) -> HostKind {
    if host.is_empty() {
        HostKind::Unspecified
    } else if ip::parse_v4(host).is_some() {
        HostKind::Ipv4
    } else if ip::parse_v6(host).is_some() {
        HostKind::Ipv6
    } else {
        HostKind::Name
    }
}

/// A single query entry: a key with an optional value.
///
/// The value distinguishes *absent* from *empty*: a query token with no
/// "=" (`key`) has no value and re-serializes without "=", while a token
/// with an explicit empty value (`key=`) carries `Some("")` and
/// re-serializes with "=".
///
/// # Examples
///
/// ```
/// use lazy_url::{KeyVal, Url};
///
/// let mut url = Url::from("?a&b=");
/// assert_eq!(url.query()?, [KeyVal::key_only("a"), KeyVal::new("b", "")]);
/// # Ok::<_, lazy_url::ParseError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KeyVal {
    pub(crate) key: String,
    pub(crate) val: Option<String>,
}

impl KeyVal {
    /// Creates an entry with the given key and value.
    pub fn new(key: impl Into<String>, val: impl Into<String>) -> KeyVal {
        KeyVal {
            key: key.into(),
            val: Some(val.into()),
        }
    }

    /// Creates an entry with the given key and no value.
    pub fn key_only(key: impl Into<String>) -> KeyVal {
        KeyVal {
            key: key.into(),
            val: None,
        }
    }

    /// Returns the key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value, or `None` for a key-only entry.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.val.as_deref()
    }

    /// Replaces the key, leaving the value untouched.
    #[inline]
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Replaces the value, leaving the key untouched.
    #[inline]
    pub fn set_value(&mut self, val: impl Into<String>) {
        self.val = Some(val.into());
    }

    /// Removes the value, turning this into a key-only entry.
    #[inline]
    pub fn unset_value(&mut self) {
        self.val = None;
    }

    /// Swaps the contents of two entries.
    #[inline]
    pub fn swap(&mut self, other: &mut KeyVal) {
        mem::swap(self, other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_hosts() {
        assert_eq!(classify(""), HostKind::Unspecified);
        assert_eq!(classify("example.com"), HostKind::Name);
        assert_eq!(classify("127.0.0.1"), HostKind::Ipv4);
        assert_eq!(classify("::1"), HostKind::Ipv6);
        // Out-of-range quads fall back to names.
        assert_eq!(classify("256.0.0.1"), HostKind::Name);
        assert_eq!(classify("127.0.0.01"), HostKind::Name);
    }

    #[test]
    fn key_val_equality_and_swap() {
        assert_eq!(KeyVal::new("a", ""), KeyVal::new("a", ""));
        assert_ne!(KeyVal::new("a", ""), KeyVal::key_only("a"));

        let mut x = KeyVal::new("a", "1");
        let mut y = KeyVal::key_only("b");
        x.swap(&mut y);
        assert_eq!(x, KeyVal::key_only("b"));
        assert_eq!(y, KeyVal::new("a", "1"));

        y.set_key("c");
        y.unset_value();
        assert_eq!(y, KeyVal::key_only("c"));
        y.set_value("2");
        assert_eq!(y.value(), Some("2"));
    }
}
