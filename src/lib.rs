#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! A URL type that is lazily parsed and lazily serialized.
//!
//! [`Url`] keeps two representations of the same URL: the raw text form
//! and a decomposed field set (scheme, user info, host, port, path,
//! query, fragment). Each representation is derived from the other only
//! on demand: constructing from a string defers parsing until the first
//! field access, and mutating a field defers re-serialization until the
//! built text is requested. Two freshness flags track which side is
//! current; at least one of them always is.
//!
//! Field text is stored percent-decoded. Serializing re-encodes every
//! component with its own RFC 3986 allow-list, so the built form is
//! canonical: re-parsing it yields the same field set.
//!
//! # Examples
//!
//! ```
//! use lazy_url::Url;
//!
//! let mut url = Url::from("http://user@example.com:8042/over/there?name=ferret#nose");
//! assert_eq!(url.scheme()?, "http");
//! assert_eq!(url.host()?, "example.com");
//! assert_eq!(url.port_num()?, Some(8042));
//!
//! url.set_path("/elsewhere")?;
//! url.set_port("")?;
//! assert_eq!(url.to_raw()?, "http://user@example.com/elsewhere?name=ferret#nose");
//! # Ok::<_, lazy_url::Error>(())
//! ```
//!
//! # Concurrency
//!
//! All laziness is private memoized state of one instance, and every
//! accessor takes `&mut self`, so a single `Url` shared between threads
//! needs external synchronization. Distinct instances share nothing and
//! may be used concurrently without coordination.

mod builder;
mod component;
mod encoding;
mod error;
mod fmt;
mod internal;
mod ip;
mod parser;

pub use component::{HostKind, KeyVal};
pub use error::{BuildError, BuildErrorKind, Error, ParseError, ParseErrorKind};

use crate::{encoding::table, error::err, internal::Fields};
use std::{mem, str::FromStr};

/// A URL held as raw text, a decomposed field set, or both.
///
/// See the [crate-level documentation](crate) for an overview of the
/// lazy synchronization between the two representations.
///
/// # Errors
///
/// Since parsing is deferred, any accessor or mutator may surface a
/// [`ParseError`] for raw text adopted earlier. A failed operation has
/// no visible effect: the instance is left exactly as it was.
#[derive(Clone)]
pub struct Url {
    pub(crate) raw: String,
    pub(crate) fields: Fields,
    pub(crate) fields_fresh: bool,
    pub(crate) raw_fresh: bool,
}

impl Default for Url {
    /// Creates an empty `Url` with both representations fresh.
    fn default() -> Url {
        Url {
            raw: String::new(),
            fields: Fields::default(),
            fields_fresh: true,
            raw_fresh: true,
        }
    }
}

impl From<String> for Url {
    /// Adopts raw URL text without parsing it.
    fn from(raw: String) -> Url {
        Url {
            raw,
            fields: Fields::default(),
            fields_fresh: false,
            raw_fresh: true,
        }
    }
}

impl From<&str> for Url {
    /// Adopts raw URL text without parsing it.
    fn from(raw: &str) -> Url {
        Url::from(raw.to_owned())
    }
}

impl FromStr for Url {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Url, ParseError> {
        Url::parse(s)
    }
}

impl Url {
    /// Creates an empty `Url`.
    #[inline]
    #[must_use]
    pub fn new() -> Url {
        Url::default()
    }

    /// Parses raw URL text eagerly, so that errors surface immediately
    /// rather than on first field access.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_url::Url;
    ///
    /// assert!(Url::parse("http://example.com/").is_ok());
    /// assert!(Url::parse("http://example.com:70000/").is_err());
    /// ```
    pub fn parse(s: impl Into<String>) -> Result<Url, ParseError> {
        let mut url = Url::from(s.into());
        url.ensure_fields()?;
        Ok(url)
    }

    /// Overwrites this `Url` with raw text, discarding the cached
    /// fields without parsing either the old or the new value.
    pub fn assign(&mut self, s: impl Into<String>) {
        self.raw = s.into();
        self.raw_fresh = true;
        self.fields = Fields::default();
        self.fields_fresh = false;
    }

    /// Resets this `Url` to the default empty state.
    #[inline]
    pub fn clear(&mut self) {
        *self = Url::default();
    }

    /// Moves the contents out, leaving the default empty state behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_url::Url;
    ///
    /// let mut a = Url::from("foo:bar");
    /// let mut c = a.take();
    /// assert_eq!(a.to_raw()?, "");
    /// assert_eq!(c.to_raw()?, "foo:bar");
    /// # Ok::<_, lazy_url::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Url {
        mem::take(self)
    }

    /// Parses the raw text if the fields are stale.
    ///
    /// The raw cache and its freshness are left untouched; a failed
    /// parse leaves the instance unchanged.
    fn ensure_fields(&mut self) -> Result<(), ParseError> {
        if !self.fields_fresh {
            self.fields = parser::parse(&self.raw)?;
            self.fields_fresh = true;
        }
        Ok(())
    }

    /// Builds the raw text if it is stale.
    fn ensure_raw(&mut self) -> Result<(), Error> {
        if !self.raw_fresh {
            self.ensure_fields()?;
            self.raw = builder::build(&self.fields)?;
            self.raw_fresh = true;
        }
        Ok(())
    }

    /// Returns the scheme, or `""` if unspecified.
    ///
    /// The scheme is normalized to lowercase.
    pub fn scheme(&mut self) -> Result<&str, ParseError> {
        self.ensure_fields()?;
        Ok(&self.fields.scheme)
    }

    /// Sets the scheme; an empty string clears it.
    ///
    /// # Errors
    ///
    /// Fails when the text does not match
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), ParseError> {
        if !scheme.is_empty() && !parser::is_valid_scheme(scheme) {
            err!(0, InvalidScheme);
        }
        self.ensure_fields()?;
        let scheme = scheme.to_ascii_lowercase();
        if self.fields.scheme != scheme {
            self.fields.scheme = scheme;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Returns the decoded user information, or `""` if unspecified.
    pub fn user_info(&mut self) -> Result<&str, ParseError> {
        self.ensure_fields()?;
        Ok(&self.fields.user_info)
    }

    /// Sets the user information from decoded text.
    pub fn set_user_info(&mut self, user_info: impl Into<String>) -> Result<(), ParseError> {
        self.ensure_fields()?;
        let user_info = user_info.into();
        if self.fields.user_info != user_info {
            self.fields.user_info = user_info;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Returns the decoded host, or `""` if unspecified.
    ///
    /// An IPv6 host is returned without the enclosing brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_url::Url;
    ///
    /// let mut url = Url::from("http://[::1]:8080/");
    /// assert_eq!(url.host()?, "::1");
    /// # Ok::<_, lazy_url::ParseError>(())
    /// ```
    pub fn host(&mut self) -> Result<&str, ParseError> {
        self.ensure_fields()?;
        Ok(&self.fields.host)
    }

    /// Returns the classified kind of the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_url::{HostKind, Url};
    ///
    /// assert_eq!(Url::from("//127.0.0.1").host_kind()?, HostKind::Ipv4);
    /// assert_eq!(Url::from("//[::1]").host_kind()?, HostKind::Ipv6);
    /// assert_eq!(Url::from("//example.com").host_kind()?, HostKind::Name);
    /// # Ok::<_, lazy_url::ParseError>(())
    /// ```
    pub fn host_kind(&mut self) -> Result<HostKind, ParseError> {
        self.ensure_fields()?;
        Ok(self.fields.host_kind)
    }

    /// Sets the host from decoded text, classifying it by syntax.
    ///
    /// Bracketed text is accepted as an IPv6 literal and stored without
    /// the brackets; a dotted-quad is classified as IPv4; anything else
    /// is a registered name. An empty string clears the host.
    ///
    /// # Errors
    ///
    /// Fails when bracketed text does not enclose a valid IPv6 literal.
    pub fn set_host(&mut self, host: &str) -> Result<(), ParseError> {
        let (host, kind) = match host.strip_prefix('[') {
            Some(rest) => match rest.strip_suffix(']') {
                Some(inside) if ip::parse_v6(inside).is_some() => {
                    (inside.to_owned(), HostKind::Ipv6)
                }
                _ => err!(0, InvalidIpLiteral),
            },
            None => (host.to_owned(), component::classify(host)),
        };
        self.ensure_fields()?;
        if self.fields.host != host || self.fields.host_kind != kind {
            self.fields.host = host;
            self.fields.host_kind = kind;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Sets the host together with an explicit IP-version hint.
    ///
    /// The hint is recorded as given and re-validated when the URL is
    /// built: text that does not parse as the hinted address family
    /// surfaces as a [`BuildError`] at that point, it is never silently
    /// reclassified. Passing [`HostKind::Unspecified`] (or an empty
    /// host) falls back to classification by syntax, as [`set_host`]
    /// does.
    ///
    /// [`set_host`]: Self::set_host
    pub fn set_host_with_kind(
        &mut self,
        host: impl Into<String>,
        kind: HostKind,
    ) -> Result<(), ParseError> {
        self.ensure_fields()?;
        let host = host.into();
        let kind = if host.is_empty() {
            HostKind::Unspecified
        } else if kind == HostKind::Unspecified {
            component::classify(&host)
        } else {
            kind
        };
        if self.fields.host != host || self.fields.host_kind != kind {
            self.fields.host = host;
            self.fields.host_kind = kind;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Returns the port as a digit string, or `""` if unspecified.
    pub fn port(&mut self) -> Result<&str, ParseError> {
        self.ensure_fields()?;
        Ok(&self.fields.port)
    }

    /// Returns the numeric port, or `None` if unspecified.
    pub fn port_num(&mut self) -> Result<Option<u16>, ParseError> {
        self.ensure_fields()?;
        // The parser and mutators bound the port to the u16 range.
        Ok(self.fields.port.parse().ok())
    }

    /// Sets the port from a digit string; an empty string clears it.
    ///
    /// # Errors
    ///
    /// Fails when the text is not all decimal digits or denotes a value
    /// above 65535.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_url::Url;
    ///
    /// let mut url = Url::from("http://example.com:8080/");
    /// assert!(url.set_port("70000").is_err());
    /// assert_eq!(url.port()?, "8080");
    ///
    /// url.set_port("")?;
    /// assert_eq!(url.to_raw()?, "http://example.com/");
    /// # Ok::<_, lazy_url::Error>(())
    /// ```
    pub fn set_port(&mut self, port: &str) -> Result<(), ParseError> {
        if !port.is_empty() {
            if !table::DIGIT.validate(port.as_bytes()) {
                err!(0, InvalidPort);
            }
            match port.parse::<u32>() {
                Ok(v) if v <= 65535 => {}
                _ => err!(0, InvalidPort),
            }
        }
        self.ensure_fields()?;
        if self.fields.port != port {
            self.fields.port = port.to_owned();
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Sets the port from a 16-bit unsigned integer.
    pub fn set_port_num(&mut self, port: u16) -> Result<(), ParseError> {
        self.ensure_fields()?;
        let port = port.to_string();
        if self.fields.port != port {
            self.fields.port = port;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Returns the decoded path, or `""` if unspecified.
    pub fn path(&mut self) -> Result<&str, ParseError> {
        self.ensure_fields()?;
        Ok(&self.fields.path)
    }

    /// Sets the path from decoded text.
    ///
    /// A non-absolute path combined with an authority is only caught
    /// when the URL is built.
    pub fn set_path(&mut self, path: impl Into<String>) -> Result<(), ParseError> {
        self.ensure_fields()?;
        let path = path.into();
        if self.fields.path != path {
            self.fields.path = path;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Returns the decoded fragment, or `""` if unspecified.
    pub fn fragment(&mut self) -> Result<&str, ParseError> {
        self.ensure_fields()?;
        Ok(&self.fields.fragment)
    }

    /// Sets the fragment from decoded text; an empty string clears it.
    pub fn set_fragment(&mut self, fragment: impl Into<String>) -> Result<(), ParseError> {
        self.ensure_fields()?;
        let fragment = fragment.into();
        if self.fields.fragment != fragment {
            self.fields.fragment = fragment;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Returns the query as an ordered sequence of entries.
    ///
    /// Order and duplicate keys are preserved exactly as parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_url::{KeyVal, Url};
    ///
    /// let mut url = Url::from("?a=1&b=&a=2");
    /// assert_eq!(
    ///     url.query()?,
    ///     [
    ///         KeyVal::new("a", "1"),
    ///         KeyVal::new("b", ""),
    ///         KeyVal::new("a", "2"),
    ///     ]
    /// );
    /// # Ok::<_, lazy_url::ParseError>(())
    /// ```
    pub fn query(&mut self) -> Result<&[KeyVal], ParseError> {
        self.ensure_fields()?;
        Ok(&self.fields.query)
    }

    /// Returns the query entry at the given index.
    ///
    /// # Errors
    ///
    /// Fails with [`ParseErrorKind::IndexOutOfRange`] when the index is
    /// out of bounds.
    pub fn query_at(&mut self, i: usize) -> Result<&KeyVal, ParseError> {
        self.ensure_fields()?;
        match self.fields.query.get(i) {
            Some(kv) => Ok(kv),
            None => err!(i, IndexOutOfRange),
        }
    }

    /// Replaces the whole query sequence.
    ///
    /// The raw cache is invalidated only if the new sequence differs
    /// from the current one.
    pub fn set_query(&mut self, query: Vec<KeyVal>) -> Result<(), ParseError> {
        self.ensure_fields()?;
        if self.fields.query != query {
            self.fields.query = query;
            self.raw_fresh = false;
        }
        Ok(())
    }

    /// Replaces the query entry at the given index.
    ///
    /// # Errors
    ///
    /// Fails with [`ParseErrorKind::IndexOutOfRange`] when the index is
    /// out of bounds.
    pub fn set_query_at(&mut self, i: usize, kv: KeyVal) -> Result<(), ParseError> {
        self.ensure_fields()?;
        match self.fields.query.get_mut(i) {
            Some(slot) => {
                if *slot != kv {
                    *slot = kv;
                    self.raw_fresh = false;
                }
                Ok(())
            }
            None => err!(i, IndexOutOfRange),
        }
    }

    /// Appends a query entry.
    pub fn push_query(&mut self, kv: KeyVal) -> Result<(), ParseError> {
        self.ensure_fields()?;
        self.fields.query.push(kv);
        self.raw_fresh = false;
        Ok(())
    }

    /// Appends a query entry built from a key and a value.
    pub fn push_query_pair(
        &mut self,
        key: impl Into<String>,
        val: impl Into<String>,
    ) -> Result<(), ParseError> {
        self.push_query(KeyVal::new(key, val))
    }

    /// Appends a key-only query entry, which serializes without "=".
    pub fn push_query_key(&mut self, key: impl Into<String>) -> Result<(), ParseError> {
        self.push_query(KeyVal::key_only(key))
    }

    /// Returns the built URL text, serializing the fields first if the
    /// raw cache is stale.
    pub fn to_raw(&mut self) -> Result<&str, Error> {
        self.ensure_raw()?;
        Ok(&self.raw)
    }

    /// Consumes this `Url` and yields the built URL text.
    pub fn into_string(mut self) -> Result<String, Error> {
        self.ensure_raw()?;
        Ok(self.raw)
    }

    /// Returns a displayable view of the built URL text.
    ///
    /// When the raw cache is stale the view streams the builder output
    /// directly into the formatter without storing it, so the cache
    /// stays stale; [`to_raw`](Self::to_raw) commits it instead. The
    /// fields are validated up front, which is why this constructor,
    /// and not the `Display` impl, reports errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_url::Url;
    ///
    /// let mut url = Url::from("foo:bar");
    /// url.set_fragment("baz")?;
    /// assert_eq!(url.stream()?.to_string(), "foo:bar#baz");
    /// # Ok::<_, lazy_url::Error>(())
    /// ```
    pub fn stream(&mut self) -> Result<Stream<'_>, Error> {
        if !self.raw_fresh {
            self.ensure_fields()?;
            builder::validate(&self.fields)?;
        }
        Ok(Stream { url: self })
    }
}

/// A displayable view of the built URL text, created by [`Url::stream`].
pub struct Stream<'a> {
    pub(crate) url: &'a Url,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.raw_fresh {
            serializer.serialize_str(&self.raw)
        } else {
            // The fields are fresh whenever the raw cache is not.
            let s = builder::build(&self.fields).map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(&s)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Url, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize<'_>>::deserialize(deserializer)?;
        Url::parse(s).map_err(serde::de::Error::custom)
    }
}
