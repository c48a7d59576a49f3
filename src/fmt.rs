use crate::{
    builder,
    component::KeyVal,
    error::{BuildError, BuildErrorKind, Error, ParseError, ParseErrorKind},
    Stream, Url,
};
use std::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::InvalidScheme => "invalid scheme at index ",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
            ParseErrorKind::InvalidUtf8 => "component decodes to invalid UTF-8 at index ",
            ParseErrorKind::IndexOutOfRange => "query index out of range: ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.0 {
            BuildErrorKind::HostMismatch => "host text does not match its IP-version hint",
            BuildErrorKind::PortOverflow => "port value exceeds 65535",
            BuildErrorKind::NonAbemptyPath => {
                "path must either be empty or start with '/' when authority is present"
            }
        };
        f.write_str(msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => fmt::Display::fmt(e, f),
            Error::Build(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// The dump shows whichever representations are currently fresh;
/// its exact format is not a stable guarantee.
impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Url");
        if self.raw_fresh {
            s.field("raw", &self.raw);
        }
        if self.fields_fresh {
            s.field("scheme", &self.fields.scheme)
                .field("user_info", &self.fields.user_info)
                .field("host", &self.fields.host)
                .field("host_kind", &self.fields.host_kind)
                .field("port", &self.fields.port)
                .field("path", &self.fields.path)
                .field("query", &self.fields.query)
                .field("fragment", &self.fields.fragment);
        }
        s.field("fields_fresh", &self.fields_fresh)
            .field("raw_fresh", &self.raw_fresh)
            .finish()
    }
}

impl fmt::Debug for KeyVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyVal")
            .field("key", &self.key)
            .field("val", &self.val)
            .finish()
    }
}

impl fmt::Display for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.url.raw_fresh {
            f.write_str(&self.url.raw)
        } else {
            // `Url::stream` has already ensured the fields and
            // validated them against the builder.
            builder::write(&self.url.fields, f)
        }
    }
}

impl fmt::Debug for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}
