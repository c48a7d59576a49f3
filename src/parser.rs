//! The raw-to-fields half of the synchronization engine.

use crate::{
    component::{self, HostKind, KeyVal},
    encoding::{self, table},
    error::{err, ParseError},
    internal::Fields,
    ip,
};

/// Parses raw URL text into a field set per the generic URI grammar
/// `scheme ":" ["//" authority] path ["?" query] ["#" fragment]`.
pub(crate) fn parse(s: &str) -> Result<Fields, ParseError> {
    let mut parser = Parser {
        s,
        pos: 0,
        out: Fields::default(),
    };
    parser.parse_from_scheme()?;
    Ok(parser.out)
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub(crate) fn is_valid_scheme(s: &str) -> bool {
    matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
}

struct Parser<'a> {
    s: &'a str,
    pos: usize,
    out: Fields,
}

impl<'a> Parser<'a> {
    fn remaining(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.remaining().bytes().next()
    }

    /// Scans up to the next occurrence of any byte in `delims` or the end
    /// of input, returning the start index and the scanned slice.
    ///
    /// All delimiters used here are ASCII, so slicing at the scan
    /// position cannot split a UTF-8 sequence.
    fn scan_until(&mut self, delims: &[u8]) -> (usize, &'a str) {
        let start = self.pos;
        let rem = self.remaining();
        let i = rem
            .bytes()
            .position(|x| delims.contains(&x))
            .unwrap_or(rem.len());
        self.pos = start + i;
        (start, &rem[..i])
    }

    fn parse_from_scheme(&mut self) -> Result<(), ParseError> {
        // A ':' occurring before any of "/?#" introduces a scheme;
        // otherwise the whole input is a relative reference.
        if let Some(i) = self
            .s
            .bytes()
            .position(|x| matches!(x, b':' | b'/' | b'?' | b'#'))
        {
            if self.s.as_bytes()[i] == b':' {
                let scheme = &self.s[..i];
                if !is_valid_scheme(scheme) {
                    err!(0, InvalidScheme);
                }
                // The scheme is case-insensitive; keep it lowercase.
                self.out.scheme = scheme.to_ascii_lowercase();
                self.pos = i + 1;
            }
        }
        self.parse_from_authority()
    }

    fn parse_from_authority(&mut self) -> Result<(), ParseError> {
        if !self.remaining().starts_with("//") {
            return self.parse_from_path();
        }
        self.pos += 2;

        let (start, auth) = self.scan_until(b"/?#");

        // The userinfo subcomponent ends at the last '@'; an escaped '@'
        // in the userinfo is still percent-encoded at this point.
        let host_port = match auth.rfind('@') {
            Some(i) => {
                self.out.user_info = encoding::decode(&auth[..i], start)?;
                &auth[i + 1..]
            }
            None => auth,
        };
        let offset = start + auth.len() - host_port.len();
        self.parse_host_port(host_port, offset)?;

        self.parse_from_path()
    }

    fn parse_host_port(&mut self, s: &'a str, offset: usize) -> Result<(), ParseError> {
        let port;
        let port_offset;

        if s.starts_with('[') {
            // IP-literal: the bracket pair must enclose a valid IPv6
            // address, and a port may only follow the closing bracket.
            let end = match s.find(']') {
                Some(i) => i,
                None => err!(offset, InvalidIpLiteral),
            };
            let inside = &s[1..end];
            if ip::parse_v6(inside).is_none() {
                err!(offset, InvalidIpLiteral);
            }
            let after = &s[end + 1..];
            port = match after.strip_prefix(':') {
                Some(p) => p,
                None if after.is_empty() => "",
                None => err!(offset, InvalidIpLiteral),
            };
            port_offset = offset + end + 2;
            self.out.host = inside.to_owned();
            self.out.host_kind = HostKind::Ipv6;
        } else {
            // The port split point is the last ':'.
            let (host, p) = match s.rfind(':') {
                Some(i) => (&s[..i], &s[i + 1..]),
                None => (s, ""),
            };
            port = p;
            port_offset = offset + s.len() - p.len();
            let host = encoding::decode(host, offset)?;
            self.out.host_kind = component::classify(&host);
            self.out.host = host;
        }

        if !port.is_empty() {
            if !table::DIGIT.validate(port.as_bytes()) {
                err!(port_offset, InvalidPort);
            }
            match port.parse::<u32>() {
                Ok(v) if v <= 65535 => {}
                _ => err!(port_offset, InvalidPort),
            }
        }
        self.out.port = port.to_owned();
        Ok(())
    }

    fn parse_from_path(&mut self) -> Result<(), ParseError> {
        let (start, path) = self.scan_until(b"?#");
        self.out.path = encoding::decode(path, start)?;

        if self.peek() == Some(b'?') {
            self.pos += 1;
            let (start, query) = self.scan_until(b"#");
            self.parse_query(query, start)?;
        }
        if self.peek() == Some(b'#') {
            self.pos += 1;
            self.out.fragment = encoding::decode(self.remaining(), self.pos)?;
        }
        Ok(())
    }

    fn parse_query(&mut self, s: &'a str, offset: usize) -> Result<(), ParseError> {
        let mut token_start = offset;
        for token in s.split('&') {
            let next = token_start + token.len() + 1;
            // Empty tokens from "&&" or a stray "&" carry nothing.
            if token.is_empty() {
                token_start = next;
                continue;
            }
            let kv = match token.split_once('=') {
                Some((key, val)) => KeyVal::new(
                    encoding::decode(key, token_start)?,
                    encoding::decode(val, token_start + key.len() + 1)?,
                ),
                None => KeyVal::key_only(encoding::decode(token, token_start)?),
            };
            self.out.query.push(kv);
            token_start = next;
        }
        Ok(())
    }
}
