//! Percent-encoding and decoding.

pub(crate) mod table;

use crate::error::{err, ParseError};
use std::fmt::{self, Write};
use table::Table;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xFF; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet from its two hex digits.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

/// Percent-encodes `s` into `out`, leaving bytes allowed by `table` intact.
///
/// Encoding normalizes: the input is decoded text, so an octet is never
/// escaped twice.
pub(crate) fn encode_to<W: Write>(s: &str, table: &Table, out: &mut W) -> fmt::Result {
    for &x in s.as_bytes() {
        table.encode(x, out)?;
    }
    Ok(())
}

/// Percent-decodes `s`, accepting hex digits of either case.
///
/// `offset` is the index of `s` within the original input; it is used
/// in error values only.
pub(crate) fn decode(s: &str, offset: usize) -> Result<String, ParseError> {
    let s = s.as_bytes();
    let mut buf = Vec::with_capacity(s.len());

    let mut i = 0;
    while i < s.len() {
        let x = s[i];
        if x == b'%' {
            if i + 2 >= s.len() {
                err!(offset + i, InvalidOctet);
            }
            match decode_octet(s[i + 1], s[i + 2]) {
                Some(octet) => buf.push(octet),
                None => err!(offset + i, InvalidOctet),
            }
            i += 3;
        } else {
            buf.push(x);
            i += 1;
        }
    }

    match String::from_utf8(buf) {
        Ok(out) => Ok(out),
        Err(_) => err!(offset, InvalidUtf8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    const RAW: &str = "te😃a 测1`~!@试#$%st^&+=";
    const ENCODED: &str = "te%F0%9F%98%83a%20%E6%B5%8B1%60~%21%40%E8%AF%95%23%24%25st%5E%26%2B%3D";

    #[test]
    fn encodes() {
        let mut buf = String::new();
        encode_to(RAW, table::UNRESERVED, &mut buf).unwrap();
        assert_eq!(buf, ENCODED);
    }

    #[test]
    fn encoding_is_idempotent_on_allowed_bytes() {
        let s = "a-b.c_d~e";
        let mut buf = String::new();
        encode_to(s, table::UNRESERVED, &mut buf).unwrap();
        assert_eq!(buf, s);
    }

    #[test]
    fn decodes() {
        assert_eq!(decode(ENCODED, 0).unwrap(), RAW);
        assert_eq!(decode("%c2%Bf", 0).unwrap(), "¿");
        assert_eq!(decode("plain", 0).unwrap(), "plain");
    }

    #[test]
    fn rejects_invalid_octet() {
        let e = decode("a%2xb", 3).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
        assert_eq!(e.index(), 4);

        assert!(decode("%", 0).is_err());
        assert!(decode("%a", 0).is_err());
        assert!(decode("100%", 0).is_err());
    }

    #[test]
    fn rejects_invalid_utf8() {
        let e = decode("%FF", 7).unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::InvalidUtf8);
        assert_eq!(e.index(), 7);
    }
}
