//! Byte pattern tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 2234].
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

use std::fmt::{self, Write};

const fn gen_hex_table() -> [u8; 512] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut i = 0;
    let mut out = [0; 512];
    while i < 256 {
        out[i * 2] = HEX_DIGITS[i >> 4];
        out[i * 2 + 1] = HEX_DIGITS[i & 0b1111];
        i += 1;
    }
    out
}

const HEX_TABLE: &[u8; 512] = &gen_hex_table();

/// A table determining the bytes a component may carry unencoded.
#[derive(Clone, Copy)]
pub(crate) struct Table {
    arr: [bool; 256],
}

impl Table {
    /// Generates a table that only allows the given bytes.
    const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 256];
        while let [cur, rem @ ..] = bytes {
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table { arr }
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// either by `self` or by `other`.
    const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` but not allowed by `other`.
    const fn sub(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            if other.arr[i] {
                self.arr[i] = false;
            }
            i += 1;
        }
        self
    }

    /// Returns `true` if the given byte is allowed by the table.
    #[inline]
    pub(crate) const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize]
    }

    /// Validates that the table allows every byte in the sequence.
    pub(crate) fn validate(&self, s: &[u8]) -> bool {
        s.iter().all(|&x| self.allows(x))
    }

    /// Writes a byte, percent-encoding it with uppercase hex digits
    /// unless the table allows it.
    #[inline]
    pub(crate) fn encode<W: Write>(&self, x: u8, out: &mut W) -> fmt::Result {
        if self.allows(x) {
            out.write_char(x as char)
        } else {
            out.write_char('%')?;
            out.write_char(HEX_TABLE[x as usize * 2] as char)?;
            out.write_char(HEX_TABLE[x as usize * 2 + 1] as char)
        }
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub(crate) const ALPHA: &Table = &gen(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub(crate) const DIGIT: &Table = &gen(b"0123456789");

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub(crate) const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub(crate) const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub(crate) const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
pub(crate) const USERINFO: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":"));

/// reg-name = *( unreserved / pct-encoded / sub-delims )
pub(crate) const REG_NAME: &Table = &UNRESERVED.or(SUB_DELIMS);

/// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
const PCHAR: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":@"));

/// path = *( pchar / "/" )
pub(crate) const PATH: &Table = &PCHAR.or(&gen(b"/"));

/// fragment = *( pchar / "/" / "?" )
pub(crate) const FRAGMENT: &Table = &PCHAR.or(&gen(b"/?"));

/// Like `fragment`, minus the "&" and "=" delimiters so that the
/// key/value structure of a query survives re-parsing.
pub(crate) const QUERY_PART: &Table = &FRAGMENT.sub(&gen(b"&="));
