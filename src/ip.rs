//! IPv4 and IPv6 address syntax checks.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Parses a dotted-quad IPv4 address.
///
/// `Ipv4Addr::from_str` is not used here because the address grammar of
/// RFC 3986 is stricter about leading zeros than older inet_aton-style
/// parsers; keeping the rule local makes the accepted syntax explicit.
pub(crate) fn parse_v4(s: &str) -> Option<Ipv4Addr> {
    let mut octets = [0; 4];
    let mut parts = s.split('.');
    for octet in &mut octets {
        *octet = parse_dec_octet(parts.next()?.as_bytes())?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

// dec-octet = DIGIT             ; 0-9
//           / %x31-39 DIGIT     ; 10-99
//           / "1" 2DIGIT        ; 100-199
//           / "2" %x30-34 DIGIT ; 200-249
//           / "25" %x30-35      ; 250-255
fn parse_dec_octet(s: &[u8]) -> Option<u8> {
    match *s {
        [x] if x.is_ascii_digit() => Some(x - b'0'),
        [x @ b'1'..=b'9', y] if y.is_ascii_digit() => Some((x - b'0') * 10 + (y - b'0')),
        [x @ b'1'..=b'2', y, z] if y.is_ascii_digit() && z.is_ascii_digit() => {
            let v = u16::from(x - b'0') * 100 + u16::from(y - b'0') * 10 + u16::from(z - b'0');
            if v <= 255 {
                Some(v as u8)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Parses an IPv6 literal, without the enclosing brackets.
///
/// Accepts the full `IPv6address` rule of RFC 3986: eight colon-separated
/// hextets, at most one "::" zero-compression run, and an optional
/// embedded dotted-quad in place of the final two hextets.
pub(crate) fn parse_v6(s: &str) -> Option<Ipv6Addr> {
    let mut segs = [0u16; 8];

    match s.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return None;
            }
            let mut head_segs = [0u16; 8];
            let mut tail_segs = [0u16; 8];
            // An embedded dotted-quad occupies the final 32 bits, so it
            // may only appear at the end of the tail.
            let n = scan_groups(head, &mut head_segs, false)?;
            let m = scan_groups(tail, &mut tail_segs, true)?;
            // "::" must elide at least one group.
            if n + m >= 8 {
                return None;
            }
            segs[..n].copy_from_slice(&head_segs[..n]);
            segs[8 - m..].copy_from_slice(&tail_segs[..m]);
            Some(segs.into())
        }
        None => {
            if scan_groups(s, &mut segs, true)? == 8 {
                Some(segs.into())
            } else {
                None
            }
        }
    }
}

/// Scans colon-separated hextet groups into `out`, returning the count.
///
/// An empty input yields zero groups. When `allow_v4` is set, the last
/// group may be a dotted-quad filling two hextets.
fn scan_groups(s: &str, out: &mut [u16; 8], allow_v4: bool) -> Option<usize> {
    if s.is_empty() {
        return Some(0);
    }

    let mut n = 0;
    let mut groups = s.split(':').peekable();
    while let Some(group) = groups.next() {
        if allow_v4 && groups.peek().is_none() && group.contains('.') {
            if n + 2 > 8 {
                return None;
            }
            let octets = parse_v4(group)?.octets();
            out[n] = u16::from_be_bytes([octets[0], octets[1]]);
            out[n + 1] = u16::from_be_bytes([octets[2], octets[3]]);
            n += 2;
        } else {
            if n == 8 {
                return None;
            }
            out[n] = parse_hextet(group.as_bytes())?;
            n += 1;
        }
    }
    Some(n)
}

// h16 = 1*4HEXDIG
fn parse_hextet(s: &[u8]) -> Option<u16> {
    if s.is_empty() || s.len() > 4 || !s.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let mut x = 0u16;
    for &b in s {
        let digit = (b as char).to_digit(16)?;
        x = (x << 4) | digit as u16;
    }
    Some(x)
}
