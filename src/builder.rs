//! The fields-to-raw half of the synchronization engine.

use crate::{
    component::HostKind,
    encoding::{encode_to, table},
    error::{BuildError, BuildErrorKind},
    internal::Fields,
    ip,
};
use std::fmt::{self, Write};

/// Serializes the field set, in fixed component order, into a fresh string.
pub(crate) fn build(fields: &Fields) -> Result<String, BuildError> {
    validate(fields)?;
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write(fields, &mut out);
    Ok(out)
}

/// Checks that individually well-formed fields can be jointly serialized.
///
/// An IP-version hint recorded on the host mutator is re-validated here
/// rather than trusted: text that does not parse as the hinted address
/// family is an error, never silently reclassified.
pub(crate) fn validate(fields: &Fields) -> Result<(), BuildError> {
    match fields.host_kind {
        HostKind::Ipv4 if ip::parse_v4(&fields.host).is_none() => {
            return Err(BuildError(BuildErrorKind::HostMismatch));
        }
        HostKind::Ipv6 if ip::parse_v6(&fields.host).is_none() => {
            return Err(BuildError(BuildErrorKind::HostMismatch));
        }
        _ => {}
    }

    if !fields.port.is_empty() {
        match fields.port.parse::<u32>() {
            Ok(v) if v <= 65535 => {}
            _ => return Err(BuildError(BuildErrorKind::PortOverflow)),
        }
    }

    // An authority-relative path must be absolute.
    if fields.has_authority() && !fields.path.is_empty() && !fields.path.starts_with('/') {
        return Err(BuildError(BuildErrorKind::NonAbemptyPath));
    }
    Ok(())
}

/// Writes the built form of an already [validated](validate) field set.
pub(crate) fn write<W: Write>(fields: &Fields, out: &mut W) -> fmt::Result {
    if !fields.scheme.is_empty() {
        out.write_str(&fields.scheme)?;
        out.write_char(':')?;
    }

    if fields.has_authority() {
        out.write_str("//")?;
        if !fields.user_info.is_empty() {
            encode_to(&fields.user_info, table::USERINFO, out)?;
            out.write_char('@')?;
        }
        match fields.host_kind {
            HostKind::Ipv6 => {
                out.write_char('[')?;
                out.write_str(&fields.host)?;
                out.write_char(']')?;
            }
            HostKind::Ipv4 => out.write_str(&fields.host)?,
            _ => encode_to(&fields.host, table::REG_NAME, out)?,
        }
        if !fields.port.is_empty() {
            out.write_char(':')?;
            out.write_str(&fields.port)?;
        }
    }

    encode_to(&fields.path, table::PATH, out)?;

    if !fields.query.is_empty() {
        out.write_char('?')?;
        for (i, kv) in fields.query.iter().enumerate() {
            if i > 0 {
                out.write_char('&')?;
            }
            encode_to(kv.key(), table::QUERY_PART, out)?;
            // Only a token that carries an explicit value gets an '='.
            if let Some(val) = kv.value() {
                out.write_char('=')?;
                encode_to(val, table::QUERY_PART, out)?;
            }
        }
    }

    if !fields.fragment.is_empty() {
        out.write_char('#')?;
        encode_to(&fields.fragment, table::FRAGMENT, out)?;
    }
    Ok(())
}
