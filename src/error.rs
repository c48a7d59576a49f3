//! Error types for parsing and building.

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Scheme text that does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    ///
    /// The error index points to the start of the scheme.
    InvalidScheme,
    /// Invalid IP literal address.
    ///
    /// The error index points to the preceding left square bracket "[".
    InvalidIpLiteral,
    /// Port text that is not all decimal digits or denotes a value above 65535.
    ///
    /// The error index points to the start of the port.
    InvalidPort,
    /// A percent-decoded component that is not valid UTF-8.
    ///
    /// The error index points to the start of the component.
    InvalidUtf8,
    /// Out-of-range index passed to an indexed query accessor.
    ///
    /// The error index is the offending query index.
    IndexOutOfRange,
}

/// An error occurred when deriving fields from raw URL text.
///
/// Since parsing is deferred, a `ParseError` may surface on the first
/// field access rather than at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(self) -> ParseErrorKind {
        self.kind
    }
}

impl std::error::Error for ParseError {}

/// Returns immediately with a [`ParseError`].
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(crate::error::ParseError {
            index: $index,
            kind: crate::error::ParseErrorKind::$kind,
        })
    };
}

pub(crate) use err;

/// Detailed cause of a [`BuildError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// The host text does not match the recorded IP-version hint.
    HostMismatch,
    /// The port denotes a value above 65535.
    PortOverflow,
    /// The path is neither empty nor absolute while an authority is present.
    NonAbemptyPath,
}

/// An error occurred when serializing individually well-formed fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildError(pub(crate) BuildErrorKind);

impl BuildError {
    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(self) -> BuildErrorKind {
        self.0
    }
}

impl std::error::Error for BuildError {}

/// An error occurred when serializing a [`Url`](crate::Url).
///
/// Serialization may first have to parse stale raw text, so both
/// error kinds can arise from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The raw text could not be parsed.
    Parse(ParseError),
    /// The fields could not be jointly serialized.
    Build(BuildError),
}

impl From<ParseError> for Error {
    #[inline]
    fn from(e: ParseError) -> Error {
        Error::Parse(e)
    }
}

impl From<BuildError> for Error {
    #[inline]
    fn from(e: BuildError) -> Error {
        Error::Build(e)
    }
}

impl std::error::Error for Error {}
