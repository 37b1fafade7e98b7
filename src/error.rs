//! Error types that can occur during status code queries.

/// Status code has no entry in the reason phrase table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownStatusCode(pub(crate) u16);

impl UnknownStatusCode {
    /// Returns the offending status code.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.0
    }
}

impl std::error::Error for UnknownStatusCode {}

impl std::fmt::Display for UnknownStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown HTTP status code: {}", self.0)
    }
}

/// Status code leading digit is not in `1..=5`, so it belongs to no [`Series`].
///
/// [`Series`]: crate::Series
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InvalidStatusCode(pub(crate) u16);

impl InvalidStatusCode {
    /// Returns the offending status code.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.0
    }
}

impl std::error::Error for InvalidStatusCode {}

impl std::fmt::Display for InvalidStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid HTTP status code: {}", self.0)
    }
}

// ===== Status Error =====

/// An error that can occur in any status code query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusError {
    /// Code is not in the reason phrase table.
    Unknown(UnknownStatusCode),
    /// Code does not belong to any series.
    Invalid(InvalidStatusCode),
}

impl StatusError {
    /// Returns the offending status code.
    #[inline]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Unknown(err) => err.code(),
            Self::Invalid(err) => err.code(),
        }
    }
}

impl From<UnknownStatusCode> for StatusError {
    #[inline]
    fn from(value: UnknownStatusCode) -> Self {
        Self::Unknown(value)
    }
}

impl From<InvalidStatusCode> for StatusError {
    #[inline]
    fn from(value: InvalidStatusCode) -> Self {
        Self::Invalid(value)
    }
}

impl std::error::Error for StatusError {}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(err) => std::fmt::Display::fmt(err, f),
            Self::Invalid(err) => std::fmt::Display::fmt(err, f),
        }
    }
}
