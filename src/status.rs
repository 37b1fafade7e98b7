use crate::{
    Series,
    error::{InvalidStatusCode, UnknownStatusCode},
    registry,
};

/// HTTP [Status Code][rfc].
///
/// Any `u16` can be held, whether it is in the reason phrase table is only checked when the
/// phrase is requested.
///
/// ```
/// use httpstatus::{HttpStatus, Series};
///
/// let status = HttpStatus::new(301);
/// assert_eq!(status, HttpStatus::MOVED_PERMANENTLY);
/// assert_eq!(status.code_with_reason_phrase().unwrap(), "301 Moved Permanently");
/// assert_eq!(status.series(), Ok(Series::Redirection));
///
/// assert!(HttpStatus::new(299).reason_phrase().is_err());
/// ```
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpStatus(u16);

impl HttpStatus {
    /// Create new [`HttpStatus`] from integer code.
    #[inline]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Returns status message, e.g: `"OK"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStatusCode`] if the code is not in the table.
    #[inline]
    pub fn reason_phrase(&self) -> Result<&'static str, UnknownStatusCode> {
        registry::reason_phrase(self.0)
    }

    /// Returns status code and message, e.g: `"200 OK"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStatusCode`] if the code is not in the table.
    pub fn code_with_reason_phrase(&self) -> Result<String, UnknownStatusCode> {
        let phrase = self.reason_phrase()?;
        let mut buf = itoa::Buffer::new();
        let code = buf.format(self.0);

        let mut out = String::with_capacity(code.len() + 1 + phrase.len());
        out.push_str(code);
        out.push(' ');
        out.push_str(phrase);
        Ok(out)
    }

    /// Returns `true` if the code is in the table.
    #[inline]
    pub const fn is_known(&self) -> bool {
        registry::is_known(self.0)
    }

    /// Returns the [`Series`] of the code.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatusCode`] if the leading digit is not in `1..=5`.
    #[inline]
    pub fn series(&self) -> Result<Series, InvalidStatusCode> {
        registry::series(self.0)
    }

    /// Returns `true` for `1xx`.
    #[inline]
    pub const fn is_informational(&self) -> bool {
        registry::is_informational(self.0)
    }

    /// Returns `true` for `2xx`.
    #[inline]
    pub const fn is_successful(&self) -> bool {
        registry::is_successful(self.0)
    }

    /// Returns `true` for `3xx`.
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        registry::is_redirection(self.0)
    }

    /// Returns `true` for `4xx`.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        registry::is_client_error(self.0)
    }

    /// Returns `true` for `5xx`.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        registry::is_server_error(self.0)
    }

    /// Returns `true` for `4xx` and `5xx`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        registry::is_error(self.0)
    }
}

impl Default for HttpStatus {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl From<u16> for HttpStatus {
    #[inline]
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<HttpStatus> for u16 {
    #[inline]
    fn from(value: HttpStatus) -> Self {
        value.0
    }
}

impl PartialEq<u16> for HttpStatus {
    #[inline]
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.0))?;
        if let Some(phrase) = registry::lookup(self.0) {
            f.write_str(" ")?;
            f.write_str(phrase)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("HttpStatus").field(&self.0).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HttpStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HttpStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <u16 as serde::Deserialize>::deserialize(deserializer).map(Self)
    }
}
