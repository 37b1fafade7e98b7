use crate::error::InvalidStatusCode;

/// Status code [class][rfc], determined by the first digit of the code.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#section-15>
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Series {
    /// `1xx`, the request was received, continuing process.
    Informational = 1,
    /// `2xx`, the request was successfully received, understood, and accepted.
    Successful = 2,
    /// `3xx`, further action needs to be taken in order to complete the request.
    Redirection = 3,
    /// `4xx`, the request contains bad syntax or cannot be fulfilled.
    ClientError = 4,
    /// `5xx`, the server failed to fulfill an apparently valid request.
    ServerError = 5,
}

impl Series {
    /// Classify status code by its leading digit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatusCode`] if `code / 100` is not in `1..=5`, e.g: `50` or `700`.
    #[inline]
    pub const fn from_code(code: u16) -> Result<Series, InvalidStatusCode> {
        let digit = code / 100;
        if digit > 5 {
            return Err(InvalidStatusCode(code));
        }
        match Self::from_digit(digit as u8) {
            Some(series) => Ok(series),
            None => Err(InvalidStatusCode(code)),
        }
    }

    /// Create [`Series`] from the leading digit, `1` to `5`.
    #[inline]
    pub const fn from_digit(digit: u8) -> Option<Series> {
        match digit {
            1 => Some(Self::Informational),
            2 => Some(Self::Successful),
            3 => Some(Self::Redirection),
            4 => Some(Self::ClientError),
            5 => Some(Self::ServerError),
            _ => None,
        }
    }

    /// Returns the leading digit, e.g: `4` for [`Series::ClientError`].
    #[inline]
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Returns the series name, e.g: `"Client Error"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Successful => "Successful",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
        }
    }

    /// Returns `true` for [`Series::ClientError`] and [`Series::ServerError`].
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::ClientError | Self::ServerError)
    }
}

impl std::fmt::Display for Series {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Series {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Series {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::{Error, Unexpected};

        let digit = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Series::from_digit(digit).ok_or_else(|| {
            D::Error::invalid_value(Unexpected::Unsigned(digit.into()), &"a digit from 1 to 5")
        })
    }
}
