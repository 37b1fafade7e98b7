//! Reason phrase table and series classification.
//!
//! The table is a compile-time constant, lookups are plain reads and safe from any thread.
//!
//! Predicates such as [`is_client_error`] return `false` for a code without a [`Series`], use
//! [`series`] to tell an invalid code apart from a code of another series.
use crate::{
    HttpStatus, Series, code,
    error::{InvalidStatusCode, UnknownStatusCode},
    log::debug,
};

/// Returns the reason phrase of `code`, e.g: `"Not Found"` for `404`.
///
/// # Errors
///
/// Returns [`UnknownStatusCode`] if `code` is not in the table.
pub fn reason_phrase(code: u16) -> Result<&'static str, UnknownStatusCode> {
    match code::lookup(code) {
        Some(phrase) => Ok(phrase),
        None => {
            debug!("no reason phrase for status code {code}");
            Err(UnknownStatusCode(code))
        }
    }
}

/// Returns the reason phrase of `code`, or `None` if it is not in the table.
#[inline]
pub const fn lookup(code: u16) -> Option<&'static str> {
    code::lookup(code)
}

/// Returns `true` if `code` is in the table.
#[inline]
pub const fn is_known(code: u16) -> bool {
    code::lookup(code).is_some()
}

/// Returns the [`Series`] of `code`.
///
/// # Errors
///
/// Returns [`InvalidStatusCode`] if `code / 100` is not in `1..=5`.
pub fn series(code: u16) -> Result<Series, InvalidStatusCode> {
    let series = Series::from_code(code);
    if series.is_err() {
        debug!("status code {code} has no series");
    }
    series
}

macro_rules! predicates {
    ($($(#[$doc:meta])* $name:ident => $series:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub const fn $name(code: u16) -> bool {
                matches!(Series::from_code(code), Ok(Series::$series))
            }
        )*
    };
}

predicates! {
    /// Returns `true` if `code` is `1xx`.
    is_informational => Informational;
    /// Returns `true` if `code` is `2xx`.
    is_successful => Successful;
    /// Returns `true` if `code` is `3xx`.
    is_redirection => Redirection;
    /// Returns `true` if `code` is `4xx`.
    is_client_error => ClientError;
    /// Returns `true` if `code` is `5xx`.
    is_server_error => ServerError;
}

/// Returns `true` if `code` is either `4xx` or `5xx`.
#[inline]
pub const fn is_error(code: u16) -> bool {
    match Series::from_code(code) {
        Ok(series) => series.is_error(),
        Err(_) => false,
    }
}

/// Returns an iterator over every status in the table, in ascending order.
pub fn codes() -> impl ExactSizeIterator<Item = HttpStatus> + Clone {
    code::CODES.iter().map(|&code| HttpStatus::new(code))
}
