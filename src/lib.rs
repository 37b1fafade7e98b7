//! HTTP status codes, reason phrases and series classification.
//!
//! - [`code`], named integer constants for every status in the table
//! - [`registry`], reason phrase lookup and series predicates over plain `u16`
//! - [`HttpStatus`], a value bundling one code with the same queries
#![warn(missing_debug_implementations)]

mod log;

pub mod code;
pub mod error;
pub mod registry;
mod series;
mod status;

pub use error::{InvalidStatusCode, StatusError, UnknownStatusCode};
pub use series::Series;
pub use status::HttpStatus;

#[cfg(test)]
mod test;
