//! Error types.

use core::fmt;

/// Error type.
///
/// Only returned when validating public shapes, e.g. the dimensions of a
/// selection [`Table`](crate::Table). Arithmetic never fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limbs error")
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
