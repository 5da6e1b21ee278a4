use crate::{BYTES, KEYBYTES, KEYBYTES_MAX};
use miette::Diagnostic;
use thiserror::Error;

/// Precondition violations
///
/// Every variant is a caller error and surfaces before any hashing happens.
/// A wrong MAC is reported as a `false` verification result, never as an
/// error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Header had an invalid value (non-UTF8 value)
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::ToStrError),

    /// Key length is outside what the keyed hash accepts
    #[error("Key must be between {} and {} bytes long", KEYBYTES, KEYBYTES_MAX)]
    InvalidKeyLength,

    /// Supplied MAC is too short to compare
    #[error("MAC must be at least {} bytes long", BYTES)]
    InvalidMacLength,
}
