//!
//! Shared-key authentication for HTTP-style requests
//!
//! Flattens a request (method, URL, a whitelisted subset of its headers and
//! an optional payload) into a deterministic byte stream and feeds it into a
//! keyed BLAKE2b-512 hash, which acts as a prefix MAC. Both parties hold the
//! same secret key; verification recomputes the MAC and compares it in
//! constant time.
//!
//! The URL is never normalized. Callers that sign anything beyond an exact
//! literal (query order, trailing slashes, percent-encoding) have to agree on
//! a canonical representation out-of-band.
//!

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use tracing::{debug, instrument};

pub use self::error::Error;
pub use self::request::Request;

mod canonical;
mod error;
mod mac;
mod request;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Length of every MAC this crate produces (the BLAKE2b-512 output size)
pub const BYTES: usize = 64;

/// Minimum accepted key length
pub const KEYBYTES: usize = 32;

/// Maximum key length the keyed hash accepts natively
pub const KEYBYTES_MAX: usize = 64;

/// Computes and verifies MACs over requests
///
/// Owns the header whitelist, which is the sole authority on which headers
/// are ever fed into the MAC. Headers outside the whitelist are ignored even
/// if present in a request; whitelist entries absent from a request are
/// skipped without a placeholder.
///
/// The instance is immutable after construction. Both operations are pure
/// functions of their arguments plus the whitelist, each with its own local
/// hash context, so a single instance can be shared across threads and
/// reused for any number of calls.
#[derive(Clone)]
pub struct RequestAuthenticator {
    header_whitelist: Vec<String>,
}

impl RequestAuthenticator {
    /// Construct an authenticator from a header whitelist
    ///
    /// The names are lowercased, sorted, and deduplicated; canonicalization
    /// always walks them in that order, regardless of the order headers
    /// appear in a request
    #[must_use]
    pub fn new<I, S>(header_whitelist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut header_whitelist = header_whitelist
            .into_iter()
            .map(|name| name.as_ref().to_lowercase())
            .collect::<Vec<String>>();

        header_whitelist.sort_unstable();
        header_whitelist.dedup();

        Self { header_whitelist }
    }

    /// The canonical (lowercased, sorted) header whitelist
    #[must_use]
    pub fn header_whitelist(&self) -> &[String] {
        &self.header_whitelist
    }

    /// Compute the MAC of a request under the provided key
    ///
    /// For a fixed key and whitelist the result is a pure, deterministic
    /// function of the method, URL, whitelisted header name/value pairs
    /// present in the request, and payload. The key has to be between
    /// [`KEYBYTES`] and [`KEYBYTES_MAX`] bytes long; it is only borrowed for
    /// the duration of the call and never logged
    #[instrument(skip_all, fields(method = request.method, url = request.url))]
    pub fn authenticate(&self, key: &[u8], request: &Request<'_>) -> Result<[u8; BYTES]> {
        let mut ctx = mac::context(key)?;
        canonical::feed(&mut ctx, &self.header_whitelist, request);

        Ok(mac::finalize(ctx))
    }

    /// Verify a request against a previously computed MAC
    ///
    /// Recomputes the MAC and compares the first [`BYTES`] bytes of the
    /// supplied one against it in constant time. A mismatch is a normal
    /// `false` result, not an error; errors are reserved for precondition
    /// violations (undersized MAC or an invalid key)
    #[instrument(skip_all)]
    pub fn verify(&self, mac: &[u8], key: &[u8], request: &Request<'_>) -> Result<bool> {
        if mac.len() < BYTES {
            return Err(Error::InvalidMacLength);
        }

        let computed = self.authenticate(key, request)?;
        let is_valid = mac::ct_compare(&computed, mac);
        if !is_valid {
            debug!("mac mismatch");
        }

        Ok(is_valid)
    }
}
