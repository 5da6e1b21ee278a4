//!
//! Keyed-hash plumbing around BLAKE2b-512
//!

use crate::{error::Error, BYTES, KEYBYTES};
use blake2::{digest::Mac, Blake2bMac512};
use subtle::ConstantTimeEq;

/// Initialize a keyed streaming hash context
///
/// Uses the hash's native keying mechanism instead of prepending the key to
/// the message, which is what makes the construction a secure prefix MAC
pub(crate) fn context(key: &[u8]) -> Result<Blake2bMac512, Error> {
    if key.len() < KEYBYTES {
        return Err(Error::InvalidKeyLength);
    }

    // Rejects keys longer than the hash can key natively
    Blake2bMac512::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)
}

pub(crate) fn finalize(ctx: Blake2bMac512) -> [u8; BYTES] {
    let output = ctx.finalize().into_bytes();

    let mut mac = [0; BYTES];
    mac.copy_from_slice(&output);
    mac
}

/// Constant-time comparison over exactly [`BYTES`] bytes
///
/// The execution time does not depend on where the two MACs first differ.
/// `supplied` has to be at least [`BYTES`] long; the caller checks that
pub(crate) fn ct_compare(computed: &[u8; BYTES], supplied: &[u8]) -> bool {
    bool::from(computed.ct_eq(&supplied[..BYTES]))
}
