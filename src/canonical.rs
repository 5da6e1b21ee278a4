//!
//! Deterministic request canonicalization
//!
//! The byte stream layout is security-relevant, not stylistic. Every header
//! entry carries its name and a trailing separator, otherwise two different,
//! consecutive, but mutually exclusive headers could produce the same stream.
//! One more separator precedes the payload so no suffix of the header section
//! can be reinterpreted as payload bytes or vice versa.
//!

use crate::request::Request;
use blake2::digest::Update;
use std::collections::HashMap;

const SEPARATOR: &[u8] = b"\n";

/// Feed the canonical byte stream of a request into a streaming hash context
///
/// `header_whitelist` is expected to be lowercased and sorted; entries absent
/// from the request are skipped without a placeholder
pub(crate) fn feed<D>(ctx: &mut D, header_whitelist: &[String], request: &Request<'_>)
where
    D: Update,
{
    ctx.update(request.method.to_uppercase().as_bytes());
    ctx.update(SEPARATOR);
    ctx.update(request.url.as_bytes());
    ctx.update(SEPARATOR);

    // Lowercase the header names once, before the whitelist walk. A later
    // duplicate of the same name replaces an earlier one
    let normalized = request
        .headers
        .iter()
        .map(|(name, value)| (name.to_lowercase(), *value))
        .collect::<HashMap<String, &str>>();

    for name in header_whitelist {
        let Some(value) = normalized.get(name) else {
            continue;
        };

        ctx.update(name.as_bytes());
        ctx.update(b":");
        ctx.update(value.as_bytes());
        ctx.update(SEPARATOR);
    }

    ctx.update(SEPARATOR);
    ctx.update(request.payload);
}
