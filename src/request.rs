use crate::error::Error;
use http::{request::Parts, uri::PathAndQuery};
use typed_builder::TypedBuilder;

/// Structured view of the request fields covered by the MAC
///
/// Only borrows its data; nothing is copied or retained beyond the call it
/// is passed to
#[derive(Clone, Debug, TypedBuilder)]
pub struct Request<'a> {
    /// Request method
    ///
    /// Matched case-insensitively (canonicalization upper-cases it)
    pub method: &'a str,

    /// Request URL
    ///
    /// Treated as an opaque literal. No normalization of scheme, casing,
    /// trailing slashes, or query order is performed
    pub url: &'a str,

    /// Header name/value pairs
    ///
    /// Names are matched case-insensitively against the whitelist and the
    /// order is irrelevant. If the same name appears multiple times, the
    /// last occurrence wins
    #[builder(default)]
    pub headers: Vec<(&'a str, &'a str)>,

    /// Request payload
    ///
    /// An absent payload and an explicitly empty one are equivalent
    #[builder(default)]
    pub payload: &'a [u8],
}

impl<'a> Request<'a> {
    /// Build a request view over parsed HTTP request parts
    ///
    /// The URL is taken as the request target (path and query), the same
    /// component cavage-style signatures cover with their `(request-target)`
    /// pseudo-header. Since [`Parts`] carries no body, the payload is passed
    /// separately
    pub fn from_parts(parts: &'a Parts, payload: &'a [u8]) -> Result<Self, Error> {
        let url = parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path(), PathAndQuery::as_str);

        let headers = parts
            .headers
            .iter()
            .map(|(name, value)| Ok((name.as_str(), value.to_str()?)))
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            method: parts.method.as_str(),
            url,
            headers,
            payload,
        })
    }
}
