#![allow(dead_code)]

use authenticated_request::{Request, RequestAuthenticator};

pub const KEY: &[u8] = b"0123456789abcdef0123456789abcdef";
pub const OTHER_KEY: &[u8] = b"fedcba9876543210fedcba9876543210";
pub const LONG_KEY: &[u8] = b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

#[must_use]
pub fn get_authenticator() -> RequestAuthenticator {
    RequestAuthenticator::new(["accept-encoding", "content-length"])
}

#[must_use]
pub fn get_request() -> Request<'static> {
    Request::builder()
        .method("GET")
        .url("www.example.com")
        .headers(vec![("Host", "example.com"), ("Content-Length", "20")])
        .build()
}

#[must_use]
pub fn get_post_request() -> Request<'static> {
    Request::builder()
        .method("POST")
        .url("/submit?id=1")
        .headers(vec![
            ("Accept-Encoding", "gzip"),
            ("Content-Length", "18"),
            ("Content-Type", "application/json"),
        ])
        .payload(b"{\"hello\":\"world\"}")
        .build()
}
