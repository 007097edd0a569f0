//! HTTP Basic authentication.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use http::HeaderValue;

use crate::error::Error;

/// Encode `username:password` as standard base64.
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    BASE64_STANDARD.encode(format!("{username}:{password}"))
}

/// Build a sensitive `Authorization: Basic ...` header value.
pub fn basic_auth_header(username: &str, password: &str) -> Result<HeaderValue, Error> {
    let mut header =
        HeaderValue::try_from(format!("Basic {}", encode_basic_auth(username, password)))?;
    header.set_sensitive(true);
    Ok(header)
}
