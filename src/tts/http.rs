//! Shared HTTP client and header/error utilities.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::NarratorError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// No global timeout is set: a request runs to completion unless the
/// provider carries a per-request timeout.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build ElevenLabs-style headers (xi-api-key).
pub fn xi_api_key_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(api_key) {
        headers.insert("xi-api-key", val);
    }
    headers
}

/// Map a non-success HTTP status code to an error.
pub fn status_to_error(status: u16, body: &str) -> NarratorError {
    match status {
        401 | 403 => NarratorError::Authentication(body.to_string()),
        429 => NarratorError::RateLimited,
        _ => NarratorError::api(status, body),
    }
}

pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}
