//! Outbound HTTP client construction.
//!
//! One client serves both the existence probe and the write, so the fixed
//! header set and the trust anchors are identical on every request.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;

use crate::error::{SyncError, SyncResult};

pub mod tls;

pub use tls::TlsTrust;

/// Header carrying the pre-acquired identity token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Client-level timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the client used for the whole run.
pub fn build_client(token: &str, trust: &TlsTrust) -> SyncResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    let mut token_value = HeaderValue::from_str(token)?;
    token_value.set_sensitive(true);
    headers.insert(AUTH_TOKEN_HEADER, token_value);

    let mut builder = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .default_headers(headers);

    for cert in trust.extra_roots()? {
        builder = builder.add_root_certificate(cert);
    }

    builder.build().map_err(SyncError::ClientBuild)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_system_trust() {
        build_client("tok123", &TlsTrust::SystemRoots).expect("client");
    }

    #[test]
    fn rejects_token_with_control_characters() {
        let err = build_client("tok\nwith-newline", &TlsTrust::SystemRoots)
            .expect_err("control characters cannot be a header value");
        assert!(matches!(err, SyncError::InvalidToken(_)));
    }
}
