//! HTTP request handlers.
//!
//! Controllers validate access, convert DTOs to operation parameters, call
//! the service layer, and convert domain models back to DTOs.

use axum::http::HeaderMap;

pub mod audio;
pub mod auth;
pub mod message;
pub mod mosque;
pub mod prayer_time;
pub mod settings;
pub mod subscribe;
pub mod subscriber;
pub mod webhook;

/// Fallback client address when no forwarding header is present (direct
/// connections in development).
const FALLBACK_CLIENT_IP: &str = "127.0.0.1";

/// Resolves the client address for rate limiting.
///
/// Takes the first entry of `x-forwarded-for`, which the edge proxy sets to
/// the original client.
pub(crate) fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| FALLBACK_CLIENT_IP.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn takes_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 198.51.100.2"),
        );

        assert_eq!(client_ip(&headers), "203.0.113.7");
    }

    #[test]
    fn falls_back_without_header() {
        assert_eq!(client_ip(&HeaderMap::new()), "127.0.0.1");
    }
}
