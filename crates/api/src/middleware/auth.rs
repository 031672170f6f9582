//! # Access Gate
//!
//! Shared-secret gates for the "admin" and "expert" roles. Each role has one
//! process-wide secret; privileged API calls present it in the
//! `x-admin-token` header, while the browser-facing pages carry it in an
//! HTTP-only session cookie issued by the login endpoints.
//!
//! This is intentionally a minimal scheme, not a user-identity system: the
//! cookie value is the literal secret (as the login endpoints issue it), so
//! the gate is a plain comparison against configuration. The cookie is
//! HttpOnly, SameSite=Lax, and expires after [`SESSION_MAX_AGE_SECS`].

use axum::http::{header, HeaderMap};
use rand::Rng;

use crate::config::ApiConfig;
use slotbook_core::errors::{BookingError, BookingResult};

/// Cookie carrying the admin session marker.
pub const ADMIN_COOKIE: &str = "admin_auth";
/// Cookie carrying the expert session marker.
pub const EXPERT_COOKIE: &str = "expert_auth";
/// Header carrying the admin secret on privileged API calls.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Session cookie lifetime: 12 hours.
pub const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 12;

/// Checks that the request carries the admin secret, either in the
/// `x-admin-token` header or in the admin session cookie.
pub fn require_admin(config: &ApiConfig, headers: &HeaderMap) -> BookingResult<()> {
    let header_token = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if header_token == Some(config.admin_token.as_str()) {
        return Ok(());
    }

    if cookie_value(headers, ADMIN_COOKIE).as_deref() == Some(config.admin_token.as_str()) {
        return Ok(());
    }

    Err(BookingError::Unauthorized(
        "Invalid admin token".to_string(),
    ))
}

/// Extracts a cookie value from the `Cookie` header, if present.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Builds a `Set-Cookie` value establishing a role session.
pub fn session_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}")
}

/// Builds a `Set-Cookie` value clearing a role session.
pub fn clear_session_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Generates a random cancellation code: 3 bytes of entropy rendered as a
/// 6-character hex string, matching what students are asked to keep.
pub fn generate_cancellation_code() -> String {
    let bytes: [u8; 3] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_config() -> ApiConfig {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "postgres://localhost/slotbook".to_string(),
            admin_token: "admin-secret".to_string(),
            expert_token: "expert-secret".to_string(),
            log_level: tracing::Level::INFO,
            cors_origins: None,
            request_timeout: 30,
        }
    }

    #[test]
    fn admin_header_grants_access() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("admin-secret"));
        assert!(require_admin(&test_config(), &headers).is_ok());
    }

    #[test]
    fn admin_cookie_grants_access() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; admin_auth=admin-secret"),
        );
        assert!(require_admin(&test_config(), &headers).is_ok());
    }

    #[test]
    fn wrong_token_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("guess"));
        let err = require_admin(&test_config(), &headers).unwrap_err();
        assert!(matches!(err, BookingError::Unauthorized(_)));
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let headers = HeaderMap::new();
        assert!(require_admin(&test_config(), &headers).is_err());
    }

    #[test]
    fn cookie_parsing_handles_multiple_pairs() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("a=1; expert_auth=expert-secret; b=2"),
        );
        assert_eq!(
            cookie_value(&headers, EXPERT_COOKIE).as_deref(),
            Some("expert-secret")
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cancellation_code_is_short_hex() {
        let code = generate_cancellation_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_cookie_sets_expected_attributes() {
        let cookie = session_cookie(ADMIN_COOKIE, "admin-secret");
        assert!(cookie.starts_with("admin_auth=admin-secret;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=43200"));

        let cleared = clear_session_cookie(ADMIN_COOKIE);
        assert!(cleared.contains("Max-Age=0"));
    }
}
