//! `Authorization: ApiKey <token>` からの API key 抽出 (core logic).
//!
//! This module is "core-only": it knows nothing about axum extractors,
//! middleware or HTTP responses. It reads a `HeaderMap` and either returns
//! the key or classifies why it could not.

use std::fmt;

use axum::http::{HeaderMap, header};

/// Authorization scheme keyword. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Opaque API key taken verbatim from the Authorization header.
///
/// `Debug` is redacted so the key never ends up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

/// Extract the API key from request headers.
///
/// - Only the first `Authorization` value is considered.
/// - Missing or empty header -> `NoAuthHeader`.
/// - The value is split on the first space; the scheme must be exactly
///   `ApiKey` and the remainder must be non-empty, otherwise
///   `MalformedHeader`. The remainder is returned as-is (inner spaces kept).
pub fn get_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiKeyError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ApiKeyError::NoAuthHeader),
    };

    // non visible-ASCII bytes can't be a well-formed `ApiKey <token>`
    let value = value.to_str().map_err(|_| ApiKeyError::MalformedHeader)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(ApiKeyError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME || token.is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(ApiKey(token.to_string()))
}
