/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ApiKeyError (credential extraction) を 401 に統一的に変換
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::api_key::{API_KEY_SCHEME, ApiKeyError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    Unauthorized { code: &'static str, message: String },
}

impl AppError {
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { code, message } => (StatusCode::UNAUTHORIZED, code, message),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut res = (status, Json(body)).into_response();
        // 401 は challenge を必ず付ける (RFC 9110 11.6.1)
        if status == StatusCode::UNAUTHORIZED {
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        res
    }
}

impl From<ApiKeyError> for AppError {
    fn from(e: ApiKeyError) -> Self {
        let code = match e {
            ApiKeyError::NoAuthHeader => "NO_AUTH_HEADER",
            ApiKeyError::MalformedHeader => "MALFORMED_AUTH_HEADER",
        };
        AppError::unauthorized(code, e.to_string())
    }
}
