use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::ApiKeyCtx;

/// Handler で、 ApiKeyCtx を受け取るための extractor
/// middleware が ApiKeyCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 UNAUTHORIZED を返す（ミドルウェア未設定。client 側の header 不備とは区別する）
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl FromRequestParts<AppState> for ApiKeyCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or_else(|| AppError::unauthorized("UNAUTHORIZED", "unauthorized"))
    }
}
