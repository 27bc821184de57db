/*
 * Responsibility
 * - GET /api/v1/whoami
 * - API key middleware 配下で、抽出済みの ApiKeyCtx を確認する
 * - key 本体は返さず hint (末尾 4 文字) のみ
 */
use axum::Json;

use crate::api::v1::dto::whoami::WhoamiResponse;
use crate::api::v1::extractors::ApiKeyCtxExtractor;

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        authenticated: true,
        key_hint: ctx.hint(),
    })
}
