//! `Authorization: ApiKey <token>` の抽出 → ApiKeyCtx を extensions に入れる
//!
//! - 抽出と形式チェックは `services::api_key::get_api_key` に委譲する
//! - 失敗時は AppError (401 + `WWW-Authenticate: ApiKey`) で拒否する
//! - key の照合 (lookup) は行わない

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::api_key;
use crate::state::AppState;

/// API key を要求する middleware を適用する。
///
/// 例 (`api/v1/routes.rs`)：
/// ```ignore
/// let protected = Router::new().route("/whoami", get(whoami));
/// middleware::auth::api_key::apply(protected)
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let api_key = match api_key::get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            // key 自体は絶対にログへ出さない
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key rejected"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(api_key);
    tracing::debug!(key_hint = %ctx.hint(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::to_bytes,
        http::{StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::api::v1::extractors::ApiKeyCtxExtractor;

    async fn echo(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> String {
        ctx.api_key.as_str().to_string()
    }

    fn router() -> Router {
        apply(Router::new().route("/echo", get(echo))).with_state(AppState)
    }

    fn request(auth: Option<&'static str>) -> Request<Body> {
        let mut builder = Request::get("/echo");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn passes_key_to_handler() {
        let res = router()
            .oneshot(request(Some("ApiKey key with spaces")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"key with spaces");
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let res = router().oneshot(request(None)).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers()[header::WWW_AUTHENTICATE], "ApiKey");
    }

    #[tokio::test]
    async fn rejects_malformed_header() {
        for value in ["Bearer my-secret-key", "ApiKeymy-secret-key", "ApiKey", "ApiKey "] {
            let res = router().oneshot(request(Some(value))).await.unwrap();
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "value: {value:?}");
        }
    }
}
