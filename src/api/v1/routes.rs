/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - API key が必要な範囲 (protected) にだけ middleware::auth::api_key を掛ける
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::whoami::whoami;
use crate::middleware;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let protected = Router::new().route("/whoami", get(whoami));

    middleware::auth::api_key::apply(protected)
}
