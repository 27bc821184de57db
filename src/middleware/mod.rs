/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http: 全 route 共通 (request-id / trace / limit / timeout)
 * - auth: API key 必須の範囲にだけ掛ける
 */
pub mod auth;
pub mod http;
