/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - header の parse は services::api_key の責務
 * - key の照合 (lookup) はここでは行わない
 */

use crate::services::api_key::ApiKey;

const HINT_LEN: usize = 4;

/// API key 付きリクエストに付与されるコンテキスト
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub api_key: ApiKey,
}

impl ApiKeyCtx {
    pub fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// Last 4 characters of the key (fewer if the key is shorter), for log/response correlation.
    pub fn hint(&self) -> String {
        let key = self.api_key.as_str();
        let skip = key.chars().count().saturating_sub(HINT_LEN);
        key.chars().skip(skip).collect()
    }
}
