/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - API key の lookup/storage は持たない (抽出と形式チェックのみ)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
