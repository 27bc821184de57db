/*
 * Responsibility
 * - handler 向け extractor の re-export
 */
pub mod api_key;

pub use api_key::{ApiKeyCtx, ApiKeyCtxExtractor};
