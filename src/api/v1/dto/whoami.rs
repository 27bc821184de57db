use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub authenticated: bool,
    pub key_hint: String,
}
