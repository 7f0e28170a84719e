use serde::Serialize;

/// Body of a LibreTranslate `/translate` call.
#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'a str,
    pub alternatives: u32,
    pub api_key: &'a str,
}
