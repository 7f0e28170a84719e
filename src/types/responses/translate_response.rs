use serde::Deserialize;

/// Only `translatedText` decides success; other fields of the reply
/// (`alternatives`, `detectedLanguage`, ...) are ignored whatever their shape.
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
