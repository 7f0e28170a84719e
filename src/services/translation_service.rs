use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{
    config::settings::TranslatorSettings,
    types::{
        requests::translate_request::TranslateRequest,
        responses::translate_response::TranslateResponse,
    },
};

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request to translation service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("translation service answered {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("translation service response has no translatedText")]
    MissingTranslation,
}

/// Turns a single piece of source text into the target language.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;
}

/// Client for a LibreTranslate-compatible `/translate` endpoint.
pub struct LibreTranslateClient {
    client: Client,
    settings: TranslatorSettings,
}

impl LibreTranslateClient {
    pub fn new(settings: TranslatorSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let payload = TranslateRequest {
            q: text,
            source,
            target,
            format: &self.settings.format,
            alternatives: self.settings.alternatives,
            api_key: &self.settings.api_key,
        };

        let res = self
            .client
            .post(&self.settings.endpoint)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<TranslateResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(TranslateError::Status { status, message });
        }

        let body: TranslateResponse = res.json().await?;
        body.translated_text.ok_or(TranslateError::MissingTranslation)
    }
}
