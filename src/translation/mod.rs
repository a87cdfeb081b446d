pub mod batch;
pub mod client;

pub use batch::{BatchExporter, ExportReport, ItemFailure};
pub use client::{GoogleTranslateClient, TranslationClientConfig};

use crate::utils::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One text to translate into one target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
        }
    }
}

/// One segment returned by the translation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub source_text: String,
    pub translated_text: String,
    pub detected_source_language: Option<String>,
}

impl TranslationResult {
    pub fn new(source_text: impl Into<String>, translated_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            detected_source_language: None,
        }
    }
}

/// A remote machine-translation capability.
///
/// A single call may return more than one segment per submitted text; callers
/// must keep every segment, in the order returned.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<TranslationResult>>;

    async fn translate_request(
        &self,
        request: &TranslationRequest,
    ) -> Result<Vec<TranslationResult>> {
        self.translate(std::slice::from_ref(&request.text), &request.target_language)
            .await
    }

    fn provider_name(&self) -> &str;
}
