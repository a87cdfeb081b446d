use crate::translation::{TranslationResult, Translator};
use crate::utils::{AppConfig, Result, TranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct TranslationClientConfig {
    pub endpoint: String,
    pub api_key: String,
    pub application_name: String,
    pub timeout_seconds: u64,
    /// `None` lets the service detect the source language.
    pub source_lang: Option<String>,
}

impl TranslationClientConfig {
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            endpoint: config.api.endpoint.clone(),
            api_key: config.resolve_api_key()?,
            application_name: config.api.application_name.clone(),
            timeout_seconds: config.api.timeout_seconds,
            source_lang: config.translation.source_lang.clone(),
        })
    }
}

impl std::fmt::Debug for TranslationClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .field("application_name", &self.application_name)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("source_lang", &self.source_lang)
            .finish()
    }
}

/// Client for the Google Cloud Translation v2 REST API.
pub struct GoogleTranslateClient {
    client: Client,
    config: TranslationClientConfig,
}

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a [String],
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponseBody {
    data: TranslationsData,
}

#[derive(Debug, Deserialize)]
struct TranslationsData {
    #[serde(default)]
    translations: Vec<TranslationsResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationsResource {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<u16>,
    message: String,
}

impl GoogleTranslateClient {
    pub fn new(config: TranslationClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(TranslatorError::ConfigError(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.application_name.clone())
            .build()?;

        Ok(Self { client, config })
    }

    async fn call_api(&self, texts: &[String], target_language: &str) -> Result<String> {
        let body = TranslateRequestBody {
            q: texts,
            target: target_language,
            format: "text",
            source: self.config.source_lang.as_deref(),
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Translation API returned an error");
            return Err(parse_error_response(status.as_u16(), &text));
        }

        Ok(text)
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<TranslationResult>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = texts.len(), target = target_language, "Calling translation API");
        let body = self.call_api(texts, target_language).await?;
        parse_translations(texts, &body)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

/// Pairs each returned segment with the text it came from. With a single
/// submitted text every segment belongs to it; otherwise segments follow
/// submission order.
fn parse_translations(texts: &[String], body: &str) -> Result<Vec<TranslationResult>> {
    let parsed: TranslateResponseBody = serde_json::from_str(body)?;

    let results = parsed
        .data
        .translations
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let source = texts
                .get(i)
                .filter(|_| texts.len() > 1)
                .or_else(|| texts.last())
                .cloned()
                .unwrap_or_default();
            TranslationResult {
                source_text: source,
                translated_text: t.translated_text,
                detected_source_language: t.detected_source_language,
            }
        })
        .collect();

    Ok(results)
}

fn parse_error_response(status: u16, body: &str) -> TranslatorError {
    match serde_json::from_str::<ErrorResponseBody>(body) {
        Ok(parsed) => {
            TranslatorError::service(parsed.error.code.unwrap_or(status), parsed.error.message)
        }
        Err(_) if body.trim().is_empty() => TranslatorError::service(status, "empty response body"),
        Err(_) => TranslatorError::service(status, body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> TranslationClientConfig {
        TranslationClientConfig {
            endpoint: "http://127.0.0.1:9/translate".to_string(),
            api_key: api_key.to_string(),
            application_name: "Translate API Sample".to_string(),
            timeout_seconds: 5,
            source_lang: None,
        }
    }

    #[test]
    fn new_rejects_empty_key() {
        let err = GoogleTranslateClient::new(config("   ")).err().unwrap();
        assert!(matches!(err, TranslatorError::ConfigError(_)));
    }

    #[test]
    fn debug_output_hides_key() {
        let rendered = format!("{:?}", config("secret-key"));
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn request_body_omits_source_when_auto_detecting() {
        let texts = vec!["Settings".to_string()];
        let body = TranslateRequestBody {
            q: &texts,
            target: "pt",
            format: "text",
            source: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"q": ["Settings"], "target": "pt", "format": "text"})
        );
    }

    #[test]
    fn parses_single_text_response() {
        let texts = vec!["Settings".to_string()];
        let body = r#"{"data":{"translations":[
            {"translatedText":"Configurações","detectedSourceLanguage":"en"}
        ]}}"#;

        let results = parse_translations(&texts, body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source_text, "Settings");
        assert_eq!(results[0].translated_text, "Configurações");
        assert_eq!(results[0].detected_source_language.as_deref(), Some("en"));
    }

    #[test]
    fn extra_segments_for_single_text_keep_the_same_source() {
        let texts = vec!["Start".to_string()];
        let body = r#"{"data":{"translations":[
            {"translatedText":"Início"},{"translatedText":"Começar"}
        ]}}"#;

        let results = parse_translations(&texts, body).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.source_text == "Start"));
        assert_eq!(results[1].translated_text, "Começar");
    }

    #[test]
    fn multi_text_response_follows_submission_order() {
        let texts = vec!["Hello world!".to_string(), "Who ate my candy?".to_string()];
        let body = r#"{"data":{"translations":[
            {"translatedText":"Bonjour le monde!"},{"translatedText":"Qui a mangé mes bonbons?"}
        ]}}"#;

        let results = parse_translations(&texts, body).unwrap();
        assert_eq!(results[0].source_text, "Hello world!");
        assert_eq!(results[1].source_text, "Who ate my candy?");
    }

    #[test]
    fn malformed_success_body_is_json_error() {
        let texts = vec!["OK".to_string()];
        let err = parse_translations(&texts, "<html>").unwrap_err();
        assert!(matches!(err, TranslatorError::JsonError(_)));
    }

    #[test]
    fn error_body_message_is_surfaced() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","errors":[]}}"#;
        match parse_error_response(400, body) {
            TranslatorError::ServiceError { status, message } => {
                assert_eq!(status, 400);
                assert!(message.starts_with("API key not valid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unstructured_error_body_is_kept_verbatim() {
        match parse_error_response(503, "Service Unavailable\n") {
            TranslatorError::ServiceError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
