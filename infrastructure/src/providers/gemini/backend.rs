//! Gemini generation backend

use super::types::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};
use crate::config::FileBackendConfig;
use async_trait::async_trait;
use escriba_application::{BackendError, GenerationBackend};
use escriba_domain::Model;
use std::time::Duration;
use tracing::debug;

/// Gemini backend configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, taken from the environment. `None` means unconfigured.
    pub api_key: Option<String>,
    /// Base endpoint URL.
    pub base_url: String,
    /// Per-call HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Build from the file configuration, resolving the API key from
    /// the configured environment variable.
    pub fn from_file_config(file: &FileBackendConfig) -> Self {
        let api_key = std::env::var(&file.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self {
            api_key,
            base_url: file.base_url.clone(),
            timeout_secs: file.timeout_secs,
        }
    }
}

/// Generation backend over the Gemini `generateContent` endpoint.
pub struct GeminiBackend {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn build_url(&self, model: &Model) -> String {
        format!("{}/{}:generateContent", self.config.base_url, model)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    fn ensure_configured(&self) -> Result<(), BackendError> {
        match &self.config.api_key {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(BackendError::Configuration(
                "Chave da API Gemini não encontrada. Configure a variável de ambiente GEMINI_API_KEY.".to_string(),
            )),
        }
    }

    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, BackendError> {
        self.ensure_configured()?;
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Default::default(),
        };

        let response = self
            .client
            .post(self.build_url(model))
            .header("X-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status().as_u16();
        debug!("gemini {} respondeu HTTP {}", model, status);

        if status == 200 {
            let parsed: GeminiResponse = response
                .json()
                .await
                .map_err(|e| BackendError::Permanent(format!("resposta malformada: {}", e)))?;

            if let Some(error) = parsed.error {
                return Err(BackendError::Permanent(error.message));
            }

            return parsed
                .first_text()
                .filter(|text| !text.is_empty())
                .ok_or_else(|| BackendError::Permanent("resposta sem candidates".to_string()));
        }

        let message = error_message(response).await;
        Err(classify_status(status, message))
    }
}

/// Map a non-200 HTTP status into the retry taxonomy.
///
/// 429 and the 5xx gateway statuses are worth retrying on the same
/// model; 400/401/403 and anything unexpected abandon the model.
fn classify_status(status: u16, message: String) -> BackendError {
    match status {
        429 | 500 | 502 | 503 | 504 => {
            BackendError::Transient(format!("HTTP {} - {}", status, message))
        }
        400 | 401 | 403 => BackendError::Permanent(format!("HTTP {} - {}", status, message)),
        other => BackendError::Permanent(format!("HTTP inesperado {} - {}", other, message)),
    }
}

/// Connection failures and timeouts are transient; anything else about
/// the request itself is not going to improve with a retry.
fn classify_request_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() || error.is_connect() {
        BackendError::Transient(error.to_string())
    } else {
        BackendError::Permanent(error.to_string())
    }
}

/// Pull the API's error message out of a failed response body.
async fn error_message(response: reqwest::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<ErrorDetail>,
    }
    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            error: Some(detail),
        }) => detail.message,
        _ => "sem detalhes".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> GeminiBackend {
        GeminiBackend::new(GeminiConfig {
            api_key: Some("test-key".to_string()),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            timeout_secs: 120,
        })
        .unwrap()
    }

    #[test]
    fn test_build_url() {
        let backend = configured();
        let url = backend.build_url(&Model::Gemini20Flash);
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let backend = GeminiBackend::new(GeminiConfig {
            api_key: None,
            base_url: "http://localhost".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        let error = backend.ensure_configured().unwrap_err();
        assert!(matches!(error, BackendError::Configuration(_)));
        assert!(error.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_key_is_configuration_error() {
        let backend = GeminiBackend::new(GeminiConfig {
            api_key: Some("   ".to_string()),
            base_url: "http://localhost".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        assert!(backend.ensure_configured().is_err());
    }

    #[test]
    fn test_retryable_statuses_are_transient() {
        for status in [429u16, 500, 502, 503, 504] {
            assert!(
                classify_status(status, "x".to_string()).is_transient(),
                "HTTP {} deveria ser temporário",
                status
            );
        }
    }

    #[test]
    fn test_client_and_auth_errors_are_permanent() {
        for status in [400u16, 401, 403] {
            assert!(!classify_status(status, "x".to_string()).is_transient());
        }
    }

    #[test]
    fn test_unexpected_status_is_permanent() {
        let error = classify_status(418, "bule".to_string());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("418"));
    }

    #[tokio::test]
    #[ignore = "requires live GEMINI_API_KEY and network"]
    async fn test_live_generation_when_env_set() {
        let api_key = match std::env::var("GEMINI_API_KEY") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => {
                eprintln!("skipped: GEMINI_API_KEY is not set");
                return;
            }
        };

        let backend = GeminiBackend::new(GeminiConfig {
            api_key: Some(api_key),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            timeout_secs: 120,
        })
        .unwrap();

        let text = backend
            .generate(&Model::Gemini20Flash, "Responda exatamente: OK")
            .await
            .expect("live generation should succeed");
        assert!(!text.trim().is_empty());
    }
}
