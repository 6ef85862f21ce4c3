//! Generation client
//!
//! Wraps the [`GenerationBackend`] port with the multi-stage retry and
//! model-fallback policy: walk the configured model list in order,
//! retry transient failures on the same model with exponential backoff
//! and jitter, skip to the next model on permanent failures, and only
//! surface [`GenerationError::Unavailable`] once every model is
//! exhausted. Configuration errors abort immediately.

use crate::config::GenerationParams;
use crate::ports::generation_backend::{BackendError, GenerationBackend};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by the client after the full policy ran its course.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    /// Every configured model exhausted its retries.
    #[error("Todos os modelos falharam. Último erro: {last_error}")]
    Unavailable { last_error: String },

    /// Backend credential/configuration missing. Fatal.
    #[error("erro de configuração: {0}")]
    Configuration(String),
}

/// Retrying client over a [`GenerationBackend`].
#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn GenerationBackend>,
    params: GenerationParams,
}

impl GenerationClient {
    pub fn new(backend: Arc<dyn GenerationBackend>, params: GenerationParams) -> Self {
        Self { backend, params }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generate text for a prompt, applying the full retry policy.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut last_error = String::from("nenhuma tentativa realizada");

        for model in &self.params.models {
            'attempts: for attempt in 0..self.params.max_retries {
                if attempt > 0 {
                    let wait = backoff_delay(attempt);
                    debug!(
                        "tentativa {}/{} para {} após {:.1}s",
                        attempt + 1,
                        self.params.max_retries,
                        model,
                        wait.as_secs_f64()
                    );
                    tokio::time::sleep(wait).await;
                } else {
                    debug!("tentando modelo: {}", model);
                }

                match self.backend.generate(model, prompt).await {
                    Ok(text) if !text.trim().is_empty() => {
                        debug!("modelo {} respondeu com sucesso", model);
                        return Ok(text);
                    }
                    Ok(_) => {
                        // Empty success payload counts as permanent for
                        // this model: the request was well-formed, the
                        // model just has nothing usable.
                        warn!("modelo {} retornou resposta vazia", model);
                        last_error = format!("Modelo {}: resposta vazia", model);
                        break 'attempts;
                    }
                    Err(BackendError::Transient(message)) => {
                        warn!(
                            "erro temporário em {} (tentativa {}/{}): {}",
                            model,
                            attempt + 1,
                            self.params.max_retries,
                            message
                        );
                        last_error = format!("Modelo {}: {}", model, message);
                    }
                    Err(BackendError::Permanent(message)) => {
                        warn!("erro permanente em {}: {}", model, message);
                        last_error = format!("Modelo {}: {}", model, message);
                        break 'attempts;
                    }
                    Err(BackendError::Configuration(message)) => {
                        return Err(GenerationError::Configuration(message));
                    }
                }
            }
        }

        warn!(
            "todos os modelos falharam após {} tentativas cada",
            self.params.max_retries
        );
        Err(GenerationError::Unavailable { last_error })
    }
}

/// Exponential backoff with uniform jitter: 2^attempt + U(0, 1) seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let base = 2u64.saturating_pow(attempt) as f64;
    let jitter: f64 = rand::thread_rng().gen_range(0.0..1.0);
    Duration::from_secs_f64(base + jitter)
}
