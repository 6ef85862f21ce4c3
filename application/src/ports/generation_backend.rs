//! Generation backend port
//!
//! Defines the interface for a single call to the text-generation
//! backend. The retry/fallback policy lives in
//! [`GenerationClient`](crate::generation::GenerationClient); adapters
//! only classify each outcome into the three-way taxonomy carried by
//! [`BackendError`].

use async_trait::async_trait;
use escriba_domain::Model;
use thiserror::Error;

/// Outcome classification for a single backend call.
///
/// The client's policy is driven entirely by these variants:
/// transient errors are retried on the same model, permanent errors
/// advance to the next model immediately, configuration errors abort
/// the run.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    /// Rate limit, server error, connection failure or timeout.
    #[error("erro temporário: {0}")]
    Transient(String),

    /// Bad request, auth failure, or a malformed/empty success payload.
    #[error("erro permanente: {0}")]
    Permanent(String),

    /// Missing credential or unusable configuration. The only fatal class.
    #[error("erro de configuração: {0}")]
    Configuration(String),
}

impl BackendError {
    /// Whether the same model is worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, BackendError::Transient(_))
    }
}

/// Gateway for one text-generation call.
///
/// Implementations must apply their own per-call timeout so the
/// client's retry loop can never block indefinitely.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Verify the backend is usable at all (credential present).
    fn ensure_configured(&self) -> Result<(), BackendError>;

    /// Perform a single generation call against one model.
    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, BackendError>;
}
