//! Outline agent
//!
//! One outline-generation pass for one category. Never fails to the
//! caller: when the backend is unavailable the deterministic fallback
//! outline stands in, so the orchestrator always receives usable text.

use crate::generation::GenerationClient;
use escriba_domain::{Category, fallback_outline, templates_for};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of one outline pass.
#[derive(Debug, Clone, Serialize)]
pub struct AgentResult {
    /// Category whose template drove this pass.
    pub category: Category,
    /// The produced outline, generated or fallback. Never empty.
    pub outline: String,
    /// True when the fallback skeleton was substituted.
    pub from_fallback: bool,
}

/// Run the outline pass for a category.
pub async fn run_outline_agent(
    client: &GenerationClient,
    category: Category,
    goal: &str,
    context: &str,
) -> AgentResult {
    let pair = templates_for(category);
    let prompt = pair.render_outline(goal, context);
    debug!(
        "prompt de estrutura gerado para {} ({} caracteres)",
        category,
        prompt.len()
    );

    match client.generate(&prompt).await {
        Ok(outline) => AgentResult {
            category,
            outline,
            from_fallback: false,
        },
        Err(error) => {
            warn!(
                "API indisponível para {}, usando estrutura de fallback: {}",
                category, error
            );
            AgentResult {
                category,
                outline: fallback_outline(goal, category),
                from_fallback: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationParams;
    use crate::ports::generation_backend::{BackendError, GenerationBackend};
    use async_trait::async_trait;
    use escriba_domain::Model;
    use std::sync::Arc;

    struct FixedBackend(Result<String, BackendError>);

    #[async_trait]
    impl GenerationBackend for FixedBackend {
        fn ensure_configured(&self) -> Result<(), BackendError> {
            Ok(())
        }

        async fn generate(&self, _model: &Model, _prompt: &str) -> Result<String, BackendError> {
            self.0.clone()
        }
    }

    fn client_with(outcome: Result<String, BackendError>) -> GenerationClient {
        GenerationClient::new(
            Arc::new(FixedBackend(outcome)),
            GenerationParams::default().with_max_retries(1),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_generation_is_passed_through() {
        let client = client_with(Ok("1. Introdução\n2. Conclusão".to_string()));
        let result =
            run_outline_agent(&client, Category::General, "meta", "sem contexto").await;
        assert!(!result.from_fallback);
        assert_eq!(result.outline, "1. Introdução\n2. Conclusão");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unavailable_backend_substitutes_fallback() {
        let client = client_with(Err(BackendError::Transient("503".to_string())));
        let result = run_outline_agent(
            &client,
            Category::StrategicPlanning,
            "crescer 20%",
            "",
        )
        .await;
        assert!(result.from_fallback);
        assert!(result.outline.contains("ANÁLISE DE PLANEJAMENTO ESTRATÉGICO"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_agent_never_returns_empty_outline() {
        let client = client_with(Err(BackendError::Permanent("401".to_string())));
        for category in Category::all() {
            let result = run_outline_agent(&client, *category, "qualquer meta", "").await;
            assert!(!result.outline.trim().is_empty(), "{} vazio", category);
        }
    }
}
