//! Goal and Context value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user goal to be turned into a document (Value Object)
///
/// Represents the free-text objective that drives classification,
/// prompt selection and both generation passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    content: String,
}

impl Goal {
    /// Create a new goal
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Goal cannot be empty");
        Self { content }
    }

    /// Try to create a new goal, rejecting empty input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyGoal)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the goal content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Goal {
    fn from(s: &str) -> Self {
        Goal::new(s)
    }
}

impl From<String> for Goal {
    fn from(s: String) -> Self {
        Goal::new(s)
    }
}

/// Sentinel text used when the caller provided no context at all.
pub const NO_CONTEXT: &str = "Nenhum contexto fornecido.";

/// Supporting context for a goal (Value Object)
///
/// May be plain text, a rendered JSON blob, or absent. Absent context
/// renders to a fixed sentinel so downstream prompts never interpolate
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    content: String,
}

impl Context {
    /// Plain-text context
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        if content.trim().is_empty() {
            Self::default()
        } else {
            Self { content }
        }
    }

    /// Context built from a JSON string.
    ///
    /// Valid JSON is pretty-printed under a label; invalid JSON is kept
    /// verbatim, labeled as invalid, so the model still sees the data.
    pub fn from_json_str(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => {
                let rendered = serde_json::to_string_pretty(&value)
                    .unwrap_or_else(|_| raw.to_string());
                Self {
                    content: format!("Dados JSON fornecidos:\n{}", rendered),
                }
            }
            Err(_) => Self {
                content: format!("Arquivo JSON inválido. Conteúdo bruto:\n{}", raw),
            },
        }
    }

    /// Get the context content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether this is the "no context provided" sentinel
    pub fn is_sentinel(&self) -> bool {
        self.content == NO_CONTEXT
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            content: NO_CONTEXT.to_string(),
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Context {
    fn from(s: &str) -> Self {
        Context::text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_creation() {
        let goal = Goal::new("Planejamento estratégico para 2026");
        assert_eq!(goal.content(), "Planejamento estratégico para 2026");
    }

    #[test]
    #[should_panic]
    fn test_empty_goal_panics() {
        Goal::new("   ");
    }

    #[test]
    fn test_try_new_rejects_empty() {
        assert!(Goal::try_new("").is_err());
        assert!(Goal::try_new("Análise de vendas").is_ok());
    }

    #[test]
    fn test_default_context_is_sentinel() {
        let ctx = Context::default();
        assert_eq!(ctx.content(), NO_CONTEXT);
        assert!(ctx.is_sentinel());
    }

    #[test]
    fn test_blank_text_context_falls_back_to_sentinel() {
        let ctx = Context::text("   ");
        assert!(ctx.is_sentinel());
    }

    #[test]
    fn test_json_context_is_pretty_printed() {
        let ctx = Context::from_json_str(r#"{"vendas": 100}"#);
        assert!(ctx.content().starts_with("Dados JSON fornecidos:"));
        assert!(ctx.content().contains("\"vendas\": 100"));
    }

    #[test]
    fn test_invalid_json_context_keeps_raw_text() {
        let ctx = Context::from_json_str("{not json");
        assert!(ctx.content().starts_with("Arquivo JSON inválido."));
        assert!(ctx.content().contains("{not json"));
    }
}
