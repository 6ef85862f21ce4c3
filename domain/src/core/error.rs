//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("O objetivo (goal) é obrigatório.")]
    EmptyGoal,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_goal_display() {
        let error = DomainError::EmptyGoal;
        assert_eq!(error.to_string(), "O objetivo (goal) é obrigatório.");
    }

    #[test]
    fn test_unknown_category_display() {
        let error = DomainError::UnknownCategory("market_analysis".to_string());
        assert!(error.to_string().contains("market_analysis"));
    }
}
