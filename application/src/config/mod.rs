//! Application configuration

use escriba_domain::Model;

/// Parameters driving the generation client's retry policy.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Backend models in priority order.
    pub models: Vec<Model>,
    /// Attempts per model before advancing to the next one.
    pub max_retries: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            models: Model::default_models(),
            max_retries: 3,
        }
    }
}

impl GenerationParams {
    pub fn new(models: Vec<Model>) -> Self {
        Self {
            models,
            ..Default::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
