//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! The API key itself never lives in a file: only the name of the
//! environment variable that carries it is configurable.

use escriba_domain::Model;
use escriba_application::GenerationParams;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation backend settings
    pub backend: FileBackendConfig,
}

/// Backend section of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Model identifiers in priority order
    pub models: Vec<String>,
    /// Attempts per model before advancing to the next one
    pub max_retries: u32,
    /// Per-call HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Base URL of the generative-language API
    pub base_url: String,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            max_retries: 3,
            timeout_secs: 120,
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
        }
    }
}

impl FileBackendConfig {
    /// Parse the configured model list, defaulting when empty.
    pub fn parse_models(&self) -> Vec<Model> {
        if self.models.is_empty() {
            Model::default_models()
        } else {
            self.models.iter().map(|s| s.parse().unwrap()).collect()
        }
    }

    /// Derive the application-layer generation parameters.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::new(self.parse_models()).with_max_retries(self.max_retries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.backend.models.is_empty());
        assert_eq!(config.backend.max_retries, 3);
        assert_eq!(config.backend.timeout_secs, 120);
        assert_eq!(config.backend.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_empty_model_list_falls_back_to_defaults() {
        let config = FileBackendConfig::default();
        assert_eq!(config.parse_models(), Model::default_models());
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_src = r#"
            [backend]
            models = ["gemini-2.0-flash", "gemini-1.5-pro"]
            max_retries = 5
        "#;
        let config: FileConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.backend.max_retries, 5);
        assert_eq!(config.backend.parse_models().len(), 2);
        // Unspecified fields keep their defaults
        assert_eq!(config.backend.timeout_secs, 120);
    }

    #[test]
    fn test_generation_params_carries_retry_cap() {
        let config = FileBackendConfig {
            max_retries: 1,
            ..Default::default()
        };
        let params = config.generation_params();
        assert_eq!(params.max_retries, 1);
    }
}
