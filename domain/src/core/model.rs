//! Model value object representing a generative backend model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend model identifier (Value Object)
///
/// The configured model list is ordered by priority; the generation
/// client walks it front to back when a model exhausts its retries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// gemini-2.0-flash, the only identifier verified as stable
    Gemini20Flash,
    /// gemini-1.5-pro
    Gemini15Pro,
    /// gemini-1.5-flash
    Gemini15Flash,
    /// Any other identifier, passed through verbatim
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Custom(s) => s,
        }
    }

    /// The default priority-ordered model list
    pub fn default_models() -> Vec<Model> {
        vec![Model::Gemini20Flash]
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Gemini20Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_known_model() {
        let model: Model = "gemini-2.0-flash".parse().unwrap();
        assert_eq!(model, Model::Gemini20Flash);
        assert_eq!(model.as_str(), "gemini-2.0-flash");
    }

    #[test]
    fn test_unknown_model_becomes_custom() {
        let model: Model = "gemini-9.9-experimental".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-9.9-experimental".to_string()));
        assert_eq!(model.as_str(), "gemini-9.9-experimental");
    }

    #[test]
    fn test_default_models_is_singleton() {
        assert_eq!(Model::default_models(), vec![Model::Gemini20Flash]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Model::Gemini20Flash).unwrap();
        assert_eq!(json, "\"gemini-2.0-flash\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::Gemini20Flash);
    }
}
