//! Gemini provider
//!
//! Adapter for Google's generative-language API, implementing the
//! [`GenerationBackend`](escriba_application::GenerationBackend) port.
//! One HTTP call per `generate`; all retry policy lives in the
//! application layer's generation client.

mod backend;
mod types;

pub use backend::{GeminiBackend, GeminiConfig};
