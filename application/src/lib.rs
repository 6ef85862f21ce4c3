//! Application layer for escriba
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod generation;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use generation::{GenerationClient, GenerationError};
pub use ports::{
    event_sink::{ChannelSink, EventSink, NoSink},
    generation_backend::{BackendError, GenerationBackend},
};
pub use use_cases::outline_agent::{AgentResult, run_outline_agent};
pub use use_cases::run_document::{
    DocumentResult, RunDocumentError, RunDocumentInput, RunDocumentUseCase,
};
