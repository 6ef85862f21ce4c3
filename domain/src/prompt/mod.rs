//! Prompt templates and rendering

pub mod registry;
pub mod template;

pub use registry::{PromptPair, templates_for};
pub use template::{abnt_rules, render};
