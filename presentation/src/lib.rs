//! Presentation layer for escriba
//!
//! CLI argument parsing, context ingestion and console rendering of
//! the orchestration event stream.

pub mod cli;
pub mod input;
pub mod output;

pub use cli::Cli;
pub use input::load_context;
pub use output::console::ConsoleReporter;
