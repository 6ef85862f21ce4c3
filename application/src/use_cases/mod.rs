//! Use cases

pub mod outline_agent;
pub mod run_document;
