//! Backend provider adapters

pub mod gemini;
