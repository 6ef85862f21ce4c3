//! Core domain types shared across modules

pub mod error;
pub mod goal;
pub mod model;

pub use error::DomainError;
pub use goal::{Context, Goal};
pub use model::Model;
