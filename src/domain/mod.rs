//! # Domain Layer
//!
//! Core models and errors for launching the external application.
//! This layer is independent of external frameworks and infrastructure.

pub mod models;

mod error;

pub use error::DomainError;
pub use models::*;
