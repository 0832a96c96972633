//! Docsum Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! client-side validation shared by the Docsum workflow and CLI crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ErrorKind, WorkflowError};
pub use models::{Message, Role, SelectedFile, Transcript};
pub use validation::{validate_for_chat, validate_for_summarize};
