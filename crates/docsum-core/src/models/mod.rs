//! Data models for the Docsum client
//!
//! Each sub-module covers one domain entity. All state is transient and
//! in-memory; nothing here persists across sessions.

mod chat;
mod file;

// Re-export all models for convenient imports
pub use chat::*;
pub use file::*;
