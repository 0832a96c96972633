//! Stateful client workflows for the Docsum product.
//!
//! Two independent workflows share the same backend but no state:
//!
//! - [`upload::UploadWorkflow`] — pick one file, submit it for
//!   summarization, display the summary or an error.
//! - [`chat::ChatWorkflow`] — pick one file, extract its text once, then
//!   run an append-only Q&A transcript against that context.
//!
//! Each workflow is an explicit state machine; the presentation layer reads
//! its state and renders it, and disables triggering controls while a
//! request is in flight (`can_submit` / `can_send`). That mutual exclusion
//! is cooperative: nothing here queues, dedupes, or cancels requests.

pub mod chat;
pub mod upload;

pub use chat::{ChatState, ChatWorkflow, SendOutcome};
pub use upload::{UploadState, UploadWorkflow};
