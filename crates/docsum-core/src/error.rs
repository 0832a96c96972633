//! Error types module
//!
//! All failures a workflow can surface are unified under [`WorkflowError`].
//! The three kinds map to distinct user-visible behavior: validation errors
//! are raised before any network I/O, server errors carry the backend's own
//! message, and transport errors cover everything between the client and a
//! well-formed JSON response.

/// Machine-readable classification of a [`WorkflowError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File missing, wrong type, empty, or oversized. Never sent anywhere.
    Validation,
    /// Non-2xx status or a `status:"failed"` envelope from the backend.
    Server,
    /// Network failure or a body that did not decode as the expected shape.
    Transport,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl WorkflowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkflowError::Validation(_) => ErrorKind::Validation,
            WorkflowError::Server(_) => ErrorKind::Server,
            WorkflowError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Message suitable for direct display. Unlike `Display`, this carries
    /// no kind prefix; it is exactly what the workflow's error slot holds.
    pub fn client_message(&self) -> &str {
        match self {
            WorkflowError::Validation(msg)
            | WorkflowError::Server(msg)
            | WorkflowError::Transport(msg) => msg,
        }
    }

    /// Whether retrying the same request could succeed without user action.
    /// Validation errors require a different file; the rest may be transient.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, WorkflowError::Validation(_))
    }
}
