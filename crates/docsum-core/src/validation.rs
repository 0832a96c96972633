//! Client-side file gates
//!
//! Both workflows gate a file before any network submission, but with
//! deliberately different type checks: the summarize workflow uses a strict
//! allow-list, while the chat workflow accepts any declared type containing
//! "pdf" or "text". The two gates reproduce the shipped product behavior
//! and must stay separate; unifying them is a product decision, not a
//! refactor.

use crate::constants::{MAX_FILE_SIZE_BYTES, SUMMARIZE_ALLOWED_CONTENT_TYPES};
use crate::error::WorkflowError;
use crate::models::SelectedFile;

/// Strict gate for the upload-and-summarize workflow.
pub fn validate_for_summarize(file: &SelectedFile) -> Result<(), WorkflowError> {
    if !SUMMARIZE_ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        return Err(WorkflowError::Validation(
            "Invalid file type. Only PDF and TXT files are supported.".to_string(),
        ));
    }
    validate_size(file)
}

/// Loose gate for the chat-with-document workflow: substring match on the
/// declared type. Wider than the summarize gate on purpose.
pub fn validate_for_chat(file: &SelectedFile) -> Result<(), WorkflowError> {
    if !file.content_type.contains("pdf") && !file.content_type.contains("text") {
        return Err(WorkflowError::Validation(
            "Please upload a PDF or TXT file".to_string(),
        ));
    }
    validate_size(file)
}

fn validate_size(file: &SelectedFile) -> Result<(), WorkflowError> {
    if file.size() > MAX_FILE_SIZE_BYTES {
        return Err(WorkflowError::Validation(
            "File size exceeds 10MB limit".to_string(),
        ));
    }
    if file.size() == 0 {
        return Err(WorkflowError::Validation("File is empty".to_string()));
    }
    Ok(())
}
