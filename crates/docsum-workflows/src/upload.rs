//! Upload-and-summarize workflow.
//!
//! One file in, one summary (or one error) out. The workflow is an explicit
//! state machine so contradictory flag combinations (loading + error,
//! result + error) cannot be represented.

use docsum_api_client::ApiClient;
use docsum_core::{validate_for_summarize, SelectedFile, WorkflowError};

/// Display state of the upload workflow. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Submitting,
    Success { summary: String },
    Error { message: String },
}

impl Default for UploadState {
    fn default() -> Self {
        UploadState::Idle
    }
}

#[derive(Debug, Default)]
pub struct UploadWorkflow {
    state: UploadState,
    selected: Option<SelectedFile>,
    drag_active: bool,
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// A drag is hovering over the drop target. The presentation layer
    /// suppresses the platform default handling; this flag is the
    /// workflow-visible effect.
    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Handle a drop: the first file is the selection, extras are ignored.
    pub async fn drop_files(
        &mut self,
        client: &ApiClient,
        mut files: Vec<SelectedFile>,
    ) -> &UploadState {
        self.drag_active = false;
        if files.is_empty() {
            self.selected = None;
            self.state = UploadState::Error {
                message: "No file selected".to_string(),
            };
            return &self.state;
        }
        let first = files.remove(0);
        self.submit_file(client, first).await
    }

    /// Validate and submit one file. On acceptance this clears any prior
    /// result or error, enters `Submitting`, and issues exactly one request.
    /// A validation failure never reaches the network.
    pub async fn submit_file(&mut self, client: &ApiClient, file: SelectedFile) -> &UploadState {
        if let Err(err) = validate_for_summarize(&file) {
            tracing::debug!(file = %file.name, error = %err, "file rejected before submission");
            self.selected = None;
            self.state = UploadState::Error {
                message: err.client_message().to_string(),
            };
            return &self.state;
        }

        tracing::info!(file = %file.name, size = file.size(), "submitting file for summarization");
        self.selected = Some(file);
        self.state = UploadState::Submitting;

        let result = match self.selected.as_ref() {
            Some(file) => client.summarize(file).await,
            None => Err(WorkflowError::Validation("No file selected".to_string())),
        };

        // State leaves Submitting on both arms: the UI can never stick in a
        // perpetual loading state.
        match result {
            Ok(summary) => {
                // The file is retained only so its name can be shown next
                // to the result.
                self.state = UploadState::Success { summary };
            }
            Err(err) => {
                tracing::warn!(error = %err, "summarization failed");
                // Failure discards the selection; the user must re-pick
                // before retrying.
                self.selected = None;
                self.state = UploadState::Error {
                    message: err.client_message().to_string(),
                };
            }
        }

        &self.state
    }

    /// Return to the initial idle state so the same filename can be
    /// re-picked immediately.
    pub fn reset(&mut self) {
        self.state = UploadState::Idle;
        self.selected = None;
        self.drag_active = false;
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UploadState::Submitting)
    }

    /// Whether the presentation layer should enable the submit controls.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|f| f.name.as_str())
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.state {
            UploadState::Success { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UploadState::Error { message } => Some(message),
            _ => None,
        }
    }
}
