//! Chat-with-document workflow.
//!
//! Step 1 extracts the full document text once; every later turn pairs the
//! user's question with that same context. The transcript is append-only
//! and scoped to one document session: removing or replacing the document
//! drops it.

use docsum_api_client::ApiClient;
use docsum_core::{validate_for_chat, Message, SelectedFile, Transcript};
use uuid::Uuid;

/// Display state of the chat workflow. Exactly one is active at a time.
///
/// `Error` after a failed turn keeps the session alive: the user's message
/// stays in the transcript and sending remains possible so the question can
/// be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Uploading,
    Ready,
    Sending,
    Error { message: String },
}

impl Default for ChatState {
    fn default() -> Self {
        ChatState::Idle
    }
}

/// What became of a [`ChatWorkflow::send_question`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The assistant's reply was appended.
    Answered,
    /// The request failed; the user message stays, no assistant message.
    Failed,
    /// Precondition not met (blank question or no document): nothing
    /// happened at all.
    Ignored,
}

/// One document's extraction result plus its running transcript. Context
/// and seed message are immutable for the session's lifetime.
#[derive(Debug)]
struct DocumentSession {
    id: Uuid,
    file_name: String,
    context: String,
    transcript: Transcript,
}

#[derive(Debug, Default)]
pub struct ChatWorkflow {
    state: ChatState,
    session: Option<DocumentSession>,
    drag_active: bool,
}

impl ChatWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Handle a drop: the first file is used, extras are ignored.
    pub async fn drop_files(
        &mut self,
        client: &ApiClient,
        mut files: Vec<SelectedFile>,
    ) -> &ChatState {
        self.drag_active = false;
        if files.is_empty() {
            self.state = ChatState::Error {
                message: "No file selected".to_string(),
            };
            return &self.state;
        }
        let first = files.remove(0);
        self.upload_document(client, first).await
    }

    /// Extract the document's text and start a fresh session.
    ///
    /// On failure no session is created and a previous session, if any, is
    /// left untouched; only the error is surfaced.
    pub async fn upload_document(&mut self, client: &ApiClient, file: SelectedFile) -> &ChatState {
        if let Err(err) = validate_for_chat(&file) {
            tracing::debug!(file = %file.name, error = %err, "document rejected before upload");
            self.state = ChatState::Error {
                message: err.client_message().to_string(),
            };
            return &self.state;
        }

        tracing::info!(file = %file.name, size = file.size(), "extracting document text");
        self.state = ChatState::Uploading;

        // State leaves Uploading on both arms below.
        match client.extract_text(&file).await {
            Ok(document) => {
                let session = DocumentSession {
                    id: Uuid::new_v4(),
                    file_name: file.name.clone(),
                    context: document.text,
                    transcript: Transcript::seeded(Message::assistant(format!(
                        "I've read your document \"{}\". You can now ask me questions about it!",
                        file.name
                    ))),
                };
                tracing::info!(session_id = %session.id, file = %session.file_name, "document session ready");
                self.session = Some(session);
                self.state = ChatState::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "text extraction failed");
                self.state = ChatState::Error {
                    message: err.client_message().to_string(),
                };
            }
        }

        &self.state
    }

    /// Submit one question against the session context.
    ///
    /// The user message is appended before the request is issued, so it is
    /// visible while the assistant is responding. On failure it is *not*
    /// rolled back; only the assistant message is withheld.
    pub async fn send_question(&mut self, client: &ApiClient, question: &str) -> SendOutcome {
        let trimmed = question.trim();
        if trimmed.is_empty() {
            return SendOutcome::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return SendOutcome::Ignored;
        };

        session.transcript.push(Message::user(trimmed));
        self.state = ChatState::Sending;

        tracing::debug!(session_id = %session.id, "sending chat turn");
        let result = client.chat(trimmed, &session.context).await;

        // State leaves Sending on both arms below.
        match result {
            Ok(answer) => {
                session.transcript.push(Message::assistant(answer));
                self.state = ChatState::Ready;
                SendOutcome::Answered
            }
            Err(err) => {
                tracing::warn!(session_id = %session.id, error = %err, "chat turn failed");
                self.state = ChatState::Error {
                    message: err.client_message().to_string(),
                };
                SendOutcome::Failed
            }
        }
    }

    /// Remove the document and return to the initial state. The same file
    /// can be re-uploaded immediately afterwards.
    pub fn remove_document(&mut self) {
        self.session = None;
        self.state = ChatState::Idle;
        self.drag_active = false;
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn file_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.file_name.as_str())
    }

    /// The full extracted text, reused verbatim as input to every turn.
    pub fn context(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.context.as_str())
    }

    pub fn transcript(&self) -> &[Message] {
        self.session
            .as_ref()
            .map(|s| s.transcript.messages())
            .unwrap_or(&[])
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, ChatState::Sending)
    }

    /// Whether the presentation layer should enable the send controls.
    /// Sending is allowed from `Ready` and from `Error` (retry); never
    /// while a request is outstanding and never without a document.
    pub fn can_send(&self) -> bool {
        self.session.is_some() && matches!(self.state, ChatState::Ready | ChatState::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ChatState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Submission trigger for the question input: Enter sends, Shift+Enter does
/// not (reserved for multi-line input).
pub fn should_submit_on_key(key: &str, shift_pressed: bool) -> bool {
    key == "Enter" && !shift_pressed
}
