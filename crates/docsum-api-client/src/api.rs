//! Typed endpoint methods for the Docsum backend.
//!
//! Three endpoints, all JSON-enveloped:
//!
//! | Endpoint            | Request                    | Success                                  |
//! |---------------------|----------------------------|------------------------------------------|
//! | `/summarize/`       | multipart, one `file` part | `{status:"success", summary}`            |
//! | `/extract-text/`    | multipart, one `file` part | `{status:"success", text, filename}`     |
//! | `/chat-document/`   | JSON `{question, context}` | `{status:"success", answer}`             |
//!
//! Failures are `{status:"failed", error}` or `{error}` with a non-2xx
//! status; a server-supplied `error` string is surfaced verbatim, with a
//! per-endpoint fallback when absent.

use docsum_core::constants::{
    CHAT_FALLBACK_ERROR, EXTRACT_FALLBACK_ERROR, SUMMARIZE_FALLBACK_ERROR,
    TRANSPORT_ERROR_MESSAGE,
};
use docsum_core::{SelectedFile, WorkflowError};
use serde::{Deserialize, Serialize};

use crate::{ApiClient, RawResponse};

/// Result of a successful `/extract-text/` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub filename: String,
}

/// Common envelope fields. Individual payload fields (`summary`, `text`,
/// `answer`) are picked out of the body after the envelope check.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
    context: &'a str,
}

/// How strictly a 2xx body's `status` tag is checked. The summarize
/// endpoint only rejects an explicit `"failed"` tag; extract and chat
/// demand an explicit `"success"`, so an untagged 2xx body is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusTag {
    RejectFailed,
    RequireSuccess,
}

impl ApiClient {
    /// Submit one file for summarization. Returns the summary text.
    pub async fn summarize(&self, file: &SelectedFile) -> Result<String, WorkflowError> {
        let response = self.post_multipart("/summarize/", file_form(file)).await?;
        let body = check_envelope(response, SUMMARIZE_FALLBACK_ERROR, StatusTag::RejectFailed)?;
        extract_string_field(&body, "summary")
    }

    /// Submit one file for full text extraction (the chat context).
    pub async fn extract_text(
        &self,
        file: &SelectedFile,
    ) -> Result<ExtractedDocument, WorkflowError> {
        let response = self
            .post_multipart("/extract-text/", file_form(file))
            .await?;
        let body = check_envelope(response, EXTRACT_FALLBACK_ERROR, StatusTag::RequireSuccess)?;

        let text = extract_string_field(&body, "text")?;
        // The server echoes the filename; fall back to the one we sent.
        let filename = body
            .get("filename")
            .and_then(|v| v.as_str())
            .unwrap_or(&file.name)
            .to_string();

        Ok(ExtractedDocument { text, filename })
    }

    /// Ask one question against a previously extracted context.
    pub async fn chat(&self, question: &str, context: &str) -> Result<String, WorkflowError> {
        let request = ChatRequest { question, context };
        let response = self.post_json("/chat-document/", &request).await?;
        let body = check_envelope(response, CHAT_FALLBACK_ERROR, StatusTag::RequireSuccess)?;
        extract_string_field(&body, "answer")
    }
}

/// Build the single-part multipart form. The part is always named `file`;
/// the transport layer computes the multipart boundary itself.
fn file_form(file: &SelectedFile) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone()),
    )
}

/// Reject error envelopes: non-2xx status or `status:"failed"` both map to
/// a server error carrying the backend's message when it sent one. Under
/// [`StatusTag::RequireSuccess`], a 2xx body without `status:"success"` is
/// also a server error.
fn check_envelope(
    response: RawResponse,
    fallback: &str,
    tag: StatusTag,
) -> Result<serde_json::Value, WorkflowError> {
    let envelope: Envelope = serde_json::from_value(response.body.clone())
        .map_err(|_| WorkflowError::Transport(TRANSPORT_ERROR_MESSAGE.to_string()))?;

    let failed = !response.is_success()
        || match tag {
            StatusTag::RejectFailed => envelope.status.as_deref() == Some("failed"),
            StatusTag::RequireSuccess => envelope.status.as_deref() != Some("success"),
        };
    if failed {
        let message = envelope
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(WorkflowError::Server(message));
    }

    Ok(response.body)
}

/// Pull a required string payload field out of a success body. A success
/// envelope missing its payload is a malformed response, not a server error.
fn extract_string_field(
    body: &serde_json::Value,
    field: &'static str,
) -> Result<String, WorkflowError> {
    body.get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| WorkflowError::Transport(TRANSPORT_ERROR_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsum_core::ErrorKind;

    fn test_file() -> SelectedFile {
        SelectedFile::new("doc.pdf", "application/pdf", b"%PDF-1.4 test".to_vec())
    }

    async fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(server.url()).unwrap()
    }

    #[tokio::test]
    async fn summarize_returns_summary_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/summarize/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"success","summary":"S"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let summary = client.summarize(&test_file()).await.unwrap();
        assert_eq!(summary, "S");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn summarize_surfaces_server_error_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/summarize/")
            .with_status(200)
            .with_body(r#"{"status":"failed","error":"E"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.summarize(&test_file()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.client_message(), "E");
    }

    #[tokio::test]
    async fn summarize_non_2xx_without_message_uses_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/summarize/")
            .with_status(500)
            .with_body(r#"{"status":"failed"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.summarize(&test_file()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.client_message(), SUMMARIZE_FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn non_json_body_is_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/summarize/")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.summarize(&test_file()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.client_message(), TRANSPORT_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Port 9 (discard) is not listening in the test environment.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.summarize(&test_file()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn success_envelope_missing_payload_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/summarize/")
            .with_status(200)
            .with_body(r#"{"status":"success"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.summarize(&test_file()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn extract_text_returns_text_and_filename() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/extract-text/")
            .with_status(200)
            .with_body(r#"{"status":"success","text":"T","filename":"doc.pdf"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let doc = client.extract_text(&test_file()).await.unwrap();
        assert_eq!(doc.text, "T");
        assert_eq!(doc.filename, "doc.pdf");
    }

    #[tokio::test]
    async fn extract_text_error_body_without_status_tag() {
        // The extract endpoint's failure shape can be a bare {"error": ...}
        // with a non-2xx status.
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/extract-text/")
            .with_status(422)
            .with_body(r#"{"error":"Could not decode PDF"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.extract_text(&test_file()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.client_message(), "Could not decode PDF");
    }

    #[tokio::test]
    async fn chat_posts_question_and_context_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat-document/")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "question": "Q1",
                "context": "T",
            })))
            .with_status(200)
            .with_body(r#"{"status":"success","answer":"A1"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let answer = client.chat("Q1", "T").await.unwrap();
        assert_eq!(answer, "A1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn chat_failure_uses_chat_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat-document/")
            .with_status(500)
            .with_body(r#"{"status":"failed","error":""}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.chat("Q1", "T").await.unwrap_err();
        assert_eq!(err.client_message(), CHAT_FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn chat_untagged_2xx_body_is_a_server_error() {
        // The chat endpoint must say status:"success" explicitly; an
        // answer without the tag gets the fallback message.
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat-document/")
            .with_status(200)
            .with_body(r#"{"answer":"A"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.chat("Q1", "T").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.client_message(), CHAT_FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn extract_untagged_2xx_body_is_a_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/extract-text/")
            .with_status(200)
            .with_body(r#"{"text":"T","filename":"doc.pdf"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.extract_text(&test_file()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.client_message(), EXTRACT_FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn summarize_accepts_untagged_2xx_body() {
        // Unlike chat and extract, summarize only rejects an explicit
        // "failed" tag.
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/summarize/")
            .with_status(200)
            .with_body(r#"{"summary":"S"}"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let summary = client.summarize(&test_file()).await.unwrap();
        assert_eq!(summary, "S");
    }

    #[tokio::test]
    async fn health_check_true_on_2xx_false_otherwise() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/summarize/")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server).await;
        assert!(client.check_health().await);
        mock.assert_async().await;

        let unreachable = ApiClient::new("http://127.0.0.1:9").unwrap();
        assert!(!unreachable.check_health().await);
    }
}
