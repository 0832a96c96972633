//! Shared constants for the Docsum client.

/// Default production API base URL (includes the `/api` prefix).
pub const DEFAULT_API_BASE_URL: &str = "https://ai-summarizer-pro-omy1.onrender.com/api";

/// Maximum accepted upload size: 10 MiB.
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Content types the summarize workflow accepts (strict allow-list).
pub const SUMMARIZE_ALLOWED_CONTENT_TYPES: [&str; 2] = ["application/pdf", "text/plain"];

/// Fallback error messages when the server supplies none.
pub const SUMMARIZE_FALLBACK_ERROR: &str = "Failed to summarize document";
pub const EXTRACT_FALLBACK_ERROR: &str = "Failed to process document";
pub const CHAT_FALLBACK_ERROR: &str = "Failed to get response";

/// Transport-level failure message shown for any network or decode error.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Network error. Please check if the backend server is running.";
