//! Helpers shared by the docsum CLI.

use std::path::Path;

use anyhow::{Context, Result};
use docsum_core::SelectedFile;

/// Read a local file into a [`SelectedFile`], inferring the declared
/// content type from the extension the way the product's picker does
/// (`.pdf`/`.txt`). Unknown extensions get `application/octet-stream` and
/// are left to the workflow gates to reject.
pub fn selected_file_from_path(path: &Path) -> Result<SelectedFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let content_type = match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    };

    Ok(SelectedFile::new(name, content_type, bytes))
}

/// Truncate a string to max_len bytes, appending "..." if truncated.
/// The cut backs off to a char boundary so multi-byte text never splits.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut cut = max_len.saturating_sub(3);
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &s[..cut])
    }
}

/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
