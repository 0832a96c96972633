use serde::{Deserialize, Serialize};

/// A file the user has picked or dropped, held in memory until submission.
///
/// The content type is the *declared* type (what the picker reported), not
/// a sniffed one; validation gates run against it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Declared byte size of the file.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
