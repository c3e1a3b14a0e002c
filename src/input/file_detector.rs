//! Document format detection

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
    Unknown,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            "txt" => DocumentFormat::Text,
            _ => DocumentFormat::Unknown,
        }
    }

    /// Parse a declared-format tag from the upload boundary.
    pub fn from_tag(tag: &str) -> Self {
        Self::from_extension(tag.trim().trim_start_matches('.'))
    }
}
