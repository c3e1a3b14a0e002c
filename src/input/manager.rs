//! Input manager: routes documents to extractors and normalizes the result

use crate::config::ExtractionConfig;
use crate::error::{Result, ScreenerError};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    min_text_chars: usize,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig {
            min_text_chars: 20,
            enable_caching: true,
        })
    }

    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_caching,
            min_text_chars: config.min_text_chars,
        }
    }

    /// Read a file and extract normalized text, detecting the format from
    /// the extension.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = self.detect_format(path)?;
        let bytes = tokio::fs::read(path).await?;

        info!("Extracting {:?} text from: {}", format, path.display());
        let text = self.extract_bytes(&bytes, format)?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Pure byte-level entry point for callers that already hold the
    /// document and a declared format tag. Same bytes in, same text or the
    /// same error out.
    pub fn extract_bytes(&self, bytes: &[u8], format: DocumentFormat) -> Result<String> {
        let raw = match format {
            DocumentFormat::Pdf => PdfExtractor.extract(bytes)?,
            DocumentFormat::Docx => DocxExtractor.extract(bytes)?,
            DocumentFormat::Text => PlainTextExtractor.extract(bytes)?,
            DocumentFormat::Unknown => {
                return Err(ScreenerError::UnsupportedFormat(
                    "unknown document format".to_string(),
                ));
            }
        };

        let text = normalize_text(&raw);

        if text.chars().count() < self.min_text_chars {
            return Err(ScreenerError::UnreadableDocument(format!(
                "extracted text is below the readable threshold ({} chars)",
                self.min_text_chars
            )));
        }

        Ok(text)
    }

    fn detect_format(&self, path: &Path) -> Result<DocumentFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ScreenerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(DocumentFormat::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize extracted text: strip control characters (keeping line and tab
/// structure the parser relies on), collapse runs of blank lines and spaces,
/// and trim line edges.
pub fn normalize_text(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect();

    let unified = kept.replace("\r\n", "\n").replace('\r', "\n");

    let newline_re = Regex::new(r"\n{3,}").expect("static regex");
    let space_re = Regex::new(r"[ \t]{2,}").expect("static regex");

    let collapsed = newline_re.replace_all(&unified, "\n\n");
    let collapsed = space_re.replace_all(&collapsed, " ");

    let lines: Vec<&str> = collapsed.lines().map(|line| line.trim()).collect();
    lines.join("\n").trim().to_string()
}
