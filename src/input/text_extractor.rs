//! Text extraction from the supported document formats
//!
//! Extractors are pure transforms over input bytes; all file reading happens
//! in the input manager.

use crate::error::{Result, ScreenerError};
use regex::Regex;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ScreenerError::UnreadableDocument(format!("failed to extract text from PDF: {}", e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // UTF-8 first; fall back to Latin-1, which cannot fail.
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(_) => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

/// DOCX is a zip container; the document body lives in `word/document.xml`.
/// Paragraph, break, and tab markup become whitespace, every other tag is
/// stripped.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ScreenerError::UnreadableDocument(format!("not a DOCX container: {}", e))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                ScreenerError::UnreadableDocument(format!("DOCX has no document body: {}", e))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                ScreenerError::UnreadableDocument(format!("DOCX body is not valid XML text: {}", e))
            })?;

        Ok(self.xml_to_text(&xml))
    }
}

impl DocxExtractor {
    fn xml_to_text(&self, xml: &str) -> String {
        let text = xml
            .replace("</w:p>", "\n")
            .replace("<w:br/>", "\n")
            .replace("<w:br />", "\n")
            .replace("<w:tab/>", "\t")
            .replace("<w:tab />", "\t");

        let tag_re = Regex::new(r"<[^>]*>").expect("static regex");
        let stripped = tag_re.replace_all(&text, "");

        let unescaped = stripped
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'");

        let lines: Vec<String> = unescaped
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}
