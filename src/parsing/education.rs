//! Education extraction: degree keywords, institutions, and years
//!
//! Works over the education section only; each degree-keyword hit is
//! resolved against a context window around it for institution and year.

use crate::parsing::sections;
use crate::types::{EducationEntry, EducationLevel};
use regex::Regex;

const SECTION_KEYWORDS: &[&str] = &["education", "academic", "qualification"];

/// Context window around a degree mention, in bytes.
const CONTEXT_WINDOW: usize = 200;

pub struct EducationParser {
    degree_res: Vec<Regex>,
    university_res: Vec<Regex>,
    year_re: Regex,
}

impl EducationParser {
    pub fn new() -> Self {
        // Dotted abbreviations keep their internal dot mandatory; "AS" or
        // "MA" as bare words are prose, not degrees.
        let degree_res = vec![
            Regex::new(r"(?i)\b(Ph\.?D\.?|Doctor of Philosophy|Doctorate)\b").expect("static regex"),
            Regex::new(r"(?i)\b(Master(?:'s|s)?(?:\s+of\s+\w+)?|M\.?Sc\.?|M\.S\.?|M\.A\.?|MBA|M\.?Tech|M\.?Eng)\b")
                .expect("static regex"),
            Regex::new(r"(?i)\b(Bachelor(?:'s|s)?(?:\s+of\s+\w+)?|B\.?Sc\.?|B\.S\.?|B\.A\.?|B\.?Tech|B\.?Eng)\b")
                .expect("static regex"),
            Regex::new(r"(?i)\b(Associate(?:'s|s)?\s+(?:Degree|of\s+\w+)|A\.S\.?|A\.A\.?)\b")
                .expect("static regex"),
            Regex::new(r"(?i)\b(High School Diploma|Diploma)\b").expect("static regex"),
        ];

        // Case-sensitive and single-line on purpose: institution names are
        // capitalized, and crossing a line break pulls in degree text.
        let university_res = vec![
            Regex::new(r"(University[ \t]of[ \t][A-Z][A-Za-z]+(?:[ \t][A-Z][A-Za-z]+)?)")
                .expect("static regex"),
            Regex::new(r"([A-Z][A-Za-z]+(?:[ \t][A-Z][A-Za-z]+)?[ \t]University)")
                .expect("static regex"),
            Regex::new(r"(Institute[ \t]of[ \t][A-Z][A-Za-z]+(?:[ \t][A-Z][A-Za-z]+)?)")
                .expect("static regex"),
            Regex::new(r"([A-Z][A-Za-z]+(?:[ \t][A-Z][A-Za-z]+)?[ \t]Institute)")
                .expect("static regex"),
            Regex::new(r"([A-Z][A-Za-z]+(?:[ \t][A-Z][A-Za-z]+)?[ \t]College)")
                .expect("static regex"),
        ];

        let year_re = Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("static regex");

        Self {
            degree_res,
            university_res,
            year_re,
        }
    }

    /// Entries in document order; empty when no education section exists.
    pub fn parse(&self, text: &str) -> Vec<EducationEntry> {
        let Some((_, section)) = sections::find_section(text, SECTION_KEYWORDS) else {
            return Vec::new();
        };

        let mut hits: Vec<(usize, &str)> = Vec::new();
        for pattern in &self.degree_res {
            for m in pattern.find_iter(section) {
                hits.push((m.start(), m.as_str()));
            }
        }
        hits.sort_by_key(|(start, _)| *start);

        let mut entries: Vec<EducationEntry> = Vec::new();
        for (start, degree) in hits {
            let context = context_window(section, start, start + degree.len());

            let entry = EducationEntry {
                degree: degree.trim().to_string(),
                institution: self.find_institution(context).unwrap_or_default(),
                year: self.find_year(context),
                level: EducationLevel::from_degree_text(degree),
            };

            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }

        entries
    }

    fn find_institution(&self, context: &str) -> Option<String> {
        for pattern in &self.university_res {
            if let Some(cap) = pattern.captures(context) {
                let raw = cap.get(1)?.as_str();
                let cleaned = raw
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim_end_matches(['-', ',', ';', '.', ' '])
                    .to_string();
                return Some(cleaned);
            }
        }
        None
    }

    /// Most recent year in the window; degrees usually cite the graduation
    /// year last.
    fn find_year(&self, context: &str) -> Option<i32> {
        self.year_re
            .find_iter(context)
            .filter_map(|m| m.as_str().parse::<i32>().ok())
            .max()
    }
}

impl Default for EducationParser {
    fn default() -> Self {
        Self::new()
    }
}

fn context_window(text: &str, start: usize, end: usize) -> &str {
    let mut lo = start.saturating_sub(CONTEXT_WINDOW);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + CONTEXT_WINDOW).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}
