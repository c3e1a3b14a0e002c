//! Experience extraction: block segmentation, title/company pairs, and
//! total-years computation from explicit date ranges
//!
//! The parser never reads the clock: "present" resolves against an injected
//! reference year so identical input always yields identical output.

use crate::parsing::sections;
use crate::types::ExperienceEntry;
use regex::Regex;

const SECTION_KEYWORDS: &[&str] = &["experience", "work", "employment", "career"];

/// When no date range in the section parses, total experience falls back to
/// this many years per distinct entry.
pub const FALLBACK_YEARS_PER_ENTRY: u32 = 2;

const TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "consultant",
    "specialist",
    "coordinator",
    "director",
    "lead",
    "senior",
    "junior",
    "intern",
    "associate",
    "assistant",
    "architect",
    "scientist",
    "researcher",
    "administrator",
];

pub struct ExperienceParser {
    reference_year: i32,
    range_re: Regex,
    year_re: Regex,
}

impl ExperienceParser {
    /// `reference_year` anchors open-ended ranges ("2021 - present").
    pub fn new(reference_year: i32) -> Self {
        let range_re = Regex::new(
            r"(?i)\b(19\d{2}|20\d{2})\s*(?:[-\u{2013}\u{2014}~]|to|until)\s*(19\d{2}|20\d{2}|present|current|now)\b",
        )
        .expect("static regex");
        let year_re = Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("static regex");

        Self {
            reference_year,
            range_re,
            year_re,
        }
    }

    /// Entries in document order plus the derived total years (never
    /// negative). Empty or garbled input yields `(vec![], 0)`.
    pub fn parse(&self, text: &str) -> (Vec<ExperienceEntry>, u32) {
        let Some((_, section)) = sections::find_section(text, SECTION_KEYWORDS) else {
            return (Vec::new(), 0);
        };

        let entries = self.split_blocks(section);
        let total_years = self.total_years(section, entries.len());

        (entries, total_years)
    }

    /// Blocks are bounded by blank lines or by lines carrying a date range;
    /// the first two salient lines of a block become title and company, the
    /// rest its description.
    fn split_blocks(&self, section: &str) -> Vec<ExperienceEntry> {
        let mut blocks: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in section.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
                continue;
            }
            if self.range_re.is_match(trimmed) && !current.is_empty() {
                // A dated line opens the next position unless the block just
                // started (title and dates often share the first line).
                let dated_already = current.iter().any(|l| self.range_re.is_match(l));
                if dated_already {
                    blocks.push(std::mem::take(&mut current));
                }
            }
            current.push(trimmed);
        }
        if !current.is_empty() {
            blocks.push(current);
        }

        blocks
            .into_iter()
            .filter_map(|block| self.block_to_entry(&block))
            .collect()
    }

    fn block_to_entry(&self, block: &[&str]) -> Option<ExperienceEntry> {
        let has_dates = block.iter().any(|l| self.range_re.is_match(l));
        let has_title_word = block
            .iter()
            .take(2)
            .any(|l| looks_like_job_title(l));
        if !has_dates && !has_title_word {
            return None;
        }

        let duration_text = block
            .iter()
            .find_map(|l| self.range_re.find(l).map(|m| m.as_str().to_string()))
            .unwrap_or_default();

        let salient: Vec<String> = block
            .iter()
            .map(|l| strip_dates(l, &self.range_re, &self.year_re))
            .filter(|l| !l.is_empty())
            .collect();

        let first = salient.first().map(String::as_str).unwrap_or_default();
        let (title, company_inline) = split_title_line(first);
        let description_start = if company_inline.is_some() { 1 } else { 2 };
        let company = company_inline
            .unwrap_or_else(|| salient.get(1).cloned().unwrap_or_default());

        let description = salient
            .iter()
            .skip(description_start)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");

        Some(ExperienceEntry {
            title,
            company,
            duration_text,
            description,
        })
    }

    /// Sum of merged, non-overlapping explicit year ranges; the documented
    /// fallback applies when nothing parses.
    fn total_years(&self, section: &str, entry_count: usize) -> u32 {
        let mut ranges: Vec<(i32, i32)> = Vec::new();

        for cap in self.range_re.captures_iter(section) {
            let start: i32 = match cap[1].parse() {
                Ok(y) => y,
                Err(_) => continue,
            };
            let end_text = cap[2].to_lowercase();
            let end = if matches!(end_text.as_str(), "present" | "current" | "now") {
                self.reference_year
            } else {
                match end_text.parse() {
                    Ok(y) => y,
                    Err(_) => continue,
                }
            };
            if end >= start {
                ranges.push((start, end));
            }
        }

        if ranges.is_empty() {
            return entry_count as u32 * FALLBACK_YEARS_PER_ENTRY;
        }

        ranges.sort_unstable();
        let mut merged: Vec<(i32, i32)> = Vec::new();
        for (start, end) in ranges {
            match merged.last_mut() {
                Some((_, last_end)) if start <= *last_end => {
                    *last_end = (*last_end).max(end);
                }
                _ => merged.push((start, end)),
            }
        }

        merged.iter().map(|(start, end)| (end - start) as u32).sum()
    }
}

fn looks_like_job_title(line: &str) -> bool {
    let lowered = line.to_lowercase();
    TITLE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// "Software Engineer at Acme Corp" splits into title and company.
fn split_title_line(line: &str) -> (String, Option<String>) {
    for sep in [" at ", " @ "] {
        if let Some(idx) = line.find(sep) {
            let title = line[..idx].trim_matches([' ', ',', '-', '|']).to_string();
            let company = line[idx + sep.len()..]
                .trim_matches([' ', ',', '-', '|'])
                .to_string();
            if !title.is_empty() && !company.is_empty() {
                return (title, Some(company));
            }
        }
    }
    (line.trim_matches([' ', ',', '-', '|']).to_string(), None)
}

/// Drop date ranges, stray years, and leftover separators from a line.
fn strip_dates(line: &str, range_re: &Regex, year_re: &Regex) -> String {
    let no_ranges = range_re.replace_all(line, "");
    let no_years = year_re.replace_all(&no_ranges, "");
    no_years
        .trim_matches([' ', ',', '-', '|', '(', ')'])
        .to_string()
}
