//! Section slicing shared by the structural parsers and the skill analyzer
//!
//! Résumé sections are located by short header lines ("Experience:",
//! "EDUCATION", "Technical Skills"); a section runs until the next known
//! header or the end of the document.

/// Headers that terminate a preceding section.
const KNOWN_HEADERS: &[&str] = &[
    "experience",
    "work",
    "employment",
    "career",
    "professional",
    "education",
    "academic",
    "qualification",
    "skills",
    "technical",
    "competencies",
    "expertise",
    "summary",
    "objective",
    "profile",
    "projects",
    "certifications",
    "awards",
    "publications",
    "references",
    "interests",
    "contact",
];

/// Header lines are short in both characters and words.
const HEADER_MAX_CHARS: usize = 50;
const HEADER_MAX_WORDS: usize = 4;

/// Byte span of a section within the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SectionSpan {
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

fn is_header_shaped(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.len() < HEADER_MAX_CHARS
        && trimmed.split_whitespace().count() <= HEADER_MAX_WORDS
}

/// Whole-word containment: "Work Experience" matches "work", "teamwork"
/// does not.
fn contains_word(line_lower: &str, keyword: &str) -> bool {
    line_lower.match_indices(keyword).any(|(idx, _)| {
        let before_ok = line_lower[..idx]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
        let after_ok = line_lower[idx + keyword.len()..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
        before_ok && after_ok
    })
}

/// The known keyword a header line leads with, if any.
fn header_keyword(line: &str) -> Option<&'static str> {
    if !is_header_shaped(line) {
        return None;
    }
    let lowered = line.trim().to_lowercase();
    KNOWN_HEADERS
        .iter()
        .find(|kw| match lowered.find(*kw) {
            Some(idx) if idx < 5 => lowered[idx + kw.len()..]
                .chars()
                .next()
                .map(|c| !c.is_alphabetic())
                .unwrap_or(true),
            _ => false,
        })
        .copied()
}

/// Whether a line reads as a section header.
pub fn is_header_line(line: &str) -> bool {
    header_keyword(line).is_some()
}

/// Find the first section whose header mentions one of `keywords`. Returns
/// the span (header line included) and the section body without the header.
pub fn find_section<'a>(text: &'a str, keywords: &[&str]) -> Option<(SectionSpan, &'a str)> {
    let mut offsets = Vec::new();
    let mut pos = 0;
    for line in text.split('\n') {
        offsets.push((pos, line));
        pos += line.len() + 1;
    }

    let start_idx = offsets.iter().position(|(_, line)| {
        if !is_header_shaped(line) {
            return false;
        }
        let lowered = line.trim().to_lowercase();
        keywords.iter().any(|kw| contains_word(&lowered, kw))
    })?;

    let end_idx = offsets
        .iter()
        .enumerate()
        .skip(start_idx + 1)
        .find(|(_, (_, line))| match header_keyword(line) {
            // A header belonging to the same keyword family continues the
            // section; anything else ends it.
            Some(kw) => !keywords.contains(&kw),
            None => false,
        })
        .map(|(idx, _)| idx)
        .unwrap_or(offsets.len());

    let start = offsets[start_idx].0;
    let end = if end_idx < offsets.len() {
        offsets[end_idx].0
    } else {
        text.len()
    };

    let body_start = (start + offsets[start_idx].1.len() + 1).min(end);
    Some((SectionSpan { start, end }, &text[body_start..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\nExperience:\nEngineer at Acme\n2018 - 2021\n\nEducation:\nB.Sc Computer Science\nState University, 2017\n\nSkills:\nPython, Rust";

    #[test]
    fn test_find_experience_section() {
        let (span, body) = find_section(SAMPLE, &["experience", "work"]).unwrap();
        assert!(body.contains("Engineer at Acme"));
        assert!(!body.contains("B.Sc"));
        assert!(span.start < span.end);
    }

    #[test]
    fn test_find_education_section() {
        let (_, body) = find_section(SAMPLE, &["education", "academic"]).unwrap();
        assert!(body.contains("State University"));
        assert!(!body.contains("Python"));
    }

    #[test]
    fn test_section_runs_to_end_of_document() {
        let (_, body) = find_section(SAMPLE, &["skills"]).unwrap();
        assert!(body.contains("Python, Rust"));
    }

    #[test]
    fn test_compound_headers() {
        let text =
            "Professional Experience\nEngineer at Acme\n\nTechnical Skills\nPython, Docker";
        let (_, body) = find_section(text, &["experience", "work"]).unwrap();
        assert!(body.contains("Engineer at Acme"));
        assert!(!body.contains("Python"));

        let (_, skills) = find_section(text, &["skills", "competencies"]).unwrap();
        assert!(skills.contains("Python, Docker"));
    }

    #[test]
    fn test_missing_section() {
        assert!(find_section("no structure here at all", &["education"]).is_none());
    }

    #[test]
    fn test_prose_is_not_a_header() {
        // Long lines, many words, and mid-word keyword hits all disqualify.
        let text = "my work experience over the years has taught me a great deal about life\nI value teamwork highly";
        assert!(find_section(text, &["experience", "work"]).is_none());
    }
}
