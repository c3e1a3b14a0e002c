//! Contact information extraction: email, phone, and name heuristics
//!
//! Every field is optional; a résumé with no findable name is a degraded
//! profile, not an error.

use crate::types::ContactInfo;
use regex::Regex;

/// Lines containing these words are labels or headers, never names.
const NAME_SKIP_WORDS: &[&str] = &[
    "curriculum",
    "vitae",
    "resume",
    "cv",
    "email",
    "phone",
    "tel",
    "mobile",
    "address",
    "objective",
    "summary",
    "professional",
    "profile",
    "contact",
    "personal",
    "information",
];

pub struct ContactParser {
    email_re: Regex,
    phone_res: Vec<Regex>,
    inline_phone_re: Regex,
    name_label_re: Regex,
}

impl ContactParser {
    pub fn new() -> Self {
        let email_re = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("static regex");

        // Ordered most to least specific; first pattern with a hit wins.
        let phone_res = vec![
            Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
                .expect("static regex"),
            Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("static regex"),
            Regex::new(r"\b\d{10}\b").expect("static regex"),
        ];

        let inline_phone_re =
            Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("static regex");
        let name_label_re = Regex::new(r"(?i)(?:name|candidate)[\s:]+([A-Z][a-zA-Z\s.]+)")
            .expect("static regex");

        Self {
            email_re,
            phone_res,
            inline_phone_re,
            name_label_re,
        }
    }

    pub fn parse(&self, text: &str) -> ContactInfo {
        ContactInfo {
            name: self.extract_name(text),
            email: self.extract_email(text),
            phone: self.extract_phone(text),
        }
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email_re
            .find(text)
            .map(|m| m.as_str().to_lowercase())
    }

    pub fn extract_phone(&self, text: &str) -> Option<String> {
        for pattern in &self.phone_res {
            if let Some(m) = pattern.find(text) {
                let digits: String = m
                    .as_str()
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                return Some(digits);
            }
        }
        None
    }

    /// Layered heuristics over the document head (everything before the
    /// first section header): a simple 2-4 word capitalized line, an
    /// all-caps line, a filtered scan, then an explicit "Name:" label.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        let lines: Vec<&str> = text
            .lines()
            .take_while(|line| !crate::parsing::sections::is_header_line(line))
            .collect();

        if let Some(name) = self.simple_name_line(&lines) {
            return Some(name);
        }
        if let Some(name) = self.all_caps_line(&lines) {
            return Some(name);
        }
        if let Some(name) = self.filtered_scan(&lines) {
            return Some(name);
        }
        self.labelled_name(text)
    }

    fn simple_name_line(&self, lines: &[&str]) -> Option<String> {
        for line in lines.iter().take(3) {
            let line = line.trim();
            if line.is_empty() || line.len() > 50 || has_skip_word(line) {
                continue;
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            if (2..=4).contains(&words.len()) && words.iter().all(|w| is_name_word(w)) {
                return Some(words.join(" "));
            }
        }
        None
    }

    fn all_caps_line(&self, lines: &[&str]) -> Option<String> {
        for line in lines.iter().take(5) {
            let line = line.trim();
            if line.is_empty() || has_skip_word(line) {
                continue;
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() >= 2
                && line == line.to_uppercase()
                && line != line.to_lowercase()
                && words.iter().all(|w| is_name_word(w))
            {
                return Some(words.join(" "));
            }
        }
        None
    }

    fn filtered_scan(&self, lines: &[&str]) -> Option<String> {
        for line in lines.iter().take(10) {
            let line = line.trim();
            if line.is_empty() || line.len() > 60 {
                continue;
            }
            if has_skip_word(line) {
                continue;
            }
            if line.contains('@') || self.inline_phone_re.is_match(line) {
                continue;
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            if (1..=4).contains(&words.len()) {
                let valid: Vec<&str> = words.iter().filter(|w| is_name_word(w)).copied().collect();
                if valid.len() >= 2 {
                    return Some(valid.join(" "));
                }
            }
        }
        None
    }

    fn labelled_name(&self, text: &str) -> Option<String> {
        let head = head_slice(text, 500);
        self.name_label_re.captures(head).and_then(|cap| {
            let name = cap.get(1)?.as_str().trim();
            let words = name.split_whitespace().count();
            if (2..=4).contains(&words) {
                Some(name.to_string())
            } else {
                None
            }
        })
    }
}

impl Default for ContactParser {
    fn default() -> Self {
        Self::new()
    }
}

fn has_skip_word(line: &str) -> bool {
    let lowered = line.to_lowercase();
    NAME_SKIP_WORDS.iter().any(|kw| {
        // Short tokens ("cv", "tel") must match whole words, or surnames
        // like "McVie" get filtered.
        if kw.len() <= 3 {
            lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|w| w == *kw)
        } else {
            lowered.contains(kw)
        }
    })
}

fn is_name_word(word: &str) -> bool {
    let cleaned: String = word
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '\''))
        .collect();
    !cleaned.is_empty() && cleaned.chars().all(|c| c.is_alphabetic())
}

fn head_slice(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
