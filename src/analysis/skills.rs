//! Skill analysis: taxonomy scan, proficiency scoring, explicit years
//!
//! Scores are deterministic functions of the text: frequency of mention,
//! seniority wording near a mention, and which section the mention sits in.
//! Each signal only ever raises (or for downgrade wording, lowers) the score.

use crate::parsing::sections;
use crate::taxonomy::{canonical_key, SkillMention, Taxonomy};
use crate::types::SkillRecord;
use regex::Regex;
use std::collections::HashMap;

const BASE_SCORE: f64 = 50.0;

/// Graded seniority wording; first hit in a mention's context wins, so the
/// strongest claim is checked first. Downgrade wording subtracts.
const SENIORITY_KEYWORDS: &[(&str, i32)] = &[
    ("expert", 20),
    ("advanced", 18),
    ("proficient", 15),
    ("experienced", 12),
    ("skilled", 10),
    ("senior", 10),
    ("lead", 8),
    ("strong", 8),
    ("solid", 6),
    ("familiar", 3),
    ("basic", -5),
    ("beginner", -10),
];

/// Total seniority contribution is bounded either way.
const SENIORITY_CAP: i32 = 20;

/// Context window around a mention for seniority wording, in bytes.
const SENIORITY_WINDOW: usize = 100;

/// Wider window for "N years" phrases, in bytes.
const YEARS_WINDOW: usize = 200;

const EXPERIENCE_SECTION_BONUS: f64 = 10.0;
const SKILLS_SECTION_BONUS: f64 = 5.0;

pub struct SkillAnalyzer {
    taxonomy: &'static Taxonomy,
    years_re: Regex,
}

impl SkillAnalyzer {
    pub fn new() -> Self {
        Self::with_taxonomy(Taxonomy::global())
    }

    pub fn with_taxonomy(taxonomy: &'static Taxonomy) -> Self {
        let years_re = Regex::new(r"(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b").expect("static regex");
        Self { taxonomy, years_re }
    }

    /// All taxonomy skills mentioned in `text`, unique by canonical name,
    /// sorted by descending proficiency then name.
    pub fn analyze(&self, text: &str) -> Vec<SkillRecord> {
        let mentions = self.taxonomy.find_mentions(text);
        if mentions.is_empty() {
            return Vec::new();
        }

        let experience_span = sections::find_section(text, &["experience", "work", "employment", "career"])
            .map(|(span, _)| span);
        let skills_span = sections::find_section(text, &["skills", "competencies", "expertise"])
            .map(|(span, _)| span);

        let mut grouped: HashMap<String, Vec<&SkillMention>> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for mention in &mentions {
            let key = canonical_key(&mention.entry.name);
            if !grouped.contains_key(&key) {
                order.push(key.clone());
            }
            grouped.entry(key).or_default().push(mention);
        }

        let mut records: Vec<SkillRecord> = order
            .into_iter()
            .map(|key| {
                let skill_mentions = &grouped[&key];
                let entry = skill_mentions[0].entry;
                let years = self.explicit_years(text, skill_mentions);

                let mut score = BASE_SCORE
                    + frequency_points(skill_mentions.len())
                    + self.seniority_points(text, skill_mentions)
                    + years_points(years);

                if skill_mentions
                    .iter()
                    .any(|m| experience_span.map(|s| s.contains(m.start)).unwrap_or(false))
                {
                    score += EXPERIENCE_SECTION_BONUS;
                } else if skill_mentions
                    .iter()
                    .any(|m| skills_span.map(|s| s.contains(m.start)).unwrap_or(false))
                {
                    score += SKILLS_SECTION_BONUS;
                }

                SkillRecord {
                    name: entry.name.clone(),
                    category: entry.category,
                    proficiency_score: (score.clamp(0.0, 100.0) * 10.0).round() / 10.0,
                    years,
                }
            })
            .collect();

        records.sort_by(|a, b| {
            b.proficiency_score
                .partial_cmp(&a.proficiency_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        records
    }

    fn seniority_points(&self, text: &str, mentions: &[&SkillMention]) -> f64 {
        let mut total = 0i32;
        for mention in mentions {
            let context = window(text, mention.start, mention.end, SENIORITY_WINDOW).to_lowercase();
            if let Some((_, points)) = SENIORITY_KEYWORDS
                .iter()
                .find(|(kw, _)| context.contains(kw))
            {
                total += points;
            }
        }
        total.clamp(-SENIORITY_CAP, SENIORITY_CAP) as f64
    }

    /// Explicit "N years" within the wider window of any mention; the
    /// largest figure wins, absence stays `None`.
    fn explicit_years(&self, text: &str, mentions: &[&SkillMention]) -> Option<u32> {
        mentions
            .iter()
            .flat_map(|mention| {
                let context = window(text, mention.start, mention.end, YEARS_WINDOW);
                self.years_re
                    .captures_iter(context)
                    .filter_map(|cap| cap[1].parse::<u32>().ok())
                    .collect::<Vec<_>>()
            })
            .max()
    }
}

impl Default for SkillAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn frequency_points(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 5.0,
        2 => 10.0,
        3..=4 => 15.0,
        _ => 20.0,
    }
}

fn years_points(years: Option<u32>) -> f64 {
    match years {
        Some(y) if y >= 5 => 15.0,
        Some(y) if y >= 3 => 10.0,
        Some(y) if y >= 1 => 5.0,
        _ => 0.0,
    }
}

fn window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let mut lo = start.saturating_sub(radius);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + radius).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}
