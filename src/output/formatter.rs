//! Console and JSON rendering of profiles and match results

use crate::error::Result;
use crate::types::{CandidateProfile, MatchResult, ScreeningStatus};
use colored::Colorize;

/// Colored, human-oriented console output.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    pub fn format_profile(&self, profile: &CandidateProfile) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}\n",
            self.paint("Candidate Profile", |s| s.bold().to_string())
        ));
        out.push_str(&format!(
            "  Name:  {}\n",
            profile.contact.name.as_deref().unwrap_or("(not found)")
        ));
        out.push_str(&format!(
            "  Email: {}\n",
            profile.contact.email.as_deref().unwrap_or("(not found)")
        ));
        out.push_str(&format!(
            "  Phone: {}\n",
            profile.contact.phone.as_deref().unwrap_or("(not found)")
        ));
        if profile.is_incomplete() {
            out.push_str(&format!(
                "  {}\n",
                self.paint("Flagged incomplete: no name and no email", |s| s
                    .red()
                    .to_string())
            ));
        }

        out.push_str(&format!(
            "  Total experience: {} year(s)\n",
            profile.total_experience_years
        ));

        if !profile.education.is_empty() {
            out.push_str("  Education:\n");
            for entry in &profile.education {
                out.push_str(&format!(
                    "    - {} | {} | {}\n",
                    entry.degree,
                    if entry.institution.is_empty() {
                        "(unknown institution)"
                    } else {
                        &entry.institution
                    },
                    entry
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "n/a".to_string())
                ));
            }
        }

        if !profile.experience.is_empty() {
            out.push_str("  Experience:\n");
            for entry in &profile.experience {
                out.push_str(&format!(
                    "    - {} at {} ({})\n",
                    entry.title,
                    if entry.company.is_empty() { "?" } else { &entry.company },
                    if entry.duration_text.is_empty() {
                        "no dates"
                    } else {
                        &entry.duration_text
                    }
                ));
                if self.detailed && !entry.description.is_empty() {
                    out.push_str(&format!("      {}\n", entry.description));
                }
            }
        }

        if !profile.skills.is_empty() {
            out.push_str("  Skills:\n");
            for skill in &profile.skills {
                let years = skill
                    .years
                    .map(|y| format!(", {} yr", y))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "    - {} ({}, {:.1}{})\n",
                    skill.name, skill.category, skill.proficiency_score, years
                ));
            }
        }

        out
    }

    pub fn format_match(&self, result: &MatchResult) -> String {
        let mut out = String::new();

        let status_line = format!("{}", result.status);
        let status_colored = if self.use_colors {
            match result.status {
                ScreeningStatus::Qualified => status_line.green().bold().to_string(),
                ScreeningStatus::PotentiallyQualified => status_line.yellow().bold().to_string(),
                ScreeningStatus::NotQualified => status_line.red().bold().to_string(),
            }
        } else {
            status_line
        };

        out.push_str(&format!(
            "{}\n",
            self.paint("Match Result", |s| s.bold().to_string())
        ));
        out.push_str(&format!("  Status:     {}\n", status_colored));
        out.push_str(&format!("  Score:      {:.2}\n", result.match_score));
        out.push_str(&format!(
            "  Breakdown:  skills {:.2} | experience {:.2} | education {:.2}\n",
            result.breakdown.skill_match,
            result.breakdown.experience_match,
            result.breakdown.education_match
        ));
        out.push_str("\n");
        out.push_str(&result.screening_notes);
        out.push('\n');

        out
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.use_colors {
            style(text)
        } else {
            text.to_string()
        }
    }
}

/// Structured output for the surrounding system.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format_profile(&self, profile: &CandidateProfile) -> Result<String> {
        self.to_json(profile)
    }

    pub fn format_match(&self, result: &MatchResult) -> Result<String> {
        self.to_json(result)
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactInfo, MatchBreakdown};

    fn sample_result() -> MatchResult {
        MatchResult {
            match_score: 72.5,
            breakdown: MatchBreakdown {
                skill_match: 65.0,
                experience_match: 80.0,
                education_match: 70.0,
            },
            status: ScreeningStatus::Qualified,
            screening_notes: "Candidate meets the job requirements.".to_string(),
        }
    }

    #[test]
    fn test_console_match_output() {
        let formatter = ConsoleFormatter::new(false, false);
        let text = formatter.format_match(&sample_result());

        assert!(text.contains("Qualified"));
        assert!(text.contains("72.50"));
        assert!(text.contains("skills 65.00"));
    }

    #[test]
    fn test_json_roundtrip() {
        let formatter = JsonFormatter::new(false);
        let json = formatter.format_match(&sample_result()).unwrap();
        let parsed: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.match_score, 72.5);
    }

    #[test]
    fn test_incomplete_profile_flag_rendered() {
        let formatter = ConsoleFormatter::new(false, false);
        let profile = CandidateProfile {
            contact: ContactInfo::default(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
            total_experience_years: 0,
            raw_text: String::new(),
        };
        let text = formatter.format_profile(&profile);
        assert!(text.contains("Flagged incomplete"));
    }
}
