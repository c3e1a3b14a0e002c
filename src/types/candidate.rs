//! Candidate profile records built by the extraction pipeline

use crate::taxonomy::SkillCategory;
use crate::types::job::EducationLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: Option<i32>,
    pub level: Option<EducationLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration_text: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Canonical casing from the taxonomy.
    pub name: String,
    pub category: SkillCategory,
    /// 0-100, derived from textual signals.
    pub proficiency_score: f64,
    /// Explicit "N years" figure near a mention; never guessed.
    pub years: Option<u32>,
}

/// Immutable once built; matching never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub contact: ContactInfo,
    /// In the order found in the document.
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    /// Unique by canonical name, sorted by descending proficiency.
    pub skills: Vec<SkillRecord>,
    pub total_experience_years: u32,
    /// Normalized source text, kept for audit only.
    pub raw_text: String,
}

impl CandidateProfile {
    /// A profile with neither a name nor an email cannot be matched; the
    /// caller may still store it, flagged.
    pub fn is_incomplete(&self) -> bool {
        self.contact.name.is_none() && self.contact.email.is_none()
    }

    /// Highest education level across all entries; `None` when no entry
    /// carries a recognized level.
    pub fn highest_education_level(&self) -> Option<EducationLevel> {
        self.education.iter().filter_map(|e| e.level).max()
    }

    pub fn skill_names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }
}
