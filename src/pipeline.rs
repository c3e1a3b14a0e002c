//! Composition root: document bytes in, candidate profile out
//!
//! One synchronous, stateless pass per document. The structural parser and
//! the skill analyzer both read the same normalized text; their outputs are
//! composed into an immutable profile. Safe to call concurrently from any
//! number of workers — the only shared state is the read-only taxonomy.

use crate::analysis::SkillAnalyzer;
use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::input::file_detector::DocumentFormat;
use crate::input::manager::InputManager;
use crate::parsing::{ContactParser, EducationParser, ExperienceParser};
use crate::types::CandidateProfile;
use log::debug;

pub struct Pipeline {
    input: InputManager,
    contact: ContactParser,
    education: EducationParser,
    experience: ExperienceParser,
    skills: SkillAnalyzer,
}

impl Pipeline {
    /// `reference_year` anchors open-ended experience ranges; pass the
    /// current year at the boundary, a fixed year in tests.
    pub fn new(reference_year: i32) -> Self {
        Self::with_config(reference_year, &ExtractionConfig {
            min_text_chars: 20,
            enable_caching: false,
        })
    }

    pub fn with_config(reference_year: i32, extraction: &ExtractionConfig) -> Self {
        Self {
            input: InputManager::with_config(extraction),
            contact: ContactParser::new(),
            education: EducationParser::new(),
            experience: ExperienceParser::new(reference_year),
            skills: SkillAnalyzer::new(),
        }
    }

    /// Full run: decode and normalize the document, then build the profile.
    pub fn process_document(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<CandidateProfile> {
        let text = self.input.extract_bytes(bytes, format)?;
        Ok(self.profile_from_text(&text))
    }

    /// Build a profile from already-normalized text. Partial extraction
    /// failures degrade to empty fields; they are data quality, not errors.
    pub fn profile_from_text(&self, text: &str) -> CandidateProfile {
        let contact = self.contact.parse(text);
        let education = self.education.parse(text);
        let (experience, total_experience_years) = self.experience.parse(text);
        let skills = self.skills.analyze(text);

        debug!(
            "profile built: {} education, {} experience, {} skills, {} total years",
            education.len(),
            experience.len(),
            skills.len(),
            total_experience_years
        );

        CandidateProfile {
            contact,
            education,
            experience,
            skills,
            total_experience_years,
            raw_text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScreenerError;
    use crate::types::EducationLevel;

    const RESUME: &str = "Jane Doe\njane.doe@example.com | (555) 123-4567\n\nSummary:\nBackend engineer who enjoys data plumbing.\n\nExperience:\nSenior Software Engineer at Acme Corp\n2018 - 2022\nBuilt Python services on PostgreSQL and Docker.\n\nEducation:\nBachelor of Science in Computer Science\nState University, 2017\n\nSkills:\nPython, PostgreSQL, Docker, Kubernetes";

    #[test]
    fn test_end_to_end_profile() {
        let pipeline = Pipeline::new(2024);
        let profile = pipeline
            .process_document(RESUME.as_bytes(), DocumentFormat::Text)
            .unwrap();

        assert_eq!(profile.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert!(!profile.is_incomplete());

        assert_eq!(profile.highest_education_level(), Some(EducationLevel::Bachelor));
        assert_eq!(profile.total_experience_years, 4);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Acme Corp");

        let names = profile.skill_names();
        assert!(names.contains(&"Python"));
        assert!(names.contains(&"Kubernetes"));
    }

    #[test]
    fn test_empty_document_is_unreadable() {
        let pipeline = Pipeline::new(2024);
        let result = pipeline.process_document(b"", DocumentFormat::Text);
        assert!(matches!(result, Err(ScreenerError::UnreadableDocument(_))));
    }

    #[test]
    fn test_idempotent_over_same_bytes() {
        let pipeline = Pipeline::new(2024);
        let a = pipeline
            .process_document(RESUME.as_bytes(), DocumentFormat::Text)
            .unwrap();
        let b = pipeline
            .process_document(RESUME.as_bytes(), DocumentFormat::Text)
            .unwrap();

        assert_eq!(a.contact, b.contact);
        assert_eq!(a.skills, b.skills);
        assert_eq!(a.total_experience_years, b.total_experience_years);
    }

    #[test]
    fn test_profile_without_contact_is_flagged() {
        let pipeline = Pipeline::new(2024);
        let text = "Skills:\nPython, Docker\n\nExperience:\nEngineer at Somewhere\n2019 - 2021";
        let profile = pipeline.profile_from_text(text);
        assert!(profile.is_incomplete());
    }
}
