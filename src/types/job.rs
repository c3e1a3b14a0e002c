//! Job requirement records and the education level hierarchy

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Degree levels, lowest to highest. The derived `Ord` is the basis for the
/// distance computation in education matching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EducationLevel {
    HighSchool,
    Diploma,
    Associate,
    Bachelor,
    Master,
    PhD,
}

impl EducationLevel {
    pub fn rank(&self) -> i32 {
        *self as i32
    }

    /// Map free-text degree phrasing onto a level by keyword containment,
    /// case-insensitive. Returns `None` for unrecognized phrasing.
    pub fn from_degree_text(text: &str) -> Option<Self> {
        const PHD: &[&str] = &["phd", "ph.d", "doctor"];
        const MASTER: &[&str] = &["master", "mba", "msc", "m.sc", "m.s", "m.a", "m.tech", "m.eng"];
        const BACHELOR: &[&str] = &[
            "bachelor", "bsc", "b.sc", "b.s", "b.a", "b.tech", "b.eng", "undergraduate",
        ];
        const ASSOCIATE: &[&str] = &["associate", "a.s", "a.a"];
        const HIGH_SCHOOL: &[&str] = &["high school", "secondary school"];
        const DIPLOMA: &[&str] = &["diploma", "certificate"];

        let lowered = text.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|kw| lowered.contains(kw));

        // Highest level first; "High School Diploma" must land on HighSchool,
        // so the high-school check precedes the diploma check.
        if matches(PHD) {
            Some(EducationLevel::PhD)
        } else if matches(MASTER) {
            Some(EducationLevel::Master)
        } else if matches(BACHELOR) {
            Some(EducationLevel::Bachelor)
        } else if matches(ASSOCIATE) {
            Some(EducationLevel::Associate)
        } else if matches(HIGH_SCHOOL) {
            Some(EducationLevel::HighSchool)
        } else if matches(DIPLOMA) {
            Some(EducationLevel::Diploma)
        } else {
            None
        }
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Associate => "Associate",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::PhD => "PhD",
        };
        write!(f, "{}", name)
    }
}

/// A job opening's requirements, produced by the surrounding system.
/// `required_skills`/`preferred_skills` are plain skill name strings; no
/// further mining happens on the description inside this pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub preferred_skills: BTreeSet<String>,
    #[serde(default)]
    pub min_experience_years: i32,
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
}

impl JobRequirement {
    /// Mandatory-field check. Matching refuses jobs that fail here.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ScreenerError::IncomparableJob(
                "job title is empty".to_string(),
            ));
        }
        if self.min_experience_years < 0 {
            return Err(ScreenerError::IncomparableJob(format!(
                "min_experience_years is negative: {}",
                self.min_experience_years
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(EducationLevel::HighSchool < EducationLevel::Diploma);
        assert!(EducationLevel::Bachelor < EducationLevel::Master);
        assert!(EducationLevel::Master < EducationLevel::PhD);
        assert_eq!(EducationLevel::HighSchool.rank(), 0);
        assert_eq!(EducationLevel::PhD.rank(), 5);
    }

    #[test]
    fn test_degree_text_mapping() {
        assert_eq!(
            EducationLevel::from_degree_text("Bachelor of Science in CS"),
            Some(EducationLevel::Bachelor)
        );
        assert_eq!(
            EducationLevel::from_degree_text("MBA"),
            Some(EducationLevel::Master)
        );
        assert_eq!(
            EducationLevel::from_degree_text("Ph.D. in Physics"),
            Some(EducationLevel::PhD)
        );
        assert_eq!(EducationLevel::from_degree_text("Bootcamp"), None);
    }

    #[test]
    fn test_validate_rejects_negative_experience() {
        let job = JobRequirement {
            title: "Engineer".to_string(),
            description: String::new(),
            required_skills: BTreeSet::new(),
            preferred_skills: BTreeSet::new(),
            min_experience_years: -1,
            education_level: None,
        };
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "title": "Backend Engineer",
            "description": "Build services",
            "required_skills": ["Python", "PostgreSQL"],
            "preferred_skills": ["Docker"],
            "min_experience_years": 3,
            "education_level": "Bachelor"
        }"#;
        let job: JobRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(job.required_skills.len(), 2);
        assert_eq!(job.education_level, Some(EducationLevel::Bachelor));
        assert!(job.validate().is_ok());
    }
}
