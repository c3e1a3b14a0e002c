//! The scoring formulas: skill, experience, and education components
//! combined into a weighted overall match
//!
//! Everything here is a fixed, pure formula — identical inputs produce
//! bit-identical results, which the test suite relies on.

use crate::error::{Result, ScreenerError};
use crate::matching::screening;
use crate::matching::similarity::{SimilarityModel, TfidfCosine};
use crate::taxonomy::canonical_key;
use crate::types::{
    CandidateProfile, EducationLevel, JobRequirement, MatchBreakdown, MatchResult,
};

pub const SKILL_WEIGHT: f64 = 0.5;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;
pub const EDUCATION_WEIGHT: f64 = 0.2;

/// Exact-match component: flat points per matched skill, capped per tier.
/// Required and preferred caps add up to the component's 0-70 scale.
const REQUIRED_SKILL_POINTS: f64 = 5.0;
const REQUIRED_SKILL_CAP: f64 = 50.0;
const PREFERRED_SKILL_POINTS: f64 = 2.0;
const PREFERRED_SKILL_CAP: f64 = 20.0;

/// Cosine similarity (0-1) scales onto the remaining 0-30.
const SIMILARITY_SCALE: f64 = 30.0;

/// A job that lists no skills at all cannot differentiate candidates.
const NEUTRAL_SKILL_SCORE: f64 = 50.0;

pub struct MatchingEngine {
    similarity: Box<dyn SimilarityModel>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::with_similarity(Box::new(TfidfCosine))
    }

    pub fn with_similarity(similarity: Box<dyn SimilarityModel>) -> Self {
        Self { similarity }
    }

    /// Score one (candidate, job) pair. Refuses incomplete profiles and
    /// invalid jobs; zero skills or zero experience are valid low-scoring
    /// inputs, not errors.
    pub fn score(&self, profile: &CandidateProfile, job: &JobRequirement) -> Result<MatchResult> {
        job.validate()?;
        if profile.is_incomplete() {
            return Err(ScreenerError::IncompleteProfile(
                "profile has neither a name nor an email address".to_string(),
            ));
        }

        let breakdown = MatchBreakdown {
            skill_match: self.skill_match(profile, job),
            experience_match: experience_match(
                profile.total_experience_years,
                job.min_experience_years,
            ),
            education_match: education_match(
                profile.highest_education_level(),
                job.education_level,
            ),
        };

        let match_score = round2(
            breakdown.skill_match * SKILL_WEIGHT
                + breakdown.experience_match * EXPERIENCE_WEIGHT
                + breakdown.education_match * EDUCATION_WEIGHT,
        );

        let status = screening::classify(match_score, breakdown.skill_match);
        let screening_notes = screening::build_notes(profile, job, &breakdown, match_score, status);

        Ok(MatchResult {
            match_score,
            breakdown,
            status,
            screening_notes,
        })
    }

    fn skill_match(&self, profile: &CandidateProfile, job: &JobRequirement) -> f64 {
        let candidate_keys: Vec<String> = profile
            .skills
            .iter()
            .map(|s| canonical_key(&s.name))
            .collect();
        if candidate_keys.is_empty() {
            return 0.0;
        }

        let required: Vec<String> = job.required_skills.iter().map(|s| canonical_key(s)).collect();
        let preferred: Vec<String> = job.preferred_skills.iter().map(|s| canonical_key(s)).collect();
        if required.is_empty() && preferred.is_empty() {
            return NEUTRAL_SKILL_SCORE;
        }

        let matched_required = required
            .iter()
            .filter(|key| skill_present(&candidate_keys, key))
            .count() as f64;
        let matched_preferred = preferred
            .iter()
            .filter(|key| skill_present(&candidate_keys, key))
            .count() as f64;

        let exact = (matched_required * REQUIRED_SKILL_POINTS).min(REQUIRED_SKILL_CAP)
            + (matched_preferred * PREFERRED_SKILL_POINTS).min(PREFERRED_SKILL_CAP);

        let candidate_text = candidate_keys.join(" ");
        let job_text = required
            .iter()
            .chain(preferred.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let semantic = self.similarity.similarity(&candidate_text, &job_text) * SIMILARITY_SCALE;

        round2((exact + semantic).clamp(0.0, 100.0))
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Presence test shared with the screening notes so scores and the missing
/// list never disagree. Canonical keys match exactly or by containment
/// either way ("node.js" satisfies "node").
pub(crate) fn skill_present(candidate_keys: &[String], job_key: &str) -> bool {
    candidate_keys
        .iter()
        .any(|cand| cand == job_key || cand.contains(job_key) || job_key.contains(cand.as_str()))
}

/// Years-ratio bands: full marks at the minimum, a soft landing above 80%
/// of it, proportional below.
pub(crate) fn experience_match(candidate_years: u32, min_years: i32) -> f64 {
    if min_years <= 0 {
        return 100.0;
    }
    if candidate_years == 0 {
        return 0.0;
    }

    let ratio = candidate_years as f64 / min_years as f64;
    let score = if ratio >= 1.0 {
        100.0
    } else if ratio >= 0.8 {
        80.0 + (ratio - 0.8) * 100.0
    } else {
        ratio * 100.0
    };

    round2(score.clamp(0.0, 100.0))
}

/// Distance ladder over the education hierarchy; missing education counts
/// as below HighSchool.
pub(crate) fn education_match(
    candidate: Option<EducationLevel>,
    required: Option<EducationLevel>,
) -> f64 {
    let Some(required) = required else {
        return 100.0;
    };

    let candidate_rank = candidate.map(|level| level.rank()).unwrap_or(-1);
    let distance = required.rank() - candidate_rank;

    match distance {
        d if d <= 0 => 100.0,
        1 => 70.0,
        2 => 40.0,
        _ => 20.0,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::SkillCategory;
    use crate::types::{ContactInfo, EducationEntry, ScreeningStatus, SkillRecord};
    use std::collections::BTreeSet;

    fn profile_with(skills: &[&str], years: u32, level: Option<EducationLevel>) -> CandidateProfile {
        CandidateProfile {
            contact: ContactInfo {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                phone: None,
            },
            education: level
                .map(|lvl| {
                    vec![EducationEntry {
                        degree: format!("{}", lvl),
                        institution: "State University".to_string(),
                        year: Some(2015),
                        level: Some(lvl),
                    }]
                })
                .unwrap_or_default(),
            experience: Vec::new(),
            skills: skills
                .iter()
                .map(|name| SkillRecord {
                    name: (*name).to_string(),
                    category: SkillCategory::Tool,
                    proficiency_score: 60.0,
                    years: None,
                })
                .collect(),
            total_experience_years: years,
            raw_text: String::new(),
        }
    }

    fn job_with(
        required: &[&str],
        preferred: &[&str],
        min_years: i32,
        level: Option<EducationLevel>,
    ) -> JobRequirement {
        JobRequirement {
            title: "Engineer".to_string(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            min_experience_years: min_years,
            education_level: level,
        }
    }

    #[test]
    fn test_experience_bands() {
        assert_eq!(experience_match(0, 5), 0.0);
        assert_eq!(experience_match(5, 5), 100.0);
        assert_eq!(experience_match(4, 5), 80.0);
        assert_eq!(experience_match(3, 5), 60.0);
        assert_eq!(experience_match(10, 5), 100.0);
        assert_eq!(experience_match(0, 0), 100.0);
        assert_eq!(experience_match(9, 10), 90.0);
    }

    #[test]
    fn test_education_ladder() {
        use EducationLevel::*;
        assert_eq!(education_match(Some(Bachelor), Some(Bachelor)), 100.0);
        assert_eq!(education_match(Some(Master), Some(Bachelor)), 100.0);
        assert_eq!(education_match(Some(Associate), Some(Bachelor)), 70.0);
        assert_eq!(education_match(Some(HighSchool), Some(Bachelor)), 40.0);
        assert_eq!(education_match(Some(HighSchool), Some(PhD)), 20.0);
        assert_eq!(education_match(None, Some(HighSchool)), 70.0);
        assert_eq!(education_match(None, None), 100.0);
        assert_eq!(education_match(Some(PhD), None), 100.0);
    }

    #[test]
    fn test_skill_match_monotonic_in_required_coverage() {
        let engine = MatchingEngine::new();
        let job = job_with(&["python", "docker", "kubernetes"], &[], 0, None);

        let one = engine.skill_match(&profile_with(&["python"], 0, None), &job);
        let two = engine.skill_match(&profile_with(&["python", "docker"], 0, None), &job);
        let three = engine.skill_match(
            &profile_with(&["python", "docker", "kubernetes"], 0, None),
            &job,
        );

        assert!(one <= two);
        assert!(two <= three);
    }

    #[test]
    fn test_skill_match_full_coverage() {
        let engine = MatchingEngine::new();
        let job = job_with(&["python", "docker"], &["kubernetes"], 0, None);
        let profile = profile_with(&["python", "docker", "kubernetes"], 0, None);

        // 2 required x 5 + 1 preferred x 2 + identical-vocabulary cosine 30
        let score = engine.skill_match(&profile, &job);
        assert_eq!(score, 42.0);
    }

    #[test]
    fn test_skill_match_edge_cases() {
        let engine = MatchingEngine::new();
        assert_eq!(
            engine.skill_match(&profile_with(&[], 0, None), &job_with(&["python"], &[], 0, None)),
            0.0
        );
        assert_eq!(
            engine.skill_match(&profile_with(&["python"], 0, None), &job_with(&[], &[], 0, None)),
            NEUTRAL_SKILL_SCORE
        );
    }

    #[test]
    fn test_incomplete_profile_refused() {
        let engine = MatchingEngine::new();
        let mut profile = profile_with(&["python"], 3, None);
        profile.contact = ContactInfo::default();

        let result = engine.score(&profile, &job_with(&["python"], &[], 0, None));
        assert!(matches!(result, Err(ScreenerError::IncompleteProfile(_))));
    }

    #[test]
    fn test_invalid_job_refused() {
        let engine = MatchingEngine::new();
        let profile = profile_with(&["python"], 3, None);

        let result = engine.score(&profile, &job_with(&["python"], &[], -2, None));
        assert!(matches!(result, Err(ScreenerError::IncomparableJob(_))));
    }

    #[test]
    fn test_full_score_and_status() {
        let engine = MatchingEngine::new();
        let profile = profile_with(
            &["python", "postgresql", "docker", "kubernetes", "terraform",
              "aws", "linux", "git", "jenkins", "ansible"],
            6,
            Some(EducationLevel::Master),
        );
        let job = job_with(
            &["python", "postgresql", "docker", "kubernetes", "terraform",
              "aws", "linux", "git", "jenkins", "ansible"],
            &[],
            5,
            Some(EducationLevel::Bachelor),
        );

        let result = engine.score(&profile, &job).unwrap();
        // Skills: 10 x 5 capped at 50, cosine 1.0 -> 30; total 80.
        assert_eq!(result.breakdown.skill_match, 80.0);
        assert_eq!(result.breakdown.experience_match, 100.0);
        assert_eq!(result.breakdown.education_match, 100.0);
        assert_eq!(result.match_score, 90.0);
        assert_eq!(result.status, ScreeningStatus::Qualified);
    }

    #[test]
    fn test_deterministic_output() {
        let engine = MatchingEngine::new();
        let profile = profile_with(&["python", "docker"], 2, Some(EducationLevel::Bachelor));
        let job = job_with(&["python", "rust"], &["docker"], 4, Some(EducationLevel::Bachelor));

        let a = engine.score(&profile, &job).unwrap();
        let b = engine.score(&profile, &job).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_skills_is_not_an_error() {
        let engine = MatchingEngine::new();
        let profile = profile_with(&[], 0, None);
        let job = job_with(&["python"], &[], 5, Some(EducationLevel::PhD));

        let result = engine.score(&profile, &job).unwrap();
        assert_eq!(result.breakdown.skill_match, 0.0);
        assert_eq!(result.status, ScreeningStatus::NotQualified);
    }
}
