//! Screening classification and explanatory notes
//!
//! Three terminal states computed fresh on every call, plus notes that are
//! a pure function of the breakdown and the two input records.

use crate::matching::engine::skill_present;
use crate::taxonomy::canonical_key;
use crate::types::{CandidateProfile, JobRequirement, MatchBreakdown, ScreeningStatus};
use strsim::jaro_winkler;

const STRENGTH_THRESHOLD: f64 = 80.0;
const CONSIDERATION_THRESHOLD: f64 = 50.0;

/// A missing required skill this close to one the candidate lists is
/// probably a spelling variant worth flagging.
const NEAR_MATCH_THRESHOLD: f64 = 0.85;

pub fn classify(match_score: f64, skill_match: f64) -> ScreeningStatus {
    if match_score >= 70.0 && skill_match >= 60.0 {
        ScreeningStatus::Qualified
    } else if match_score >= 50.0 || (match_score >= 40.0 && skill_match >= 50.0) {
        ScreeningStatus::PotentiallyQualified
    } else {
        ScreeningStatus::NotQualified
    }
}

pub fn build_notes(
    profile: &CandidateProfile,
    job: &JobRequirement,
    breakdown: &MatchBreakdown,
    match_score: f64,
    status: ScreeningStatus,
) -> String {
    let mut strengths: Vec<String> = Vec::new();
    let mut considerations: Vec<String> = Vec::new();
    let mut gaps: Vec<String> = Vec::new();

    // Skill component
    if breakdown.skill_match >= STRENGTH_THRESHOLD {
        strengths.push(format!("Strong skill match ({:.1}%)", breakdown.skill_match));
    } else if breakdown.skill_match >= CONSIDERATION_THRESHOLD {
        considerations.push(format!("Moderate skill match ({:.1}%)", breakdown.skill_match));
    } else {
        gaps.push(format!("Low skill match ({:.1}%)", breakdown.skill_match));
    }

    if !job.required_skills.is_empty() {
        let missing = missing_required_skills(profile, job);
        if missing.is_empty() {
            strengths.push("Has all required skills".to_string());
        } else {
            let total = job.required_skills.len();
            let matched = total - missing.len();
            if matched as f64 >= total as f64 * 0.7 {
                considerations.push(format!("Has {}/{} required skills", matched, total));
            }
            gaps.push(format!(
                "Missing required skills: {}",
                missing
                    .iter()
                    .map(|skill| annotate_near_match(skill, profile))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
    }

    // Experience component
    if job.min_experience_years > 0 {
        let have = profile.total_experience_years;
        let need = job.min_experience_years;
        if breakdown.experience_match >= 100.0 {
            strengths.push(format!(
                "Meets experience requirement ({} years, {} required)",
                have, need
            ));
        } else if breakdown.experience_match >= STRENGTH_THRESHOLD {
            considerations.push(format!(
                "Close to experience requirement ({}/{} years)",
                have, need
            ));
        } else {
            let short = (need as i64 - have as i64).max(0);
            gaps.push(format!(
                "{} year(s) short of the {}-year experience minimum (has {})",
                short, need, have
            ));
        }
    } else {
        strengths.push("No minimum experience required".to_string());
    }

    // Education component
    match job.education_level {
        Some(required) => {
            let candidate = profile.highest_education_level();
            if breakdown.education_match >= 100.0 {
                strengths.push(format!("Meets education requirement ({})", required));
            } else {
                let levels_short =
                    required.rank() - candidate.map(|lvl| lvl.rank()).unwrap_or(-1);
                let line = match candidate {
                    Some(have) => format!(
                        "Education {} level(s) below the required {} (has {})",
                        levels_short, required, have
                    ),
                    None => format!(
                        "No recognized education; {} required",
                        required
                    ),
                };
                if breakdown.education_match >= CONSIDERATION_THRESHOLD {
                    considerations.push(line);
                } else {
                    gaps.push(line);
                }
            }
        }
        None => strengths.push("No education requirement specified".to_string()),
    }

    let summary = match status {
        ScreeningStatus::Qualified => {
            "Candidate meets the job requirements and is recommended for interview."
        }
        ScreeningStatus::PotentiallyQualified => {
            "Candidate shows potential but may need further evaluation."
        }
        ScreeningStatus::NotQualified => {
            "Candidate does not meet minimum requirements for this position."
        }
    };

    let mut notes = summary.to_string();
    for (heading, lines) in [
        ("Strengths", &strengths),
        ("Considerations", &considerations),
        ("Gaps", &gaps),
    ] {
        if !lines.is_empty() {
            notes.push_str(&format!("\n\n{}:\n- {}", heading, lines.join("\n- ")));
        }
    }
    notes.push_str(&format!("\n\nOverall Match Score: {:.2}%", match_score));

    notes
}

/// Set difference between the job's required skills and the candidate's,
/// using the same presence test as the scoring.
fn missing_required_skills<'j>(
    profile: &CandidateProfile,
    job: &'j JobRequirement,
) -> Vec<&'j str> {
    let candidate_keys: Vec<String> = profile
        .skills
        .iter()
        .map(|s| canonical_key(&s.name))
        .collect();

    job.required_skills
        .iter()
        .filter(|skill| !skill_present(&candidate_keys, &canonical_key(skill)))
        .map(|skill| skill.as_str())
        .collect()
}

fn annotate_near_match(missing: &str, profile: &CandidateProfile) -> String {
    let missing_key = canonical_key(missing);
    let near = profile
        .skills
        .iter()
        .map(|s| (s.name.as_str(), jaro_winkler(&canonical_key(&s.name), &missing_key)))
        .filter(|(_, sim)| *sim >= NEAR_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match near {
        Some((name, _)) => format!("{} (candidate lists {})", missing, name),
        None => missing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::SkillCategory;
    use crate::types::{ContactInfo, EducationLevel, SkillRecord};
    use std::collections::BTreeSet;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(classify(75.0, 65.0), ScreeningStatus::Qualified);
        assert_eq!(classify(70.0, 60.0), ScreeningStatus::Qualified);
        assert_eq!(classify(75.0, 55.0), ScreeningStatus::PotentiallyQualified);
        assert_eq!(classify(55.0, 30.0), ScreeningStatus::PotentiallyQualified);
        assert_eq!(classify(45.0, 55.0), ScreeningStatus::PotentiallyQualified);
        assert_eq!(classify(45.0, 40.0), ScreeningStatus::NotQualified);
        assert_eq!(classify(30.0, 20.0), ScreeningStatus::NotQualified);
    }

    fn sample_profile(skills: &[&str], years: u32) -> CandidateProfile {
        CandidateProfile {
            contact: ContactInfo {
                name: Some("Jane Doe".to_string()),
                email: None,
                phone: None,
            },
            education: Vec::new(),
            experience: Vec::new(),
            skills: skills
                .iter()
                .map(|name| SkillRecord {
                    name: (*name).to_string(),
                    category: SkillCategory::Tool,
                    proficiency_score: 70.0,
                    years: None,
                })
                .collect(),
            total_experience_years: years,
            raw_text: String::new(),
        }
    }

    fn sample_job(required: &[&str], min_years: i32) -> JobRequirement {
        JobRequirement {
            title: "Engineer".to_string(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            preferred_skills: BTreeSet::new(),
            min_experience_years: min_years,
            education_level: Some(EducationLevel::Bachelor),
        }
    }

    #[test]
    fn test_notes_name_missing_skills_and_shortfalls() {
        let profile = sample_profile(&["Python"], 3);
        let job = sample_job(&["Python", "Terraform"], 5);
        let breakdown = MatchBreakdown {
            skill_match: 40.0,
            experience_match: 60.0,
            education_match: 40.0,
        };

        let notes = build_notes(
            &profile,
            &job,
            &breakdown,
            46.0,
            ScreeningStatus::NotQualified,
        );

        assert!(notes.contains("Missing required skills: Terraform"));
        assert!(notes.contains("2 year(s) short of the 5-year experience minimum (has 3)"));
        assert!(notes.contains("Bachelor"));
        assert!(notes.contains("Overall Match Score: 46.00%"));
    }

    #[test]
    fn test_notes_order_strengths_first() {
        let profile = sample_profile(&["Python", "Terraform"], 6);
        let job = sample_job(&["Python", "Terraform"], 5);
        let breakdown = MatchBreakdown {
            skill_match: 85.0,
            experience_match: 100.0,
            education_match: 40.0,
        };

        let notes = build_notes(&profile, &job, &breakdown, 81.5, ScreeningStatus::Qualified);

        let strengths_pos = notes.find("Strengths:").unwrap();
        let gaps_pos = notes.find("Gaps:").unwrap();
        assert!(strengths_pos < gaps_pos);
        assert!(notes.contains("Strong skill match (85.0%)"));
        assert!(notes.contains("Has all required skills"));
    }

    #[test]
    fn test_near_match_hint() {
        let profile = sample_profile(&["Kubernetes"], 1);
        let job = sample_job(&["Kuberntes"], 0);
        let breakdown = MatchBreakdown {
            skill_match: 30.0,
            experience_match: 100.0,
            education_match: 40.0,
        };

        let notes = build_notes(
            &profile,
            &job,
            &breakdown,
            53.0,
            ScreeningStatus::PotentiallyQualified,
        );
        assert!(notes.contains("candidate lists Kubernetes"));
    }
}
