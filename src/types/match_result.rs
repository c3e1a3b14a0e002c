//! Match result records produced by the matching engine

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreeningStatus {
    Qualified,
    PotentiallyQualified,
    NotQualified,
}

impl std::fmt::Display for ScreeningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScreeningStatus::Qualified => "Qualified",
            ScreeningStatus::PotentiallyQualified => "Potentially Qualified",
            ScreeningStatus::NotQualified => "Not Qualified",
        };
        write!(f, "{}", name)
    }
}

/// Per-component scores, each on 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
}

/// Stateless output of one (candidate, job) scoring call. A new calculation
/// supersedes the old one; persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted overall score, 0-100, rounded to two decimals.
    pub match_score: f64,
    pub breakdown: MatchBreakdown,
    pub status: ScreeningStatus,
    pub screening_notes: String,
}
