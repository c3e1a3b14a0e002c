//! Plain structured records crossing the pipeline boundary

pub mod candidate;
pub mod job;
pub mod match_result;

pub use candidate::{CandidateProfile, ContactInfo, EducationEntry, ExperienceEntry, SkillRecord};
pub use job::{EducationLevel, JobRequirement};
pub use match_result::{MatchBreakdown, MatchResult, ScreeningStatus};
