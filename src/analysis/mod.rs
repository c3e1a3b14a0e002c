//! Skill identification and proficiency scoring

pub mod skills;

pub use skills::SkillAnalyzer;
