//! Structural parsing of normalized résumé text
//! Derives contact fields, education entries, and experience entries.

pub mod contact;
pub mod education;
pub mod experience;
pub mod sections;

pub use contact::ContactParser;
pub use education::EducationParser;
pub use experience::{ExperienceParser, FALLBACK_YEARS_PER_ENTRY};
