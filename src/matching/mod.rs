//! Candidate-to-job matching: weighted scoring, classification, notes

pub mod engine;
pub mod screening;
pub mod similarity;

pub use engine::MatchingEngine;
pub use similarity::{SimilarityModel, TfidfCosine};
