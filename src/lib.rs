//! cv-screener library
//!
//! Turns unstructured resume documents and structured job requirements into
//! comparable profiles and a reproducible match score with a qualification
//! verdict. The pipeline performs no network or database I/O: bytes and
//! records in, records out.

pub mod analysis;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod parsing;
pub mod pipeline;
pub mod taxonomy;
pub mod types;

pub use config::Config;
pub use error::{Result, ScreenerError};
pub use matching::MatchingEngine;
pub use pipeline::Pipeline;
