//! CLI interface for the cv-screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-screener")]
#[command(about = "Candidate profile extraction and job-matching pipeline")]
#[command(
    long_about = "Parse resumes (PDF, DOCX, TXT) into structured candidate profiles and score them against job requirements with a reproducible, explainable match score"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume into a candidate profile
    Parse {
        /// Path to the resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include experience descriptions in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Screen a resume against a job requirement file
    Screen {
        /// Path to the resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job requirement JSON file
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Score the candidate even when the profile has no name or email
        #[arg(long)]
        force: bool,
    },

    /// Screen every supported document in a directory against one job
    Batch {
        /// Directory holding resume files
        #[arg(short, long)]
        dir: PathBuf,

        /// Path to the job requirement JSON file
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show the active configuration
    Config,
}

pub fn validate_file_extension(path: &PathBuf, allowed: &[&str]) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .ok_or_else(|| format!("{} has no file extension", path.display()))?;

    if allowed.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "{}: unsupported extension '{}' (expected one of: {})",
            path.display(),
            extension,
            allowed.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_extension() {
        assert!(validate_file_extension(&PathBuf::from("cv.pdf"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.PDF"), &["pdf"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.odt"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &["pdf"]).is_err());
    }
}
