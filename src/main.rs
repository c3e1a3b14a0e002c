//! cv-screener: candidate profile extraction and job-matching pipeline

mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;
mod parsing;
mod pipeline;
mod taxonomy;
mod types;

use chrono::Datelike;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, OutputFormat};
use error::{Result, ScreenerError};
use input::manager::InputManager;
use log::{error, info, warn};
use matching::MatchingEngine;
use output::{ConsoleFormatter, JsonFormatter};
use pipeline::Pipeline;
use std::path::{Path, PathBuf};
use std::process;
use types::{CandidateProfile, JobRequirement};

const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    // Open-ended date ranges ("2021 - present") anchor here, once, at the
    // process boundary; the pipeline itself never reads the clock.
    let reference_year = chrono::Utc::now().year();
    let pipeline = Pipeline::with_config(reference_year, &config.extraction);

    match command {
        Commands::Parse {
            resume,
            output,
            detailed,
        } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(ScreenerError::InvalidInput)?;

            let profile = build_profile(&pipeline, &config, &resume).await?;

            match parse_output_format(&output)? {
                OutputFormat::Console => {
                    let formatter = ConsoleFormatter::new(config.output.color_output, detailed);
                    println!("{}", formatter.format_profile(&profile));
                }
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(true).format_profile(&profile)?);
                }
            }
            Ok(())
        }

        Commands::Screen {
            resume,
            job,
            output,
            force,
        } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(ScreenerError::InvalidInput)?;

            let mut profile = build_profile(&pipeline, &config, &resume).await?;
            if force && profile.is_incomplete() {
                warn!("Profile is incomplete; scoring anyway (--force)");
                profile.contact.name = Some("(unidentified candidate)".to_string());
            }

            let job = load_job(&job).await?;
            let result = MatchingEngine::new().score(&profile, &job)?;

            match parse_output_format(&output)? {
                OutputFormat::Console => {
                    let formatter = ConsoleFormatter::new(config.output.color_output, false);
                    println!("{}", formatter.format_match(&result));
                }
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(true).format_match(&result)?);
                }
            }
            Ok(())
        }

        Commands::Batch { dir, job, output } => {
            let job = load_job(&job).await?;
            let engine = MatchingEngine::new();
            let format = parse_output_format(&output)?;

            let mut entries = tokio::fs::read_dir(&dir).await?;
            let mut scored: Vec<(PathBuf, types::MatchResult)> = Vec::new();

            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if cli::validate_file_extension(&path, RESUME_EXTENSIONS).is_err() {
                    continue;
                }

                // One bad document never aborts the batch.
                let outcome = async {
                    let profile = build_profile(&pipeline, &config, &path).await?;
                    engine.score(&profile, &job)
                }
                .await;

                match outcome {
                    Ok(result) => scored.push((path, result)),
                    Err(e) => warn!("Skipping {}: {}", path.display(), e),
                }
            }

            scored.sort_by(|a, b| {
                b.1.match_score
                    .partial_cmp(&a.1.match_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            info!("Scored {} candidate(s) against '{}'", scored.len(), job.title);
            match format {
                OutputFormat::Console => {
                    for (path, result) in &scored {
                        println!(
                            "{:>7.2}  {:<22}  {}",
                            result.match_score,
                            result.status.to_string(),
                            path.display()
                        );
                    }
                }
                OutputFormat::Json => {
                    let rows: Vec<serde_json::Value> = scored
                        .iter()
                        .map(|(path, result)| {
                            serde_json::json!({
                                "file": path.display().to_string(),
                                "result": result,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
            }
            Ok(())
        }

        Commands::Config => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| ScreenerError::Configuration(e.to_string()))?;
            println!("{}", rendered);
            println!(
                "taxonomy: version {}, {} skills",
                taxonomy::TAXONOMY_VERSION,
                taxonomy::Taxonomy::global().len()
            );
            Ok(())
        }
    }
}

async fn build_profile(
    pipeline: &Pipeline,
    config: &Config,
    resume: &Path,
) -> Result<CandidateProfile> {
    let mut manager = InputManager::with_config(&config.extraction);
    let text = manager.extract_text(resume).await?;
    Ok(pipeline.profile_from_text(&text))
}

async fn load_job(path: &Path) -> Result<JobRequirement> {
    let content = tokio::fs::read_to_string(path).await?;
    let job: JobRequirement = serde_json::from_str(&content)?;
    job.validate()?;
    Ok(job)
}

fn parse_output_format(raw: &str) -> Result<OutputFormat> {
    match raw.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(ScreenerError::InvalidInput(format!(
            "unknown output format '{}' (expected console or json)",
            other
        ))),
    }
}
