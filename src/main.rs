//! ATS checker: resume vs job description scoring tool

use anyhow::Context;
use ats_checker::cli::{self, Cli, Commands, ConfigAction};
use ats_checker::config::Config;
use ats_checker::error::AtsCheckerError;
use ats_checker::input::manager::InputManager;
use ats_checker::output::formatter::{format_for_path, save_report_to_file, ReportGenerator};
use ats_checker::output::report::AnalysisReport;
use ats_checker::processing::analyzer::AnalysisEngine;
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli.command, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    config.context("Failed to load configuration")
}

async fn run_command(command: Commands, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Check {
            resume,
            job,
            job_text,
            kind,
            output,
            save,
        } => {
            let config = load_config(config_path.as_deref())?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsCheckerError::InvalidInput)?,
                None => config.output.format,
            };

            let input_manager = InputManager::new();
            let document = input_manager
                .load_document(&resume, kind.as_deref())
                .await
                .with_context(|| format!("Failed to load resume {}", resume.display()))?;

            let (job_text, job_source) = match (job, job_text) {
                (Some(path), _) => {
                    let text = input_manager.read_job_description(&path).await?;
                    (text, Some(path.display().to_string()))
                }
                (None, Some(text)) => (InputManager::require_job_text(text)?, None),
                (None, None) => {
                    return Err(AtsCheckerError::InvalidInput(
                        "A job description is required (--job or --job-text)".to_string(),
                    )
                    .into())
                }
            };

            let engine = AnalysisEngine::with_config(&config)
                .context("Failed to initialize analysis engine")?;

            info!("Analyzing {}", document.describe());
            let resume_file = document.source.clone();
            let result = tokio::task::spawn_blocking(move || engine.analyze(&document, &job_text))
                .await
                .context("Analysis task failed")?
                .context("Analysis failed")?;

            let report = AnalysisReport::from_result(result, resume_file, job_source);
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.show_tip,
                true,
            );
            println!("{}", generator.generate_report(&report, &output_format)?);

            if let Some(path) = save {
                let plain = ReportGenerator::with_options(false, config.output.show_tip, true);
                let content = plain.generate_report(&report, &format_for_path(&path))?;
                save_report_to_file(&content, &path)
                    .with_context(|| format!("Failed to save report to {}", path.display()))?;
                println!("💾 Report saved to {}", path.display());
            }
        }

        Commands::Config { action } => {
            let path = config_path.clone().unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    let config = load_config(config_path.as_deref())?;
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    if !path.exists() {
                        println!("# file not found, showing defaults");
                    }
                    println!("{}", config.to_toml()?);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration written to {}", path.display());
                }
            }
        }
    }

    Ok(())
}
