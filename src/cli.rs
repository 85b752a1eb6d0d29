//! CLI interface for the ATS checker

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-checker")]
#[command(about = "ATS resume checker")]
#[command(long_about = "Compare a resume (PDF or DOCX) against a job description: TF-IDF match score, keyword match and ATS format score")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a resume against a job description
    Check {
        /// Path to resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a plain-text job description
        #[arg(short, long, conflicts_with = "job_text", required_unless_present = "job_text")]
        job: Option<PathBuf>,

        /// Job description text
        #[arg(long)]
        job_text: Option<String>,

        /// Document kind: pdf, docx or a MIME type (defaults to the file extension)
        #[arg(short, long)]
        kind: Option<String>,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to a file (.json for JSON, anything else for text)
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_check_requires_a_job_description() {
        assert!(Cli::try_parse_from(["ats-checker", "check", "--resume", "cv.pdf"]).is_err());
        assert!(Cli::try_parse_from([
            "ats-checker", "check", "--resume", "cv.pdf", "--job", "jd.txt", "--job-text", "rust"
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "ats-checker", "check", "-r", "cv.docx", "--job-text", "Rust engineer", "-o", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Check { resume, job, job_text, output, .. } => {
                assert_eq!(resume, PathBuf::from("cv.docx"));
                assert!(job.is_none());
                assert_eq!(job_text.as_deref(), Some("Rust engineer"));
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["ats-checker", "--verbose", "config", "path"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config { action: Some(ConfigAction::Path) }
        ));
    }
}
