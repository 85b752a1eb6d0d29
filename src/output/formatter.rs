//! Output formatters for console and JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AnalysisReport, ScoreBand, KEYWORD_TIP};
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    show_tip: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

/// Picks the formatter for the configured output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_tip: bool) -> Self {
        Self {
            use_colors,
            show_tip,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score(&self, value: &str, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        };

        if self.use_colors {
            value.color(color).bold().to_string()
        } else {
            value.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let summary = &report.summary;
        let mut output = String::new();

        output.push_str(&self.format_header("📄 ATS RESUME CHECKER", 1));
        output.push_str(&format!(
            "Generated: {}",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        if let Some(resume_file) = &report.metadata.resume_file {
            output.push_str(&format!(" | Resume: {}", resume_file));
        }
        output.push('\n');

        output.push_str(&self.format_header("📊 Results", 2));
        output.push_str(&format!(
            "🔍 Match Score: {}\n",
            self.format_score(&summary.match_score, summary.similarity_band)
        ));
        output.push_str(&format!(
            "🧠 Keyword Match: {}\n",
            self.format_score(&summary.keyword_match, summary.keyword_band)
        ));
        output.push_str(&format!(
            "📦 ATS Format Score: {}\n",
            self.format_score(&summary.format_score, summary.format_band)
        ));

        output.push_str(&self.format_header("📝 Matched Keywords", 3));
        output.push_str(&summary.matched_keywords);
        output.push('\n');

        if self.show_tip {
            output.push('\n');
            output.push_str(&self.colorize(&format!("✨ {}", KEYWORD_TIP), Color::Cyan));
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, show_tip: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, show_tip),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Infer the report format from a file name: `.json` is JSON, anything else plain text
pub fn format_for_path(file_path: &Path) -> OutputFormat {
    match file_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Console,
    }
}
