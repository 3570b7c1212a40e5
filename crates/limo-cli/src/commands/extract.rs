//! Extract command - pull booking details out of a single message.

use std::fs;
use std::path::PathBuf;

use chrono::Datelike;
use clap::Args;
use console::style;
use tracing::{debug, info};

use limo_core::{
    parse_date, EntityExtractor, ExtractionReport, ExtractionResult, Field, RuleBasedExtractor,
};

use super::{load_config, read_input};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Confidence threshold (overrides the config file)
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Show extraction confidence scores
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let mut extractor = RuleBasedExtractor::from_config(&config.extraction);
    if let Some(threshold) = args.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("Threshold must be within [0, 1], got {}", threshold);
        }
        extractor = extractor.with_confidence_threshold(threshold);
    }

    let text = read_input(args.input.as_ref())?;
    if let Some(input) = &args.input {
        info!("Extracting from {}", input.display());
    }

    let report = extractor.extract_with_report(&text)?;

    let output = format_result(&report.fields, args.format, args.show_confidence)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        print_report_summary(&report);
    }

    debug!("Extraction took {}ms", report.processing_time_ms);

    Ok(())
}

fn print_report_summary(report: &ExtractionReport) {
    eprintln!();
    eprintln!(
        "{} {} of {} fields extracted",
        style("ℹ").blue(),
        report.fields.populated().len(),
        Field::ALL.len()
    );
    if !report.filtered.is_empty() {
        let names: Vec<&str> = report.filtered.iter().map(|f| f.as_str()).collect();
        eprintln!(
            "{} Below threshold: {}",
            style("ℹ").blue(),
            names.join(", ")
        );
    }
    eprintln!(
        "{} Processing time: {}ms",
        style("ℹ").blue(),
        report.processing_time_ms
    );
}

/// Render a result in the requested format.
pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    show_confidence: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if show_confidence => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.to_variables())?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result, show_confidence)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(Field::ALL.iter().map(|f| f.as_str()))?;
    wtr.write_record(result.iter().map(|(_, r)| r.text.as_str()))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult, show_confidence: bool) -> String {
    let mut output = String::new();
    let current_year = chrono::Local::now().year();

    for (field, value) in result.iter().filter(|(_, r)| !r.is_empty()) {
        output.push_str(&format!("{:<15} {}", format!("{}:", field), value.text));

        if field == Field::PickupDate {
            if let Some(date) = parse_date(&value.text, current_year) {
                output.push_str(&format!(" ({})", date.format("%Y-%m-%d")));
            }
        }
        if show_confidence {
            output.push_str(&format!(" [{:.0}%]", value.confidence * 100.0));
        }
        output.push('\n');
    }

    if output.is_empty() {
        output.push_str("No fields extracted\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        let mut result = ExtractionResult::new();
        result.first_name.set("John", 0.9);
        result.pickup_date.set("06/14/2025", 0.9);
        result
    }

    #[test]
    fn test_text_format() {
        let text = format_text(&sample(), true);
        assert!(text.contains("firstName:      John [90%]"));
        assert!(text.contains("06/14/2025 (2025-06-14)"));
        assert!(!text.contains("lastName"));
    }

    #[test]
    fn test_csv_format() {
        let csv = format_csv(&sample()).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("firstName,lastName,address"));
        assert!(lines.next().unwrap().starts_with("John,,,"));
    }

    #[test]
    fn test_json_without_confidence_is_flat() {
        let json = format_result(&sample(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["firstName"], "John");
        assert!(value.get("lastName").is_none());
    }
}
