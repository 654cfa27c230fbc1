//! Process command - extract candidate data from a single resume file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use resumex_core::models::candidate::CandidateInfo;
use resumex_core::resume::{CandidateExtractor, HeuristicAnalyzer};
use resumex_core::text::extract_text;
use resumex_ai::{AiExtractor, ChatClient};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, TXT, MD, RTF, DOC/DOCX)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also run the AI-assisted extractor and enrich the heuristic result
    #[arg(long)]
    ai: bool,

    /// Show a field summary after extraction
    #[arg(long)]
    show_summary: bool,
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

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = extract_text(&args.input);
    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from {}", args.input.display());
    }
    debug!("extracted {} characters of text", text.len());

    let analyzer = HeuristicAnalyzer::with_config(config.extraction.clone());
    let mut candidate = analyzer.extract_with_path(&text, &args.input);

    if args.ai {
        // The heuristic record is the floor; a successful AI pass enriches
        // it, a failed one is reported and skipped.
        match run_ai(&text, &config).await {
            Ok(enrichment) => candidate.enrich(enrichment),
            Err(e) => warn!("AI-assisted extraction failed: {}", e),
        }
    }

    let output = format_candidate(&candidate, args.format)?;

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

    if args.show_summary {
        println!();
        println!(
            "{} Extracted {} of 9 fields",
            style("ℹ").blue(),
            filled_fields(&candidate)
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

async fn run_ai(
    text: &str,
    config: &resumex_core::models::config::ResumexConfig,
) -> anyhow::Result<CandidateInfo> {
    let client = ChatClient::new(&config.ai)?;
    let extractor = AiExtractor::new(&client);
    Ok(extractor.extract(text).await?)
}

fn filled_fields(candidate: &CandidateInfo) -> usize {
    [
        candidate.name.is_some(),
        candidate.email.is_some(),
        candidate.phone.is_some(),
        candidate.degree.is_some(),
        candidate.degree_field.is_some(),
        candidate.years_experience.is_some(),
        candidate.has_certifications,
        candidate.native_english_speaker.is_some(),
        candidate.military_experience.is_some(),
    ]
    .iter()
    .filter(|&&found| found)
    .count()
}

pub(crate) fn format_candidate(
    candidate: &CandidateInfo,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(candidate)?),
        OutputFormat::Csv => format_csv(candidate),
        OutputFormat::Text => Ok(format_text(candidate)),
    }
}

pub(crate) const CSV_HEADER: [&str; 10] = [
    "name",
    "email",
    "phone",
    "degree",
    "degree_field",
    "years_experience",
    "has_certifications",
    "native_english_speaker",
    "military_experience",
    "status",
];

pub(crate) fn csv_record(candidate: &CandidateInfo) -> [String; 10] {
    [
        candidate.name.clone().unwrap_or_default(),
        candidate.email.clone().unwrap_or_default(),
        candidate.phone.clone().unwrap_or_default(),
        candidate.degree.map(|d| d.to_string()).unwrap_or_default(),
        candidate.degree_field.clone().unwrap_or_default(),
        candidate
            .years_experience
            .map(|y| y.to_string())
            .unwrap_or_default(),
        candidate.has_certifications.to_string(),
        candidate
            .native_english_speaker
            .map(|b| b.to_string())
            .unwrap_or_default(),
        candidate
            .military_experience
            .map(|b| b.to_string())
            .unwrap_or_default(),
        candidate.status.clone(),
    ]
}

fn format_csv(candidate: &CandidateInfo) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_record(candidate))?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(candidate: &CandidateInfo) -> String {
    let mut output = String::new();
    let missing = "-";

    output.push_str(&format!(
        "Name:   {}\n",
        candidate.name.as_deref().unwrap_or(missing)
    ));
    output.push_str(&format!(
        "Email:  {}\n",
        candidate.email.as_deref().unwrap_or(missing)
    ));
    output.push_str(&format!(
        "Phone:  {}\n",
        candidate.phone.as_deref().unwrap_or(missing)
    ));
    output.push('\n');

    output.push_str("Education:\n");
    output.push_str(&format!(
        "  Degree: {}\n",
        candidate
            .degree
            .map(|d| d.to_string())
            .unwrap_or_else(|| missing.to_string())
    ));
    output.push_str(&format!(
        "  Field:  {}\n",
        candidate.degree_field.as_deref().unwrap_or(missing)
    ));
    output.push('\n');

    if let Some(years) = candidate.years_experience {
        output.push_str(&format!("Experience: {} years\n", years));
    }
    if let Some(certs) = &candidate.certifications {
        output.push_str(&format!("Certifications: {}\n", certs));
    }
    if candidate.native_english_speaker == Some(true) {
        output.push_str("Native English speaker\n");
    }
    if candidate.military_experience == Some(true) {
        output.push_str("Military experience\n");
    }

    output.push_str(&format!("\nStatus: {}\n", candidate.status));
    output
}
