//! Batch processing command for multiple resume files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use resumex_core::models::candidate::CandidateInfo;
use resumex_core::resume::{CandidateExtractor, HeuristicAnalyzer};
use resumex_core::text::extract_text;

use super::load_config;
use super::process::{csv_record, CSV_HEADER};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON records
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    candidate: Option<CandidateInfo>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(
                ext.to_lowercase().as_str(),
                "pdf" | "doc" | "docx" | "txt" | "md" | "rtf"
            )
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No resume files matched pattern: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    println!(
        "{} Processing {} file(s)",
        style("→").cyan(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let analyzer = HeuristicAnalyzer::with_config(config.extraction.clone());
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        pb.set_message(
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string(),
        );

        let result = process_file(&analyzer, &path);
        if let Some(err) = &result.error {
            error!("{}: {}", path.display(), err);
            if !args.continue_on_error {
                pb.abandon();
                anyhow::bail!("{}: {}", path.display(), err);
            }
        }

        if let (Some(dir), Some(candidate)) = (&args.output_dir, &result.candidate) {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("candidate");
            let out_path = dir.join(format!("{}.json", stem));
            fs::write(&out_path, serde_json::to_string_pretty(candidate)?)?;
            debug!("wrote {}", out_path.display());
        }

        results.push(result);
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let succeeded = results.iter().filter(|r| r.candidate.is_some()).count();
    let failed = results.len() - succeeded;
    println!(
        "{} {} processed, {} failed in {:.1}s",
        style("✓").green(),
        succeeded,
        failed,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn process_file(analyzer: &HeuristicAnalyzer, path: &PathBuf) -> ProcessResult {
    let text = extract_text(path);
    if text.trim().is_empty() {
        return ProcessResult {
            path: path.clone(),
            candidate: None,
            error: Some("no text could be extracted".to_string()),
        };
    }

    ProcessResult {
        path: path.clone(),
        candidate: Some(analyzer.extract_with_path(&text, path)),
        error: None,
    }
}

fn write_summary(path: &PathBuf, results: &[ProcessResult]) -> anyhow::Result<()> {
    let processed_at = chrono::Local::now().to_rfc3339();
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["file"];
    header.extend(CSV_HEADER);
    header.extend(["error", "processed_at"]);
    wtr.write_record(&header)?;

    for result in results {
        let mut record = vec![result.path.display().to_string()];
        match &result.candidate {
            Some(candidate) => record.extend(csv_record(candidate)),
            None => record.extend(std::iter::repeat_n(String::new(), CSV_HEADER.len())),
        }
        record.push(result.error.clone().unwrap_or_default());
        record.push(processed_at.clone());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
