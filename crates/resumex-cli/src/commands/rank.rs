//! Rank command - order saved candidates via the AI ranking service.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use resumex_ai::{CandidateRanker, ChatClient};
use resumex_core::models::candidate::CandidateInfo;

use super::load_config;

/// Arguments for the rank command.
#[derive(Args)]
pub struct RankArgs {
    /// JSON file containing an array of candidate records (with ids)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file for the ranking as JSON (default: human-readable stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of ranked candidates (default from config)
    #[arg(short, long)]
    limit: Option<usize>,
}

pub async fn run(args: RankArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let content = fs::read_to_string(&args.input)?;
    let candidates: Vec<CandidateInfo> = serde_json::from_str(&content)?;
    info!("loaded {} candidate(s) from {}", candidates.len(), args.input.display());

    let client = ChatClient::new(&config.ai)?;
    info!("ranking with model {}", client.model());
    let limit = args.limit.unwrap_or(config.ai.max_rank_candidates);
    let ranker = CandidateRanker::new(&client).with_limit(limit);

    let ranking = ranker.rank(candidates).await?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, serde_json::to_string_pretty(&ranking)?)?;
        println!(
            "{} Ranking written to {}",
            style("✓").green(),
            output_path.display()
        );
        return Ok(());
    }

    println!("{}", style("Ranked candidates:").bold());
    for (position, candidate) in ranking.ranked.iter().enumerate() {
        let label = candidate
            .name
            .as_deref()
            .map(str::to_string)
            .or_else(|| candidate.id.map(|id| format!("candidate #{}", id)))
            .unwrap_or_else(|| "unnamed candidate".to_string());
        let mut details = Vec::new();
        if let Some(degree) = candidate.degree {
            details.push(degree.to_string());
        }
        if let Some(years) = candidate.years_experience {
            details.push(format!("{} yrs", years));
        }
        if candidate.has_certifications {
            details.push("certified".to_string());
        }
        let suffix = if details.is_empty() {
            String::new()
        } else {
            format!(" ({})", details.join(", "))
        };
        println!("  {:>2}. {}{}", position + 1, label, suffix);
    }

    if !ranking.rationale.is_empty() {
        println!();
        println!("{} {}", style("Rationale:").bold(), ranking.rationale);
    }

    Ok(())
}
