//! Resume screener command-line entrypoint.
//!
//! ```text
//! screener <job-file> <resume-file>... [--json]
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use mimalloc::MiMalloc;

use screener::config::Config;
use screener::document::Document;
use screener::embedding::SentenceEmbedder;
use screener::ranking::{MatchRanker, RankedEntry, RankedReport, UnreadableResume};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: screener <job-file> <resume-file>... [--json]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    screener::extraction::install_panic_logger();

    let mut json = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => paths.push(arg),
        }
    }
    if paths.len() < 2 {
        bail!("{USAGE}");
    }

    let config = Config::from_env()?;
    config.validate()?;

    if config.model_dir.is_none() {
        tracing::warn!("No SCREENER_MODEL_DIR configured, running embedder in stub mode");
    }
    let embedder = Arc::new(SentenceEmbedder::load(config.embedder_config())?);
    let ranker = MatchRanker::new(embedder, config.ranker_config())?;

    let job = read_document(&paths[0])?;
    let resumes: Vec<_> = paths[1..]
        .iter()
        .map(|path| {
            read_document(path).map_err(|e| {
                tracing::warn!(path = %path, error = %e, "Resume could not be read");
                UnreadableResume::new(document_name(path), format!("{e:#}"))
            })
        })
        .collect();

    tracing::info!(
        job = job.name(),
        resumes = resumes.len(),
        max_concurrency = config.max_concurrency,
        "Screening resumes"
    );

    let report = ranker.rank_concurrent_inputs(&job, resumes).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.records())?);
    } else {
        print_table(&report);
    }

    Ok(())
}

fn read_document(path: &str) -> anyhow::Result<Document> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {path}"))?;
    Ok(Document::new(document_name(path), bytes))
}

fn document_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn print_table(report: &RankedReport) {
    println!("{:<4} {:<32} {:>8}  Justification", "Rank", "Resume", "Score");
    for (rank, entry) in report.entries().iter().enumerate() {
        match entry {
            RankedEntry::Scored(result) => println!(
                "{:<4} {:<32} {:>7.2}%  {}",
                rank + 1,
                result.resume_name,
                result.score,
                result.justification
            ),
            RankedEntry::Failed(failure) => println!(
                "{:<4} {:<32} {:>8}  {}: {}",
                "-", failure.resume_name, "failed", failure.kind, failure.reason
            ),
        }
    }
}
