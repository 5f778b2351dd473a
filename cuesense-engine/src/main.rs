//! cuesense CLI: classify tracks from their feature-vector JSON files.
//!
//! Audio decoding and feature extraction happen upstream (or through the
//! library API); the binary takes one extracted vector per file, runs the
//! analyses concurrently and prints each result as JSON in argument order.
//! Per-file error isolation: one unreadable file does not stop the rest,
//! but any failure makes the exit status non-zero.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use futures::future::join_all;
use tracing::{info, warn};

use cuesense_common::model::{FeatureVector, TrackAnalysis};
use cuesense_common::vocabulary::StaticVocabulary;
use cuesense_engine::config::EngineConfig;
use cuesense_engine::llm::{LlmService, OpenAiProvider};
use cuesense_engine::orchestrator::HybridOrchestrator;
use cuesense_engine::profiles::ProfileTable;

/// Classify music tracks from their acoustic feature vectors
#[derive(Parser, Debug)]
#[command(name = "cuesense", version, about)]
struct Cli {
    /// Feature-vector JSON files produced by the extractor
    #[arg(required = true)]
    features: Vec<PathBuf>,

    /// Config file; falls back to CUESENSE_CONFIG, then ./cuesense.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the LLM judges and classify rule-only
    #[arg(long)]
    no_llm: bool,

    /// Genre tag from the tracks' metadata, if any
    #[arg(long)]
    genre: Option<String>,

    /// Pretty-print the result JSON
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    info!("cuesense v{}", env!("CARGO_PKG_VERSION"));

    let mut config = EngineConfig::load(cli.config.as_deref())?;
    if cli.no_llm {
        config.llm.enabled = false;
    }

    let service = build_service(&config)?;
    let orchestrator = HybridOrchestrator::new(
        config,
        ProfileTable::builtin(),
        service,
        Arc::new(StaticVocabulary::new()),
    );

    let analyses = cli.features.iter().map(|path| {
        let orchestrator = &orchestrator;
        let genre = cli.genre.as_deref();
        async move {
            match analyze_file(orchestrator, path, genre).await {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "analysis failed");
                    None
                }
            }
        }
    });

    let mut failed = 0usize;
    for analysis in join_all(analyses).await {
        match analysis {
            Some(analysis) => {
                let rendered = if cli.pretty {
                    serde_json::to_string_pretty(&analysis)?
                } else {
                    serde_json::to_string(&analysis)?
                };
                println!("{rendered}");
            }
            None => failed += 1,
        }
    }
    if failed > 0 {
        bail!("{failed} of {} analyses failed", cli.features.len());
    }
    Ok(())
}

/// Load one feature-vector file and run the full analysis on it
async fn analyze_file(
    orchestrator: &HybridOrchestrator,
    path: &Path,
    genre: Option<&str>,
) -> Result<TrackAnalysis> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let features: FeatureVector =
        serde_json::from_str(&raw).context("feature-vector JSON did not parse")?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(orchestrator.analyze(&features, &file_name, genre).await?)
}

/// LLM service when the config enables it; `None` runs rule-only
fn build_service(config: &EngineConfig) -> Result<Option<Arc<LlmService>>> {
    if !config.llm.enabled {
        info!("LLM layer disabled, running rule-only");
        return Ok(None);
    }
    let provider = OpenAiProvider::new(
        config.llm.endpoint.clone(),
        config.llm.api_key.clone(),
        Duration::from_secs(config.llm.timeout_secs),
    )?;
    Ok(Some(Arc::new(LlmService::new(
        Arc::new(provider),
        &config.llm,
    ))))
}
