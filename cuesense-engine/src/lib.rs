//! # Cuesense Engine
//!
//! Hybrid music-track classification: deterministic acoustic-profile
//! matching fused with LLM judgment into one ranked, confidence-scored
//! result per track. Layers:
//! - Feature extraction from decoded PCM (`features`)
//! - Emotion profile catalogue and rule scorer (`profiles`, `scoring`)
//! - LLM call layer with cache, de-duplication and retry (`llm`)
//! - Emotion and scene fusion (`fusion`), film-genre inference (`genres`)
//! - Structural segmentation and trajectory (`structure`)
//! - The pipeline orchestrator tying it together (`orchestrator`)

pub mod config;
pub mod error;
pub mod features;
pub mod fusion;
pub mod genres;
pub mod llm;
pub mod orchestrator;
pub mod profiles;
pub mod scoring;
pub mod structure;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use orchestrator::HybridOrchestrator;
