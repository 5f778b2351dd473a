//! Engine configuration.
//!
//! Every hand-tuned threshold the classifiers use lives here with its
//! historical default, so deployments can retune without code changes.
//! Resolution priority for the file itself: CLI flag, then
//! `CUESENSE_CONFIG`, then `cuesense.toml` in the working directory,
//! then compiled defaults. The LLM API key additionally resolves from
//! `CUESENSE_LLM_API_KEY` (ENV beats TOML for secrets).

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use cuesense_common::config as common_config;
use cuesense_common::{Error, Result};

/// Environment variable holding the LLM API key
pub const LLM_API_KEY_ENV: &str = "CUESENSE_LLM_API_KEY";

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scorer: ScorerConfig,
    pub fusion: FusionConfig,
    pub structure: StructureConfig,
    pub llm: LlmConfig,
}

/// Rule-scorer tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Multiplier applied after profile weighting. Values above 1.0 can
    /// push a near-perfect match's confidence past 1.0; consumers do not
    /// clamp, so lower this if a strict 0-1 range is required.
    pub amplification: f64,
    /// Candidates at or below this score are discarded
    pub keep_threshold: f64,
    /// Number of runner-up emotions reported
    pub secondary_count: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        ScorerConfig {
            amplification: 1.1,
            keep_threshold: 0.25,
            secondary_count: 5,
        }
    }
}

/// How the emotion sources are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FusionMode {
    /// Rule scorer and LLM judge run concurrently
    Parallel,
    /// Rule scorer first; LLM only consulted when the rule result is weak
    /// or the track is complex
    Serial,
}

/// Emotion- and scene-fusion tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    pub mode: FusionMode,
    /// Weight of the rule source in hybrid merges
    pub rule_weight: f64,
    /// Weight of the LLM source in hybrid merges
    pub llm_weight: f64,
    /// Serial mode: rule confidence at or above this skips the LLM
    pub serial_rule_threshold: f64,
    /// Cap on merged secondary emotions
    pub secondary_cap: usize,
    /// Minimum confidence (0-100) per scene matcher
    pub scene_thresholds: SceneThresholds,
}

impl Default for FusionConfig {
    fn default() -> Self {
        FusionConfig {
            mode: FusionMode::Parallel,
            rule_weight: 0.3,
            llm_weight: 0.7,
            serial_rule_threshold: 0.7,
            secondary_cap: 5,
            scene_thresholds: SceneThresholds::default(),
        }
    }
}

/// Per-matcher acceptance thresholds, 0-100.
/// The LLM matcher is historically unthresholded (0); raise it to drop
/// low-confidence model guesses.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneThresholds {
    pub linkage: u8,
    pub audio: u8,
    pub target: u8,
    pub llm: u8,
}

impl Default for SceneThresholds {
    fn default() -> Self {
        SceneThresholds {
            linkage: 80,
            audio: 75,
            target: 80,
            llm: 0,
        }
    }
}

/// Structural-analysis gating
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    pub enabled: bool,
    /// Complexity predicate thresholds; any one exceeded marks the track
    /// complex
    pub complexity: ComplexityThresholds,
    /// Dynamic range above this selects the four-segment layout
    pub four_segment_dynamic_range: f64,
}

impl Default for StructureConfig {
    fn default() -> Self {
        StructureConfig {
            enabled: true,
            complexity: ComplexityThresholds::default(),
            four_segment_dynamic_range: 40.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComplexityThresholds {
    /// Dynamic range in dB
    pub dynamic_range: f64,
    /// Texture layering, 0-10
    pub texture_layers: f64,
    /// Rhythm complexity, 0-10
    pub rhythm_complexity: f64,
    /// High-band level, 0-10
    pub high_band: f64,
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        ComplexityThresholds {
            dynamic_range: 30.0,
            texture_layers: 6.0,
            rhythm_complexity: 6.0,
            high_band: 6.0,
        }
    }
}

/// LLM call-layer settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Disable to run rule-only (no network)
    pub enabled: bool,
    /// OpenAI-compatible chat-completions endpoint
    pub endpoint: String,
    pub model: String,
    /// Resolved from `CUESENSE_LLM_API_KEY` when absent here
    pub api_key: Option<String>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Response-cache time to live
    pub cache_ttl_secs: u64,
    /// Response-cache entry cap
    pub cache_capacity: usize,
    /// Concurrent outbound requests
    pub max_concurrency: usize,
    /// Attempts per call (first try included)
    pub max_attempts: u32,
    /// Linear backoff base between attempts
    pub backoff_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            enabled: true,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            temperature: 0.2,
            max_tokens: 1000,
            timeout_secs: 30,
            cache_ttl_secs: 300,
            cache_capacity: 256,
            max_concurrency: 5,
            max_attempts: 3,
            backoff_ms: 500,
        }
    }
}

impl EngineConfig {
    /// Load configuration with the documented priority, then apply
    /// environment overrides.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        let mut config = match common_config::resolve_config_path(cli_path) {
            Some(path) => {
                info!(path = %path.display(), "loading engine config");
                common_config::load_toml::<EngineConfig>(&path)?
            }
            None => {
                info!("no config file found, using compiled defaults");
                EngineConfig::default()
            }
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// ENV beats TOML for the API key so secrets can stay out of files
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(LLM_API_KEY_ENV) {
            if !key.trim().is_empty() {
                if self.llm.api_key.is_some() {
                    warn!(
                        "LLM API key found in both config file and {}; using environment",
                        LLM_API_KEY_ENV
                    );
                }
                self.llm.api_key = Some(key);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.fusion.rule_weight < 0.0 || self.fusion.llm_weight < 0.0 {
            return Err(Error::Config("fusion weights must be non-negative".into()));
        }
        if self.fusion.rule_weight + self.fusion.llm_weight <= 0.0 {
            return Err(Error::Config("fusion weights must not both be zero".into()));
        }
        if self.llm.max_attempts == 0 {
            return Err(Error::Config("llm.max_attempts must be at least 1".into()));
        }
        if self.llm.max_concurrency == 0 {
            return Err(Error::Config("llm.max_concurrency must be at least 1".into()));
        }
        if self.scorer.keep_threshold < 0.0 {
            return Err(Error::Config("scorer.keep_threshold must be >= 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_carry_historical_values() {
        let config = EngineConfig::default();
        assert_eq!(config.scorer.amplification, 1.1);
        assert_eq!(config.scorer.keep_threshold, 0.25);
        assert_eq!(config.fusion.rule_weight, 0.3);
        assert_eq!(config.fusion.llm_weight, 0.7);
        assert_eq!(config.fusion.serial_rule_threshold, 0.7);
        assert_eq!(config.fusion.scene_thresholds.linkage, 80);
        assert_eq!(config.fusion.scene_thresholds.audio, 75);
        assert_eq!(config.fusion.scene_thresholds.target, 80);
        assert_eq!(config.structure.four_segment_dynamic_range, 40.0);
        assert_eq!(config.llm.max_concurrency, 5);
        assert_eq!(config.llm.cache_ttl_secs, 300);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[fusion]\nmode = \"serial\"\nrule_weight = 0.5\nllm_weight = 0.5"
        )
        .unwrap();
        let config: EngineConfig =
            cuesense_common::config::load_toml(file.path()).unwrap();
        assert_eq!(config.fusion.mode, FusionMode::Serial);
        assert_eq!(config.fusion.rule_weight, 0.5);
        // untouched sections fall back to defaults
        assert_eq!(config.scorer.amplification, 1.1);
        assert_eq!(config.llm.max_attempts, 3);
    }

    #[test]
    fn test_zero_weights_rejected() {
        let mut config = EngineConfig::default();
        config.fusion.rule_weight = 0.0;
        config.fusion.llm_weight = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut config = EngineConfig::default();
        config.llm.max_attempts = 0;
        assert!(config.validate().is_err());
    }
}
