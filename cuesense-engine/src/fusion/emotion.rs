//! Emotion fusion engine.
//!
//! Runs the rule scorer and the LLM emotion judge and reconciles their
//! results. In parallel mode both sources run concurrently; in serial
//! mode the LLM is only consulted when the rule result is weak or the
//! track is complex. One failed source degrades to the survivor; both
//! failing is an aggregate error, never a synthesized default.

use tracing::{debug, warn};

use cuesense_common::model::{AnalysisMethod, EmotionResult, FeatureVector, MoodDimensions};

use crate::config::{ComplexityThresholds, FusionConfig, FusionMode};
use crate::error::{EngineError, Result};
use crate::llm::EmotionJudge;
use crate::profiles::ProfileTable;
use crate::scoring::RuleEmotionScorer;
use crate::structure::StructuralFeatures;

/// One emotion source's contribution, tagged with its provenance so the
/// fusion strategy can see which sources are present.
#[derive(Debug, Clone)]
pub enum MoodSignal {
    Rule(EmotionResult),
    Llm(EmotionResult),
}

impl MoodSignal {
    pub fn result(&self) -> &EmotionResult {
        match self {
            MoodSignal::Rule(r) | MoodSignal::Llm(r) => r,
        }
    }
}

pub struct EmotionFusionEngine {
    scorer: RuleEmotionScorer,
    profiles: ProfileTable,
    judge: Option<EmotionJudge>,
    config: FusionConfig,
    complexity: ComplexityThresholds,
}

impl EmotionFusionEngine {
    pub fn new(
        scorer: RuleEmotionScorer,
        profiles: ProfileTable,
        judge: Option<EmotionJudge>,
        config: FusionConfig,
        complexity: ComplexityThresholds,
    ) -> Self {
        EmotionFusionEngine {
            scorer,
            profiles,
            judge,
            config,
            complexity,
        }
    }

    /// Classify the track's emotion from every configured source
    pub async fn analyze(&self, features: &FeatureVector) -> Result<EmotionResult> {
        match (&self.judge, self.config.mode) {
            (None, _) => self.rule_only(features),
            (Some(judge), FusionMode::Parallel) => self.parallel(features, judge).await,
            (Some(judge), FusionMode::Serial) => self.serial(features, judge).await,
        }
    }

    fn rule_only(&self, features: &FeatureVector) -> Result<EmotionResult> {
        match self.scorer.classify(features, &self.profiles) {
            Ok(result) => Ok(result),
            Err(e) => Err(EngineError::AllSourcesFailed {
                reasons: vec![e.to_string()],
            }),
        }
    }

    async fn parallel(&self, features: &FeatureVector, judge: &EmotionJudge) -> Result<EmotionResult> {
        let (rule, llm) = tokio::join!(
            async { self.scorer.classify(features, &self.profiles) },
            judge.judge(features),
        );
        let (signals, failures) = collect_signals(rule, llm);
        self.fuse(signals, failures)
    }

    /// Serial mode: a confident rule result on a non-complex track skips
    /// the network call entirely.
    async fn serial(&self, features: &FeatureVector, judge: &EmotionJudge) -> Result<EmotionResult> {
        let rule = self.scorer.classify(features, &self.profiles);
        if let Ok(result) = &rule {
            let complex = StructuralFeatures::from_features(features).is_complex(&self.complexity);
            if result.confidence >= self.config.serial_rule_threshold && !complex {
                debug!(
                    confidence = result.confidence,
                    "rule result confident, skipping LLM"
                );
                return Ok(result.clone());
            }
        }
        let llm = judge.judge(features).await;
        let (signals, failures) = collect_signals(rule, llm);
        self.fuse(signals, failures)
    }

    /// Fusion strategy over whatever signals settled successfully
    pub fn fuse(&self, signals: Vec<MoodSignal>, failures: Vec<String>) -> Result<EmotionResult> {
        let mut rule = None;
        let mut llm = None;
        for signal in signals {
            match signal {
                MoodSignal::Rule(r) => rule = Some(r),
                MoodSignal::Llm(l) => llm = Some(l),
            }
        }

        match (rule, llm) {
            (Some(rule), Some(llm)) => Ok(self.merge(rule, llm)),
            (Some(rule), None) => {
                warn!("LLM emotion source unavailable, using rule result alone");
                Ok(rule)
            }
            (None, Some(llm)) => {
                warn!("rule emotion source unavailable, using LLM result alone");
                Ok(llm)
            }
            (None, None) => Err(EngineError::AllSourcesFailed { reasons: failures }),
        }
    }

    /// Weighted merge of two successful sources
    fn merge(&self, rule: EmotionResult, llm: EmotionResult) -> EmotionResult {
        let rule_weight = self.config.rule_weight;
        let llm_weight = self.config.llm_weight;
        let wavg =
            |a: f64, b: f64| (a * rule_weight + b * llm_weight) / (rule_weight + llm_weight);

        let primary = if rule.confidence >= llm.confidence {
            rule.primary.clone()
        } else {
            llm.primary.clone()
        };

        // Union of both secondary lists, winner's entries first
        let (first, second) = if rule.confidence >= llm.confidence {
            (&rule.secondary, &llm.secondary)
        } else {
            (&llm.secondary, &rule.secondary)
        };
        let mut secondary: Vec<String> = Vec::new();
        for term in first.iter().chain(second.iter()) {
            if *term != primary && !secondary.contains(term) {
                secondary.push(term.clone());
            }
        }
        secondary.truncate(self.config.secondary_cap);

        let intensity = wavg(f64::from(rule.intensity), f64::from(llm.intensity))
            .round()
            .clamp(1.0, 10.0) as u8;
        let dimensions = MoodDimensions {
            happiness: wavg(rule.dimensions.happiness, llm.dimensions.happiness),
            sadness: wavg(rule.dimensions.sadness, llm.dimensions.sadness),
            tension: wavg(rule.dimensions.tension, llm.dimensions.tension),
            romance: wavg(rule.dimensions.romance, llm.dimensions.romance),
            epic: wavg(rule.dimensions.epic, llm.dimensions.epic),
        };
        let confidence = wavg(rule.confidence, llm.confidence);

        debug!(
            primary = %primary,
            confidence,
            rule_primary = %rule.primary,
            llm_primary = %llm.primary,
            "merged emotion sources"
        );

        EmotionResult {
            primary,
            secondary,
            intensity,
            dimensions,
            confidence,
            method: AnalysisMethod::Hybrid,
        }
    }
}

fn collect_signals(
    rule: std::result::Result<EmotionResult, EngineError>,
    llm: std::result::Result<EmotionResult, EngineError>,
) -> (Vec<MoodSignal>, Vec<String>) {
    let mut signals = Vec::new();
    let mut failures = Vec::new();
    match rule {
        Ok(r) => signals.push(MoodSignal::Rule(r)),
        Err(e) => failures.push(format!("rule: {}", e)),
    }
    match llm {
        Ok(l) => signals.push(MoodSignal::Llm(l)),
        Err(e) => failures.push(format!("llm: {}", e)),
    }
    (signals, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScorerConfig;

    fn engine(config: FusionConfig) -> EmotionFusionEngine {
        EmotionFusionEngine::new(
            RuleEmotionScorer::new(ScorerConfig::default()),
            ProfileTable::builtin(),
            None,
            config,
            ComplexityThresholds::default(),
        )
    }

    fn result(primary: &str, secondary: &[&str], confidence: f64, intensity: u8) -> EmotionResult {
        EmotionResult {
            primary: primary.to_string(),
            secondary: secondary.iter().map(|s| s.to_string()).collect(),
            intensity,
            dimensions: MoodDimensions {
                happiness: 8.0,
                sadness: 1.0,
                tension: 2.0,
                romance: 3.0,
                epic: 4.0,
            },
            confidence,
            method: AnalysisMethod::RuleOnly,
        }
    }

    fn cheerful_features() -> FeatureVector {
        FeatureVector {
            spectral_centroid: 2000.0,
            spectral_rolloff: 4500.0,
            spectral_flux: 800.0,
            rms_energy: 0.6,
            low_energy: 0.3,
            mid_energy: 0.4,
            high_energy: 0.3,
            tempo: 130.0,
            rhythm_strength: 0.7,
            zero_crossing_rate: 0.12,
            harmonic_ratio: 0.65,
        }
    }

    #[test]
    fn test_merge_higher_confidence_source_names_primary() {
        let engine = engine(FusionConfig::default());
        let rule = result("欢快", &["喜悦"], 0.95, 8);
        let llm = {
            let mut r = result("悲伤", &["忧伤"], 0.6, 4);
            r.method = AnalysisMethod::LlmOnly;
            r
        };
        let fused = engine
            .fuse(vec![MoodSignal::Rule(rule), MoodSignal::Llm(llm)], vec![])
            .unwrap();
        assert_eq!(fused.primary, "欢快");
        assert_eq!(fused.method, AnalysisMethod::Hybrid);
        // confidence is the weighted average, not the winner's
        let expected = 0.95 * 0.3 + 0.6 * 0.7;
        assert!((fused.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_merge_secondary_union_deduped_and_capped() {
        let engine = engine(FusionConfig::default());
        let rule = result("欢快", &["喜悦", "活泼", "轻快"], 0.9, 8);
        let llm = result("欢快", &["喜悦", "兴奋", "阳光", "俏皮", "愉悦"], 0.8, 7);
        let fused = engine
            .fuse(vec![MoodSignal::Rule(rule), MoodSignal::Llm(llm)], vec![])
            .unwrap();
        assert_eq!(fused.secondary.len(), 5);
        // winner's list leads, duplicates collapse, primary excluded
        assert_eq!(fused.secondary[0], "喜悦");
        assert!(!fused.secondary.contains(&"欢快".to_string()));
        assert_eq!(
            fused
                .secondary
                .iter()
                .filter(|s| s.as_str() == "喜悦")
                .count(),
            1
        );
    }

    #[test]
    fn test_merge_weighted_intensity_and_dimensions() {
        let engine = engine(FusionConfig::default());
        let mut rule = result("欢快", &[], 0.9, 10);
        rule.dimensions = MoodDimensions {
            happiness: 10.0,
            ..MoodDimensions::default()
        };
        let mut llm = result("欢快", &[], 0.9, 5);
        llm.dimensions = MoodDimensions {
            happiness: 0.0,
            ..MoodDimensions::default()
        };
        let fused = engine
            .fuse(vec![MoodSignal::Rule(rule), MoodSignal::Llm(llm)], vec![])
            .unwrap();
        // 10*0.3 + 5*0.7 = 6.5 rounds to 7 (banker-free f64 rounding)
        assert_eq!(fused.intensity, 7);
        assert!((fused.dimensions.happiness - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_surviving_source_passes_through() {
        let engine = engine(FusionConfig::default());
        let rule = result("欢快", &["喜悦"], 0.9, 8);
        let fused = engine
            .fuse(
                vec![MoodSignal::Rule(rule.clone())],
                vec!["llm: timed out".to_string()],
            )
            .unwrap();
        assert_eq!(fused, rule);
        assert_eq!(fused.method, AnalysisMethod::RuleOnly);
    }

    #[test]
    fn test_no_sources_is_aggregate_failure() {
        let engine = engine(FusionConfig::default());
        let err = engine
            .fuse(
                vec![],
                vec!["rule: no candidates".to_string(), "llm: down".to_string()],
            )
            .unwrap_err();
        match err {
            EngineError::AllSourcesFailed { reasons } => assert_eq!(reasons.len(), 2),
            other => panic!("expected aggregate failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rule_only_mode_without_judge() {
        let engine = engine(FusionConfig::default());
        let result = engine.analyze(&cheerful_features()).await.unwrap();
        assert_eq!(result.method, AnalysisMethod::RuleOnly);
        assert_eq!(result.primary, "欢快");
    }

    #[tokio::test]
    async fn test_rule_only_failure_is_aggregate() {
        use crate::profiles::{EmotionProfile, ProfileTargets};
        // one profile, features miles away from it
        let table = ProfileTable::from_profiles(vec![EmotionProfile {
            name: "悲伤".to_string(),
            gloss: "sad".to_string(),
            description: String::new(),
            targets: ProfileTargets::default().tempo(60.0).energy(0.1).rhythm(0.1),
            weight: 1.0,
        }]);
        let engine = EmotionFusionEngine::new(
            RuleEmotionScorer::new(ScorerConfig::default()),
            table,
            None,
            FusionConfig::default(),
            ComplexityThresholds::default(),
        );
        let mut features = cheerful_features();
        features.tempo = 240.0;
        features.rms_energy = 1.0;
        features.rhythm_strength = 1.0;
        let err = engine.analyze(&features).await.unwrap_err();
        match err {
            EngineError::AllSourcesFailed { reasons } => assert_eq!(reasons.len(), 1),
            other => panic!("expected aggregate failure, got {:?}", other),
        }
    }
}
