//! Deterministic emotion scoring against the profile catalogue.
//!
//! Each profile is compared dimension-by-dimension with a linear
//! similarity `max(0, 1 - |actual - target| * tolerance)`; the mean over
//! the profile's set dimensions is weighted and amplified into the final
//! score. Amplification above 1.0 means a near-perfect match can score
//! past 1.0; downstream ranking relies on those scores staying
//! unclamped.

use tracing::debug;

use cuesense_common::model::{AnalysisMethod, EmotionResult, FeatureVector, MoodDimensions};

use crate::config::ScorerConfig;
use crate::error::EngineError;
use crate::profiles::{EmotionProfile, ProfileTable};

/// Centroid differences are normalized against this span
const CENTROID_NORM_HZ: f64 = 4000.0;
/// Flux differences are normalized against this span
const FLUX_NORM: f64 = 1000.0;
/// Band shares move in a narrow range, so mismatches count heavily
const BAND_TOLERANCE: f64 = 2.5;
const ENERGY_TOLERANCE: f64 = 2.0;
const RHYTHM_TOLERANCE: f64 = 2.0;
const HARMONIC_TOLERANCE: f64 = 2.0;

/// One ranked catalogue candidate
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileScore {
    pub name: String,
    pub score: f64,
}

/// Catalogue-driven emotion scorer
pub struct RuleEmotionScorer {
    config: ScorerConfig,
}

impl RuleEmotionScorer {
    pub fn new(config: ScorerConfig) -> Self {
        RuleEmotionScorer { config }
    }

    /// Score every profile and rank descending. Candidates at or below
    /// the keep threshold are dropped.
    pub fn score(&self, features: &FeatureVector, table: &ProfileTable) -> Vec<ProfileScore> {
        let mut scores: Vec<ProfileScore> = table
            .iter()
            .filter_map(|profile| {
                self.profile_score(features, profile).map(|score| ProfileScore {
                    name: profile.name.clone(),
                    score,
                })
            })
            .filter(|candidate| candidate.score > self.config.keep_threshold)
            .collect();
        scores.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scores
    }

    /// Full rule-side classification: ranked candidates plus intensity
    /// and mood dimensions derived from the feature vector.
    pub fn classify(
        &self,
        features: &FeatureVector,
        table: &ProfileTable,
    ) -> Result<EmotionResult, EngineError> {
        let scores = self.score(features, table);
        let Some(top) = scores.first() else {
            return Err(EngineError::Judge {
                judge: "rule".to_string(),
                reason: "no profile cleared the keep threshold".to_string(),
            });
        };

        let secondary: Vec<String> = scores
            .iter()
            .skip(1)
            .take(self.config.secondary_count)
            .map(|c| c.name.clone())
            .collect();

        debug!(
            primary = %top.name,
            score = top.score,
            candidates = scores.len(),
            "rule classification"
        );

        Ok(EmotionResult {
            primary: top.name.clone(),
            secondary,
            intensity: derive_intensity(features),
            dimensions: derive_dimensions(features),
            // Unclamped: amplification can legitimately push this past 1.0
            confidence: top.score,
            method: AnalysisMethod::RuleOnly,
        })
    }

    /// Mean similarity over the profile's set dimensions, weighted and
    /// amplified. `None` when the profile sets no dimensions.
    fn profile_score(&self, features: &FeatureVector, profile: &EmotionProfile) -> Option<f64> {
        let targets = &profile.targets;
        let mut sum = 0.0;
        let mut active = 0u32;

        let mut add = |similarity: f64| {
            sum += similarity;
            active += 1;
        };

        if let Some(target) = targets.energy {
            add(linear_similarity(features.rms_energy, target, ENERGY_TOLERANCE));
        }
        if let Some(target) = targets.low {
            add(linear_similarity(features.low_energy, target, BAND_TOLERANCE));
        }
        if let Some(target) = targets.mid {
            add(linear_similarity(features.mid_energy, target, BAND_TOLERANCE));
        }
        if let Some(target) = targets.high {
            add(linear_similarity(features.high_energy, target, BAND_TOLERANCE));
        }
        if let Some(target) = targets.tempo {
            // Tempo tolerance scales with the target itself
            add(linear_similarity(features.tempo, target, 1.0 / target));
        }
        if let Some(target) = targets.rhythm {
            add(linear_similarity(features.rhythm_strength, target, RHYTHM_TOLERANCE));
        }
        if let Some(target) = targets.centroid {
            add(linear_similarity(
                features.spectral_centroid,
                target,
                1.0 / CENTROID_NORM_HZ,
            ));
        }
        if let Some(target) = targets.flux {
            add(linear_similarity(features.spectral_flux, target, 1.0 / FLUX_NORM));
        }
        if let Some(target) = targets.harmonic {
            add(linear_similarity(
                features.harmonic_ratio,
                target,
                HARMONIC_TOLERANCE,
            ));
        }

        if active == 0 {
            return None;
        }
        Some(sum / f64::from(active) * profile.weight * self.config.amplification)
    }
}

fn linear_similarity(actual: f64, target: f64, tolerance: f64) -> f64 {
    (1.0 - (actual - target).abs() * tolerance).max(0.0)
}

/// Track-level intensity, 1-10, from energy and rhythm
pub fn derive_intensity(features: &FeatureVector) -> u8 {
    let raw = features.rms_energy * 6.0 + features.rhythm_strength * 4.0;
    (raw.round() as i64).clamp(1, 10) as u8
}

/// Deterministic mood-axis estimates from the feature vector.
///
/// These back the rule-only path so it emits a complete result; the
/// hybrid path averages them with the LLM's estimates.
pub fn derive_dimensions(features: &FeatureVector) -> MoodDimensions {
    let tempo_lift = ((features.tempo - 70.0) / 80.0).clamp(0.0, 1.0);
    let mid_share = (features.mid_energy / 0.5).clamp(0.0, 1.0);
    let low_share = (features.low_energy / 0.5).clamp(0.0, 1.0);
    let flux_level = (features.spectral_flux / FLUX_NORM).clamp(0.0, 1.0);
    let harmonic = features.harmonic_ratio;
    let energy = features.rms_energy;

    MoodDimensions {
        happiness: 10.0 * (0.4 * tempo_lift + 0.3 * harmonic + 0.3 * mid_share),
        sadness: 10.0 * (0.5 * (1.0 - tempo_lift) + 0.3 * (1.0 - energy) + 0.2 * harmonic),
        tension: 10.0 * (0.4 * flux_level + 0.4 * (1.0 - harmonic) + 0.2 * low_share),
        romance: 10.0 * (0.5 * harmonic + 0.3 * (1.0 - tempo_lift) + 0.2 * (1.0 - energy)),
        epic: 10.0 * (0.5 * energy + 0.3 * low_share + 0.2 * features.rhythm_strength),
    }
    .clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ProfileTargets;

    fn cheerful_features() -> FeatureVector {
        FeatureVector {
            spectral_centroid: 2000.0,
            spectral_rolloff: 4200.0,
            spectral_flux: 800.0,
            rms_energy: 0.6,
            low_energy: 0.3,
            mid_energy: 0.4,
            high_energy: 0.4,
            tempo: 130.0,
            rhythm_strength: 0.7,
            zero_crossing_rate: 0.12,
            harmonic_ratio: 0.65,
        }
    }

    fn scorer() -> RuleEmotionScorer {
        RuleEmotionScorer::new(ScorerConfig::default())
    }

    const CHEERFUL_FAMILY: &[&str] = &[
        "欢快", "快乐", "喜悦", "兴奋", "活泼", "轻快", "愉悦", "阳光", "俏皮", "庆典",
        "狂欢", "幸福",
    ];

    #[test]
    fn test_scores_sorted_descending() {
        let table = ProfileTable::builtin();
        let scores = scorer().score(&cheerful_features(), &table);
        assert!(!scores.is_empty());
        for pair in scores.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_keep_threshold_enforced() {
        let table = ProfileTable::builtin();
        let scores = scorer().score(&cheerful_features(), &table);
        for candidate in &scores {
            assert!(candidate.score > 0.25, "{} at {}", candidate.name, candidate.score);
        }
    }

    #[test]
    fn test_cheerful_track_ranks_cheerful_family_first() {
        let table = ProfileTable::builtin();
        let result = scorer().classify(&cheerful_features(), &table).unwrap();
        assert!(
            CHEERFUL_FAMILY.contains(&result.primary.as_str()),
            "primary was {}",
            result.primary
        );
        // A grieving profile must score far below the winner
        let scores = scorer().score(&cheerful_features(), &table);
        let top = scores[0].score;
        let sad = scores.iter().find(|c| c.name == "悲伤");
        if let Some(sad) = sad {
            assert!(sad.score < top * 0.8);
        }
    }

    #[test]
    fn test_secondary_is_next_five() {
        let table = ProfileTable::builtin();
        let scores = scorer().score(&cheerful_features(), &table);
        let result = scorer().classify(&cheerful_features(), &table).unwrap();
        assert_eq!(result.secondary.len(), 5);
        for (i, name) in result.secondary.iter().enumerate() {
            assert_eq!(name, &scores[i + 1].name);
        }
    }

    #[test]
    fn test_exact_match_exceeds_unity_confidence() {
        // A profile matching the features exactly scores
        // mean 1.0 * weight 1.0 * amplification 1.1 = 1.1.
        let features = cheerful_features();
        let table = ProfileTable::from_profiles(vec![crate::profiles::EmotionProfile {
            name: "欢快".to_string(),
            gloss: "cheerful".to_string(),
            description: "exact".to_string(),
            targets: ProfileTargets::default()
                .tempo(features.tempo)
                .energy(features.rms_energy)
                .rhythm(features.rhythm_strength)
                .centroid(features.spectral_centroid)
                .flux(features.spectral_flux)
                .harmonic(features.harmonic_ratio),
            weight: 1.0,
        }]);
        let result = scorer().classify(&features, &table).unwrap();
        assert!(result.confidence > 1.0, "confidence {}", result.confidence);
        assert!((result.confidence - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_weight_orders_equal_profiles() {
        let features = cheerful_features();
        let exact = ProfileTargets::default().tempo(130.0).energy(0.6);
        let table = ProfileTable::from_profiles(vec![
            crate::profiles::EmotionProfile {
                name: "快乐".to_string(),
                gloss: "happy".to_string(),
                description: String::new(),
                targets: exact.clone(),
                weight: 0.8,
            },
            crate::profiles::EmotionProfile {
                name: "欢快".to_string(),
                gloss: "cheerful".to_string(),
                description: String::new(),
                targets: exact,
                weight: 1.0,
            },
        ]);
        let scores = scorer().score(&features, &table);
        assert_eq!(scores[0].name, "欢快");
        assert_eq!(scores[1].name, "快乐");
    }

    #[test]
    fn test_no_candidates_is_a_judge_failure() {
        let table = ProfileTable::from_profiles(vec![crate::profiles::EmotionProfile {
            name: "悲伤".to_string(),
            gloss: "sad".to_string(),
            description: String::new(),
            targets: ProfileTargets::default().tempo(60.0).energy(0.1).rhythm(0.1),
            weight: 1.0,
        }]);
        // Features miles away from the lone profile
        let mut features = cheerful_features();
        features.tempo = 240.0;
        features.rms_energy = 1.0;
        features.rhythm_strength = 1.0;
        let err = scorer().classify(&features, &table).unwrap_err();
        assert!(matches!(err, EngineError::Judge { .. }));
    }

    #[test]
    fn test_profile_without_targets_never_scores() {
        let table = ProfileTable::from_profiles(vec![crate::profiles::EmotionProfile {
            name: "欢快".to_string(),
            gloss: "cheerful".to_string(),
            description: String::new(),
            targets: ProfileTargets::default(),
            weight: 1.0,
        }]);
        assert!(scorer().score(&cheerful_features(), &table).is_empty());
    }

    #[test]
    fn test_intensity_range_and_monotonicity() {
        let mut quiet = cheerful_features();
        quiet.rms_energy = 0.05;
        quiet.rhythm_strength = 0.05;
        let mut loud = cheerful_features();
        loud.rms_energy = 0.95;
        loud.rhythm_strength = 0.9;
        let qi = derive_intensity(&quiet);
        let li = derive_intensity(&loud);
        assert!((1..=10).contains(&qi));
        assert!((1..=10).contains(&li));
        assert!(li > qi);
    }

    #[test]
    fn test_dimensions_reflect_character() {
        let cheerful = derive_dimensions(&cheerful_features());
        assert!(cheerful.happiness > cheerful.sadness);

        let mut dirge = cheerful_features();
        dirge.tempo = 60.0;
        dirge.rms_energy = 0.2;
        dirge.spectral_flux = 120.0;
        dirge.harmonic_ratio = 0.85;
        dirge.rhythm_strength = 0.15;
        let sad = derive_dimensions(&dirge);
        assert!(sad.sadness > sad.happiness);
        assert!(sad.tension < cheerful.tension);
    }
}
