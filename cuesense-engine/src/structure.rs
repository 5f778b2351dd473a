//! Structural (multi-segment) analysis.
//!
//! Wide-dynamics tracks get decomposed into four segments (intro,
//! development, climax, outro), narrower ones into two; each segment is
//! rescored against the profile catalogue at scaled feature values and
//! the per-segment moods roll up into a whole-track emotional
//! trajectory. The complexity predicate here also gates whether the
//! orchestrator runs this pass at all.

use tracing::debug;

use cuesense_common::model::{
    DynamicLevel, EmotionalTrajectory, FeatureVector, MoodTransition, SegmentAnalysis,
    SegmentFeatures, SegmentKind, SegmentMood, Smoothness, TimeRange, TrajectoryPoint, Trend,
};

use crate::config::{ComplexityThresholds, StructureConfig};
use crate::error::Result;
use crate::profiles::ProfileTable;
use crate::scoring::RuleEmotionScorer;

/// Secondary moods reported per segment
const SEGMENT_SECONDARY_CAP: usize = 2;
/// Dominant-emotion accumulation: a segment's primary counts double
const PRIMARY_WEIGHT: f64 = 2.0;
const SECONDARY_WEIGHT: f64 = 1.0;
/// Climax contributions count extra in the dominant-emotion tally
const CLIMAX_BOOST: f64 = 1.5;
/// dB floor reported for silent segments
const SILENCE_DB: f64 = -60.0;

/// Track-level structural descriptors derived from the feature vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralFeatures {
    /// Dynamic range estimate in dB
    pub dynamic_range: f64,
    /// Texture layering, 0-10
    pub texture_layers: f64,
    /// Rhythm complexity, 0-10
    pub rhythm_complexity: f64,
    /// High-band level, 0-10
    pub high_band: f64,
}

impl StructuralFeatures {
    pub fn from_features(features: &FeatureVector) -> Self {
        StructuralFeatures {
            dynamic_range: features.rms_energy * 75.0,
            texture_layers: features.harmonic_ratio * 10.0,
            rhythm_complexity: features.rhythm_strength * 10.0,
            high_band: features.high_energy * 10.0,
        }
    }

    /// Any single exceeded threshold marks the track complex
    pub fn is_complex(&self, thresholds: &ComplexityThresholds) -> bool {
        self.dynamic_range > thresholds.dynamic_range
            || self.texture_layers > thresholds.texture_layers
            || self.rhythm_complexity > thresholds.rhythm_complexity
            || self.high_band > thresholds.high_band
    }
}

/// Fixed per-segment scaling relative to track-level values
struct SegmentPlan {
    kind: SegmentKind,
    start_pct: f64,
    end_pct: f64,
    bpm_scale: f64,
    energy_scale: f64,
    complexity_scale: f64,
}

const FOUR_SEGMENTS: &[SegmentPlan] = &[
    SegmentPlan {
        kind: SegmentKind::Intro,
        start_pct: 0.0,
        end_pct: 15.0,
        bpm_scale: 0.92,
        energy_scale: 0.6,
        complexity_scale: 0.7,
    },
    SegmentPlan {
        kind: SegmentKind::Development,
        start_pct: 15.0,
        end_pct: 50.0,
        bpm_scale: 1.0,
        energy_scale: 1.0,
        complexity_scale: 1.0,
    },
    SegmentPlan {
        kind: SegmentKind::Climax,
        start_pct: 50.0,
        end_pct: 85.0,
        bpm_scale: 1.05,
        energy_scale: 1.2,
        complexity_scale: 1.2,
    },
    SegmentPlan {
        kind: SegmentKind::Outro,
        start_pct: 85.0,
        end_pct: 100.0,
        bpm_scale: 0.95,
        energy_scale: 0.5,
        complexity_scale: 0.6,
    },
];

const TWO_SEGMENTS: &[SegmentPlan] = &[
    SegmentPlan {
        kind: SegmentKind::Intro,
        start_pct: 0.0,
        end_pct: 40.0,
        bpm_scale: 1.0,
        energy_scale: 1.0,
        complexity_scale: 1.0,
    },
    SegmentPlan {
        kind: SegmentKind::Development,
        start_pct: 40.0,
        end_pct: 100.0,
        bpm_scale: 1.0,
        energy_scale: 1.0,
        complexity_scale: 1.0,
    },
];

/// Output of the full structural pass
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralAnalysis {
    pub segments: Vec<SegmentAnalysis>,
    pub trajectory: EmotionalTrajectory,
}

pub struct StructuralAnalyzer {
    scorer: RuleEmotionScorer,
    profiles: ProfileTable,
    config: StructureConfig,
}

impl StructuralAnalyzer {
    pub fn new(scorer: RuleEmotionScorer, profiles: ProfileTable, config: StructureConfig) -> Self {
        StructuralAnalyzer {
            scorer,
            profiles,
            config,
        }
    }

    /// Whether the orchestrator should run the structural pass at all
    pub fn should_analyze(&self, features: &FeatureVector) -> bool {
        self.config.enabled
            && StructuralFeatures::from_features(features).is_complex(&self.config.complexity)
    }

    /// Full structural pass: segments plus the derived trajectory
    pub fn analyze(&self, features: &FeatureVector) -> Result<StructuralAnalysis> {
        let segments = self.segment(features)?;
        let trajectory = derive_trajectory(&segments);
        Ok(StructuralAnalysis {
            segments,
            trajectory,
        })
    }

    /// Decompose the track into 2 or 4 segments. Ranges always partition
    /// [0,100] contiguously.
    pub fn segment(&self, features: &FeatureVector) -> Result<Vec<SegmentAnalysis>> {
        let structural = StructuralFeatures::from_features(features);
        let plan = if structural.dynamic_range > self.config.four_segment_dynamic_range {
            FOUR_SEGMENTS
        } else {
            TWO_SEGMENTS
        };
        debug!(
            dynamic_range = structural.dynamic_range,
            segments = plan.len(),
            "segment layout selected"
        );
        plan.iter()
            .map(|entry| self.build_segment(features, &structural, entry))
            .collect()
    }

    fn build_segment(
        &self,
        features: &FeatureVector,
        structural: &StructuralFeatures,
        plan: &SegmentPlan,
    ) -> Result<SegmentAnalysis> {
        let scaled = scale_features(features, plan);
        let classified = self.scorer.classify(&scaled, &self.profiles)?;
        let mut secondary = classified.secondary;
        secondary.truncate(SEGMENT_SECONDARY_CAP);

        Ok(SegmentAnalysis {
            segment: plan.kind,
            time_range: TimeRange::new(plan.start_pct, plan.end_pct),
            mood: SegmentMood {
                primary: classified.primary,
                secondary,
                intensity: segment_intensity(scaled.rms_energy, plan.kind),
            },
            features: SegmentFeatures {
                bpm: scaled.tempo,
                dynamic_level: DynamicLevel::from_db(average_db(scaled.rms_energy)),
                energy: scaled.rms_energy,
                complexity: (structural.rhythm_complexity * plan.complexity_scale).min(10.0),
            },
        })
    }
}

fn scale_features(features: &FeatureVector, plan: &SegmentPlan) -> FeatureVector {
    let mut scaled = features.clone();
    scaled.tempo = features.tempo * plan.bpm_scale;
    scaled.rms_energy = (features.rms_energy * plan.energy_scale).clamp(0.0, 1.0);
    scaled.rhythm_strength = (features.rhythm_strength * plan.complexity_scale).clamp(0.0, 1.0);
    scaled
}

/// Segment intensity on the narrow 1-7 scale, climax bumped one step
fn segment_intensity(energy: f64, kind: SegmentKind) -> u8 {
    let boost = if kind == SegmentKind::Climax { 1.0 } else { 0.0 };
    ((energy * 6.0).round() + boost).clamp(1.0, 7.0) as u8
}

fn average_db(rms: f64) -> f64 {
    if rms <= 0.0 {
        SILENCE_DB
    } else {
        20.0 * rms.log10()
    }
}

/// Top-scoring mood across all segments. Each segment contributes
/// `intensity x weight` per named mood; ties keep the earliest name.
fn dominant_emotion(segments: &[SegmentAnalysis]) -> String {
    let mut buckets: Vec<(String, f64)> = Vec::new();
    for segment in segments {
        let boost = if segment.segment == SegmentKind::Climax {
            CLIMAX_BOOST
        } else {
            1.0
        };
        let intensity = f64::from(segment.mood.intensity);
        accumulate(
            &mut buckets,
            &segment.mood.primary,
            intensity * PRIMARY_WEIGHT * boost,
        );
        for name in &segment.mood.secondary {
            accumulate(&mut buckets, name, intensity * SECONDARY_WEIGHT * boost);
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (name, total) in &buckets {
        if best.map_or(true, |(_, top)| *total > top) {
            best = Some((name, *total));
        }
    }
    best.map(|(name, _)| name.to_string()).unwrap_or_default()
}

fn accumulate(buckets: &mut Vec<(String, f64)>, name: &str, amount: f64) {
    match buckets.iter_mut().find(|(n, _)| n == name) {
        Some((_, total)) => *total += amount,
        None => buckets.push((name.to_string(), amount)),
    }
}

/// Derive the emotional arc entirely from the segment list
fn derive_trajectory(segments: &[SegmentAnalysis]) -> EmotionalTrajectory {
    let mut trajectory = Vec::with_capacity(segments.len());
    let mut transitions = Vec::new();
    let mut previous: Option<&SegmentAnalysis> = None;

    for segment in segments {
        let trend = match previous {
            None => Trend::Stable,
            Some(prev) if segment.mood.intensity > prev.mood.intensity => Trend::Up,
            Some(prev) if segment.mood.intensity < prev.mood.intensity => Trend::Down,
            Some(_) => Trend::Stable,
        };
        trajectory.push(TrajectoryPoint {
            segment: segment.segment,
            mood: segment.mood.primary.clone(),
            intensity: segment.mood.intensity,
            trend,
        });
        if let Some(prev) = previous {
            transitions.push(MoodTransition {
                from: prev.mood.primary.clone(),
                to: segment.mood.primary.clone(),
                position_pct: segment.time_range.start_pct,
                smoothness: Smoothness::from_intensity_delta(
                    prev.mood.intensity.abs_diff(segment.mood.intensity),
                ),
            });
        }
        previous = Some(segment);
    }

    EmotionalTrajectory {
        primary: dominant_emotion(segments),
        trajectory,
        transitions,
    }
}
