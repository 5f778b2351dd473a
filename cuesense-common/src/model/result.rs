//! Aggregated per-track analysis result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::emotion::EmotionResult;
use super::scene::SceneMatch;
use super::structure::{EmotionalTrajectory, SegmentAnalysis};

/// Everything the engine determined about one track.
///
/// The engine hands this to its caller and keeps nothing; persistence is
/// the embedding service's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAnalysis {
    /// Identifier for this analysis run (not for the track)
    pub analysis_id: Uuid,
    /// File name the caller associated with the samples
    pub file_name: String,
    pub emotion: EmotionResult,
    pub scene: SceneMatch,
    /// Inferred film-genre fit, an approved vocabulary term
    pub genre: String,
    /// Present only for long/complex tracks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SegmentAnalysis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<EmotionalTrajectory>,
    /// Mean of emotion confidence and scene confidence/100
    pub overall_confidence: f64,
    pub analyzed_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

impl TrackAnalysis {
    /// Overall confidence combiner; scene confidence is rescaled from
    /// its 0-100 range before averaging.
    pub fn combine_confidence(emotion_confidence: f64, scene_confidence: u8) -> f64 {
        (emotion_confidence + f64::from(scene_confidence) / 100.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_confidence() {
        let c = TrackAnalysis::combine_confidence(0.8, 90);
        assert!((c - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_combine_confidence_zero_scene() {
        // An unrecognized scene halves the overall confidence rather than
        // zeroing it.
        let c = TrackAnalysis::combine_confidence(0.9, 0);
        assert!((c - 0.45).abs() < 1e-9);
    }
}
