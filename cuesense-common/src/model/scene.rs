//! Scene classification result types.

use serde::{Deserialize, Serialize};

/// Canonical label for the "no scene determined" sentinel
pub const UNRECOGNIZED_SCENE: &str = "未识别";

/// Which matcher produced a scene candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneSource {
    /// Static (genre, emotion) -> scene linkage table
    Linkage,
    /// Threshold rules over energy and tempo
    Audio,
    /// Signature-scene rules (courtroom, interrogation, ...)
    Target,
    /// LLM judgment
    Llm,
    /// Reserved for merged results
    Hybrid,
}

impl SceneSource {
    /// Fixed confidence the deterministic matchers report for a hit.
    /// The LLM matcher reports whatever the model claims instead.
    pub fn default_confidence(self) -> u8 {
        match self {
            SceneSource::Linkage => 85,
            SceneSource::Audio => 80,
            SceneSource::Target => 90,
            SceneSource::Llm => 0,
            SceneSource::Hybrid => 0,
        }
    }

    /// Selection priority when several matchers survive thresholding.
    /// Higher wins; confidence breaks ties inside a class.
    pub fn priority(self) -> u8 {
        match self {
            SceneSource::Target => 4,
            SceneSource::Linkage => 3,
            SceneSource::Audio => 2,
            SceneSource::Llm => 1,
            SceneSource::Hybrid => 0,
        }
    }
}

/// One scene determination with provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMatch {
    /// Scene label, an approved vocabulary term
    pub scene: String,
    /// Match confidence, 0-100
    pub confidence: u8,
    /// Matcher that produced this candidate
    pub source: SceneSource,
    /// Short human-readable description of the scene
    pub description: String,
    /// Why the matcher chose it
    pub reasoning: String,
}

impl SceneMatch {
    /// Sentinel for "no matcher produced a usable candidate".
    /// This is an answer, not an error.
    pub fn unrecognized() -> Self {
        SceneMatch {
            scene: UNRECOGNIZED_SCENE.to_string(),
            confidence: 0,
            source: SceneSource::Hybrid,
            description: "no scene cleared its threshold".to_string(),
            reasoning: "all matchers abstained or scored below threshold".to_string(),
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        self.scene == UNRECOGNIZED_SCENE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(SceneSource::Target.priority() > SceneSource::Linkage.priority());
        assert!(SceneSource::Linkage.priority() > SceneSource::Audio.priority());
        assert!(SceneSource::Audio.priority() > SceneSource::Llm.priority());
    }

    #[test]
    fn test_default_confidences() {
        assert_eq!(SceneSource::Linkage.default_confidence(), 85);
        assert_eq!(SceneSource::Audio.default_confidence(), 80);
        assert_eq!(SceneSource::Target.default_confidence(), 90);
    }

    #[test]
    fn test_unrecognized_sentinel() {
        let s = SceneMatch::unrecognized();
        assert!(s.is_unrecognized());
        assert_eq!(s.confidence, 0);
    }
}
