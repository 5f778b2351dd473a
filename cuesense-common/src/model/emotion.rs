//! Emotion classification result types.

use serde::{Deserialize, Serialize};

/// Which analysis path produced an emotion result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMethod {
    /// Deterministic profile matching only
    RuleOnly,
    /// LLM judgment only
    LlmOnly,
    /// Weighted combination of both sources
    Hybrid,
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::RuleOnly => "rule-only",
            AnalysisMethod::LlmOnly => "llm-only",
            AnalysisMethod::Hybrid => "hybrid",
        }
    }
}

/// Scores along five independent mood axes, each 0-10
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoodDimensions {
    pub happiness: f64,
    pub sadness: f64,
    pub tension: f64,
    pub romance: f64,
    pub epic: f64,
}

impl MoodDimensions {
    /// Clamp every axis into the documented 0-10 range
    pub fn clamped(self) -> Self {
        let c = |v: f64| v.clamp(0.0, 10.0);
        MoodDimensions {
            happiness: c(self.happiness),
            sadness: c(self.sadness),
            tension: c(self.tension),
            romance: c(self.romance),
            epic: c(self.epic),
        }
    }
}

/// Final emotion classification for one track
///
/// `confidence` is nominally 0-1 but rule-side amplification can push it
/// slightly above 1.0; consumers treat it as an ordering signal and do not
/// clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Dominant emotion, an approved vocabulary term
    pub primary: String,
    /// Runner-up emotions, strongest first (at most 6)
    pub secondary: Vec<String>,
    /// Expressive strength, 1-10
    pub intensity: u8,
    /// Mood-axis breakdown
    pub dimensions: MoodDimensions,
    /// Source confidence in the primary label
    pub confidence: f64,
    /// Path that produced this result
    pub method: AnalysisMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serializes_kebab_case() {
        let json = serde_json::to_string(&AnalysisMethod::RuleOnly).unwrap();
        assert_eq!(json, "\"rule-only\"");
        assert_eq!(AnalysisMethod::RuleOnly.as_str(), "rule-only");
    }

    #[test]
    fn test_dimensions_clamped() {
        let d = MoodDimensions {
            happiness: 12.0,
            sadness: -3.0,
            tension: 5.0,
            romance: 0.0,
            epic: 10.0,
        }
        .clamped();
        assert_eq!(d.happiness, 10.0);
        assert_eq!(d.sadness, 0.0);
        assert_eq!(d.tension, 5.0);
        assert_eq!(d.epic, 10.0);
    }
}
