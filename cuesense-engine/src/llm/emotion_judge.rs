//! LLM emotion judge.
//!
//! Sends the track's acoustic summary plus the approved emotion
//! vocabulary to the model and parses one JSON object out of the reply.
//! An unparsable reply or an off-vocabulary primary label fails this
//! judge only; the fusion layer decides whether the analysis survives.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use cuesense_common::model::{AnalysisMethod, EmotionResult, FeatureVector, MoodDimensions};
use cuesense_common::{TermCategory, VocabularyProvider};

use super::extract::first_json_object;
use super::provider::{ChatMessage, ChatRequest};
use super::service::LlmService;
use crate::config::LlmConfig;
use crate::error::{EngineError, Result};

const JUDGE_NAME: &str = "llm-emotion";
const DEFAULT_INTENSITY: f64 = 5.0;
const DEFAULT_CONFIDENCE: f64 = 0.5;
const MAX_SECONDARY: usize = 6;

const SYSTEM_PROMPT: &str = "You are a music supervisor classifying tracks for film \
and television placement. Judge the emotional character of a track from its \
acoustic features. Reply with exactly one JSON object and no other text.";

/// Raw shape the model is asked to produce. Everything but `primary`
/// is optional so a terse reply still parses.
#[derive(Debug, Deserialize)]
struct RawJudgement {
    primary: String,
    #[serde(default)]
    secondary: Vec<String>,
    intensity: Option<f64>,
    dimensions: Option<RawDimensions>,
    confidence: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDimensions {
    #[serde(default)]
    happiness: f64,
    #[serde(default)]
    sadness: f64,
    #[serde(default)]
    tension: f64,
    #[serde(default)]
    romance: f64,
    #[serde(default)]
    epic: f64,
}

pub struct EmotionJudge {
    service: Arc<LlmService>,
    vocabulary: Arc<dyn VocabularyProvider>,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl EmotionJudge {
    pub fn new(
        service: Arc<LlmService>,
        vocabulary: Arc<dyn VocabularyProvider>,
        config: &LlmConfig,
    ) -> Self {
        EmotionJudge {
            service,
            vocabulary,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub async fn judge(&self, features: &FeatureVector) -> Result<EmotionResult> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(self.user_prompt(features)),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self.service.call(request).await?;
        let result = self.parse(&response.content)?;
        debug!(
            primary = %result.primary,
            confidence = result.confidence,
            "LLM emotion judgement"
        );
        Ok(result)
    }

    fn user_prompt(&self, features: &FeatureVector) -> String {
        let terms = self.vocabulary.terms(TermCategory::Emotion);
        format!(
            "Acoustic features of the track:\n{}\n\n\
             Pick emotions strictly from this approved list:\n{}\n\n\
             Reply with one JSON object:\n\
             {{\"primary\": \"<emotion>\", \"secondary\": [\"<emotion>\", ...], \
             \"intensity\": <1-10>, \"dimensions\": {{\"happiness\": <0-10>, \
             \"sadness\": <0-10>, \"tension\": <0-10>, \"romance\": <0-10>, \
             \"epic\": <0-10>}}, \"confidence\": <0.0-1.0>}}",
            features.summary(),
            terms.join("\u{3001}"),
        )
    }

    fn parse(&self, content: &str) -> Result<EmotionResult> {
        let value = first_json_object(content).ok_or_else(|| EngineError::Judge {
            judge: JUDGE_NAME.to_string(),
            reason: "reply contained no JSON object".to_string(),
        })?;
        let raw: RawJudgement =
            serde_json::from_value(value).map_err(|e| EngineError::Judge {
                judge: JUDGE_NAME.to_string(),
                reason: format!("unexpected JSON shape: {}", e),
            })?;

        if !self.vocabulary.contains(TermCategory::Emotion, &raw.primary) {
            return Err(EngineError::Judge {
                judge: JUDGE_NAME.to_string(),
                reason: format!("primary emotion not in approved vocabulary: {}", raw.primary),
            });
        }

        let mut secondary = Vec::new();
        for term in raw.secondary {
            if term == raw.primary || secondary.contains(&term) {
                continue;
            }
            if self.vocabulary.contains(TermCategory::Emotion, &term) {
                secondary.push(term);
            } else {
                warn!(term = %term, "dropping unapproved secondary emotion");
            }
        }
        secondary.truncate(MAX_SECONDARY);

        let intensity = raw
            .intensity
            .unwrap_or(DEFAULT_INTENSITY)
            .round()
            .clamp(1.0, 10.0) as u8;
        let dimensions = raw
            .dimensions
            .map(|d| MoodDimensions {
                happiness: d.happiness,
                sadness: d.sadness,
                tension: d.tension,
                romance: d.romance,
                epic: d.epic,
            })
            .unwrap_or_default()
            .clamped();
        let confidence = raw.confidence.unwrap_or(DEFAULT_CONFIDENCE).clamp(0.0, 1.0);

        Ok(EmotionResult {
            primary: raw.primary,
            secondary,
            intensity,
            dimensions,
            confidence,
            method: AnalysisMethod::LlmOnly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::{ChatResponse, LlmProvider};
    use crate::llm::LlmError;
    use async_trait::async_trait;
    use cuesense_common::StaticVocabulary;

    struct CannedProvider {
        content: String,
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            _request: &ChatRequest,
        ) -> std::result::Result<ChatResponse, LlmError> {
            Ok(ChatResponse {
                content: self.content.clone(),
            })
        }
    }

    fn judge_with_reply(content: &str) -> EmotionJudge {
        let config = LlmConfig::default();
        let service = Arc::new(LlmService::new(
            Arc::new(CannedProvider {
                content: content.to_string(),
            }),
            &config,
        ));
        EmotionJudge::new(service, Arc::new(StaticVocabulary::new()), &config)
    }

    fn features() -> FeatureVector {
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

    #[tokio::test]
    async fn test_well_formed_reply_parses() {
        let judge = judge_with_reply(
            r#"{"primary": "欢快", "secondary": ["喜悦", "活泼"], "intensity": 8,
                "dimensions": {"happiness": 9.0, "sadness": 1.0, "tension": 2.0,
                "romance": 3.0, "epic": 4.0}, "confidence": 0.9}"#,
        );
        let result = judge.judge(&features()).await.unwrap();
        assert_eq!(result.primary, "欢快");
        assert_eq!(result.secondary, vec!["喜悦", "活泼"]);
        assert_eq!(result.intensity, 8);
        assert_eq!(result.dimensions.happiness, 9.0);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.method, AnalysisMethod::LlmOnly);
    }

    #[tokio::test]
    async fn test_prose_wrapped_json_accepted() {
        let judge = judge_with_reply(
            "Here is my assessment:\n```json\n{\"primary\": \"悲伤\", \"confidence\": 0.8}\n```",
        );
        let result = judge.judge(&features()).await.unwrap();
        assert_eq!(result.primary, "悲伤");
        assert_eq!(result.confidence, 0.8);
        // omitted fields take the documented defaults
        assert_eq!(result.intensity, 5);
        assert!(result.secondary.is_empty());
        assert_eq!(result.dimensions, MoodDimensions::default());
    }

    #[tokio::test]
    async fn test_unapproved_primary_fails_judge() {
        let judge = judge_with_reply(r#"{"primary": "joyful", "confidence": 0.9}"#);
        let err = judge.judge(&features()).await.unwrap_err();
        assert!(matches!(err, EngineError::Judge { .. }));
    }

    #[tokio::test]
    async fn test_unapproved_secondary_dropped() {
        let judge = judge_with_reply(
            r#"{"primary": "欢快", "secondary": ["喜悦", "bogus", "活泼"], "confidence": 0.9}"#,
        );
        let result = judge.judge(&features()).await.unwrap();
        assert_eq!(result.secondary, vec!["喜悦", "活泼"]);
    }

    #[tokio::test]
    async fn test_secondary_deduped_and_capped() {
        let judge = judge_with_reply(
            r#"{"primary": "欢快", "secondary":
                ["欢快", "喜悦", "喜悦", "活泼", "兴奋", "轻快", "愉悦", "阳光", "俏皮"],
                "confidence": 0.9}"#,
        );
        let result = judge.judge(&features()).await.unwrap();
        assert_eq!(result.secondary.len(), MAX_SECONDARY);
        assert!(!result.secondary.contains(&"欢快".to_string()));
        assert_eq!(result.secondary[0], "喜悦");
        assert_eq!(result.secondary[1], "活泼");
    }

    #[tokio::test]
    async fn test_out_of_range_values_clamped() {
        let judge = judge_with_reply(
            r#"{"primary": "史诗", "intensity": 99,
                "dimensions": {"happiness": 15.0, "sadness": -2.0},
                "confidence": 1.7}"#,
        );
        let result = judge.judge(&features()).await.unwrap();
        assert_eq!(result.intensity, 10);
        assert_eq!(result.dimensions.happiness, 10.0);
        assert_eq!(result.dimensions.sadness, 0.0);
        assert_eq!(result.confidence, 1.0);
    }

    #[tokio::test]
    async fn test_garbage_reply_is_judge_failure() {
        let judge = judge_with_reply("I cannot classify this track, sorry.");
        let err = judge.judge(&features()).await.unwrap_err();
        match err {
            EngineError::Judge { judge, .. } => assert_eq!(judge, JUDGE_NAME),
            other => panic!("expected judge failure, got {:?}", other),
        }
    }

    #[test]
    fn test_prompt_carries_features_and_vocabulary() {
        let judge = judge_with_reply("{}");
        let prompt = judge.user_prompt(&features());
        assert!(prompt.contains("tempo=130bpm"));
        assert!(prompt.contains("欢快"));
        assert!(prompt.contains("\"primary\""));
    }
}
