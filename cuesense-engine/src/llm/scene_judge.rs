//! LLM scene judge.
//!
//! One of the four scene matchers. Unlike the deterministic matchers it
//! reports the model's own confidence (0-100). The model may abstain by
//! answering with the unrecognized sentinel; that is a valid result and
//! the fusion layer drops it like any other non-candidate.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use cuesense_common::model::{
    EmotionResult, FeatureVector, SceneMatch, SceneSource, UNRECOGNIZED_SCENE,
};
use cuesense_common::{TermCategory, VocabularyProvider};

use super::extract::first_json_object;
use super::provider::{ChatMessage, ChatRequest};
use super::service::LlmService;
use crate::config::LlmConfig;
use crate::error::{EngineError, Result};

const JUDGE_NAME: &str = "llm-scene";

const SYSTEM_PROMPT: &str = "You are a music supervisor matching tracks to film and \
television scenes. Choose the single best scene for a track from an approved \
list, or answer \u{672a}\u{8bc6}\u{522b} if none fits. Reply with exactly one \
JSON object and no other text.";

#[derive(Debug, Deserialize)]
struct RawJudgement {
    scene: String,
    confidence: Option<f64>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    reasoning: String,
}

pub struct SceneJudge {
    service: Arc<LlmService>,
    vocabulary: Arc<dyn VocabularyProvider>,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl SceneJudge {
    pub fn new(
        service: Arc<LlmService>,
        vocabulary: Arc<dyn VocabularyProvider>,
        config: &LlmConfig,
    ) -> Self {
        SceneJudge {
            service,
            vocabulary,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub async fn judge(
        &self,
        features: &FeatureVector,
        genre: &str,
        emotion: &EmotionResult,
    ) -> Result<SceneMatch> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(self.user_prompt(features, genre, emotion)),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self.service.call(request).await?;
        let result = self.parse(&response.content)?;
        debug!(
            scene = %result.scene,
            confidence = result.confidence,
            "LLM scene judgement"
        );
        Ok(result)
    }

    fn user_prompt(
        &self,
        features: &FeatureVector,
        genre: &str,
        emotion: &EmotionResult,
    ) -> String {
        let terms = self.vocabulary.terms(TermCategory::Scene);
        format!(
            "Acoustic features of the track:\n{}\n\n\
             Classified emotion: {} (intensity {}/10)\n\
             Inferred film genre: {}\n\n\
             Pick the best-fitting scene strictly from this approved list, or \
             answer {} if none fits:\n{}\n\n\
             Reply with one JSON object:\n\
             {{\"scene\": \"<scene>\", \"confidence\": <0-100>, \
             \"description\": \"<one sentence>\", \"reasoning\": \"<one sentence>\"}}",
            features.summary(),
            emotion.primary,
            emotion.intensity,
            genre,
            UNRECOGNIZED_SCENE,
            terms.join("\u{3001}"),
        )
    }

    fn parse(&self, content: &str) -> Result<SceneMatch> {
        let value = first_json_object(content).ok_or_else(|| EngineError::Judge {
            judge: JUDGE_NAME.to_string(),
            reason: "reply contained no JSON object".to_string(),
        })?;
        let raw: RawJudgement =
            serde_json::from_value(value).map_err(|e| EngineError::Judge {
                judge: JUDGE_NAME.to_string(),
                reason: format!("unexpected JSON shape: {}", e),
            })?;

        if raw.scene == UNRECOGNIZED_SCENE {
            // model abstained
            return Ok(SceneMatch {
                scene: UNRECOGNIZED_SCENE.to_string(),
                confidence: 0,
                source: SceneSource::Llm,
                description: raw.description,
                reasoning: raw.reasoning,
            });
        }
        if !self.vocabulary.contains(TermCategory::Scene, &raw.scene) {
            return Err(EngineError::Judge {
                judge: JUDGE_NAME.to_string(),
                reason: format!("scene not in approved vocabulary: {}", raw.scene),
            });
        }

        let confidence = match raw.confidence {
            Some(c) => c.round().clamp(0.0, 100.0) as u8,
            None => {
                warn!(scene = %raw.scene, "scene reply carried no confidence, using 0");
                0
            }
        };

        Ok(SceneMatch {
            scene: raw.scene,
            confidence,
            source: SceneSource::Llm,
            description: raw.description,
            reasoning: raw.reasoning,
        })
    }
}
