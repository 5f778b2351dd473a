//! Scene fusion engine.
//!
//! Runs the four scene matchers, drops candidates below their per-source
//! threshold, and picks the winner by source priority with confidence as
//! the tie-break. No surviving candidate yields the unrecognized
//! sentinel, which is an answer rather than an error; a failed LLM judge
//! only removes that one candidate.

use tracing::{debug, warn};

use cuesense_common::model::{EmotionResult, FeatureVector, SceneMatch, SceneSource};

use super::{linkage, scene_rules};
use crate::config::SceneThresholds;
use crate::llm::SceneJudge;

pub struct SceneFusionEngine {
    judge: Option<SceneJudge>,
    thresholds: SceneThresholds,
}

impl SceneFusionEngine {
    pub fn new(judge: Option<SceneJudge>, thresholds: SceneThresholds) -> Self {
        SceneFusionEngine { judge, thresholds }
    }

    /// Determine the track's scene from every configured matcher
    pub async fn analyze(
        &self,
        features: &FeatureVector,
        genre: &str,
        emotion: &EmotionResult,
    ) -> SceneMatch {
        let mut candidates = Vec::new();

        if let Some(hit) = linkage::lookup(genre, &emotion.primary) {
            candidates.push(hit);
        }
        if let Some(hit) = scene_rules::match_audio(features) {
            candidates.push(hit);
        }
        if let Some(hit) = scene_rules::match_target(features) {
            candidates.push(hit);
        }
        if let Some(judge) = &self.judge {
            match judge.judge(features, genre, emotion).await {
                Ok(hit) if hit.is_unrecognized() => {
                    debug!("LLM scene judge abstained");
                }
                Ok(hit) => candidates.push(hit),
                Err(e) => {
                    warn!(error = %e, "LLM scene judge failed, continuing without it");
                }
            }
        }

        self.select(candidates)
    }

    /// Threshold filter, then priority ranking with confidence tie-break
    pub fn select(&self, candidates: Vec<SceneMatch>) -> SceneMatch {
        let mut survivors: Vec<SceneMatch> = candidates
            .into_iter()
            .filter(|c| c.confidence >= self.threshold_for(c.source))
            .collect();
        survivors.sort_by(|a, b| {
            b.source
                .priority()
                .cmp(&a.source.priority())
                .then(b.confidence.cmp(&a.confidence))
        });

        match survivors.into_iter().next() {
            Some(winner) => {
                debug!(
                    scene = %winner.scene,
                    source = ?winner.source,
                    confidence = winner.confidence,
                    "scene selected"
                );
                winner
            }
            None => {
                debug!("no scene candidate survived thresholding");
                SceneMatch::unrecognized()
            }
        }
    }

    fn threshold_for(&self, source: SceneSource) -> u8 {
        match source {
            SceneSource::Linkage => self.thresholds.linkage,
            SceneSource::Audio => self.thresholds.audio,
            SceneSource::Target => self.thresholds.target,
            SceneSource::Llm => self.thresholds.llm,
            SceneSource::Hybrid => 0,
        }
    }
}
