//! Analysis pipeline orchestration.
//!
//! One `analyze` call runs the fixed sequence: validate features, fuse
//! emotion sources, infer the film genre, fuse scene matchers, then
//! optionally the structural pass. Emotion and scene failures abort the
//! call; a structural failure only drops the optional fields.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use cuesense_common::model::{FeatureVector, TrackAnalysis};
use cuesense_common::vocabulary::VocabularyProvider;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::fusion::{EmotionFusionEngine, SceneFusionEngine};
use crate::genres;
use crate::llm::{EmotionJudge, LlmService, SceneJudge};
use crate::profiles::ProfileTable;
use crate::scoring::RuleEmotionScorer;
use crate::structure::StructuralAnalyzer;

pub struct HybridOrchestrator {
    emotion: EmotionFusionEngine,
    scenes: SceneFusionEngine,
    structure: StructuralAnalyzer,
    vocabulary: Arc<dyn VocabularyProvider>,
}

impl HybridOrchestrator {
    /// Wire the pipeline from injected parts. `service` is `None` when
    /// the LLM layer is disabled; both judges then stay rule-only.
    pub fn new(
        config: EngineConfig,
        profiles: ProfileTable,
        service: Option<Arc<LlmService>>,
        vocabulary: Arc<dyn VocabularyProvider>,
    ) -> Self {
        let emotion_judge = service
            .as_ref()
            .map(|s| EmotionJudge::new(s.clone(), vocabulary.clone(), &config.llm));
        let scene_judge = service
            .as_ref()
            .map(|s| SceneJudge::new(s.clone(), vocabulary.clone(), &config.llm));

        let emotion = EmotionFusionEngine::new(
            RuleEmotionScorer::new(config.scorer.clone()),
            profiles.clone(),
            emotion_judge,
            config.fusion.clone(),
            config.structure.complexity.clone(),
        );
        let scenes = SceneFusionEngine::new(scene_judge, config.fusion.scene_thresholds.clone());
        let structure = StructuralAnalyzer::new(
            RuleEmotionScorer::new(config.scorer.clone()),
            profiles,
            config.structure.clone(),
        );

        HybridOrchestrator {
            emotion,
            scenes,
            structure,
            vocabulary,
        }
    }

    /// Classify one track from its feature vector.
    pub async fn analyze(
        &self,
        features: &FeatureVector,
        file_name: &str,
        metadata_genre: Option<&str>,
    ) -> Result<TrackAnalysis> {
        let started = Instant::now();
        features.validate()?;

        let emotion = self.emotion.analyze(features).await?;
        let genre = genres::infer_genre(&emotion.primary, metadata_genre, self.vocabulary.as_ref());
        let scene = self.scenes.analyze(features, &genre, &emotion).await;

        let (segments, trajectory) = if self.structure.should_analyze(features) {
            match self.structure.analyze(features) {
                Ok(analysis) => (Some(analysis.segments), Some(analysis.trajectory)),
                Err(e) => {
                    warn!(error = %e, "structural analysis failed, omitting segments");
                    (None, None)
                }
            }
        } else {
            (None, None)
        };

        let overall_confidence =
            TrackAnalysis::combine_confidence(emotion.confidence, scene.confidence);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            file = file_name,
            emotion = %emotion.primary,
            scene = %scene.scene,
            genre = %genre,
            confidence = overall_confidence,
            elapsed_ms,
            "track analyzed"
        );

        Ok(TrackAnalysis {
            analysis_id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            emotion,
            scene,
            genre,
            segments,
            trajectory,
            overall_confidence,
            analyzed_at: Utc::now(),
            elapsed_ms,
        })
    }
}
