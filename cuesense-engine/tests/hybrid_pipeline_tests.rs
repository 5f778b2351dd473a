//! Integration tests for the full hybrid pipeline with a scripted LLM
//! provider behind the real call layer: fusion of rule and LLM sources,
//! judge-failure recovery, serial-mode gating, and request sharing
//! across concurrent and repeated analyses.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use cuesense_common::model::{AnalysisMethod, FeatureVector, SceneSource};
use cuesense_common::StaticVocabulary;
use cuesense_engine::config::{EngineConfig, FusionMode};
use cuesense_engine::llm::{ChatRequest, ChatResponse, LlmError, LlmProvider, LlmService};
use cuesense_engine::orchestrator::HybridOrchestrator;
use cuesense_engine::profiles::{EmotionProfile, ProfileTable, ProfileTargets};

// ============================================================================
// Scripted provider
// ============================================================================

/// Routes on the system prompt: only the scene judge's mentions scenes.
struct ScriptedProvider {
    emotion_reply: String,
    scene_reply: String,
    emotion_calls: AtomicU32,
    scene_calls: AtomicU32,
    fail_scene: bool,
}

impl ScriptedProvider {
    fn new(emotion_reply: &str, scene_reply: &str) -> Arc<Self> {
        Arc::new(ScriptedProvider {
            emotion_reply: emotion_reply.to_string(),
            scene_reply: scene_reply.to_string(),
            emotion_calls: AtomicU32::new(0),
            scene_calls: AtomicU32::new(0),
            fail_scene: false,
        })
    }

    fn total_calls(&self) -> u32 {
        self.emotion_calls.load(Ordering::SeqCst) + self.scene_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        // give concurrent callers a chance to pile onto the same flight
        tokio::time::sleep(Duration::from_millis(10)).await;
        let is_scene = request
            .messages
            .first()
            .map_or(false, |m| m.content.contains("scenes"));
        if is_scene {
            self.scene_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_scene {
                return Err(LlmError::Parse("scripted scene failure".to_string()));
            }
            Ok(ChatResponse {
                content: self.scene_reply.clone(),
            })
        } else {
            self.emotion_calls.fetch_add(1, Ordering::SeqCst);
            Ok(ChatResponse {
                content: self.emotion_reply.clone(),
            })
        }
    }
}

fn config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.llm.backoff_ms = 5;
    config
}

fn orchestrator_with(provider: Arc<ScriptedProvider>, config: EngineConfig) -> HybridOrchestrator {
    let service = Arc::new(LlmService::new(provider, &config.llm));
    HybridOrchestrator::new(
        config,
        ProfileTable::builtin(),
        Some(service),
        Arc::new(StaticVocabulary::new()),
    )
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

const EMOTION_REPLY: &str = r#"{"primary": "欢快", "secondary": ["喜悦"],
    "intensity": 8, "confidence": 0.9}"#;
const SCENE_REPLY: &str = r#"{"scene": "派对", "confidence": 95,
    "description": "an energetic party", "reasoning": "fast, bright, rhythmic"}"#;

// ============================================================================
// Fusion behavior
// ============================================================================

#[tokio::test]
async fn test_llm_scene_carries_when_deterministic_matchers_abstain() {
    let provider = ScriptedProvider::new(EMOTION_REPLY, SCENE_REPLY);
    let orchestrator = orchestrator_with(provider.clone(), config());

    // documentary genre has no linkage rows; energy 0.5 / tempo 135 sit
    // between every audio and target band
    let mut features = cheerful_features();
    features.rms_energy = 0.5;
    features.tempo = 135.0;

    let result = orchestrator
        .analyze(&features, "doc.mp3", Some("纪录"))
        .await
        .unwrap();

    assert_eq!(result.emotion.method, AnalysisMethod::Hybrid);
    assert_eq!(result.genre, "纪录");
    assert_eq!(result.scene.scene, "派对");
    assert_eq!(result.scene.source, SceneSource::Llm);
    assert_eq!(provider.emotion_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.scene_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_scene_judge_failure_recovered_by_deterministic_matchers() {
    let provider = Arc::new(ScriptedProvider {
        emotion_reply: EMOTION_REPLY.to_string(),
        scene_reply: String::new(),
        emotion_calls: AtomicU32::new(0),
        scene_calls: AtomicU32::new(0),
        fail_scene: true,
    });
    let orchestrator = orchestrator_with(provider.clone(), config());

    let result = orchestrator
        .analyze(&cheerful_features(), "upbeat.mp3", None)
        .await
        .unwrap();

    // the linkage row (喜剧, 欢快) still carries the scene
    assert_eq!(result.scene.scene, "庆典");
    assert_eq!(result.scene.source, SceneSource::Linkage);
    assert_eq!(result.emotion.method, AnalysisMethod::Hybrid);
    assert_eq!(provider.scene_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_serial_mode_skips_emotion_judge_when_rule_is_confident() {
    let provider = ScriptedProvider::new(EMOTION_REPLY, SCENE_REPLY);
    let mut config = config();
    config.fusion.mode = FusionMode::Serial;

    // a catalogue with one profile the track matches exactly: rule
    // confidence 1.1, and the track is simple, so the LLM emotion judge
    // must not be consulted
    let calm = FeatureVector {
        spectral_centroid: 1200.0,
        spectral_rolloff: 2800.0,
        spectral_flux: 200.0,
        rms_energy: 0.3,
        low_energy: 0.4,
        mid_energy: 0.4,
        high_energy: 0.2,
        tempo: 68.0,
        rhythm_strength: 0.5,
        zero_crossing_rate: 0.06,
        harmonic_ratio: 0.5,
    };
    let table = ProfileTable::from_profiles(vec![EmotionProfile {
        name: "平静".to_string(),
        gloss: "calm".to_string(),
        description: String::new(),
        targets: ProfileTargets::default().tempo(68.0).energy(0.3).rhythm(0.5),
        weight: 1.0,
    }]);

    let service = Arc::new(LlmService::new(provider.clone(), &config.llm));
    let orchestrator = HybridOrchestrator::new(
        config,
        table,
        Some(service),
        Arc::new(StaticVocabulary::new()),
    );

    let result = orchestrator.analyze(&calm, "calm.mp3", None).await.unwrap();

    assert_eq!(result.emotion.method, AnalysisMethod::RuleOnly);
    assert_eq!(result.emotion.primary, "平静");
    assert_eq!(provider.emotion_calls.load(Ordering::SeqCst), 0);
    // the scene judge is a fusion matcher of its own and still runs
    assert_eq!(provider.scene_calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.genre, "治愈");
    assert_eq!(result.scene.scene, "海边");
    assert_eq!(result.scene.source, SceneSource::Linkage);
}

// ============================================================================
// Call sharing
// ============================================================================

#[tokio::test]
async fn test_concurrent_identical_analyses_share_llm_requests() {
    let provider = ScriptedProvider::new(EMOTION_REPLY, SCENE_REPLY);
    let orchestrator = Arc::new(orchestrator_with(provider.clone(), config()));

    let a = {
        let orchestrator = orchestrator.clone();
        let features = cheerful_features();
        tokio::spawn(async move { orchestrator.analyze(&features, "same.mp3", None).await })
    };
    let b = {
        let orchestrator = orchestrator.clone();
        let features = cheerful_features();
        tokio::spawn(async move { orchestrator.analyze(&features, "same.mp3", None).await })
    };

    let first = a.await.unwrap().unwrap();
    let second = b.await.unwrap().unwrap();

    // one outbound request per judge, shared by both analyses
    assert_eq!(provider.emotion_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.scene_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.total_calls(), 2);
    assert_eq!(first.emotion, second.emotion);
    assert_eq!(first.scene, second.scene);
}

#[tokio::test]
async fn test_repeated_analysis_served_from_response_cache() {
    let provider = ScriptedProvider::new(EMOTION_REPLY, SCENE_REPLY);
    let orchestrator = orchestrator_with(provider.clone(), config());

    let first = orchestrator
        .analyze(&cheerful_features(), "again.mp3", None)
        .await
        .unwrap();
    assert_eq!(provider.total_calls(), 2);

    let second = orchestrator
        .analyze(&cheerful_features(), "again.mp3", None)
        .await
        .unwrap();
    assert_eq!(provider.total_calls(), 2);
    assert_eq!(first.emotion, second.emotion);
    assert_eq!(first.scene, second.scene);
}
