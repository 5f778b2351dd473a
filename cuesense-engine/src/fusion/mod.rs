//! Multi-source fusion.
//!
//! Emotion fusion reconciles the rule scorer with the LLM emotion judge;
//! scene fusion ranks up to four independent scene matchers. Both layers
//! degrade: losing one source is recovered, losing every source of a
//! required signal is an error.

pub mod emotion;
pub mod linkage;
pub mod scene;
pub mod scene_rules;

pub use emotion::{EmotionFusionEngine, MoodSignal};
pub use scene::SceneFusionEngine;
