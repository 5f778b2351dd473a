//! Shared result-model types.
//!
//! Everything here is plain serializable data: the engine produces these
//! values and embedding services (web layer, persistence) consume them.

pub mod emotion;
pub mod features;
pub mod result;
pub mod scene;
pub mod structure;

pub use emotion::{AnalysisMethod, EmotionResult, MoodDimensions};
pub use features::FeatureVector;
pub use result::TrackAnalysis;
pub use scene::{SceneMatch, SceneSource, UNRECOGNIZED_SCENE};
pub use structure::{
    DynamicLevel, EmotionalTrajectory, MoodTransition, SegmentAnalysis, SegmentFeatures,
    SegmentKind, SegmentMood, Smoothness, TimeRange, TrajectoryPoint, Trend,
};
