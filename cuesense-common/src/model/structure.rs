//! Structural (multi-segment) analysis result types.

use serde::{Deserialize, Serialize};

/// Role of a segment within the track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Intro,
    Development,
    Climax,
    Outro,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Intro => "intro",
            SegmentKind::Development => "development",
            SegmentKind::Climax => "climax",
            SegmentKind::Outro => "outro",
        }
    }
}

/// Percent interval within the track, 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_pct: f64,
    pub end_pct: f64,
}

impl TimeRange {
    pub fn new(start_pct: f64, end_pct: f64) -> Self {
        TimeRange { start_pct, end_pct }
    }
}

/// Six-bucket loudness scale derived from average decibels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicLevel {
    Pp,
    P,
    Mp,
    Mf,
    F,
    Ff,
}

impl DynamicLevel {
    /// Bucket an average-dB estimate (negative, 0 dB = full scale) into
    /// the six conventional dynamic markings.
    pub fn from_db(db: f64) -> Self {
        if db < -30.0 {
            DynamicLevel::Pp
        } else if db < -24.0 {
            DynamicLevel::P
        } else if db < -18.0 {
            DynamicLevel::Mp
        } else if db < -12.0 {
            DynamicLevel::Mf
        } else if db < -6.0 {
            DynamicLevel::F
        } else {
            DynamicLevel::Ff
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DynamicLevel::Pp => "pp",
            DynamicLevel::P => "p",
            DynamicLevel::Mp => "mp",
            DynamicLevel::Mf => "mf",
            DynamicLevel::F => "f",
            DynamicLevel::Ff => "ff",
        }
    }
}

/// Mood summary for one segment
///
/// Segment intensity uses a narrower 1-7 scale than the track-level 1-10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentMood {
    pub primary: String,
    pub secondary: Vec<String>,
    pub intensity: u8,
}

/// Acoustic summary for one segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentFeatures {
    pub bpm: f64,
    pub dynamic_level: DynamicLevel,
    /// Segment energy, [0, 1]
    pub energy: f64,
    /// Arrangement complexity, 0-10
    pub complexity: f64,
}

/// One analyzed segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAnalysis {
    pub segment: SegmentKind,
    pub time_range: TimeRange,
    pub mood: SegmentMood,
    pub features: SegmentFeatures,
}

/// Intensity direction relative to the previous segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// How sharply the mood changes at a segment boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoothness {
    Smooth,
    Gradual,
    Abrupt,
}

impl Smoothness {
    /// Classify by absolute intensity delta across the boundary
    pub fn from_intensity_delta(delta: u8) -> Self {
        match delta {
            0 | 1 => Smoothness::Smooth,
            2 => Smoothness::Gradual,
            _ => Smoothness::Abrupt,
        }
    }
}

/// Per-segment point on the emotional arc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub segment: SegmentKind,
    pub mood: String,
    pub intensity: u8,
    pub trend: Trend,
}

/// Mood change at one segment boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTransition {
    pub from: String,
    pub to: String,
    /// Boundary position as percent of track length
    pub position_pct: f64,
    pub smoothness: Smoothness,
}

/// Whole-track emotional arc derived from the segment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalTrajectory {
    /// Dominant emotion across all segments
    pub primary: String,
    pub trajectory: Vec<TrajectoryPoint>,
    pub transitions: Vec<MoodTransition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_level_buckets() {
        assert_eq!(DynamicLevel::from_db(-35.0), DynamicLevel::Pp);
        assert_eq!(DynamicLevel::from_db(-26.0), DynamicLevel::P);
        assert_eq!(DynamicLevel::from_db(-20.0), DynamicLevel::Mp);
        assert_eq!(DynamicLevel::from_db(-15.0), DynamicLevel::Mf);
        assert_eq!(DynamicLevel::from_db(-8.0), DynamicLevel::F);
        assert_eq!(DynamicLevel::from_db(-2.0), DynamicLevel::Ff);
    }

    #[test]
    fn test_smoothness_thresholds() {
        assert_eq!(Smoothness::from_intensity_delta(0), Smoothness::Smooth);
        assert_eq!(Smoothness::from_intensity_delta(1), Smoothness::Smooth);
        assert_eq!(Smoothness::from_intensity_delta(2), Smoothness::Gradual);
        assert_eq!(Smoothness::from_intensity_delta(3), Smoothness::Abrupt);
    }
}
