//! Emotion profile catalogue.
//!
//! A profile names an approved emotion term and describes where it lives
//! in feature space: target values for whichever acoustic dimensions are
//! meaningful for that emotion. Profiles with no opinion on a dimension
//! leave it unset and the scorer averages over the set ones only.
//!
//! The builtin catalogue is the engine's curated data asset; scoring
//! logic lives in `crate::scoring` and never hardcodes profile data.

mod catalog;

use serde::{Deserialize, Serialize};

/// Per-dimension acoustic targets. Unset dimensions do not participate
/// in similarity scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileTargets {
    /// RMS energy target, [0, 1]
    pub energy: Option<f64>,
    /// Low-band share target, [0, 1]
    pub low: Option<f64>,
    /// Mid-band share target, [0, 1]
    pub mid: Option<f64>,
    /// High-band share target, [0, 1]
    pub high: Option<f64>,
    /// Tempo target in BPM
    pub tempo: Option<f64>,
    /// Rhythm-strength target, [0, 1]
    pub rhythm: Option<f64>,
    /// Spectral-centroid target in Hz
    pub centroid: Option<f64>,
    /// Spectral-flux target (byte scale)
    pub flux: Option<f64>,
    /// Harmonic-ratio target, [0, 1]
    pub harmonic: Option<f64>,
}

impl ProfileTargets {
    pub fn energy(mut self, v: f64) -> Self {
        self.energy = Some(v);
        self
    }
    pub fn low(mut self, v: f64) -> Self {
        self.low = Some(v);
        self
    }
    pub fn mid(mut self, v: f64) -> Self {
        self.mid = Some(v);
        self
    }
    pub fn high(mut self, v: f64) -> Self {
        self.high = Some(v);
        self
    }
    pub fn tempo(mut self, v: f64) -> Self {
        self.tempo = Some(v);
        self
    }
    pub fn rhythm(mut self, v: f64) -> Self {
        self.rhythm = Some(v);
        self
    }
    pub fn centroid(mut self, v: f64) -> Self {
        self.centroid = Some(v);
        self
    }
    pub fn flux(mut self, v: f64) -> Self {
        self.flux = Some(v);
        self
    }
    pub fn harmonic(mut self, v: f64) -> Self {
        self.harmonic = Some(v);
        self
    }

    /// Number of dimensions this profile scores against
    pub fn active_count(&self) -> usize {
        [
            self.energy.is_some(),
            self.low.is_some(),
            self.mid.is_some(),
            self.high.is_some(),
            self.tempo.is_some(),
            self.rhythm.is_some(),
            self.centroid.is_some(),
            self.flux.is_some(),
            self.harmonic.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }
}

/// One catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    /// Approved emotion term (Chinese, the product's data language)
    pub name: String,
    /// English gloss for logs and prompts
    pub gloss: String,
    /// Short description used in judge prompts
    pub description: String,
    #[serde(default)]
    pub targets: ProfileTargets,
    /// Catalogue weight; below 1.0 de-emphasizes loosely-pinned profiles
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Loaded profile catalogue
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: Vec<EmotionProfile>,
}

impl ProfileTable {
    /// The shipped catalogue
    pub fn builtin() -> Self {
        ProfileTable {
            profiles: catalog::builtin_profiles(),
        }
    }

    /// Caller-supplied catalogue (tests, experiments)
    pub fn from_profiles(profiles: Vec<EmotionProfile>) -> Self {
        ProfileTable { profiles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmotionProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&EmotionProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}
