//! Acoustic feature extraction from decoded PCM.
//!
//! Deterministic signal analysis only: the same samples always produce
//! the same `FeatureVector`. Decoding happens upstream; this module takes
//! mono f32 samples in [-1.0, 1.0].

mod spectrum;
mod tempo;

pub use spectrum::SpectralSummary;
pub use tempo::DEFAULT_BPM;

use cuesense_common::model::FeatureVector;
use cuesense_common::{Error, Result};
use tracing::debug;

/// Below this RMS the track is treated as silence
const SILENCE_RMS: f64 = 1e-4;

/// Whole-track feature extractor
pub struct FeatureExtractor;

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    pub fn new() -> Self {
        FeatureExtractor
    }

    /// Extract the full feature vector from mono PCM samples.
    ///
    /// Errors only on unusable input (empty buffer, zero sample rate);
    /// silence yields near-zero features with the default tempo.
    pub fn extract(&self, samples: &[f32], sample_rate: u32) -> Result<FeatureVector> {
        if samples.is_empty() {
            return Err(Error::InvalidInput("empty sample buffer".to_string()));
        }
        if sample_rate == 0 {
            return Err(Error::InvalidInput("sample rate must be > 0".to_string()));
        }

        let rms_energy = compute_rms_energy(samples).min(1.0);
        let zero_crossing_rate = compute_zero_crossing_rate(samples);
        let spectral = spectrum::analyze(samples, sample_rate);

        let envelope = tempo::energy_envelope(samples, sample_rate);
        let bpm = tempo::estimate_bpm(&envelope);
        let rhythm = tempo::rhythm_strength(&envelope);

        // Percussive content flips signs often; harmonic content does not.
        // Silence reports 0 rather than "fully harmonic".
        let harmonic_ratio = if rms_energy < SILENCE_RMS {
            0.0
        } else {
            (1.0 - 2.0 * zero_crossing_rate).clamp(0.0, 1.0)
        };

        let features = FeatureVector {
            spectral_centroid: spectral.centroid_hz,
            spectral_rolloff: spectral.rolloff_hz,
            spectral_flux: spectral.flux,
            rms_energy,
            low_energy: spectral.low_ratio,
            mid_energy: spectral.mid_ratio,
            high_energy: spectral.high_ratio,
            tempo: bpm,
            rhythm_strength: rhythm,
            zero_crossing_rate,
            harmonic_ratio,
        };

        debug!(
            tempo = features.tempo,
            energy = features.rms_energy,
            centroid = features.spectral_centroid,
            rhythm = features.rhythm_strength,
            "extracted features"
        );
        Ok(features)
    }
}

/// RMS over the whole buffer
fn compute_rms_energy(samples: &[f32]) -> f64 {
    let sum_squares: f64 = samples.iter().map(|&s| f64::from(s).powi(2)).sum();
    (sum_squares / samples.len() as f64).sqrt()
}

/// Sign changes per sample, [0, 1]
fn compute_zero_crossing_rate(samples: &[f32]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let crossings = samples
        .windows(2)
        .filter(|w| (w[0] >= 0.0 && w[1] < 0.0) || (w[0] < 0.0 && w[1] >= 0.0))
        .count();
    crossings as f64 / (samples.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_sine_wave(frequency: f32, duration_secs: f32, sample_rate: u32) -> Vec<f32> {
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * std::f32::consts::PI * frequency * t).sin() * 0.5
            })
            .collect()
    }

    fn white_noise(duration_secs: f32, sample_rate: u32) -> Vec<f32> {
        // Deterministic pseudo-noise, no RNG dependency in tests
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        let mut state = 0x2545F491u32;
        (0..num_samples)
            .map(|_| {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                (state as f32 / u32::MAX as f32) - 0.5
            })
            .collect()
    }

    #[test]
    fn test_empty_samples_rejected() {
        let extractor = FeatureExtractor::new();
        assert!(extractor.extract(&[], 44100).is_err());
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let extractor = FeatureExtractor::new();
        assert!(extractor.extract(&[0.1, 0.2], 0).is_err());
    }

    #[test]
    fn test_extracted_vector_validates() {
        let extractor = FeatureExtractor::new();
        let samples = generate_sine_wave(440.0, 3.0, 44100);
        let features = extractor.extract(&samples, 44100).unwrap();
        assert!(features.validate().is_ok());
    }

    #[test]
    fn test_silence_yields_near_zero_features() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract(&vec![0.0; 44100], 44100).unwrap();
        assert!(features.rms_energy < 1e-6);
        assert_eq!(features.zero_crossing_rate, 0.0);
        assert_eq!(features.harmonic_ratio, 0.0);
        assert_eq!(features.rhythm_strength, 0.0);
        assert_eq!(features.spectral_flux, 0.0);
        assert_eq!(features.tempo, DEFAULT_BPM);
    }

    #[test]
    fn test_determinism() {
        let extractor = FeatureExtractor::new();
        let samples = generate_sine_wave(523.0, 2.0, 44100);
        let a = extractor.extract(&samples, 44100).unwrap();
        let b = extractor.extract(&samples, 44100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tone_is_more_harmonic_than_noise() {
        let extractor = FeatureExtractor::new();
        let tone = extractor
            .extract(&generate_sine_wave(440.0, 2.0, 44100), 44100)
            .unwrap();
        let noise = extractor.extract(&white_noise(2.0, 44100), 44100).unwrap();
        assert!(tone.harmonic_ratio > noise.harmonic_ratio);
        assert!(tone.zero_crossing_rate < noise.zero_crossing_rate);
    }

    #[test]
    fn test_loud_signal_has_higher_energy() {
        let extractor = FeatureExtractor::new();
        let loud = generate_sine_wave(440.0, 1.0, 44100);
        let quiet: Vec<f32> = loud.iter().map(|&s| s * 0.25).collect();
        let loud_features = extractor.extract(&loud, 44100).unwrap();
        let quiet_features = extractor.extract(&quiet, 44100).unwrap();
        assert!(loud_features.rms_energy > quiet_features.rms_energy * 2.0);
    }
}
