//! Acoustic feature vector shared between the extractor and every scorer.
//!
//! One `FeatureVector` summarizes a whole decoded track. Producers are the
//! engine's feature extractor (from PCM) or a caller that already holds
//! features (the CLI accepts them as JSON). Consumers never mutate it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Track-level acoustic features
///
/// All fields are plain numbers so the vector serializes cleanly for
/// storage and for embedding into judge prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Spectral centroid in Hz (brightness)
    pub spectral_centroid: f64,
    /// Frequency in Hz below which 85% of spectral energy sits
    pub spectral_rolloff: f64,
    /// Mean frame-to-frame spectral change
    pub spectral_flux: f64,
    /// Root-mean-square energy, [0, 1]
    pub rms_energy: f64,
    /// Share of energy in the low band (bottom 10% of analyser bins)
    pub low_energy: f64,
    /// Share of energy in the mid band (10%..50% of analyser bins)
    pub mid_energy: f64,
    /// Share of energy in the high band (top half of analyser bins)
    pub high_energy: f64,
    /// Estimated tempo in BPM
    pub tempo: f64,
    /// Periodicity of the energy envelope, [0, 1]
    pub rhythm_strength: f64,
    /// Sign changes per sample, [0, 1]
    pub zero_crossing_rate: f64,
    /// Harmonic vs. percussive balance, [0, 1] (1.0 = fully harmonic)
    pub harmonic_ratio: f64,
}

impl FeatureVector {
    /// Check the documented invariants: band ratios in range and summing
    /// to ~1, unit-range fields in [0, 1], tempo positive.
    pub fn validate(&self) -> Result<()> {
        let bands = [
            ("low_energy", self.low_energy),
            ("mid_energy", self.mid_energy),
            ("high_energy", self.high_energy),
        ];
        for (name, value) in bands {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{} out of range: {}",
                    name, value
                )));
            }
        }
        let band_sum = self.low_energy + self.mid_energy + self.high_energy;
        if band_sum > 0.0 && (band_sum - 1.0).abs() > 0.05 {
            return Err(Error::InvalidInput(format!(
                "band ratios sum to {:.3}, expected ~1.0",
                band_sum
            )));
        }
        for (name, value) in [
            ("rms_energy", self.rms_energy),
            ("rhythm_strength", self.rhythm_strength),
            ("zero_crossing_rate", self.zero_crossing_rate),
            ("harmonic_ratio", self.harmonic_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{} out of range: {}",
                    name, value
                )));
            }
        }
        if self.tempo <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "tempo must be positive, got {}",
                self.tempo
            )));
        }
        Ok(())
    }

    /// Compact single-line summary for logs and judge prompts
    pub fn summary(&self) -> String {
        format!(
            "tempo={:.0}bpm energy={:.2} rhythm={:.2} bands={:.2}/{:.2}/{:.2} \
             centroid={:.0}Hz flux={:.0} harmonic={:.2}",
            self.tempo,
            self.rms_energy,
            self.rhythm_strength,
            self.low_energy,
            self.mid_energy,
            self.high_energy,
            self.spectral_centroid,
            self.spectral_flux,
            self.harmonic_ratio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_vector() -> FeatureVector {
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

    #[test]
    fn test_valid_vector_passes() {
        assert!(valid_vector().validate().is_ok());
    }

    #[test]
    fn test_band_sum_checked() {
        let mut v = valid_vector();
        v.low_energy = 0.8;
        v.mid_energy = 0.8;
        v.high_energy = 0.8;
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_zero_bands_allowed_for_silence() {
        // Silence produces all-zero bands; the sum check only applies when
        // some energy was measured.
        let mut v = valid_vector();
        v.low_energy = 0.0;
        v.mid_energy = 0.0;
        v.high_energy = 0.0;
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_nonpositive_tempo_rejected() {
        let mut v = valid_vector();
        v.tempo = 0.0;
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_unit_range_fields_rejected_out_of_range() {
        let mut v = valid_vector();
        v.harmonic_ratio = 1.4;
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let v = valid_vector();
        let json = serde_json::to_string(&v).unwrap();
        let back: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
