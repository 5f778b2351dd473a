//! Tempo and rhythm estimation from the energy envelope.
//!
//! Periodicity is read from the autocorrelation of a smoothed RMS
//! envelope. Lags are converted with `bpm = 60 * frame_rate / lag`; a
//! minimum-lag floor keeps implausibly fast harmonics from winning.

use tracing::debug;

/// Envelope hop length in milliseconds
const HOP_MS: u32 = 10;

/// Moving-average smoothing width in envelope frames
const SMOOTHING_FRAMES: usize = 5;

/// Tempo search range in BPM
const MIN_BPM: f64 = 40.0;
const MAX_BPM: f64 = 240.0;

/// Fallback when the envelope carries no usable periodicity
pub const DEFAULT_BPM: f64 = 120.0;

/// RMS energy per 10 ms hop, smoothed with a short moving average
pub fn energy_envelope(samples: &[f32], sample_rate: u32) -> Vec<f64> {
    let hop = (sample_rate * HOP_MS / 1000).max(1) as usize;
    let raw: Vec<f64> = samples
        .chunks(hop)
        .map(|frame| {
            let sum_squares: f64 = frame.iter().map(|&s| f64::from(s).powi(2)).sum();
            (sum_squares / frame.len() as f64).sqrt()
        })
        .collect();

    if raw.len() < SMOOTHING_FRAMES {
        return raw;
    }
    let mut smoothed = Vec::with_capacity(raw.len());
    let half = SMOOTHING_FRAMES / 2;
    for i in 0..raw.len() {
        let start = i.saturating_sub(half);
        let end = (i + half + 1).min(raw.len());
        let mean = raw[start..end].iter().sum::<f64>() / (end - start) as f64;
        smoothed.push(mean);
    }
    smoothed
}

/// Envelope frames per second
pub fn envelope_frame_rate() -> f64 {
    1000.0 / f64::from(HOP_MS)
}

/// Best-lag autocorrelation tempo estimate over the envelope
pub fn estimate_bpm(envelope: &[f64]) -> f64 {
    let frame_rate = envelope_frame_rate();
    // Lag bounds from the BPM search range; the floor rejects sub-beat lags
    let min_lag = (60.0 * frame_rate / MAX_BPM).floor().max(1.0) as usize;
    let max_lag = (60.0 * frame_rate / MIN_BPM).ceil() as usize;

    if envelope.len() < min_lag * 2 {
        return DEFAULT_BPM;
    }
    let max_lag = max_lag.min(envelope.len() / 2);
    if max_lag <= min_lag {
        return DEFAULT_BPM;
    }

    let mean = envelope.iter().sum::<f64>() / envelope.len() as f64;
    let centered: Vec<f64> = envelope.iter().map(|&e| e - mean).collect();
    let energy: f64 = centered.iter().map(|&c| c * c).sum();
    if energy <= f64::EPSILON {
        return DEFAULT_BPM;
    }

    let scores: Vec<(usize, f64)> = (min_lag..=max_lag)
        .map(|lag| {
            let score: f64 = centered[lag..]
                .iter()
                .zip(centered.iter())
                .map(|(&a, &b)| a * b)
                .sum::<f64>()
                / energy;
            (lag, score)
        })
        .collect();

    let best_score = scores
        .iter()
        .map(|&(_, s)| s)
        .fold(f64::MIN, f64::max);
    if best_score <= 0.0 {
        return DEFAULT_BPM;
    }

    // Integer-lag rounding favours exact multiples of the true period, so
    // take the smallest lag within 10% of the peak instead of the peak
    // itself. This keeps half-tempo aliases from winning.
    let best_lag = scores
        .iter()
        .find(|&&(_, s)| s >= 0.9 * best_score)
        .map(|&(lag, _)| lag)
        .unwrap_or(0);

    if best_lag == 0 {
        return DEFAULT_BPM;
    }

    let bpm = 60.0 * frame_rate / best_lag as f64;
    debug!(bpm, best_lag, best_score, "tempo estimate");
    bpm
}

/// Rhythm strength: coefficient of variation of the envelope, clipped
/// to [0, 1]. Flat pads score near 0, hard pulses near 1.
pub fn rhythm_strength(envelope: &[f64]) -> f64 {
    if envelope.is_empty() {
        return 0.0;
    }
    let mean = envelope.iter().sum::<f64>() / envelope.len() as f64;
    if mean <= f64::EPSILON {
        return 0.0;
    }
    let variance = envelope.iter().map(|&e| (e - mean).powi(2)).sum::<f64>()
        / envelope.len() as f64;
    (variance.sqrt() / mean).clamp(0.0, 1.0)
}
