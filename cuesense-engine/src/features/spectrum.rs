//! Windowed FFT analysis: centroid, rolloff, flux and band ratios.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Analysis window length in samples
pub const WINDOW_SIZE: usize = 2048;

/// Hop between analysis windows
const HOP_SIZE: usize = 1024;

/// Ceiling on analysed windows; long tracks are strided evenly instead of
/// scanned in full
const MAX_WINDOWS: usize = 256;

/// Fraction of cumulative energy defining the rolloff point
const ROLLOFF_FRACTION: f64 = 0.85;

/// Flux is reported on a byte-magnitude scale (0-255 per bin), matching
/// the scale the profile catalogue's flux targets were tuned against.
const BYTE_SCALE: f64 = 255.0;

/// Low band = bottom 10% of bins, mid band = 10%..50%, high band = rest
const LOW_BAND_FRACTION: f64 = 0.10;
const MID_BAND_FRACTION: f64 = 0.50;

/// Spectral portion of the feature vector
#[derive(Debug, Clone, Default)]
pub struct SpectralSummary {
    pub centroid_hz: f64,
    pub rolloff_hz: f64,
    pub flux: f64,
    pub low_ratio: f64,
    pub mid_ratio: f64,
    pub high_ratio: f64,
}

/// Analyse the track spectrum over strided Hann windows.
///
/// Returns near-zero values for silent input rather than failing.
pub fn analyze(samples: &[f32], sample_rate: u32) -> SpectralSummary {
    if samples.len() < WINDOW_SIZE {
        return analyze_windows(&[window_spectrum(samples)], sample_rate);
    }

    let available = (samples.len() - WINDOW_SIZE) / HOP_SIZE + 1;
    let stride = if available > MAX_WINDOWS {
        // spread the analysed windows across the whole track
        available.div_ceil(MAX_WINDOWS)
    } else {
        1
    };

    let spectra: Vec<Vec<f64>> = (0..available)
        .step_by(stride)
        .map(|w| {
            let start = w * HOP_SIZE;
            window_spectrum(&samples[start..start + WINDOW_SIZE])
        })
        .collect();

    analyze_windows(&spectra, sample_rate)
}

/// Magnitude spectrum of one Hann-windowed frame (first half of the FFT)
fn window_spectrum(frame: &[f32]) -> Vec<f64> {
    let n = frame.len().max(1);
    let fft_size = n.next_power_of_two().max(2);

    let mut buffer: Vec<Complex<f32>> = frame
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let w = if n > 1 {
                let t = 2.0 * std::f32::consts::PI * i as f32 / (n - 1) as f32;
                0.5 * (1.0 - t.cos())
            } else {
                1.0
            };
            Complex::new(x * w, 0.0)
        })
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    buffer[..fft_size / 2]
        .iter()
        .map(|c| f64::from(c.re * c.re + c.im * c.im).sqrt())
        .collect()
}

fn analyze_windows(spectra: &[Vec<f64>], sample_rate: u32) -> SpectralSummary {
    let n_bins = spectra.first().map(|s| s.len()).unwrap_or(0);
    if n_bins == 0 {
        return SpectralSummary::default();
    }

    // Average magnitude spectrum across windows
    let mut mean = vec![0.0f64; n_bins];
    for spectrum in spectra {
        for (acc, &m) in mean.iter_mut().zip(spectrum.iter()) {
            *acc += m;
        }
    }
    for acc in &mut mean {
        *acc /= spectra.len() as f64;
    }

    // Bin width: window covers up to Nyquist over n_bins bins
    let bin_hz = f64::from(sample_rate) / (2.0 * n_bins as f64);

    let power: Vec<f64> = mean.iter().map(|m| m * m).collect();
    let total_power: f64 = power.iter().sum();

    let mut summary = SpectralSummary::default();
    if total_power <= f64::EPSILON {
        return summary;
    }

    // Centroid: power-weighted mean frequency
    summary.centroid_hz = power
        .iter()
        .enumerate()
        .map(|(k, &p)| k as f64 * bin_hz * p)
        .sum::<f64>()
        / total_power;

    // Rolloff: lowest frequency holding 85% of cumulative power
    let mut cumulative = 0.0;
    for (k, &p) in power.iter().enumerate() {
        cumulative += p;
        if cumulative >= ROLLOFF_FRACTION * total_power {
            summary.rolloff_hz = k as f64 * bin_hz;
            break;
        }
    }

    // Band shares over fixed bin fractions
    let low_end = ((n_bins as f64 * LOW_BAND_FRACTION) as usize).max(1);
    let mid_end = ((n_bins as f64 * MID_BAND_FRACTION) as usize).max(low_end);
    let low: f64 = power[..low_end].iter().sum();
    let mid: f64 = power[low_end..mid_end].iter().sum();
    let high: f64 = power[mid_end..].iter().sum();
    summary.low_ratio = low / total_power;
    summary.mid_ratio = mid / total_power;
    summary.high_ratio = high / total_power;

    // Flux: mean rectified frame-to-frame change on the byte scale
    let peak = mean.iter().cloned().fold(f64::EPSILON, f64::max);
    if spectra.len() > 1 {
        let mut flux_sum = 0.0;
        for pair in spectra.windows(2) {
            let frame_flux: f64 = pair[0]
                .iter()
                .zip(pair[1].iter())
                .map(|(&prev, &next)| ((next - prev) / peak * BYTE_SCALE).max(0.0))
                .sum();
            flux_sum += frame_flux;
        }
        summary.flux = flux_sum / (spectra.len() - 1) as f64;
    }

    summary
}
