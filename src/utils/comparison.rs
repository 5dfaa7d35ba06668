//! Distortion metrics between an original and a processed signal.
//!
//! This module measures how far a processed signal has moved from its
//! reference:
//!
//! - `mse = (1/N) * sum((original - processed)^2)`
//! - `snr = 10 * log10(signal_power / mse)` in dB, with
//!   `signal_power = (1/N) * sum(original^2)`
//!
//! # SNR sentinels
//!
//! When `mse == 0` the processed signal is identical to the original and the
//! ratio is unbounded; [`snr`] returns `f64::INFINITY` for that case without
//! dividing. A silent original with a non-zero error yields
//! `f64::NEG_INFINITY`.

use serde::{Deserialize, Serialize};

use crate::operations::AudioStatistics;
use crate::repr::SampleBuffer;
use crate::{AudioAnalysisError, AudioAnalysisResult};

/// MSE and SNR of one (original, processed) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Mean squared error, always `>= 0`.
    pub mse: f64,
    /// Signal-to-noise ratio in dB. `+inf` when `mse == 0`.
    pub snr_db: f64,
}

/// Computes the Mean Squared Error (MSE) between two signals.
///
/// # Errors
/// Returns [`AudioAnalysisError::LengthMismatch`] if the lengths differ and
/// [`AudioAnalysisError::EmptyInput`] if both are empty.
pub fn mse(original: &SampleBuffer, processed: &SampleBuffer) -> AudioAnalysisResult<f64> {
    check_pair(original, processed)?;
    let diff = &original.samples() - &processed.samples();
    Ok(diff.mapv(|d| d * d).sum() / original.len() as f64)
}

/// Computes the Signal-to-Noise Ratio (SNR) in dB of `processed` against `original`.
///
/// The noise is the difference between the two signals. See the module docs for
/// the sentinel values.
///
/// # Errors
/// Same as [`mse`].
pub fn snr(original: &SampleBuffer, processed: &SampleBuffer) -> AudioAnalysisResult<f64> {
    let noise_power = mse(original, processed)?;
    let signal_power = original.mean_power()?;
    Ok(snr_from_powers(signal_power, noise_power))
}

/// Computes both metrics for a pair of signals.
///
/// # Errors
/// Same as [`mse`].
pub fn compare(
    original: &SampleBuffer,
    processed: &SampleBuffer,
) -> AudioAnalysisResult<MetricResult> {
    let mse = mse(original, processed)?;
    let snr_db = snr_from_powers(original.mean_power()?, mse);
    Ok(MetricResult { mse, snr_db })
}

/// `10 * log10(signal_power / noise_power)`, with `+inf` for zero noise.
pub fn snr_from_powers(signal_power: f64, noise_power: f64) -> f64 {
    if noise_power == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (signal_power / noise_power).log10()
}

/// Averages metrics across channels.
///
/// Both fields are plain arithmetic means: the SNR is averaged in the dB domain,
/// not converted back to power first. Any infinite channel SNR therefore makes
/// the average infinite, and a mix of `+inf` and `-inf` channels makes it NaN.
/// Returns `None` for an empty slice.
pub fn average_metrics(results: &[MetricResult]) -> Option<MetricResult> {
    if results.is_empty() {
        return None;
    }
    let n = results.len() as f64;
    Some(MetricResult {
        mse: results.iter().map(|r| r.mse).sum::<f64>() / n,
        snr_db: results.iter().map(|r| r.snr_db).sum::<f64>() / n,
    })
}

fn check_pair(original: &SampleBuffer, processed: &SampleBuffer) -> AudioAnalysisResult<()> {
    if original.len() != processed.len() {
        return Err(AudioAnalysisError::LengthMismatch {
            original: original.len(),
            processed: processed.len(),
        });
    }
    if original.is_empty() {
        return Err(AudioAnalysisError::empty_input(
            "distortion metrics need at least one sample",
        ));
    }
    Ok(())
}
