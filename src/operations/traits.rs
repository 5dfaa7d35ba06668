//! Core trait definitions for the analysis operations.
//!
//! Each trait has a single responsibility. Raw, interleaved integer buffers
//! implement the ingestion-side traits ([`AudioChannelOps`],
//! [`AudioQuantization`]); normalized mono buffers implement the analysis-side
//! traits ([`AudioStatistics`], [`AudioTransforms`], [`AudioPlottingUtils`]).
//!
//! Every operation is pure: inputs are borrowed and never modified.

use super::plotting::WaveformPoints;
use super::quantization::BitDepthReduction;
use super::types::{ChannelSet, Histogram, Spectrum};
use crate::AudioAnalysisResult;

// Complex numbers using num-complex crate
pub use num_complex::Complex;

/// Channel decomposition of interleaved audio.
pub trait AudioChannelOps {
    /// Deinterleaves a stereo buffer into left and right channels and derives
    /// mid and side.
    ///
    /// # Errors
    /// Returns [`crate::AudioAnalysisError::InputShape`] if the buffer does not
    /// declare exactly two channels or has an odd number of samples.
    fn split_stereo(&self) -> AudioAnalysisResult<ChannelSet>;
}

/// Bit-depth reduction of integer audio.
pub trait AudioQuantization: Sized {
    /// Discards the low `reduction.bits()` bits of every sample and shifts the
    /// result back to the original scale.
    ///
    /// The output has the same length and format as the input.
    fn reduce_bit_depth(&self, reduction: BitDepthReduction) -> Self;
}

/// Amplitude statistics of a mono signal.
pub trait AudioStatistics {
    /// Smallest sample, or `None` for an empty buffer.
    fn min_sample(&self) -> Option<f64>;

    /// Largest sample, or `None` for an empty buffer.
    fn max_sample(&self) -> Option<f64>;

    /// Mean of the squared samples.
    ///
    /// # Errors
    /// Returns [`crate::AudioAnalysisError::EmptyInput`] for an empty buffer.
    fn mean_power(&self) -> AudioAnalysisResult<f64>;

    /// Equal-width amplitude histogram with `num_bins` bins.
    ///
    /// # Errors
    /// Returns [`crate::AudioAnalysisError::Configuration`] if `num_bins` is zero
    /// and [`crate::AudioAnalysisError::EmptyInput`] for an empty buffer.
    fn histogram(&self, num_bins: usize) -> AudioAnalysisResult<Histogram>;
}

/// Frequency-domain views of a mono signal.
pub trait AudioTransforms {
    /// Unnormalized forward DFT of the signal, one coefficient per sample.
    ///
    /// # Errors
    /// Returns [`crate::AudioAnalysisError::EmptyInput`] for an empty buffer.
    fn fft(&self) -> AudioAnalysisResult<Vec<Complex<f64>>>;

    /// One-sided magnitude spectrum with `N / 2` bins.
    ///
    /// # Errors
    /// Returns [`crate::AudioAnalysisError::EmptyInput`] for an empty buffer.
    fn magnitude_spectrum(&self) -> AudioAnalysisResult<Spectrum>;
}

/// Helpers for turning a signal into plot coordinates.
pub trait AudioPlottingUtils {
    /// Time-aligned waveform points, at most `max_points` of them.
    ///
    /// # Errors
    /// Returns [`crate::AudioAnalysisError::Configuration`] if `max_points` is zero.
    fn waveform_points(&self, max_points: usize) -> AudioAnalysisResult<WaveformPoints<'_>>;
}
