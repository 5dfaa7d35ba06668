//! Sample representations used across the analysis pipeline.
//!
//! Two representations exist:
//!
//! - [`RawSamples`] holds the codec's native 16-bit integers, interleaved by
//!   channel. It only lives at the ingestion and quantization boundary.
//! - [`SampleBuffer`] holds one channel of normalized `f64` samples backed by an
//!   [`ndarray::Array1`]. Buffers are created once by the stage that produces them
//!   and are never mutated afterwards.
//!
//! The two are related by a fixed scale factor of [`I16_SCALE`].

use ndarray::{Array1, ArrayView1};

/// Scale factor between a 16-bit integer sample and its normalized value.
pub const I16_SCALE: f64 = 32768.0;

/// Width of a raw sample in bits.
pub const RAW_SAMPLE_BITS: u32 = i16::BITS;

/// Converts a raw 16-bit sample to its normalized `f64` value.
#[inline]
pub fn i16_to_f64(sample: i16) -> f64 {
    f64::from(sample) / I16_SCALE
}

/// A mono signal of normalized samples, nominally in `[-1.0, 1.0]`.
///
/// The range is not enforced: arithmetic such as the side channel of a
/// full-scale anti-phase signal may leave it transiently.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    data: Array1<f64>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a buffer from an owned array.
    pub const fn new(data: Array1<f64>, sample_rate: u32) -> Self {
        Self { data, sample_rate }
    }

    /// Creates a buffer from a vector of samples.
    pub fn from_vec(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self::new(Array1::from_vec(samples), sample_rate)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Read-only view of the samples.
    pub fn samples(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> ndarray::iter::Iter<'_, f64, ndarray::Ix1> {
        self.data.iter()
    }

    /// Sample at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Copies the samples into a plain vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }
}

/// Codec-native 16-bit samples, interleaved by channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSamples {
    data: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl RawSamples {
    /// Wraps an interleaved buffer together with its format.
    pub const fn new(data: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        Self {
            data,
            sample_rate,
            channels,
        }
    }

    /// Interleaved samples.
    pub fn as_slice(&self) -> &[i16] {
        &self.data
    }

    /// Total number of samples across all channels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels.
    pub const fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (one sample per channel).
    pub fn frames(&self) -> usize {
        match self.channels {
            0 => 0,
            n => self.data.len() / usize::from(n),
        }
    }

    /// Duration in seconds, derived from the frame count.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / f64::from(self.sample_rate)
    }

    /// Builds a buffer with the same format but different sample data.
    pub(crate) const fn with_data(&self, data: Vec<i16>) -> Self {
        Self::new(data, self.sample_rate, self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_i16_scale() {
        assert_eq!(i16_to_f64(0), 0.0);
        assert_eq!(i16_to_f64(i16::MIN), -1.0);
        assert_approx_eq!(i16_to_f64(16384), 0.5, 1e-12);
        assert!(i16_to_f64(i16::MAX) < 1.0);
    }

    #[test]
    fn test_sample_buffer_accessors() {
        let buffer = SampleBuffer::from_vec(vec![0.1, -0.2, 0.3, -0.4], 4);
        assert_eq!(buffer.len(), 4);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.get(2), Some(0.3));
        assert_eq!(buffer.get(4), None);
        assert_eq!(buffer.sample_rate(), 4);
        assert_eq!(buffer.to_vec(), vec![0.1, -0.2, 0.3, -0.4]);
    }

    #[test]
    fn test_raw_samples_frames() {
        let raw = RawSamples::new(vec![1, 2, 3, 4, 5, 6], 3, 2);
        assert_eq!(raw.len(), 6);
        assert_eq!(raw.frames(), 3);
        assert_approx_eq!(raw.duration_seconds(), 1.0, 1e-12);

        let no_channels = RawSamples::new(vec![1, 2], 3, 0);
        assert_eq!(no_channels.frames(), 0);
    }
}
