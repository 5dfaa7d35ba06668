//! Waveform downsampling for visualization.

use super::traits::AudioPlottingUtils;
use crate::repr::SampleBuffer;
use crate::{AudioAnalysisError, AudioAnalysisResult};

/// Default upper bound on the number of points drawn for one waveform.
pub const DEFAULT_MAX_WAVEFORM_POINTS: usize = 10_000;

/// Picks the decimation stride for `len` samples and at most `max_points` points.
///
/// Returns `ceil(len / max_points)` when the signal is longer than the target and
/// `1` otherwise.
pub const fn waveform_stride(len: usize, max_points: usize) -> usize {
    if max_points > 0 && len > max_points {
        len.div_ceil(max_points)
    } else {
        1
    }
}

/// Lazy `(time, amplitude)` points of a decimated waveform.
///
/// Yields every `stride`-th sample together with its true offset in seconds,
/// `index / sample_rate`, so decimation keeps the original time axis.
#[derive(Debug, Clone)]
pub struct WaveformPoints<'a> {
    buffer: &'a SampleBuffer,
    stride: usize,
    next_index: usize,
}

impl WaveformPoints<'_> {
    /// Stride between emitted samples.
    pub const fn stride(&self) -> usize {
        self.stride
    }

    fn time_of(&self, index: usize) -> f64 {
        match self.buffer.sample_rate() {
            0 => 0.0,
            rate => index as f64 / f64::from(rate),
        }
    }
}

impl Iterator for WaveformPoints<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        let amplitude = self.buffer.get(index)?;
        self.next_index = index.saturating_add(self.stride);
        Some((self.time_of(index), amplitude))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .buffer
            .len()
            .saturating_sub(self.next_index)
            .div_ceil(self.stride);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WaveformPoints<'_> {}

impl std::iter::FusedIterator for WaveformPoints<'_> {}

impl AudioPlottingUtils for SampleBuffer {
    fn waveform_points(&self, max_points: usize) -> AudioAnalysisResult<WaveformPoints<'_>> {
        if max_points == 0 {
            return Err(AudioAnalysisError::configuration(
                "waveform needs a positive point budget",
            ));
        }
        let stride = waveform_stride(self.len(), max_points);
        tracing::debug!(samples = self.len(), stride, "downsampling waveform");
        Ok(WaveformPoints {
            buffer: self,
            stride,
            next_index: 0,
        })
    }
}
