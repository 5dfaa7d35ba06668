//! Statistical analysis operations for SampleBuffer.
//!
//! This module implements the AudioStatistics trait: amplitude extremes, mean
//! power and the equal-width amplitude histogram.

use super::traits::AudioStatistics;
use super::types::{Histogram, HistogramBin};
use crate::repr::SampleBuffer;
use crate::{AudioAnalysisError, AudioAnalysisResult};

impl AudioStatistics for SampleBuffer {
    fn min_sample(&self) -> Option<f64> {
        self.iter().copied().reduce(f64::min)
    }

    fn max_sample(&self) -> Option<f64> {
        self.iter().copied().reduce(f64::max)
    }

    /// Computes `(1/N) * sum(x^2)`.
    fn mean_power(&self) -> AudioAnalysisResult<f64> {
        if self.is_empty() {
            return Err(AudioAnalysisError::empty_input(
                "cannot compute the power of an empty signal",
            ));
        }
        let squares = &self.samples() * &self.samples();
        Ok(squares.sum() / self.len() as f64)
    }

    /// Bins samples into `num_bins` equal-width bins spanning `[min, max]`.
    ///
    /// A sample equal to `max` lands in the last bin. When every sample has the
    /// same value the range is empty: all samples go into bin 0, the remaining
    /// bins stay empty and every center equals that value.
    fn histogram(&self, num_bins: usize) -> AudioAnalysisResult<Histogram> {
        if num_bins == 0 {
            return Err(AudioAnalysisError::configuration(
                "histogram needs at least one bin",
            ));
        }
        let (Some(min), Some(max)) = (self.min_sample(), self.max_sample()) else {
            return Err(AudioAnalysisError::empty_input(
                "cannot build a histogram of an empty signal",
            ));
        };

        let mut counts = vec![0usize; num_bins];
        let bin_width = (max - min) / num_bins as f64;

        if bin_width > 0.0 {
            for &value in self.iter() {
                // `as usize` saturates, so NaN maps to bin 0
                let bin = ((value - min) / bin_width).floor() as usize;
                counts[bin.min(num_bins - 1)] += 1;
            }
        } else {
            tracing::warn!(
                value = min,
                samples = self.len(),
                "constant signal, placing every sample in the first histogram bin"
            );
            counts[0] = self.len();
        }

        let bin_width = bin_width.max(0.0);
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                center: min + (i as f64 + 0.5) * bin_width,
                count,
            })
            .collect();

        Ok(Histogram {
            bins,
            bin_width,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generation::sine_wave;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_min_max() {
        let buffer = SampleBuffer::from_vec(vec![0.1, -0.7, 0.4, 0.9, -0.2], 8000);
        assert_eq!(buffer.min_sample(), Some(-0.7));
        assert_eq!(buffer.max_sample(), Some(0.9));

        let empty = SampleBuffer::from_vec(vec![], 8000);
        assert_eq!(empty.min_sample(), None);
        assert_eq!(empty.max_sample(), None);
    }

    #[test]
    fn test_mean_power() {
        let buffer = SampleBuffer::from_vec(vec![0.5, -0.5, 1.0, 0.0], 8000);
        assert_approx_eq!(buffer.mean_power().unwrap(), 0.375, 1e-12);
        assert!(matches!(
            SampleBuffer::from_vec(vec![], 8000).mean_power(),
            Err(AudioAnalysisError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_histogram_counts_sum_to_length() {
        let buffer = sine_wave(440.0, 4410, 44100, 0.9);
        for num_bins in [1, 2, 7, 10, 100, 5000] {
            let histogram = buffer.histogram(num_bins).unwrap();
            assert_eq!(histogram.bins.len(), num_bins);
            assert_eq!(histogram.total_count(), buffer.len());
        }
    }

    #[test]
    fn test_histogram_edges_and_centers() {
        let buffer = SampleBuffer::from_vec(vec![0.0, 0.1, 0.5, 0.74, 0.75, 1.0], 8000);
        let histogram = buffer.histogram(4).unwrap();

        assert_approx_eq!(histogram.bin_width, 0.25, 1e-12);
        let counts: Vec<usize> = histogram.bins.iter().map(|b| b.count).collect();
        // the maximum value falls into the last bin
        assert_eq!(counts, vec![2, 0, 2, 2]);
        let centers: Vec<f64> = histogram.bins.iter().map(|b| b.center).collect();
        for (center, expected) in centers.iter().zip([0.125, 0.375, 0.625, 0.875]) {
            assert_approx_eq!(*center, expected, 1e-12);
        }
    }

    #[test]
    fn test_histogram_constant_signal() {
        let buffer = SampleBuffer::from_vec(vec![0.3; 100], 8000);
        let histogram = buffer.histogram(10).unwrap();

        assert!(histogram.is_degenerate());
        assert_eq!(histogram.bins.len(), 10);
        assert_eq!(histogram.bins[0].count, 100);
        assert_eq!(histogram.bins.iter().filter(|b| b.count == 100).count(), 1);
        assert!(histogram.bins[1..].iter().all(|b| b.count == 0));
        assert!(histogram.bins.iter().all(|b| b.center == 0.3));
    }

    #[test]
    fn test_histogram_invalid_arguments() {
        let buffer = SampleBuffer::from_vec(vec![0.1, 0.2], 8000);
        assert!(matches!(
            buffer.histogram(0),
            Err(AudioAnalysisError::Configuration(_))
        ));
        assert!(matches!(
            SampleBuffer::from_vec(vec![], 8000).histogram(10),
            Err(AudioAnalysisError::EmptyInput(_))
        ));
    }
}
