//! Spectral analysis for SampleBuffer.
//!
//! This module implements the AudioTransforms trait using rustfft. The
//! planner picks a mixed-radix algorithm for arbitrary lengths, so buffers do
//! not need to be a power of two. No window is applied, the input is not
//! zero-padded and magnitudes are not normalized by `N`.

use super::traits::AudioTransforms;
use super::types::Spectrum;
use crate::repr::SampleBuffer;
use crate::{AudioAnalysisError, AudioAnalysisResult};
use rustfft::{FftPlanner, num_complex::Complex};

impl AudioTransforms for SampleBuffer {
    /// Computes the Fast Fourier Transform of the samples.
    ///
    /// The real input is treated as a complex sequence with zero imaginary part.
    fn fft(&self) -> AudioAnalysisResult<Vec<Complex<f64>>> {
        if self.is_empty() {
            return Err(AudioAnalysisError::empty_input(
                "cannot compute the FFT of an empty signal",
            ));
        }

        let mut buffer: Vec<Complex<f64>> = self.iter().map(|&x| Complex::new(x, 0.0)).collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);

        Ok(buffer)
    }

    /// Derives the one-sided magnitude spectrum from [`AudioTransforms::fft`].
    ///
    /// Bin `i` in `0..N/2` has frequency `i * sample_rate / N` and magnitude
    /// `|X[i]|`.
    fn magnitude_spectrum(&self) -> AudioAnalysisResult<Spectrum> {
        let coefficients = self.fft()?;
        let n = coefficients.len();
        let bins = n / 2;
        let resolution = f64::from(self.sample_rate()) / n as f64;

        let frequencies = (0..bins).map(|i| i as f64 * resolution).collect();
        let magnitudes = coefficients[..bins].iter().map(|c| c.norm()).collect();

        tracing::debug!(samples = n, bins, "computed magnitude spectrum");

        Ok(Spectrum {
            frequencies,
            magnitudes,
        })
    }
}
