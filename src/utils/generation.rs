//! Test signal generation.

use std::f64::consts::PI;

use crate::repr::{RawSamples, SampleBuffer};

/// Generates `num_samples` of a sine wave at `frequency` Hz.
///
/// # Example
///
/// ```rust
/// use audio_quantization::utils::sine_wave;
///
/// let tone = sine_wave(440.0, 44100, 44100, 0.5);
/// assert_eq!(tone.len(), 44100);
/// ```
pub fn sine_wave(frequency: f64, num_samples: usize, sample_rate: u32, amplitude: f64) -> SampleBuffer {
    let rate = f64::from(sample_rate);
    let samples = (0..num_samples)
        .map(|i| amplitude * (2.0 * PI * frequency * i as f64 / rate).sin())
        .collect();
    SampleBuffer::from_vec(samples, sample_rate)
}

/// Generates an interleaved 16-bit stereo tone.
///
/// The left channel carries `left_frequency`, the right channel
/// `right_frequency`, both at `amplitude` of full scale.
pub fn stereo_tone(
    left_frequency: f64,
    right_frequency: f64,
    frames: usize,
    sample_rate: u32,
    amplitude: f64,
) -> RawSamples {
    let left = sine_wave(left_frequency, frames, sample_rate, amplitude);
    let right = sine_wave(right_frequency, frames, sample_rate, amplitude);
    let data = left
        .iter()
        .zip(right.iter())
        .flat_map(|(&l, &r)| [to_i16(l), to_i16(r)])
        .collect();
    RawSamples::new(data, sample_rate, 2)
}

fn to_i16(value: f64) -> i16 {
    (value * 32767.0).round().clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_tone_layout() {
        let raw = stereo_tone(440.0, 880.0, 100, 8000, 0.5);
        assert_eq!(raw.channels(), 2);
        assert_eq!(raw.frames(), 100);
        assert_eq!(&raw.as_slice()[..2], &[0, 0]);
        assert!(raw.as_slice().iter().all(|&s| s.unsigned_abs() <= 16384));
    }
}
