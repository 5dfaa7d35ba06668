//! Channel decomposition for interleaved stereo audio.
//!
//! Implements [`AudioChannelOps`] for [`RawSamples`]. The interleaved stream
//! `L0 R0 L1 R1 ...` is split into normalized left and right buffers, and the
//! mid/side pair is derived elementwise:
//!
//! - `mid[i]  = (left[i] + right[i]) / 2`
//! - `side[i] = (left[i] - right[i]) / 2`

use ndarray::Array1;

use super::traits::AudioChannelOps;
use super::types::ChannelSet;
use crate::repr::{RawSamples, SampleBuffer, i16_to_f64};
use crate::{AudioAnalysisError, AudioAnalysisResult};

/// Number of channels the analysis path accepts.
pub const STEREO_CHANNELS: u16 = 2;

impl AudioChannelOps for RawSamples {
    fn split_stereo(&self) -> AudioAnalysisResult<ChannelSet> {
        if self.channels() != STEREO_CHANNELS {
            return Err(AudioAnalysisError::input_shape(format!(
                "expected {STEREO_CHANNELS} interleaved channels, found {}",
                self.channels()
            )));
        }
        if self.len() % 2 != 0 {
            return Err(AudioAnalysisError::input_shape(format!(
                "interleaved stereo buffer must have an even length, found {}",
                self.len()
            )));
        }

        let (left, right): (Vec<f64>, Vec<f64>) = self
            .as_slice()
            .chunks_exact(2)
            .map(|frame| (i16_to_f64(frame[0]), i16_to_f64(frame[1])))
            .unzip();

        let left = Array1::from_vec(left);
        let right = Array1::from_vec(right);
        let mid = (&left + &right) / 2.0;
        let side = (&left - &right) / 2.0;

        tracing::debug!(frames = left.len(), "split interleaved stereo buffer");

        let sample_rate = self.sample_rate();
        Ok(ChannelSet {
            left: SampleBuffer::new(left, sample_rate),
            right: SampleBuffer::new(right, sample_rate),
            mid: SampleBuffer::new(mid, sample_rate),
            side: SampleBuffer::new(side, sample_rate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lengths_and_values() {
        let raw = RawSamples::new(vec![16384, -16384, 8192, 0, -32768, 32767], 44100, 2);
        let channels = raw.split_stereo().unwrap();

        assert_eq!(channels.len(), 3);
        assert_eq!(channels.left.to_vec(), vec![0.5, 0.25, -1.0]);
        assert_eq!(
            channels.right.to_vec(),
            vec![-0.5, 0.0, 32767.0 / 32768.0]
        );
        assert_eq!(channels.sample_rate(), 44100);
    }

    #[test]
    fn test_mid_side_identity() {
        let raw: Vec<i16> = (0..200).map(|i| ((i * 7919) % 65536 - 32768) as i16).collect();
        let raw = RawSamples::new(raw, 8000, 2);
        let channels = raw.split_stereo().unwrap();

        assert_eq!(channels.left.len(), 100);
        assert_eq!(channels.right.len(), 100);
        for i in 0..channels.len() {
            let l = channels.left.get(i).unwrap();
            let r = channels.right.get(i).unwrap();
            assert_eq!(channels.mid.get(i).unwrap(), (l + r) / 2.0);
            assert_eq!(channels.side.get(i).unwrap(), (l - r) / 2.0);
        }
    }

    #[test]
    fn test_empty_stereo_buffer() {
        let channels = RawSamples::new(vec![], 8000, 2).split_stereo().unwrap();
        assert!(channels.is_empty());
    }

    #[test]
    fn test_odd_length_is_rejected() {
        let raw = RawSamples::new(vec![1, 2, 3], 8000, 2);
        assert!(matches!(
            raw.split_stereo(),
            Err(AudioAnalysisError::InputShape(_))
        ));
    }

    #[test]
    fn test_non_stereo_is_rejected() {
        for channels in [0, 1, 3, 6] {
            let raw = RawSamples::new(vec![0; 12], 8000, channels);
            assert!(matches!(
                raw.split_stereo(),
                Err(AudioAnalysisError::InputShape(_))
            ));
        }
    }
}
