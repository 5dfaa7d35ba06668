//! Bit-depth reduction by discarding low-order bits.
//!
//! Each 16-bit sample is arithmetic-shifted right by `b` bits and then shifted
//! back left by the same amount. The result is a uniform staircase quantizer
//! with a step of `2^b` and an effective depth of `16 - b` bits. Because the
//! right shift sign-extends, negative values round toward negative infinity
//! (`-500 >> 3 == -63`, so `-500` becomes `-504`).

use serde::{Deserialize, Serialize};

use super::traits::AudioQuantization;
use crate::repr::{RAW_SAMPLE_BITS, RawSamples};
use crate::{AudioAnalysisError, AudioAnalysisResult};

/// Largest number of bits that can be removed from a 16-bit sample.
pub const MAX_BITS_TO_REDUCE: u32 = RAW_SAMPLE_BITS - 1;

/// A validated number of bits to discard, in `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct BitDepthReduction(u8);

impl BitDepthReduction {
    /// No reduction; quantizing with it is the identity.
    pub const NONE: Self = Self(0);

    /// Validates `bits`.
    ///
    /// # Errors
    /// Returns [`AudioAnalysisError::Configuration`] for negative values or
    /// values above [`MAX_BITS_TO_REDUCE`].
    pub fn new(bits: i32) -> AudioAnalysisResult<Self> {
        match u8::try_from(bits) {
            Ok(bits) if u32::from(bits) <= MAX_BITS_TO_REDUCE => Ok(Self(bits)),
            _ => Err(AudioAnalysisError::configuration(format!(
                "bits to reduce must be in 0..={MAX_BITS_TO_REDUCE}, got {bits}"
            ))),
        }
    }

    /// Number of bits removed.
    pub fn bits(self) -> u32 {
        u32::from(self.0)
    }

    /// Bit depth left after the reduction.
    pub fn effective_bit_depth(self) -> u32 {
        RAW_SAMPLE_BITS - self.bits()
    }

    /// Distance between adjacent output levels, `2^bits`.
    pub const fn step_size(self) -> u32 {
        1 << self.0
    }

    /// Quantizes one sample.
    #[inline]
    pub const fn apply(self, sample: i16) -> i16 {
        (sample >> self.0) << self.0
    }
}

impl TryFrom<i32> for BitDepthReduction {
    type Error = AudioAnalysisError;

    fn try_from(bits: i32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<BitDepthReduction> for i32 {
    fn from(reduction: BitDepthReduction) -> Self {
        i32::from(reduction.0)
    }
}

impl AudioQuantization for RawSamples {
    fn reduce_bit_depth(&self, reduction: BitDepthReduction) -> Self {
        tracing::debug!(
            bits = reduction.bits(),
            effective_depth = reduction.effective_bit_depth(),
            samples = self.len(),
            "reducing bit depth"
        );
        let data = self
            .as_slice()
            .iter()
            .map(|&sample| reduction.apply(sample))
            .collect();
        self.with_data(data)
    }
}
