//! Signal analysis operations.
//!
//! This module groups the analysis stages into focused, composable traits.
//! Each trait handles one step of the bit-depth analysis.
//!
//! ## Module Organization
//!
//! - [`traits`] - Core trait definitions
//! - [`channels`] - Stereo deinterleaving and mid/side derivation
//! - [`quantization`] - Bit-depth reduction
//! - [`statistics`] - Amplitude statistics and histograms
//! - [`transforms`] - FFT and magnitude spectrum
//! - [`plotting`] - Waveform downsampling for visualization
//! - [`types`] - Supporting types
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_quantization::RawSamples;
//! use audio_quantization::operations::*;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = RawSamples::new(vec![1000, -1000, 500, -500], 8, 2);
//!
//! let original = raw.split_stereo()?;
//! let quantized = raw
//!     .reduce_bit_depth(BitDepthReduction::new(3)?)
//!     .split_stereo()?;
//!
//! let spectrum = original.mid.magnitude_spectrum()?;
//! let histogram = original.left.histogram(10)?;
//! assert_eq!(histogram.total_count(), 2);
//! # let _ = (quantized, spectrum);
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub mod types;

pub mod channels;
pub mod plotting;
pub mod quantization;
pub mod statistics;
pub mod transforms;

// Re-export main traits for convenience
pub use traits::{
    AudioChannelOps, AudioPlottingUtils, AudioQuantization, AudioStatistics, AudioTransforms,
};

// Re-export supporting types
pub use plotting::WaveformPoints;
pub use quantization::BitDepthReduction;
pub use types::{ChannelKind, ChannelSet, Histogram, HistogramBin, Spectrum};
