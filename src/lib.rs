// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![cfg_attr(not(test), warn(clippy::unwrap_used))] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![deny(missing_docs)] // Documentation is a must for release

//! # AudioQuantization
//!
//! Measures what reducing the bit depth of a 16-bit PCM signal does to it.
//!
//! A stereo signal is split into left, right, mid and side views. A copy of the
//! raw integer samples has its low bits discarded, is split the same way, and
//! each view is compared against its original with mean squared error and
//! signal-to-noise ratio. The mid channel of both versions is also taken to the
//! frequency domain, and waveforms, histograms and spectra are handed to a
//! renderer.
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`AudioAnalysisResult`]:
//!
//! ```rust
//! use audio_quantization::{AudioAnalysisError, BitDepthReduction};
//!
//! match BitDepthReduction::new(16) {
//!     Ok(_) => unreachable!(),
//!     Err(AudioAnalysisError::Configuration(msg)) => eprintln!("Invalid setting: {msg}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_quantization::{BitDepthReduction, RawSamples, pipeline::analyze};
//!
//! # fn example() -> Result<(), audio_quantization::AudioAnalysisError> {
//! // interleaved L/R samples
//! let raw = RawSamples::new(vec![1000, -1000, 500, -500], 8, 2);
//! let analysis = analyze(&raw, BitDepthReduction::new(3)?)?;
//!
//! for channel in &analysis.metrics {
//!     println!(
//!         "{}: MSE {:.3e}, SNR {:.2} dB",
//!         channel.channel, channel.metrics.mse, channel.metrics.snr_db
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `parallel-processing`: measures the four channel views on the rayon pool.

pub mod codec;
pub mod config;
pub mod error;
pub mod operations;
pub mod pipeline;
pub mod render;
pub mod repr;
pub mod utils;

pub use codec::{AudioCodec, WavCodec};
pub use config::{AnalysisConfig, OutputKind, OutputSet};
pub use error::{AudioAnalysisError, AudioAnalysisResult};
pub use operations::{
    AudioChannelOps, AudioPlottingUtils, AudioQuantization, AudioStatistics, AudioTransforms,
    BitDepthReduction, ChannelKind, ChannelSet, Histogram, Spectrum,
};
pub use pipeline::{Analysis, AnalysisReport, AudioInfo, ChannelMetrics};
pub use render::{PlotSpec, PlotlyRenderer, Renderer, Series};
pub use repr::{RawSamples, SampleBuffer};
pub use utils::comparison::MetricResult;
