//! Configuration parameters for a bit-depth analysis run.
//!
//! The configuration is built once (usually by the command line layer) and
//! passed explicitly into [`crate::pipeline::analyze`]. No stage reads
//! process-wide state.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::operations::plotting::DEFAULT_MAX_WAVEFORM_POINTS;
use crate::operations::quantization::BitDepthReduction;
use crate::{AudioAnalysisError, AudioAnalysisResult};

/// Artifacts a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Waveform plot of each original channel.
    Waveform,
    /// Amplitude histogram of each original channel.
    Histogram,
    /// Waveform plot of each quantized channel.
    QuantizedWaveform,
    /// The quantized signal written back through the codec.
    AudioFile,
    /// Magnitude spectrum of the original and quantized mid channel.
    Spectrum,
}

impl OutputKind {
    /// Every output kind.
    pub const ALL: [OutputKind; 5] = [
        OutputKind::Waveform,
        OutputKind::Histogram,
        OutputKind::QuantizedWaveform,
        OutputKind::AudioFile,
        OutputKind::Spectrum,
    ];

    /// Returns `true` for outputs handed to the renderer.
    pub const fn is_plot(self) -> bool {
        !matches!(self, OutputKind::AudioFile)
    }
}

/// The set of outputs requested for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSet(BTreeSet<OutputKind>);

impl OutputSet {
    /// Every output.
    pub fn all() -> Self {
        Self(OutputKind::ALL.into_iter().collect())
    }

    /// No outputs; only metrics are computed.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Builds a set from explicit selections. An empty selection means "all".
    pub fn from_selection(kinds: impl IntoIterator<Item = OutputKind>) -> Self {
        let selected: BTreeSet<_> = kinds.into_iter().collect();
        if selected.is_empty() {
            Self::all()
        } else {
            Self(selected)
        }
    }

    /// Returns `true` if `kind` was requested.
    pub fn contains(&self, kind: OutputKind) -> bool {
        self.0.contains(&kind)
    }

    /// Iterates over the requested kinds.
    pub fn iter(&self) -> impl Iterator<Item = OutputKind> + '_ {
        self.0.iter().copied()
    }
}

impl Default for OutputSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Analysis configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of low-order bits to discard (default: 0). Must be in `0..=15`.
    pub bits_to_reduce: i32,

    /// Outputs to produce (default: all).
    pub outputs: OutputSet,

    /// Hand plots to the renderer (default: true).
    pub emit_plots: bool,

    /// Write audio files through the codec (default: true).
    pub emit_files: bool,

    /// Directory for rendered plots (default: `plots`).
    pub plot_dir: PathBuf,

    /// Directory for written audio files (default: `output`).
    pub output_dir: PathBuf,

    /// Maximum points per waveform plot (default: 10000).
    pub max_waveform_points: usize,

    /// Histogram bin count (default: 100).
    pub histogram_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bits_to_reduce: 0,
            outputs: OutputSet::all(),
            emit_plots: true,
            emit_files: true,
            plot_dir: PathBuf::from("plots"),
            output_dir: PathBuf::from("output"),
            max_waveform_points: DEFAULT_MAX_WAVEFORM_POINTS,
            histogram_bins: 100,
        }
    }
}

impl AnalysisConfig {
    /// Checks every parameter and returns the validated bit reduction.
    ///
    /// # Errors
    /// Returns [`AudioAnalysisError::Configuration`] for an out-of-range
    /// `bits_to_reduce`, a zero point budget or a zero bin count.
    pub fn validate(&self) -> AudioAnalysisResult<BitDepthReduction> {
        let reduction = BitDepthReduction::new(self.bits_to_reduce)?;
        if self.max_waveform_points == 0 {
            return Err(AudioAnalysisError::configuration(
                "max_waveform_points must be at least 1",
            ));
        }
        if self.histogram_bins == 0 {
            return Err(AudioAnalysisError::configuration(
                "histogram_bins must be at least 1",
            ));
        }
        Ok(reduction)
    }

    /// Returns `true` if `kind` should be rendered.
    pub fn wants_plot(&self, kind: OutputKind) -> bool {
        self.emit_plots && kind.is_plot() && self.outputs.contains(kind)
    }

    /// Returns `true` if the quantized audio should be written.
    pub fn wants_audio_file(&self) -> bool {
        self.emit_files && self.outputs.contains(OutputKind::AudioFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.validate().unwrap(), BitDepthReduction::NONE);
        assert_eq!(config.max_waveform_points, 10_000);
        for kind in OutputKind::ALL {
            assert!(config.outputs.contains(kind));
        }
    }

    #[test]
    fn test_empty_selection_means_all() {
        assert_eq!(OutputSet::from_selection(Vec::<OutputKind>::new()), OutputSet::all());
        let only = OutputSet::from_selection([OutputKind::Spectrum]);
        assert!(only.contains(OutputKind::Spectrum));
        assert!(!only.contains(OutputKind::Waveform));
        assert_eq!(only.iter().count(), 1);
    }

    #[test]
    fn test_flags_gate_outputs() {
        let config = AnalysisConfig {
            emit_plots: false,
            ..AnalysisConfig::default()
        };
        assert!(!config.wants_plot(OutputKind::Waveform));
        assert!(config.wants_audio_file());
        assert!(!config.wants_plot(OutputKind::AudioFile));

        let config = AnalysisConfig {
            emit_files: false,
            outputs: OutputSet::none(),
            ..AnalysisConfig::default()
        };
        assert!(!config.wants_audio_file());
        assert!(!config.wants_plot(OutputKind::Spectrum));
    }

    #[test]
    fn test_validation_errors() {
        for config in [
            AnalysisConfig {
                bits_to_reduce: 16,
                ..AnalysisConfig::default()
            },
            AnalysisConfig {
                bits_to_reduce: -1,
                ..AnalysisConfig::default()
            },
            AnalysisConfig {
                max_waveform_points: 0,
                ..AnalysisConfig::default()
            },
            AnalysisConfig {
                histogram_bins: 0,
                ..AnalysisConfig::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(AudioAnalysisError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_serde_round_trip_of_output_names() {
        let json = serde_json::to_string(&OutputKind::QuantizedWaveform).unwrap();
        assert_eq!(json, "\"quantized-waveform\"");
    }
}
