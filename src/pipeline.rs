//! End-to-end bit-depth analysis.
//!
//! The flow is:
//!
//! ```text
//! RawSamples → split_stereo → {L, R, M, S}
//!            → reduce_bit_depth → split_stereo → {L', R', M', S'}
//!            → compare per channel → channel average
//!            → magnitude_spectrum(M), magnitude_spectrum(M')
//!            → renderer / codec, as requested by the configuration
//! ```
//!
//! [`analyze`] is the pure numeric part. [`run`] validates the configuration,
//! calls [`analyze`] and then produces the requested artifacts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::AudioCodec;
use crate::config::{AnalysisConfig, OutputKind};
use crate::operations::quantization::BitDepthReduction;
use crate::operations::types::{ChannelKind, ChannelSet, Spectrum};
use crate::operations::{
    AudioChannelOps, AudioPlottingUtils, AudioQuantization, AudioStatistics, AudioTransforms,
};
use crate::render::{PlotSpec, Renderer, Series};
use crate::repr::{RAW_SAMPLE_BITS, RawSamples};
use crate::utils::comparison::{MetricResult, average_metrics, compare};
use crate::{AudioAnalysisError, AudioAnalysisResult};

/// Format summary of a loaded signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioInfo {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Total samples across all channels.
    pub sample_count: usize,
    /// Width of one sample in bits.
    pub sample_size_bits: u32,
}

impl AudioInfo {
    /// Summarizes `raw`.
    pub fn from_raw(raw: &RawSamples) -> Self {
        Self {
            sample_rate: raw.sample_rate(),
            channels: raw.channels(),
            duration_seconds: raw.duration_seconds(),
            sample_count: raw.len(),
            sample_size_bits: RAW_SAMPLE_BITS,
        }
    }
}

/// Metrics of one channel view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelMetrics {
    /// Which view was measured.
    pub channel: ChannelKind,
    /// MSE and SNR against the unquantized view.
    #[serde(flatten)]
    pub metrics: MetricResult,
}

/// Strongest bin of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPeak {
    /// Bin index.
    pub bin: usize,
    /// Bin frequency in Hz.
    pub frequency: f64,
    /// Unnormalized magnitude.
    pub magnitude: f64,
}

impl SpectrumPeak {
    fn of(spectrum: &Spectrum) -> Option<Self> {
        spectrum.peak().map(|(bin, frequency, magnitude)| Self {
            bin,
            frequency,
            magnitude,
        })
    }
}

/// Everything the numeric core computes for one signal.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The reduction that was applied.
    pub reduction: BitDepthReduction,
    /// Channel views of the original signal.
    pub original: ChannelSet,
    /// The quantized interleaved signal.
    pub quantized_raw: RawSamples,
    /// Channel views of the quantized signal.
    pub quantized: ChannelSet,
    /// Per-channel metrics in [`ChannelKind::ALL`] order.
    pub metrics: Vec<ChannelMetrics>,
    /// Channel-averaged metrics.
    pub average: MetricResult,
    /// Magnitude spectrum of the original mid channel.
    pub mid_spectrum: Spectrum,
    /// Magnitude spectrum of the quantized mid channel.
    pub quantized_mid_spectrum: Spectrum,
}

/// Serializable summary of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Name of the analysed source.
    pub source: String,
    /// Format of the source.
    pub info: AudioInfo,
    /// Bits removed from every sample.
    pub bits_to_reduce: u32,
    /// Bit depth after the reduction.
    pub effective_bit_depth: u32,
    /// Per-channel metrics.
    pub channels: Vec<ChannelMetrics>,
    /// Channel-averaged metrics.
    pub average: MetricResult,
    /// Strongest bin of the original mid spectrum.
    pub mid_spectrum_peak: Option<SpectrumPeak>,
    /// Strongest bin of the quantized mid spectrum.
    pub quantized_mid_spectrum_peak: Option<SpectrumPeak>,
    /// Plot identifiers handed to the renderer.
    pub plots: Vec<String>,
    /// Audio files written through the codec.
    pub audio_files: Vec<PathBuf>,
}

/// Runs the numeric pipeline on `raw`.
///
/// # Errors
/// - [`AudioAnalysisError::InputShape`] if `raw` is not stereo, has an odd
///   length or a zero sample rate.
/// - [`AudioAnalysisError::EmptyInput`] if `raw` holds no samples.
pub fn analyze(raw: &RawSamples, reduction: BitDepthReduction) -> AudioAnalysisResult<Analysis> {
    if raw.sample_rate() == 0 {
        return Err(AudioAnalysisError::input_shape("sample rate must be positive"));
    }
    let original = raw.split_stereo()?;
    if original.is_empty() {
        return Err(AudioAnalysisError::empty_input("signal has no samples"));
    }

    let quantized_raw = raw.reduce_bit_depth(reduction);
    let quantized = quantized_raw.split_stereo()?;

    let metrics = channel_metrics(&original, &quantized)?;
    let average = average_metrics(
        &metrics.iter().map(|m| m.metrics).collect::<Vec<_>>(),
    )
    .ok_or_else(|| AudioAnalysisError::empty_input("no channel metrics"))?;

    let mid_spectrum = original.mid.magnitude_spectrum()?;
    let quantized_mid_spectrum = quantized.mid.magnitude_spectrum()?;

    Ok(Analysis {
        reduction,
        original,
        quantized_raw,
        quantized,
        metrics,
        average,
        mid_spectrum,
        quantized_mid_spectrum,
    })
}

fn measure(
    kind: ChannelKind,
    original: &ChannelSet,
    quantized: &ChannelSet,
) -> AudioAnalysisResult<ChannelMetrics> {
    Ok(ChannelMetrics {
        channel: kind,
        metrics: compare(original.get(kind), quantized.get(kind))?,
    })
}

#[cfg(not(feature = "parallel-processing"))]
fn channel_metrics(
    original: &ChannelSet,
    quantized: &ChannelSet,
) -> AudioAnalysisResult<Vec<ChannelMetrics>> {
    ChannelKind::ALL
        .iter()
        .map(|&kind| measure(kind, original, quantized))
        .collect()
}

#[cfg(feature = "parallel-processing")]
fn channel_metrics(
    original: &ChannelSet,
    quantized: &ChannelSet,
) -> AudioAnalysisResult<Vec<ChannelMetrics>> {
    use rayon::prelude::*;

    ChannelKind::ALL[..]
        .par_iter()
        .map(|&kind| measure(kind, original, quantized))
        .collect()
}

/// Validates `config`, analyses `raw` and produces the requested artifacts.
///
/// `source` names the input; its file stem is reused for written audio files.
///
/// # Errors
/// Configuration errors are returned before any processing. Afterwards any
/// error from [`analyze`], the renderer or the codec aborts the run.
pub fn run(
    raw: &RawSamples,
    source: &Path,
    config: &AnalysisConfig,
    codec: &dyn AudioCodec,
    renderer: &mut dyn Renderer,
) -> AudioAnalysisResult<AnalysisReport> {
    let reduction = config.validate()?;
    let analysis = analyze(raw, reduction)?;

    for m in &analysis.metrics {
        tracing::info!(
            channel = %m.channel,
            bits_to_reduce = reduction.bits(),
            mse = m.metrics.mse,
            snr_db = m.metrics.snr_db,
            "channel metrics"
        );
    }

    let mut plots = Vec::new();
    for kind in config.outputs.iter().filter(|&k| config.wants_plot(k)) {
        for plot in plots_for(kind, &analysis, config)? {
            renderer.render(&plot)?;
            plots.push(plot.id);
        }
    }

    let mut audio_files = Vec::new();
    if config.wants_audio_file() {
        std::fs::create_dir_all(&config.output_dir)?;
        let path = config
            .output_dir
            .join(quantized_file_name(source, reduction));
        codec.save(&analysis.quantized_raw, &path)?;
        tracing::info!(path = %path.display(), "saved quantized audio");
        audio_files.push(path);
    }

    Ok(AnalysisReport {
        source: source.display().to_string(),
        info: AudioInfo::from_raw(raw),
        bits_to_reduce: reduction.bits(),
        effective_bit_depth: reduction.effective_bit_depth(),
        channels: analysis.metrics.clone(),
        average: analysis.average,
        mid_spectrum_peak: SpectrumPeak::of(&analysis.mid_spectrum),
        quantized_mid_spectrum_peak: SpectrumPeak::of(&analysis.quantized_mid_spectrum),
        plots,
        audio_files,
    })
}

/// `<stem>_<depth>bit.wav`, e.g. `sample01_12bit.wav`.
pub fn quantized_file_name(source: &Path, reduction: BitDepthReduction) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    format!("{stem}_{}bit.wav", reduction.effective_bit_depth())
}

fn plots_for(
    kind: OutputKind,
    analysis: &Analysis,
    config: &AnalysisConfig,
) -> AudioAnalysisResult<Vec<PlotSpec>> {
    let depth = analysis.reduction.effective_bit_depth();
    let max_points = config.max_waveform_points;

    match kind {
        OutputKind::Waveform => ChannelKind::ALL
            .iter()
            .map(|&channel| -> AudioAnalysisResult<PlotSpec> {
                let points = analysis.original.get(channel).waveform_points(max_points)?;
                Ok(PlotSpec {
                    id: format!("{}_waveform", channel.slug()),
                    title: format!("{channel} Waveform (downsampled)"),
                    x_label: "Time (s)".to_string(),
                    y_label: "Amplitude".to_string(),
                    series: vec![Series::line(channel.label(), points)],
                })
            })
            .collect(),
        OutputKind::QuantizedWaveform => ChannelKind::ALL
            .iter()
            .map(|&channel| -> AudioAnalysisResult<PlotSpec> {
                let points = analysis.quantized.get(channel).waveform_points(max_points)?;
                Ok(PlotSpec {
                    id: format!("{}_quantized_{depth}bit_waveform", channel.slug()),
                    title: format!("{channel} Waveform, {depth}-bit (downsampled)"),
                    x_label: "Time (s)".to_string(),
                    y_label: "Amplitude".to_string(),
                    series: vec![Series::line(format!("{channel} ({depth}-bit)"), points)],
                })
            })
            .collect(),
        OutputKind::Histogram => ChannelKind::ALL
            .iter()
            .map(|&channel| -> AudioAnalysisResult<PlotSpec> {
                let histogram = analysis.original.get(channel).histogram(config.histogram_bins)?;
                Ok(PlotSpec {
                    id: format!("{}_histogram", channel.slug()),
                    title: format!("{channel} Amplitude Histogram"),
                    x_label: "Amplitude".to_string(),
                    y_label: "Count".to_string(),
                    series: vec![Series::bars(channel.label(), histogram.points())],
                })
            })
            .collect(),
        OutputKind::Spectrum => Ok(vec![PlotSpec {
            id: format!("mid_spectrum_{depth}bit"),
            title: format!("Mid Channel Magnitude Spectrum, original vs {depth}-bit"),
            x_label: "Frequency (Hz)".to_string(),
            y_label: "Magnitude".to_string(),
            series: vec![
                Series::line("Original", analysis.mid_spectrum.points()),
                Series::line(
                    format!("Quantized ({depth}-bit)"),
                    analysis.quantized_mid_spectrum.points(),
                ),
            ],
        }]),
        OutputKind::AudioFile => Ok(Vec::new()),
    }
}
