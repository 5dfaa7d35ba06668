//! audio-quantization: measures the distortion introduced by discarding low
//! bits of a 16-bit stereo WAV file.
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audio_quantization::{
    AnalysisConfig, AnalysisReport, AudioCodec, AudioInfo, OutputKind, OutputSet, PlotlyRenderer,
    WavCodec, pipeline,
};

#[derive(Parser)]
#[command(name = "audio-quantization")]
#[command(about = "Bit-depth reduction analysis for 16-bit stereo audio", long_about = None)]
struct Cli {
    /// Input WAV file
    #[arg(required_unless_present = "sample_index", conflicts_with = "sample_index")]
    input: Option<PathBuf>,

    /// Pick `sampleNN.wav` from the dataset directory instead of an explicit path
    #[arg(short = 'i', long)]
    sample_index: Option<u32>,

    /// Directory searched by --sample-index
    #[arg(long, default_value = "datasets")]
    dataset_dir: PathBuf,

    /// Number of low bits to discard (0..=15)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    bits_to_reduce: i32,

    /// Plot the original waveforms
    #[arg(long)]
    waveform: bool,

    /// Plot the amplitude histograms
    #[arg(long)]
    histogram: bool,

    /// Plot the quantized waveforms
    #[arg(long)]
    quantized_waveform: bool,

    /// Write the quantized audio file
    #[arg(long)]
    audio_file: bool,

    /// Plot the mid channel spectrum before and after quantization
    #[arg(long)]
    spectrum: bool,

    /// Directory plots are written to
    #[arg(long, default_value = "plots")]
    plot_dir: PathBuf,

    /// Directory quantized audio is written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Maximum number of points per waveform plot
    #[arg(long, default_value_t = 10_000)]
    max_points: usize,

    /// Number of histogram bins
    #[arg(long, default_value_t = 100)]
    bins: usize,

    /// Write a JSON report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Skip every plot
    #[arg(long)]
    no_plots: bool,

    /// Skip writing audio files
    #[arg(long)]
    no_files: bool,
}

impl Cli {
    fn input_path(&self) -> anyhow::Result<PathBuf> {
        match (&self.input, self.sample_index) {
            (Some(path), _) => Ok(path.clone()),
            (None, Some(index)) => Ok(self.dataset_dir.join(format!("sample{index:02}.wav"))),
            (None, None) => anyhow::bail!("no input file given"),
        }
    }

    fn config(&self) -> AnalysisConfig {
        let selected = [
            (self.waveform, OutputKind::Waveform),
            (self.histogram, OutputKind::Histogram),
            (self.quantized_waveform, OutputKind::QuantizedWaveform),
            (self.audio_file, OutputKind::AudioFile),
            (self.spectrum, OutputKind::Spectrum),
        ]
        .into_iter()
        .filter_map(|(flag, kind)| flag.then_some(kind));

        AnalysisConfig {
            bits_to_reduce: self.bits_to_reduce,
            outputs: OutputSet::from_selection(selected),
            emit_plots: !self.no_plots,
            emit_files: !self.no_files,
            plot_dir: self.plot_dir.clone(),
            output_dir: self.output_dir.clone(),
            max_waveform_points: self.max_points,
            histogram_bins: self.bins,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audio_quantization=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    // fail before touching the file system
    config.validate().context("invalid arguments")?;

    let input = cli.input_path()?;
    let codec = WavCodec;
    let raw = codec
        .load(&input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    print_info(&input, &AudioInfo::from_raw(&raw));

    let mut renderer = PlotlyRenderer::new(&config.plot_dir);
    let report = pipeline::run(&raw, &input, &config, &codec, &mut renderer)
        .with_context(|| format!("analysis of {} failed", input.display()))?;
    print_metrics(&report);

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote report");
    }

    Ok(())
}

fn print_info(path: &Path, info: &AudioInfo) {
    println!("{}", format!("Audio: {}", path.display()).bold());
    println!("  Sample rate:  {} Hz", info.sample_rate);
    println!("  Channels:     {}", info.channels);
    println!("  Duration:     {:.3} s", info.duration_seconds);
    println!("  Samples:      {}", info.sample_count);
    println!("  Sample size:  {} bits", info.sample_size_bits);
}

fn print_metrics(report: &AnalysisReport) {
    println!();
    println!(
        "{}",
        format!(
            "Reduced by {} bits ({}-bit effective)",
            report.bits_to_reduce, report.effective_bit_depth
        )
        .bold()
    );
    for m in &report.channels {
        println!(
            "  {:<14} MSE {:>12.6e}   SNR {:>9.3} dB",
            m.channel.label(),
            m.metrics.mse,
            m.metrics.snr_db
        );
    }
    println!(
        "  {} MSE {:>12.6e}   SNR {:>9.3} dB",
        format!("{:<14}", "Average").green(),
        report.average.mse,
        report.average.snr_db
    );

    if !report.plots.is_empty() {
        println!("  {} plots written", report.plots.len());
    }
    for file in &report.audio_files {
        println!("  Saved {}", file.display());
    }
}
