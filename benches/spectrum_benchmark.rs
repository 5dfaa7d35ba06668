//! Benchmark for the analysis stages on signals of increasing length.
//!
//! Covers power-of-two and non-power-of-two FFT sizes, since recordings rarely
//! have a power-of-two length.

use audio_quantization::utils::{sine_wave, stereo_tone};
use audio_quantization::{AudioTransforms, BitDepthReduction, pipeline};
use std::time::{Duration, Instant};

const NUM_RUNS: usize = 10;

fn time_runs<T>(mut f: impl FnMut() -> T) -> (Duration, Duration) {
    // Warm up
    for _ in 0..3 {
        std::hint::black_box(f());
    }

    let mut times = Vec::with_capacity(NUM_RUNS);
    for _ in 0..NUM_RUNS {
        let start = Instant::now();
        std::hint::black_box(f());
        times.push(start.elapsed());
    }
    let avg = times.iter().sum::<Duration>() / NUM_RUNS as u32;
    let min = times.iter().min().copied().unwrap_or_default();
    (avg, min)
}

fn benchmark_spectrum(num_samples: usize, label: &str) {
    let sample_rate = 44100;
    let signal = sine_wave(440.0, num_samples, sample_rate, 0.5);

    let (avg, min) = time_runs(|| signal.magnitude_spectrum());
    println!(
        "  {label:<28} N = {num_samples:>8}   avg {:>10.3} ms   min {:>10.3} ms",
        avg.as_secs_f64() * 1000.0,
        min.as_secs_f64() * 1000.0
    );
}

fn benchmark_analysis(duration: f64, label: &str) {
    let sample_rate = 44100;
    let frames = (duration * f64::from(sample_rate)) as usize;
    let raw = stereo_tone(440.0, 554.37, frames, sample_rate, 0.5);
    let reduction = BitDepthReduction::new(8).expect("8 bits is in range");

    let (avg, min) = time_runs(|| pipeline::analyze(&raw, reduction));
    println!(
        "  {label:<28} {duration:>6.1} s audio   avg {:>10.3} ms   min {:>10.3} ms",
        avg.as_secs_f64() * 1000.0,
        min.as_secs_f64() * 1000.0
    );
}

fn main() {
    println!("Magnitude spectrum");
    benchmark_spectrum(4096, "power of two (small)");
    benchmark_spectrum(4410, "non power of two (small)");
    benchmark_spectrum(1 << 20, "power of two (large)");
    benchmark_spectrum(44100 * 30, "non power of two (large)");

    println!();
    println!("Full analysis (split, quantize, metrics, spectra)");
    benchmark_analysis(1.0, "short clip");
    benchmark_analysis(10.0, "medium clip");
    benchmark_analysis(60.0, "long clip");
}
