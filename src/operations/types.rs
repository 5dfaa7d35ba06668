//! Supporting types produced by the analysis operations.
//!
//! This module contains the channel naming, the decomposed channel set and the
//! frequency/amplitude summaries handed to the renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::repr::SampleBuffer;

/// The four views of a stereo signal that are analysed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// First interleaved channel.
    Left,
    /// Second interleaved channel.
    Right,
    /// Sum channel, `(L + R) / 2`.
    Mid,
    /// Difference channel, `(L - R) / 2`.
    Side,
}

impl ChannelKind {
    /// All channel kinds in reporting order.
    pub const ALL: [ChannelKind; 4] = [
        ChannelKind::Left,
        ChannelKind::Right,
        ChannelKind::Mid,
        ChannelKind::Side,
    ];

    /// Human readable label, e.g. `"Left Channel"`.
    pub const fn label(self) -> &'static str {
        match self {
            ChannelKind::Left => "Left Channel",
            ChannelKind::Right => "Right Channel",
            ChannelKind::Mid => "Mid Channel",
            ChannelKind::Side => "Side Channel",
        }
    }

    /// Lower-case identifier used in output file names.
    pub const fn slug(self) -> &'static str {
        match self {
            ChannelKind::Left => "left",
            ChannelKind::Right => "right",
            ChannelKind::Mid => "mid",
            ChannelKind::Side => "side",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Left, right, mid and side buffers of a stereo signal.
///
/// All four buffers have the same length and sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSet {
    /// Left channel.
    pub left: SampleBuffer,
    /// Right channel.
    pub right: SampleBuffer,
    /// Mid channel, `(L + R) / 2`.
    pub mid: SampleBuffer,
    /// Side channel, `(L - R) / 2`.
    pub side: SampleBuffer,
}

impl ChannelSet {
    /// Returns the buffer for `kind`.
    pub const fn get(&self, kind: ChannelKind) -> &SampleBuffer {
        match kind {
            ChannelKind::Left => &self.left,
            ChannelKind::Right => &self.right,
            ChannelKind::Mid => &self.mid,
            ChannelKind::Side => &self.side,
        }
    }

    /// Iterates over `(kind, buffer)` pairs in [`ChannelKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ChannelKind, &SampleBuffer)> {
        ChannelKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns `true` if the channels hold no samples.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Sample rate shared by all four channels.
    pub const fn sample_rate(&self) -> u32 {
        self.left.sample_rate()
    }
}

/// One-sided magnitude spectrum.
///
/// `frequencies` and `magnitudes` are parallel and ordered by bin index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Bin frequencies in Hz, `i * sample_rate / N`.
    pub frequencies: Vec<f64>,
    /// Unnormalized coefficient magnitudes.
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Returns `true` if the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Index, frequency and magnitude of the strongest bin.
    ///
    /// Ties resolve to the lowest bin.
    pub fn peak(&self) -> Option<(usize, f64, f64)> {
        let (index, magnitude) = self
            .magnitudes
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, m)| match best {
                Some((_, best_m)) if best_m >= m => best,
                _ => Some((i, m)),
            })?;
        Some((index, self.frequencies[index], magnitude))
    }

    /// `(frequency, magnitude)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }
}

/// A single histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Amplitude at the center of the bin.
    pub center: f64,
    /// Number of samples that fell into the bin.
    pub count: usize,
}

/// Equal-width amplitude histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bins ordered by ascending amplitude.
    pub bins: Vec<HistogramBin>,
    /// Width of every bin. Zero when all samples were equal.
    pub bin_width: f64,
    /// Smallest sample value.
    pub min: f64,
    /// Largest sample value.
    pub max: f64,
}

impl Histogram {
    /// Sum of all bin counts. Always equals the binned buffer's length.
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns `true` if every sample had the same value.
    pub fn is_degenerate(&self) -> bool {
        self.bin_width == 0.0
    }

    /// `(center, count)` pairs as plot coordinates.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bins.iter().map(|bin| (bin.center, bin.count as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_kind_labels() {
        assert_eq!(ChannelKind::Left.to_string(), "Left Channel");
        assert_eq!(ChannelKind::Side.slug(), "side");
        assert_eq!(ChannelKind::ALL.len(), 4);
    }

    #[test]
    fn test_spectrum_peak_prefers_lowest_bin_on_tie() {
        let spectrum = Spectrum {
            frequencies: vec![0.0, 1.0, 2.0, 3.0],
            magnitudes: vec![1.0, 5.0, 5.0, 2.0],
        };
        assert_eq!(spectrum.peak(), Some((1, 1.0, 5.0)));

        let empty = Spectrum {
            frequencies: vec![],
            magnitudes: vec![],
        };
        assert_eq!(empty.peak(), None);
    }

    #[test]
    fn test_histogram_total_count() {
        let histogram = Histogram {
            bins: vec![
                HistogramBin {
                    center: 0.25,
                    count: 3,
                },
                HistogramBin {
                    center: 0.75,
                    count: 2,
                },
            ],
            bin_width: 0.5,
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(histogram.total_count(), 5);
        assert!(!histogram.is_degenerate());
        let points: Vec<_> = histogram.points().collect();
        assert_eq!(points, vec![(0.25, 3.0), (0.75, 2.0)]);
    }
}
