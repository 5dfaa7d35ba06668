//! Rendering of plot series.
//!
//! The analysis core describes what to draw with a [`PlotSpec`] and hands it to
//! a [`Renderer`]. It never inspects what the renderer produces.
//! [`PlotlyRenderer`] writes one standalone HTML file per plot.

use std::path::PathBuf;

use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot, Scatter};

use crate::{AudioAnalysisError, AudioAnalysisResult};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesStyle {
    /// Connected line.
    #[default]
    Line,
    /// Vertical bars, one per point.
    Bars,
}

/// A named sequence of `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub name: String,
    /// Point coordinates.
    pub points: Vec<(f64, f64)>,
    /// Drawing style.
    pub style: SeriesStyle,
}

impl Series {
    /// A line series.
    pub fn line(name: impl Into<String>, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points: points.into_iter().collect(),
            style: SeriesStyle::Line,
        }
    }

    /// A bar series.
    pub fn bars(name: impl Into<String>, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points: points.into_iter().collect(),
            style: SeriesStyle::Bars,
        }
    }

    fn unzip(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().copied().unzip()
    }
}

/// Everything a renderer needs to draw one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    /// Output identifier, unique per run (used as the file stem).
    pub id: String,
    /// Plot title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Series drawn on the same axes.
    pub series: Vec<Series>,
}

/// Consumes plot descriptions and produces a visual artifact.
pub trait Renderer {
    /// Draws `plot`.
    ///
    /// # Errors
    /// Returns [`AudioAnalysisError::Render`] if the artifact cannot be produced.
    fn render(&mut self, plot: &PlotSpec) -> AudioAnalysisResult<()>;
}

/// Writes each plot to `<output_dir>/<id>.html` using plotly.
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    output_dir: PathBuf,
}

impl PlotlyRenderer {
    /// Creates a renderer writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path the plot with `id` is written to.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.output_dir.join(format!("{id}.html"))
    }

    fn build_plot(plot: &PlotSpec) -> Plot {
        let mut figure = Plot::new();
        for series in &plot.series {
            let (x, y) = series.unzip();
            match series.style {
                SeriesStyle::Line => {
                    figure.add_trace(Scatter::new(x, y).mode(Mode::Lines).name(&series.name))
                }
                SeriesStyle::Bars => figure.add_trace(Bar::new(x, y).name(&series.name)),
            }
        }

        let layout = Layout::new()
            .title(Title::with_text(&plot.title))
            .x_axis(Axis::new().title(Title::with_text(&plot.x_label)))
            .y_axis(Axis::new().title(Title::with_text(&plot.y_label)));
        figure.set_layout(layout);
        figure
    }
}

impl Renderer for PlotlyRenderer {
    fn render(&mut self, plot: &PlotSpec) -> AudioAnalysisResult<()> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| AudioAnalysisError::render(&plot.id, e))?;
        let path = self.path_for(&plot.id);
        std::fs::write(&path, Self::build_plot(plot).to_html())
            .map_err(|e| AudioAnalysisError::render(&plot.id, e))?;
        tracing::debug!(id = %plot.id, path = %path.display(), "rendered plot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plot() -> PlotSpec {
        PlotSpec {
            id: "left_waveform".to_string(),
            title: "Left Channel Waveform (downsampled)".to_string(),
            x_label: "Time (s)".to_string(),
            y_label: "Amplitude".to_string(),
            series: vec![
                Series::line("Left Channel", [(0.0, 0.1), (0.5, -0.2)]),
                Series::bars("Counts", [(0.0, 3.0)]),
            ],
        }
    }

    #[test]
    fn test_series_unzip() {
        let series = Series::line("x", [(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(series.unzip(), (vec![1.0, 3.0], vec![2.0, 4.0]));
        assert_eq!(series.style, SeriesStyle::Line);
    }

    #[test]
    fn test_plotly_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = PlotlyRenderer::new(dir.path().join("plots"));
        renderer.render(&sample_plot()).unwrap();

        let path = renderer.path_for("left_waveform");
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("Left Channel Waveform"));
    }

    #[test]
    fn test_write_failure_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = PlotlyRenderer::new(dir.path());
        // a directory sitting where the HTML file should go
        std::fs::create_dir_all(renderer.path_for("left_waveform")).unwrap();

        let result = renderer.render(&sample_plot());
        assert!(matches!(
            result,
            Err(AudioAnalysisError::Render { ref id, .. }) if id == "left_waveform"
        ));
    }

    #[test]
    fn test_existing_plot_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = PlotlyRenderer::new(dir.path());
        let path = renderer.path_for("left_waveform");
        std::fs::write(&path, "stale").unwrap();

        renderer.render(&sample_plot()).unwrap();
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("Left Channel Waveform"));
    }
}
