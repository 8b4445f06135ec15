//! Rendering collaborators
//!
//! The pipeline hands its finished values to a [`HistogramRenderer`]. Two
//! implementations ship with the crate:
//!
//! - [`WindowRenderer`] - native window with an egui_plot bar chart
//! - [`TextRenderer`] - plain text bars for terminals without a display
//!
//! `RecordingRenderer` only records what it was asked to draw. It is built
//! for unit tests and with the `recording-renderer` feature.

use std::io::Write;

use crate::analysis::Histogram;
use crate::config::HistogramSettings;
use crate::dataset::DatasetStats;
use crate::error::{CorpusHistError, Result};

/// Width of the longest text bar, in characters
const TEXT_BAR_WIDTH: usize = 50;

/// Consumer of the finished numeric series
pub trait HistogramRenderer {
    /// Display `values` split into `bin_count` bins under `title`.
    ///
    /// An empty series is valid and must not fail.
    fn render_histogram(&mut self, values: &[f64], bin_count: usize, title: &str) -> Result<()>;
}

/// Opens a native window and blocks until it is closed
#[derive(Debug, Clone, Default)]
pub struct WindowRenderer {
    settings: HistogramSettings,
}

impl WindowRenderer {
    pub fn new(settings: HistogramSettings) -> Self {
        Self { settings }
    }
}

impl HistogramRenderer for WindowRenderer {
    fn render_histogram(&mut self, values: &[f64], bin_count: usize, title: &str) -> Result<()> {
        let view = super::HistogramView::new(title, values, bin_count, self.settings.clone());
        super::histogram_view::run_window(view)
            .map_err(|e| CorpusHistError::Render(format!("Failed to open window: {}", e)))
    }
}

/// Writes a text histogram to any writer
pub struct TextRenderer<W: Write> {
    out: W,
    settings: HistogramSettings,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, settings: HistogramSettings) -> Self {
        Self { out, settings }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_histogram(&mut self, values: &[f64], bin_count: usize, title: &str) -> std::io::Result<()> {
        let histogram = Histogram::compute(values, bin_count);
        let stats = DatasetStats::from_values(values);
        let max = histogram.max_count();

        writeln!(self.out, "{}", title)?;
        writeln!(
            self.out,
            "{}: {} | {}: per bin (max {})",
            self.settings.x_label, stats.count, self.settings.y_label, max
        )?;
        if let Some((lo, hi)) = stats.range() {
            writeln!(self.out, "range [{}, {}], mean {:.6}", lo, hi, stats.mean())?;
        }

        for (lo, hi, count) in histogram.bins() {
            let len = if max == 0 {
                0
            } else {
                (count as usize * TEXT_BAR_WIDTH).div_ceil(max as usize)
            };
            writeln!(
                self.out,
                "[{:>12.6}, {:>12.6}) {:>6} {}",
                lo,
                hi,
                count,
                "#".repeat(len)
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> HistogramRenderer for TextRenderer<W> {
    fn render_histogram(&mut self, values: &[f64], bin_count: usize, title: &str) -> Result<()> {
        self.write_histogram(values, bin_count, title)
            .map_err(|e| CorpusHistError::Render(format!("Failed to write histogram: {}", e)))
    }
}

/// One recorded `render_histogram` call
#[cfg(any(test, feature = "recording-renderer"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub values: Vec<f64>,
    pub bin_count: usize,
    pub title: String,
}

/// Renderer that draws nothing and remembers every call
#[cfg(any(test, feature = "recording-renderer"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

#[cfg(any(test, feature = "recording-renderer"))]
impl HistogramRenderer for RecordingRenderer {
    fn render_histogram(&mut self, values: &[f64], bin_count: usize, title: &str) -> Result<()> {
        self.calls.push(RenderCall {
            values: values.to_vec(),
            bin_count,
            title: title.to_string(),
        });
        Ok(())
    }
}
