//! Histogram display settings
//!
//! Controls how the finished dataset is drawn: bin count, title suffix,
//! axis labels and bar color.

use serde::{Deserialize, Serialize};

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 30;

/// Sky blue at 0.7 alpha
pub const DEFAULT_BAR_COLOR: [u8; 4] = [135, 206, 235, 179];

/// Settings for the rendering stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramSettings {
    /// Number of equal-width bins
    pub bins: usize,

    /// Appended to the accessor text to form the window title
    pub title_suffix: String,

    /// X axis label
    pub x_label: String,

    /// Y axis label
    pub y_label: String,

    /// Bar fill color (RGBA, unmultiplied)
    pub color: [u8; 4],
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            title_suffix: " Histogram".to_string(),
            x_label: "Value".to_string(),
            y_label: "Freq".to_string(),
            color: DEFAULT_BAR_COLOR,
        }
    }
}
