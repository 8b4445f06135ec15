//! Frontend module for rendering histograms
//!
//! # Main Types
//!
//! - [`HistogramRenderer`] - Interface between the pipeline and a display
//! - [`WindowRenderer`] - eframe window with an egui_plot bar chart
//! - [`TextRenderer`] - Text bars for headless use
//! - [`HistogramView`] - The eframe application behind [`WindowRenderer`]
//!
//! # Submodules
//!
//! - `renderer` - Renderer trait and implementations
//! - `histogram_view` - Window layout and plot
//! - `status_bar` - Statistics line under the plot

pub mod histogram_view;
pub mod renderer;
mod status_bar;

pub use histogram_view::HistogramView;
pub use renderer::{HistogramRenderer, TextRenderer, WindowRenderer};

#[cfg(any(test, feature = "recording-renderer"))]
pub use renderer::{RecordingRenderer, RenderCall};
