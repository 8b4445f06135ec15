//! Histogram window
//!
//! A single-panel eframe application: the bar chart fills the window and a
//! status bar underneath shows count, range, mean and the fullest bin.

use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::analysis::Histogram;
use crate::config::HistogramSettings;
use crate::dataset::DatasetStats;
use crate::frontend::status_bar::render_status_bar;

/// Everything the window needs to draw
pub struct HistogramView {
    /// Window and chart title
    pub title: String,
    /// Binned values
    pub histogram: Histogram,
    /// Summary of the raw values
    pub stats: DatasetStats,
    /// Labels and colors
    pub settings: HistogramSettings,
}

impl HistogramView {
    pub fn new(
        title: impl Into<String>,
        values: &[f64],
        bin_count: usize,
        settings: HistogramSettings,
    ) -> Self {
        Self {
            title: title.into(),
            histogram: Histogram::compute(values, bin_count),
            stats: DatasetStats::from_values(values),
            settings,
        }
    }

    /// Bar fill color from the settings
    pub fn bar_color(&self) -> Color32 {
        let [r, g, b, a] = self.settings.color;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// One bar per bin, centered on the bin, as wide as the bin
    pub fn bars(&self) -> Vec<Bar> {
        let width = self.histogram.bin_width();
        self.histogram
            .centers()
            .into_iter()
            .zip(self.histogram.bins())
            .map(|(center, (lo, hi, count))| {
                Bar::new(center, count as f64)
                    .width(width)
                    .name(format!("[{:.4}, {:.4})", lo, hi))
            })
            .collect()
    }

    /// Draw the chart into `ui`
    pub fn render_plot(&self, ui: &mut Ui) {
        let chart = BarChart::new("Freq", self.bars()).color(self.bar_color());

        Plot::new("histogram_plot")
            .x_axis_label(self.settings.x_label.as_str())
            .y_axis_label(self.settings.y_label.as_str())
            .allow_zoom(true)
            .allow_drag(true)
            .legend(Legend::default().position(egui_plot::Corner::RightTop))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }
}

impl eframe::App for HistogramView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(ui, &self.stats, &self.histogram);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.title.as_str());
            ui.separator();
            if self.stats.count == 0 {
                ui.label("No values extracted");
            }
            self.render_plot(ui);
        });
    }
}

/// Run the window on the current thread until the user closes it
pub fn run_window(view: HistogramView) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title(view.title.as_str()),
        ..Default::default()
    };

    let app_name = view.title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(view))
        }),
    )
}
