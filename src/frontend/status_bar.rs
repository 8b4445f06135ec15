//! Status bar panel — bottom bar showing dataset statistics.

use egui::{Color32, RichText, Ui};

use crate::analysis::Histogram;
use crate::dataset::DatasetStats;

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, stats: &DatasetStats, histogram: &Histogram) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let count_color = if stats.count > 0 {
            Color32::from_rgb(100, 255, 100)
        } else {
            Color32::GRAY
        };
        ui.colored_label(count_color, "●");
        ui.label(RichText::new(format!("Values: {}", stats.count)).small());

        ui.separator();

        match stats.range() {
            Some((lo, hi)) => {
                ui.label(RichText::new(format!("Range: [{}, {}]", lo, hi)).small());
                ui.separator();
                ui.label(RichText::new(format!("Mean: {:.6}", stats.mean())).small());
            }
            None => {
                ui.label(RichText::new("Range: -").small());
            }
        }

        ui.separator();

        ui.label(
            RichText::new(format!(
                "Bins: {} × {:.4}",
                histogram.bin_count(),
                histogram.bin_width()
            ))
            .small(),
        );

        if let Some((center, count)) = histogram.peak().filter(|(_, c)| *c > 0) {
            ui.separator();
            ui.label(RichText::new(format!("Peak: {} at {:.4}", count, center)).small());
        }
    });
}
