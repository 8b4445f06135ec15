//! Mock construction helpers

use corpus_hist::frontend::HistogramRenderer;

/// One recorded `render_histogram` call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub values: Vec<f64>,
    pub bin_count: usize,
    pub title: String,
}

/// Renderer that draws nothing and remembers every call
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl HistogramRenderer for RecordingRenderer {
    fn render_histogram(
        &mut self,
        values: &[f64],
        bin_count: usize,
        title: &str,
    ) -> corpus_hist::Result<()> {
        self.calls.push(RenderCall {
            values: values.to_vec(),
            bin_count,
            title: title.to_string(),
        });
        Ok(())
    }
}
