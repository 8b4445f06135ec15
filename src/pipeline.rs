//! Extraction pipeline
//!
//! Wires the corpus stages together:
//!
//! ```text
//! [CorpusWalker] ──► [DocumentLoader] ──► [ValueExtractor] ──► [Dataset]
//!                                                                  │
//!                                                   render() ──► [HistogramRenderer]
//! ```
//!
//! Everything runs on the calling thread, one file at a time. The first
//! error of any kind stops the run and is returned unchanged; no partial
//! dataset is produced.

use std::time::Instant;

use crate::accessor::AccessorExpression;
use crate::config::RunConfig;
use crate::corpus::{CorpusWalker, DocumentLoader};
use crate::dataset::Dataset;
use crate::error::{Result, ResultExt};
use crate::extract::ValueExtractor;
use crate::frontend::HistogramRenderer;

/// One configured run over a corpus
#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    walker: CorpusWalker,
    extractor: ValueExtractor,
}

impl ExtractionPipeline {
    pub fn new(walker: CorpusWalker, expression: AccessorExpression) -> Self {
        Self {
            walker,
            extractor: ValueExtractor::new(expression),
        }
    }

    /// Build a pipeline from the run configuration.
    ///
    /// The accessor text is decoded here, before the corpus is touched.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        let expression = config.accessor_expression()?;
        let walker = CorpusWalker::new(&config.root).follow_links(config.follow_links);
        Ok(Self::new(walker, expression))
    }

    pub fn expression(&self) -> &AccessorExpression {
        self.extractor.expression()
    }

    /// Walk the corpus and extract one value per file
    pub fn run(&self) -> Result<Dataset> {
        let started = Instant::now();
        tracing::info!(
            "Extracting {} from {}",
            self.expression(),
            self.walker.root().display()
        );

        let mut loader = DocumentLoader::new();
        let mut dataset = Dataset::new();

        for path in self.walker.files() {
            let path = path?;
            let document = loader.load(&path)?;
            let value = self.extractor.apply(document, &path)?;
            tracing::debug!("{} -> {}", path.display(), value.value);
            dataset.append(value);
        }

        if dataset.is_empty() {
            tracing::warn!("No files found under {}", self.walker.root().display());
        }
        let stats = loader.stats();
        tracing::info!(
            "Extracted {} values from {} documents ({} bytes) in {:.1?}",
            dataset.len(),
            stats.documents,
            stats.bytes_read,
            started.elapsed()
        );

        Ok(dataset)
    }
}

/// Hand a finished dataset to the rendering stage
pub fn render(
    dataset: &Dataset,
    config: &RunConfig,
    renderer: &mut dyn HistogramRenderer,
) -> Result<()> {
    let values = dataset.numeric_values()?;
    let title = config.title();
    renderer
        .render_histogram(&values, config.histogram.bins, &title)
        .context(format!("Failed to render {:?}", title))
}

/// Validate the config, run the pipeline and render the result
pub fn run(config: &RunConfig, renderer: &mut dyn HistogramRenderer) -> Result<Dataset> {
    config.validate()?;
    let dataset = ExtractionPipeline::from_config(config)?.run()?;
    render(&dataset, config, renderer)?;
    Ok(dataset)
}
