//! # corpus-hist: histograms over a tree of JSON results
//!
//! Walks a directory of result files, pulls one scalar out of each with an
//! accessor expression, and plots the distribution of the collected values.
//!
//! ## Architecture
//!
//! - **Corpus**: depth-first traversal and per-file JSON loading
//! - **Accessor**: a subscript chain like `['s'][0]['c']`, decoded once
//! - **Extract**: walks each document along the accessor
//! - **Dataset**: append-only results in traversal order
//! - **Frontend**: eframe/egui_plot window, or text output when headless
//!
//! Every failure is fatal: one unreadable entry, malformed file, or document
//! the accessor does not fit stops the run without drawing anything.
//!
//! ## Example
//!
//! ```ignore
//! use corpus_hist::{config::RunConfig, frontend::WindowRenderer, pipeline};
//!
//! fn main() -> corpus_hist::Result<()> {
//!     let config = RunConfig::default().with_root("build/out");
//!     let mut renderer = WindowRenderer::new(config.histogram.clone());
//!     let dataset = pipeline::run(&config, &mut renderer)?;
//!     println!("{} values", dataset.len());
//!     Ok(())
//! }
//! ```

pub mod accessor;
pub mod analysis;
pub mod config;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod frontend;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use accessor::{AccessorExpression, Step};
pub use config::{HistogramSettings, RunConfig};
pub use dataset::{Dataset, DatasetStats};
pub use error::{CorpusHistError, Result};
pub use extract::ValueExtractor;
pub use pipeline::ExtractionPipeline;
pub use types::{ExtractedValue, ParsedDocument, Scalar};
