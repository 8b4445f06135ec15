//! Configuration module for corpus-hist
//!
//! A run is fully described by one [`RunConfig`] value, built once at
//! startup and passed by reference into the pipeline. Values come from, in
//! increasing precedence:
//!
//! 1. Built-in defaults (`build/out`, `['s'][0]['c']`, 30 bins)
//! 2. An optional TOML file (`--config corpus-hist.toml`)
//! 3. Command line arguments
//!
//! # Example file
//!
//! ```toml
//! root = "build/out"
//! accessor = "['s'][0]['c']"
//!
//! [histogram]
//! bins = 50
//! x_label = "Latency (ms)"
//! ```

pub mod settings;

pub use settings::*;

use crate::accessor::AccessorExpression;
use crate::error::{CorpusHistError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default corpus root
pub const DEFAULT_ROOT: &str = "build/out";

/// Default accessor expression
pub const DEFAULT_ACCESSOR: &str = "['s'][0]['c']";

/// Everything a run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Corpus root directory (or a single file)
    pub root: PathBuf,

    /// Accessor expression text
    pub accessor: String,

    /// Whether the walk descends through symbolic links to directories.
    /// Unfollowed links are still loaded as files.
    pub follow_links: bool,

    /// Rendering settings
    pub histogram: HistogramSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            accessor: DEFAULT_ACCESSOR.to_string(),
            follow_links: true,
            histogram: HistogramSettings::default(),
        }
    }
}

impl RunConfig {
    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CorpusHistError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml(&content).with_context(|| path.display().to_string())
    }

    /// Parse a TOML config document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CorpusHistError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Override the corpus root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Override the accessor expression text
    pub fn with_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.accessor = accessor.into();
        self
    }

    /// Override symbolic link traversal
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Override the bin count
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.histogram.bins = bins;
        self
    }

    /// Reject settings that cannot produce a histogram
    pub fn validate(&self) -> Result<()> {
        if self.histogram.bins == 0 {
            return Err(CorpusHistError::Config(
                "histogram bin count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Decode the accessor text
    pub fn accessor_expression(&self) -> Result<AccessorExpression> {
        AccessorExpression::parse(&self.accessor)
    }

    /// Window title: the accessor text followed by the title suffix
    pub fn title(&self) -> String {
        format!("{}{}", self.accessor, self.histogram.title_suffix)
    }
}
