//! Document loading
//!
//! Each file is read in full and closed before parsing, so at most one
//! corpus descriptor is open at any time.

use std::path::Path;

use crate::error::{CorpusHistError, Result};
use crate::types::ParsedDocument;

/// Statistics for loader operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderStats {
    /// Number of documents parsed successfully
    pub documents: u64,
    /// Total bytes read, including from documents that failed to parse
    pub bytes_read: u64,
}

/// Reads and parses corpus files as JSON
#[derive(Debug, Default)]
pub struct DocumentLoader {
    stats: LoaderStats,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` and parse it into a document tree
    pub fn load(&mut self, path: &Path) -> Result<ParsedDocument> {
        let bytes = std::fs::read(path).map_err(|source| CorpusHistError::CorpusAccess {
            path: path.to_path_buf(),
            source,
        })?;
        self.stats.bytes_read += bytes.len() as u64;

        let document = Self::parse_bytes(&bytes, path)?;
        self.stats.documents += 1;
        tracing::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(document)
    }

    /// Parse an in-memory document. `path` is only used for error reports.
    pub fn parse_bytes(bytes: &[u8], path: &Path) -> Result<ParsedDocument> {
        serde_json::from_slice(bytes).map_err(|source| CorpusHistError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn stats(&self) -> &LoaderStats {
        &self.stats
    }
}
