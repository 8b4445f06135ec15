//! Corpus access
//!
//! - [`walker`] - Depth-first enumeration of every file under a root
//! - [`loader`] - Reading and parsing a single corpus file
//!
//! No filtering is applied: every non-directory entry is a candidate
//! document, and a file that is not valid JSON aborts the run.

pub mod loader;
pub mod walker;

pub use loader::{DocumentLoader, LoaderStats};
pub use walker::{CorpusEntry, CorpusWalker, EntryKind, Files};
