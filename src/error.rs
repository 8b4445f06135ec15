//! Error handling for corpus-hist
//!
//! Every variant is fatal to a run. The pipeline never recovers from an
//! error locally; it is propagated to `main`, reported, and the process
//! exits without rendering a histogram.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for corpus-hist operations
#[derive(Error, Debug)]
pub enum CorpusHistError {
    /// The corpus root or one of its entries could not be read
    #[error("cannot access {}: {source}", path.display())]
    CorpusAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file is not a well-formed JSON document
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A step expected a mapping or a sequence but found another kind of node
    #[error("{}: step {step} expects {expected}, found {found}", path.display())]
    TypeMismatch {
        path: PathBuf,
        step: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A key step named a field the mapping does not have
    #[error("{}: step {step}: key {key:?} not found", path.display())]
    KeyNotFound {
        path: PathBuf,
        step: String,
        key: String,
    },

    /// An index step went past the end of a sequence
    #[error("{}: step {step}: index {index} out of range for sequence of length {len}", path.display())]
    IndexOutOfRange {
        path: PathBuf,
        step: String,
        index: i64,
        len: usize,
    },

    /// All steps were consumed but the node is still a container
    #[error("{}: accessor ends at a {found}, expected a scalar", path.display())]
    NonScalarResult { path: PathBuf, found: &'static str },

    /// The accessor expression string could not be decoded
    #[error("invalid accessor {expression:?} at offset {position}: {message}")]
    InvalidAccessor {
        expression: String,
        position: usize,
        message: String,
    },

    /// The extracted scalar has no numeric interpretation
    #[error("{}: extracted value {value} is not numeric", path.display())]
    NonNumericValue { path: PathBuf, value: String },

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// The rendering surface failed
    #[error("Render error: {0}")]
    Render(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CorpusHistError>,
    },
}

impl CorpusHistError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CorpusHistError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Build a `CorpusAccess` error from a walkdir failure.
    ///
    /// walkdir reports the entry it failed on; fall back to the root when it
    /// cannot (e.g. the error happened before any entry was produced).
    pub fn from_walk_error(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        let source = match err.into_io_error() {
            Some(io) => io,
            None => std::io::Error::other("filesystem loop detected"),
        };
        CorpusHistError::CorpusAccess { path, source }
    }

    /// Taxonomy name reported to the user
    pub fn kind(&self) -> &'static str {
        match self {
            CorpusHistError::CorpusAccess { .. } => "CorpusAccessError",
            CorpusHistError::Parse { .. } => "ParseError",
            CorpusHistError::TypeMismatch { .. } => "TypeMismatchError",
            CorpusHistError::KeyNotFound { .. } => "KeyNotFoundError",
            CorpusHistError::IndexOutOfRange { .. } => "IndexOutOfRangeError",
            CorpusHistError::NonScalarResult { .. } => "NonScalarResultError",
            CorpusHistError::InvalidAccessor { .. } => "InvalidAccessorError",
            CorpusHistError::NonNumericValue { .. } => "NonNumericValueError",
            CorpusHistError::Config(_) => "ConfigError",
            CorpusHistError::Render(_) => "RenderError",
            CorpusHistError::WithContext { source, .. } => source.kind(),
        }
    }

    /// Whether this error came from applying the accessor to a document
    pub fn is_accessor_failure(&self) -> bool {
        match self {
            CorpusHistError::TypeMismatch { .. }
            | CorpusHistError::KeyNotFound { .. }
            | CorpusHistError::IndexOutOfRange { .. }
            | CorpusHistError::NonScalarResult { .. } => true,
            CorpusHistError::WithContext { source, .. } => source.is_accessor_failure(),
            _ => false,
        }
    }

    /// The corpus file the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            CorpusHistError::CorpusAccess { path, .. }
            | CorpusHistError::Parse { path, .. }
            | CorpusHistError::TypeMismatch { path, .. }
            | CorpusHistError::KeyNotFound { path, .. }
            | CorpusHistError::IndexOutOfRange { path, .. }
            | CorpusHistError::NonScalarResult { path, .. }
            | CorpusHistError::NonNumericValue { path, .. } => Some(path),
            CorpusHistError::WithContext { source, .. } => source.path(),
            _ => None,
        }
    }
}

/// Result type alias for corpus-hist operations
pub type Result<T> = std::result::Result<T, CorpusHistError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
