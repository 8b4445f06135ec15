//! Test data builders for creating corpus trees

use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a corpus directory in a temporary location
pub struct CorpusBuilder {
    dir: TempDir,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `document` as JSON at `rel` (parent directories are created)
    pub fn document(self, rel: &str, document: Value) -> Self {
        let content = serde_json::to_string_pretty(&document).unwrap();
        self.raw(rel, &content)
    }

    /// Write arbitrary bytes at `rel`
    pub fn raw(self, rel: &str, content: &str) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// Create an empty directory at `rel`
    pub fn dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.dir.path().join(rel)).unwrap();
        self
    }

    pub fn build(self) -> Corpus {
        Corpus { dir: self.dir }
    }
}

/// A built corpus; deleted on drop
pub struct Corpus {
    dir: TempDir,
}

impl Corpus {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}

/// A result document in the layout the default accessor expects
pub fn result_doc(c: f64) -> Value {
    serde_json::json!({ "s": [{ "c": c, "n": 1 }], "meta": { "ok": true } })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_builder() {
        let corpus = CorpusBuilder::new()
            .document("a/b.json", result_doc(1.0))
            .dir("empty")
            .build();

        assert!(corpus.path("a/b.json").is_file());
        assert!(corpus.path("empty").is_dir());
    }
}
