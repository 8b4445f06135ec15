//! Depth-first corpus traversal
//!
//! Built on `walkdir`, which keeps its own stack of open directory handles
//! instead of recursing, so pathologically deep trees do not grow the call
//! stack. Siblings are visited in file-name order so repeated runs over the
//! same tree produce the same dataset ordering on every platform.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{CorpusHistError, Result};

/// Kind of a filesystem entry seen during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A path plus its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl CorpusEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Enumerates every entry reachable under a corpus root
#[derive(Debug, Clone)]
pub struct CorpusWalker {
    root: PathBuf,
    follow_links: bool,
}

impl CorpusWalker {
    /// Create a walker that follows symbolic links
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: true,
        }
    }

    /// Set whether symbolic links are followed.
    ///
    /// When not followed, the walk never descends through a link and every
    /// link is yielded as a file entry. Loading reads through the link, so a
    /// link to a document still extracts while a link to a directory fails
    /// with `CorpusAccess`.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries, directories included, in visitation order
    pub fn entries(&self) -> impl Iterator<Item = Result<CorpusEntry>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .map(move |entry| {
                let entry = entry.map_err(|e| CorpusHistError::from_walk_error(&self.root, e))?;
                let kind = if entry.file_type().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                Ok(CorpusEntry {
                    path: entry.into_path(),
                    kind,
                })
            })
    }

    /// Lazily yield every non-directory path under the root.
    ///
    /// A root that is itself a file yields just that file. The first
    /// unreadable entry is yielded as an error; callers are expected to stop
    /// there.
    pub fn files(&self) -> Files<'_> {
        Files {
            inner: Box::new(self.entries()),
        }
    }
}

/// Iterator over the file paths of a corpus
pub struct Files<'a> {
    inner: Box<dyn Iterator<Item = Result<CorpusEntry>> + 'a>,
}

impl Iterator for Files<'_> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.is_file() => return Some(Ok(entry.path)),
                Ok(entry) => {
                    tracing::trace!("entering {}", entry.path.display());
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "{}").unwrap();
    }

    fn relative(root: &Path, paths: Vec<PathBuf>) -> Vec<String> {
        paths
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_depth_first_sorted_order() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.json");
        touch(temp.path(), "a/2.json");
        touch(temp.path(), "a/1.json");
        touch(temp.path(), "a/deep/x.json");
        touch(temp.path(), "c.txt");

        let walker = CorpusWalker::new(temp.path());
        let files: Vec<PathBuf> = walker.files().collect::<Result<_>>().unwrap();

        assert_eq!(
            relative(temp.path(), files),
            vec!["a/1.json", "a/2.json", "a/deep/x.json", "b.json", "c.txt"]
        );
    }

    #[test]
    fn test_order_is_stable() {
        let temp = TempDir::new().unwrap();
        for i in 0..20 {
            touch(temp.path(), &format!("d{}/f{}.json", i % 3, i));
        }
        let walker = CorpusWalker::new(temp.path());
        let first: Vec<PathBuf> = walker.files().collect::<Result<_>>().unwrap();
        let second: Vec<PathBuf> = walker.files().collect::<Result<_>>().unwrap();
        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_root_file_yields_itself() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "only.json");
        let root = temp.path().join("only.json");

        let files: Vec<PathBuf> = CorpusWalker::new(&root)
            .files()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(files, vec![root]);
    }

    #[test]
    fn test_empty_directories_yield_nothing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("x/y/z")).unwrap();

        let walker = CorpusWalker::new(temp.path());
        assert_eq!(walker.files().count(), 0);

        let dirs = walker
            .entries()
            .filter_map(Result::ok)
            .filter(|e| e.kind == EntryKind::Directory)
            .count();
        assert_eq!(dirs, 4);
    }

    #[test]
    fn test_missing_root_is_corpus_access_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let walker = CorpusWalker::new(&missing);
        let mut files = walker.files();
        let err = files.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), "CorpusAccessError");
        assert_eq!(err.path(), Some(missing.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_unfollowed_directory_link_is_a_file_entry() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "real/a.json");
        fs::create_dir(temp.path().join("tree")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("tree/link"))
            .unwrap();

        let root = temp.path().join("tree");
        let unfollowed: Vec<PathBuf> = CorpusWalker::new(&root)
            .follow_links(false)
            .files()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(relative(&root, unfollowed), vec!["link"]);

        let followed: Vec<PathBuf> = CorpusWalker::new(&root)
            .files()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(relative(&root, followed), vec!["link/a.json"]);
    }
}
