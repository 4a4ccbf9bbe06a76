//! Facilities for discovering and loading training corpora.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::CorpusConfig;
use crate::error::{Result, SentibayesError};

/// A single corpus document: the bare filename that carries the class prefix
/// plus the full document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Filename without any directory components.
    pub name: String,
    /// Complete text of the document.
    pub text: String,
}

impl Document {
    /// Creates a document from a name and its text.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Discovers document paths inside the corpus directory.
///
/// Enumeration is limited to the first directory level unless
/// [`CorpusConfig::recursive`] is set; symlink traversal is controlled through
/// [`CorpusConfig::follow_symlinks`].  Paths are returned sorted so progress
/// output is deterministic.  Fails with [`SentibayesError::CorpusNotFound`]
/// when the directory is missing or contains no files.
pub fn collect_paths<P: AsRef<Path>>(dir: P, cfg: &CorpusConfig) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(SentibayesError::CorpusNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    if cfg.recursive {
        let walker = WalkDir::new(dir).follow_links(cfg.follow_symlinks);
        for entry in walker {
            let entry = entry.map_err(|err| SentibayesError::Internal(err.to_string()))?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
    } else {
        for entry in
            fs::read_dir(dir).map_err(|err| SentibayesError::io(err, Some(dir.to_path_buf())))?
        {
            let entry = entry.map_err(|err| SentibayesError::io(err, Some(dir.to_path_buf())))?;
            let entry_path = entry.path();
            if entry_path.is_file() {
                files.push(entry_path);
            }
        }
    }

    if files.is_empty() {
        return Err(SentibayesError::CorpusNotFound {
            path: dir.to_path_buf(),
        });
    }
    files.sort();
    Ok(files)
}

/// Loads every document under the corpus directory into memory.
///
/// Files are read in full, one at a time; the first unreadable file aborts
/// the whole load with its path attached to the error.
pub fn load_corpus<P: AsRef<Path>>(dir: P, cfg: &CorpusConfig) -> Result<Vec<Document>> {
    let paths = collect_paths(dir, cfg)?;
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path)
            .map_err(|err| SentibayesError::io(err, Some(path.clone())))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        documents.push(Document { name, text });
    }
    Ok(documents)
}
