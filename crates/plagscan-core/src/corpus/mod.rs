//! Reference corpus loading
//!
//! [`CorpusStore`] is the seam between the aggregator and wherever the
//! reference documents live. [`DirectoryCorpus`] reads them from a
//! directory on every call; an in-memory [`Corpus`] is its own store.

mod encoding;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::CorpusConfig;
use crate::error::{Result, ScanError};
use crate::models::{Corpus, Document};
use crate::trace_time;

pub use encoding::{decode_text, read_text, TextEncoding};

/// File written into a freshly created corpus directory
pub const PLACEHOLDER_FILE: &str = "sample.txt";

/// Body of the placeholder document
pub const PLACEHOLDER_TEXT: &str = "This is a sample document for plagiarism detection.";

/// Source of reference documents
pub trait CorpusStore: Send + Sync {
    /// Load the current snapshot of reference documents, in stable order.
    ///
    /// Unreadable individual documents are skipped; only a backing location
    /// that cannot be accessed at all is an error.
    fn load(&self) -> Result<Corpus>;
}

impl CorpusStore for Corpus {
    fn load(&self) -> Result<Corpus> {
        Ok(self.clone())
    }
}

/// Reference documents stored as text files in a directory
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
    extensions: Vec<String>,
    recursive: bool,
    seed_placeholder: bool,
}

impl DirectoryCorpus {
    /// Corpus over `root` loading `.txt` files, seeding a placeholder if absent
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(&CorpusConfig {
            path: root.into(),
            ..CorpusConfig::default()
        })
    }

    pub fn from_config(config: &CorpusConfig) -> Self {
        let extensions = config
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Self {
            root: config.path.clone(),
            extensions,
            recursive: config.recursive,
            seed_placeholder: config.seed_placeholder,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make sure the root exists, creating and seeding it when allowed
    pub fn ensure_root(&self) -> Result<()> {
        if self.root.is_dir() {
            return Ok(());
        }
        if self.root.exists() {
            return Err(ScanError::corpus_unavailable(
                &self.root,
                "not a directory",
            ));
        }
        if !self.seed_placeholder {
            return Err(ScanError::corpus_unavailable(
                &self.root,
                "directory does not exist",
            ));
        }

        fs::create_dir_all(&self.root)
            .map_err(|e| ScanError::corpus_unavailable(&self.root, e))?;
        fs::write(self.root.join(PLACEHOLDER_FILE), PLACEHOLDER_TEXT)
            .map_err(|e| ScanError::corpus_unavailable(&self.root, e))?;

        info!(path = %self.root.display(), "Created corpus directory with placeholder document");
        Ok(())
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|wanted| *wanted == ext)
            })
    }

    fn document_id(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl CorpusStore for DirectoryCorpus {
    fn load(&self) -> Result<Corpus> {
        let start = Instant::now();
        self.ensure_root()?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::corpus_unavailable(&self.root, e));
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable corpus entry");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.matches_extension(path) {
                continue;
            }

            match read_text(path) {
                Ok(text) => {
                    let id = self.document_id(path);
                    debug!(id = %id, chars = text.chars().count(), "corpus_document");
                    documents.push(Document::with_id(id, text));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable corpus document");
                }
            }
        }

        info!(
            path = %self.root.display(),
            documents = documents.len(),
            "Loaded corpus"
        );
        trace_time!(start, "load_corpus", documents = documents.len());

        Ok(Corpus::new(documents))
    }
}
