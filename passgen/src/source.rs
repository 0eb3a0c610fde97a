//! Collaborators that supply text to the phrase miners.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// A collection of documents addressable by identifier.
pub trait Corpus: Send + Sync {
    /// Short name used when describing units built on this corpus.
    fn name(&self) -> &str;

    fn document_ids(&self) -> Result<Vec<String>>;

    fn raw_text(&self, id: &str) -> Result<String>;
}

/// Splits raw text into sentences.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Ends a sentence at every run of `.`, `!` or `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

impl SentenceSplitter for PunctuationSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// An in-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    name: String,
    documents: BTreeMap<String, String>,
}

impl MemoryCorpus {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: BTreeMap::new(),
        }
    }

    pub fn with_document(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(id.into(), text.into());
        self
    }
}

impl Corpus for MemoryCorpus {
    fn name(&self) -> &str {
        &self.name
    }

    fn document_ids(&self) -> Result<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn raw_text(&self, id: &str) -> Result<String> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| {
                Error::collaborator(&self.name, format_args!("no document '{id}'"))
            })
    }
}

/// A directory of `*.txt` files; the file stem is the document identifier.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
    name: String,
}

impl DirectoryCorpus {
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::collaborator(
                root.display(),
                "corpus directory does not exist",
            ));
        }
        let name = root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("corpus")
            .to_string();
        Ok(Self { root, name })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Corpus for DirectoryCorpus {
    fn name(&self) -> &str {
        &self.name
    }

    fn document_ids(&self) -> Result<Vec<String>> {
        let failure = |e: std::io::Error| Error::collaborator(self.root.display(), e);
        let entries = fs::read_dir(&self.root).map_err(failure)?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry.map_err(failure)?.path();
            let id = path
                .extension()
                .filter(|ext| *ext == "txt")
                .and_then(|_| path.file_stem())
                .and_then(|stem| stem.to_str());

            if let Some(id) = id {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        debug!(corpus = %self.name, documents = ids.len(), "listed corpus documents");
        Ok(ids)
    }

    fn raw_text(&self, id: &str) -> Result<String> {
        let path = self.root.join(format!("{id}.txt"));
        fs::read_to_string(&path)
            .map_err(|e| Error::collaborator(path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_splitter() {
        let sentences = PunctuationSplitter.split("It rained. Did it stop?  No!! Then... it did");
        assert_eq!(
            sentences,
            ["It rained", "Did it stop", "No", "Then", "it did"]
        );
        assert!(PunctuationSplitter.split(" ... ").is_empty());
    }

    #[test]
    fn test_memory_corpus() {
        let corpus = MemoryCorpus::new("mem")
            .with_document("b", "two")
            .with_document("a", "one");
        assert_eq!(corpus.document_ids().unwrap(), ["a", "b"]);
        assert_eq!(corpus.raw_text("b").unwrap(), "two");
        assert!(matches!(corpus.raw_text("c"), Err(Error::CollaboratorFailure(_))));
    }

    #[test]
    fn test_directory_corpus() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("first.txt"), "First document.").unwrap();
        fs::write(dir.path().join("second.txt"), "Second document.").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let corpus = DirectoryCorpus::open(dir.path()).unwrap();
        assert_eq!(corpus.document_ids().unwrap(), ["first", "second"]);
        assert_eq!(corpus.raw_text("second").unwrap(), "Second document.");
        assert!(matches!(
            corpus.raw_text("missing"),
            Err(Error::CollaboratorFailure(_))
        ));
    }

    #[test]
    fn test_directory_corpus_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DirectoryCorpus::open(dir.path().join("nope")),
            Err(Error::CollaboratorFailure(_))
        ));
    }
}
