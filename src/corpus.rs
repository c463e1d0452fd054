// File: src/corpus.rs
use crate::core::types::{Corpus, Document};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Best-effort source of reference documents for a language.
/// Returns at most `count` documents and never fails; whatever could not be
/// obtained is simply missing from the result.
pub trait CorpusProvider {
    fn fetch(&self, lang: &str, count: usize) -> Vec<Document>;
}

/// Asks `provider` for `count` documents per language. Every requested
/// language is present in the result, even with no documents.
pub fn collect_corpus<P: CorpusProvider + ?Sized>(
    provider: &P,
    langs: &[String],
    count: usize,
) -> Corpus {
    let mut corpus = Corpus::new();
    for lang in langs {
        let documents = provider.fetch(lang, count);
        if documents.len() < count {
            warn!(lang = %lang, requested = count, received = documents.len(), "corpus shortfall");
        } else {
            info!(lang = %lang, documents = documents.len(), "corpus collected");
        }
        corpus.insert(lang.clone(), documents);
    }
    corpus
}

/// A fixed, already materialized corpus.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    corpus: Corpus,
}

impl InMemoryCorpus {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

impl CorpusProvider for InMemoryCorpus {
    fn fetch(&self, lang: &str, count: usize) -> Vec<Document> {
        self.corpus
            .get(lang)
            .map(|docs| docs.iter().take(count).cloned().collect())
            .unwrap_or_default()
    }
}

/// Reads documents from `<root>/<lang>/`, one file per document, in file name order.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_paths(dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot list corpus directory");
                return vec![];
            }
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        paths
    }
}

impl CorpusProvider for DirectoryCorpus {
    fn fetch(&self, lang: &str, count: usize) -> Vec<Document> {
        let dir = self.root.join(lang);
        Self::document_paths(&dir)
            .into_iter()
            .filter_map(|path| match fs::read_to_string(&path) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable document");
                    None
                }
            })
            .take(count)
            .collect()
    }
}
