// File: src/core/profile.rs
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{Corpus, LanguageId, Unit};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Maps unit -> number of occurrences in one language's corpus.
pub type UnitCounts = HashMap<Unit, u64>;

/// Per-language unit frequency tables, built once from a corpus.
/// There is no mutating API; a profile is fixed for its owner's lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyProfile {
    tables: BTreeMap<LanguageId, UnitCounts>,
}

impl FrequencyProfile {
    /// Builds one table per language in the corpus. Languages are processed
    /// in parallel; each table is a plain sum so the result matches a
    /// sequential build.
    pub fn build(corpus: &Corpus, tokenizer: &Tokenizer) -> Self {
        let tables = corpus
            .par_iter()
            .map(|(lang, documents)| {
                if documents.is_empty() {
                    warn!(lang = %lang, "no reference documents, profile will be empty");
                }
                let text = documents.join(tokenizer.separator());
                let counts = count_units(tokenizer.tokenize(&text));
                debug!(
                    lang = %lang,
                    documents = documents.len(),
                    units = counts.values().sum::<u64>(),
                    distinct = counts.len(),
                    "built frequency table"
                );
                (lang.clone(), counts)
            })
            .collect();

        Self { tables }
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn table(&self, lang: &str) -> Option<&UnitCounts> {
        self.tables.get(lang)
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &UnitCounts)> {
        self.tables.iter().map(|(lang, counts)| (lang.as_str(), counts))
    }

    /// Occurrences of `unit` in `lang`'s corpus, 0 when either is unknown.
    pub fn count(&self, lang: &str, unit: &str) -> u64 {
        self.tables
            .get(lang)
            .and_then(|counts| counts.get(unit))
            .copied()
            .unwrap_or(0)
    }

    pub fn distinct_units(&self, lang: &str) -> usize {
        self.tables.get(lang).map_or(0, HashMap::len)
    }

    pub fn total_units(&self, lang: &str) -> u64 {
        self.tables.get(lang).map_or(0, |counts| counts.values().sum())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn count_units(units: Vec<Unit>) -> UnitCounts {
    let mut counts = UnitCounts::new();
    for unit in units {
        *counts.entry(unit).or_insert(0) += 1;
    }
    counts
}
