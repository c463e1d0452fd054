// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod wikipedia;

pub use crate::core::classifier::{Classifier, DEFAULT_NGRAM_LENGTH};
pub use crate::core::profile::FrequencyProfile;
pub use crate::core::tokenizer::Tokenizer;
pub use crate::core::types::{Corpus, Document, LanguageId, RawScores, ScoreDistribution, Unit};
pub use crate::corpus::{collect_corpus, CorpusProvider, DirectoryCorpus, InMemoryCorpus};
pub use crate::error::{Error, Result};
