// File: src/core/tokenizer.rs
use crate::core::types::Unit;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::num::NonZeroUsize;

lazy_static! {
    /// Maximal runs of Unicode word characters.
    static ref WORD_PATTERN: Regex = Regex::new(r"\w+").unwrap();
}

/// Separator placed between documents when a language's corpus is concatenated.
const DOCUMENT_SEPARATOR: &str = " ";

/// The unit-extraction rule a classifier is parameterized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenizer {
    /// Lowercased words; punctuation and whitespace only separate.
    Words,
    /// Lowercased overlapping character windows of a fixed length.
    NGrams(NonZeroUsize),
}

impl Tokenizer {
    /// Builds an n-gram tokenizer, rejecting a zero window.
    pub fn ngrams(n: usize) -> Result<Self> {
        NonZeroUsize::new(n)
            .map(Tokenizer::NGrams)
            .ok_or(Error::InvalidNgramLength(n))
    }

    pub fn separator(&self) -> &'static str {
        DOCUMENT_SEPARATOR
    }

    pub fn tokenize(&self, text: &str) -> Vec<Unit> {
        match self {
            Tokenizer::Words => words(text),
            Tokenizer::NGrams(n) => ngrams(text, n.get()),
        }
    }
}

fn words(text: &str) -> Vec<Unit> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Sliding window over chars, one step at a time. The tail that cannot
/// fill a whole window is dropped.
fn ngrams(text: &str, n: usize) -> Vec<Unit> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < n {
        return vec![];
    }
    chars
        .windows(n)
        .map(|window| window.iter().collect::<String>().to_lowercase())
        .collect()
}
