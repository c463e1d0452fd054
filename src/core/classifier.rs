use crate::core::profile::FrequencyProfile;
use crate::core::scoring::{normalize, score};
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{Corpus, RawScores, ScoreDistribution};
use crate::error::Result;

/// Window length used by the n-gram model when the caller has no preference.
pub const DEFAULT_NGRAM_LENGTH: usize = 4;

// A classifier is a tokenizer plus the profile it built from the corpus.
// The profile is computed once here and only read afterwards.
#[derive(Debug, Clone)]
pub struct Classifier {
    tokenizer: Tokenizer,
    profile: FrequencyProfile,
}

impl Classifier {
    pub fn new(corpus: &Corpus, tokenizer: Tokenizer) -> Self {
        let profile = FrequencyProfile::build(corpus, &tokenizer);
        Self { tokenizer, profile }
    }

    /// Whole-word frequency model.
    pub fn word_frequency(corpus: &Corpus) -> Self {
        Self::new(corpus, Tokenizer::Words)
    }

    /// Character n-gram frequency model. Fails on a zero window before
    /// touching the corpus.
    pub fn ngram_frequency(corpus: &Corpus, n: usize) -> Result<Self> {
        Ok(Self::new(corpus, Tokenizer::ngrams(n)?))
    }

    pub fn raw_scores(&self, text: &str) -> RawScores {
        let units = self.tokenizer.tokenize(text);
        score(&units, &self.profile)
    }

    /// Percentage distribution of `text` over the corpus languages.
    pub fn result(&self, text: &str) -> ScoreDistribution {
        normalize(&self.raw_scores(text))
    }

    pub fn classify(&self, text: &str) -> ScoreDistribution {
        self.result(text)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn profile(&self) -> &FrequencyProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn corpus(entries: &[(&str, &[&str])]) -> Corpus {
        entries
            .iter()
            .map(|(lang, docs)| (lang.to_string(), docs.iter().map(|d| d.to_string()).collect()))
            .collect()
    }

    #[test]
    fn word_model_prefers_language_with_shared_words() {
        let c = corpus(&[("en", &["the cat sat"]), ("fr", &["le chat etait assis"])]);
        let classifier = Classifier::word_frequency(&c);
        let raw = classifier.raw_scores("the dog sat");
        assert!(raw["en"] > raw["fr"]);

        let d = classifier.result("the dog sat");
        assert_eq!(d.get("en"), Some(100.0));
        assert_eq!(d.get("fr"), Some(0.0));
        assert_eq!(d.best().map(|(lang, _)| lang), Some("en"));
    }

    #[test]
    fn empty_document_list_scores_zero_without_error() {
        let c = corpus(&[("en", &["the cat"]), ("fr", &[])]);
        let classifier = Classifier::word_frequency(&c);
        assert_eq!(classifier.raw_scores("the cat")["fr"], 0);
        assert_eq!(classifier.result("le chien").len(), 2);
    }

    #[test]
    fn ngram_model_rejects_zero_window() {
        let c = corpus(&[("en", &["the cat"])]);
        assert!(matches!(
            Classifier::ngram_frequency(&c, 0),
            Err(Error::InvalidNgramLength(0))
        ));
    }

    #[test]
    fn ngram_window_longer_than_text_is_uniform() {
        let c = corpus(&[
            ("be", &["прывітанне"]),
            ("fr", &["bonjour"]),
            ("ru", &["привет"]),
            ("uk", &["привіт"]),
        ]);
        let classifier = Classifier::ngram_frequency(&c, 4).unwrap();
        let d = classifier.result("при");
        assert!(d.iter().all(|(_, share)| share == 25.0));
    }

    #[test]
    fn ngram_model_separates_related_languages() {
        let c = corpus(&[
            ("ru", &["что это такое и почему это происходит"]),
            ("uk", &["що це таке і чому це відбувається"]),
        ]);
        let classifier = Classifier::ngram_frequency(&c, 3).unwrap();
        let d = classifier.result("почему это");
        assert_eq!(d.best().map(|(lang, _)| lang), Some("ru"));
    }

    #[test]
    fn repeated_calls_reuse_the_same_profile() {
        let c = corpus(&[("en", &["one two three"]), ("de", &["eins zwei drei"])]);
        let classifier = Classifier::word_frequency(&c);
        let first = classifier.result("two three");
        let second = classifier.result("two three");
        assert_eq!(first, second);
        assert_eq!(classifier.profile().count("en", "two"), 1);
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
