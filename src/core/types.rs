// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An opaque identifier for a candidate language, e.g. an ISO code like "ru".
pub type LanguageId = String;

/// One block of raw reference text.
pub type Document = String;

/// A normalized token: a lowercased word or a lowercased character n-gram.
pub type Unit = String;

/// Reference documents grouped by language.
/// Ordered so that profiles and results iterate languages deterministically.
pub type Corpus = BTreeMap<LanguageId, Vec<Document>>;

/// Unnormalized relevance score per language.
pub type RawScores = BTreeMap<LanguageId, u64>;

/// Percentage breakdown across candidate languages for one classification call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreDistribution {
    shares: BTreeMap<LanguageId, f64>,
}

impl ScoreDistribution {
    pub fn new(shares: BTreeMap<LanguageId, f64>) -> Self {
        Self { shares }
    }

    pub fn get(&self, lang: &str) -> Option<f64> {
        self.shares.get(lang).copied()
    }

    /// The language with the highest share. On ties the first language in order wins.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (lang, &share) in &self.shares {
            match best {
                Some((_, top)) if share <= top => {}
                _ => best = Some((lang.as_str(), share)),
            }
        }
        best
    }

    pub fn total(&self) -> f64 {
        self.shares.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.shares.iter().map(|(lang, &share)| (lang.as_str(), share))
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<LanguageId, f64> {
        self.shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(&str, f64)]) -> ScoreDistribution {
        ScoreDistribution::new(pairs.iter().map(|(l, s)| (l.to_string(), *s)).collect())
    }

    #[test]
    fn best_picks_highest_share() {
        let d = dist(&[("be", 10.0), ("ru", 70.0), ("uk", 20.0)]);
        assert_eq!(d.best(), Some(("ru", 70.0)));
    }

    #[test]
    fn best_breaks_ties_by_language_order() {
        let d = dist(&[("fr", 50.0), ("en", 50.0)]);
        assert_eq!(d.best(), Some(("en", 50.0)));
    }

    #[test]
    fn empty_distribution_has_no_best() {
        assert!(ScoreDistribution::default().best().is_none());
    }

    #[test]
    fn serializes_as_plain_map() {
        let d = dist(&[("en", 75.0), ("fr", 25.0)]);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"en":75.0,"fr":25.0}"#);
    }
}
