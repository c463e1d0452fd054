// File: src/core/scoring.rs
use crate::core::profile::FrequencyProfile;
use crate::core::types::{RawScores, ScoreDistribution, Unit};
use std::collections::BTreeMap;

/// Sums, per language, the profile count of every unit in the unknown text.
/// A unit repeated k times contributes k times its count.
pub fn score(units: &[Unit], profile: &FrequencyProfile) -> RawScores {
    profile
        .tables()
        .map(|(lang, counts)| {
            let total = units.iter().fold(0u64, |sum, unit| {
                sum.saturating_add(counts.get(unit).copied().unwrap_or(0))
            });
            (lang.to_string(), total)
        })
        .collect()
}

/// Converts raw scores into percentages rounded to one decimal place.
/// When nothing scored at all, every language gets an equal share.
pub fn normalize(scores: &RawScores) -> ScoreDistribution {
    if scores.is_empty() {
        return ScoreDistribution::default();
    }

    let total: f64 = scores.values().map(|&s| s as f64).sum();
    if total == 0.0 {
        let share = round_one_decimal(100.0 / scores.len() as f64);
        return ScoreDistribution::new(scores.keys().map(|lang| (lang.clone(), share)).collect());
    }

    let shares: BTreeMap<_, _> = scores
        .iter()
        .map(|(lang, &s)| (lang.clone(), round_one_decimal(s as f64 / total * 100.0)))
        .collect();
    ScoreDistribution::new(shares)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
