//! Answer scoring for typed quiz mode.
//!
//! Both answers are normalized (lowercase, no dashes, collapsed whitespace) and split
//! into comma-separated alternatives. The score is the share of reference alternatives
//! covered by at least one of the user's alternatives.

use crate::types::ScoredAnswer;
use serde::{Deserialize, Serialize};

/// How a scored answer is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Every reference alternative was covered.
    Correct,
    /// Some, but not all, alternatives were covered.
    Partial,
    /// Nothing was covered.
    Incorrect,
}

impl From<ScoredAnswer> for Feedback {
    fn from(answer: ScoredAnswer) -> Self {
        if answer.matched {
            Self::Correct
        } else if answer.score > 0.0 {
            Self::Partial
        } else {
            Self::Incorrect
        }
    }
}

/// Normalize text for comparison: lowercase, drop dashes, trim and collapse whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace('-', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into normalized comma-separated alternatives, skipping empty ones.
pub fn alternatives(text: &str) -> Vec<String> {
    normalize(text)
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score a typed answer against the reference answer.
pub fn score(user_answer: &str, reference_answer: &str) -> ScoredAnswer {
    let user_tokens = alternatives(user_answer);
    let reference_tokens = alternatives(reference_answer);

    if user_tokens.is_empty() || reference_tokens.is_empty() {
        return ScoredAnswer::zero();
    }

    let direct: Vec<bool> = reference_tokens
        .iter()
        .map(|reference| user_tokens.iter().any(|user| covers(user, reference)))
        .collect();

    // An abbreviation is also covered when its spelled-out alternative was answered
    let covered = reference_tokens
        .iter()
        .enumerate()
        .filter(|&(i, reference)| {
            direct[i]
                || reference_tokens
                    .iter()
                    .zip(&direct)
                    .any(|(other, &hit)| hit && is_abbreviation_of(reference, other))
        })
        .count();

    let score = (covered as f64 / reference_tokens.len() as f64).clamp(0.0, 1.0);
    ScoredAnswer {
        score,
        matched: covered == reference_tokens.len(),
    }
}

/// Whether a normalized user token earns credit for a normalized reference token.
fn covers(user: &str, reference: &str) -> bool {
    user == reference || user.contains(reference) || reference.contains(user)
}

/// Whether `short` abbreviates `long`: a single word, shorter, same first letter,
/// and its letters appear in order within `long` ("iv" for "intravenous").
fn is_abbreviation_of(short: &str, long: &str) -> bool {
    if short.contains(' ') || short.chars().count() >= long.chars().count() {
        return false;
    }
    if short.chars().next() != long.chars().next() {
        return false;
    }

    let mut remaining = long.chars();
    short.chars().all(|c| remaining.any(|l| l == c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Tachy-Cardia  "), "tachycardia");
        assert_eq!(normalize("chest \t  pain"), "chest pain");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["  Brady - cardia ", "IV, Intra-venous", "לחץ  דם", "---"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_alternatives() {
        assert_eq!(alternatives("IV, intravenous"), vec!["iv", "intravenous"]);
        assert_eq!(alternatives("ecto-, exo-"), vec!["ecto", "exo"]);
        assert_eq!(alternatives(" , ,a,"), vec!["a"]);
    }

    #[test]
    fn test_exact_and_case_insensitive() {
        assert!(score("hypertension", "hypertension").matched);
        assert!(score("HyPerTension", "hypertension").matched);
        assert!(score("cpr", "CPR").matched);
    }

    #[test]
    fn test_dash_insensitive() {
        assert_eq!(score("tachycardia", "tachy-cardia").score, 1.0);
        assert_eq!(score("brady-cardia", "bradycardia").score, 1.0);
    }

    #[test]
    fn test_comma_alternatives_partial_credit() {
        let result = score("iv", "IV, intravenous");
        assert_eq!(result.score, 0.5);
        assert!(!result.matched);

        let result = score("intravenous", "IV, intravenous");
        assert_eq!(result.score, 1.0);
        assert!(result.matched);

        assert_eq!(score("term1", "term1, term2").score, 0.5);
        assert_eq!(score("term2, term1", "term1, term2").score, 1.0);
    }

    #[test]
    fn test_abbreviation_needs_spelled_out_alternative() {
        assert_eq!(score("hypertension", "hypo-").score, 0.0);
        assert_eq!(score("crisper", "CPR").score, 0.0);
        assert_eq!(score("intravenous", "IV").score, 0.0);
        assert_eq!(score("blood pressure", "BP, blood pressure").score, 1.0);
    }

    #[test]
    fn test_substring_credit() {
        assert_eq!(score("pain", "chest pain").score, 1.0);
        assert_eq!(score("severe chest pain", "chest pain").score, 1.0);
    }

    #[test]
    fn test_empty_answer() {
        assert_eq!(score("", "anything"), ScoredAnswer::zero());
        assert_eq!(score("  , - ,", "anything"), ScoredAnswer::zero());
        assert_eq!(score("something", ""), ScoredAnswer::zero());
    }

    #[test]
    fn test_incorrect_answer() {
        let result = score("wrong", "correct");
        assert_eq!(result.score, 0.0);
        assert_eq!(Feedback::from(result), Feedback::Incorrect);
    }

    #[test]
    fn test_abbreviation() {
        assert!(is_abbreviation_of("iv", "intravenous"));
        assert!(is_abbreviation_of("bp", "blood pressure"));
        assert!(!is_abbreviation_of("intravenous", "iv"));
        assert!(!is_abbreviation_of("vi", "intravenous"));
        assert!(!is_abbreviation_of("ab", "ab"));
    }

    #[test]
    fn test_feedback() {
        assert_eq!(Feedback::from(score("iv", "iv")), Feedback::Correct);
        assert_eq!(Feedback::from(score("iv", "IV, intravenous")), Feedback::Partial);
        assert_eq!(Feedback::from(ScoredAnswer::zero()), Feedback::Incorrect);
    }
}
