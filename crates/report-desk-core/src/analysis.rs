//! Repeated-word report detector.
//!
//! Classifies reports by word frequency: a report qualifies when some
//! word occurs at least [`REPEAT_THRESHOLD`] times in its text. Used by
//! the `GET /api/v1/reports/repeating-words` endpoint and the
//! `reportd scan` CLI command.
//!
//! # Algorithm
//!
//! 1. Lowercase the report text.
//! 2. Strip every character that is not an ASCII word character
//!    (`[A-Za-z0-9_]`) or whitespace. Punctuation such as `.,!?'"()`
//!    disappears; `"don't"` becomes the single token `"dont"`.
//! 3. Split on whitespace runs, discarding empty fragments.
//! 4. Count occurrences of each distinct token.
//! 5. The report qualifies when any count reaches the threshold.
//!
//! The character class is deliberately ASCII-biased to preserve the
//! original system's tokenization; non-ASCII letters are stripped along
//! with punctuation.
//!
//! # Example
//!
//! ```rust
//! use report_desk_core::analysis::tokenize;
//!
//! assert_eq!(tokenize("The cat, the CAT!"), ["the", "cat", "the", "cat"]);
//! ```

use std::collections::HashMap;

use crate::models::Report;

/// Minimum number of occurrences of a single word for a report to qualify.
pub const REPEAT_THRESHOLD: u32 = 3;

/// Normalize report text into a sequence of comparable word tokens.
///
/// Lowercases, strips non-word non-whitespace characters, and splits on
/// whitespace runs. Empty or punctuation-only input yields an empty
/// vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count occurrences of each distinct token.
///
/// No further normalization is performed here; tokens are compared
/// exactly as produced by [`tokenize`]. Accumulation is commutative, so
/// token order never affects the result.
pub fn word_counts(tokens: &[String]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Whether a single report contains a word repeated at least
/// [`REPEAT_THRESHOLD`] times.
///
/// Total over its input: empty or malformed text simply fails to
/// qualify, it never errors.
pub fn qualifies(report: &Report) -> bool {
    word_counts(&tokenize(&report.text))
        .values()
        .any(|&count| count >= REPEAT_THRESHOLD)
}

/// Filter a corpus down to the reports that qualify.
///
/// A stable filter: relative order is preserved, no deduplication, and
/// the input is left untouched. Returns owned clones of the qualifying
/// subset.
pub fn filter_repeated(reports: &[Report]) -> Vec<Report> {
    reports.iter().filter(|r| qualifies(r)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(id: &str, text: &str) -> Report {
        Report {
            id: id.to_string(),
            text: text.to_string(),
            project_id: "p1".to_string(),
        }
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_punctuation_only() {
        assert!(tokenize("... !?! ,,, \t\n").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Go go GO"), ["go", "go", "go"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("cat. cat, cat!"), ["cat", "cat", "cat"]);
    }

    #[test]
    fn test_tokenize_contraction_collapses() {
        assert_eq!(tokenize("don't"), ["dont"]);
    }

    #[test]
    fn test_tokenize_hyphen_splits_nothing() {
        // Hyphen is not a word character; it is stripped without leaving
        // whitespace, so "cat-dog" fuses into a single token.
        assert_eq!(tokenize("cat-dog"), ["catdog"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscore() {
        assert_eq!(tokenize("v2 v2 foo_bar"), ["v2", "v2", "foo_bar"]);
    }

    #[test]
    fn test_tokenize_strips_non_ascii_letters() {
        // ASCII-biased word class: accented letters vanish like punctuation.
        assert_eq!(tokenize("café café"), ["caf", "caf"]);
    }

    #[test]
    fn test_word_counts_exact() {
        let tokens = tokenize("the cat sat on the mat the");
        let counts = word_counts(&tokens);
        assert_eq!(counts.get("the"), Some(&3));
        assert_eq!(counts.get("cat"), Some(&1));
        assert_eq!(counts.get("dog"), None);
    }

    #[test]
    fn test_word_counts_empty() {
        assert!(word_counts(&[]).is_empty());
    }

    #[test]
    fn test_empty_text_never_qualifies() {
        assert!(!qualifies(&make_report("r1", "")));
    }

    #[test]
    fn test_two_repeats_do_not_qualify() {
        assert!(!qualifies(&make_report("r1", "echo echo alpha beta")));
    }

    #[test]
    fn test_three_repeats_qualify() {
        assert!(qualifies(&make_report("r1", "echo echo echo")));
    }

    #[test]
    fn test_case_variants_count_as_one_token() {
        assert!(qualifies(&make_report("r1", "Go go GO")));
    }

    #[test]
    fn test_punctuation_variants_count_as_one_token() {
        assert!(qualifies(&make_report("r1", "cat. cat, cat!")));
    }

    #[test]
    fn test_fused_hyphen_tokens_still_qualify() {
        // Each "cat-dog" collapses to "catdog", so three of them repeat
        // the same fused token three times.
        assert!(qualifies(&make_report("r1", "cat-dog cat-dog cat-dog")));
    }

    #[test]
    fn test_scenario_the_cat_sat() {
        let report = Report {
            id: "1".to_string(),
            text: "the cat sat on the mat. the dog ran.".to_string(),
            project_id: "42".to_string(),
        };
        let out = filter_repeated(std::slice::from_ref(&report));
        assert_eq!(out, vec![report]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let a = make_report("a", "yes yes yes");
        let b = make_report("b", "no repeats here at all");
        let c = make_report("c", "ok ok ok ok");
        let out = filter_repeated(&[a.clone(), b, c.clone()]);
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let input = vec![make_report("a", "x x x"), make_report("b", "y")];
        let snapshot = input.clone();
        let _ = filter_repeated(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_filter_deterministic() {
        let input = vec![
            make_report("a", "one two three one two one"),
            make_report("b", ""),
            make_report("c", "go Go gO go"),
        ];
        let first = filter_repeated(&input);
        let second = filter_repeated(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_empty_corpus() {
        assert!(filter_repeated(&[]).is_empty());
    }
}
