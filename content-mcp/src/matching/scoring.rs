//! Keyword scoring for classes and names
//!
//! Scores are additive: exact matches, substring matches, fuzzy token
//! matches and a coverage bonus for multi-keyword queries. All comparisons
//! are case-insensitive.

use super::similarity::{tokenize, word_similarity};
use crate::metadata::ClassDescriptor;
use std::collections::HashSet;

/// Keyword equals the symbolic name
pub const EXACT_SYMBOLIC_NAME_MATCH_SCORE: f64 = 20.0;
/// Keyword equals the display name
pub const EXACT_DISPLAY_NAME_MATCH_SCORE: f64 = 15.0;
/// Keyword is contained in the symbolic name
pub const SYMBOLIC_NAME_SUBSTRING_SCORE: f64 = 10.0;
/// Keyword is contained in the display name
pub const DISPLAY_NAME_SUBSTRING_SCORE: f64 = 8.0;
/// Keyword is contained in the descriptive text
pub const DESCRIPTIVE_TEXT_SUBSTRING_SCORE: f64 = 3.0;

/// Token similarity above this counts as a strong match
pub const HIGH_SIMILARITY_THRESHOLD: f64 = 0.7;
/// Token similarity above this counts as a weak match
pub const MEDIUM_SIMILARITY_THRESHOLD: f64 = 0.5;
/// Descriptive text tokens only count above this similarity
pub const DESCRIPTION_HIGH_SIMILARITY_THRESHOLD: f64 = 0.8;

const HIGH_SIMILARITY_MULTIPLIER: f64 = 5.0;
const MEDIUM_SIMILARITY_MULTIPLIER: f64 = 3.0;
const DISPLAY_HIGH_SIMILARITY_MULTIPLIER: f64 = 4.0;
const DISPLAY_MEDIUM_SIMILARITY_MULTIPLIER: f64 = 2.0;
const DESCRIPTION_SIMILARITY_MULTIPLIER: f64 = 2.0;

/// Keyword is contained in a property's symbolic name
pub const PROPERTY_SYMBOLIC_NAME_SCORE: f64 = 2.0;
/// Keyword is contained in a property's display name
pub const PROPERTY_DISPLAY_NAME_SCORE: f64 = 1.5;

/// Bonus scaled by the fraction of keywords with a strong token match
pub const KEYWORD_COVERAGE_BONUS: f64 = 5.0;
/// Upper bound of a normalized class score
pub const MAX_SCORE_CAP: f64 = 100.0;

fn token_score(keyword_token: &str, tokens: &[String], high: f64, medium: f64) -> f64 {
    tokens
        .iter()
        .map(|token| {
            let similarity = word_similarity(keyword_token, token);
            if similarity > HIGH_SIMILARITY_THRESHOLD {
                high * similarity
            } else if similarity > MEDIUM_SIMILARITY_THRESHOLD {
                medium * similarity
            } else {
                0.0
            }
        })
        .sum()
}

/// Coverage bonus: applies only to multi-keyword queries
fn coverage_bonus(keywords: &[String], tokens: &[String]) -> f64 {
    if keywords.len() <= 1 {
        return 0.0;
    }
    let matched: HashSet<&String> = keywords
        .iter()
        .filter(|keyword| {
            tokens
                .iter()
                .any(|token| word_similarity(keyword, token) > HIGH_SIMILARITY_THRESHOLD)
        })
        .collect();
    KEYWORD_COVERAGE_BONUS * matched.len() as f64 / keywords.len() as f64
}

fn lowercase_all(keywords: &[impl AsRef<str>]) -> Vec<String> {
    keywords.iter().map(|k| k.as_ref().to_lowercase()).collect()
}

/// Score a class against keywords, normalized and capped
///
/// The raw score is divided by the square root of the keyword count and
/// capped at [`MAX_SCORE_CAP`]. An empty keyword list scores 0.
pub fn score_class(class: &ClassDescriptor, keywords: &[impl AsRef<str>]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let raw = raw_class_score(class, keywords);
    (raw / (keywords.len() as f64).sqrt()).min(MAX_SCORE_CAP)
}

/// Score a class against keywords before normalization
pub fn raw_class_score(class: &ClassDescriptor, keywords: &[impl AsRef<str>]) -> f64 {
    let keywords = lowercase_all(keywords);
    let symbolic_name = class.symbolic_name.to_lowercase();
    let display_name = class.display_name.to_lowercase();
    let descriptive_text = class.descriptive_text.to_lowercase();

    let symbolic_tokens = tokenize(&class.symbolic_name);
    let display_tokens = tokenize(&class.display_name);
    let descriptive_tokens = tokenize(&class.descriptive_text);

    let mut score = 0.0;
    for keyword in &keywords {
        if *keyword == symbolic_name {
            score += EXACT_SYMBOLIC_NAME_MATCH_SCORE;
            continue;
        }
        if *keyword == display_name {
            score += EXACT_DISPLAY_NAME_MATCH_SCORE;
            continue;
        }

        if symbolic_name.contains(keyword.as_str()) {
            score += SYMBOLIC_NAME_SUBSTRING_SCORE;
        }
        if display_name.contains(keyword.as_str()) {
            score += DISPLAY_NAME_SUBSTRING_SCORE;
        }

        for keyword_token in tokenize(keyword) {
            score += token_score(
                &keyword_token,
                &symbolic_tokens,
                HIGH_SIMILARITY_MULTIPLIER,
                MEDIUM_SIMILARITY_MULTIPLIER,
            );
            score += token_score(
                &keyword_token,
                &display_tokens,
                DISPLAY_HIGH_SIMILARITY_MULTIPLIER,
                DISPLAY_MEDIUM_SIMILARITY_MULTIPLIER,
            );
            score += descriptive_tokens
                .iter()
                .map(|token| word_similarity(&keyword_token, token))
                .filter(|similarity| *similarity > DESCRIPTION_HIGH_SIMILARITY_THRESHOLD)
                .map(|similarity| DESCRIPTION_SIMILARITY_MULTIPLIER * similarity)
                .sum::<f64>();
        }

        if descriptive_text.contains(keyword.as_str()) {
            score += DESCRIPTIVE_TEXT_SUBSTRING_SCORE;
        }

        for property in &class.property_descriptions {
            if property.symbolic_name.to_lowercase().contains(keyword.as_str()) {
                score += PROPERTY_SYMBOLIC_NAME_SCORE;
            }
            if property.display_name.to_lowercase().contains(keyword.as_str()) {
                score += PROPERTY_DISPLAY_NAME_SCORE;
            }
        }
    }

    let all_tokens: Vec<String> = symbolic_tokens
        .into_iter()
        .chain(display_tokens)
        .chain(descriptive_tokens)
        .collect();
    score + coverage_bonus(&keywords, &all_tokens)
}

/// Score a single name (document, folder or containment name) against
/// keywords
///
/// Same rules as the symbolic-name part of [`score_class`]; the result is
/// neither normalized nor capped.
pub fn score_name(name: &str, keywords: &[impl AsRef<str>]) -> f64 {
    let keywords = lowercase_all(keywords);
    let lowered = name.to_lowercase();
    let name_tokens = tokenize(name);

    let mut score = 0.0;
    for keyword in &keywords {
        if *keyword == lowered {
            score += EXACT_SYMBOLIC_NAME_MATCH_SCORE;
            continue;
        }
        if lowered.contains(keyword.as_str()) {
            score += SYMBOLIC_NAME_SUBSTRING_SCORE;
        }
        for keyword_token in tokenize(keyword) {
            score += token_score(
                &keyword_token,
                &name_tokens,
                HIGH_SIMILARITY_MULTIPLIER,
                MEDIUM_SIMILARITY_MULTIPLIER,
            );
        }
    }
    score + coverage_bonus(&keywords, &name_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Cardinality, DataType, PropertyDescriptor};
    use proptest::prelude::*;

    fn class(symbolic: &str, display: &str, text: &str) -> ClassDescriptor {
        ClassDescriptor::new(symbolic, display, text)
    }

    #[test]
    fn test_exact_symbolic_match_scores_at_least_twenty() {
        let invoice = class("Invoice", "Customer Invoice", "");
        assert!(raw_class_score(&invoice, &["invoice"]) >= EXACT_SYMBOLIC_NAME_MATCH_SCORE);
        assert!(score_class(&invoice, &["INVOICE"]) >= EXACT_SYMBOLIC_NAME_MATCH_SCORE);
    }

    #[test]
    fn test_exact_match_short_circuits_keyword() {
        let invoice = class("Invoice", "Invoice", "An invoice");
        assert_eq!(raw_class_score(&invoice, &["invoice"]), 20.0);
    }

    #[test]
    fn test_empty_keywords_score_zero() {
        let invoice = class("Invoice", "Invoice", "");
        let none: [&str; 0] = [];
        assert_eq!(score_class(&invoice, &none), 0.0);
        assert_eq!(score_name("Invoice", &none), 0.0);
    }

    #[test]
    fn test_unrelated_keyword_scores_zero() {
        let invoice = class("Invoice", "Invoice", "Customer billing");
        assert_eq!(score_class(&invoice, &["zebra"]), 0.0);
    }

    #[test]
    fn test_camel_case_tokens_match() {
        let claim = class("InsuranceClaim", "Insurance Claim", "");
        let other = class("Correspondence", "Correspondence", "");
        assert!(score_class(&claim, &["claim"]) > score_class(&other, &["claim"]));
    }

    #[test]
    fn test_property_matches_add_score() {
        let mut with_property = class("Record", "Record", "");
        with_property.property_descriptions.push(PropertyDescriptor {
            symbolic_name: "PolicyNumber".into(),
            display_name: "Policy Number".into(),
            descriptive_text: String::new(),
            data_type: DataType::String,
            cardinality: Cardinality::Single,
            is_searchable: true,
            is_system_owned: false,
            is_hidden: false,
        });
        let without = class("Record", "Record", "");
        assert_eq!(
            raw_class_score(&with_property, &["policy"]) - raw_class_score(&without, &["policy"]),
            PROPERTY_SYMBOLIC_NAME_SCORE + PROPERTY_DISPLAY_NAME_SCORE
        );
    }

    #[test]
    fn test_normalization_divides_by_sqrt_keyword_count() {
        let claim = class("InsuranceClaim", "Insurance Claim", "");
        let keywords = ["insurance", "claim", "auto", "home"];
        let raw = raw_class_score(&claim, &keywords);
        assert!((score_class(&claim, &keywords) - raw / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_capped() {
        let name = "claim ".repeat(40);
        let big = class(&name, &name, &name);
        assert_eq!(score_class(&big, &["claim"]), MAX_SCORE_CAP);
    }

    #[test]
    fn test_score_name_examples() {
        assert_eq!(score_name("Contracts", &["contracts"]), 20.0);
        assert!(score_name("Annual Report 2024", &["report"]) > 10.0);
        assert_eq!(score_name("Budget", &["zebra"]), 0.0);
    }

    #[test]
    fn test_coverage_bonus_only_for_multiple_keywords() {
        let single = score_name("Invoice", &["invoice"]);
        let double = score_name("Invoice Copy", &["invoice", "copy"]);
        assert_eq!(single, 20.0);
        // Two substring hits, two exact token hits, full coverage
        assert_eq!(double, 10.0 + 5.0 + 10.0 + 5.0 + KEYWORD_COVERAGE_BONUS);
    }

    proptest! {
        #[test]
        fn prop_scores_non_negative(name in "[A-Za-z_ ]{0,20}", keyword in "[a-z]{0,8}") {
            let descriptor = class(&name, &name, &name);
            prop_assert!(score_class(&descriptor, &[keyword.as_str()]) >= 0.0);
            prop_assert!(score_name(&name, &[keyword.as_str()]) >= 0.0);
        }

        #[test]
        fn prop_class_score_capped(name in "[A-Za-z ]{0,40}", keywords in proptest::collection::vec("[a-z]{1,6}", 1..6)) {
            let descriptor = class(&name, &name, &name);
            prop_assert!(score_class(&descriptor, &keywords) <= MAX_SCORE_CAP);
        }
    }
}
