//! Skills tokenisation shared by the matcher, the predictor and the PDF renderer.

use std::collections::HashSet;

/// Splits a comma-separated skills string into display tokens.
///
/// Tokens are trimmed, inner whitespace runs collapse to one space, empty
/// tokens are dropped and duplicates (case-insensitive) keep the first spelling.
pub fn split_skills(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|token| token.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(normalize_skill(token)))
        .collect()
}

/// Canonical form used for comparisons.
pub fn normalize_skill(skill: &str) -> String {
    skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalised, de-duplicated skill tokens ready for matching.
pub fn skill_query(raw: &str) -> Vec<String> {
    split_skills(raw).iter().map(|s| normalize_skill(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empty_tokens() {
        assert_eq!(
            split_skills(" Python ,, SQL ,  "),
            vec!["Python".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_split_never_yields_empty_tokens() {
        for raw in ["a,b", ",a,", " , , ", "x ,  y  , z", "", ",,,"] {
            assert!(split_skills(raw).iter().all(|t| !t.trim().is_empty()), "{raw:?}");
        }
    }

    #[test]
    fn test_split_dedupes_case_insensitively_keeping_first_spelling() {
        assert_eq!(
            split_skills("Rust, rust, RUST, Go"),
            vec!["Rust".to_string(), "Go".to_string()]
        );
    }

    #[test]
    fn test_split_collapses_inner_whitespace() {
        assert_eq!(
            split_skills("machine   learning, Machine Learning"),
            vec!["machine learning".to_string()]
        );
    }

    #[test]
    fn test_skill_query_is_lowercase() {
        assert_eq!(
            skill_query("Python, SQL"),
            vec!["python".to_string(), "sql".to_string()]
        );
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(skill_query("").is_empty());
        assert!(skill_query("   ").is_empty());
    }
}
