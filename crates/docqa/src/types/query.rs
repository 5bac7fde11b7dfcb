//! Question request types

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ask`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    /// The question to answer
    #[serde(default)]
    pub question: String,
}

/// A question with the terms used for scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Question text as submitted
    pub question: String,
    /// Distinct lowercase terms, in order of first appearance
    pub terms: Vec<String>,
}

impl Query {
    /// Build a query, keeping only terms longer than `min_term_chars`
    ///
    /// Tokens are split on whitespace, lowercased, and stripped of leading and
    /// trailing punctuation, so `"deadline?"` yields the term `deadline`.
    pub fn new(question: impl Into<String>, min_term_chars: usize) -> Self {
        let question = question.into();
        let mut terms: Vec<String> = Vec::new();

        for token in question.to_lowercase().split_whitespace() {
            let term = token.trim_matches(|c: char| !c.is_alphanumeric());
            if term.chars().count() <= min_term_chars {
                continue;
            }
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }

        Self { question, terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_filter_short_tokens() {
        let query = Query::new("What is the deadline?", 3);
        assert_eq!(query.terms, vec!["what", "deadline"]);
        assert_eq!(query.question, "What is the deadline?");
    }

    #[test]
    fn test_terms_are_distinct_and_lowercase() {
        let query = Query::new("Budget BUDGET budget, plans", 3);
        assert_eq!(query.terms, vec!["budget", "plans"]);
    }

    #[test]
    fn test_inner_punctuation_is_kept() {
        let query = Query::new("state-of-the-art e-mail (q3-report)", 3);
        assert_eq!(query.terms, vec!["state-of-the-art", "e-mail", "q3-report"]);
    }

    #[test]
    fn test_no_terms() {
        let query = Query::new("is it on?", 3);
        assert!(query.terms.is_empty());
    }

    #[test]
    fn test_missing_question_deserializes_empty() {
        let request: AskRequest = serde_json::from_str("{}").unwrap();
        assert!(request.question.is_empty());
    }
}
