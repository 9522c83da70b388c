use std::fmt;

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Reason {
    #[error("there is nothing to evaluate")]
    Empty,
    #[error("expected a number before '{0}'")]
    MissingOperand(String),
    #[error("expected a number after '{0}'")]
    TrailingOperator(String),
    #[error("'{0}' is not a number")]
    NonNumericOperand(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("the result is too large")]
    Overflow,
}

/// The single failure signal of `calculate`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid expression: {reason}")]
pub struct InvalidExpressionError {
    pub reason: Reason,
    /// Word index (0-based) of the token the error points at.
    pub position: Option<usize>,
    pub suggestion: Option<String>,
}

impl InvalidExpressionError {
    pub fn new(reason: Reason) -> Self {
        InvalidExpressionError {
            reason,
            position: None,
            suggestion: None,
        }
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    /// Colored multi-line report for terminals.
    pub fn report(&self, expression: &str) -> Report<'_> {
        Report {
            error: self,
            expression: expression.to_string(),
        }
    }
}

impl From<Reason> for InvalidExpressionError {
    fn from(reason: Reason) -> Self {
        InvalidExpressionError::new(reason)
    }
}

pub struct Report<'a> {
    error: &'a InvalidExpressionError,
    expression: String,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RED: &str = "\x1b[1;31m";
        const BLUE: &str = "\x1b[1;34m";
        const YELLOW: &str = "\x1b[1;33m";
        const GREEN: &str = "\x1b[1;32m";
        const RESET: &str = "\x1b[0m";
        const BOLD: &str = "\x1b[1m";

        writeln!(f, "{}error{}: {}{}{}", RED, RESET, BOLD, self.error, RESET)?;

        if let Some(position) = self.error.position {
            let words: Vec<&str> = self.expression.split_whitespace().collect();
            if position < words.len() {
                // Column of the word within the single-spaced rendering
                let offset: usize = words[..position].iter().map(|w| w.len() + 1).sum();
                writeln!(f, "  {}|{} {}", BLUE, RESET, words.join(" "))?;
                writeln!(
                    f,
                    "  {}|{} {}{}{}{}",
                    BLUE,
                    RESET,
                    " ".repeat(offset),
                    RED,
                    "^".repeat(words[position].len().max(1)),
                    RESET
                )?;
            }
        }

        if let Some(ref suggestion) = self.error.suggestion {
            writeln!(
                f,
                "  {}help{}: did you mean `{}{}{}`?",
                GREEN, RESET, YELLOW, suggestion, RESET
            )?;
        }

        Ok(())
    }
}

/// Edit distance between two already-lowercased words.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Closest vocabulary word to a misspelled number or operator word.
///
/// Words under three letters are never corrected; longer ones tolerate one
/// edit per three letters, at most two.
pub fn find_similar_word(word: &str, vocabulary: &[&str]) -> Option<String> {
    let word = word.to_lowercase();
    let len = word.chars().count();
    if len < 3 || vocabulary.contains(&word.as_str()) {
        return None;
    }

    let max_distance = (len / 3).min(2);
    vocabulary
        .iter()
        .filter(|candidate| candidate.chars().count().abs_diff(len) <= max_distance)
        .map(|candidate| (*candidate, levenshtein_distance(&word, candidate)))
        .filter(|&(_, distance)| distance <= max_distance)
        .min_by_key(|&(_, distance)| distance)
        .map(|(candidate, _)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["three", "thirty", "thousand", "hundred", "million", "plus", "minus"];

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("three", "three"), 0);
        assert_eq!(levenshtein_distance("three", "tree"), 1);
        assert_eq!(levenshtein_distance("milion", "million"), 1);
        assert_eq!(levenshtein_distance("", "plus"), 4);
        assert_eq!(levenshtein_distance("fourty", "forty"), 1);
        assert_eq!(levenshtein_distance("ten", "three"), 3);
    }

    #[test]
    fn test_find_similar() {
        assert_eq!(find_similar_word("tree", WORDS), Some("three".to_string()));
        assert_eq!(find_similar_word("milion", WORDS), Some("million".to_string()));
        assert_eq!(find_similar_word("thousnd", WORDS), Some("thousand".to_string()));
        assert_eq!(find_similar_word("pluss", WORDS), Some("plus".to_string()));
    }

    #[test]
    fn test_find_similar_rejects_exact_and_distant() {
        assert_eq!(find_similar_word("three", WORDS), None);
        assert_eq!(find_similar_word("banana", WORDS), None);
        assert_eq!(find_similar_word("to", WORDS), None);
        assert_eq!(find_similar_word("THREE", WORDS), None);
    }

    #[test]
    fn test_error_display() {
        let err = InvalidExpressionError::new(Reason::DivisionByZero);
        assert_eq!(err.to_string(), "invalid expression: division by zero");

        let err = InvalidExpressionError::new(Reason::NonNumericOperand("tree".into()))
            .with_position(2)
            .with_suggestion("three");
        assert_eq!(err.to_string(), "invalid expression: 'tree' is not a number");
        assert_eq!(err.position, Some(2));
        assert_eq!(err.suggestion.as_deref(), Some("three"));
    }

    #[test]
    fn test_report_points_at_word() {
        let err = InvalidExpressionError::new(Reason::NonNumericOperand("tree".into()))
            .with_position(2)
            .with_suggestion("three");
        let report = err.report("two plus tree").to_string();
        assert!(report.contains("two plus tree"));
        assert!(report.contains("^^^^"));
        assert!(report.contains("did you mean"));
        assert!(report.contains("three"));
    }
}
