use crate::errors::{find_similar_word, InvalidExpressionError, Reason};
use crate::lexer::{Operator, Token, TokenInfo, OPERATOR_PHRASES};
use crate::numbers::{self, NUMBER_WORDS, SCALE_WORDS};

/// One `OP number` step; `position` is the word index of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub op: Operator,
    pub value: i64,
    pub position: usize,
}

/// A validated expression: the first number followed by its steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub first: i64,
    pub steps: Vec<Step>,
}

/// A word the number parser will skip, with the closest known word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub word: String,
    pub position: usize,
    pub suggestion: Option<String>,
}

/// Words the calculator knows, used for typo suggestions.
pub fn vocabulary() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = NUMBER_WORDS.iter().chain(SCALE_WORDS).copied().collect();
    for &phrase in OPERATOR_PHRASES {
        words.extend(phrase.split(' '));
    }
    words.sort_unstable();
    words.dedup();
    words
}

pub struct Analyzer {
    vocabulary: Vec<&'static str>,
    pub warnings: Vec<Warning>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            vocabulary: vocabulary(),
            warnings: Vec::new(),
        }
    }

    /// Checks that tokens alternate operand/operator and converts each operand.
    pub fn analyze(&mut self, tokens: &[TokenInfo]) -> Result<Expression, InvalidExpressionError> {
        let Some(first_info) = tokens.first() else {
            return Err(Reason::Empty.into());
        };

        let first = self.operand_value(first_info)?;
        let mut steps = Vec::with_capacity(tokens.len() / 2);

        let mut rest = tokens[1..].iter();
        while let Some(info) = rest.next() {
            let (op, phrase) = match &info.token {
                Token::Operator { op, phrase } => (*op, *phrase),
                // Two operands in a row cannot come out of the lexer
                Token::Operand(text) => {
                    return Err(InvalidExpressionError::new(Reason::MissingOperand(text.clone()))
                        .with_position(info.word))
                }
            };
            let Some(operand) = rest.next() else {
                return Err(InvalidExpressionError::new(Reason::TrailingOperator(phrase.to_string()))
                    .with_position(info.word));
            };
            steps.push(Step {
                op,
                value: self.operand_value(operand)?,
                position: operand.word,
            });
        }

        Ok(Expression { first, steps })
    }

    fn operand_value(&mut self, info: &TokenInfo) -> Result<i64, InvalidExpressionError> {
        let text = match &info.token {
            Token::Operand(text) => text,
            Token::Operator { phrase, .. } => {
                return Err(InvalidExpressionError::new(Reason::MissingOperand(phrase.to_string()))
                    .with_position(info.word))
            }
        };

        // Positions are counted over the raw words; normalize() may merge or drop some
        let raw_words: Vec<&str> = text.split_whitespace().collect();
        let mut has_number = false;
        for (offset, raw) in raw_words.iter().enumerate() {
            for word in numbers::normalize(raw) {
                if numbers::is_number_token(&word) {
                    has_number = true;
                } else {
                    let suggestion = find_similar_word(&word, &self.vocabulary);
                    self.warnings.push(Warning {
                        word,
                        position: info.word + offset,
                        suggestion,
                    });
                }
            }
        }

        if !has_number {
            let mut err = InvalidExpressionError::new(Reason::NonNumericOperand(text.clone()))
                .with_position(info.word);
            if let Some(suggestion) = self
                .warnings
                .iter()
                .rev()
                .find(|w| w.position >= info.word)
                .and_then(|w| w.suggestion.as_deref())
            {
                err = err.with_suggestion(suggestion);
            }
            return Err(err);
        }

        numbers::try_parse_number(text)
            .ok_or_else(|| InvalidExpressionError::new(Reason::Overflow).with_position(info.word))
    }
}
