use std::fmt;

use log::debug;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Looks up a whole operator phrase such as "multiplied by".
    pub fn from_phrase(phrase: &str) -> Option<Operator> {
        match phrase {
            "plus" => Some(Operator::Add),
            "minus" => Some(Operator::Subtract),
            "multiplied by" | "times" => Some(Operator::Multiply),
            "divided by" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub const OPERATOR_PHRASES: &[&str] = &["plus", "minus", "multiplied by", "times", "divided by"];

/// Operator phrases pre-split into words, longest phrase first so
/// "multiplied by" is tried before any single-word operator.
static OPERATOR_TABLE: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    let mut table: Vec<(&'static str, Vec<&'static str>)> = OPERATOR_PHRASES
        .iter()
        .map(|&phrase| (phrase, phrase.split(' ').collect()))
        .collect();
    table.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    table
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Raw number phrase between operators.
    Operand(String),
    Operator { op: Operator, phrase: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub token: Token,
    /// Index of the first word of this token in the input.
    pub word: usize,
}

pub struct Lexer {
    words: Vec<String>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            words: input
                .trim()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            pos: 0,
        }
    }

    /// Operator phrase starting at the current word, with its word count.
    fn match_operator(&self) -> Option<(Operator, &'static str, usize)> {
        let rest = &self.words[self.pos..];
        OPERATOR_TABLE.iter().find_map(|(phrase, parts)| {
            let matches = parts.len() <= rest.len()
                && parts.iter().zip(rest).all(|(part, word)| part == word);
            if matches {
                Operator::from_phrase(phrase).map(|op| (op, *phrase, parts.len()))
            } else {
                None
            }
        })
    }

    pub fn tokenize(&mut self) -> Vec<TokenInfo> {
        let mut tokens = Vec::new();
        let mut operand: Vec<&str> = Vec::new();
        let mut operand_start = 0;

        while self.pos < self.words.len() {
            if let Some((op, phrase, len)) = self.match_operator() {
                if !operand.is_empty() {
                    tokens.push(TokenInfo {
                        token: Token::Operand(operand.join(" ")),
                        word: operand_start,
                    });
                    operand.clear();
                }
                tokens.push(TokenInfo {
                    token: Token::Operator { op, phrase },
                    word: self.pos,
                });
                self.pos += len;
            } else {
                if operand.is_empty() {
                    operand_start = self.pos;
                }
                operand.push(&self.words[self.pos]);
                self.pos += 1;
            }
        }

        if !operand.is_empty() {
            tokens.push(TokenInfo {
                token: Token::Operand(operand.join(" ")),
                word: operand_start,
            });
        }

        debug!("tokenized {} words into {:?}", self.words.len(), tokens);
        tokens
    }
}

/// Splits an expression into alternating operand phrases and operators.
pub fn tokenize(expression: &str) -> Vec<TokenInfo> {
    Lexer::new(expression).tokenize()
}
