//! Evaluate English number phrases and word arithmetic.
//!
//! ```
//! assert_eq!(wordcalc::parse_number("three hundred fifty six"), 356);
//! assert_eq!(
//!     wordcalc::calculate("three hundred million minus two hundred thousand"),
//!     Ok(299_800_000)
//! );
//! assert_eq!(wordcalc::format_number(299_800_000), "299,800,000");
//! ```

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod format;
pub mod lexer;
pub mod numbers;

pub use errors::{InvalidExpressionError, Reason};
pub use evaluator::{calculate, evaluate, Evaluation};
pub use format::{format_number, format_number_with};
pub use lexer::{tokenize, Operator, Token, TokenInfo};
pub use numbers::{parse_number, try_parse_number};
