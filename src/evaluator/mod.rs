use log::{debug, trace};

use crate::analyzer::{Analyzer, Expression, Step, Warning};
use crate::errors::{InvalidExpressionError, Reason};
use crate::lexer::{tokenize, Operator};

/// Result of evaluating one expression, with the words that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i64,
    pub warnings: Vec<Warning>,
}

/// Applies one step. Division truncates toward zero.
pub fn apply(lhs: i64, op: Operator, rhs: i64) -> Result<i64, Reason> {
    match op {
        Operator::Add => lhs.checked_add(rhs).ok_or(Reason::Overflow),
        Operator::Subtract => lhs.checked_sub(rhs).ok_or(Reason::Overflow),
        Operator::Multiply => lhs.checked_mul(rhs).ok_or(Reason::Overflow),
        Operator::Divide => {
            if rhs == 0 {
                return Err(Reason::DivisionByZero);
            }
            lhs.checked_div(rhs).ok_or(Reason::Overflow)
        }
    }
}

/// Folds the steps strictly left to right; there is no precedence.
/// Errors point at the number of the failing step.
pub fn reduce(expression: &Expression) -> Result<i64, InvalidExpressionError> {
    expression.steps.iter().try_fold(expression.first, |acc, step| -> Result<i64, InvalidExpressionError> {
        let Step { op, value, position } = *step;
        let next = apply(acc, op, value)
            .map_err(|reason| InvalidExpressionError::new(reason).with_position(position))?;
        trace!("{} {} {} = {}", acc, op, value, next);
        Ok(next)
    })
}

/// Evaluates a sentence and also returns the words that were ignored.
pub fn evaluate(expression: &str) -> Result<Evaluation, InvalidExpressionError> {
    let tokens = tokenize(expression);
    let mut analyzer = Analyzer::new();
    let parsed = analyzer.analyze(&tokens)?;
    let value = reduce(&parsed)?;
    debug!("'{}' = {}", expression.trim(), value);
    Ok(Evaluation {
        value,
        warnings: analyzer.warnings,
    })
}

/// Evaluates an English arithmetic sentence such as
/// "three hundred million minus two hundred thousand".
pub fn calculate(expression: &str) -> Result<i64, InvalidExpressionError> {
    evaluate(expression).map(|e| e.value)
}
