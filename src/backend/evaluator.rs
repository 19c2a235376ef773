//! RPN evaluator.
//!
//! The evaluator owns a single [`Stack`] and applies tokens to it one at a
//! time. It performs no I/O; callers decide how to show results and errors.
//!
//! # Consumption on failure
//!
//! Arity checks run before any operand is popped, so `InsufficientOperands`
//! and `StackEmpty` leave the stack untouched. Value checks run after the
//! operands are popped: a failed `/` has consumed both operands and a failed
//! `?` has consumed its single operand. Nothing is pushed on failure.

use tracing::{debug, trace};

use super::operator::Operator;
use super::stack::{Stack, StackView};
use super::types::{EvalError, EvalResult};

/// Stack-based RPN evaluator
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Stack,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> EvalResult<f64> {
        self.stack.pop()
    }

    /// Empty the stack, returning how many values were discarded
    pub fn clear(&mut self) -> usize {
        self.stack.clear()
    }

    /// Current stack contents, top first. Never mutates the stack.
    pub fn render_stack(&self) -> StackView {
        self.stack.view()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply a single token: run it as an operator, or push it as a literal
    pub fn apply(&mut self, token: &str) -> EvalResult<()> {
        trace!(target: "rpncalc::eval", token, depth = self.stack.len(), "apply");

        let result = match Operator::from_symbol(token) {
            Some(op) => self.apply_operator(op),
            None => parse_literal(token).map(|value| self.stack.push(value)),
        };

        if let Err(err) = &result {
            debug!(
                target: "rpncalc::eval",
                token,
                kind = err.kind(),
                depth = self.stack.len(),
                "token failed"
            );
        }
        result
    }

    /// Apply every whitespace-separated token of `line` in order.
    ///
    /// Stops at the first failing token and returns its error; tokens before
    /// it keep their effect. Returns the number of tokens applied.
    pub fn apply_line(&mut self, line: &str) -> EvalResult<usize> {
        line.split_whitespace().try_fold(0, |applied, token| {
            self.apply(token)?;
            Ok(applied + 1)
        })
    }

    fn apply_operator(&mut self, op: Operator) -> EvalResult<()> {
        self.check_arity(op)?;

        let value = match op {
            Operator::Add => {
                let (a, b) = self.pop_operands()?;
                a + b
            }
            Operator::Subtract => {
                let (a, b) = self.pop_operands()?;
                a - b
            }
            Operator::Multiply => {
                let (a, b) = self.pop_operands()?;
                a * b
            }
            Operator::Divide => {
                let (a, b) = self.pop_operands()?;
                if b == 0.0 {
                    return Err(EvalError::DivideByZero { dividend: a });
                }
                a / b
            }
            Operator::Power => {
                let (base, exponent) = self.pop_operands()?;
                base.powf(exponent)
            }
            Operator::SquareRoot => {
                let a = self.stack.pop()?;
                if a < 0.0 {
                    return Err(EvalError::NegativeSquareRoot(a));
                }
                a.sqrt()
            }
        };

        self.stack.push(value);
        Ok(())
    }

    fn check_arity(&self, op: Operator) -> EvalResult<()> {
        let available = self.stack.len();
        let required = op.arity();
        if available >= required {
            return Ok(());
        }
        if required == 1 {
            Err(EvalError::StackEmpty {
                operator: op.symbol(),
            })
        } else {
            Err(EvalError::InsufficientOperands {
                operator: op.symbol(),
                required,
                available,
            })
        }
    }

    /// Pop the right-hand operand, then the left-hand one: `(a, b)` for `a OP b`
    fn pop_operands(&mut self) -> EvalResult<(f64, f64)> {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        Ok((a, b))
    }
}

/// Parse a numeric literal. NaN spellings are rejected.
pub fn parse_literal(token: &str) -> EvalResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(EvalError::InvalidLiteral(token.to_string())),
    }
}
