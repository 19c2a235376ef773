//! Value stack for the evaluator.
//!
//! Holds `f64` operands. The top of the stack is the end of the backing `Vec`.

use std::fmt;

use itertools::Itertools;
use tracing::trace;

use super::types::{EvalError, EvalResult};

/// LIFO stack of operands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: f64) {
        trace!(target: "rpncalc::stack", value, depth = self.values.len() + 1, "push");
        self.values.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> EvalResult<f64> {
        let value = self.values.pop().ok_or(EvalError::StackUnderflow)?;
        trace!(target: "rpncalc::stack", value, depth = self.values.len(), "pop");
        Ok(value)
    }

    #[inline]
    pub fn peek(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Remove every value, returning how many were discarded
    pub fn clear(&mut self) -> usize {
        let discarded = self.values.len();
        self.values.clear();
        trace!(target: "rpncalc::stack", discarded, "clear");
        discarded
    }

    /// Snapshot of the stack, top first
    pub fn view(&self) -> StackView {
        StackView {
            values: self.values.iter().rev().copied().collect(),
        }
    }
}

/// Owned snapshot of a stack, ordered top-to-bottom
#[derive(Debug, Clone, PartialEq)]
pub struct StackView {
    values: Vec<f64>,
}

impl StackView {
    /// Values from top to bottom
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl fmt::Display for StackView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            write!(f, "[stack] (empty)")
        } else {
            write!(f, "[stack] {}", self.values.iter().join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new();
        stack.push(1.0);
        stack.push(2.0);
        assert_eq!(stack.pop(), Ok(2.0));
        assert_eq!(stack.pop(), Ok(1.0));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut stack = Stack::new();
        assert_eq!(stack.peek(), None);
        stack.push(7.5);
        assert_eq!(stack.peek(), Some(7.5));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_clear_reports_discarded() {
        let mut stack = Stack::new();
        for i in 0..4 {
            stack.push(i as f64);
        }
        assert_eq!(stack.clear(), 4);
        assert!(stack.is_empty());
        assert_eq!(stack.clear(), 0);
    }

    #[test]
    fn test_view_is_top_first() {
        let mut stack = Stack::new();
        stack.push(1.0);
        stack.push(2.0);
        stack.push(3.0);
        assert_eq!(stack.view().values(), &[3.0, 2.0, 1.0]);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_view_display() {
        let mut stack = Stack::new();
        assert_eq!(stack.view().to_string(), "[stack] (empty)");
        stack.push(1.0);
        stack.push(2.5);
        stack.push(-3.0);
        assert_eq!(stack.view().to_string(), "[stack] -3 2.5 1");
    }

    #[test]
    fn test_view_display_infinity() {
        let mut stack = Stack::new();
        stack.push(f64::INFINITY);
        assert_eq!(stack.view().to_string(), "[stack] inf");
    }
}
