//! Type definitions for the evaluator.
//!
//! - EvalError: errors a token can raise while it is applied
//! - EvalResult: result alias used throughout the backend

/// Result of applying a token or popping the stack
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while evaluating RPN input
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Raw pop on an empty stack
    StackUnderflow,
    /// Operator needs more operands than the stack holds (stack untouched)
    InsufficientOperands {
        operator: &'static str,
        required: usize,
        available: usize,
    },
    /// Unary operator applied to an empty stack (stack untouched)
    StackEmpty { operator: &'static str },
    /// Divisor was exactly zero (both operands consumed)
    DivideByZero { dividend: f64 },
    /// Square root of a negative operand (operand consumed)
    NegativeSquareRoot(f64),
    /// Token is neither an operator nor a number
    InvalidLiteral(String),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "Stack underflow"),
            Self::InsufficientOperands {
                operator,
                required,
                available,
            } => write!(
                f,
                "Insufficient operands: '{}' needs {} but the stack holds {}",
                operator, required, available
            ),
            Self::StackEmpty { operator } => {
                write!(f, "Stack is empty: '{}' needs an operand", operator)
            }
            Self::DivideByZero { dividend } => write!(f, "Division by zero: {} / 0", dividend),
            Self::NegativeSquareRoot(x) => {
                write!(f, "Cannot take the square root of a negative number: {}", x)
            }
            Self::InvalidLiteral(token) => write!(f, "Invalid input '{}'", token),
        }
    }
}

impl std::error::Error for EvalError {}

impl EvalError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StackUnderflow => "stack-underflow",
            Self::InsufficientOperands { .. } => "insufficient-operands",
            Self::StackEmpty { .. } => "stack-empty",
            Self::DivideByZero { .. } => "divide-by-zero",
            Self::NegativeSquareRoot(_) => "negative-square-root",
            Self::InvalidLiteral(_) => "invalid-literal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_insufficient_operands() {
        let err = EvalError::InsufficientOperands {
            operator: "+",
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient operands: '+' needs 2 but the stack holds 1"
        );
    }

    #[test]
    fn test_display_invalid_literal_quotes_token() {
        let err = EvalError::InvalidLiteral("abc".to_string());
        assert_eq!(err.to_string(), "Invalid input 'abc'");
    }

    #[test]
    fn test_kinds_are_distinct() {
        let errors = [
            EvalError::StackUnderflow,
            EvalError::InsufficientOperands {
                operator: "-",
                required: 2,
                available: 0,
            },
            EvalError::StackEmpty { operator: "?" },
            EvalError::DivideByZero { dividend: 1.0 },
            EvalError::NegativeSquareRoot(-4.0),
            EvalError::InvalidLiteral("x".to_string()),
        ];
        let mut kinds: Vec<_> = errors.iter().map(EvalError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }
}
