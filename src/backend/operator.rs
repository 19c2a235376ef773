//! Operator vocabulary.
//!
//! Maps token symbols to `Operator` variants. Matching is exact: a token is
//! an operator only if it is one of the symbols below, character for character.

use std::fmt;

use itertools::Itertools;

/// Built-in operators, each with a fixed symbol and arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `?`
    SquareRoot,
    /// `^`, base below exponent on the stack
    Power,
}

/// Every operator, in legend order
pub const OPERATORS: [Operator; 6] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Power,
    Operator::SquareRoot,
];

impl Operator {
    /// Look up the operator for a token, if any
    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "?" => Some(Self::SquareRoot),
            "^" => Some(Self::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::SquareRoot => "?",
            Self::Power => "^",
        }
    }

    /// Number of operands consumed from the stack
    pub fn arity(self) -> usize {
        match self {
            Self::SquareRoot => 1,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => 2,
        }
    }

    /// Space-separated list of all symbols, for banners and help text
    pub fn legend() -> String {
        OPERATORS.iter().map(|op| op.symbol()).join(" ")
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
