// Backend module for RPN evaluation
//
// Pure evaluation core with no I/O:
// - `operator`: token symbol -> `Operator` lookup
// - `stack`: the f64 operand stack and its display snapshot
// - `evaluator`: token dispatch and arithmetic/error semantics

pub mod evaluator;
pub mod operator;
pub mod stack;
pub mod types;

pub use evaluator::{parse_literal, Evaluator};
pub use operator::{Operator, OPERATORS};
pub use stack::{Stack, StackView};
pub use types::{EvalError, EvalResult};
