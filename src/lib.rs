/// rpncalc - Reverse Polish Notation Calculator Library
///
/// This library provides an interactive RPN calculator over a single stack
/// of `f64` values. Tokens are applied one at a time, left to right: numeric
/// literals are pushed, operators act on the top of the stack.
///
/// # Architecture
///
/// 1. **Evaluation Core** (`backend` module)
///    - Owns the operand stack (`Stack`, `StackView`)
///    - Dispatches tokens through a fixed operator table (`Operator`)
///    - Reports failures as `EvalError` values; performs no I/O
///
/// 2. **REPL Driver** (`repl` module)
///    - Classifies lines into meta-commands (`q`, `c`, `s`) and token lines
///    - Writes stack renders and errors to generic output streams
///    - Integrates with rustyline for completion, hints and highlighting
///
/// # Example
///
/// ```rust
/// use rpncalc::backend::Evaluator;
///
/// let mut calc = Evaluator::new();
/// calc.apply_line("5 3 - 2 ^").unwrap();
/// assert_eq!(calc.render_stack().values(), &[4.0]);
/// assert_eq!(calc.render_stack().to_string(), "[stack] 4");
/// ```
///
/// # Operators
///
/// - `+`, `-`, `*`, `/`: binary; the top of the stack is the right-hand operand
/// - `^`: power; the base sits below the exponent
/// - `?`: square root of the top of the stack
///
/// # Failure Semantics
///
/// - **Arity errors** leave the stack untouched
/// - **Division by zero** consumes both operands
/// - **Negative square root** consumes its operand
/// - **Invalid literals** leave the stack untouched

pub mod backend;
pub mod repl;

pub use backend::{EvalError, EvalResult, Evaluator, Operator, StackView};
pub use repl::{ReplConfig, ReplSession};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operators() {
        let cases = [
            ("1 2 +", vec![3.0]),
            ("5 3 -", vec![2.0]),
            ("2 3 ^", vec![8.0]),
            ("9 ?", vec![3.0]),
        ];

        for (input, expected) in cases {
            let mut calc = Evaluator::new();
            calc.apply_line(input).unwrap();
            assert_eq!(calc.render_stack().values(), expected.as_slice(), "input: {input}");
        }
    }

    #[test]
    fn test_error_kinds() {
        let cases = [
            ("10 0 /", "divide-by-zero", 0),
            ("-4 ?", "negative-square-root", 0),
            ("+", "insufficient-operands", 0),
            ("?", "stack-empty", 0),
            ("abc", "invalid-literal", 0),
            ("1 2 abc", "invalid-literal", 2),
        ];

        for (input, kind, depth) in cases {
            let mut calc = Evaluator::new();
            let err = calc.apply_line(input).unwrap_err();
            assert_eq!(err.kind(), kind, "input: {input}");
            assert_eq!(calc.depth(), depth, "input: {input}");
        }
    }
}
