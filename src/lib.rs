//! # tally
//!
//! tally is a basic calculator written in Rust. It evaluates arithmetic
//! expressions over the four operators `+`, `-`, `*` and `/` with standard
//! precedence and signed decimal literals, reducing a single line of text to
//! one floating-point result.
//!
//! Expressions are processed in two stages: a lazy tokenizer that scans the
//! input one character at a time, and a stack-based evaluator that applies
//! operator precedence without ever building a parse tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{evaluator::evaluate, lexer::Tokenizer},
};

/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while lexing or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including the offending character or
/// literal and its position in the input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the tokenizer, the operator table, and the
/// stack-based evaluator to provide a complete pipeline from a raw input
/// line to a numeric result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, operator table, and evaluator.
/// - Provides entry points for tokenizing and evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a single expression line and returns its numeric result.
///
/// This is the main entry point of the crate. The input may contain arbitrary
/// whitespace, signed decimal literals, and the four operator symbols; every
/// call is self-contained, so a failed line never affects the next one.
///
/// # Errors
/// Returns a [`CalcError`] if the line contains an invalid character, is
/// structurally malformed, or divides by zero.
///
/// # Examples
/// ```
/// use tally::evaluate_line;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), 14.0);
///
/// // A leading minus is the sign of the literal, not an operator.
/// assert_eq!(evaluate_line("-5 + 3").unwrap(), -2.0);
///
/// // Division by zero is reported as an error, never as infinity.
/// assert!(evaluate_line("4 / 0").is_err());
/// ```
pub fn evaluate_line(expression: &str) -> Result<f64, CalcError> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_expression(expression);
    evaluate(&mut tokenizer)
}
