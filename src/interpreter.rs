/// The lexer module tokenizes an expression line for evaluation.
///
/// The lexer (tokenizer) reads the raw input text and produces tokens on
/// demand, one per call, each corresponding to a numeric literal or an
/// operator symbol. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Resolves whether a `+`/`-` is a literal's sign or a binary operator.
/// - Reports lexical errors for invalid or misplaced characters.
pub mod lexer;
/// The operator module defines the four arithmetic operators.
///
/// Declares the `Operator` enum together with its fixed precedence table and
/// the arithmetic each operator performs, including the division-by-zero
/// check.
pub mod operator;
/// The evaluator module reduces a token stream to a single number.
///
/// The evaluator drives the tokenizer to completion while maintaining an
/// operator stack and a value stack, applying precedence rules so that the
/// expression is computed without building a parse tree. It is the core
/// execution engine of the calculator.
///
/// # Responsibilities
/// - Folds tokens into a result using two auxiliary stacks.
/// - Enforces operator precedence and left-to-right associativity.
/// - Reports errors such as division by zero or malformed structure.
pub mod evaluator;
