/// Tokenizer errors.
///
/// Defines all error types that can occur while scanning an expression into
/// tokens. Lex errors include invalid characters and misplaced operator
/// symbols in sign position.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing the token
/// stream to a result. Evaluation errors include malformed literals, missing
/// operands, division by zero, and empty input.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;

#[derive(Debug, PartialEq)]
/// Represents any failure while evaluating one expression line.
///
/// This is the error type returned at the crate boundary. It wraps the two
/// error families raised by the pipeline stages so callers can use `?` across
/// both and still match on the precise failure.
pub enum CalcError {
    /// The tokenizer rejected the input text.
    Lex(LexError),
    /// The evaluator rejected the token stream.
    Eval(EvalError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<EvalError> for CalcError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
