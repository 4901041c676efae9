#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token stream.
pub enum EvalError {
    /// A literal token does not parse as a decimal number, such as `1.2.3`
    /// or a lone sign with no digits.
    NumberFormat {
        /// The literal text that failed to parse.
        literal: String,
    },
    /// An operator was reduced without enough operands on the value stack,
    /// such as a trailing operator or two operators in a row outside sign
    /// position.
    StackUnderflow {
        /// The operator symbol that could not be applied.
        operator: char,
    },
    /// The right-hand operand of a division is exactly zero.
    DivisionByZero,
    /// The input produced no result at all, such as a blank line.
    EmptyExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberFormat { literal } => {
                write!(f, "Evaluation error: '{literal}' is not a valid number.")
            },

            Self::StackUnderflow { operator } => {
                write!(f, "Evaluation error: Missing operand for operator '{operator}'.")
            },

            Self::DivisionByZero => write!(f, "Evaluation error: Division by zero."),

            Self::EmptyExpression => write!(f, "Evaluation error: Expression is empty."),
        }
    }
}

impl std::error::Error for EvalError {}
