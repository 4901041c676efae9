#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that is not a digit, a decimal point, an operator
    /// symbol, or whitespace.
    InvalidCharacter {
        /// The character encountered.
        ch:       char,
        /// The byte offset in the input where the character was found.
        position: usize,
    },
    /// Found `*` or `/` where the sign of a number is expected, i.e. at the
    /// start of the expression or immediately after an operator.
    InvalidSign {
        /// The character encountered.
        ch:       char,
        /// The byte offset in the input where the character was found.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { ch, position } => {
                write!(f, "Tokenizer error at position {position}: Invalid character '{ch}'.")
            },

            Self::InvalidSign { ch, position } => write!(f,
                                                         "Tokenizer error at position {position}: '{ch}' is not a valid sign for a number."),
        }
    }
}

impl std::error::Error for LexError {}
