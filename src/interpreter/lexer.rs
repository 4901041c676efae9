use crate::{error::LexError, interpreter::operator::Operator};

/// Represents a lexical token in the input expression.
/// A token is a minimal but meaningful unit of text produced by the lexer:
/// either a standalone operator symbol or the text of a numeric literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A binary operator symbol, such as `*`.
    Operator(Operator),
    /// The text of an optionally signed decimal literal, such as `-3.5`.
    /// The literal is kept as a string; parsing it into a number is the
    /// evaluator's job.
    Literal(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "{op}"),
            Self::Literal(text) => write!(f, "{text}"),
        }
    }
}

/// Produces tokens from an expression line, one per call.
///
/// The tokenizer scans the stored expression on demand. It tracks a cursor
/// into the text and a sign flag that records whether a following `+`/`-`
/// belongs to a numeric literal rather than acting as a binary operator. The
/// flag is true only at the start of the expression or right after an
/// operator token was emitted.
///
/// ## Usage
///
/// A `Tokenizer` is reusable: assigning a new expression with
/// [`set_expression`](Self::set_expression) resets the cursor and the sign
/// flag, so state never leaks from one line to the next.
pub struct Tokenizer {
    /// The expression text being scanned.
    source:       String,
    /// Byte offset of the next character to read.
    cursor:       usize,
    /// Whether a `+`/`-` at the cursor is the sign of a literal.
    sign_allowed: bool,
}

#[allow(clippy::new_without_default)]
impl Tokenizer {
    /// Creates a tokenizer with no expression assigned.
    #[must_use]
    pub const fn new() -> Self {
        Self { source:       String::new(),
               cursor:       0,
               sign_allowed: true, }
    }

    /// Assigns the expression to be tokenized.
    ///
    /// Resets the cursor to the start of the text and allows the first
    /// character to be the sign of a number.
    pub fn set_expression(&mut self, expression: &str) {
        self.source = expression.to_string();
        self.cursor = 0;
        self.sign_allowed = true;
    }

    /// Returns the next token, or `None` when the input is exhausted.
    ///
    /// Whitespace is skipped everywhere, including between the digits of a
    /// forming literal. A `+`/`-` in sign position is absorbed into the
    /// literal being built. An operator that follows accumulated literal
    /// characters delimits the literal; it is left unconsumed so the next
    /// call emits it as its own token.
    ///
    /// # Returns
    /// - `Ok(Some(token))`: The next operator or literal token.
    /// - `Ok(None)`: The whole expression has been consumed.
    /// - `Err(error)`: An invalid or misplaced character was found.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{
    ///     lexer::{Token, Tokenizer},
    ///     operator::Operator,
    /// };
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// tokenizer.set_expression("-1.5*3");
    ///
    /// assert_eq!(tokenizer.next_token().unwrap(), Some(Token::Literal("-1.5".to_string())));
    /// assert_eq!(tokenizer.next_token().unwrap(), Some(Token::Operator(Operator::Mul)));
    /// assert_eq!(tokenizer.next_token().unwrap(), Some(Token::Literal("3".to_string())));
    /// assert_eq!(tokenizer.next_token().unwrap(), None);
    /// ```
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let mut literal = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance(ch);
                continue;
            }

            if let Some(operator) = Operator::from_char(ch) {
                if self.sign_allowed {
                    if ch != '+' && ch != '-' {
                        return Err(LexError::InvalidSign { ch, position: self.cursor });
                    }
                    // The sign becomes part of the forming literal.
                    literal.push(ch);
                    self.sign_allowed = false;
                    self.advance(ch);
                } else if literal.is_empty() {
                    self.sign_allowed = true;
                    self.advance(ch);
                    return Ok(Some(Token::Operator(operator)));
                } else {
                    // The operator delimits the literal and belongs to the
                    // next token; leave it unconsumed.
                    return Ok(Some(Token::Literal(literal)));
                }
            } else if ch.is_ascii_digit() || ch == '.' {
                literal.push(ch);
                self.sign_allowed = false;
                self.advance(ch);
            } else {
                return Err(LexError::InvalidCharacter { ch, position: self.cursor });
            }
        }

        if literal.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Token::Literal(literal)))
        }
    }

    /// Returns the character at the cursor without consuming it.
    fn peek(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    /// Consumes one character.
    fn advance(&mut self, ch: char) {
        self.cursor += ch.len_utf8();
    }
}
