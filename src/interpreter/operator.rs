use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Represents a binary arithmetic operator.
///
/// The four operators form two precedence tiers: `*` and `/` bind tighter
/// than `+` and `-`. The tiers are fixed and read-only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Returns the operator for an operator symbol, or `None` for any other
    /// character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the precedence rank of the operator.
    ///
    /// A higher rank binds its operands first; equal ranks associate left to
    /// right.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division checks the right operand before dividing so that dividing by
    /// zero is reported as an error rather than producing an infinity or NaN.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Mul.apply(3.0, 4.0).unwrap(), 12.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
