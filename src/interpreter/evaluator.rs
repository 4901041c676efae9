use crate::{
    error::{CalcError, EvalError},
    interpreter::{
        lexer::{Token, Tokenizer},
        operator::Operator,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Drives the tokenizer to completion and computes the expression's value.
///
/// The evaluator maintains two stacks: one of pending operators and one of
/// operand values. When an operator token arrives, every stacked operator of
/// higher or equal precedence is reduced first, which makes equal-precedence
/// chains associate left to right; the incoming operator is then pushed.
/// Literal tokens are parsed and pushed onto the value stack. Once the
/// tokenizer is exhausted, the remaining operators are reduced in turn and
/// the sole value left on the stack is the result.
///
/// Both stacks are local to the call, so repeated evaluations are fully
/// independent of each other.
///
/// # Parameters
/// - `tokenizer`: The tokenizer holding the expression to evaluate.
///
/// # Returns
/// A `Result<f64, CalcError>` containing the final value.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::evaluate, lexer::Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.set_expression("8 - 3 - 2");
///
/// assert_eq!(evaluate(&mut tokenizer).unwrap(), 3.0);
/// ```
pub fn evaluate(tokenizer: &mut Tokenizer) -> Result<f64, CalcError> {
    let mut operators: Vec<Operator> = Vec::new();
    let mut values: Vec<f64> = Vec::new();

    while let Some(token) = tokenizer.next_token()? {
        match token {
            Token::Operator(incoming) => {
                while let Some(&top) = operators.last() {
                    if incoming.precedence() > top.precedence() {
                        break;
                    }
                    operators.pop();
                    reduce(top, &mut values)?;
                }
                operators.push(incoming);
            },
            Token::Literal(text) => {
                let value = text.parse::<f64>()
                                .map_err(|_| EvalError::NumberFormat { literal: text })?;
                values.push(value);
            },
        }
    }

    while let Some(operator) = operators.pop() {
        reduce(operator, &mut values)?;
    }

    Ok(values.pop().ok_or(EvalError::EmptyExpression)?)
}

/// Performs one reduction step: pops the two topmost values, applies the
/// operator, and pushes the result back.
///
/// The first pop yields the right operand because it was pushed most
/// recently. A missing operand indicates a malformed expression, such as a
/// trailing operator.
fn reduce(operator: Operator, values: &mut Vec<f64>) -> EvalResult<()> {
    let right = values.pop()
                      .ok_or(EvalError::StackUnderflow { operator: operator.symbol() })?;
    let left = values.pop()
                     .ok_or(EvalError::StackUnderflow { operator: operator.symbol() })?;

    values.push(operator.apply(left, right)?);
    Ok(())
}
