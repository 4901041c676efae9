use tally::{
    error::{CalcError, EvalError, LexError},
    evaluate_line,
    interpreter::{evaluator::evaluate, lexer::Tokenizer},
};

fn assert_evaluates(expression: &str, expected: f64) {
    match evaluate_line(expression) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-12,
                    "\"{expression}\" evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("\"{expression}\" failed but {expected} was expected: {e}"),
    }
}

fn assert_fails(expression: &str) -> CalcError {
    match evaluate_line(expression) {
        Ok(value) => panic!("\"{expression}\" evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn single_literals() {
    assert_evaluates("42", 42.0);
    assert_evaluates("-3.5", -3.5);
    assert_evaluates("+7", 7.0);
    assert_evaluates(".5", 0.5);
    assert_evaluates("5.", 5.0);
}

#[test]
fn precedence_is_respected() {
    assert_evaluates("2+3*4", 14.0);
    assert_evaluates("2*3+4", 10.0);
    assert_evaluates("1+2*3-4", 3.0);
    assert_evaluates("10/2+3*4", 17.0);
}

#[test]
fn equal_precedence_associates_left() {
    assert_evaluates("8-3-2", 3.0);
    assert_evaluates("8/4/2", 1.0);
    assert_evaluates("10-2+3", 11.0);
    assert_evaluates("2*6/4", 3.0);
}

#[test]
fn deferred_low_precedence_operators_still_associate_left() {
    // The subtraction stacked under the multiplication must be applied
    // before the second subtraction: (8 - 2*3) - 1, not 8 - (2*3 - 1).
    assert_evaluates("8-2*3-1", 1.0);
    assert_evaluates("1-2*3+4", -1.0);
}

#[test]
fn signs_are_recognized_only_in_sign_position() {
    assert_evaluates("-5+3", -2.0);
    assert_evaluates("3+-5", -2.0);
    assert_evaluates("3*-5", -15.0);
    assert_evaluates("3/-2", -1.5);
    // An operator right after another operator opens sign position again.
    assert_evaluates("3*+5", 15.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates(" 3  +  4 ", 7.0);
    assert_evaluates("3+4", 7.0);
    assert_evaluates("\t2 * 3\t", 6.0);
    // Whitespace between digits does not split a literal.
    assert_evaluates("1 2", 12.0);
}

#[test]
fn division_by_zero_is_an_error() {
    let error = assert_fails("4/0");
    assert_eq!(error, CalcError::Eval(EvalError::DivisionByZero));

    assert_eq!(assert_fails("1/0.0"),
               CalcError::Eval(EvalError::DivisionByZero));

    // Small but non-zero divisors are allowed.
    assert_evaluates("1/0.5", 2.0);
}

#[test]
fn invalid_characters_are_rejected() {
    assert_eq!(assert_fails("2^3"),
               CalcError::Lex(LexError::InvalidCharacter { ch: '^', position: 1 }));
    assert_eq!(assert_fails("a+1"),
               CalcError::Lex(LexError::InvalidCharacter { ch: 'a', position: 0 }));
    assert_eq!(assert_fails("(1+2)"),
               CalcError::Lex(LexError::InvalidCharacter { ch: '(', position: 0 }));
}

#[test]
fn multiplicative_operators_cannot_be_signs() {
    assert_eq!(assert_fails("*3"),
               CalcError::Lex(LexError::InvalidSign { ch: '*', position: 0 }));
    assert_eq!(assert_fails("3+/2"),
               CalcError::Lex(LexError::InvalidSign { ch: '/', position: 2 }));
}

#[test]
fn malformed_literals_are_rejected() {
    assert_eq!(assert_fails("1.2.3"),
               CalcError::Eval(EvalError::NumberFormat { literal: "1.2.3".to_string() }));
    // A trailing '+' in sign position forms a literal with no digits.
    assert_eq!(assert_fails("3++"),
               CalcError::Eval(EvalError::NumberFormat { literal: "+".to_string() }));
}

#[test]
fn incomplete_expressions_underflow() {
    assert_eq!(assert_fails("2*"),
               CalcError::Eval(EvalError::StackUnderflow { operator: '*' }));
    assert_eq!(assert_fails("2+3-"),
               CalcError::Eval(EvalError::StackUnderflow { operator: '-' }));
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(assert_fails(""), CalcError::Eval(EvalError::EmptyExpression));
    assert_eq!(assert_fails("   "),
               CalcError::Eval(EvalError::EmptyExpression));
}

#[test]
fn failures_do_not_leak_into_later_evaluations() {
    let mut tokenizer = Tokenizer::new();

    tokenizer.set_expression("3++");
    assert!(evaluate(&mut tokenizer).is_err());

    tokenizer.set_expression("2+2");
    assert_eq!(evaluate(&mut tokenizer).unwrap(), 4.0);
}

#[test]
fn evaluation_is_idempotent() {
    let expression = "2.5*4-3/2";
    let first = evaluate_line(expression).unwrap();

    for _ in 0..3 {
        assert_eq!(evaluate_line(expression).unwrap(), first);
    }
}

#[test]
fn tokens_reconstruct_the_input_without_whitespace() {
    for expression in ["-1.5*3+ 2/ -4", "2+3*4", " 8 - 3 - 2 ", "3*+5"] {
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_expression(expression);

        let mut reconstructed = String::new();
        while let Some(token) = tokenizer.next_token().unwrap() {
            reconstructed.push_str(&token.to_string());
        }

        let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(reconstructed, stripped);
    }
}
