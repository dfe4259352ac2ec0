use std::fs::{self};

use intcalc::{
    error::{Error, LexError, ParseError, RuntimeError},
    evaluate, parse,
};
use walkdir::WalkDir;

#[test]
fn script_cases_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, case) in extract_cases(&content) {
            count += 1;
            let (source, expected) = case.rsplit_once("=>")
                                         .unwrap_or_else(|| panic!("{path:?}:{line_no}: missing '=>'"));
            let source = source.trim();
            let expected = expected.trim();
            let actual = describe(&evaluate(source));

            assert_eq!(actual, expected, "{path:?}:{line_no}: `{source}`");
        }
    }

    assert!(count > 0, "No cases found in tests/scripts");
}

/// Yields `(line number, case)` for every line that is not blank or a comment.
fn extract_cases(content: &str) -> Vec<(usize, &str)> {
    content.lines()
           .enumerate()
           .map(|(i, line)| (i + 1, line.trim()))
           .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
           .collect()
}

/// Renders an outcome the way script files spell it: the value, or `!Kind`.
fn describe(result: &Result<i64, Error>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(Error::Lex(_)) => "!Lex".to_string(),
        Err(Error::Parse(_)) => "!Parse".to_string(),
        Err(Error::Runtime(RuntimeError::DivisionByZero { .. })) => "!DivisionByZero".to_string(),
        Err(Error::Runtime(RuntimeError::Overflow { .. })) => "!Overflow".to_string(),
        Err(Error::Runtime(e)) => panic!("internal evaluator error: {e}"),
    }
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_of_multiplication_over_addition() {
    assert_value("3 * 5 + 2 * 10", 35);
    assert_value("2 + 3 * 4", 14);
    assert_value("20 - 12 / 4", 17);
    assert_value("1 + 2 * 3 - 8 / 2", 3);
}

#[test]
fn equal_precedence_associates_left() {
    assert_value("10 - 3 - 2", 5);
    assert_value("100 / 10 / 5", 2);
    assert_value("8 / 2 * 4", 16);
    assert_value("1 - 1 + 1", 1);
}

#[test]
fn division_truncates() {
    assert_value("7 / 2", 3);
    assert_value("1 / 3", 0);
    assert_value("9 / 3", 3);
}

#[test]
fn single_literal() {
    assert_value("42", 42);
    assert_value("0", 0);
    assert_value("007", 7);
    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn whitespace_is_optional_and_skipped() {
    assert_value("123+456", 579);
    assert_value("  \t12\n*\r2 ", 24);
}

#[test]
fn intermediate_results_may_be_negative() {
    assert_value("2 - 5", -3);
    assert_value("2 - 5 * 2 + 1", -7);
}

#[test]
fn tree_shape_follows_precedence() {
    let tree = parse("1 - 2 + 3 * 4 / 5").unwrap();
    assert_eq!(tree.to_string(), "((1 - 2) + ((3 * 4) / 5))");

    let tree = parse("42").unwrap();
    assert_eq!(tree.to_string(), "42");
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure("5 / 0");
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { position: 2 }));

    let err = assert_failure("1 + 6 / 0");
    assert_eq!(err.position(), Some(6));

    let err = assert_failure("6 / 0 * 2");
    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn overflow_is_error() {
    let err = assert_failure("9223372036854775807 + 1");
    assert_eq!(err,
               Error::Runtime(RuntimeError::Overflow { op:       intcalc::ast::BinaryOperator::Add,
                                                       position: 20, }));

    assert!(matches!(assert_failure("3037000500 * 3037000500"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("0 - 9223372036854775807 - 2"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn literal_too_large_is_error() {
    let err = assert_failure("1 + 9223372036854775808");
    assert_eq!(err,
               Error::Parse(ParseError::LiteralTooLarge { literal:  "9223372036854775808".to_string(),
                                                          position: 4, }));
}

#[test]
fn unrecognized_character_is_lex_error() {
    let err = assert_failure("3 $ 4");
    assert_eq!(err,
               Error::Lex(LexError { character: '$',
                                     position:  2, }));
    assert_eq!(err.to_string(), "Error at position 2: Unrecognized character '$'.");

    assert!(matches!(assert_failure("2 ^ 3"), Error::Lex(_)));
    assert!(matches!(assert_failure("1.5 + 1"), Error::Lex(_)));
    assert!(matches!(assert_failure("x + 1"), Error::Lex(_)));
    assert!(matches!(assert_failure("4 × 2"), Error::Lex(LexError { character: '×', .. })));
}

#[test]
fn parentheses_are_not_supported() {
    let err = assert_failure("(1 + 2) * 3");
    assert_eq!(err,
               Error::Lex(LexError { character: '(',
                                     position:  0, }));
}

#[test]
fn missing_operand_is_parse_error() {
    let err = assert_failure("3 + ");
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedEndOfInput { expected: "a number",
                                                               position: 4, }));

    let err = assert_failure("3 + * 4");
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedToken { expected: "a number",
                                                          found:    "*".to_string(),
                                                          position: 4, }));

    assert!(matches!(assert_failure(""),
                     Error::Parse(ParseError::UnexpectedEndOfInput { position: 0, .. })));
    assert!(matches!(assert_failure("   "), Error::Parse(_)));
    assert!(matches!(assert_failure("* 2"), Error::Parse(_)));
}

#[test]
fn unary_minus_is_parse_error() {
    let err = assert_failure("-7 / 2");
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedToken { expected: "a number",
                                                          found:    "-".to_string(),
                                                          position: 0, }));
    assert!(matches!(assert_failure("2 * -3"), Error::Parse(_)));
}

#[test]
fn missing_operator_is_parse_error() {
    let err = assert_failure("3 4");
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedTrailingTokens { found:    "4".to_string(),
                                                                   position: 2, }));
    assert_eq!(err.to_string(),
               "Error at position 2: Extra tokens after expression, starting at '4'.");
}

#[test]
fn lex_error_wins_over_later_parse_error() {
    assert!(matches!(assert_failure("3 + + $"), Error::Lex(_)));
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let inputs = ["3 * 5 + 2 * 10", "5 / 0", "3 + ", "3 $ 4"];
    for input in inputs {
        let first = evaluate(input);
        for _ in 0..5 {
            assert_eq!(evaluate(input), first);
        }
    }
}

#[test]
fn concurrent_evaluations_are_independent() {
    let inputs = ["3 * 5 + 2 * 10", "10 - 3 - 2", "7 / 2", "42", "5 / 0"];
    let expected: Vec<_> = inputs.iter().map(|input| evaluate(input)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| {
                                        scope.spawn(|| {
                                                 inputs.iter()
                                                       .map(|input| evaluate(input))
                                                       .collect::<Vec<_>>()
                                             })
                                    })
                                    .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn long_chains_evaluate() {
    let sum = vec!["1"; 2_000].join(" + ");
    assert_value(&sum, 2_000);

    let mixed = vec!["6 * 2 / 3"; 500].join(" - ");
    assert_value(&mixed, -(4 * 498));
}

#[test]
fn error_exposes_phase_error_as_source() {
    use std::error::Error as _;

    let err = assert_failure("5 / 0");
    let source = err.source().expect("phase error");
    assert_eq!(source.to_string(), "Error at position 2: Division by zero.");
}
