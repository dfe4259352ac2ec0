use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

const EXPECTED_NUMBER: &str = "a number";

/// Parses a primary expression: a single number literal.
///
/// Grammar: `primary := NUMBER`
///
/// # Parameters
/// - `tokens`: Token iterator positioned where an operand is required.
/// - `end`: Byte offset of the end of input.
///
/// # Errors
/// - `UnexpectedToken` if the next token is an operator.
/// - `UnexpectedEndOfInput` if there are no tokens left.
/// - `LiteralTooLarge` if the literal does not fit in an `i64`.
pub(crate) fn parse_primary<'a, 'src: 'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token<'src>, usize)>
{
    match tokens.next() {
        Some((Token::Number(literal), position)) => parse_literal(literal, *position),
        Some((token, position)) => Err(ParseError::UnexpectedToken { expected: EXPECTED_NUMBER,
                                                                     found:    token.to_string(),
                                                                     position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: EXPECTED_NUMBER,
                                                       position: end, }),
    }
}

/// Converts the digits of a number token into a literal node.
///
/// The lexer only produces ASCII digit runs, so the conversion can fail only
/// when the value exceeds `i64::MAX`.
///
/// # Example
/// ```
/// use intcalc::{ast::Expr, error::ParseError, interpreter::parser::primary::parse_literal};
///
/// assert_eq!(parse_literal("007", 3), Ok(Expr::literal(7, 3)));
/// assert!(matches!(parse_literal("9223372036854775808", 0),
///                  Err(ParseError::LiteralTooLarge { .. })));
/// ```
pub fn parse_literal(literal: &str, position: usize) -> ParseResult<Expr> {
    literal.parse()
           .map(|value| Expr::literal(value, position))
           .map_err(|_| ParseError::LiteralTooLarge { literal: literal.to_string(),
                                                      position })
}
