use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// Tokens after the expression are left in the iterator; use [`parse_tokens`]
/// to require that the whole input is consumed.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `end`: Byte offset of the end of input, reported when an operand is
///   missing at the very end.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, 'src: 'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token<'src>, usize)>
{
    parse_additive(tokens, end)
}

/// Parses a complete token sequence into one expression tree.
///
/// The sequence must hold exactly one expression: any token left over after
/// it is reported as [`ParseError::UnexpectedTrailingTokens`].
///
/// # Parameters
/// - `tokens`: All tokens of the input, in order.
/// - `end`: Byte offset of the end of input (the input length).
///
/// # Errors
/// - `UnexpectedEndOfInput` if the tokens run out where a number is required.
/// - `UnexpectedToken` if an operator appears where a number is required.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - `LiteralTooLarge` if a literal does not fit in an `i64`.
///
/// # Example
/// ```
/// use intcalc::interpreter::{lexer::Token, parser::core::parse_tokens};
///
/// let tokens = [(Token::Number("2"), 0), (Token::Star, 2), (Token::Number("21"), 4)];
/// let expr = parse_tokens(&tokens, 6).unwrap();
/// assert_eq!(expr.to_string(), "(2 * 21)");
/// ```
pub fn parse_tokens(tokens: &[Spanned<'_>], end: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, end)?;

    match iter.next() {
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { found:    token.to_string(),
                                                       position: *position, })
        },
        None => Ok(expr),
    }
}
