use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each new operand
/// takes the tree built so far as its left sibling, so `10 - 3 - 2` becomes
/// `(10 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `end`: Byte offset of the end of input.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, 'src: 'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token<'src>, usize)>
{
    let mut left = parse_multiplicative(tokens, end)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && !op.is_multiplicative()
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens, end)?;
            left = Expr::binary(left, op, right, position);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/` over number literals.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `end`: Byte offset of the end of input.
///
/// # Returns
/// A binary expression tree combining literals.
pub fn parse_multiplicative<'a, 'src: 'a, I>(tokens: &mut Peekable<I>,
                                             end: usize)
                                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token<'src>, usize)>
{
    let mut left = parse_primary(tokens, end)?;
    while let Some((token, position)) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token)
           && op.is_multiplicative()
        {
            let position = *position;
            tokens.next();
            let right = parse_primary(tokens, end)?;
            left = Expr::binary(left, op, right, position);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for number tokens.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Number("7")), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Number(_) => None,
    }
}
