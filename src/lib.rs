//! # intcalc
//!
//! intcalc evaluates single-line integer arithmetic expressions written with
//! `+`, `-`, `*` and `/`. Multiplication and division bind tighter than
//! addition and subtraction, and operators of equal precedence associate to
//! the left.
//!
//! The pipeline runs strictly forward: text → tokens → tree → integer.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{lexer::tokenize, parser::core::parse_tokens},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the closed `BinaryOperator` set.
/// The tree is built by the parser and walked by the evaluator; nodes carry
/// the byte offsets used in error reports.
pub mod ast;
/// Provides error types for lexing, parsing, and evaluation.
///
/// One enum per phase, plus a top-level [`error::Error`] that wraps whichever
/// phase failed. Every error carries the position it refers to where one
/// exists.
pub mod error;
/// The lexer, parser and evaluator.
///
/// Each phase depends only on the one before it and keeps no state between
/// calls.
pub mod interpreter;

/// Lexes and parses an expression without evaluating it.
///
/// # Errors
/// Returns [`Error::Lex`] on the first unrecognized character, or
/// [`Error::Parse`] if the tokens do not form exactly one expression.
///
/// # Examples
/// ```
/// let tree = intcalc::parse("3 * 5 + 2 * 10").unwrap();
/// assert_eq!(tree.to_string(), "((3 * 5) + (2 * 10))");
///
/// let tree = intcalc::parse("10 - 3 - 2").unwrap();
/// assert_eq!(tree.to_string(), "((10 - 3) - 2)");
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source).collect::<Result<Vec<_>, _>>()?;
    debug!("lexed {} tokens from {source:?}", tokens.len());

    Ok(parse_tokens(&tokens, source.len())?)
}

/// Evaluates an expression and returns its integer value.
///
/// Each call is self-contained: it owns its tokens, tree and operand stack,
/// so calls may run concurrently and evaluating the same input always yields
/// the same outcome.
///
/// # Errors
/// Returns an error describing the first failure: an unrecognized character,
/// a grammar violation, division by zero, or integer overflow.
///
/// # Examples
/// ```
/// use intcalc::{
///     error::{Error, RuntimeError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("3 * 5 + 2 * 10"), Ok(35));
/// assert_eq!(evaluate("7 / 2"), Ok(3));
///
/// let err = evaluate("5 / 0").unwrap_err();
/// assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { position: 2 }));
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let expr = parse(source)?;
    let value = expr.evaluate()?;
    debug!("{source:?} evaluated to {value}");

    Ok(value)
}
