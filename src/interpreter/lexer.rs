use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// Tokens borrow their text from the input; a number keeps the digits exactly
/// as written and is converted to an integer by the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    /// A maximal run of decimal digits, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Number(&'src str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{literal}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
        }
    }
}

/// A token paired with the byte offset of its first character.
pub type Spanned<'src> = (Token<'src>, usize);

/// Splits the input into tokens, lazily.
///
/// Whitespace between tokens is skipped. The iterator ends once the input is
/// consumed; it cannot be restarted, so a fresh one is needed per input.
/// An unrecognized character yields a [`LexError`]; the caller decides whether
/// to keep pulling tokens after that.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("12 +3").collect();
/// assert_eq!(tokens,
///            vec![Ok((Token::Number("12"), 0)), Ok((Token::Plus, 3)), Ok((Token::Number("3"), 4))]);
///
/// let err = tokenize("1 % 2").nth(1).unwrap().unwrap_err();
/// assert_eq!((err.character, err.position), ('%', 2));
/// ```
pub fn tokenize(source: &str) -> impl Iterator<Item = Result<Spanned<'_>, LexError>> {
    Token::lexer(source).spanned().map(move |(token, span)| match token {
                                      Ok(token) => Ok((token, span.start)),
                                      Err(()) => {
                                          let character = source.get(span.start..)
                                                                .and_then(|rest| rest.chars().next())
                                                                .unwrap_or(char::REPLACEMENT_CHARACTER);
                                          Err(LexError { character,
                                                         position: span.start })
                                      },
                                  })
}
