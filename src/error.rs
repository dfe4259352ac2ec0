/// Lexing errors.
///
/// Raised when the input contains a character that cannot start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from tokens: missing operands, unexpected trailing input and literals that
/// do not fit the integer domain.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, overflow, or an internal stack inconsistency.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced by [`crate::evaluate`] or [`crate::parse`].
///
/// Each variant wraps the error of the phase that failed. Errors are never
/// recovered internally; the first one encountered is returned.
pub enum Error {
    /// The lexer met an unrecognized character.
    Lex(LexError),
    /// The token sequence does not match the grammar.
    Parse(ParseError),
    /// Evaluation of a well-formed tree failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the byte offset in the input the error refers to, if any.
    ///
    /// # Example
    /// ```
    /// let err = intcalc::evaluate("12 $ 3").unwrap_err();
    /// assert_eq!(err.position(), Some(3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position),
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
