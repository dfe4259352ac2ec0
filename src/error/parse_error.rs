#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still required.
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: &'static str,
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A complete expression was followed by extra tokens.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    String,
        /// Byte offset of the first extra token.
        position: usize,
    },
    /// A number literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the input where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected {expected}, found '{found}'."),

            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Error at position {position}: Expected {expected}, found end of input."),

            Self::UnexpectedTrailingTokens { found, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression, starting at '{found}'."),

            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
