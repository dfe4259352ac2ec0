#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An input character that is not whitespace, a digit or one of `+ - * /`.
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the input.
    pub position:  usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error at position {}: Unrecognized character '{}'.",
               self.position,
               self.character.escape_debug())
    }
}

impl std::error::Error for LexError {}
