use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// The result of an operation does not fit in a 64-bit signed integer.
    Overflow {
        /// The operator that overflowed.
        op:       BinaryOperator,
        /// Byte offset of the operator.
        position: usize,
    },
    /// An operator was applied with fewer than two operands on the stack.
    ///
    /// Never produced for a tree built by the parser.
    StackUnderflow {
        /// Byte offset of the operator being applied.
        position: usize,
    },
    /// The evaluation stack did not hold exactly one value when the walk
    /// finished.
    ///
    /// Never produced for a tree built by the parser.
    UnbalancedStack {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

impl RuntimeError {
    /// Byte offset of the operator that failed, if the error has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::DivisionByZero { position }
            | Self::Overflow { position, .. }
            | Self::StackUnderflow { position } => Some(*position),
            Self::UnbalancedStack { .. } => None,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { op, position } => write!(f,
                                                      "Error at position {position}: Integer overflow while computing '{op}'."),
            Self::StackUnderflow { position } => write!(f,
                                                        "Error at position {position}: Evaluation stack underflow."),
            Self::UnbalancedStack { remaining } => write!(f,
                                                          "Error: Evaluation finished with {remaining} values on the stack instead of one."),
        }
    }
}

impl std::error::Error for RuntimeError {}
