use crate::interpreter::evaluator::core::{EvalResult, Evaluator};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is built by the parser so that multiplication and division nodes
/// always sit below addition and subtraction nodes, and chains of operators of
/// equal precedence lean to the left. Every `BinaryOp` owns exactly two fully
/// formed operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, e.g. `42`.
    Literal {
        /// The literal value.
        value:    i64,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// A binary operation, e.g. `a + b`.
    BinaryOp {
        /// Left operand (the one written first).
        left:     Box<Expr>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Expr>,
        /// Byte offset of the operator symbol in the input.
        position: usize,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: i64, position: usize) -> Self {
        Self::Literal { value, position }
    }

    /// Builds a binary node from its operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Byte offset of the literal, or of the operator for a binary node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Evaluates the tree to a single integer.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`](crate::error::RuntimeError) on division by
    /// zero or overflow.
    ///
    /// # Example
    /// ```
    /// use intcalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::literal(6, 0), BinaryOperator::Mul, Expr::literal(7, 4), 2);
    /// assert_eq!(expr.evaluate(), Ok(42));
    /// ```
    pub fn evaluate(&self) -> EvalResult<i64> {
        Evaluator::new().eval(self)
    }
}

impl std::fmt::Display for Expr {
    /// Renders the tree fully parenthesized, e.g. `((3 * 5) + (2 * 10))`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
///
/// The set is closed: the evaluator matches it exhaustively, so adding an
/// operator is a compile-time checked change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Returns `true` for `*` and `/`, which bind tighter than `+` and `-`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
