/// Entry points and the full-consumption check.
pub mod core;

/// Left-associative folds over the two operator precedence levels.
pub mod binary;

/// Number literals, the operands of every operator.
pub mod primary;
