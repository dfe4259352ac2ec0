/// Core evaluation logic.
///
/// Contains the `Evaluator` with its operand stack and the post-order
/// walk over the tree.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators with checked integer arithmetic.
pub mod binary;
