use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// One unit of pending work in the post-order walk.
enum Step<'e> {
    /// Evaluate a subtree, leaving its value on the stack.
    Visit(&'e Expr),
    /// Both operands are on the stack; apply the operator.
    Apply {
        op:       BinaryOperator,
        position: usize,
    },
}

/// Evaluates expression trees with an explicit operand stack.
///
/// Literals are pushed as they are visited. An operator is applied only after
/// both of its operands have been visited, left first, so the operand written
/// first sits deeper in the stack: the top of the stack is the right operand.
///
/// The walk keeps its own work list instead of recursing, so the depth of the
/// tree does not grow the call stack.
///
/// ## Usage
///
/// Most callers go through [`crate::evaluate`] or [`Expr::evaluate`]. The
/// stack operations are public so the evaluator can also be driven directly,
/// one instruction at a time.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<i64>,
}

impl Evaluator {
    /// Creates an evaluator with an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Evaluates a tree and returns its value.
    ///
    /// The stack is cleared first, so values left over from earlier direct
    /// use do not leak into the result.
    ///
    /// # Errors
    /// - `DivisionByZero` if a divisor evaluates to zero.
    /// - `Overflow` if an intermediate result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::{interpreter::evaluator::core::Evaluator, parse};
    ///
    /// let expr = parse("10 - 3 - 2").unwrap();
    /// assert_eq!(Evaluator::new().eval(&expr), Ok(5));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i64> {
        self.stack.clear();
        let mut pending = vec![Step::Visit(expr)];

        while let Some(step) = pending.pop() {
            match step {
                Step::Visit(Expr::Literal { value, .. }) => self.push(*value),
                Step::Visit(Expr::BinaryOp { left,
                                             op,
                                             right,
                                             position, }) => {
                    // Popped in reverse: left subtree, right subtree, operator.
                    pending.push(Step::Apply { op:       *op,
                                               position: *position, });
                    pending.push(Step::Visit(right));
                    pending.push(Step::Visit(left));
                },
                Step::Apply { op, position } => self.apply(op, position)?,
            }
        }

        self.finish()
    }

    /// Pushes an operand.
    pub fn push(&mut self, value: i64) {
        trace!("push {value}");
        self.stack.push(value);
    }

    /// Pops the two topmost values, applies `op` and pushes the result.
    ///
    /// The top of the stack is the right operand.
    ///
    /// # Errors
    /// - `StackUnderflow` if fewer than two values are on the stack. Nothing
    ///   is popped in that case.
    /// - Any error of [`Evaluator::eval_binary`]; the operands stay on the
    ///   stack.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let mut evaluator = Evaluator::new();
    /// evaluator.push(7);
    /// evaluator.push(2);
    /// evaluator.apply(BinaryOperator::Sub, 0).unwrap();
    /// assert_eq!(evaluator.finish(), Ok(5));
    /// ```
    pub fn apply(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        let len = self.stack.len();
        if len < 2 {
            return Err(RuntimeError::StackUnderflow { position });
        }

        let right = self.stack[len - 1];
        let left = self.stack[len - 2];
        let result = Self::eval_binary(op, left, right, position)?;
        trace!("apply {left} {op} {right} = {result}");

        self.stack.truncate(len - 2);
        self.stack.push(result);
        Ok(())
    }

    /// Takes the final result off the stack.
    ///
    /// # Errors
    /// `UnbalancedStack` unless exactly one value is on the stack.
    pub fn finish(&mut self) -> EvalResult<i64> {
        match self.stack.as_slice() {
            [result] => {
                let result = *result;
                self.stack.clear();
                Ok(result)
            },
            rest => Err(RuntimeError::UnbalancedStack { remaining: rest.len() }),
        }
    }

    /// Number of values currently on the stack.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.stack.len()
    }
}
