use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates one arithmetic operation on two integers.
    ///
    /// Division truncates toward zero. Division by zero is checked before the
    /// division itself, so it is never reported as an overflow.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `Div` and `right` is zero.
    /// - `Overflow` if the result does not fit in an `i64`, including
    ///   `i64::MIN / -1`.
    ///
    /// # Example
    /// ```
    /// use intcalc::{
    ///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, -7, 2, 0), Ok(-3));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1, 0, 2),
    ///            Err(RuntimeError::DivisionByZero { position: 2 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: usize)
                       -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { op, position })
    }
}
