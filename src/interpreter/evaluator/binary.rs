use log::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult, OverflowPolicy},
};

impl BinaryOperator {
    /// Combines two evaluated operands with checked 64-bit arithmetic.
    ///
    /// `Div` truncates toward zero and `Rem` takes the sign of the dividend.
    /// A zero divisor yields [`RuntimeError::DivisionByZero`]; any result
    /// outside the `i64` range, including `i64::MIN / -1`, yields
    /// [`RuntimeError::Overflow`].
    ///
    /// # Parameters
    /// - `n1`: Value of the left operand.
    /// - `n2`: Value of the right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use calculator::{ast::BinaryOperator, error::RuntimeError};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2, 1), Ok(-3));
    /// assert_eq!(BinaryOperator::Rem.apply(-7, 2, 1), Ok(-1));
    /// assert_eq!(BinaryOperator::Div.apply(5, 0, 1),
    ///            Err(RuntimeError::DivisionByZero { line: 1 }));
    /// ```
    pub fn apply(self, n1: i64, n2: i64, line: usize) -> EvalResult<i64> {
        self.apply_with(n1, n2, line, OverflowPolicy::Checked)
    }

    /// Combines two evaluated operands under the given overflow policy.
    ///
    /// Division by zero is an error under every policy.
    pub fn apply_with(self,
                      n1: i64,
                      n2: i64,
                      line: usize,
                      policy: OverflowPolicy)
                      -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Rem, Sub};

        if matches!(self, Div | Rem) && n2 == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let result = match policy {
            OverflowPolicy::Checked => match self {
                Add => n1.checked_add(n2),
                Sub => n1.checked_sub(n2),
                Mul => n1.checked_mul(n2),
                Div => n1.checked_div(n2),
                Rem => n1.checked_rem(n2),
            }.ok_or(RuntimeError::Overflow { line })?,
            OverflowPolicy::Wrapping => match self {
                Add => n1.wrapping_add(n2),
                Sub => n1.wrapping_sub(n2),
                Mul => n1.wrapping_mul(n2),
                Div => n1.wrapping_div(n2),
                Rem => n1.wrapping_rem(n2),
            },
        };

        trace!("{n1} {self} {n2} = {result}");
        Ok(result)
    }
}

impl Context {
    /// Evaluates a binary operation between two values using the context's
    /// overflow policy.
    ///
    /// # Example
    /// ```
    /// use calculator::{
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::{Context, OverflowPolicy},
    /// };
    ///
    /// let context = Context::new().with_overflow(OverflowPolicy::Wrapping);
    /// let result = context.eval_binary(BinaryOperator::Add, i64::MAX, 1, 1);
    /// assert_eq!(result, Ok(i64::MIN));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       n1: i64,
                       n2: i64,
                       line: usize)
                       -> EvalResult<i64> {
        op.apply_with(n1, n2, line, self.overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_integer_semantics() {
        let pairs = [(3, 4), (10, -2), (-9, 4), (0, 7), (1_000_000, 3)];
        for (a, b) in pairs {
            assert_eq!(BinaryOperator::Add.apply(a, b, 0), Ok(a + b));
            assert_eq!(BinaryOperator::Sub.apply(a, b, 0), Ok(a - b));
            assert_eq!(BinaryOperator::Mul.apply(a, b, 0), Ok(a * b));
            assert_eq!(BinaryOperator::Div.apply(a, b, 0), Ok(a / b));
            assert_eq!(BinaryOperator::Rem.apply(a, b, 0), Ok(a % b));
        }
    }

    #[test]
    fn zero_divisor_is_an_error_under_every_policy() {
        for policy in [OverflowPolicy::Checked, OverflowPolicy::Wrapping] {
            for op in [BinaryOperator::Div, BinaryOperator::Rem] {
                assert_eq!(op.apply_with(5, 0, 3, policy),
                           Err(RuntimeError::DivisionByZero { line: 3 }));
            }
        }
    }

    #[test]
    fn checked_overflow_is_an_error() {
        let overflow = Err(RuntimeError::Overflow { line: 1 });
        assert_eq!(BinaryOperator::Add.apply(i64::MAX, 1, 1), overflow);
        assert_eq!(BinaryOperator::Sub.apply(i64::MIN, 1, 1), overflow);
        assert_eq!(BinaryOperator::Mul.apply(i64::MAX, 2, 1), overflow);
        assert_eq!(BinaryOperator::Div.apply(i64::MIN, -1, 1), overflow);
        assert_eq!(BinaryOperator::Rem.apply(i64::MIN, -1, 1), overflow);
    }

    #[test]
    fn wrapping_policy_wraps() {
        let wrap = OverflowPolicy::Wrapping;
        assert_eq!(BinaryOperator::Add.apply_with(i64::MAX, 1, 1, wrap), Ok(i64::MIN));
        assert_eq!(BinaryOperator::Mul.apply_with(i64::MAX, 2, 1, wrap), Ok(-2));
        assert_eq!(BinaryOperator::Div.apply_with(i64::MIN, -1, 1, wrap), Ok(i64::MIN));
        assert_eq!(BinaryOperator::Rem.apply_with(i64::MIN, -1, 1, wrap), Ok(0));
    }
}
