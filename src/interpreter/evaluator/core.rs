use log::debug;

use crate::{
    ast::{BinaryNode, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What happens when an operation leaves the 64-bit integer range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Report [`RuntimeError::Overflow`].
    #[default]
    Checked,
    /// Wrap around in two's complement.
    Wrapping,
}

/// Stores the evaluation settings.
///
/// ## Usage
///
/// `Context` is created once and reused for every tree of a program. It holds
/// no state that changes during evaluation, so one context may evaluate many
/// trees, repeatedly, from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Behaviour on integer overflow.
    pub overflow: OverflowPolicy,
}

/// One pending step of the post-order walk in [`Context::eval`].
enum Step<'a> {
    /// Evaluate a subtree into the result register.
    Visit(&'a Expr),
    /// The left operand is in the register; evaluate the right one next.
    Right(&'a BinaryNode<Box<Expr>, Box<Expr>>),
    /// Both operands are known; the right one is in the register.
    Combine {
        node: &'a BinaryNode<Box<Expr>, Box<Expr>>,
        left: i64,
    },
}

impl Context {
    /// Creates a context with checked overflow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the overflow policy.
    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// This is the main entry point for expression evaluation. It walks the
    /// tree in post order with an explicit work stack, so arbitrarily deep
    /// trees do not exhaust the call stack. Operands are evaluated left before
    /// right, exactly like [`Node::evaluate`](super::node::Node::evaluate), and
    /// the first error aborts the walk.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The integer the tree denotes.
    ///
    /// # Example
    /// ```
    /// use calculator::{ast::Expr, error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    ///
    /// let expr = Expr::mul(Expr::sub(Expr::literal(10), Expr::literal(2)), Expr::literal(3));
    /// assert_eq!(context.eval(&expr), Ok(24));
    ///
    /// let expr = Expr::div(Expr::literal(8), Expr::sub(Expr::literal(4), Expr::literal(4)));
    /// assert_eq!(context.eval(&expr), Err(RuntimeError::DivisionByZero { line: 0 }));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        let mut steps = vec![Step::Visit(expr)];
        let mut value = 0;

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Literal { value: literal, .. }) => value = *literal,
                Step::Visit(Expr::Binary(node)) => {
                    steps.push(Step::Right(node));
                    steps.push(Step::Visit(node.left()));
                },
                Step::Right(node) => {
                    steps.push(Step::Combine { node,
                                               left: value });
                    steps.push(Step::Visit(node.right()));
                },
                Step::Combine { node, left } => {
                    value = self.eval_binary(node.op(), left, value, node.line())?;
                },
            }
        }

        debug!("{expr} => {value}");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::node::Node;

    fn sample_trees() -> Vec<Expr> {
        vec![Expr::literal(42),
             Expr::add(Expr::literal(3), Expr::literal(4)),
             Expr::mul(Expr::sub(Expr::literal(10), Expr::literal(2)), Expr::literal(3)),
             Expr::mul(Expr::add(Expr::literal(1), Expr::literal(2)),
                       Expr::add(Expr::literal(3), Expr::literal(4))),
             Expr::rem(Expr::literal(-17), Expr::div(Expr::literal(20), Expr::literal(4))),
             Expr::div(Expr::literal(8), Expr::sub(Expr::literal(4), Expr::literal(4))),
             Expr::add(Expr::div(Expr::literal(1), Expr::literal(0)),
                       Expr::mul(Expr::literal(i64::MAX), Expr::literal(2))),]
    }

    #[test]
    fn matches_recursive_evaluation() {
        let context = Context::new();
        for expr in sample_trees() {
            assert_eq!(context.eval(&expr), expr.evaluate(), "tree {expr}");
        }
    }

    #[test]
    fn first_error_wins() {
        let expr = Expr::add(Expr::div(Expr::literal(1), Expr::literal(0)),
                             Expr::mul(Expr::literal(i64::MAX), Expr::literal(2)));
        assert_eq!(Context::new().eval(&expr),
                   Err(RuntimeError::DivisionByZero { line: 0 }));
    }

    #[test]
    fn deep_trees_do_not_overflow_the_stack() {
        let mut expr = Expr::literal(0);
        for _ in 0..200_000 {
            expr = Expr::add(expr, Expr::literal(1));
        }
        assert_eq!(Context::new().eval(&expr), Ok(200_000));

        let mut expr = Expr::literal(0);
        for _ in 0..200_000 {
            expr = Expr::sub(Expr::literal(1), expr);
        }
        assert_eq!(Context::new().eval(&expr), Ok(0));
    }

    #[test]
    fn right_operand_sees_its_own_left() {
        // (20 - (6 - (4 - 1))) keeps each pending left value apart.
        let expr = Expr::sub(Expr::literal(20),
                             Expr::sub(Expr::literal(6), Expr::sub(Expr::literal(4), Expr::literal(1))));
        assert_eq!(Context::new().eval(&expr), Ok(17));
    }

    #[test]
    fn wrapping_context_wraps() {
        let expr = Expr::add(Expr::literal(i64::MAX), Expr::literal(1));
        assert_eq!(Context::new().eval(&expr), Err(RuntimeError::Overflow { line: 0 }));
        assert_eq!(Context::new().with_overflow(OverflowPolicy::Wrapping).eval(&expr),
                   Ok(i64::MIN));
    }
}
