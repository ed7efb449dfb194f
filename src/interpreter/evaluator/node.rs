use crate::{
    ast::{BinaryNode, Expr},
    interpreter::evaluator::core::EvalResult,
};

/// Anything that evaluates to an integer.
///
/// `evaluate` takes no input: every node carries all of its state. It never
/// mutates the node, so evaluating the same tree twice yields the same
/// result. The only failures are arithmetic ones, reported as
/// [`RuntimeError`](crate::error::RuntimeError) and propagated unchanged to the
/// caller of the root.
///
/// ## Example
/// ```
/// use calculator::{ast::Expr, interpreter::evaluator::node::Node};
///
/// let expr = Expr::add(Expr::literal(3), Expr::literal(4));
/// assert_eq!(expr.evaluate().unwrap(), 7);
/// ```
pub trait Node {
    /// Computes the integer this node denotes.
    fn evaluate(&self) -> EvalResult<i64>;
}

/// A bare integer is a literal leaf.
impl Node for i64 {
    fn evaluate(&self) -> EvalResult<i64> {
        Ok(*self)
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn evaluate(&self) -> EvalResult<i64> {
        (**self).evaluate()
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn evaluate(&self) -> EvalResult<i64> {
        (**self).evaluate()
    }
}

/// Evaluates `left`, then `right`, then combines the two results with the
/// node's operator.
///
/// The left-before-right order is part of the contract. If the left operand
/// fails, the right operand is not evaluated.
///
/// ## Example
/// ```
/// use calculator::{
///     ast::{BinaryNode, BinaryOperator},
///     error::RuntimeError,
///     interpreter::evaluator::node::Node,
/// };
///
/// let node = BinaryNode::new(BinaryOperator::Sub, 10_i64, 2_i64);
/// assert_eq!(node.evaluate().unwrap(), 8);
///
/// let node = BinaryNode::new(BinaryOperator::Div, 5_i64, 0_i64);
/// assert_eq!(node.evaluate(), Err(RuntimeError::DivisionByZero { line: 0 }));
/// ```
impl<L: Node, R: Node> Node for BinaryNode<L, R> {
    fn evaluate(&self) -> EvalResult<i64> {
        let n1 = self.left().evaluate()?;
        let n2 = self.right().evaluate()?;
        self.op().apply(n1, n2, self.line())
    }
}

impl Node for Expr {
    fn evaluate(&self) -> EvalResult<i64> {
        match self {
            Self::Literal { value, .. } => Ok(*value),
            Self::Binary(node) => node.evaluate(),
        }
    }
}
