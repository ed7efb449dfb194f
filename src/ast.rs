use std::mem;

/// An expression tree.
///
/// `Expr` is either a literal leaf or a binary operator node owning its two
/// operands. Ownership is strictly top-down: each child is boxed and belongs to
/// exactly one parent, so a tree can never contain sharing or cycles, and
/// dropping the root releases the whole tree.
///
/// Trees are immutable once built. Evaluation (see
/// [`Node`](crate::interpreter::evaluator::node::Node)) never changes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary(BinaryNode<Box<Self>, Box<Self>>),
}

impl Expr {
    /// Creates a literal leaf that does not belong to any source line.
    ///
    /// ## Example
    /// ```
    /// use calculator::ast::Expr;
    ///
    /// assert_eq!(Expr::literal(7), Expr::Literal { value: 7, line: 0 });
    /// ```
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value, line: 0 }
    }

    /// Creates a binary node that owns `left` and `right`.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary(BinaryNode::new(op, Box::new(left), Box::new(right)))
    }

    /// `left + right`
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Add, left, right)
    }

    /// `left - right`
    #[must_use]
    pub fn sub(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Sub, left, right)
    }

    /// `left * right`
    #[must_use]
    pub fn mul(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Mul, left, right)
    }

    /// `left / right`
    #[must_use]
    pub fn div(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Div, left, right)
    }

    /// `left % right`
    #[must_use]
    pub fn rem(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Rem, left, right)
    }

    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use calculator::ast::Expr;
    ///
    /// let expr = Expr::Literal { value: 1,
    ///                            line:  5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. } => *line,
            Self::Binary(node) => node.line(),
        }
    }
}

/// A node with exactly two operands and one combining operator.
///
/// The operands are owned by value. A `BinaryNode` can therefore only be built
/// from two fully formed children; a missing child is unrepresentable. The
/// children may be any type that can be evaluated, which lets callers plug in
/// their own leaves next to [`Expr`].
///
/// ## Example
/// ```
/// use calculator::ast::{BinaryNode, BinaryOperator};
///
/// let node = BinaryNode::new(BinaryOperator::Mul, 6_i64, 7_i64);
/// assert_eq!(node.op(), BinaryOperator::Mul);
/// assert_eq!(*node.left(), 6);
/// assert_eq!(*node.right(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<L, R> {
    op:    BinaryOperator,
    left:  L,
    right: R,
    line:  usize,
}

impl<L, R> BinaryNode<L, R> {
    /// Creates a node combining `left` and `right` with `op`.
    #[must_use]
    pub const fn new(op: BinaryOperator, left: L, right: R) -> Self {
        Self { op,
               left,
               right,
               line: 0 }
    }

    /// Attaches the source line of the operator token.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// The combining operator.
    #[must_use]
    pub const fn op(&self) -> BinaryOperator {
        self.op
    }

    /// The left operand.
    #[must_use]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// The right operand.
    #[must_use]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Line number of the operator in the source code.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

/// Releases the tree with an explicit work list, so dropping a deep chain
/// such as `1 + 1 + … + 1` never recurses more than one level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_binary_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_binary_children(&mut expr, &mut pending);
        }
    }
}

/// Moves every binary child of `expr` onto `pending`, leaving a literal in
/// its place.
fn detach_binary_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::Binary(node) = expr {
        for child in [&mut node.left, &mut node.right] {
            if matches!(**child, Expr::Binary(_)) {
                pending.push(mem::replace(&mut **child, Expr::literal(0)));
            }
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Rem, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
        };
        write!(f, "{operator}")
    }
}

impl<L: std::fmt::Display, R: std::fmt::Display> std::fmt::Display for BinaryNode<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

/// Pending output of the iterative renderer in `Display for Expr`.
enum Piece<'a> {
    Expr(&'a Expr),
    Text(&'static str),
    Op(BinaryOperator),
}

/// Renders the tree fully parenthesised, e.g. `((10 - 2) * 3)`.
///
/// Rendering uses an explicit stack, so arbitrarily deep trees can be printed.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pieces = vec![Piece::Expr(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Expr(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Expr(Self::Binary(node)) => {
                    pieces.extend([Piece::Text(")"),
                                   Piece::Expr(node.right()),
                                   Piece::Text(" "),
                                   Piece::Op(node.op()),
                                   Piece::Text(" "),
                                   Piece::Expr(node.left()),
                                   Piece::Text("(")]);
                },
                Piece::Text(text) => f.write_str(text)?,
                Piece::Op(op) => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_fully_parenthesised() {
        let expr = Expr::mul(Expr::sub(Expr::literal(10), Expr::literal(2)), Expr::literal(3));
        assert_eq!(expr.to_string(), "((10 - 2) * 3)");

        let expr = Expr::sub(Expr::literal(3), Expr::literal(-5));
        assert_eq!(expr.to_string(), "(3 - -5)");
    }

    #[test]
    fn binary_node_keeps_its_children() {
        let node = BinaryNode::new(BinaryOperator::Div, Expr::literal(8), Expr::literal(2)).at_line(4);
        assert_eq!(node.op(), BinaryOperator::Div);
        assert_eq!(node.left(), &Expr::literal(8));
        assert_eq!(node.right(), &Expr::literal(2));
        assert_eq!(node.line(), 4);
    }

    #[test]
    fn line_number_of_binary_is_operator_line() {
        let expr = Expr::Binary(BinaryNode::new(BinaryOperator::Add,
                                                Box::new(Expr::Literal { value: 1, line: 1 }),
                                                Box::new(Expr::Literal { value: 2, line: 2 })).at_line(2));
        assert_eq!(expr.line_number(), 2);
    }

    fn left_deep_chain(terms: usize) -> Expr {
        let mut expr = Expr::literal(0);
        for _ in 0..terms {
            expr = Expr::add(expr, Expr::literal(1));
        }
        expr
    }

    #[test]
    fn deep_chains_render_and_drop() {
        let terms = 200_000;
        let expr = left_deep_chain(terms);

        let rendered = expr.to_string();
        assert!(rendered.trim_start_matches('(').starts_with("0 + 1) + 1)"));
        assert!(rendered.ends_with(" + 1)"));
        assert_eq!(rendered.matches('+').count(), terms);

        drop(expr);
    }

    #[test]
    fn dropping_a_right_deep_chain() {
        let mut expr = Expr::literal(0);
        for _ in 0..200_000 {
            expr = Expr::sub(Expr::literal(1), expr);
        }
        drop(expr);
    }
}
