/// The evaluator module computes the value of expression trees.
///
/// # Responsibilities
/// - Declares the [`Node`](evaluator::node::Node) capability shared by every
///   evaluable element.
/// - Applies binary operators to evaluated operands.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: integer literals, operators, parentheses and line breaks.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) trees, one per line.
/// - Applies operator precedence and left associativity.
/// - Reports syntax errors with line information.
pub mod parser;
