//! # calculator
//!
//! calculator evaluates integer arithmetic. An expression is held as an owned
//! tree: integer literals at the leaves and binary operator nodes above them.
//! Evaluating a node evaluates its left operand, then its right operand, and
//! then combines the two results.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the expression tree.
///
/// This module declares [`Expr`](ast::Expr), the generic
/// [`BinaryNode`](ast::BinaryNode) and the set of binary operators. Trees are
/// built by the parser or by hand and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
pub mod interpreter;

/// Tokenizes and parses `source` into one tree per non-empty line.
///
/// # Example
/// ```
/// use calculator::parse_source;
///
/// let program = parse_source("(10 - 2) * 3").unwrap();
/// assert_eq!(program[0].to_string(), "((10 - 2) * 3)");
/// ```
pub fn parse_source(source: &str) -> Result<Vec<ast::Expr>, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Evaluates every expression in `source` and returns each value in order.
///
/// Evaluation stops at the first error.
///
/// # Example
/// ```
/// use calculator::{evaluate_all, interpreter::evaluator::core::Context};
///
/// let values = evaluate_all("3 + 4\n((1 + 2) * (3 + 4))", &Context::new()).unwrap();
/// assert_eq!(values, vec![7, 21]);
/// ```
pub fn evaluate_all(source: &str,
                    context: &Context)
                    -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let program = parse_source(source)?;
    debug!("evaluating {} expression(s)", program.len());

    let mut values = Vec::with_capacity(program.len());
    for expr in &program {
        values.push(context.eval(expr)?);
    }

    Ok(values)
}

/// Returns the value of the last expression in `source`.
///
/// All expressions are evaluated in order; a program with no expressions
/// yields `Ok(None)`.
///
/// # Errors
/// Returns an error if parsing fails or if any expression fails to evaluate.
///
/// # Examples
/// ```
/// use calculator::{get_result, interpreter::evaluator::core::Context};
///
/// let context = Context::new();
///
/// assert_eq!(get_result("3 + 4", &context).unwrap(), Some(7));
/// assert_eq!(get_result("// nothing", &context).unwrap(), None);
///
/// // Division by zero is an error, never a silent value.
/// assert!(get_result("8 / (4 - 4)", &context).is_err());
/// ```
pub fn get_result(source: &str,
                  context: &Context)
                  -> Result<Option<i64>, Box<dyn std::error::Error>> {
    Ok(evaluate_all(source, context)?.pop())
}
