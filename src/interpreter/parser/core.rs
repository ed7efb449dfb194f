use std::iter::{self, Peekable};

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Parses a whole program: one expression per line.
///
/// Blank and comment-only lines are skipped. Every expression must end at a
/// line break or at the end of the input.
///
/// # Errors
/// Returns the first `ParseError` met, in source order.
///
/// # Example
/// ```
/// use calculator::{error::ParseError, interpreter::{lexer::tokenize, parser::core::parse_program}};
///
/// let tokens = tokenize("(3 + 4)\n\n(10 - 2) * 3").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[1].to_string(), "((10 - 2) * 3)");
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(matches!(parse_program(&tokens),
///                  Err(ParseError::UnexpectedTrailingTokens { line: 1, .. })));
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Expr>> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    // Treat the end of input like one more line break, so every expression
    // ends the same way.
    let end = (Token::NewLine, last_line + 1);
    let mut stream = tokens.iter().chain(iter::once(&end)).peekable();

    let mut program = Vec::new();

    loop {
        while let Some((Token::NewLine, _)) = stream.peek() {
            stream.next();
        }
        if stream.peek().is_none() {
            break;
        }

        let expr = parse_expression(&mut stream, 0)?;
        match stream.peek() {
            Some((Token::NewLine, _)) | None => {},
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                  line:  *line, });
            },
        }

        debug!("parsed line {}: {expr}", expr.line_number());
        program.push(expr);
    }

    Ok(program)
}
