use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING, ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | "-" INTEGER
///              | "(" expression ")"
/// ```
/// A line break in place of a primary means the expression stopped short.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(magnitude), line)) => {
            let value =
                i64::try_from(*magnitude).map_err(|_| ParseError::LiteralTooLarge { line: *line })?;
            Ok(Expr::Literal { value,
                               line: *line })
        },
        Some((Token::Minus, line)) => parse_negative_literal(tokens, *line),
        Some((Token::LParen, line)) => parse_grouping(tokens, *line, depth),
        Some((Token::NewLine, line)) => {
            Err(ParseError::UnexpectedEndOfInput { line: line.saturating_sub(1) })
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the integer after a leading `-` into a negative literal.
///
/// The magnitude is negated before narrowing, so `-9223372036854775808`
/// yields `i64::MIN`.
fn parse_negative_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(magnitude), _)) => {
            let value = 0_i64.checked_sub_unsigned(*magnitude)
                             .ok_or(ParseError::LiteralTooLarge { line })?;
            Ok(Expr::Literal { value, line })
        },
        Some((Token::NewLine, _)) | None => Err(ParseError::UnexpectedEndOfInput { line }),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected integer after '-', found {tok:?}"),
                                              line:  *line, })
        },
    }
}

/// Parses a parenthesised expression; the `(` has already been consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let depth = depth + 1;
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { max: MAX_NESTING,
                                                line });
    }

    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn primary(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source)?;
        parse_primary(&mut tokens.iter().peekable(), 0)
    }

    #[test]
    fn literal_range_is_the_full_i64_range() {
        assert_eq!(primary("9223372036854775807"),
                   Ok(Expr::Literal { value: i64::MAX,
                                      line:  1, }));
        assert_eq!(primary("-9223372036854775808"),
                   Ok(Expr::Literal { value: i64::MIN,
                                      line:  1, }));
        assert_eq!(primary("-0"), Ok(Expr::Literal { value: 0, line: 1 }));
    }

    #[test]
    fn literals_outside_i64_are_too_large() {
        assert_eq!(primary("9223372036854775808"),
                   Err(ParseError::LiteralTooLarge { line: 1 }));
        assert_eq!(primary("-9223372036854775809"),
                   Err(ParseError::LiteralTooLarge { line: 1 }));
    }
}
