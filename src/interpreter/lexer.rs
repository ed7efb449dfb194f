use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The magnitude is kept unsigned so
    /// that a leading `-` can reach `i64::MIN`; the parser narrows it.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Line break; separates expressions.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(u64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in a `u64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}

/// Splits `source` into `(token, line)` pairs, numbering lines from 1.
///
/// # Errors
/// - `LiteralTooLarge` for a run of digits outside the `u64` range.
/// - `UnexpectedToken` for any character the language does not know.
///
/// # Example
/// ```
/// use calculator::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2\n3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(1), 1),
///                 (Token::Plus, 1),
///                 (Token::Integer(2), 1),
///                 (Token::NewLine, 2),
///                 (Token::Integer(3), 2)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_whitespace_and_comments() {
        let tokens = tokenize("  7\t* (2 % 3) // trailing note\r\n").unwrap();
        let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
        assert_eq!(kinds,
                   vec![Token::Integer(7),
                        Token::Star,
                        Token::LParen,
                        Token::Integer(2),
                        Token::Percent,
                        Token::Integer(3),
                        Token::RParen,
                        Token::NewLine]);
    }

    #[test]
    fn tracks_lines() {
        let tokens = tokenize("1\n\n2").unwrap();
        assert_eq!(tokens.last(), Some(&(Token::Integer(2), 3)));
    }

    #[test]
    fn rejects_oversized_literals() {
        assert_eq!(tokenize("1 + 99999999999999999999"),
                   Err(ParseError::LiteralTooLarge { line: 1 }));
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(tokenize("1\n2 ^ 3"),
                   Err(ParseError::UnexpectedToken { token: "^".to_string(),
                                                     line:  2, }));
    }
}
