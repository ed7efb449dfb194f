#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line of the matching `(`.
        line: usize,
    },
    /// Found extra tokens after an expression should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { max, line } => write!(f,
                                                         "Error on line {line}: Parentheses nested deeper than {max} levels."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_line() {
        let err = ParseError::ExpectedClosingParen { line: 3 };
        assert_eq!(err.to_string(),
                   "Error on line 3: Expected closing parenthesis ')' but none found.");

        let err = ParseError::NestingTooDeep { max: 256, line: 1 };
        assert!(err.to_string().contains("256"));
    }
}
