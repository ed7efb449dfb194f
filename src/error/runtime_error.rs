#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// Attempted division (or remainder) by zero.
    DivisionByZero {
        /// The source line of the operator.
        line: usize,
    },
    /// Arithmetic operation overflowed the 64-bit integer range.
    Overflow {
        /// The source line of the operator.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::DivisionByZero { line } | Self::Overflow { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_number_and_message() {
        let err = RuntimeError::DivisionByZero { line: 7 };
        assert_eq!(err.line_number(), 7);
        assert_eq!(err.to_string(), "Error on line 7: Division by zero.");

        let err = RuntimeError::Overflow { line: 2 };
        assert_eq!(err.line_number(), 2);
    }
}
