/// Represents all errors that can occur while parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position.
    #[error("Expected {expected}, found '{found}' at column {column}.")]
    UnexpectedToken {
        /// What the grammar accepts here.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The 1-based column of the found token.
        column:   usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Unexpected trailing token '{found}' at column {column} after a complete expression.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The 1-based column of the extra token.
        column: usize,
    },
    /// Parentheses nested deeper than the parser accepts.
    #[error("Expressions nested deeper than {limit} levels at column {column}.")]
    NestingTooDeep {
        /// The maximum accepted depth.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The 1-based column of the first `(` past the limit.
        column: usize,
    },
}

impl ParseError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Returns the 1-based column of the offending token.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedTrailingTokens { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}

/// Text that does not name one of the seven operators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operator '{symbol}'.")]
pub struct UnknownOperator {
    /// The rejected text.
    pub symbol: String,
}
