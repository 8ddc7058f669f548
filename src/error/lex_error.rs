/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that is not part of the language alphabet.
    #[error("Unexpected character '{character}' at column {column}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The 1-based column of the character.
        column:    usize,
    },
    /// A numeric literal with a trailing or repeated decimal point.
    #[error("Malformed number '{text}' at column {column}.")]
    MalformedNumber {
        /// The literal as written.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The 1-based column where the literal starts.
        column: usize,
    },
    /// A word that is not one of the nine keywords.
    #[error("Unknown keyword '{word}' at column {column}.")]
    UnknownKeyword {
        /// The word, upper-cased.
        word:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The 1-based column where the word starts.
        column: usize,
    },
}

impl LexError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::UnknownKeyword { line, .. } => *line,
        }
    }

    /// Returns the 1-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::MalformedNumber { column, .. }
            | Self::UnknownKeyword { column, .. } => *column,
        }
    }
}
