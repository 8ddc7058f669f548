use std::fmt;

use crate::error::{LexError, ParseError, RuntimeError};

/// Any failure of a single line, whichever stage raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Machine-readable error code carried by every [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad character, malformed number or unknown keyword.
    Lex,
    /// Grammar mismatch or trailing tokens.
    Syntax,
    /// Zero divisor for `|`, `/` or `%`.
    DivisionByZero,
    /// Non-integral operand where an integer is required.
    TypeMismatch,
    /// Negative `RES` index.
    NegativeIndex,
    /// `RES` index beyond the recorded history.
    HistoryUnderflow,
    /// Zero or misdirected `PASSO`.
    InvalidStep,
    /// Text that is not an operator symbol.
    UnknownOperator,
    /// An operand expression yielded no value.
    MissingValue,
    /// Integer arithmetic overflowed.
    Overflow,
}

impl LineError {
    /// Returns the error code for this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(error) => match error {
                RuntimeError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
                RuntimeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
                RuntimeError::NegativeIndex { .. } => ErrorKind::NegativeIndex,
                RuntimeError::HistoryUnderflow { .. } => ErrorKind::HistoryUnderflow,
                RuntimeError::InvalidStep { .. } => ErrorKind::InvalidStep,
                RuntimeError::MissingValue { .. } => ErrorKind::MissingValue,
                RuntimeError::Overflow { .. } => ErrorKind::Overflow,
            },
        }
    }
}

/// A failed line, ready for display.
///
/// Building a diagnostic never touches session state; it only records where
/// the failure happened and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Base name of the file being processed.
    pub file:        String,
    /// 1-based line number.
    pub line_number: usize,
    /// The line as written, without surrounding whitespace.
    pub source_text: String,
    /// Human-readable description of the failure.
    pub message:     String,
    /// Error code for programmatic checks.
    pub kind:        ErrorKind,
}

impl Diagnostic {
    /// Creates a diagnostic for `error` raised on the given line.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::error::{Diagnostic, ErrorKind, LineError, RuntimeError};
    ///
    /// let error = LineError::from(RuntimeError::NegativeIndex { index: -1 });
    /// let diagnostic = Diagnostic::new("main.txt", 4, "(-1 RES)", &error);
    ///
    /// assert_eq!(diagnostic.kind, ErrorKind::NegativeIndex);
    /// assert_eq!(diagnostic.line_number, 4);
    /// ```
    #[must_use]
    pub fn new(file: &str, line_number: usize, source_text: &str, error: &LineError) -> Self {
        Self { file: file.to_string(),
               line_number,
               source_text: source_text.trim().to_string(),
               message: error.to_string(),
               kind: error.kind() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Error Report ===")?;
        writeln!(f, "File:  {}", self.file)?;
        writeln!(f, "Line:  {}", self.line_number)?;
        writeln!(f, "Code:  {}", self.source_text)?;
        writeln!(f, "Error: {}", self.message)?;
        write!(f, "====================")
    }
}

impl std::error::Error for Diagnostic {}
