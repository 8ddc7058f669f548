use std::{fs, io, path::Path};

use tracing::{info, warn};

use crate::{
    error::Diagnostic,
    interpreter::session::{Session, is_blank_or_comment},
};

/// What happened to one non-comment line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line produced a value, now recorded in the history.
    Value(f64),
    /// The line evaluated successfully but yielded nothing.
    NoValue,
    /// The line failed; nothing was recorded.
    Failed(Diagnostic),
}

/// The result of one evaluated line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// 1-based line number.
    pub line_number: usize,
    /// The line as written, trimmed.
    pub source:      String,
    /// Value, absence of value, or diagnostic.
    pub outcome:     Outcome,
}

/// Everything produced while running one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Base name of the file.
    pub file:    String,
    /// One entry per non-comment line, in file order.
    pub lines:   Vec<LineOutcome>,
    /// The session state after the last line.
    pub session: Session,
}

impl FileReport {
    /// Values recorded in the history, oldest first.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.session.history()
    }

    /// Diagnostics of the failed lines, in file order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lines.iter().filter_map(|line| match &line.outcome {
                             Outcome::Failed(diagnostic) => Some(diagnostic),
                             _ => None,
                         })
    }

    /// Whether every line succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics().next().is_none()
    }
}

/// Runs every line of `source` in a fresh session.
///
/// A failing line is recorded as a diagnostic and processing continues with
/// the next line.
///
/// # Example
/// ```
/// use rpncalc::program::{Outcome, run_source};
///
/// let report = run_source("demo.txt", "(2 3 ^)\n# comment\n(1 0 |)\n((0 RES) 1 +)\n");
///
/// assert_eq!(report.lines.len(), 3);
/// assert_eq!(report.lines[0].outcome, Outcome::Value(8.0));
/// assert!(matches!(report.lines[1].outcome, Outcome::Failed(_)));
/// assert_eq!(report.values(), [8.0, 9.0]);
/// ```
#[must_use]
pub fn run_source(file: &str, source: &str) -> FileReport {
    info!(file, "processing");
    let mut session = Session::new();
    let mut lines = Vec::new();

    for (index, text) in source.lines().enumerate() {
        if is_blank_or_comment(text) {
            continue;
        }
        let line_number = index + 1;

        let outcome = match session.evaluate_line(text, line_number) {
            Ok(Some(value)) => Outcome::Value(value),
            Ok(None) => Outcome::NoValue,
            Err(error) => {
                warn!(file, line = line_number, %error, "line failed");
                Outcome::Failed(Diagnostic::new(file, line_number, text, &error))
            },
        };

        lines.push(LineOutcome { line_number,
                                 source: text.trim().to_string(),
                                 outcome });
    }

    FileReport { file: file.to_string(),
                 lines,
                 session }
}

/// Reads a file and runs it with [`run_source`].
///
/// # Errors
/// Returns the I/O error if the file cannot be read.
pub fn run_file(path: &Path) -> io::Result<FileReport> {
    let source = fs::read_to_string(path)?;
    let file = path.file_name()
                   .map_or_else(|| path.display().to_string(),
                                |name| name.to_string_lossy().into_owned());

    Ok(run_source(&file, &source))
}
