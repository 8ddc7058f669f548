use tracing::debug;

use crate::{
    ast::Expr,
    error::LineError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::tokenize,
        parser::core::parse_line,
    },
};

/// Per-file evaluation state: the memory register and the result history.
///
/// A session is created for each file and never shared between files. The
/// history holds exactly one entry per line that produced a value since the
/// session was created or last [reset](Session::reset).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    memory:  f64,
    history: Vec<f64>,
}

/// Whether a line is blank or a `#` comment.
#[must_use]
pub fn is_blank_or_comment(source: &str) -> bool {
    let trimmed = source.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

impl Session {
    /// Creates a session with a zero register and empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the register and the history, as at a file boundary.
    pub fn reset(&mut self) {
        self.memory = 0.0;
        self.history.clear();
    }

    /// Current value of the memory register.
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory
    }

    /// Recorded results, oldest first.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Evaluates a parsed line and commits its effects.
    ///
    /// The tree is evaluated against a working copy of the register. On
    /// success the register is updated and the value, if any, appended to the
    /// history; on failure the session is left untouched.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Option<f64>> {
        let mut context = Context::new(self.memory, &self.history);
        let value = context.eval(expr)?;
        self.memory = context.memory;

        if let Some(value) = value {
            self.history.push(value);
        }
        Ok(value)
    }

    /// Tokenizes, parses and evaluates one source line.
    ///
    /// Blank lines and `#` comments yield `Ok(None)` and are not recorded.
    ///
    /// # Parameters
    /// - `source`: The text of the line.
    /// - `line_number`: 1-based position of the line, used in errors.
    ///
    /// # Errors
    /// Returns the lexical, syntax or runtime error of the first failing
    /// stage. A failing line changes neither the register nor the history.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::session::Session;
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.evaluate_line("(5 MEM)", 1).unwrap(), Some(5.0));
    /// assert_eq!(session.evaluate_line("((MEM) 2 *)", 2).unwrap(), Some(10.0));
    /// assert_eq!(session.evaluate_line("(1 RES)", 3).unwrap(), Some(5.0));
    /// assert!(session.evaluate_line("(1 0 |)", 4).is_err());
    /// assert_eq!(session.history(), [5.0, 10.0, 5.0]);
    /// ```
    pub fn evaluate_line(&mut self,
                         source: &str,
                         line_number: usize)
                         -> Result<Option<f64>, LineError> {
        if is_blank_or_comment(source) {
            return Ok(None);
        }

        let tokens = tokenize(source, line_number)?;
        debug!(line = line_number,
               tokens = %tokens.iter()
                               .map(|spanned| spanned.token.to_string())
                               .collect::<Vec<_>>()
                               .join(" "),
               "tokenized");

        let expr = parse_line(&tokens)?;
        debug!(line = line_number, "parsed\n{}", expr.tree());

        Ok(self.evaluate(&expr)?)
    }
}
