//! # rpncalc
//!
//! rpncalc evaluates a small, line-oriented language written in fully
//! parenthesized Reverse Polish Notation. Besides the seven arithmetic
//! operators it offers a memory register, lookups into the results of earlier
//! lines, conditionals and bounded loops. Every file is evaluated in its own
//! session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Diagnostic, interpreter::session::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator type that represent
/// one source line as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines a closed set of node kinds for every language construct.
/// - Renders trees back to canonical source and as an indented node dump.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing a line
/// and the [`Diagnostic`] record that reports them together with the file,
/// line and source text.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and machine-readable error codes.
pub mod error;
/// Orchestrates the evaluation of a single line.
///
/// This module ties together lexing, parsing, evaluation and the per-file
/// session state.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Owns the session semantics: the memory register and result history.
pub mod interpreter;
/// Runs whole files line by line, collecting values and diagnostics.
pub mod program;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `f64` and the integer types used by integer
///   operators, history indices and loop bounds.
pub mod util;

/// Evaluates one line of `file` against `session`.
///
/// Blank and comment lines yield `Ok(None)`, as does a `SE` without `SENAO`
/// whose condition is false. Any failure is returned as a [`Diagnostic`] and
/// leaves the session unchanged.
///
/// # Errors
/// Returns a diagnostic if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use rpncalc::{error::ErrorKind, evaluate_line, interpreter::session::Session};
///
/// let mut session = Session::new();
///
/// assert_eq!(evaluate_line("a.txt", 1, "(7 2 %)", &mut session).unwrap(), Some(1.0));
///
/// let diagnostic = evaluate_line("a.txt", 2, "(1 2 .)", &mut session).unwrap_err();
/// assert_eq!(diagnostic.kind, ErrorKind::Syntax);
/// assert_eq!(diagnostic.line_number, 2);
/// assert_eq!(session.history(), [1.0]);
/// ```
pub fn evaluate_line(file: &str,
                     line_number: usize,
                     source: &str,
                     session: &mut Session)
                     -> Result<Option<f64>, Diagnostic> {
    session.evaluate_line(source, line_number)
           .map_err(|error| Diagnostic::new(file, line_number, source, &error))
}
