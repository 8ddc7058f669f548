/// Binary operator evaluation logic.
///
/// Handles the seven arithmetic operators, including the zero-divisor and
/// integrality checks of `|`, `/`, `%` and `^`.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context (working memory register and a read-only
/// view of the result history) and the dispatch over node kinds.
pub mod core;

/// Evaluation of `(MEM)`, `(V MEM)` and `(N RES)`.
pub mod memory;

/// Evaluation of `SE` conditionals.
pub mod if_expr;

/// Evaluation of `PARA` loops.
///
/// Computes the integer range once at loop entry and evaluates the body once
/// per counter value.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the evaluation routines.
pub mod utils;
