/// Entry points and the six-way dispatch on `(`.
///
/// Parses a whole line and decides which production a parenthesized group
/// belongs to.
pub mod core;

/// Binary groups.
///
/// Parses `(Term Term Operator)` and hands `(Term MEM)` / `(Term RES)` over to
/// the command productions once the keyword is seen.
pub mod binary;

/// Memory and history commands: `(MEM)`, `(V MEM)` and `(N RES)`.
pub mod command;

/// Conditionals and loops: `(SE ...)` and `(PARA ...)`.
pub mod control;

/// Token-matching helpers shared by all productions.
pub mod utils;
