/// Dispatch from an operator to its implementation.
pub mod core;

/// `+`, `-`, `*` and real division `|`.
pub mod scalar;

/// Integer division `/` and remainder `%`.
pub mod integer;

/// Exponentiation `^`.
pub mod power;
