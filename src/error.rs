/// Lexical errors.
///
/// Raised while splitting a source line into tokens: characters outside the
/// language alphabet, malformed numeric literals and unknown keywords.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token sequence of a line does not match the grammar, and
/// when an operator symbol is not one of the seven defined ones.
pub mod parse_error;
/// Runtime errors.
///
/// Raised during evaluation: division by zero, non-integral operands, history
/// lookups out of range and invalid loop steps.
pub mod runtime_error;
/// Line-level errors and the diagnostic records built from them.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, ErrorKind, LineError};
pub use lex_error::LexError;
pub use parse_error::{ParseError, UnknownOperator};
pub use runtime_error::RuntimeError;
