use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// `|`, `/` or `%` with a zero divisor.
    #[error("Division by zero in '{operator}'.")]
    DivisionByZero {
        /// The dividing operator.
        operator: BinaryOperator,
    },
    /// An operand that must be an integer was not.
    #[error("Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the rejected operand.
        details: String,
    },
    /// `RES` was given a negative index.
    #[error("RES index must not be negative, found {index}.")]
    NegativeIndex {
        /// The truncated index.
        index: i64,
    },
    /// `RES` reached further back than the recorded history.
    #[error("RES index {index} is out of range: only {available} previous result(s) recorded.")]
    HistoryUnderflow {
        /// The requested backward index.
        index:     usize,
        /// Number of results recorded so far.
        available: usize,
    },
    /// The `PASSO` of a loop is zero or points away from its end.
    #[error("Invalid loop step {step} for a loop from {start} to {end}.")]
    InvalidStep {
        /// First counter value.
        start: i64,
        /// Last counter value.
        end:   i64,
        /// The rejected step.
        step:  i64,
    },
    /// A value was required but the expression produced none.
    #[error("Missing value: the {context} produced no value.")]
    MissingValue {
        /// Which operand was missing.
        context: &'static str,
    },
    /// Integer arithmetic left the representable range.
    #[error("Integer overflow while computing {details}.")]
    Overflow {
        /// The operation that overflowed.
        details: String,
    },
}
