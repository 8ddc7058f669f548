use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Whether `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use rpncalc::util::num::is_integral;
///
/// assert!(is_integral(-4.0));
/// assert!(!is_integral(0.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns `RuntimeError::TypeMismatch` for non-finite or fractional values
/// and `RuntimeError::Overflow` for values outside the `i64` range.
///
/// ## Example
/// ```
/// use rpncalc::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(1000.0).unwrap(), 1000);
///
/// let err = f64_to_i64_checked(1.5).unwrap_err();
/// assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
///
/// let err = f64_to_i64_checked(1e20).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> EvalResult<i64> {
    if !is_integral(value) {
        return Err(RuntimeError::TypeMismatch { details: format!("{value} is not an integer") });
    }
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { details: format!("the conversion of {value} to an integer") });
    }
    Ok(value as i64)
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Used where the language accepts any number but works with its integer part,
/// such as `RES` indices and `PARA` bounds.
///
/// ## Errors
/// Returns `RuntimeError::TypeMismatch` for NaN or infinite values and
/// `RuntimeError::Overflow` when the integer part does not fit in an `i64`.
///
/// ## Example
/// ```
/// use rpncalc::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(2.9).unwrap(), 2);
/// assert_eq!(truncate_to_i64(-2.9).unwrap(), -2);
/// assert!(truncate_to_i64(f64::NAN).is_err());
/// ```
pub fn truncate_to_i64(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeMismatch { details: format!("{value} has no integer part") });
    }
    f64_to_i64_checked(value.trunc())
}

/// Converts an `i64` result back to the evaluator's `f64` values.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates a `RES` index toward zero and converts it to a `usize`.
///
/// Indices too large for a `usize`, `+inf` included, saturate to
/// `usize::MAX` so the caller reports them as reaching past the history.
///
/// ## Errors
/// Returns `RuntimeError::NegativeIndex` if the integer part is below zero,
/// with the index saturated to the `i64` range, and
/// `RuntimeError::TypeMismatch` for NaN.
///
/// ## Example
/// ```
/// use rpncalc::{error::RuntimeError, util::num::truncate_to_index};
///
/// assert_eq!(truncate_to_index(42.7).unwrap(), 42);
/// assert_eq!(truncate_to_index(-0.5).unwrap(), 0);
/// assert_eq!(truncate_to_index(1e300).unwrap(), usize::MAX);
///
/// let err = truncate_to_index(-1e20).unwrap_err();
/// assert!(matches!(err, RuntimeError::NegativeIndex { index: i64::MIN }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn truncate_to_index(value: f64) -> EvalResult<usize> {
    if value.is_nan() {
        return Err(RuntimeError::TypeMismatch { details: "NaN is not a valid index".to_string() });
    }

    // Float to integer casts saturate at the bounds of the target type.
    let index = value.trunc();
    if index < 0.0 {
        return Err(RuntimeError::NegativeIndex { index: index as i64 });
    }
    Ok(index as usize)
}
