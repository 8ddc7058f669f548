use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{f64_to_i64_checked, i64_to_f64},
};

impl Context<'_> {
    /// Evaluates integer division (`/`) or remainder (`%`).
    ///
    /// A zero divisor is reported before the integrality check. Both
    /// operands must be integral. Division rounds toward negative infinity and
    /// the remainder takes the sign of the divisor, so
    /// `left == right * (left / right) + left % right` always holds.
    ///
    /// Only reached through [`Context::eval_binary`] with `/` or `%`.
    pub(crate) fn eval_integer_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        if right == 0.0 {
            return Err(RuntimeError::DivisionByZero { operator: op });
        }

        let a = integral_operand(op, left)?;
        let b = integral_operand(op, right)?;
        let overflow = || RuntimeError::Overflow { details: format!("({left} {right} {op})") };

        let result = match op {
            BinaryOperator::IntDiv => floor_div(a, b),
            BinaryOperator::Mod => floor_mod(a, b),
            _ => unreachable!(),
        };

        result.map(i64_to_f64).ok_or_else(overflow)
    }
}

/// Converts an operand of `/` or `%`, naming the operator on failure.
fn integral_operand(op: BinaryOperator, value: f64) -> EvalResult<i64> {
    f64_to_i64_checked(value).map_err(|error| match error {
                                 RuntimeError::TypeMismatch { .. } => {
                                     RuntimeError::TypeMismatch { details: format!("operands of '{op}' must be integers, found {value}") }
                                 },
                                 other => other,
                             })
}

/// Quotient rounded toward negative infinity; `None` on overflow.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Remainder with the sign of the divisor.
fn floor_mod(a: i64, b: i64) -> Option<i64> {
    // Only `i64::MIN % -1` fails, and its remainder is zero.
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}
