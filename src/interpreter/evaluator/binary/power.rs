use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::is_integral,
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// The exponent must be a non-negative integer; the base may be any real
    /// number. `0 ^ 0` is `1`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_pow(2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(Context::eval_pow(-1.5, 2.0).unwrap(), 2.25);
    /// assert!(Context::eval_pow(2.0, -1.0).is_err());
    /// assert!(Context::eval_pow(2.0, 0.5).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        if !is_integral(exponent) || exponent < 0.0 {
            return Err(RuntimeError::TypeMismatch { details: format!("exponent must be a non-negative integer, found {exponent}") });
        }

        Ok(base.powf(exponent))
    }
}
