use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a real-valued arithmetic operation.
    ///
    /// The operator must be one of `Add`, `Sub`, `Mul` or `RealDiv`; other
    /// operators are not processed here. Real division checks its divisor
    /// explicitly instead of producing an infinity.
    pub(crate) fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Mul, RealDiv, Sub};

        Ok(match op {
               Add => left + right,
               Sub => left - right,
               Mul => left * right,
               RealDiv => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero { operator: op });
                   }
                   left / right
               },
               _ => unreachable!(),
           })
    }
}
