use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary group node.
    ///
    /// Both operands are evaluated, left before right, before the operator is
    /// applied; a failing operator check never skips an operand.
    pub fn eval_binary_op(&mut self,
                          op: BinaryOperator,
                          left: &Expr,
                          right: &Expr)
                          -> EvalResult<f64> {
        let left = self.eval_child(left, "left operand")?;
        let right = self.eval_child(right, "right operand")?;
        Self::eval_binary(op, left, right)
    }

    /// Applies a binary operator to two values.
    ///
    /// `+ - * |` are real arithmetic, `/` and `%` the floor-based integer
    /// operations and `^` integer exponentiation.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Add, 3.0, 4.0).unwrap(), 7.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::IntDiv, 7.0, 2.0).unwrap(), 3.0);
    /// assert!(Context::eval_binary(BinaryOperator::RealDiv, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, IntDiv, Mod, Mul, Pow, RealDiv, Sub};

        match op {
            Add | Sub | Mul | RealDiv => Self::eval_scalar_op(op, left, right),
            IntDiv | Mod => Self::eval_integer_op(op, left, right),
            Pow => Self::eval_pow(left, right),
        }
    }
}
