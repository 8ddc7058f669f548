use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, conditions, indices and loop bounds all need a number; an
    /// operand that yields nothing is reported as `MissingValue` naming
    /// `context`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     ast::Expr,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut ctx = Context::new(0.0, &[]);
    /// assert_eq!(ctx.eval_child(&Expr::Number(10.0), "operand").unwrap(), 10.0);
    ///
    /// // (SE 0 ENTAO 1) yields nothing.
    /// let empty = Expr::If { condition:   Box::new(Expr::Number(0.0)),
    ///                        then_branch: Box::new(Expr::Number(1.0)),
    ///                        else_branch: None, };
    /// let err = ctx.eval_child(&empty, "operand").unwrap_err();
    /// assert!(matches!(err, RuntimeError::MissingValue { context: "operand" }));
    /// ```
    pub fn eval_child(&mut self, expr: &Expr, context: &'static str) -> EvalResult<f64> {
        self.eval(expr)?
            .ok_or(RuntimeError::MissingValue { context })
    }
}
