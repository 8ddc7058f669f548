use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::truncate_to_index,
};

impl Context<'_> {
    /// Evaluates `(V MEM)`: stores the value in the working register and
    /// yields it.
    pub fn eval_mem_store(&mut self, value: &Expr) -> EvalResult<f64> {
        let value = self.eval_child(value, "stored value")?;
        self.memory = value;
        Ok(value)
    }

    /// Evaluates `(N RES)`: the result recorded `N` lines back.
    ///
    /// The index is truncated toward zero. `0` is the most recent result.
    ///
    /// # Errors
    /// - `NegativeIndex` if the truncated index is below zero.
    /// - `HistoryUnderflow` if fewer than `N + 1` results are recorded.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     ast::Expr,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let history = [1.0, 2.0, 3.0];
    /// let mut context = Context::new(0.0, &history);
    ///
    /// assert_eq!(context.eval_res_access(&Expr::Number(0.0)).unwrap(), 3.0);
    /// assert_eq!(context.eval_res_access(&Expr::Number(2.0)).unwrap(), 1.0);
    ///
    /// let err = context.eval_res_access(&Expr::Number(3.0)).unwrap_err();
    /// assert!(matches!(err, RuntimeError::HistoryUnderflow { index: 3, available: 3 }));
    /// ```
    pub fn eval_res_access(&mut self, index: &Expr) -> EvalResult<f64> {
        let raw = self.eval_child(index, "RES index")?;
        let index = truncate_to_index(raw)?;
        let history = self.history();

        if index >= history.len() {
            return Err(RuntimeError::HistoryUnderflow { index,
                                                        available: history.len() });
        }
        Ok(history[history.len() - 1 - index])
    }
}
