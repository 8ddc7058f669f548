use tracing::trace;

use crate::{
    ast::ForLoop,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::truncate_to_i64,
};

impl Context<'_> {
    /// Evaluates a `PARA` loop.
    ///
    /// The header is evaluated once, in source order: variable, start, end and
    /// step (default `1`), each truncated to an integer. The counter then runs
    /// from `start` to `end` inclusive. The counter is not visible to the
    /// body, which is evaluated identically on every iteration; effects are
    /// only observable through the memory register.
    ///
    /// # Returns
    /// The value of the last iteration.
    ///
    /// # Errors
    /// `InvalidStep` if the step is zero or points away from `end` (a
    /// positive step with `start > end`, or a negative one with
    /// `start < end`).
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     ast::{Expr, ForLoop},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new(0.0, &[]);
    ///
    /// // (PARA 1 DE 1 ATE 3 (((MEM) 1 +) MEM)) increments the register three times.
    /// let increment = Expr::MemStore {
    ///     value: Box::new(Expr::binary(rpncalc::ast::BinaryOperator::Add,
    ///                                  Expr::MemAccess,
    ///                                  Expr::Number(1.0))),
    /// };
    /// let header = ForLoop { var:   Box::new(Expr::Number(1.0)),
    ///                        start: Box::new(Expr::Number(1.0)),
    ///                        end:   Box::new(Expr::Number(3.0)),
    ///                        step:  None,
    ///                        body:  Box::new(increment), };
    ///
    /// assert_eq!(context.eval_for(&header).unwrap(), Some(3.0));
    /// assert_eq!(context.memory, 3.0);
    /// ```
    pub fn eval_for(&mut self, header: &ForLoop) -> EvalResult<Option<f64>> {
        self.eval_child(&header.var, "loop variable")?;
        let start = truncate_to_i64(self.eval_child(&header.start, "loop start")?)?;
        let end = truncate_to_i64(self.eval_child(&header.end, "loop end")?)?;
        let step = match &header.step {
            Some(step) => truncate_to_i64(self.eval_child(step, "loop step")?)?,
            None => 1,
        };

        if step == 0 || (start < end && step < 0) || (start > end && step > 0) {
            return Err(RuntimeError::InvalidStep { start, end, step });
        }

        let mut counter = start;
        let mut last_value;
        loop {
            trace!(counter, "loop iteration");
            last_value = self.eval(&header.body)?;

            match counter.checked_add(step) {
                Some(next) if (step > 0 && next <= end) || (step < 0 && next >= end) => {
                    counter = next;
                },
                _ => break,
            }
        }

        Ok(last_value)
    }
}
