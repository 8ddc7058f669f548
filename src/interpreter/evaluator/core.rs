use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state visible while evaluating one line.
///
/// The context works on a copy of the memory register and only reads the
/// result history. [`Session`](crate::interpreter::session::Session) creates a
/// context per line and commits `memory` back only if the whole line
/// evaluated successfully, so a failing line leaves no trace.
#[derive(Debug, Clone)]
pub struct Context<'h> {
    /// Working copy of the memory register.
    pub memory: f64,
    history:    &'h [f64],
}

impl<'h> Context<'h> {
    /// Creates a context over the given register value and history.
    #[must_use]
    pub const fn new(memory: f64, history: &'h [f64]) -> Self {
        Self { memory, history }
    }

    /// Results recorded before the current line, oldest first.
    #[must_use]
    pub const fn history(&self) -> &'h [f64] {
        self.history
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node kind; operands are always evaluated left to
    /// right.
    ///
    /// # Returns
    /// `Some(f64)` for expressions that produce a value, or `None` for a
    /// `SE` without `SENAO` whose condition is false (and for loops whose
    /// last iteration produced nothing).
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let history = [10.0, 20.0];
    /// let mut context = Context::new(0.0, &history);
    ///
    /// // ((0 RES) 2 |)
    /// let expr = Expr::binary(BinaryOperator::RealDiv,
    ///                         Expr::ResAccess { index: Box::new(Expr::Number(0.0)) },
    ///                         Expr::Number(2.0));
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Some(10.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<f64>> {
        match expr {
            Expr::Number(value) => Ok(Some(*value)),
            Expr::BinaryOp { op, left, right } => {
                self.eval_binary_op(*op, left, right).map(Some)
            },
            Expr::MemAccess => Ok(Some(self.memory)),
            Expr::MemStore { value } => self.eval_mem_store(value).map(Some),
            Expr::ResAccess { index } => self.eval_res_access(index).map(Some),
            Expr::If { condition,
                       then_branch,
                       else_branch, } => {
                self.eval_if_expr(condition, then_branch, else_branch.as_deref())
            },
            Expr::For(header) => self.eval_for(header),
        }
    }
}
