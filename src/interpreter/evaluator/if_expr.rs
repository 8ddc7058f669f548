use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a `SE` conditional.
    ///
    /// Any nonzero condition is true. Only the selected branch is evaluated.
    /// A false condition without `SENAO` yields no value at all rather than a
    /// numeric default.
    pub fn eval_if_expr(&mut self,
                        condition: &Expr,
                        then_branch: &Expr,
                        else_branch: Option<&Expr>)
                        -> EvalResult<Option<f64>> {
        if self.eval_child(condition, "condition")? != 0.0 {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)
        } else {
            Ok(None)
        }
    }
}
