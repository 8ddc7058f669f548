use std::{fmt, str::FromStr};

use crate::error::UnknownOperator;

/// Represents one of the seven arithmetic operators of the language.
///
/// The operator is always the last element of a binary group, so `(7 2 /)`
/// applies [`BinaryOperator::IntDiv`] to `7` and `2` in that order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Real division (`|`)
    RealDiv,
    /// Integer division (`/`)
    IntDiv,
    /// Integer remainder (`%`)
    Mod,
    /// Exponentiation with a non-negative integer exponent (`^`)
    Pow,
}

impl BinaryOperator {
    /// Every operator, in the order they are documented.
    pub const ALL: [Self; 7] = [Self::Add,
                                Self::Sub,
                                Self::Mul,
                                Self::RealDiv,
                                Self::IntDiv,
                                Self::Mod,
                                Self::Pow];

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::RealDiv => "|",
            Self::IntDiv => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = UnknownOperator;

    /// Parses an operator from its symbol.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::ast::BinaryOperator;
    ///
    /// assert_eq!("|".parse::<BinaryOperator>().unwrap(), BinaryOperator::RealDiv);
    /// assert!("&".parse::<BinaryOperator>().is_err());
    /// ```
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or_else(|| UnknownOperator { symbol: symbol.to_string() })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node for one expression of the language.
///
/// Every source line produces exactly one tree. Nodes own their children, so a
/// tree is dropped as a whole once its line has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A binary group `(left right op)`.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// First operand.
        left:  Box<Self>,
        /// Second operand.
        right: Box<Self>,
    },
    /// `(MEM)`: reads the memory register.
    MemAccess,
    /// `(V MEM)`: stores `V` in the memory register and yields it.
    MemStore {
        /// The stored expression.
        value: Box<Self>,
    },
    /// `(N RES)`: the result `N` lines back, `0` being the latest.
    ResAccess {
        /// The backward index into the result history.
        index: Box<Self>,
    },
    /// `(SE c ENTAO t SENAO e)` with an optional `SENAO` branch.
    If {
        /// The condition; any nonzero value is true.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Option<Box<Self>>,
    },
    /// `(PARA v DE s ATE e PASSO p body)`.
    For(ForLoop),
}

/// Header and body of a `PARA` loop.
///
/// The loop variable, bounds and step are numeric literals in source but are
/// kept as nodes so they are evaluated like any other operand.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// The loop variable literal. It is never bound inside the body.
    pub var:   Box<Expr>,
    /// First counter value.
    pub start: Box<Expr>,
    /// Last counter value, inclusive.
    pub end:   Box<Expr>,
    /// Counter increment, `1` when absent.
    pub step:  Option<Box<Expr>>,
    /// Expression evaluated on every iteration.
    pub body:  Box<Expr>,
}

impl Expr {
    /// Builds a binary group node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns the name of the node kind, as printed by [`Expr::tree`].
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::BinaryOp { .. } => "BinaryOp",
            Self::MemAccess => "MemAccess",
            Self::MemStore { .. } => "MemStore",
            Self::ResAccess { .. } => "ResAccess",
            Self::If { .. } => "If",
            Self::For(_) => "For",
        }
    }

    /// Renders the tree as an indented node listing, one node per line.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::Number(1.0), Expr::Number(2.0));
    ///
    /// assert_eq!(expr.tree(),
    ///            "Root: BinaryOp (+)\n  Left: Number (1)\n  Right: Number (2)\n");
    /// ```
    #[must_use]
    pub fn tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0, "Root");
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize, label: &str) {
        use std::fmt::Write;

        let indent = "  ".repeat(depth);
        // Writing into a `String` cannot fail.
        let _ = match self {
            Self::Number(value) => writeln!(out, "{indent}{label}: Number ({value})"),
            Self::BinaryOp { op, .. } => writeln!(out, "{indent}{label}: BinaryOp ({op})"),
            _ => writeln!(out, "{indent}{label}: {}", self.kind_name()),
        };

        let depth = depth + 1;
        match self {
            Self::Number(_) | Self::MemAccess => {},
            Self::BinaryOp { left, right, .. } => {
                left.write_tree(out, depth, "Left");
                right.write_tree(out, depth, "Right");
            },
            Self::MemStore { value } => value.write_tree(out, depth, "Value"),
            Self::ResAccess { index } => index.write_tree(out, depth, "Index"),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                condition.write_tree(out, depth, "Condition");
                then_branch.write_tree(out, depth, "Then");
                if let Some(else_branch) = else_branch {
                    else_branch.write_tree(out, depth, "Else");
                }
            },
            Self::For(header) => {
                header.var.write_tree(out, depth, "Var");
                header.start.write_tree(out, depth, "Start");
                header.end.write_tree(out, depth, "End");
                if let Some(step) = &header.step {
                    step.write_tree(out, depth, "Step");
                }
                header.body.write_tree(out, depth, "Body");
            },
        }
    }
}

/// Formats the expression as canonical source text, which parses back into an
/// equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {right} {op})"),
            Self::MemAccess => f.write_str("(MEM)"),
            Self::MemStore { value } => write!(f, "({value} MEM)"),
            Self::ResAccess { index } => write!(f, "({index} RES)"),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                write!(f, "(SE {condition} ENTAO {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " SENAO {else_branch}")?;
                }
                f.write_str(")")
            },
            Self::For(header) => {
                write!(f,
                       "(PARA {} DE {} ATE {}",
                       header.var, header.start, header.end)?;
                if let Some(step) = &header.step {
                    write!(f, " PASSO {step}")?;
                }
                write!(f, " {})", header.body)
            },
        }
    }
}
