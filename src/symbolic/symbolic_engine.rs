//! # Symbolic Engine Module
//!
//! Core expression type of the crate. A formula like `3*x^4 + y` is held as a tree of
//! [`Expr`] nodes which the parser builds, the derivative engine consumes and produces,
//! and `Display` turns back into text.
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! - **Numbers**: `Number(Number)` - integer or float constants, see `symbolic_number`
//! - **Variables**: `Variable(char)` - one lowercase letter, `x` is the differentiation variable
//! - **Operations**: `BinaryOp(BinaryOperator, Box<Expr>, Box<Expr>)` - `+`, `-`, `*`, `^`
//!
//! ### `BinaryOperator` Enum
//! The four operators with their printed symbols (strum `Display`).
//!
//! ## Interesting Code Features
//!
//! 1. **Strict tree**: children are owned through `Box<Expr>`, nothing is shared
//!
//! 2. **Operator Overloading**: `std::ops::{Add, Sub, Mul}` on `Expr` go through the simplifying
//!    constructors, so `x + Expr::integer(0)` is just `x`
//!
//! 3. **Printing without parentheses**: `x * y + z` and `x * (y + z)` print the same way,
//!    the printed form is meant for reading, not for parsing back

use crate::symbolic::symbolic_error::{DiffError, Result};
use crate::symbolic::symbolic_number::Number;
use crate::symbolic::symbolic_simplify::{add, multiply, raise_power, subtract};
use std::fmt;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The differentiation variable
pub const DIFF_VARIABLE: char = 'x';

/// Binary operators known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum BinaryOperator {
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "^")]
    Power,
}

impl BinaryOperator {
    /// printed and parsed form, the strum `serialize` string
    pub fn symbol(&self) -> &'static str {
        self.into()
    }
}

/// Symbolic expression tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedSymDiff::symbolic::symbolic_engine::{BinaryOperator, Expr};
/// let x_plus_4 = Expr::binary(BinaryOperator::Plus, Expr::Variable('x'), Expr::integer(4));
/// assert_eq!(x_plus_4.to_string(), "x + 4");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// numerical constant
    Number(Number),
    /// single lowercase letter
    Variable(char),
    /// operator with its left and right operands
    BinaryOp(BinaryOperator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn integer(value: i64) -> Expr {
        Expr::Number(Number::integer(value))
    }

    pub fn float(value: f64) -> Expr {
        Expr::Number(Number::float(value))
    }

    /// Checked variable constructor: only `a`..`z` are variables
    pub fn variable(name: char) -> Result<Expr> {
        if name.is_ascii_lowercase() {
            Ok(Expr::Variable(name))
        } else {
            Err(DiffError::parse(
                &name.to_string(),
                "variable must be a single lowercase letter",
            ))
        }
    }

    /// Raw node, no simplification
    pub fn binary(op: BinaryOperator, lhs: Expr, rhs: Expr) -> Expr {
        Expr::BinaryOp(op, lhs.boxed(), rhs.boxed())
    }

    pub fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Number::is_zero)
    }

    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// Simplified power, see [`raise_power`]
    pub fn pow(self, exponent: Expr) -> Expr {
        raise_power(self, exponent)
    }

    /// Number of nested levels, a leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Variable(_) => 1,
            Expr::BinaryOp(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}

impl From<Number> for Expr {
    fn from(value: Number) -> Self {
        Expr::Number(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::BinaryOp(op, lhs, rhs) => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}

/// Turn an expression back into a human readable string
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        multiply(self, rhs)
    }
}
