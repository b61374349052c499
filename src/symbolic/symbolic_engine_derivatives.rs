//! # Symbolic Engine Derivatives Module
//!
//! Analytical differentiation of [`Expr`] trees with respect to `x`.
//!
//! ## Purpose
//!
//! - **Analytical Differentiation**: recursive rule application, every intermediate node is
//!   built through the simplifying constructors so the result is already in its short form
//! - **Pipeline helpers**: `differentiate` goes from text to the printed derivative,
//!   `differentiate_batch` does the same for many inputs at once on the rayon thread pool
//!
//! ## Rules
//!
//! - `d(c)/dx = 0`, `d(x)/dx = 1`, `d(y)/dx = 0` for any other letter
//! - sum rule: `d(u + v) = du + dv`
//! - product rule: `d(u * v) = u * dv + v * du`
//! - power rule: `d(u ^ n) = n * u ^ (n - 1) * du`
//!
//! The power rule assumes the exponent does not depend on `x`. This is not checked: `x ^ x`
//! differentiates to `x * x ^ (x - 1)`, which is wrong but deterministic.
//! There is no rule for `-`, deriving a `Minus` node is an `UnsupportedOperator` error.

use crate::symbolic::parse_expr::{DEFAULT_MAX_DEPTH, parse_with_depth};
use crate::symbolic::symbolic_engine::{BinaryOperator, DIFF_VARIABLE, Expr, render};
use crate::symbolic::symbolic_error::{DiffError, Result};
use crate::symbolic::symbolic_simplify::{add, multiply, raise_power, subtract};
use log::{debug, info};
use rayon::prelude::*;

/// Derivation of `expr` with respect to `x`
/// ```text
/// d(expr)
/// -------
///   dx
/// ```
pub fn derive(expr: &Expr) -> Result<Expr> {
    derive_with_depth(expr, DEFAULT_MAX_DEPTH)
}

/// Same as [`derive`] with an explicit nesting limit
pub fn derive_with_depth(expr: &Expr, max_depth: usize) -> Result<Expr> {
    derive_rec(expr, 0, max_depth)
}

fn derive_rec(expr: &Expr, depth: usize, max_depth: usize) -> Result<Expr> {
    if depth >= max_depth {
        return Err(DiffError::DepthExceeded { limit: max_depth });
    }
    let d = |e: &Expr| derive_rec(e, depth + 1, max_depth);
    match expr {
        Expr::Number(_) => Ok(Expr::integer(0)),
        Expr::Variable(name) if *name == DIFF_VARIABLE => Ok(Expr::integer(1)),
        Expr::Variable(_) => Ok(Expr::integer(0)),
        Expr::BinaryOp(op, lhs, rhs) => {
            let (lhs, rhs): (&Expr, &Expr) = (lhs, rhs);
            match op {
                BinaryOperator::Plus => Ok(add(d(lhs)?, d(rhs)?)),
                BinaryOperator::Multiply => {
                    let (dlhs, drhs) = (d(lhs)?, d(rhs)?);
                    Ok(add(
                        multiply(lhs.clone(), drhs),
                        multiply(rhs.clone(), dlhs),
                    ))
                }
                BinaryOperator::Power => {
                    // d(u^n)                du
                    // ----- = n*(u^(n-1))* ----
                    //  dx                   dx
                    let n_minus_one = subtract(rhs.clone(), Expr::integer(1));
                    let coefficient = multiply(rhs.clone(), raise_power(lhs.clone(), n_minus_one));
                    Ok(multiply(coefficient, d(lhs)?))
                }
                BinaryOperator::Minus => Err(DiffError::UnsupportedOperator(*op)),
            }
        }
    }
}

impl Expr {
    /// Derivative with respect to `x`, see [`derive`]
    pub fn diff(&self) -> Result<Expr> {
        derive(self)
    }
}

/// parse -> derive -> render for one formula
pub fn differentiate(text: &str) -> Result<String> {
    differentiate_with_depth(text, DEFAULT_MAX_DEPTH)
}

pub fn differentiate_with_depth(text: &str, max_depth: usize) -> Result<String> {
    let parsed = parse_with_depth(text, max_depth)?;
    debug!("parsed {:?} into {:?}, {} levels", text, parsed, parsed.depth());
    let derived = derive_with_depth(&parsed, max_depth)?;
    Ok(render(&derived))
}

/// Differentiates independent formulas in parallel, results keep the order of `inputs`
pub fn differentiate_batch<S: AsRef<str> + Sync>(
    inputs: &[S],
    max_depth: usize,
) -> Vec<Result<String>> {
    info!("differentiating {} formulas", inputs.len());
    inputs
        .par_iter()
        .map(|text| differentiate_with_depth(text.as_ref(), max_depth))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::parse_expr::parse;

    fn d(text: &str) -> Expr {
        derive(&parse(text).unwrap()).unwrap()
    }

    #[test]
    fn test_derive_leaves() {
        assert_eq!(derive(&Expr::float(5.6)).unwrap(), Expr::integer(0));
        assert_eq!(derive(&Expr::Variable('x')).unwrap(), Expr::integer(1));
        assert_eq!(derive(&Expr::Variable('y')).unwrap(), Expr::integer(0));
        for c in ('a'..='z').filter(|c| *c != 'x') {
            assert_eq!(d(&c.to_string()), Expr::integer(0));
        }
    }

    #[test]
    fn test_derive_sums_and_products() {
        assert_eq!(d("x + y"), Expr::integer(1));
        assert_eq!(d("4*x + 3*y"), Expr::integer(4));
        assert_eq!(d("x*y"), Expr::Variable('y'));
        assert_eq!(
            d("x*x"),
            Expr::binary(BinaryOperator::Plus, Expr::Variable('x'), Expr::Variable('x'))
        );
        assert_eq!(d("2.5*x"), Expr::float(2.5));
    }

    #[test]
    fn test_power_rule() {
        assert_eq!(
            d("3*x^4"),
            Expr::binary(
                BinaryOperator::Multiply,
                Expr::integer(12),
                Expr::binary(BinaryOperator::Power, Expr::Variable('x'), Expr::integer(3))
            )
        );
        assert_eq!(
            d("x^2"),
            Expr::binary(BinaryOperator::Multiply, Expr::integer(2), Expr::Variable('x'))
        );
        assert_eq!(d("x^1"), Expr::integer(1));
        assert_eq!(d("y^3"), Expr::integer(0));
        assert_eq!(
            d("x^2.5"),
            Expr::binary(
                BinaryOperator::Multiply,
                Expr::float(2.5),
                Expr::binary(BinaryOperator::Power, Expr::Variable('x'), Expr::float(1.5))
            )
        );
    }

    #[test]
    fn test_x_dependent_exponent_is_not_detected() {
        let x = Expr::Variable('x');
        let expected = Expr::binary(
            BinaryOperator::Multiply,
            x.clone(),
            Expr::binary(
                BinaryOperator::Power,
                x.clone(),
                Expr::binary(BinaryOperator::Minus, x.clone(), Expr::integer(1)),
            ),
        );
        assert_eq!(d("x^x"), expected);
    }

    #[test]
    fn test_minus_is_unsupported() {
        let expr = subtract(Expr::Variable('x'), Expr::Variable('y'));
        assert_eq!(
            derive(&expr),
            Err(DiffError::UnsupportedOperator(BinaryOperator::Minus))
        );
        assert_eq!(
            derive(&expr).unwrap_err().to_string(),
            "unsupported operator '-'"
        );
    }

    #[test]
    fn test_derive_is_pure() {
        let expr = parse("3*x^4 + y*x").unwrap();
        let snapshot = expr.clone();
        let first = derive(&expr).unwrap();
        let second = expr.diff().unwrap();
        assert_eq!(first, second);
        assert_eq!(expr, snapshot);
    }

    #[test]
    fn test_derive_depth_guard() {
        let expr = parse("x*x*x*x*x").unwrap();
        assert!(derive_with_depth(&expr, 5).is_ok());
        assert_eq!(
            derive_with_depth(&expr, 4),
            Err(DiffError::DepthExceeded { limit: 4 })
        );
    }

    #[test]
    fn test_differentiate_renders() {
        assert_eq!(differentiate("x + y").unwrap(), "1");
        assert_eq!(differentiate("3*x^4").unwrap(), "12 * x ^ 3");
        assert_eq!(differentiate("x*y + x").unwrap(), "y + 1");
        assert!(differentiate("x - 1").is_err());
    }

    #[test]
    fn test_differentiate_batch_keeps_order() {
        let inputs = vec!["x", "y", "4*x + 3*y", "x/2", "x^3"];
        let results = differentiate_batch(&inputs, DEFAULT_MAX_DEPTH);
        assert_eq!(results.len(), inputs.len());
        assert_eq!(results[0], Ok("1".to_string()));
        assert_eq!(results[1], Ok("0".to_string()));
        assert_eq!(results[2], Ok("4".to_string()));
        assert!(matches!(results[3], Err(DiffError::Parse { .. })));
        assert_eq!(results[4], Ok("3 * x ^ 2".to_string()));
    }

    #[test]
    fn test_batch_chains_just_under_the_default_depth() {
        let terms = DEFAULT_MAX_DEPTH - 1;
        let inputs: Vec<String> = ["+", "*", "^"]
            .iter()
            .map(|op| vec!["x"; terms].join(op))
            .collect();
        let results = differentiate_batch(&inputs, DEFAULT_MAX_DEPTH);
        assert_eq!(results[0], Ok(terms.to_string()));
        assert!(results[1].is_ok());
        assert!(results[2].is_ok());
        let too_deep = vec!["x"; DEFAULT_MAX_DEPTH + 1].join("+");
        assert_eq!(
            differentiate_batch(&[too_deep], DEFAULT_MAX_DEPTH)[0],
            Err(DiffError::DepthExceeded {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }
}
