//! # Symbolic Expression Simplification Module
//!
//! Simplification here happens at construction time. Each of the four constructors takes two
//! operands and returns the smallest expression it can prove equal to `lhs op rhs`, so a tree
//! built only through them never holds a node like `0 + e` or `1 * e`.
//!
//! ## Rules
//!
//! | constructor   | rules, applied in this order                                              |
//! |---------------|---------------------------------------------------------------------------|
//! | `add`         | `0 + r = r`, `l + 0 = l`, constant folding                                |
//! | `multiply`    | `0 * r = l * 0 = 0`, `1 * r = r`, `l * 1 = l`, constant folding, coefficient folding |
//! | `subtract`    | `l - 0 = l`, constant folding (`0 - r` is kept as is)                     |
//! | `raise_power` | `l ^ 0 = 1`, `l ^ 1 = l`, `0 ^ r = 0` (so `0 ^ 0 = 1`)                    |
//!
//! Coefficient folding merges a constant into a product whose left factor is a constant:
//! `3 * (4 * e)` becomes `12 * e`.

use crate::symbolic::symbolic_engine::{BinaryOperator, Expr};
use crate::symbolic::symbolic_number::Number;
use log::trace;

/// `lhs + rhs`
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_zero() {
        return rhs;
    }
    if rhs.is_zero() {
        return lhs;
    }
    match (lhs, rhs) {
        (Expr::Number(a), Expr::Number(b)) => Expr::Number(a + b),
        (lhs, rhs) => Expr::binary(BinaryOperator::Plus, lhs, rhs),
    }
}

/// `lhs * rhs`
pub fn multiply(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_zero() || rhs.is_zero() {
        return Expr::integer(0);
    }
    if lhs.is_one() {
        return rhs;
    }
    if rhs.is_one() {
        return lhs;
    }
    match (lhs, rhs) {
        (Expr::Number(a), Expr::Number(b)) => Expr::Number(a * b),
        (Expr::Number(a), rhs) => match split_coefficient(rhs) {
            Ok((k, rest)) => multiply(Expr::Number(a * k), rest),
            Err(rhs) => Expr::binary(BinaryOperator::Multiply, Expr::Number(a), rhs),
        },
        (lhs, Expr::Number(b)) => match split_coefficient(lhs) {
            Ok((k, rest)) => multiply(Expr::Number(k * b), rest),
            Err(lhs) => Expr::binary(BinaryOperator::Multiply, lhs, Expr::Number(b)),
        },
        (lhs, rhs) => Expr::binary(BinaryOperator::Multiply, lhs, rhs),
    }
}

// k * e -> Ok((k, e)), anything else is handed back unchanged
fn split_coefficient(expr: Expr) -> std::result::Result<(Number, Expr), Expr> {
    match expr {
        Expr::BinaryOp(BinaryOperator::Multiply, lhs, rhs) => match *lhs {
            Expr::Number(k) => {
                trace!("folding coefficient {} of {}", k, rhs);
                Ok((k, *rhs))
            }
            lhs => Err(Expr::BinaryOp(BinaryOperator::Multiply, Box::new(lhs), rhs)),
        },
        other => Err(other),
    }
}

/// `lhs - rhs`
pub fn subtract(lhs: Expr, rhs: Expr) -> Expr {
    if rhs.is_zero() {
        return lhs;
    }
    match (lhs, rhs) {
        (Expr::Number(a), Expr::Number(b)) => Expr::Number(a - b),
        (lhs, rhs) => Expr::binary(BinaryOperator::Minus, lhs, rhs),
    }
}

/// `lhs ^ rhs`, constant powers are not evaluated
pub fn raise_power(lhs: Expr, rhs: Expr) -> Expr {
    if rhs.is_zero() {
        return Expr::integer(1);
    }
    if rhs.is_one() {
        return lhs;
    }
    if lhs.is_zero() {
        return Expr::integer(0);
    }
    Expr::binary(BinaryOperator::Power, lhs, rhs)
}
