//! # Numeric constants of the symbolic engine
//!
//! A constant is either an exact integer or a floating point number. The two kinds are kept
//! apart on purpose: `2 + 3` stays the integer `5`, while `2 + 3.0` is promoted to the float `5.0`,
//! and the printed derivative shows the difference (`5` vs `5.0`).
//!
//! Integers are arbitrary precision (`num::BigInt`), so folding constants never overflows.

use num::{BigInt, One, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Numerical constant carried by `Expr::Number`
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// exact integer constant
    Integer(BigInt),
    /// floating point constant
    Float(f64),
}

impl Number {
    pub fn integer(value: i64) -> Number {
        Number::Integer(BigInt::from(value))
    }

    pub fn float(value: f64) -> Number {
        Number::Float(value)
    }

    /// true for `0` and `0.0` (also `-0.0`)
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => i.is_zero(),
            Number::Float(f) => *f == 0.0,
        }
    }

    /// true for `1` and `1.0`
    pub fn is_one(&self) -> bool {
        match self {
            Number::Integer(i) => i.is_one(),
            Number::Float(f) => *f == 1.0,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// value as f64, integers too large for f64 become +-inf
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => int_to_f64(i),
            Number::Float(f) => *f,
        }
    }
}

fn int_to_f64(i: &BigInt) -> f64 {
    i.to_f64().unwrap_or(if i < &BigInt::zero() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

// integer op integer stays integer, anything else is promoted to float
macro_rules! promoting_op {
    ($trait_:ident, $method:ident, $op:tt) => {
        impl $trait_ for &Number {
            type Output = Number;

            fn $method(self, rhs: &Number) -> Number {
                match (self, rhs) {
                    (Number::Integer(a), Number::Integer(b)) => Number::Integer(a $op b),
                    (a, b) => Number::Float(a.to_f64() $op b.to_f64()),
                }
            }
        }

        impl $trait_ for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                &self $op &rhs
            }
        }
    };
}

promoting_op!(Add, add, +);
promoting_op!(Sub, sub, -);
promoting_op!(Mul, mul, *);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(i) => Number::Integer(-i),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", format_float(*x)),
        }
    }
}

/// Shortest round-trip form of a float that always reads as a float:
/// `10.0`, `2.5`, `-0.0`, `1e+16`, `1.5e-05`
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let s = format!("{}", value);
        if s.contains('.') { s } else { format!("{}.0", s) }
    } else {
        // rust prints 1.5e-5, we want 1.5e-05
        let s = format!("{:e}", value);
        match s.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        let sum = Number::integer(2) + Number::integer(3);
        assert_eq!(sum, Number::integer(5));
        let product = Number::integer(-4) * Number::integer(3);
        assert_eq!(product, Number::integer(-12));
        let difference = Number::integer(4) - Number::integer(1);
        assert_eq!(difference, Number::integer(3));
    }

    #[test]
    fn test_float_operand_promotes() {
        assert_eq!(Number::integer(4) * Number::float(2.5), Number::float(10.0));
        assert_eq!(Number::float(1.0) + Number::float(-2.0), Number::float(-1.0));
        let d = Number::float(1.5) - Number::float(0.5);
        assert!(!d.is_integer());
        assert_relative_eq!(d.to_f64(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_big_integers_do_not_overflow() {
        let big = Number::integer(i64::MAX) * Number::integer(i64::MAX);
        assert_eq!(big.to_string(), "85070591730234615847396907784232501249");
        assert!(big.is_integer());
    }

    #[test]
    fn test_zero_and_one_checks() {
        assert!(Number::integer(0).is_zero());
        assert!(Number::float(0.0).is_zero());
        assert!(Number::float(-0.0).is_zero());
        assert!(Number::integer(1).is_one());
        assert!(Number::float(1.0).is_one());
        assert!(!Number::float(1.5).is_one());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::integer(-7).to_string(), "-7");
        assert_eq!(Number::float(10.0).to_string(), "10.0");
        assert_eq!(Number::float(-0.0).to_string(), "-0.0");
        assert_eq!(Number::float(5.6).to_string(), "5.6");
        assert_eq!(Number::float(1e16).to_string(), "1e+16");
        assert_eq!(Number::float(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(Number::float(0.0001).to_string(), "0.0001");
    }
}
