//! a module turns a String expression into a symbolic expression
//!# Example
//! ```
//! use RustedSymDiff::symbolic::parse_expr::parse;
//! let parsed_expression = parse("4*x + -2*z").unwrap();
//! println!(" parsed_expression {}", parsed_expression);
//! ```
use crate::symbolic::symbolic_engine::{BinaryOperator, Expr};
use crate::symbolic::symbolic_error::{DiffError, Result};
use crate::symbolic::symbolic_number::Number;
use log::trace;
use num::BigInt;
use std::collections::HashMap;

//                  search diagram for "y+x*2^3"
//                |_________________________________|
//                |   variable? number?    no       |
//                |_________________________________|
//                |    split at first  +            |
//                |_________________________________|
//                |       y     |     x*2^3         |
//                |  variable   |   split at *      |
//                |_____________|___________________|
//                              |   x   |   2^3     |
//                              |       | split ^   |
//                              |_______|___________|
// There is no precedence: the operators are tried in the fixed order + * ^ and the split always
// happens at the FIRST occurrence of the operator in the whole remaining text, so the remainder
// is right associated (a+b+c -> a+(b+c)). If one side of a split does not parse, the next
// operator is tried. `-` only ever appears as the sign of a number.

/// Maximal nesting accepted by `parse` and `derive`, small enough for a 2 MB thread stack
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// operators in the order the parser tries them
const SPLIT_ORDER: [BinaryOperator; 3] = [
    BinaryOperator::Plus,
    BinaryOperator::Multiply,
    BinaryOperator::Power,
];

/// Parses an input formula to derive.
pub fn parse(text: &str) -> Result<Expr> {
    parse_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Same as [`parse`] with an explicit nesting limit
pub fn parse_with_depth(text: &str, max_depth: usize) -> Result<Expr> {
    let input: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if input.is_empty() {
        return Err(DiffError::parse(text, "empty expression"));
    }
    let mut parser = Parser::new(&input, max_depth);
    let parsed = parser.expression(0, input.len(), 0);
    trace!("{} operands memoized for {}", parser.memo.len(), input);
    parsed
}

/// start and end byte offsets of an operand, and the depth it is parsed at
type SpanKey = (usize, usize, usize);

/// Parser over the whitespace free input. Every operand is parsed at most once per depth,
/// a failed split retried by the next operator reuses what the previous one found.
struct Parser<'a> {
    input: &'a str,
    max_depth: usize,
    /// None marks a grammar failure
    memo: HashMap<SpanKey, Option<Expr>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, max_depth: usize) -> Self {
        Parser {
            input,
            max_depth,
            memo: HashMap::new(),
        }
    }

    fn expression(&mut self, start: usize, end: usize, depth: usize) -> Result<Expr> {
        if depth >= self.max_depth {
            return Err(DiffError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        let input = self.input;
        let text = &input[start..end];
        if text.is_empty() {
            return Err(DiffError::parse(text, "missing operand"));
        }
        if let Some(var) = parse_variable(text) {
            return Ok(var);
        }
        if let Some(number) = parse_number(text) {
            return Ok(number);
        }
        for op in SPLIT_ORDER {
            if let Some(expr) = self.binary_operator(start, end, op, depth)? {
                return Ok(expr);
            }
        }
        Err(DiffError::parse(text, "no grammar alternative matches"))
    }

    /// split at the first `op`, Ok(None) when the operator is absent or a side is malformed
    fn binary_operator(
        &mut self,
        start: usize,
        end: usize,
        op: BinaryOperator,
        depth: usize,
    ) -> Result<Option<Expr>> {
        let input = self.input;
        let symbol = op.symbol();
        let Some(offset) = input[start..end].find(symbol) else {
            return Ok(None);
        };
        let (split, right_start) = (start + offset, start + offset + symbol.len());
        trace!(
            "SIGN '{}' in {}: left: {}, right: {}",
            op,
            &input[start..end],
            &input[start..split],
            &input[right_start..end]
        );
        let Some(lhs) = self.operand(start, split, depth)? else {
            return Ok(None);
        };
        let Some(rhs) = self.operand(right_start, end, depth)? else {
            return Ok(None);
        };
        Ok(Some(Expr::binary(op, lhs, rhs)))
    }

    // grammar failures let the caller try the next operator, depth failures abort the whole parse
    fn operand(&mut self, start: usize, end: usize, depth: usize) -> Result<Option<Expr>> {
        let key = (start, end, depth + 1);
        if let Some(known) = self.memo.get(&key) {
            return Ok(known.clone());
        }
        let parsed = match self.expression(start, end, depth + 1) {
            Ok(expr) => Some(expr),
            Err(DiffError::Parse { .. }) => None,
            Err(e) => return Err(e),
        };
        self.memo.insert(key, parsed.clone());
        Ok(parsed)
    }
}

/// single lowercase english letter
fn parse_variable(input: &str) -> Option<Expr> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Expr::variable(c).ok(),
        _ => None,
    }
}

/// optional `-`, then digits (integer) or digits with one `.` (float): `1`, `-2.5`, `.0`, `5.`
fn parse_number(input: &str) -> Option<Expr> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    if all_digits(digits) {
        let value: BigInt = digits.parse().ok()?;
        let value = if negative { -value } else { value };
        return Some(Expr::Number(Number::Integer(value)));
    }
    let (whole, fraction) = digits.split_once('.')?;
    let without_period = format!("{}{}", whole, fraction);
    if all_digits(&without_period) {
        let value: f64 = digits.parse().ok()?;
        let value = if negative { -value } else { value };
        return Some(Expr::Number(Number::Float(value)));
    }
    None
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
