// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
pub mod symbolic;

pub use symbolic::parse_expr::parse;
pub use symbolic::symbolic_engine::{BinaryOperator, Expr, render};
pub use symbolic::symbolic_engine_derivatives::{derive, differentiate, differentiate_batch};
pub use symbolic::symbolic_error::DiffError;
pub use symbolic::symbolic_number::Number;
pub use symbolic::symbolic_simplify::{add, multiply, raise_power, subtract};
