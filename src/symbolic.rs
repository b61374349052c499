#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedSymDiff::symbolic::parse_expr::parse;
/// let input = "4*x + -2*z";
/// let parsed_expression = parse(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
///  ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the expression tree (numbers, one-letter variables, binary operations)
/// 2) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```
/// use RustedSymDiff::symbolic::parse_expr::parse;
/// use RustedSymDiff::symbolic::symbolic_engine::render;
/// use RustedSymDiff::symbolic::symbolic_engine_derivatives::derive;
/// let parsed_expression = parse("3*x^4 + y").unwrap();
/// // differentiate with respect to x
/// let df_dx = derive(&parsed_expression).unwrap();
/// assert_eq!(render(&df_dx), "12 * x ^ 3");
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
pub mod symbolic_error;
pub mod symbolic_number;
///______________________________________________________________________________________________________________________________________________
/// simplifying constructors: `add`, `multiply`, `subtract`, `raise_power` fold trivial cases while the tree is built
/// _____________________________________________________________________________________________________________________________________________
pub mod symbolic_simplify;
