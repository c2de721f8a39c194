//! Almanac Expr - arithmetic expression parsing and evaluation
//!
//! A small numeric expression language ("2*pi*r", "sqrt(x^2+y^2)") with a
//! recursive-descent parser, an evaluator over named variables, and
//! function-object wrappers ([`FormulaFn`], [`FormulaSystem`]) that turn
//! formula strings into callables suitable for solvers and integrators.

mod ast;
mod error;
mod eval;
mod funct;
mod parser;

pub use ast::{BinOp, Expr, UnaryOp};
pub use error::ExprError;
pub use eval::{eval, eval_str};
pub use funct::{FormulaFn, FormulaFn2, FormulaSystem, ScalarFunction};
pub use parser::parse_expr;
