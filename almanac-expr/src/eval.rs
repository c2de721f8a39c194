//! Expression evaluation

use std::collections::HashMap;

use crate::ast::{BinOp, Expr, UnaryOp};
use crate::error::ExprError;
use crate::parser::parse_expr;

/// Evaluate an expression against a set of named variables.
///
/// Arithmetic follows IEEE 754: division by zero yields infinities or NaN
/// rather than an error.
pub fn eval(expr: &Expr, vars: &HashMap<String, f64>) -> Result<f64, ExprError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Variable(name) => vars
            .get(name)
            .copied()
            .ok_or_else(|| ExprError::UndefinedVariable(name.clone())),
        Expr::Unary(UnaryOp::Neg, inner) => Ok(-eval(inner, vars)?),
        Expr::Binary(left, op, right) => {
            let a = eval(left, vars)?;
            let b = eval(right, vars)?;
            Ok(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => a / b,
                BinOp::Rem => a % b,
                BinOp::Pow => a.powf(b),
            })
        }
        Expr::Call(name, args) => {
            let values: Vec<f64> = args
                .iter()
                .map(|arg| eval(arg, vars))
                .collect::<Result<_, _>>()?;
            call_builtin(name, &values)
        }
    }
}

/// Parse and evaluate in one step
pub fn eval_str(input: &str, vars: &HashMap<String, f64>) -> Result<f64, ExprError> {
    let expr = parse_expr(input)?;
    eval(&expr, vars)
}

fn call_builtin(name: &str, args: &[f64]) -> Result<f64, ExprError> {
    let one = |f: fn(f64) -> f64| -> Result<f64, ExprError> {
        if args.len() != 1 {
            return Err(ExprError::ArgCount {
                name: name.to_string(),
                expected: 1,
                got: args.len(),
            });
        }
        Ok(f(args[0]))
    };
    let two = |f: fn(f64, f64) -> f64| -> Result<f64, ExprError> {
        if args.len() != 2 {
            return Err(ExprError::ArgCount {
                name: name.to_string(),
                expected: 2,
                got: args.len(),
            });
        }
        Ok(f(args[0], args[1]))
    };

    match name {
        "sin" => one(f64::sin),
        "cos" => one(f64::cos),
        "tan" => one(f64::tan),
        "asin" => one(f64::asin),
        "acos" => one(f64::acos),
        "atan" => one(f64::atan),
        "sinh" => one(f64::sinh),
        "cosh" => one(f64::cosh),
        "tanh" => one(f64::tanh),
        "exp" => one(f64::exp),
        "ln" | "log" => one(f64::ln),
        "log10" => one(f64::log10),
        "log2" => one(f64::log2),
        "sqrt" => one(f64::sqrt),
        "cbrt" => one(f64::cbrt),
        "abs" => one(f64::abs),
        "floor" => one(f64::floor),
        "ceil" => one(f64::ceil),
        "round" => one(f64::round),
        "atan2" => two(f64::atan2),
        "min" => two(f64::min),
        "max" => two(f64::max),
        "pow" => two(f64::powf),
        _ => Err(ExprError::UnknownFunction(name.to_string())),
    }
}
