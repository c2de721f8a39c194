//! Function objects built from formula strings
//!
//! Wrappers that give a parsed formula the calling convention of a plain
//! function: fix the bound variable names up front, adjust free parameters
//! between calls, then evaluate repeatedly.

use std::collections::HashMap;

use crate::ast::Expr;
use crate::error::ExprError;
use crate::eval::eval;
use crate::parser::parse_expr;

/// A real-valued function of one real variable
pub trait ScalarFunction {
    fn call(&self, x: f64) -> Result<f64, ExprError>;
}

/// Plain closures and fn pointers are scalar functions as-is
impl<F: Fn(f64) -> f64> ScalarFunction for F {
    fn call(&self, x: f64) -> Result<f64, ExprError> {
        Ok(self(x))
    }
}

/// One-variable function defined by a formula string, e.g. "a*x^2+b"
/// with bound variable "x" and parameters "a", "b".
#[derive(Debug, Clone)]
pub struct FormulaFn {
    expr: Expr,
    var: String,
    params: HashMap<String, f64>,
}

impl FormulaFn {
    pub fn new(formula: &str, var: &str) -> Result<Self, ExprError> {
        Ok(FormulaFn {
            expr: parse_expr(formula)?,
            var: var.to_string(),
            params: HashMap::new(),
        })
    }

    /// Set a free parameter. The bound variable cannot be set this way.
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<(), ExprError> {
        if name == self.var {
            return Err(ExprError::ParameterShadowsVariable(name.to_string()));
        }
        self.params.insert(name.to_string(), value);
        Ok(())
    }
}

impl ScalarFunction for FormulaFn {
    fn call(&self, x: f64) -> Result<f64, ExprError> {
        let mut vars = self.params.clone();
        vars.insert(self.var.clone(), x);
        eval(&self.expr, &vars)
    }
}

/// Two-variable analogue of [`FormulaFn`]
#[derive(Debug, Clone)]
pub struct FormulaFn2 {
    expr: Expr,
    var1: String,
    var2: String,
    params: HashMap<String, f64>,
}

impl FormulaFn2 {
    pub fn new(formula: &str, var1: &str, var2: &str) -> Result<Self, ExprError> {
        Ok(FormulaFn2 {
            expr: parse_expr(formula)?,
            var1: var1.to_string(),
            var2: var2.to_string(),
            params: HashMap::new(),
        })
    }

    pub fn set_param(&mut self, name: &str, value: f64) -> Result<(), ExprError> {
        if name == self.var1 || name == self.var2 {
            return Err(ExprError::ParameterShadowsVariable(name.to_string()));
        }
        self.params.insert(name.to_string(), value);
        Ok(())
    }

    pub fn call(&self, x: f64, y: f64) -> Result<f64, ExprError> {
        let mut vars = self.params.clone();
        vars.insert(self.var1.clone(), x);
        vars.insert(self.var2.clone(), y);
        eval(&self.expr, &vars)
    }
}

/// A system of n formulas over n variables, evaluated together.
///
/// Suitable as the right-hand side of an equation solver: inputs are bound
/// positionally to the variable names, outputs are written positionally
/// from the formulas.
#[derive(Debug, Clone)]
pub struct FormulaSystem {
    exprs: Vec<Expr>,
    vars: Vec<String>,
    params: HashMap<String, f64>,
}

impl FormulaSystem {
    pub fn new(formulas: &[&str], vars: &[&str]) -> Result<Self, ExprError> {
        if formulas.len() != vars.len() {
            return Err(ExprError::Arity {
                expected: vars.len(),
                got: formulas.len(),
            });
        }
        let exprs = formulas
            .iter()
            .map(|f| parse_expr(f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FormulaSystem {
            exprs,
            vars: vars.iter().map(|v| v.to_string()).collect(),
            params: HashMap::new(),
        })
    }

    /// Number of equations (and variables)
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn set_param(&mut self, name: &str, value: f64) -> Result<(), ExprError> {
        if self.vars.iter().any(|v| v == name) {
            return Err(ExprError::ParameterShadowsVariable(name.to_string()));
        }
        self.params.insert(name.to_string(), value);
        Ok(())
    }

    /// Evaluate all formulas at `inputs`, writing into `outputs`
    pub fn eval(&self, inputs: &[f64], outputs: &mut [f64]) -> Result<(), ExprError> {
        if inputs.len() != self.vars.len() {
            return Err(ExprError::Arity {
                expected: self.vars.len(),
                got: inputs.len(),
            });
        }
        if outputs.len() != self.exprs.len() {
            return Err(ExprError::Arity {
                expected: self.exprs.len(),
                got: outputs.len(),
            });
        }

        let mut vars = self.params.clone();
        for (name, &value) in self.vars.iter().zip(inputs) {
            vars.insert(name.clone(), value);
        }
        for (out, expr) in outputs.iter_mut().zip(&self.exprs) {
            *out = eval(expr, &vars)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_scalar_function() {
        let square = |x: f64| x * x;
        assert_eq!(square.call(3.0).unwrap(), 9.0);
    }

    #[test]
    fn test_formula_fn() {
        let mut f = FormulaFn::new("a*x^2+b", "x").unwrap();
        f.set_param("a", 2.0).unwrap();
        f.set_param("b", 1.0).unwrap();
        assert_eq!(f.call(3.0).unwrap(), 19.0);

        // Parameters can be adjusted between calls
        f.set_param("b", -1.0).unwrap();
        assert_eq!(f.call(3.0).unwrap(), 17.0);
    }

    #[test]
    fn test_formula_fn_rejects_shadowing() {
        let mut f = FormulaFn::new("x+1", "x").unwrap();
        let err = f.set_param("x", 2.0).unwrap_err();
        assert_eq!(err, ExprError::ParameterShadowsVariable("x".to_string()));
    }

    #[test]
    fn test_formula_fn_missing_param() {
        let f = FormulaFn::new("a*x", "x").unwrap();
        let err = f.call(1.0).unwrap_err();
        assert_eq!(err, ExprError::UndefinedVariable("a".to_string()));
    }

    #[test]
    fn test_formula_fn2() {
        let mut f = FormulaFn2::new("x*y+c", "x", "y").unwrap();
        f.set_param("c", 1.0).unwrap();
        assert_eq!(f.call(3.0, 4.0).unwrap(), 13.0);
        assert!(f.set_param("y", 0.0).is_err());
    }

    #[test]
    fn test_formula_system() {
        let sys = FormulaSystem::new(&["x+y", "x-y"], &["x", "y"]).unwrap();
        let mut out = [0.0; 2];
        sys.eval(&[3.0, 1.0], &mut out).unwrap();
        assert_eq!(out, [4.0, 2.0]);
    }

    #[test]
    fn test_formula_system_arity() {
        assert!(FormulaSystem::new(&["x+y"], &["x", "y"]).is_err());

        let sys = FormulaSystem::new(&["x+y", "x-y"], &["x", "y"]).unwrap();
        let mut out = [0.0; 2];
        let err = sys.eval(&[1.0], &mut out).unwrap_err();
        assert_eq!(err, ExprError::Arity { expected: 2, got: 1 });
    }
}
