//! Expression AST

/// A parsed arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Named variable, resolved at evaluation time
    Variable(String),
    /// Unary operation
    Unary(UnaryOp, Box<Expr>),
    /// Binary operation
    Binary(Box<Expr>, BinOp, Box<Expr>),
    /// Function call: name(arg, ...)
    Call(String, Vec<Expr>),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}
