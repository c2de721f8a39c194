//! Expression parser (simple recursive descent)
//!
//! Operators are found by scanning for the split point at paren depth
//! zero, then recursing on both sides. Additive and multiplicative
//! operators are scanned right-to-left (left associative), `^` is scanned
//! left-to-right (right associative).

use crate::ast::{BinOp, Expr, UnaryOp};
use crate::error::ExprError;

/// Parse an expression string into an AST
pub fn parse_expr(input: &str) -> Result<Expr, ExprError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExprError::Parse("empty expression".to_string()));
    }

    parse_additive(input)
}

fn parse_additive(input: &str) -> Result<Expr, ExprError> {
    // Find + or - not inside parentheses
    let mut paren_depth = 0;

    // Collect (byte_offset, char) pairs to handle multi-byte UTF-8 correctly
    let char_indices: Vec<(usize, char)> = input.char_indices().collect();

    for idx in (0..char_indices.len()).rev() {
        let (byte_pos, c) = char_indices[idx];
        match c {
            ')' => paren_depth += 1,
            '(' => paren_depth -= 1,
            '+' | '-' if paren_depth == 0 && idx > 0 => {
                let prev = char_indices[idx - 1].1;
                // "1e-5" is one number, not a subtraction
                let in_exponent = (prev == 'e' || prev == 'E')
                    && idx >= 2
                    && (char_indices[idx - 2].1.is_ascii_digit() || char_indices[idx - 2].1 == '.');
                // "2*-3" leaves the sign to the right operand
                let after_operator = matches!(prev, '+' | '-' | '*' | '/' | '%' | '^');
                if in_exponent || after_operator {
                    continue;
                }

                let left = input[..byte_pos].trim();
                let right = input[byte_pos + c.len_utf8()..].trim();
                if !left.is_empty() && !right.is_empty() {
                    let op = if c == '+' { BinOp::Add } else { BinOp::Sub };
                    return Ok(Expr::Binary(
                        Box::new(parse_additive(left)?),
                        op,
                        Box::new(parse_multiplicative(right)?),
                    ));
                }
            }
            _ => {}
        }
    }

    parse_multiplicative(input)
}

fn parse_multiplicative(input: &str) -> Result<Expr, ExprError> {
    let mut paren_depth = 0;

    let char_indices: Vec<(usize, char)> = input.char_indices().collect();

    for idx in (0..char_indices.len()).rev() {
        let (byte_pos, c) = char_indices[idx];
        match c {
            ')' => paren_depth += 1,
            '(' => paren_depth -= 1,
            '*' | '/' | '%' if paren_depth == 0 => {
                let left = input[..byte_pos].trim();
                let right = input[byte_pos + c.len_utf8()..].trim();
                if !left.is_empty() && !right.is_empty() {
                    let op = match c {
                        '*' => BinOp::Mul,
                        '/' => BinOp::Div,
                        _ => BinOp::Rem,
                    };
                    return Ok(Expr::Binary(
                        Box::new(parse_multiplicative(left)?),
                        op,
                        Box::new(parse_power(right)?),
                    ));
                }
            }
            _ => {}
        }
    }

    parse_power(input)
}

fn parse_power(input: &str) -> Result<Expr, ExprError> {
    let input = input.trim();

    // Unary minus binds looser than '^': -x^2 is -(x^2). Plain number
    // literals keep their sign.
    if let Some(rest) = input.strip_prefix('-') {
        if input.parse::<f64>().is_err() {
            return Ok(Expr::Unary(UnaryOp::Neg, Box::new(parse_power(rest)?)));
        }
    }

    let mut paren_depth = 0;

    let char_indices: Vec<(usize, char)> = input.char_indices().collect();

    for idx in 0..char_indices.len() {
        let (byte_pos, c) = char_indices[idx];
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            '^' if paren_depth == 0 => {
                let left = input[..byte_pos].trim();
                let right = input[byte_pos + c.len_utf8()..].trim();
                if !left.is_empty() && !right.is_empty() {
                    return Ok(Expr::Binary(
                        Box::new(parse_primary(left)?),
                        BinOp::Pow,
                        Box::new(parse_power(right)?),
                    ));
                }
            }
            _ => {}
        }
    }

    parse_primary(input)
}

fn parse_primary(input: &str) -> Result<Expr, ExprError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ExprError::Parse("empty expression".to_string()));
    }

    // Negation of anything that is not a plain number literal
    if let Some(rest) = input.strip_prefix('-') {
        if input.parse::<f64>().is_err() {
            return Ok(Expr::Unary(UnaryOp::Neg, Box::new(parse_primary(rest)?)));
        }
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_primary(rest);
    }

    // Parentheses
    if input.starts_with('(') && input.ends_with(')') {
        return parse_expr(&input[1..input.len() - 1]);
    }

    // Function call - need to find matching closing parenthesis
    if let Some(paren_pos) = input.find('(') {
        let func_name = input[..paren_pos].trim();
        let after_open = &input[paren_pos + 1..];
        let mut depth = 1;
        let mut close_pos = None;
        for (i, c) in after_open.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close_pos = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        match close_pos {
            Some(close_idx) if after_open[close_idx + 1..].trim().is_empty() => {
                if func_name.is_empty() || !is_identifier(func_name) {
                    return Err(ExprError::Parse(format!("bad function call: {}", input)));
                }
                let args = parse_args(&after_open[..close_idx])?;
                return Ok(Expr::Call(func_name.to_string(), args));
            }
            _ => {
                return Err(ExprError::Parse(format!("unbalanced parentheses: {}", input)));
            }
        }
    }

    // Number (including scientific notation)
    if let Ok(n) = input.parse::<f64>() {
        return Ok(Expr::Number(n));
    }

    // Variable
    if is_identifier(input) {
        return Ok(Expr::Variable(input.to_string()));
    }

    Err(ExprError::Parse(format!("unexpected token: {}", input)))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn parse_args(input: &str) -> Result<Vec<Expr>, ExprError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut args = Vec::new();
    let mut paren_depth = 0;
    let mut current_start = 0;

    for (byte_pos, c) in input.char_indices() {
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            ',' if paren_depth == 0 => {
                args.push(parse_expr(&input[current_start..byte_pos])?);
                current_start = byte_pos + c.len_utf8();
            }
            _ => {}
        }
    }

    args.push(parse_expr(&input[current_start..])?);
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_expr("42").unwrap(), Expr::Number(42.0));
        assert_eq!(parse_expr("-2.5").unwrap(), Expr::Number(-2.5));
        assert_eq!(parse_expr("1e-5").unwrap(), Expr::Number(1e-5));
    }

    #[test]
    fn test_parse_variable() {
        assert_eq!(parse_expr("x").unwrap(), Expr::Variable("x".to_string()));
        assert_eq!(parse_expr("m_e").unwrap(), Expr::Variable("m_e".to_string()));
    }

    #[test]
    fn test_parse_precedence() {
        // 2 + 3 * 4 groups as 2 + (3 * 4)
        let expr = parse_expr("2+3*4").unwrap();
        match expr {
            Expr::Binary(_, BinOp::Add, right) => {
                assert!(matches!(*right, Expr::Binary(_, BinOp::Mul, _)));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_parse_parens_override() {
        // (2 + 3) * 4 groups as (2 + 3) * 4
        let expr = parse_expr("(2+3)*4").unwrap();
        match expr {
            Expr::Binary(left, BinOp::Mul, _) => {
                assert!(matches!(*left, Expr::Binary(_, BinOp::Add, _)));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_parse_power_right_assoc() {
        // 2^3^2 groups as 2^(3^2)
        let expr = parse_expr("2^3^2").unwrap();
        match expr {
            Expr::Binary(_, BinOp::Pow, right) => {
                assert!(matches!(*right, Expr::Binary(_, BinOp::Pow, _)));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_parse_call() {
        let expr = parse_expr("atan2(y, x)").unwrap();
        match expr {
            Expr::Call(name, args) => {
                assert_eq!(name, "atan2");
                assert_eq!(args.len(), 2);
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unary_neg() {
        let expr = parse_expr("-sin(x)").unwrap();
        assert!(matches!(expr, Expr::Unary(UnaryOp::Neg, _)));
    }

    #[test]
    fn test_parse_neg_binds_looser_than_power() {
        // -x^2 groups as -(x^2)
        let expr = parse_expr("-x^2").unwrap();
        match expr {
            Expr::Unary(UnaryOp::Neg, inner) => {
                assert!(matches!(*inner, Expr::Binary(_, BinOp::Pow, _)));
            }
            other => panic!("unexpected shape: {:?}", other),
        }

        // a negative exponent stays with the exponent
        let expr = parse_expr("2^-3").unwrap();
        match expr {
            Expr::Binary(_, BinOp::Pow, right) => {
                assert_eq!(*right, Expr::Number(-3.0));
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_expr("").is_err());
        assert!(parse_expr("2*").is_err());
        assert!(parse_expr("sin(x").is_err());
        assert!(parse_expr("3 @ 4").is_err());
    }
}
