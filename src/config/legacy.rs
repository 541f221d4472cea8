//! Reader for legacy `Namespace(key=value, ...)` config files
//!
//! Older runs persisted their arguments as the printed form of a Python
//! argparse namespace. The text is parsed into a syntax tree and only plain
//! literals are accepted; nothing is evaluated.

use rustpython_parser::ast;
use rustpython_parser::Parse;

use crate::domain::{ConfigNamespace, ParamValue};

pub fn parse_namespace_literal(source: &str) -> Result<ConfigNamespace, String> {
    let expr = ast::Expr::parse(source.trim(), "<cfg_args>").map_err(|e| e.to_string())?;

    let ast::Expr::Call(call) = expr else {
        return Err("expected a Namespace(...) call".to_string());
    };
    match call.func.as_ref() {
        ast::Expr::Name(name) if name.id.as_str() == "Namespace" => {}
        _ => return Err("expected a Namespace(...) call".to_string()),
    }
    if !call.args.is_empty() {
        return Err("positional arguments are not supported".to_string());
    }

    let mut ns = ConfigNamespace::new();
    for keyword in &call.keywords {
        let Some(name) = &keyword.arg else {
            return Err("keyword expansion is not supported".to_string());
        };
        let value = literal(&keyword.value).map_err(|reason| format!("{}: {reason}", name.as_str()))?;
        ns.insert(name.as_str(), value);
    }
    Ok(ns)
}

fn literal(expr: &ast::Expr) -> Result<Option<ParamValue>, String> {
    match expr {
        ast::Expr::Constant(c) => match &c.value {
            ast::Constant::None => Ok(None),
            ast::Constant::Bool(b) => Ok(Some(ParamValue::Bool(*b))),
            ast::Constant::Str(s) => Ok(Some(ParamValue::Str(s.clone()))),
            _ => number(expr).map(Some),
        },
        ast::Expr::UnaryOp(_) => number(expr).map(Some),
        ast::Expr::List(ast::ExprList { elts, .. }) | ast::Expr::Tuple(ast::ExprTuple { elts, .. }) => {
            let mut values = Vec::with_capacity(elts.len());
            for elt in elts {
                let value = match number(elt)? {
                    ParamValue::Int(i) => i as f64,
                    ParamValue::Float(x) => x,
                    _ => return Err("lists may only hold numbers".to_string()),
                };
                values.push(value);
            }
            Ok(Some(ParamValue::FloatList(values)))
        }
        _ => Err("unsupported expression".to_string()),
    }
}

/// An int or float constant, optionally negated.
fn number(expr: &ast::Expr) -> Result<ParamValue, String> {
    match expr {
        ast::Expr::Constant(c) => match &c.value {
            ast::Constant::Int(i) => i
                .to_string()
                .parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|_| format!("integer {i} out of range")),
            ast::Constant::Float(x) => Ok(ParamValue::Float(*x)),
            _ => Err("expected a number".to_string()),
        },
        ast::Expr::UnaryOp(op) => {
            let negate = match op.op {
                ast::UnaryOp::USub => true,
                ast::UnaryOp::UAdd => false,
                _ => return Err("unsupported unary operator".to_string()),
            };
            match number(&op.operand)? {
                ParamValue::Int(i) if negate => Ok(ParamValue::Int(-i)),
                ParamValue::Float(x) if negate => Ok(ParamValue::Float(-x)),
                other => Ok(other),
            }
        }
        _ => Err("expected a number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_printed_namespace() {
        let text = "Namespace(compute_cov3D_python=False, data_device='cuda', \
                    densify_from_iter=[500, 16000], model_path='./output/1a2b3c', \
                    position_lr_final=1.6e-06, resolution=-1, sh_degree=3, \
                    source_path='/data/nerf_llff/fern', quiet=None)";
        let ns = parse_namespace_literal(text).expect("parse");

        assert_eq!(ns.get_bool("compute_cov3D_python"), Some(false));
        assert_eq!(ns.get_str("data_device"), Some("cuda"));
        assert_eq!(ns.get_float_list("densify_from_iter"), Some(&[500.0, 16000.0][..]));
        assert_eq!(ns.get_float("position_lr_final"), Some(1.6e-06));
        assert_eq!(ns.get_int("resolution"), Some(-1));
        assert_eq!(ns.get_int("sh_degree"), Some(3));
        assert!(ns.is_null("quiet"));
        assert_eq!(ns.len(), 9);
    }

    #[test]
    fn empty_namespace() {
        assert!(parse_namespace_literal("Namespace()").expect("parse").is_empty());
    }

    #[test]
    fn negative_list_elements() {
        let ns = parse_namespace_literal("Namespace(patch_reg_finish_step=[-1])").expect("parse");
        assert_eq!(ns.get_float_list("patch_reg_finish_step"), Some(&[-1.0][..]));
    }

    #[test]
    fn calls_are_rejected() {
        assert!(parse_namespace_literal("Namespace(x=__import__('os').getcwd())").is_err());
        assert!(parse_namespace_literal("exec('print(1)')").is_err());
        assert!(parse_namespace_literal("Namespace(**opts)").is_err());
        assert!(parse_namespace_literal("Namespace('pos')").is_err());
    }

    #[test]
    fn syntax_errors_are_rejected() {
        assert!(parse_namespace_literal("Namespace(a=").is_err());
    }
}
