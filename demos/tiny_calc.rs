//! A miniature calculator on top of the expression parser, showing what a
//! real client's `Element`/`TreeBuilder` implementation looks like: the
//! parser drives these two traits and never sees the `Expr` tree it is
//! building.
//!
//! Run with: `cargo run --example tiny_calc`

use lexkit::expr::{self, Element, ExpressionKind, NodePool, ParseError, TreeBuilder};

/// A classified calculator token.
#[derive(Copy, Clone, Debug)]
enum Tok {
    Num(f64),
    Add,
    Sub,
    Mul,
    Div,
    Open,
    Close,
}

impl Element for Tok {
    fn expression_kind(&self, has_expression_to_left: bool) -> ExpressionKind {
        match self {
            Tok::Num(_) => ExpressionKind::VALUE,
            // `-` is subtraction after a value and negation before one.
            Tok::Sub if !has_expression_to_left => ExpressionKind::PREFIX,
            Tok::Add | Tok::Sub | Tok::Mul | Tok::Div => ExpressionKind::BINARY_LEFT_ASSOC,
            Tok::Open => ExpressionKind::OPEN_PAREN,
            Tok::Close => ExpressionKind::CLOSE_PAREN,
        }
    }

    fn precedence(&self, has_expression_to_left: bool) -> i32 {
        match self {
            Tok::Sub if !has_expression_to_left => 1,
            Tok::Mul | Tok::Div => 2,
            _ => 3,
        }
    }

    fn paren_kind(&self) -> i32 {
        0
    }
}

/// The calculator's own tree.
#[derive(Debug)]
enum Expr {
    Num(f64),
    Neg(Box<Expr>),
    Binary(char, Box<Expr>, Box<Expr>),
    Error(String),
}

impl TreeBuilder for Tok {
    type Node = Expr;

    fn make_node(&self, left: Option<Expr>, right: Option<Expr>) -> Expr {
        match (self, left, right) {
            (Tok::Num(n), None, None) => Expr::Num(*n),
            // A parenthesis node is transparent: the tree is the bracketed
            // subtree.
            (Tok::Open, None, Some(inner)) => inner,
            (Tok::Open, None, None) => Expr::Error("empty parens".to_string()),
            (Tok::Sub, None, Some(arg)) => Expr::Neg(Box::new(arg)),
            (op, Some(l), Some(r)) => {
                let sign = match op {
                    Tok::Add => '+',
                    Tok::Sub => '-',
                    Tok::Mul => '*',
                    _ => '/',
                };
                Expr::Binary(sign, Box::new(l), Box::new(r))
            }
            (tok, _, _) => Expr::Error(format!("malformed node at {:?}", tok)),
        }
    }

    fn make_error_node(
        &self,
        error: &ParseError<Tok>,
        _left: Option<Expr>,
        _right: Option<Expr>,
    ) -> Expr {
        Expr::Error(format!("{:?} at {:?}", error.kind, error.elem))
    }
}

fn eval(e: &Expr) -> Result<f64, &str> {
    match e {
        Expr::Num(n) => Ok(*n),
        Expr::Neg(arg) => Ok(-eval(arg)?),
        Expr::Binary(op, l, r) => {
            let (l, r) = (eval(l)?, eval(r)?);
            Ok(match op {
                '+' => l + r,
                '-' => l - r,
                '*' => l * r,
                _ => l / r,
            })
        }
        Expr::Error(msg) => Err(msg.as_str()),
    }
}

fn lex(input: &str) -> Vec<Tok> {
    input
        .split_whitespace()
        .map(|s| match s {
            "+" => Tok::Add,
            "-" => Tok::Sub,
            "*" => Tok::Mul,
            "/" => Tok::Div,
            "(" => Tok::Open,
            ")" => Tok::Close,
            n => Tok::Num(n.parse().expect("number")),
        })
        .collect()
}

fn main() {
    let input = "12 + 3 * ( 4 - 2 ) * - 6";
    let tokens = lex(input);

    let mut pool = NodePool::new(tokens.len() * 2 + 1);
    let (root, errors) = expr::parse(&tokens, &mut pool);

    for error in &errors {
        eprintln!("error: {:?} at {:?}", error.kind, error.elem);
    }
    let root = root.expect("non-empty input");
    println!("{} = {:?}", input, eval(&root));
    assert_eq!(eval(&root), Ok(-24.0));
}
