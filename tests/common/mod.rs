//! Shared constructors for building test expressions without a parser.
#![allow(dead_code)]

use rill::semantics::Value;
use rill::syntax::*;
use rill::{NormalizedExpr, Names, NzEnv};

pub fn rc(kind: ExprKind<NormalizedExpr, X>) -> NormalizedExpr {
    Expr::new(kind, Span::Artificial)
}

pub fn var(x: &str) -> NormalizedExpr {
    rc(ExprKind::Var(V(x.into(), 0)))
}
pub fn var_at(x: &str, n: isize) -> NormalizedExpr {
    rc(ExprKind::Var(V(x.into(), n)))
}
pub fn lam(x: &str, body: NormalizedExpr) -> NormalizedExpr {
    rc(ExprKind::Lam(x.into(), body))
}
pub fn app(f: NormalizedExpr, a: NormalizedExpr) -> NormalizedExpr {
    rc(ExprKind::App(f, a))
}
pub fn app2(
    f: NormalizedExpr,
    a: NormalizedExpr,
    b: NormalizedExpr,
) -> NormalizedExpr {
    app(app(f, a), b)
}
pub fn app3(
    f: NormalizedExpr,
    a: NormalizedExpr,
    b: NormalizedExpr,
    c: NormalizedExpr,
) -> NormalizedExpr {
    app(app2(f, a, b), c)
}

pub fn nat(n: u64) -> NormalizedExpr {
    rc(ExprKind::Lit(LitKind::Natural(n)))
}
pub fn int(n: i64) -> NormalizedExpr {
    rc(ExprKind::Lit(LitKind::Integer(n)))
}
pub fn double(x: f64) -> NormalizedExpr {
    rc(ExprKind::Lit(LitKind::Double(x.into())))
}
pub fn text(s: &str) -> NormalizedExpr {
    rc(ExprKind::Lit(LitKind::Text(s.to_owned())))
}
pub fn boolean(b: bool) -> NormalizedExpr {
    rc(ExprKind::Lit(LitKind::Bool(b)))
}
pub fn null() -> NormalizedExpr {
    rc(ExprKind::Lit(LitKind::Null))
}

pub fn list(elts: Vec<NormalizedExpr>) -> NormalizedExpr {
    rc(ExprKind::ListLit(elts))
}
pub fn record(kvs: Vec<(&str, NormalizedExpr)>) -> NormalizedExpr {
    rc(ExprKind::RecordLit(
        kvs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    ))
}
pub fn field(e: NormalizedExpr, l: &str) -> NormalizedExpr {
    rc(ExprKind::Field(e, l.into()))
}
pub fn alternative(l: &str) -> NormalizedExpr {
    rc(ExprKind::Alternative(l.into()))
}
pub fn merge(e: NormalizedExpr) -> NormalizedExpr {
    rc(ExprKind::Merge(e))
}
pub fn if_(
    p: NormalizedExpr,
    t: NormalizedExpr,
    e: NormalizedExpr,
) -> NormalizedExpr {
    rc(ExprKind::BoolIf(p, t, e))
}
pub fn annot(e: NormalizedExpr, t: Type) -> NormalizedExpr {
    rc(ExprKind::Annot(e, t))
}
pub fn let_(
    bindings: Vec<(&str, NormalizedExpr)>,
    body: NormalizedExpr,
) -> NormalizedExpr {
    rc(ExprKind::Let(
        bindings
            .into_iter()
            .map(|(name, value)| Binding {
                name: name.into(),
                annot: None,
                value,
            })
            .collect(),
        body,
    ))
}
pub fn builtin(b: Builtin) -> NormalizedExpr {
    rc(ExprKind::Builtin(b))
}

pub fn binop(
    o: BinOp,
    x: NormalizedExpr,
    y: NormalizedExpr,
) -> NormalizedExpr {
    rc(ExprKind::BinOp(o, x, y))
}
pub fn plus(x: NormalizedExpr, y: NormalizedExpr) -> NormalizedExpr {
    binop(BinOp::NaturalPlus, x, y)
}
pub fn times(x: NormalizedExpr, y: NormalizedExpr) -> NormalizedExpr {
    binop(BinOp::NaturalTimes, x, y)
}
pub fn and(x: NormalizedExpr, y: NormalizedExpr) -> NormalizedExpr {
    binop(BinOp::BoolAnd, x, y)
}
pub fn or(x: NormalizedExpr, y: NormalizedExpr) -> NormalizedExpr {
    binop(BinOp::BoolOr, x, y)
}
pub fn append(x: NormalizedExpr, y: NormalizedExpr) -> NormalizedExpr {
    binop(BinOp::TextAppend, x, y)
}

/// Evaluate a closed, embed-free expression.
pub fn eval(e: &NormalizedExpr) -> Value {
    rill::evaluate(&NzEnv::new(), &e.absurd())
}

/// Evaluate then read back with nothing in scope.
pub fn norm(e: &NormalizedExpr) -> NormalizedExpr {
    rill::quote(&Names::new(), &eval(e))
}
