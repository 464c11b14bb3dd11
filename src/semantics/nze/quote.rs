use std::iter::FromIterator;

use crate::semantics::{Value, ValueKind};
use crate::syntax::{Expr, ExprKind, Label, Span, V};
use crate::NormalizedExpr;

/// The names in scope at a readback site, innermost binding last. Readback
/// only ever needs to count occurrences of a name, never to look a value
/// up.
#[derive(Debug, Clone)]
pub struct Names {
    names: Vec<Label>,
}

impl Names {
    pub fn new() -> Self {
        Names { names: Vec::new() }
    }

    pub fn insert(&self, x: &Label) -> Self {
        let mut names = self.clone();
        names.names.push(x.clone());
        names
    }

    fn count(&self, x: &Label) -> isize {
        self.names.iter().filter(|n| *n == x).count() as isize
    }

    /// A variable for `x` distinct from every binding of `x` already in
    /// scope: its index is the number of such bindings.
    pub(crate) fn fresh(&self, x: &Label) -> V {
        V(x.clone(), self.count(x))
    }
}

impl FromIterator<Label> for Names {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Label>,
    {
        Names {
            names: iter.into_iter().collect(),
        }
    }
}

/// Convert a value back to the corresponding AST expression.
///
/// Surface variable indices are re-derived from the names in scope, so the
/// output is capture-free even under shadowed binders. Every span in the
/// output is artificial; the output contains no annotations, no lets and no
/// embeds.
pub fn quote(names: &Names, val: &Value) -> NormalizedExpr {
    val.to_expr(names)
}

impl Value {
    /// Converts a value back to the corresponding AST expression.
    pub fn to_expr(&self, names: &Names) -> NormalizedExpr {
        let kind = match self.kind() {
            // `count - index - 1` maps both bound variables (readback
            // indices count upward from the bottom of the scope) and free
            // variables (negative indices) onto surface occurrence
            // selectors.
            ValueKind::Var(V(x, k)) => {
                ExprKind::Var(V(x.clone(), names.count(x) - k - 1))
            }
            ValueKind::Lam(closure) => {
                let x = closure.param();
                let v = Value::from_kind(ValueKind::Var(names.fresh(x)));
                let body = closure.apply(v).to_expr(&names.insert(x));
                ExprKind::Lam(x.clone(), body)
            }
            ValueKind::App(f, a) => {
                ExprKind::App(f.to_expr(names), a.to_expr(names))
            }
            ValueKind::ListLit(xs) => {
                ExprKind::ListLit(xs.iter().map(|v| v.to_expr(names)).collect())
            }
            ValueKind::RecordLit(kvs) => ExprKind::RecordLit(
                kvs.iter()
                    .map(|(k, v)| (k.clone(), v.to_expr(names)))
                    .collect(),
            ),
            ValueKind::Field(v, l) => {
                ExprKind::Field(v.to_expr(names), l.clone())
            }
            ValueKind::Alternative(l) => ExprKind::Alternative(l.clone()),
            ValueKind::Merge(v) => ExprKind::Merge(v.to_expr(names)),
            ValueKind::BoolIf(b, t, e) => ExprKind::BoolIf(
                b.to_expr(names),
                t.to_expr(names),
                e.to_expr(names),
            ),
            ValueKind::Lit(l) => ExprKind::Lit(l.clone()),
            ValueKind::BinOp(o, x, y) => {
                ExprKind::BinOp(*o, x.to_expr(names), y.to_expr(names))
            }
            ValueKind::Builtin(b) => ExprKind::Builtin(*b),
        };
        Expr::new(kind, Span::Artificial)
    }
}
