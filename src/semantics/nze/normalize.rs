use crate::semantics::{Closure, NzEnv, Value, ValueKind};
use crate::syntax::{BinOp, Builtin, ExprKind, Label, LitKind};
use crate::{Resolved, ResolvedExpr};

pub(crate) type Ret = ValueKind;

pub(crate) fn ret_kind(x: ValueKind) -> Ret {
    x
}
pub(crate) fn ret_value(x: Value) -> Ret {
    x.kind().clone()
}
pub(crate) fn ret_ref(x: &Value) -> Ret {
    x.kind().clone()
}

/// Reduce an expression to its normal form in the given environment,
/// performing beta and delta reduction.
///
/// `evaluate` does not type-check the expression. It will not fail if the
/// expression is ill-typed: reduction gets stuck on the offending
/// subexpression and the result contains it as a neutral term.
pub fn evaluate(env: &NzEnv, expr: &ResolvedExpr) -> Value {
    normalize_expr(env, expr)
}

pub(crate) fn normalize_expr(env: &NzEnv, expr: &ResolvedExpr) -> Value {
    match expr.kind() {
        ExprKind::Var(v) => env.lookup_val(v),
        ExprKind::Lam(x, body) => Value::from_kind(ValueKind::Lam(
            Closure::new(x, env, body.clone()),
        )),
        ExprKind::Let(bindings, body) => {
            let mut env = env.clone();
            for b in bindings {
                let val = normalize_expr(&env, &b.value);
                env = env.insert_value(b.name.clone(), val);
            }
            normalize_expr(&env, body)
        }
        ExprKind::BoolIf(b, t, e) => {
            let b = normalize_expr(env, b);
            match b.kind() {
                ValueKind::Lit(LitKind::Bool(true)) => normalize_expr(env, t),
                ValueKind::Lit(LitKind::Bool(false)) => {
                    normalize_expr(env, e)
                }
                _ => Value::from_kind(ValueKind::BoolIf(
                    b.clone(),
                    normalize_expr(env, t),
                    normalize_expr(env, e),
                )),
            }
        }
        ExprKind::Builtin(b) => Value::from_builtin(*b),
        ExprKind::Embed(Resolved(_, v)) => v.clone(),
        e => {
            let e = e.map_ref(|se| normalize_expr(env, se));
            Value::from_kind(normalize_one_layer(e))
        }
    }
}

pub(crate) fn normalize_one_layer(expr: ExprKind<Value, Resolved>) -> Ret {
    use ValueKind::{Alternative, ListLit, Lit, Merge, RecordLit};

    match expr {
        ExprKind::Var(..)
        | ExprKind::Lam(..)
        | ExprKind::Let(..)
        | ExprKind::BoolIf(..)
        | ExprKind::Builtin(..)
        | ExprKind::Embed(..) => {
            unreachable!("This case should have been handled in normalize_expr")
        }

        ExprKind::Annot(x, _) => ret_value(x),
        ExprKind::Lit(l) => ret_kind(Lit(l)),
        ExprKind::ListLit(elts) => ret_kind(ListLit(elts)),
        ExprKind::RecordLit(kvs) => ret_kind(RecordLit(kvs)),
        ExprKind::Alternative(l) => ret_kind(Alternative(l)),
        ExprKind::Merge(v) => ret_kind(Merge(v)),
        ExprKind::Field(v, l) => normalize_field(&v, &l),
        ExprKind::BinOp(o, x, y) => normalize_binop(o, &x, &y),
        ExprKind::App(f, a) => apply_any(&f, a),
    }
}

fn normalize_field(v: &Value, field: &Label) -> Ret {
    use ValueKind::RecordLit;

    match v.kind() {
        // First-match lookup: a duplicate key later in the record is
        // unreachable through field access.
        RecordLit(kvs) => match kvs.get(field) {
            Some(r) => ret_ref(r),
            None => ret_kind(ValueKind::Field(v.clone(), field.clone())),
        },
        _ => ret_kind(ValueKind::Field(v.clone(), field.clone())),
    }
}

fn normalize_binop(o: BinOp, x: &Value, y: &Value) -> Ret {
    use BinOp::*;
    use LitKind::{Bool, Natural, Text};
    use ValueKind::Lit;

    match (o, x.kind(), y.kind()) {
        (BoolAnd, Lit(Bool(true)), _) => ret_ref(y),
        (BoolAnd, Lit(Bool(false)), _) => ret_kind(Lit(Bool(false))),
        (BoolAnd, _, Lit(Bool(true))) => ret_ref(x),
        (BoolAnd, _, Lit(Bool(false))) => ret_kind(Lit(Bool(false))),
        (BoolOr, Lit(Bool(true)), _) => ret_kind(Lit(Bool(true))),
        (BoolOr, Lit(Bool(false)), _) => ret_ref(y),
        (BoolOr, _, Lit(Bool(true))) => ret_kind(Lit(Bool(true))),
        (BoolOr, _, Lit(Bool(false))) => ret_ref(x),

        (NaturalPlus, Lit(Natural(0)), _) => ret_ref(y),
        (NaturalPlus, _, Lit(Natural(0))) => ret_ref(x),
        (NaturalPlus, Lit(Natural(x)), Lit(Natural(y))) => {
            ret_kind(Lit(Natural(x + y)))
        }
        (NaturalTimes, Lit(Natural(1)), _) => ret_ref(y),
        (NaturalTimes, Lit(Natural(0)), _) => ret_kind(Lit(Natural(0))),
        (NaturalTimes, _, Lit(Natural(1))) => ret_ref(x),
        (NaturalTimes, _, Lit(Natural(0))) => ret_kind(Lit(Natural(0))),
        (NaturalTimes, Lit(Natural(x)), Lit(Natural(y))) => {
            ret_kind(Lit(Natural(x * y)))
        }

        (TextAppend, Lit(Text(x)), _) if x.is_empty() => ret_ref(y),
        (TextAppend, _, Lit(Text(y))) if y.is_empty() => ret_ref(x),
        (TextAppend, Lit(Text(x)), Lit(Text(y))) => {
            ret_kind(Lit(Text(format!("{}{}", x, y))))
        }

        _ => ret_kind(ValueKind::BinOp(o, x.clone(), y.clone())),
    }
}

/// Application dispatch. The rules are tried in order: tagged-sum
/// elimination, builtin delta rules on a saturated spine, beta reduction,
/// and finally a stuck application node.
pub(crate) fn apply_any(f: &Value, a: Value) -> Ret {
    use ValueKind::{Alternative, App, Lam, Merge, RecordLit};

    // A merge of handlers applied to a tagged payload selects the handler
    // for that tag.
    if let Merge(handlers) = f.kind() {
        if let RecordLit(kvs) = handlers.kind() {
            if let App(alt, payload) = a.kind() {
                if let Alternative(tag) = alt.kind() {
                    if let Some(handler) = kvs.get(tag) {
                        return apply_any(handler, payload.clone());
                    }
                }
            }
        }
    }

    if let Some((b, mut args)) = peel_builtin(f) {
        args.push(a.clone());
        if let Some(v) = apply_builtin(b, &args) {
            return v;
        }
    }

    match f.kind() {
        Lam(closure) => ret_value(closure.apply(a)),
        _ => ret_kind(App(f.clone(), a)),
    }
}

/// Expose the builtin at the head of a stuck application spine, together
/// with the arguments applied to it so far, in application order.
fn peel_builtin(f: &Value) -> Option<(Builtin, Vec<Value>)> {
    let mut args = Vec::new();
    let mut head = f.clone();
    loop {
        head = match head.kind() {
            ValueKind::App(g, x) => {
                args.push(x.clone());
                g.clone()
            }
            ValueKind::Builtin(b) => {
                args.reverse();
                return Some((*b, args));
            }
            _ => return None,
        };
    }
}

/// Delta rules: a builtin applied to operands that determine a reduction.
/// Returns `None` while the spine is unsaturated or an operand is still
/// unknown; the application then stays stuck.
fn apply_builtin(b: Builtin, args: &[Value]) -> Option<Ret> {
    use LitKind::{Bool, Double, Integer, Natural, Text};
    use ValueKind::{ListLit, Lit};

    Some(match (b, args) {
        (Builtin::ListFold, [l, cons, nil]) => match l.kind() {
            // A left fold, with the accumulator held strictly.
            ListLit(xs) => {
                let mut acc = nil.clone();
                for x in xs {
                    acc = cons.app(x.clone()).app(acc);
                }
                ret_value(acc)
            }
            _ => return None,
        },
        (Builtin::ListLength, [l]) => match l.kind() {
            ListLit(xs) => ret_kind(Lit(Natural(xs.len() as u64))),
            _ => return None,
        },
        (Builtin::ListMap, [g, l]) => match l.kind() {
            ListLit(xs) => ret_kind(ListLit(
                xs.iter().map(|x| g.app(x.clone())).collect(),
            )),
            _ => return None,
        },
        (Builtin::NaturalFold, [n, succ, zero]) => match n.kind() {
            Lit(Natural(n)) => {
                let mut acc = zero.clone();
                for _ in 0..*n {
                    acc = succ.app(acc);
                }
                ret_value(acc)
            }
            _ => return None,
        },
        (Builtin::IntegerEven, [n]) => match n.kind() {
            Lit(Integer(n)) => ret_kind(Lit(Bool(n % 2 == 0))),
            Lit(Natural(n)) => ret_kind(Lit(Bool(n % 2 == 0))),
            _ => return None,
        },
        (Builtin::IntegerOdd, [n]) => match n.kind() {
            Lit(Integer(n)) => ret_kind(Lit(Bool(n % 2 != 0))),
            Lit(Natural(n)) => ret_kind(Lit(Bool(n % 2 != 0))),
            _ => return None,
        },
        (Builtin::DoubleShow, [n]) => match n.kind() {
            // Render with the same formatter the printer uses for the
            // scalar.
            Lit(l @ Natural(_)) | Lit(l @ Integer(_)) | Lit(l @ Double(_)) => {
                ret_kind(Lit(Text(l.to_string())))
            }
            _ => return None,
        },
        _ => return None,
    })
}
