use std::rc::Rc;

use crate::semantics::{apply_any, normalize_expr, NzEnv};
use crate::syntax::map::DupOrdMap;
use crate::syntax::{BinOp, Builtin, Label, LitKind, V};
use crate::ResolvedExpr;

/// A value in β-, δ-normal form. Immutable once constructed and cheap to
/// clone; subvalues are shared.
#[derive(Clone)]
pub struct Value(Rc<ValueKind>);

/// A function body bundled with the environment captured at its definition
/// site. The body is evaluated only when the closure is applied.
#[derive(Debug, Clone)]
pub struct Closure {
    param: Label,
    env: NzEnv,
    body: ResolvedExpr,
}

/// The shape of a normal form. The stuck variants are only constructed when
/// no reduction rule applies to their contents; evaluation never needs to
/// revisit them except to read them back.
#[derive(Debug, Clone)]
pub enum ValueKind {
    Var(V),
    Lam(Closure),
    /// Invariant: no β- or δ-rule can fire on this application.
    App(Value, Value),
    ListLit(Vec<Value>),
    RecordLit(DupOrdMap<Label, Value>),
    /// Invariant: the subject is not a record literal containing the field.
    Field(Value, Label),
    Alternative(Label),
    Merge(Value),
    /// Invariant: the predicate is not a Bool literal.
    BoolIf(Value, Value, Value),
    Lit(LitKind),
    /// Invariant: no operator rewrite applies to the operands.
    BinOp(BinOp, Value, Value),
    Builtin(Builtin),
}

impl Value {
    pub fn from_kind(v: ValueKind) -> Value {
        Value(Rc::new(v))
    }
    pub fn from_lit(l: LitKind) -> Value {
        Value::from_kind(ValueKind::Lit(l))
    }
    pub fn from_builtin(b: Builtin) -> Value {
        Value::from_kind(ValueKind::Builtin(b))
    }

    /// This is what you want if you want to pattern-match on the value.
    pub fn kind(&self) -> &ValueKind {
        &self.0
    }

    /// Apply this value to an argument, reducing if possible.
    pub fn app(&self, v: Value) -> Value {
        Value::from_kind(apply_any(self, v))
    }
}

impl Closure {
    pub fn new(param: &Label, env: &NzEnv, body: ResolvedExpr) -> Self {
        Closure {
            param: param.clone(),
            env: env.clone(),
            body,
        }
    }

    pub fn param(&self) -> &Label {
        &self.param
    }

    /// Enter the closure body with the argument bound: β-reduction.
    pub fn apply(&self, val: Value) -> Value {
        let env = self.env.insert_value(self.param.clone(), val);
        normalize_expr(&env, &self.body)
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind();
        if let ValueKind::Lit(l) = kind {
            return write!(fmt, "{:?}", l);
        }
        let mut x = fmt.debug_struct("Value");
        x.field("kind", kind);
        x.finish()
    }
}
