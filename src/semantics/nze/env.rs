use std::iter::FromIterator;

use crate::semantics::{Value, ValueKind};
use crate::syntax::{Label, V};

/// The value-level environment: an ordered stack of name/value bindings,
/// innermost binding last. Lookup always returns an already-evaluated value,
/// never a thunk. Extending the environment snapshots it, so closures can
/// hold on to the bindings of their definition site.
#[derive(Debug, Clone)]
pub struct NzEnv {
    items: Vec<(Label, Value)>,
}

impl NzEnv {
    pub fn new() -> Self {
        NzEnv { items: Vec::new() }
    }

    pub fn insert_value(&self, name: Label, e: Value) -> Self {
        let mut env = self.clone();
        env.items.push((name, e));
        env
    }

    /// Resolve a surface variable occurrence. Scans innermost-first; an
    /// `x@n` occurrence skips the `n` innermost bindings of `x`. An unbound
    /// occurrence does not fail: it becomes a free-variable marker whose
    /// negative index records how far past the environment it reached, so
    /// that readback can re-derive the surface index.
    pub fn lookup_val(&self, var: &V) -> Value {
        let V(name, index) = var;
        let mut index = *index;
        for (x, v) in self.items.iter().rev() {
            if x == name {
                if index == 0 {
                    return v.clone();
                }
                index -= 1;
            }
        }
        Value::from_kind(ValueKind::Var(V(name.clone(), -index - 1)))
    }
}

impl FromIterator<(Label, Value)> for NzEnv {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Label, Value)>,
    {
        NzEnv {
            items: iter.into_iter().collect(),
        }
    }
}
