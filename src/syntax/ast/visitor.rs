use crate::syntax::*;

/// Traverse one layer of an `ExprKind`, visiting subexpressions and embedded
/// payloads and cloning everything else. This is the only place that knows
/// the full shape of the tree; `traverse_ref`/`map_ref` on `ExprKind` are
/// thin wrappers around it.
pub fn visit_ref<'a, SE, SE2, E, E2, Err>(
    input: &'a ExprKind<SE, E>,
    mut visit_subexpr: impl FnMut(&'a SE) -> Result<SE2, Err>,
    mut visit_embed: impl FnMut(&'a E) -> Result<E2, Err>,
) -> Result<ExprKind<SE2, E2>, Err> {
    fn vec<'a, T, U, Err, F: FnMut(&'a T) -> Result<U, Err>>(
        x: &'a [T],
        f: F,
    ) -> Result<Vec<U>, Err> {
        x.iter().map(f).collect()
    }

    use crate::syntax::ExprKind::*;
    Ok(match input {
        Var(v) => Var(v.clone()),
        Lam(l, e) => Lam(l.clone(), visit_subexpr(e)?),
        App(f, a) => App(visit_subexpr(f)?, visit_subexpr(a)?),
        Annot(x, t) => Annot(visit_subexpr(x)?, t.clone()),
        Let(bindings, e) => {
            let bindings = bindings
                .iter()
                .map(|b| {
                    Ok(Binding {
                        name: b.name.clone(),
                        annot: b.annot.clone(),
                        value: visit_subexpr(&b.value)?,
                    })
                })
                .collect::<Result<_, Err>>()?;
            Let(bindings, visit_subexpr(e)?)
        }
        ListLit(es) => ListLit(vec(es, |e| visit_subexpr(e))?),
        RecordLit(kvs) => RecordLit(
            kvs.iter()
                .map(|(k, v)| Ok((k.clone(), visit_subexpr(v)?)))
                .collect::<Result<_, Err>>()?,
        ),
        Field(e, l) => Field(visit_subexpr(e)?, l.clone()),
        Alternative(l) => Alternative(l.clone()),
        Merge(e) => Merge(visit_subexpr(e)?),
        BoolIf(b, t, f) => BoolIf(
            visit_subexpr(b)?,
            visit_subexpr(t)?,
            visit_subexpr(f)?,
        ),
        Lit(l) => Lit(l.clone()),
        BinOp(o, x, y) => BinOp(*o, visit_subexpr(x)?, visit_subexpr(y)?),
        Builtin(b) => Builtin(*b),
        Embed(a) => Embed(visit_embed(a)?),
    })
}
