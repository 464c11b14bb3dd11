mod common;

use pretty_assertions::assert_eq;

use common::*;
use rill::semantics::{Value, ValueKind};
use rill::syntax::{Builtin, LitKind, Type, V};
use rill::{evaluate, quote, Names, NzEnv, Resolved, ResolvedExpr};

#[test]
fn beta_reduction() {
    // (\x -> x) 42
    let e = app(lam("x", var("x")), nat(42));
    assert_eq!(norm(&e), nat(42));
}

#[test]
fn list_length() {
    let e = app(
        builtin(Builtin::ListLength),
        list(vec![nat(1), nat(2), nat(3)]),
    );
    assert_eq!(norm(&e), nat(3));
}

#[test]
fn list_map() {
    // List/map (\n -> n + 1) [1, 2]
    let e = app2(
        builtin(Builtin::ListMap),
        lam("n", plus(var("n"), nat(1))),
        list(vec![nat(1), nat(2)]),
    );
    assert_eq!(norm(&e), list(vec![nat(2), nat(3)]));
}

#[test]
fn list_fold() {
    // List/fold [1, 2, 3] (\e -> \a -> e + a) 0
    let e = app3(
        builtin(Builtin::ListFold),
        list(vec![nat(1), nat(2), nat(3)]),
        lam("e", lam("a", plus(var("e"), var("a")))),
        nat(0),
    );
    assert_eq!(norm(&e), nat(6));
}

#[test]
fn natural_fold() {
    // Natural/fold 3 (\n -> n + 1) 0
    let e = app3(
        builtin(Builtin::NaturalFold),
        nat(3),
        lam("n", plus(var("n"), nat(1))),
        nat(0),
    );
    assert_eq!(norm(&e), nat(3));
}

#[test]
fn merge_selects_handler() {
    // merge { Left = \n -> n + 1, Right = \b -> if b then 1 else 0 }
    //   (Left 41)
    let handlers = record(vec![
        ("Left", lam("n", plus(var("n"), nat(1)))),
        ("Right", lam("b", if_(var("b"), nat(1), nat(0)))),
    ]);
    let e = app(merge(handlers.clone()), app(alternative("Left"), nat(41)));
    assert_eq!(norm(&e), nat(42));

    let e = app(merge(handlers), app(alternative("Right"), boolean(true)));
    assert_eq!(norm(&e), nat(1));
}

#[test]
fn integer_parity() {
    let e = app(builtin(Builtin::IntegerEven), nat(4));
    assert_eq!(norm(&e), boolean(true));
    let e = app(builtin(Builtin::IntegerOdd), nat(7));
    assert_eq!(norm(&e), boolean(true));
    // Both parity builtins accept Integer operands too.
    let e = app(builtin(Builtin::IntegerEven), int(-4));
    assert_eq!(norm(&e), boolean(true));
    let e = app(builtin(Builtin::IntegerOdd), int(-3));
    assert_eq!(norm(&e), boolean(true));
}

#[test]
fn field_access() {
    let e = field(record(vec![("a", nat(1)), ("b", nat(2))]), "a");
    assert_eq!(norm(&e), nat(1));
}

#[test]
fn bool_if() {
    let e = if_(boolean(true), text("yes"), text("no"));
    assert_eq!(norm(&e), text("yes"));
    let e = if_(boolean(false), text("yes"), text("no"));
    assert_eq!(norm(&e), text("no"));
}

#[test]
fn identity_reads_back() {
    assert_eq!(norm(&lam("x", var("x"))), lam("x", var("x")));
}

#[test]
fn free_variable_reads_back() {
    assert_eq!(norm(&var("y")), var("y"));
}

#[test]
fn scalar_transparency() {
    for e in vec![
        nat(42),
        int(-3),
        double(3.25),
        text("hello"),
        boolean(false),
        null(),
    ] {
        let v = eval(&e);
        assert!(matches!(v.kind(), ValueKind::Lit(_)));
        assert_eq!(norm(&e), e);
    }
}

#[test]
fn let_shadowing() {
    let e = let_(vec![("x", nat(1)), ("x", nat(2))], var("x"));
    assert_eq!(norm(&e), nat(2));
    let e = let_(vec![("x", nat(1)), ("x", nat(2))], var_at("x", 1));
    assert_eq!(norm(&e), nat(1));
}

#[test]
fn let_bindings_see_earlier_ones() {
    let e = let_(
        vec![("x", nat(1)), ("y", plus(var("x"), nat(1)))],
        plus(var("x"), var("y")),
    );
    assert_eq!(norm(&e), nat(3));
}

#[test]
fn closures_capture_their_environment() {
    // let y = 10 in \x -> x + y
    let e = let_(vec![("y", nat(10))], lam("x", plus(var("x"), var("y"))));
    assert_eq!(norm(&e), lam("x", plus(var("x"), nat(10))));
    assert_eq!(norm(&app(e, nat(5))), nat(15));
}

#[test]
fn operator_neutral_elements() {
    let y = || var("y");
    assert_eq!(norm(&plus(y(), nat(0))), y());
    assert_eq!(norm(&plus(nat(0), y())), y());
    assert_eq!(norm(&times(y(), nat(1))), y());
    assert_eq!(norm(&times(nat(1), y())), y());
    assert_eq!(norm(&times(y(), nat(0))), nat(0));
    assert_eq!(norm(&times(nat(0), y())), nat(0));
    assert_eq!(norm(&append(y(), text(""))), y());
    assert_eq!(norm(&append(text(""), y())), y());
    assert_eq!(norm(&and(y(), boolean(true))), y());
    assert_eq!(norm(&and(boolean(true), y())), y());
    assert_eq!(norm(&and(boolean(false), y())), boolean(false));
    assert_eq!(norm(&and(y(), boolean(false))), boolean(false));
    assert_eq!(norm(&or(y(), boolean(false))), y());
    assert_eq!(norm(&or(boolean(false), y())), y());
    assert_eq!(norm(&or(boolean(true), y())), boolean(true));
    assert_eq!(norm(&or(y(), boolean(true))), boolean(true));
}

#[test]
fn operators_fold_known_operands() {
    assert_eq!(norm(&plus(nat(20), nat(22))), nat(42));
    assert_eq!(norm(&times(nat(6), nat(7))), nat(42));
    assert_eq!(norm(&append(text("foo"), text("bar"))), text("foobar"));
    assert_eq!(norm(&and(boolean(true), boolean(false))), boolean(false));
    assert_eq!(norm(&or(boolean(true), boolean(false))), boolean(true));
}

#[test]
fn operator_stuck_fallback() {
    // y + 1 with y free stays an operator node, never an error.
    let e = plus(var("y"), nat(1));
    let v = eval(&e);
    match v.kind() {
        ValueKind::BinOp(_, x, y) => {
            assert!(matches!(x.kind(), ValueKind::Var(V(_, -1))));
            assert!(matches!(y.kind(), ValueKind::Lit(LitKind::Natural(1))));
        }
        k => panic!("expected a stuck operator, got {:?}", k),
    }
    assert_eq!(norm(&e), e);
}

#[test]
fn mixed_numeric_operands_stay_stuck() {
    let e = plus(int(1), nat(2));
    assert_eq!(norm(&e), e);
    let e = times(int(3), int(4));
    assert_eq!(norm(&e), e);
}

#[test]
fn application_of_non_function_is_stuck() {
    let e = app(nat(1), nat(2));
    assert_eq!(norm(&e), e);
}

#[test]
fn field_on_missing_key_or_non_record_is_stuck() {
    let e = field(record(vec![("a", nat(1))]), "b");
    assert_eq!(norm(&e), e);
    let e = field(nat(5), "b");
    assert_eq!(norm(&e), e);
}

#[test]
fn merge_with_unknown_shape_is_stuck() {
    let handlers = record(vec![("Left", lam("n", var("n")))]);
    // No handler for the tag.
    let e = app(
        merge(handlers.clone()),
        app(alternative("Right"), nat(1)),
    );
    assert_eq!(norm(&e), e);
    // Argument is not a tagged payload.
    let e = app(merge(handlers), nat(5));
    assert_eq!(norm(&e), e);
}

#[test]
fn if_on_non_bool_is_stuck() {
    let e = if_(var("y"), nat(1), nat(2));
    assert_eq!(norm(&e), e);
    let e = if_(null(), nat(1), nat(2));
    assert_eq!(norm(&e), e);
}

#[test]
fn partially_applied_builtins_stay_stuck() {
    let e = app(builtin(Builtin::ListFold), list(vec![nat(1)]));
    assert_eq!(norm(&e), e);
    // An unknown operand keeps a saturated spine stuck as well.
    let e = app3(
        builtin(Builtin::NaturalFold),
        var("n"),
        lam("x", var("x")),
        nat(0),
    );
    assert_eq!(norm(&e), e);
}

#[test]
fn double_show_renderings() {
    let show = |e| app(builtin(Builtin::DoubleShow), e);
    assert_eq!(norm(&show(double(4.2))), text("4.2"));
    assert_eq!(norm(&show(double(4.0))), text("4.0"));
    assert_eq!(norm(&show(nat(3))), text("3"));
    assert_eq!(norm(&show(int(-3))), text("-3"));
    assert_eq!(norm(&show(int(4))), text("4"));
}

#[test]
fn duplicate_record_keys_first_match_wins() {
    let e = field(record(vec![("a", nat(1)), ("a", nat(2))]), "a");
    assert_eq!(norm(&e), nat(1));
    // The duplicate stays visible in the record itself.
    let e = record(vec![("a", nat(1)), ("a", nat(2))]);
    assert_eq!(norm(&e), e);
}

#[test]
fn shadowed_binders_read_back_unambiguously() {
    let e = lam("x", lam("x", var_at("x", 1)));
    assert_eq!(norm(&e), e);
    let e = lam("x", lam("x", var("x")));
    assert_eq!(norm(&e), e);
}

#[test]
fn annotations_and_lets_are_erased() {
    let e = annot(nat(1), Type::Natural);
    assert_eq!(norm(&e), nat(1));
    let e = let_(vec![("x", nat(1))], annot(var("x"), Type::Natural));
    assert_eq!(norm(&e), nat(1));
    let e = annot(
        lam("x", var("x")),
        Type::function(Type::Natural, Type::Natural),
    );
    assert_eq!(norm(&e), lam("x", var("x")));
    let e = annot(list(vec![nat(1)]), Type::list(Type::Natural));
    assert_eq!(norm(&e), list(vec![nat(1)]));
}

#[test]
fn large_natural_fold_runs_iteratively() {
    let e = app3(
        builtin(Builtin::NaturalFold),
        nat(50_000),
        lam("n", plus(var("n"), nat(1))),
        nat(0),
    );
    assert_eq!(norm(&e), nat(50_000));
}

#[test]
fn embedded_values_pass_through() {
    let embedded = Value::from_lit(LitKind::Natural(7));
    let e = ResolvedExpr::new(
        rill::syntax::ExprKind::Embed(Resolved("./seven".into(), embedded)),
        rill::syntax::Span::Artificial,
    );
    let v = evaluate(&NzEnv::new(), &e);
    assert!(matches!(v.kind(), ValueKind::Lit(LitKind::Natural(7))));
}

#[test]
fn quote_under_matching_scope_preserves_structure() {
    // Evaluate `y + 1` in an environment where `y` is bound to itself, then
    // read it back with `y` in scope.
    let names: Names = vec![rill::syntax::Label::from("y")]
        .into_iter()
        .collect();
    let env: NzEnv = vec![(
        rill::syntax::Label::from("y"),
        Value::from_kind(ValueKind::Var(V("y".into(), 0))),
    )]
    .into_iter()
    .collect();
    let e = plus(var("y"), nat(1));
    let v = evaluate(&env, &e.absurd());
    assert_eq!(quote(&names, &v), e);
}

#[test]
fn builtins_render_like_their_names() {
    // A free list operand keeps the whole spine stuck.
    let e = app2(
        builtin(Builtin::ListMap),
        lam("n", plus(var("n"), nat(1))),
        var("xs"),
    );
    assert_eq!(norm(&e).to_string(), "List/map (\\n -> n + 1) xs");
}

#[test]
fn list_map_maps_over_stuck_elements() {
    // A known list with a stuck element still maps.
    let e = app2(
        builtin(Builtin::ListMap),
        lam("n", plus(var("n"), nat(1))),
        list(vec![var("x"), nat(4)]),
    );
    assert_eq!(norm(&e), list(vec![plus(var("x"), nat(1)), nat(5)]));
}
