#![allow(clippy::new_without_default, clippy::many_single_char_names)]

//! Rill is a small statically-typed functional expression language in the
//! configuration-language family. This crate is its normalization core: it
//! takes a well-formed surface expression plus a binding environment and
//! reduces it to a normal form in which no further reduction is possible,
//! then reads the result back into surface syntax.
//!
//! Normalization is total and never fails. Ill-typed subexpressions are not
//! an error: reduction gets stuck on them and they come out the other side
//! as neutral terms. Type checking, parsing and import resolution live in
//! the surrounding tooling; the only hook they need here is the `Embed`
//! leaf, through which externally-computed values enter evaluation.
//!
//! ```
//! use rill::syntax::{ExprKind, LitKind, Span, V};
//! use rill::{evaluate, quote, Names, NzEnv, ResolvedExpr};
//!
//! fn rc(kind: ExprKind<ResolvedExpr, rill::Resolved>) -> ResolvedExpr {
//!     ResolvedExpr::new(kind, Span::Artificial)
//! }
//!
//! // (\x -> x) 42
//! let expr = rc(ExprKind::App(
//!     rc(ExprKind::Lam("x".into(), rc(ExprKind::Var(V("x".into(), 0))))),
//!     rc(ExprKind::Lit(LitKind::Natural(42))),
//! ));
//! let val = evaluate(&NzEnv::new(), &expr);
//! assert_eq!(quote(&Names::new(), &val).to_string(), "42");
//! ```

pub mod semantics;
pub mod syntax;

use crate::semantics::Value;
use crate::syntax::{Expr, Label, X};

pub use crate::semantics::{evaluate, quote, Names, NzEnv};

/// An externally-resolved import: the path it was loaded from, and the
/// already-evaluated value it produced. The evaluator uses only the value.
#[derive(Debug, Clone)]
pub struct Resolved(pub Label, pub Value);

/// An expression whose imports have been resolved to values.
pub type ResolvedExpr = Expr<Resolved>;

/// The result of readback: no annotations, no lets, no embeds, artificial
/// spans.
pub type NormalizedExpr = Expr<X>;
