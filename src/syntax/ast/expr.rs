use crate::syntax::map::DupOrdMap;
use crate::syntax::visitor;
use crate::syntax::*;

pub type Integer = i64;
pub type Natural = u64;
pub type Double = NaiveDouble;

/// An empty type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum X {}

pub fn trivial_result<T>(x: Result<T, X>) -> T {
    match x {
        Ok(x) => x,
        Err(e) => match e {},
    }
}

/// Double with bitwise equality
#[derive(Debug, Copy, Clone)]
pub struct NaiveDouble(f64);

/// Variable occurrence
///
/// The `Label` field is the variable's name (i.e. \"`x`\").
/// The `isize` field disambiguates repeated bindings of the same name. In
/// surface expressions it is a non-negative occurrence selector (`x@n`, 0 =
/// innermost binding). In values, free variables are encoded with negative
/// indices so that readback can re-derive surface indices arithmetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct V(pub Label, pub isize);

// Definition order must match precedence order for
// pretty-printing to work correctly
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BinOp {
    /// `x || y`
    BoolOr,
    /// `x + y`
    NaturalPlus,
    /// `x ++ y`
    TextAppend,
    /// `x && y`
    BoolAnd,
    /// `x * y`
    NaturalTimes,
}

/// Built-ins
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Builtin {
    DoubleShow,
    IntegerEven,
    IntegerOdd,
    ListFold,
    ListLength,
    ListMap,
    NaturalFold,
}

/// Simple literals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LitKind {
    ///  `true`
    Bool(bool),
    ///  `1`
    Natural(Natural),
    ///  `-2`
    Integer(Integer),
    ///  `3.24`
    Double(Double),
    ///  `"text"`
    Text(String),
    ///  `null`
    Null,
}

/// One binding of a `let` group. Earlier bindings of the same group are in
/// scope in the right-hand sides of later ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding<SubExpr> {
    pub name: Label,
    pub annot: Option<Type>,
    pub value: SubExpr,
}

// Each node carries an annotation.
#[derive(Debug, Clone)]
pub struct Expr<E> {
    kind: Box<ExprKind<Expr<E>, E>>,
    span: Span,
}

/// Syntax tree for expressions
// Having the recursion out of the enum definition enables writing
// much more generic code and improves pattern-matching behind
// smart pointers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind<SubExpr, Embed> {
    ///  `x`
    ///  `x@n`
    Var(V),
    ///  `\x -> b`
    Lam(Label, SubExpr),
    ///  `f a`
    App(SubExpr, SubExpr),
    ///  `x : t`
    Annot(SubExpr, Type),
    ///  `let x = r let y = s in e`
    Let(Vec<Binding<SubExpr>>, SubExpr),
    ///  `[x, y, z]`
    ListLit(Vec<SubExpr>),
    ///  `{ k1 = v1, k2 = v2 }`
    RecordLit(DupOrdMap<Label, SubExpr>),
    ///  `e.x`
    Field(SubExpr, Label),
    ///  `Left`
    Alternative(Label),
    ///  `merge handlers`
    Merge(SubExpr),
    ///  `if x then y else z`
    BoolIf(SubExpr, SubExpr, SubExpr),
    ///  `1`, `"text"`, `true`, ...
    Lit(LitKind),
    // Binary operations
    BinOp(BinOp, SubExpr, SubExpr),
    /// Built-in values
    Builtin(Builtin),
    /// An externally-resolved payload
    Embed(Embed),
}

impl<SE, E> ExprKind<SE, E> {
    pub fn traverse_ref<'a, SE2, Err>(
        &'a self,
        visit_subexpr: impl FnMut(&'a SE) -> Result<SE2, Err>,
    ) -> Result<ExprKind<SE2, E>, Err>
    where
        E: Clone,
    {
        visitor::visit_ref(self, visit_subexpr, |e| Ok(e.clone()))
    }

    pub fn traverse_ref_with_embed<'a, SE2, E2, Err>(
        &'a self,
        visit_subexpr: impl FnMut(&'a SE) -> Result<SE2, Err>,
        visit_embed: impl FnMut(&'a E) -> Result<E2, Err>,
    ) -> Result<ExprKind<SE2, E2>, Err> {
        visitor::visit_ref(self, visit_subexpr, visit_embed)
    }

    pub fn map_ref<'a, SE2>(
        &'a self,
        mut map_subexpr: impl FnMut(&'a SE) -> SE2,
    ) -> ExprKind<SE2, E>
    where
        E: Clone,
    {
        trivial_result(self.traverse_ref(|x| Ok(map_subexpr(x))))
    }
}

impl<E> Expr<E> {
    pub fn as_ref(&self) -> &ExprKind<Expr<E>, E> {
        &self.kind
    }
    pub fn kind(&self) -> &ExprKind<Expr<E>, E> {
        &self.kind
    }
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn new(kind: ExprKind<Expr<E>, E>, span: Span) -> Self {
        Expr {
            kind: Box::new(kind),
            span,
        }
    }

    pub fn rewrap(&self, kind: ExprKind<Expr<E>, E>) -> Expr<E> {
        Expr {
            kind: Box::new(kind),
            span: self.span.clone(),
        }
    }
    pub fn with_span(self, span: Span) -> Self {
        Expr {
            kind: self.kind,
            span,
        }
    }
}

impl Expr<X> {
    /// Changes the embed type of an expression that contains no embeds.
    pub fn absurd<E>(&self) -> Expr<E> {
        let kind = trivial_result(self.kind().traverse_ref_with_embed(
            |e| Ok(e.absurd()),
            |x| match *x {},
        ));
        Expr::new(kind, self.span())
    }
}

impl PartialEq for NaiveDouble {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for NaiveDouble {}

impl std::hash::Hash for NaiveDouble {
    fn hash<H>(&self, state: &mut H)
    where
        H: std::hash::Hasher,
    {
        self.0.to_bits().hash(state)
    }
}

impl From<f64> for NaiveDouble {
    fn from(x: f64) -> Self {
        NaiveDouble(x)
    }
}

impl From<NaiveDouble> for f64 {
    fn from(x: NaiveDouble) -> f64 {
        x.0
    }
}

impl From<Label> for V {
    fn from(x: Label) -> V {
        V(x, 0)
    }
}

impl<E: PartialEq> std::cmp::PartialEq for Expr<E> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<E: Eq> std::cmp::Eq for Expr<E> {}

impl<E: std::hash::Hash> std::hash::Hash for Expr<E> {
    fn hash<H>(&self, state: &mut H)
    where
        H: std::hash::Hasher,
    {
        self.kind.hash(state)
    }
}
