use crate::syntax::*;
use itertools::Itertools;
use std::fmt::{self, Display};

/// Generic instance that delegates to subexpressions
impl<SE: Display + Clone, E: Display> Display for ExprKind<SE, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use crate::syntax::ExprKind::*;
        match self {
            Lam(a, b) => {
                write!(f, "\\{} -> {}", a, b)?;
            }
            BoolIf(a, b, c) => {
                write!(f, "if {} then {} else {}", a, b, c)?;
            }
            Let(bindings, e) => {
                let bindings = bindings.iter().format_with(" ", |b, f| {
                    f(&format_args!("let {}", b.name))?;
                    if let Some(t) = &b.annot {
                        f(&format_args!(" : {}", t))?;
                    }
                    f(&format_args!(" = {}", b.value))
                });
                write!(f, "{} in {}", bindings, e)?;
            }
            Annot(a, b) => {
                write!(f, "{} : {}", a, b)?;
            }
            ExprKind::BinOp(op, a, b) => {
                write!(f, "{} {} {}", a, op, b)?;
            }
            ExprKind::App(a, b) => {
                write!(f, "{} {}", a, b)?;
            }
            Field(a, b) => {
                write!(f, "{}.{}", a, b)?;
            }
            Merge(a) => {
                write!(f, "merge {}", a)?;
            }
            Alternative(a) => a.fmt(f)?,
            Var(a) => a.fmt(f)?,
            Builtin(v) => v.fmt(f)?,
            Lit(l) => l.fmt(f)?,
            ListLit(es) => {
                fmt_list("[", ", ", "]", es, f, Display::fmt)?;
            }
            RecordLit(a) if a.is_empty() => f.write_str("{=}")?,
            RecordLit(a) => fmt_list("{ ", ", ", " }", a, f, |(k, v), f| {
                write!(f, "{} = {}", k, v)
            })?,
            Embed(a) => a.fmt(f)?,
        }
        Ok(())
    }
}

// There is a one-to-one correspondence between the formatter and the grammar. Each phase is
// named after a corresponding grammar group, and the structure of the formatter reflects
// the relationship between the corresponding grammar rules. This leads to the nice property
// of automatically getting all the parentheses and precedences right.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
enum PrintPhase {
    Base,
    // Precedence is magically handled by the ordering of BinOps.
    BinOp(crate::syntax::BinOp),
    App,
    Primitive,
}

// Wraps an Expr with a phase, so that phase selection can be done
// separate from the actual printing
#[derive(Clone)]
struct PhasedExpr<'a, E>(&'a Expr<E>, PrintPhase);

impl<'a, E: Display + Clone> Display for PhasedExpr<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.0.fmt_phase(f, self.1)
    }
}

impl<'a, E: Display + Clone> PhasedExpr<'a, E> {
    fn phase(self, phase: PrintPhase) -> PhasedExpr<'a, E> {
        PhasedExpr(self.0, phase)
    }
}

impl<E: Display + Clone> Expr<E> {
    fn fmt_phase(
        &self,
        f: &mut fmt::Formatter,
        phase: PrintPhase,
    ) -> Result<(), fmt::Error> {
        use crate::syntax::ExprKind::*;
        use PrintPhase::*;

        let needs_paren = match self.kind() {
            Lam(..) | BoolIf(..) | Let(..) | Annot(..) | Merge(_)
                if phase > Base =>
            {
                true
            }
            ExprKind::BinOp(op, _, _) if phase > PrintPhase::BinOp(*op) => {
                true
            }
            ExprKind::App(..) if phase > PrintPhase::App => true,
            _ => false,
        };

        // Annotate subexpressions with the appropriate phase, defaulting to Base
        let phased_self = match self.kind().map_ref(|e| PhasedExpr(e, Base)) {
            ExprKind::BinOp(op, a, b) => ExprKind::BinOp(
                op,
                a.phase(PrintPhase::BinOp(op)),
                b.phase(PrintPhase::BinOp(op)),
            ),
            ExprKind::App(fun, arg) => {
                ExprKind::App(fun.phase(PrintPhase::App), arg.phase(Primitive))
            }
            Annot(a, t) => Annot(a.phase(PrintPhase::App), t),
            Field(a, b) => Field(a.phase(Primitive), b),
            Merge(a) => Merge(a.phase(Primitive)),
            e => e,
        };

        if needs_paren {
            f.write_str("(")?;
        }

        // Uses the ExprKind<PhasedExpr<_>, _> instance
        phased_self.fmt(f)?;

        if needs_paren {
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl<E: Display + Clone> Display for Expr<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.fmt_phase(f, PrintPhase::Base)
    }
}

fn fmt_list<T, I, F>(
    open: &str,
    sep: &str,
    close: &str,
    it: I,
    f: &mut fmt::Formatter,
    func: F,
) -> Result<(), fmt::Error>
where
    I: IntoIterator<Item = T>,
    F: Fn(T, &mut fmt::Formatter) -> Result<(), fmt::Error>,
{
    f.write_str(open)?;
    for (i, x) in it.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        func(x, f)?;
    }
    f.write_str(close)
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

impl Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let V(x, n) = self;
        x.fmt(f)?;
        if *n != 0 {
            write!(f, "@{}", n)?;
        }
        Ok(())
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use crate::syntax::BinOp::*;
        f.write_str(match self {
            BoolOr => "||",
            NaturalPlus => "+",
            TextAppend => "++",
            BoolAnd => "&&",
            NaturalTimes => "*",
        })
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use crate::syntax::Builtin::*;
        f.write_str(match self {
            DoubleShow => "Double/show",
            IntegerEven => "Integer/even",
            IntegerOdd => "Integer/odd",
            ListFold => "List/fold",
            ListLength => "List/length",
            ListMap => "List/map",
            NaturalFold => "Natural/fold",
        })
    }
}

impl Display for LitKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use crate::syntax::LitKind::*;
        match self {
            Bool(true) => f.write_str("true")?,
            Bool(false) => f.write_str("false")?,
            Natural(a) => a.fmt(f)?,
            Integer(a) => a.fmt(f)?,
            Double(a) => a.fmt(f)?,
            Text(s) => write!(f, "{:?}", s)?,
            Null => f.write_str("null")?,
        }
        Ok(())
    }
}

impl Display for NaiveDouble {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let v: f64 = (*self).into();
        if v.is_finite() && v.trunc() == v {
            // Keep the decimal point so the rendering stays unambiguously
            // a Double.
            write!(f, "{:.1}", v)
        } else {
            write!(f, "{}", v)
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use crate::syntax::Type::*;
        match self {
            Bool => f.write_str("Bool")?,
            Natural => f.write_str("Natural")?,
            Integer => f.write_str("Integer")?,
            Double => f.write_str("Double")?,
            Text => f.write_str("Text")?,
            List(t) => write!(f, "List {}", TypeOperand(t))?,
            Optional(t) => write!(f, "Optional {}", TypeOperand(t))?,
            Record(kts) => {
                fmt_list("{ ", ", ", " }", kts, f, |(k, t), f| {
                    write!(f, "{} : {}", k, t)
                })?;
            }
            Union(kts) => {
                fmt_list("< ", " | ", " >", kts, f, |(k, t), f| {
                    write!(f, "{} : {}", k, t)
                })?;
            }
            Function(a, b) => write!(f, "{} -> {}", TypeOperand(a), b)?,
            Var(x) => x.fmt(f)?,
        }
        Ok(())
    }
}

/// A type in argument position; functions get parenthesized.
struct TypeOperand<'a>(&'a Type);

impl<'a> Display for TypeOperand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.0 {
            t @ Type::Function(..) | t @ Type::List(_)
            | t @ Type::Optional(_) => write!(f, "({})", t),
            t => t.fmt(f),
        }
    }
}

impl Display for X {
    fn fmt(&self, _: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {}
    }
}
