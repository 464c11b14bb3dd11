use crate::syntax::Label;

/// The type that annotation slots carry.
///
/// Types are produced by the (external) inference pass and erased during
/// normalization; the core only clones and prints them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    ///  `Bool`
    Bool,
    ///  `Natural`
    Natural,
    ///  `Integer`
    Integer,
    ///  `Double`
    Double,
    ///  `Text`
    Text,
    ///  `List t`
    List(Box<Type>),
    ///  `Optional t`
    Optional(Box<Type>),
    ///  `{ k1 : t1, k2 : t2 }`
    Record(Vec<(Label, Type)>),
    ///  `< K1 : t1 | K2 : t2 >`
    Union(Vec<(Label, Type)>),
    ///  `a -> b`
    Function(Box<Type>, Box<Type>),
    /// A type variable left in place by inference
    Var(Label),
}

impl Type {
    pub fn function(input: Type, output: Type) -> Type {
        Type::Function(Box::new(input), Box::new(output))
    }
    pub fn list(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }
}
