use crate::lexer::tokens::Token;

/// A type written in a cast: a sequence of atoms, where a parenthesized
/// group is a union of the atoms inside it.
///
/// `|Int (Str Num)|x` has the atoms `Int` and `(Str Num)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    pub atoms: Vec<TypeAtom>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeAtom {
    Name(Token),
    Union(TypeExpr),
}

impl TypeExpr {
    /// Every type name in source order, including those nested in unions.
    pub fn names(&self) -> Vec<&Token> {
        self.atoms
            .iter()
            .flat_map(|atom| match atom {
                TypeAtom::Name(name) => vec![name],
                TypeAtom::Union(inner) => inner.names(),
            })
            .collect()
    }
}
