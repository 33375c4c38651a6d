use crate::foundation::span::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Numeric(f64, String),
    Str(String),
    Ident(String),
    Dict(Vec<DictEntry>),
    Call {
        callee: Spanned<String>,
        args: Vec<Arg>,
    },
    Neg(Box<Spanned<Expr>>),
    Add(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DictEntry {
    pub(crate) key: Spanned<String>,
    pub(crate) value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Arg {
    pub(crate) name: Option<Spanned<String>>,
    pub(crate) value: Spanned<Expr>,
}

/// `#set rect(..)`: applies to the rest of the enclosing scope.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SetRule {
    pub(crate) args: Vec<Arg>,
    pub(crate) span: Span,
}

/// `#rect(..)` with an optional `[body]`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RectCall {
    pub(crate) args: Vec<Arg>,
    pub(crate) body: Option<Spanned<String>>,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Set(SetRule),
    Rect(RectCall),
    /// `#[ .. ]`: set rules inside do not leak out.
    Scope(Vec<Node>),
}
