pub(crate) mod ast;
pub(crate) mod lexer;
pub(crate) mod markup;
pub(crate) mod parser;
