pub(crate) mod args;
pub(crate) mod cast;
pub(crate) mod document;
pub(crate) mod value;
