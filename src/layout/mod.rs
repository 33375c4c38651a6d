pub(crate) mod flow;
pub(crate) mod measure;
pub(crate) mod rect;
