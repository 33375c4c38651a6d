pub(crate) mod dsl;
pub(crate) mod sides;
pub(crate) mod spec;
pub(crate) mod stroke;
