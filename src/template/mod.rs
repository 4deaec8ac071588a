pub(crate) mod builtin;
pub(crate) mod loader;
pub(crate) mod model;
pub(crate) mod registry;
pub(crate) mod validate;
