//! Domain layer: catalog model, comparison engine, repository traits

pub mod model;
pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
