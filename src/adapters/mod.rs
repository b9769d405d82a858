//! Adapters - Implementations of port interfaces.

pub mod catalog;

pub use catalog::YamlCatalog;
