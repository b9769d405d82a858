//! Catalog Adapters
//!
//! Implementations of the ContentCatalog port.
//!
//! - **YamlCatalog** - embedded or file-based YAML catalog

mod yaml_catalog;

pub use yaml_catalog::{YamlCatalog, BUILTIN_CATALOG_YAML};
