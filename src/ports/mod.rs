//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentCatalog` - read-only access to challenges and safeguards

mod content_catalog;

pub use content_catalog::{CatalogError, ContentCatalog};
