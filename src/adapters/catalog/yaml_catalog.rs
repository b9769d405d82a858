//! YAML catalog adapter.
//!
//! Reads the challenge catalog from a YAML document, either the one embedded
//! in the crate or a file supplied through configuration.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::catalog::{Catalog, Challenge, OptionItem};
use crate::ports::{CatalogError, ContentCatalog};

/// The catalog shipped with the crate.
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../../../content/catalog.yaml");

static BUILTIN: OnceCell<Catalog> = OnceCell::new();

/// On-disk document shape, validated into a [`Catalog`] after parsing.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    safeguards: Vec<OptionItem>,
    challenges: Vec<Challenge>,
}

/// Catalog loaded from YAML
#[derive(Debug, Clone)]
pub struct YamlCatalog {
    catalog: Catalog,
}

impl YamlCatalog {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        let catalog = Catalog::new(document.challenges, document.safeguards)?;
        tracing::debug!(
            challenges = catalog.len(),
            safeguards = catalog.safeguards().len(),
            "catalog parsed"
        );
        Ok(Self { catalog })
    }

    /// Load a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loading catalog file");
        Self::from_yaml_str(&yaml)
    }

    /// The embedded catalog, parsed once per process.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = BUILTIN.get_or_try_init(|| {
            Self::from_yaml_str(BUILTIN_CATALOG_YAML).map(|loaded| loaded.catalog)
        })?;
        Ok(Self {
            catalog: catalog.clone(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl ContentCatalog for YamlCatalog {
    fn challenges(&self) -> &[Challenge] {
        self.catalog.challenges()
    }

    fn safeguards(&self) -> &[OptionItem] {
        self.catalog.safeguards()
    }
}
