//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the challenge catalog comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the embedded catalog is used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn uses_builtin(&self) -> bool {
        self.path.is_none()
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if !path.is_file() => Err(ValidationError::CatalogNotFound(path.clone())),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_by_default() {
        let config = CatalogConfig::default();
        assert!(config.uses_builtin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_existing_file_is_valid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CatalogConfig {
            path: Some(file.path().to_path_buf()),
        };
        assert!(!config.uses_builtin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig {
            path: Some(dir.path().join("missing.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogNotFound(_))
        ));
    }
}
