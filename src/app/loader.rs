// Showroom - app/loader.rs
//
// Loads the catalog from either the built-in definition (embedded in the
// binary) or a user-supplied JSON file on disk. A user file that cannot be
// read or validated is reported and the built-in catalog is used instead.

use crate::core::catalog::Catalog;
use crate::util::constants;
use crate::util::error::CatalogError;
use std::path::Path;

/// Read and validate a catalog file from disk.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let metadata = std::fs::metadata(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CATALOG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Catalog::parse_json(&content, path)
}

/// Load the catalog to browse.
///
/// With a user path, that file replaces the built-in catalog when it loads
/// cleanly. Any failure is returned alongside the built-in fallback so the
/// caller can warn without aborting.
///
/// Only the built-in catalog failing is fatal, which means a broken build.
pub fn load(user_catalog: Option<&Path>) -> Result<(Catalog, Vec<CatalogError>), CatalogError> {
    let mut errors = Vec::new();

    if let Some(path) = user_catalog {
        match load_catalog_file(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    packages = catalog.len(),
                    "Loaded user catalog"
                );
                return Ok((catalog, errors));
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "User catalog rejected, falling back to built-in"
                );
                errors.push(e);
            }
        }
    }

    let catalog = Catalog::builtin()?;
    tracing::info!(packages = catalog.len(), "Loaded built-in catalog");
    Ok((catalog, errors))
}
