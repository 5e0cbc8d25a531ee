// Showroom - core/export.rs
//
// CSV and JSON export of package lists.
// Core layer: writes to any Write trait object.

use crate::core::model::{Package, Price};
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

fn check_limit(count: usize) -> Result<(), ExportError> {
    if count > constants::MAX_EXPORT_PACKAGES {
        return Err(ExportError::TooManyPackages {
            count,
            max: constants::MAX_EXPORT_PACKAGES,
        });
    }
    Ok(())
}

/// Export packages to CSV format.
///
/// Writes: id, slug, title, category, duration, rating, review_count, location, price.
/// Custom prices are written as the literal "Custom".
pub fn export_csv<W: Write>(
    packages: &[&Package],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(packages.len())?;

    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "slug",
            "title",
            "category",
            "duration",
            "rating",
            "review_count",
            "location",
            "price",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for package in packages {
        let price = match package.price {
            Price::Amount(a) => a.to_string(),
            Price::Custom => constants::CUSTOM_PRICE_LABEL.to_string(),
        };

        csv_writer
            .write_record([
                &package.id.to_string(),
                &package.slug,
                &package.title,
                &package.category,
                &package.duration,
                &package.rating.to_string(),
                &package.review_count.to_string(),
                &package.location,
                &price,
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %export_path.display(), count, "CSV export written");
    Ok(count)
}

/// Export packages to JSON format (array of objects, catalog field names).
pub fn export_json<W: Write>(
    packages: &[&Package],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(packages.len())?;

    serde_json::to_writer_pretty(writer, packages).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %export_path.display(), count = packages.len(), "JSON export written");
    Ok(packages.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use std::path::PathBuf;

    #[test]
    fn test_csv_export() {
        let catalog = Catalog::builtin().unwrap();
        let packages: Vec<&Package> = catalog.packages().iter().collect();
        let mut buf = Vec::new();
        let count = export_csv(&packages, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 6);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,slug,title,category"));
        assert!(output.contains("1,contemporary-urban-makeover,Contemporary Urban Makeover,Contemporary"));
        assert!(output.contains(",Custom\n"));
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn test_json_export() {
        let catalog = Catalog::builtin().unwrap();
        let packages: Vec<&Package> = catalog.packages().iter().take(1).collect();
        let mut buf = Vec::new();
        let count = export_json(&packages, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["slug"], "contemporary-urban-makeover");
        assert_eq!(value[0]["reviewCount"], 95);
        assert_eq!(value[0]["category"], "Contemporary");
    }

    #[test]
    fn test_empty_export_writes_header_only() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
