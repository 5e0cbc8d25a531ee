// Showroom - core/catalog.rs
//
// Catalog definition parsing and validation.
// Core layer: accepts JSON strings, never touches the filesystem.
// I/O is handled by app::loader which feeds content here.

use crate::core::model::{DesignOption, Package, Price, ServiceLevel, Testimonial};
use crate::util::constants;
use crate::util::error::CatalogError;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

// =============================================================================
// JSON deserialization structures (raw input)
// =============================================================================

/// Raw catalog definition as deserialized from JSON.
/// This is validated into a `Catalog` for runtime use.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDefinition {
    pub packages: Vec<PackageRecord>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub design_options: Vec<DesignOption>,
}

/// One package as written in the catalog file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub duration: String,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub location: String,
    pub price: RawPrice,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub room_size: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// Price as it appears on the wire: a number or a label.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Label(String),
}

impl RawPrice {
    fn into_price(self, id: u32) -> Result<Price, CatalogError> {
        match self {
            RawPrice::Number(n) if n.is_finite() && n >= 0.0 => Ok(Price::Amount(n)),
            RawPrice::Number(n) => Err(CatalogError::InvalidPrice {
                id,
                raw: n.to_string(),
            }),
            RawPrice::Label(s) if s == constants::CUSTOM_PRICE_LABEL => Ok(Price::Custom),
            RawPrice::Label(s) => Err(CatalogError::InvalidPrice { id, raw: s }),
        }
    }
}

impl PackageRecord {
    /// Convert a raw record into a `Package`, deriving category and level.
    ///
    /// Field-level checks (slug shape, rating range) happen in
    /// `Catalog::new` so hand-built packages get the same validation.
    pub fn into_package(self) -> Result<Package, CatalogError> {
        let id = u32::try_from(self.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| CatalogError::InvalidId {
                slug: self.slug.clone(),
            })?;

        let price = self.price.into_price(id)?;
        let category = Package::derive_category(&self.title);
        let service_level = ServiceLevel::from_duration(&self.duration);

        Ok(Package {
            id,
            slug: self.slug,
            title: self.title,
            category,
            image: self.image,
            duration: self.duration,
            service_level,
            rating: self.rating,
            review_count: self.review_count,
            location: self.location,
            price,
            description: self.description,
            best_time: self.best_time.filter(|s| !s.trim().is_empty()),
            room_size: self.room_size.filter(|s| !s.trim().is_empty()),
            highlights: self.highlights,
            services: self.services,
        })
    }
}

// =============================================================================
// Catalog (validated, read-only)
// =============================================================================

/// The fixed, validated collection of catalog records.
///
/// Built once; there is no way to add, change, or remove records afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    packages: Vec<Package>,
    testimonials: Vec<Testimonial>,
    design_options: Vec<DesignOption>,
}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid"))
}

impl Catalog {
    /// Validate records and build the catalog.
    ///
    /// Validates:
    /// - package count is within `MAX_PACKAGES`
    /// - ids are positive and unique, slugs well-formed and unique
    /// - titles are non-empty, ratings finite and within 0-5
    /// - testimonial ids and design option ids are unique
    pub fn new(
        packages: Vec<Package>,
        testimonials: Vec<Testimonial>,
        design_options: Vec<DesignOption>,
    ) -> Result<Self, CatalogError> {
        if packages.len() > constants::MAX_PACKAGES {
            return Err(CatalogError::TooManyPackages {
                count: packages.len(),
                max: constants::MAX_PACKAGES,
            });
        }

        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for package in &packages {
            validate_package(package)?;
            if !ids.insert(package.id) {
                return Err(CatalogError::DuplicateId { id: package.id });
            }
            if !slugs.insert(package.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: package.slug.clone(),
                });
            }
        }

        let mut testimonial_ids = HashSet::new();
        for testimonial in &testimonials {
            if !(1..=5).contains(&testimonial.rating) {
                return Err(CatalogError::InvalidRating {
                    kind: "Testimonial",
                    id: testimonial.id,
                    rating: f64::from(testimonial.rating),
                });
            }
            if !testimonial_ids.insert(testimonial.id) {
                return Err(CatalogError::DuplicateKey {
                    kind: "testimonial",
                    key: testimonial.id.to_string(),
                });
            }
        }

        let mut option_ids = HashSet::new();
        for option in &design_options {
            if !option_ids.insert(option.id.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    kind: "design option",
                    key: option.id.clone(),
                });
            }
        }

        Ok(Self {
            packages,
            testimonials,
            design_options,
        })
    }

    /// Convert and validate a parsed definition.
    pub fn from_definition(def: CatalogDefinition) -> Result<Self, CatalogError> {
        let packages = def
            .packages
            .into_iter()
            .map(PackageRecord::into_package)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(packages, def.testimonials, def.design_options)
    }

    /// Parse and validate a JSON catalog definition.
    ///
    /// `source_path` is used for error messages only (not for I/O).
    pub fn parse_json(content: &str, source_path: &Path) -> Result<Self, CatalogError> {
        let def: CatalogDefinition =
            serde_json::from_str(content).map_err(|e| CatalogError::JsonParse {
                path: source_path.to_path_buf(),
                source: e,
            })?;
        let catalog = Self::from_definition(def)?;
        tracing::debug!(
            source = %source_path.display(),
            packages = catalog.packages.len(),
            testimonials = catalog.testimonials.len(),
            design_options = catalog.design_options.len(),
            "Catalog parsed"
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse_json(BUILTIN_CATALOG, Path::new(BUILTIN_CATALOG_NAME))
    }

    /// Packages in catalog (insertion) order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn design_options(&self) -> &[DesignOption] {
        &self.design_options
    }

    /// Look up a design option by key.
    pub fn design_option(&self, id: &str) -> Option<&DesignOption> {
        self.design_options.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Per-package field checks shared by every construction path.
fn validate_package(package: &Package) -> Result<(), CatalogError> {
    if package.id == 0 {
        return Err(CatalogError::InvalidId {
            slug: package.slug.clone(),
        });
    }
    if !slug_pattern().is_match(&package.slug) {
        return Err(CatalogError::InvalidSlug {
            id: package.id,
            slug: package.slug.clone(),
        });
    }
    if package.title.trim().is_empty() {
        return Err(CatalogError::MissingField {
            id: package.id,
            field: "title",
        });
    }
    if !package.rating.is_finite() || !(0.0..=constants::MAX_RATING).contains(&package.rating) {
        return Err(CatalogError::InvalidRating {
            kind: "Package",
            id: package.id,
            rating: package.rating,
        });
    }
    if let Price::Amount(a) = package.price {
        if !a.is_finite() || a < 0.0 {
            return Err(CatalogError::InvalidPrice {
                id: package.id,
                raw: a.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Built-in catalog (embedded at compile time)
// =============================================================================

/// Name reported in diagnostics for the embedded catalog.
pub const BUILTIN_CATALOG_NAME: &str = "catalog.json (built-in)";

/// Embedded JSON for the built-in catalog.
pub const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");
