// Showroom - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. Values are built
// once by `core::catalog` and only ever handed out by shared reference.

use crate::util::constants;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Package
// =============================================================================

/// A single design package in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Unique positive identity key.
    pub id: u32,

    /// Unique URL-safe lookup key (e.g. "minimalist-zen-retreat").
    pub slug: String,

    /// Display name.
    pub title: String,

    /// Grouping label: the first word of `title`, fixed at construction.
    pub category: String,

    /// Path or URI of the representative image. Not interpreted.
    pub image: String,

    /// Free-text duration, e.g. "3-4 Weeks".
    pub duration: String,

    /// Tier derived from `duration` via the service-level table, if it maps.
    #[serde(skip)]
    pub service_level: Option<ServiceLevel>,

    /// Average rating, 0.0 to 5.0.
    pub rating: f64,

    /// Number of reviews behind `rating`.
    pub review_count: u32,

    /// Free-text location or setting.
    pub location: String,

    /// Price per room, or priced on request.
    pub price: Price,

    /// Full description. List views show a truncated preview.
    pub description: String,

    /// Recommended season; `None` falls back to a display default.
    pub best_time: Option<String>,

    /// Suitable room size; `None` falls back to a display default.
    pub room_size: Option<String>,

    /// Ordered feature highlights, rendered as-is.
    pub highlights: Vec<String>,

    /// Ordered service names, rendered as-is.
    pub services: Vec<String>,
}

impl Package {
    /// Derive the category label for a title: its first whitespace-delimited
    /// token, or an empty string for a blank title.
    pub fn derive_category(title: &str) -> String {
        title.split_whitespace().next().unwrap_or_default().to_string()
    }

    /// True if this package's category equals `label`, ignoring case.
    pub fn in_category(&self, label: &str) -> bool {
        self.category.to_lowercase() == label.to_lowercase()
    }
}

// =============================================================================
// Price
// =============================================================================

/// Price of a package: a numeric amount in currency units, or "Custom"
/// for packages quoted individually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Amount(f64),
    Custom,
}

impl Price {
    /// Numeric amount, or `None` for custom pricing.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(a) => Some(*a),
            Price::Custom => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Price::Custom)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(a) => write!(f, "${a}"),
            Price::Custom => f.write_str(constants::CUSTOM_PRICE_LABEL),
        }
    }
}

/// Serialises as a bare number or the literal "Custom", matching the
/// catalog definition format.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Amount(a) => serializer.serialize_f64(*a),
            Price::Custom => serializer.serialize_str(constants::CUSTOM_PRICE_LABEL),
        }
    }
}

// =============================================================================
// Service level
// =============================================================================

/// Informally ordered service tiers, least to most comprehensive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ServiceLevel {
    Basic,
    Standard,
    Premium,
    Complete,
}

impl ServiceLevel {
    /// Map a duration string through the fixed tier table.
    ///
    /// Matching is exact and case-sensitive; anything else has no level.
    pub fn from_duration(duration: &str) -> Option<Self> {
        match duration {
            "Basic" => Some(ServiceLevel::Basic),
            "Standard" => Some(ServiceLevel::Standard),
            "Premium" => Some(ServiceLevel::Premium),
            "Complete" => Some(ServiceLevel::Complete),
            _ => None,
        }
    }

    /// Table ordinal, 1 (Basic) to 4 (Complete).
    pub fn ordinal(&self) -> u8 {
        match self {
            ServiceLevel::Basic => 1,
            ServiceLevel::Standard => 2,
            ServiceLevel::Premium => 3,
            ServiceLevel::Complete => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceLevel::Basic => "Basic",
            ServiceLevel::Standard => "Standard",
            ServiceLevel::Premium => "Premium",
            ServiceLevel::Complete => "Complete",
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Testimonials and design options
// =============================================================================

/// A customer quote shown in the testimonials carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub image: String,
    /// Whole stars, 1 to 5.
    pub rating: u8,
    pub text: String,
}

/// A bookable design service tier (consultation, standard, premium, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignOption {
    /// Stable key used by the booking form, e.g. "standard".
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
}
