// Showroom - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// A slug that matches nothing is NOT an error: it is `Lookup::Absent`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Showroom operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ShowroomError {
    /// Catalog loading or validation failed.
    Catalog(CatalogError),

    /// A query could not be built (bad sort key, bad regex).
    Query(QueryError),

    /// Export operation failed.
    Export(ExportError),

    /// Booking request was rejected.
    Booking(BookingError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ShowroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "Catalog error: {e}"),
            Self::Query(e) => write!(f, "Query error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Booking(e) => write!(f, "Booking error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ShowroomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Query(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Booking(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors related to catalog loading and validation.
#[derive(Debug)]
pub enum CatalogError {
    /// JSON catalog definition could not be parsed.
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Catalog file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Two packages share an id.
    DuplicateId { id: u32 },

    /// Two packages share a slug.
    DuplicateSlug { slug: String },

    /// A testimonial or design option key is used twice.
    DuplicateKey { kind: &'static str, key: String },

    /// Package id must be a positive integer.
    InvalidId { slug: String },

    /// Slug is not lowercase-hyphenated.
    InvalidSlug { id: u32, slug: String },

    /// A required text field is empty.
    MissingField { id: u32, field: &'static str },

    /// Price is neither a non-negative number nor the "Custom" label.
    InvalidPrice { id: u32, raw: String },

    /// Rating is outside the allowed range or not finite.
    InvalidRating {
        kind: &'static str,
        id: u32,
        rating: f64,
    },

    /// Maximum number of packages exceeded.
    TooManyPackages { count: usize, max: usize },

    /// I/O error reading a catalog file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonParse { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Catalog '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::DuplicateId { id } => write!(f, "Duplicate package id {id}"),
            Self::DuplicateSlug { slug } => write!(f, "Duplicate package slug '{slug}'"),
            Self::DuplicateKey { kind, key } => write!(f, "Duplicate {kind} key '{key}'"),
            Self::InvalidId { slug } => {
                write!(f, "Package '{slug}': id must be a positive integer")
            }
            Self::InvalidSlug { id, slug } => write!(
                f,
                "Package {id}: slug '{slug}' must be lowercase words joined by hyphens"
            ),
            Self::MissingField { id, field } => {
                write!(f, "Package {id}: missing required field '{field}'")
            }
            Self::InvalidPrice { id, raw } => write!(
                f,
                "Package {id}: price '{raw}' must be a non-negative number or \"Custom\""
            ),
            Self::InvalidRating { kind, id, rating } => {
                write!(f, "{kind} {id}: rating {rating} is outside 0-5")
            }
            Self::TooManyPackages { count, max } => {
                write!(f, "Catalog holds {count} packages, maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading catalog '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::JsonParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogError> for ShowroomError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Query errors
// ---------------------------------------------------------------------------

/// Errors raised while building a query. Running a query never fails.
#[derive(Debug)]
pub enum QueryError {
    /// Sort key is not one of the supported criteria.
    UnknownSortKey { key: String },

    /// User-provided regex is invalid.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// User-provided regex exceeds the maximum pattern length.
    RegexTooLong { length: usize, max_length: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSortKey { key } => write!(
                f,
                "Unknown sort key '{key}'. Expected one of: recommended, recent, \
                 price-low, price-high, rating, level-basic, level-premium, \
                 title-asc, title-desc"
            ),
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid search regex '{pattern}': {source}")
            }
            Self::RegexTooLong { length, max_length } => write!(
                f,
                "Search regex is {length} chars, exceeds maximum of {max_length}"
            ),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<QueryError> for ShowroomError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed maximum package count.
    TooManyPackages { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyPackages { count, max } => write!(
                f,
                "Export of {count} packages exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for ShowroomError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Always reported as startup warnings with defaults applied; a config
/// problem never aborts a command, so there is no `ShowroomError` variant.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Booking errors
// ---------------------------------------------------------------------------

/// Errors raised by the booking desk before a request is acknowledged.
#[derive(Debug)]
pub enum BookingError {
    /// Selected design option does not exist in the catalog.
    UnknownOption { option_id: String },

    /// A required form field was left empty.
    MissingField { field: &'static str },

    /// Date is not `YYYY-MM-DD`.
    InvalidDate {
        raw: String,
        source: chrono::ParseError,
    },

    /// Time is not `HH:MM`.
    InvalidTime {
        raw: String,
        source: chrono::ParseError,
    },

    /// Passenger count must be at least one.
    NoPassengers,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption { option_id } => {
                write!(f, "Design option '{option_id}' does not exist")
            }
            Self::MissingField { field } => write!(f, "Booking field '{field}' is required"),
            Self::InvalidDate { raw, source } => {
                write!(f, "Date '{raw}' is not YYYY-MM-DD: {source}")
            }
            Self::InvalidTime { raw, source } => write!(f, "Time '{raw}' is not HH:MM: {source}"),
            Self::NoPassengers => write!(f, "Passenger count must be at least 1"),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::InvalidTime { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<BookingError> for ShowroomError {
    fn from(e: BookingError) -> Self {
        Self::Booking(e)
    }
}

/// Convenience type alias for Showroom results.
pub type Result<T> = std::result::Result<T, ShowroomError>;
