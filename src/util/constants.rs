// Showroom - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Showroom";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Showroom";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum number of packages a catalog may hold.
pub const MAX_PACKAGES: usize = 1_000;

/// Maximum size of a user catalog JSON file in bytes.
pub const MAX_CATALOG_FILE_SIZE: u64 = 4 * 1024 * 1024; // 4 MB

/// Highest rating a package or testimonial may carry.
pub const MAX_RATING: f64 = 5.0;

/// Literal used on the wire for packages priced on request.
pub const CUSTOM_PRICE_LABEL: &str = "Custom";

/// Sentinel category label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Design option selected when the booking form opens.
pub const DEFAULT_DESIGN_OPTION: &str = "standard";

/// Maximum regex pattern length accepted for title/description search.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 1_024;

// =============================================================================
// Display defaults
// =============================================================================

/// Characters of description shown on list cards before the ellipsis.
pub const DEFAULT_DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Minimum configurable description preview length.
pub const MIN_DESCRIPTION_PREVIEW_CHARS: usize = 20;

/// Maximum configurable description preview length.
pub const MAX_DESCRIPTION_PREVIEW_CHARS: usize = 1_000;

/// Suffix appended to truncated descriptions.
pub const ELLIPSIS: &str = "...";

/// Services listed on a list card before the "+N more" indicator.
pub const DEFAULT_CARD_SERVICES_SHOWN: usize = 3;

/// Services listed in a detail header before the "+N more" indicator.
pub const DETAIL_SERVICES_SHOWN: usize = 4;

/// Hard upper bound on configurable services preview length.
pub const MAX_SERVICES_SHOWN: usize = 20;

/// Number of related packages shown under a detail view.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Number of packages in the featured slider.
pub const DEFAULT_FEATURED_COUNT: usize = 5;

/// Characters of description on a featured slide. The slide always ends in
/// an ellipsis, even when nothing was cut.
pub const FEATURED_DESCRIPTION_CHARS: usize = 150;

/// Services listed on a featured slide. No "+N more" indicator there.
pub const FEATURED_SERVICES_SHOWN: usize = 3;

/// Upper bound for both related and featured counts.
pub const MAX_LIST_LIMIT: usize = 20;

/// Fallback shown when a package has no `best_time`.
pub const DEFAULT_BEST_TIME: &str = "All Year";

/// Fallback shown when a package has no `room_size`.
pub const DEFAULT_ROOM_SIZE: &str = "Flexible";

// =============================================================================
// Carousel rotation
// =============================================================================

/// Default interval between automatic carousel advances (ms).
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5_000;

/// Minimum user-configurable rotation interval (ms).
pub const MIN_ROTATION_INTERVAL_MS: u64 = 1_000;

/// Maximum user-configurable rotation interval (ms).
pub const MAX_ROTATION_INTERVAL_MS: u64 = 60_000;

/// How often the rotation thread checks its cancel flag while sleeping (ms).
pub const ROTATION_CANCEL_CHECK_INTERVAL_MS: u64 = 50;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Export
// =============================================================================

/// Maximum number of packages that can be exported in a single operation.
pub const MAX_EXPORT_PACKAGES: usize = MAX_PACKAGES;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
