// Showroom - platform/config.rs
//
// Platform-specific data directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for Showroom configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/showroom/).
    pub config_dir: PathBuf,

    /// Data directory for session state.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works
/// with an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[display]` section.
    pub display: DisplaySection,
    /// `[carousel]` section.
    pub carousel: CarouselSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Path to a JSON catalog replacing the built-in one.
    pub file: Option<String>,
}

/// `[display]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Characters of description on list cards.
    pub description_preview_chars: Option<usize>,
    /// Services listed on a card before "+N more".
    pub card_services_shown: Option<usize>,
    /// Related packages under a detail view.
    pub related_limit: Option<usize>,
    /// Packages in the featured slider.
    pub featured_count: Option<usize>,
}

/// `[carousel]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CarouselSection {
    /// Interval between automatic advances in ms.
    pub interval_ms: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Catalog --
    /// User catalog file, if configured.
    pub catalog_file: Option<PathBuf>,

    // -- Display --
    pub description_preview_chars: usize,
    pub card_services_shown: usize,
    pub related_limit: usize,
    pub featured_count: usize,

    // -- Carousel --
    pub rotation_interval: Duration,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            description_preview_chars: constants::DEFAULT_DESCRIPTION_PREVIEW_CHARS,
            card_services_shown: constants::DEFAULT_CARD_SERVICES_SHOWN,
            related_limit: constants::DEFAULT_RELATED_LIMIT,
            featured_count: constants::DEFAULT_FEATURED_COUNT,
            rotation_interval: Duration::from_millis(constants::DEFAULT_ROTATION_INTERVAL_MS),
            log_level: None,
            log_file: None,
        }
    }
}

/// Accept `value` if it lies in `range`, otherwise record a warning.
fn in_range<T>(
    section_key: &str,
    value: Option<T>,
    range: RangeInclusive<T>,
    default: T,
    warnings: &mut Vec<ConfigError>,
) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    match value {
        Some(v) if range.contains(&v) => v,
        Some(v) => {
            warnings.push(ConfigError::ValueOutOfRange {
                field: section_key.to_string(),
                value: v.to_string(),
                expected: format!(
                    "{}-{} (using default {default})",
                    range.start(),
                    range.end()
                ),
            });
            default
        }
        None => default,
    }
}

/// Validate parsed sections against named constants, accumulating warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings: Vec<ConfigError> = Vec::new();
    let defaults = AppConfig::default();

    let catalog_file = raw
        .catalog
        .file
        .filter(|f| !f.trim().is_empty())
        .map(PathBuf::from);

    let description_preview_chars = in_range(
        "[display] description_preview_chars",
        raw.display.description_preview_chars,
        constants::MIN_DESCRIPTION_PREVIEW_CHARS..=constants::MAX_DESCRIPTION_PREVIEW_CHARS,
        defaults.description_preview_chars,
        &mut warnings,
    );
    let card_services_shown = in_range(
        "[display] card_services_shown",
        raw.display.card_services_shown,
        0..=constants::MAX_SERVICES_SHOWN,
        defaults.card_services_shown,
        &mut warnings,
    );
    let related_limit = in_range(
        "[display] related_limit",
        raw.display.related_limit,
        1..=constants::MAX_LIST_LIMIT,
        defaults.related_limit,
        &mut warnings,
    );
    let featured_count = in_range(
        "[display] featured_count",
        raw.display.featured_count,
        1..=constants::MAX_LIST_LIMIT,
        defaults.featured_count,
        &mut warnings,
    );
    let interval_ms = in_range(
        "[carousel] interval_ms",
        raw.carousel.interval_ms,
        constants::MIN_ROTATION_INTERVAL_MS..=constants::MAX_ROTATION_INTERVAL_MS,
        constants::DEFAULT_ROTATION_INTERVAL_MS,
        &mut warnings,
    );

    let mut log_level = None;
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: format!(
                    "one of error, warn, info, debug, trace (using default {})",
                    constants::DEFAULT_LOG_LEVEL
                ),
            });
        }
    }

    let log_file = raw.logging.file.filter(|f| !f.is_empty());

    let config = AppConfig {
        catalog_file,
        description_preview_chars,
        card_services_shown,
        related_limit,
        featured_count,
        rotation_interval: Duration::from_millis(interval_ms),
        log_level,
        log_file,
    };

    (config, warnings)
}

/// Check a command-line rotation interval against the `[carousel]
/// interval_ms` bounds. Out of range keeps `configured` and reports why.
pub fn rotation_interval_override(
    interval_ms: u64,
    configured: Duration,
) -> (Duration, Option<ConfigError>) {
    let mut warnings = Vec::new();
    let configured_ms = u64::try_from(configured.as_millis())
        .unwrap_or(constants::DEFAULT_ROTATION_INTERVAL_MS);
    let ms = in_range(
        "--interval-ms",
        Some(interval_ms),
        constants::MIN_ROTATION_INTERVAL_MS..=constants::MAX_ROTATION_INTERVAL_MS,
        configured_ms,
        &mut warnings,
    );
    (Duration::from_millis(ms), warnings.pop())
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal problems.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unparseable, returns defaults with a warning; the
/// application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    if !config_path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load_str(content: &str) -> (AppConfig, Vec<ConfigError>) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        load_config(&path)
    }

    #[test]
    fn test_missing_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_applied() {
        let (config, warnings) = load_str(
            r#"
            [catalog]
            file = "/srv/catalog.json"

            [display]
            description_preview_chars = 60
            related_limit = 4

            [carousel]
            interval_ms = 2500

            [logging]
            level = "DEBUG"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.catalog_file, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.description_preview_chars, 60);
        assert_eq!(config.related_limit, 4);
        assert_eq!(config.card_services_shown, 3);
        assert_eq!(config.rotation_interval, Duration::from_millis(2500));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_default() {
        let (config, warnings) = load_str(
            r#"
            [display]
            description_preview_chars = 5
            featured_count = 0

            [carousel]
            interval_ms = 10
            "#,
        );
        assert_eq!(warnings.len(), 3);
        assert_eq!(config.description_preview_chars, 100);
        assert_eq!(config.featured_count, 5);
        assert_eq!(config.rotation_interval, Duration::from_millis(5000));
    }

    #[test]
    fn test_unknown_log_level_warns() {
        let (config, warnings) = load_str("[logging]\nlevel = \"loud\"\n");
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("loud"));
    }

    #[test]
    fn test_unparseable_config_warns() {
        let (config, warnings) = load_str("[display\nbroken");
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigError::TomlParse { .. }));
    }

    #[test]
    fn test_interval_override_uses_config_bounds() {
        let configured = Duration::from_millis(4000);

        let (interval, warning) = rotation_interval_override(1500, configured);
        assert_eq!(interval, Duration::from_millis(1500));
        assert!(warning.is_none());

        let (interval, warning) = rotation_interval_override(10, configured);
        assert_eq!(interval, configured);
        let warning = warning.unwrap();
        assert!(matches!(warning, ConfigError::ValueOutOfRange { .. }));
        assert!(warning.to_string().contains("--interval-ms"));

        let (interval, warning) = rotation_interval_override(60_001, configured);
        assert_eq!(interval, configured);
        assert!(warning.is_some());
    }

    #[test]
    fn test_config_problems_stay_non_fatal() {
        let (config, warnings) = load_str("[display]\nrelated_limit = 99\n");
        assert_eq!(config.related_limit, 3);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("related_limit"));
        assert!(std::error::Error::source(&warnings[0]).is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (_, warnings) = load_str("[future]\nanswer = 42\n");
        assert!(warnings.is_empty());
    }
}
