// Showroom - core/preview.rs
//
// Card and detail preview helpers: description truncation, services
// "+N more" slicing, and display fallbacks for optional fields.

use crate::core::model::Package;
use crate::util::constants;

/// Truncate `text` to `max_chars` characters, appending an ellipsis when
/// anything was cut. Cuts at the character boundary, not at a word.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], constants::ELLIPSIS),
        None => text.to_string(),
    }
}

/// Featured-slide excerpt: the first `max_chars` characters followed by an
/// ellipsis whether or not anything was cut.
pub fn slide_excerpt(text: &str, max_chars: usize) -> String {
    let cut = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(byte_idx, _)| byte_idx);
    format!("{}{}", &text[..cut], constants::ELLIPSIS)
}

/// Leading slice of a service list plus the count left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesPreview<'a> {
    pub shown: &'a [String],
    pub remaining: usize,
}

impl ServicesPreview<'_> {
    /// "+N more" indicator, or `None` when nothing was left out.
    pub fn more_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("+{} more", self.remaining))
    }
}

/// Preview the first `shown` services.
pub fn services_preview(services: &[String], shown: usize) -> ServicesPreview<'_> {
    let cut = shown.min(services.len());
    ServicesPreview {
        shown: &services[..cut],
        remaining: services.len() - cut,
    }
}

pub fn best_time_or_default(package: &Package) -> &str {
    package
        .best_time
        .as_deref()
        .unwrap_or(constants::DEFAULT_BEST_TIME)
}

pub fn room_size_or_default(package: &Package) -> &str {
    package
        .room_size
        .as_deref()
        .unwrap_or(constants::DEFAULT_ROOM_SIZE)
}
