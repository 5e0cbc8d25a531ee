// Showroom - ui/cards.rs
//
// List-card rendering for the portfolio list, the featured slider and the
// testimonials carousel.

use crate::core::model::{Package, Testimonial};
use crate::core::preview;
use crate::util::constants;
use std::fmt::Write as _;

/// Card sizing taken from `[display]` config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    pub description_chars: usize,
    pub services_shown: usize,
}

/// Render one package as a list card.
pub fn render_card(package: &Package, opts: CardOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [{}]", package.title, package.slug);
    let _ = writeln!(
        out,
        "  {} | {} | {} | {:.1} ({} reviews)",
        package.category, package.duration, package.price, package.rating, package.review_count
    );
    let _ = writeln!(out, "  {}", package.location);
    let _ = writeln!(
        out,
        "  {}",
        preview::truncate_description(&package.description, opts.description_chars)
    );

    let services = preview::services_preview(&package.services, opts.services_shown);
    if !services.shown.is_empty() || services.remaining > 0 {
        let mut line = services.shown.join(", ");
        if let Some(more) = services.more_label() {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(&more);
        }
        let _ = writeln!(out, "  Services: {line}");
    }
    out
}

/// Render a list of cards separated by blank lines.
pub fn render_list(packages: &[&Package], opts: CardOptions) -> String {
    if packages.is_empty() {
        return "No packages match the current filter.\n".to_string();
    }
    packages
        .iter()
        .map(|p| render_card(p, opts))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One featured-slider slide: category badge, title, a fixed-length
/// excerpt and the first few services.
pub fn render_slide(package: &Package) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{} Design]", package.category);
    let _ = writeln!(out, "{}", package.title);
    let _ = writeln!(
        out,
        "  {}",
        preview::slide_excerpt(&package.description, constants::FEATURED_DESCRIPTION_CHARS)
    );
    let services = preview::services_preview(&package.services, constants::FEATURED_SERVICES_SHOWN);
    if !services.shown.is_empty() {
        let _ = writeln!(out, "  {}", services.shown.join(" | "));
    }
    let _ = writeln!(out, "  View: /portfolio/{}", package.slug);
    out
}

/// One carousel slide for a testimonial, with its position.
pub fn render_testimonial(testimonial: &Testimonial, index: usize, total: usize) -> String {
    let stars = "*".repeat(usize::from(testimonial.rating));
    format!(
        "({}/{}) {} {}, {}\n  \"{}\"\n",
        index + 1,
        total,
        stars,
        testimonial.name,
        testimonial.location,
        testimonial.text
    )
}
