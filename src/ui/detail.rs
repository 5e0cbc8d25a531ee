// Showroom - ui/detail.rs
//
// Detail view for a single package: loading placeholder, not-found message,
// or full header with highlights, services and related packages.

use crate::core::model::Package;
use crate::core::preview;
use crate::core::query::Lookup;
use crate::util::constants;
use std::fmt::Write as _;

pub const LOADING_TEXT: &str = "Loading...";

/// Message shown when a slug has no matching package.
pub fn not_found_text(slug: &str) -> String {
    format!("Package Not Found: no package has the slug '{slug}'.")
}

/// Render a lookup. `related` is only shown for a found package.
pub fn render(lookup: Lookup<'_>, slug: &str, related: &[&Package]) -> String {
    match lookup {
        Lookup::Pending => format!("{LOADING_TEXT}\n"),
        Lookup::Absent => format!("{}\n", not_found_text(slug)),
        Lookup::Found(package) => render_found(package, related),
    }
}

fn render_found(package: &Package, related: &[&Package]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", package.title);
    let _ = writeln!(out, "{}", "=".repeat(package.title.chars().count()));
    let _ = writeln!(out, "Category:   {}", package.category);
    let _ = writeln!(out, "Location:   {}", package.location);
    let _ = writeln!(out, "Duration:   {}", package.duration);
    if let Some(level) = package.service_level {
        let _ = writeln!(out, "Level:      {level}");
    }
    let _ = writeln!(
        out,
        "Rating:     {:.1} ({} reviews)",
        package.rating, package.review_count
    );
    let _ = writeln!(out, "Price:      {}", package.price);
    let _ = writeln!(out, "Best time:  {}", preview::best_time_or_default(package));
    let _ = writeln!(out, "Room size:  {}", preview::room_size_or_default(package));

    let header = preview::services_preview(&package.services, constants::DETAIL_SERVICES_SHOWN);
    if !header.shown.is_empty() {
        let mut line = header.shown.join(" / ");
        if let Some(more) = header.more_label() {
            let _ = write!(line, " {more}");
        }
        let _ = writeln!(out, "Includes:   {line}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", package.description);

    if !package.highlights.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Highlights:");
        for h in &package.highlights {
            let _ = writeln!(out, "  - {h}");
        }
    }

    if !package.services.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Services:");
        for s in &package.services {
            let _ = writeln!(out, "  - {s}");
        }
    }

    if !related.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Related packages:");
        for r in related {
            let _ = writeln!(out, "  {} ({}) {}", r.title, r.slug, r.price);
        }
    }
    out
}
