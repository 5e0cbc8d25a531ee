// Showroom - tests/e2e_catalog.rs
//
// End-to-end tests for catalog loading and the query pipeline.
//
// These tests exercise the embedded catalog, real JSON files on disk and the
// real loader fallback. No mocks.

use showroom::app::loader;
use showroom::core::catalog::Catalog;
use showroom::core::model::Package;
use showroom::core::query::{Lookup, PackageFilter, QueryEngine, SortCriterion};
use showroom::util::error::CatalogError;
use std::path::PathBuf;
use std::sync::Arc;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn builtin_engine() -> QueryEngine {
    QueryEngine::new(Arc::new(Catalog::builtin().expect("built-in catalog is valid")))
}

fn sample_engine() -> QueryEngine {
    let catalog =
        loader::load_catalog_file(&fixture("sample_catalog.json")).expect("fixture is valid");
    QueryEngine::new(Arc::new(catalog))
}

fn ids(packages: &[&Package]) -> Vec<u32> {
    packages.iter().map(|p| p.id).collect()
}

// =============================================================================
// Slug lookup
// =============================================================================

#[test]
fn e2e_find_by_slug_on_builtin_catalog() {
    let engine = builtin_engine();

    let found = engine.find_by_slug("contemporary-urban-makeover");
    assert_eq!(found.found().map(|p| p.id), Some(1));

    assert_eq!(engine.find_by_slug("does-not-exist"), Lookup::Absent);
    assert!(engine.find_by_slug("Contemporary-Urban-Makeover").is_absent());
    assert_ne!(Lookup::default(), Lookup::Absent);
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn e2e_every_sort_is_a_permutation() {
    let engine = builtin_engine();
    let mut all = ids(&engine.sort_by(SortCriterion::Recommended));
    all.sort_unstable();

    for criterion in SortCriterion::all() {
        let mut sorted = ids(&engine.sort_by(*criterion));
        sorted.sort_unstable();
        assert_eq!(sorted, all, "{criterion} dropped or duplicated a package");
    }
}

#[test]
fn e2e_price_sorts_reverse_with_custom_last() {
    let engine = builtin_engine();
    let low = ids(&engine.sort_by(SortCriterion::PriceLow));
    let high = ids(&engine.sort_by(SortCriterion::PriceHigh));

    assert_eq!(low, vec![2, 1, 4, 3, 5, 6]);
    assert_eq!(high, vec![5, 3, 4, 1, 2, 6]);

    let mut priced_low = low[..5].to_vec();
    priced_low.reverse();
    assert_eq!(priced_low, high[..5]);
}

#[test]
fn e2e_rating_sort_is_non_increasing_and_stable() {
    let engine = builtin_engine();
    let sorted = engine.sort_by(SortCriterion::Rating);

    assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));
    assert_eq!(ids(&sorted), vec![6, 4, 1, 3, 5, 2]);
}

#[test]
fn e2e_level_sorts_put_unmapped_last() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.sort_by(SortCriterion::LevelBasic)), vec![2, 1, 4, 3]);
    assert_eq!(ids(&engine.sort_by(SortCriterion::LevelPremium)), vec![4, 1, 2, 3]);
}

#[test]
fn e2e_sample_catalog_orders() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.sort_by(SortCriterion::PriceLow)), vec![2, 4, 1, 3]);
    assert_eq!(ids(&engine.sort_by(SortCriterion::PriceHigh)), vec![1, 4, 2, 3]);
    assert_eq!(ids(&engine.sort_by(SortCriterion::Rating)), vec![2, 4, 1, 3]);
    assert_eq!(ids(&engine.sort_by(SortCriterion::Recent)), vec![4, 3, 2, 1]);
    assert_eq!(ids(&engine.sort_by(SortCriterion::TitleAsc)), vec![4, 1, 3, 2]);
    assert_eq!(ids(&engine.sort_by(SortCriterion::TitleDesc)), vec![2, 3, 1, 4]);
}

#[test]
fn e2e_unknown_sort_key() {
    assert!("cheapest".parse::<SortCriterion>().is_err());
    assert_eq!(
        SortCriterion::from_key_or_default("cheapest"),
        SortCriterion::Recent
    );
}

#[test]
fn e2e_queries_are_idempotent() {
    let engine = builtin_engine();
    for criterion in SortCriterion::all() {
        assert_eq!(
            ids(&engine.sort_by(*criterion)),
            ids(&engine.sort_by(*criterion))
        );
    }
    assert_eq!(
        engine.distinct_categories(),
        engine.distinct_categories()
    );
    // Sorting never reorders the catalog itself.
    let catalog_order: Vec<u32> = engine.catalog().packages().iter().map(|p| p.id).collect();
    assert_eq!(catalog_order, vec![1, 2, 3, 4, 5, 6]);
}

// =============================================================================
// Categories and filters
// =============================================================================

#[test]
fn e2e_distinct_categories() {
    let builtin = builtin_engine();
    assert_eq!(
        builtin.distinct_categories(),
        vec!["Contemporary", "Minimalist", "Traditional", "Industrial", "Luxury", "Your"]
    );

    // "Modern" and "modern" count once; the first spelling is kept.
    let sample = sample_engine();
    assert_eq!(sample.distinct_categories(), vec!["Modern", "Rustic", "Coastal"]);
}

#[test]
fn e2e_category_filter() {
    let engine = builtin_engine();
    assert_eq!(engine.filter_by_category("all").len(), 6);
    assert_eq!(engine.filter_by_category("ALL").len(), 6);
    assert!(engine.filter_by_category("Nonexistent").is_empty());
    assert_eq!(ids(&engine.filter_by_category("luxury")), vec![5]);

    let sample = sample_engine();
    assert_eq!(ids(&sample.filter_by_category("MODERN")), vec![1, 3]);
}

#[test]
fn e2e_combined_filter_and_sort() {
    let engine = sample_engine();
    let mut filter = PackageFilter::category("modern");
    filter.text_search = "STUDIO".to_string();
    assert_eq!(ids(&engine.query(&filter, SortCriterion::Recommended)), vec![3]);

    let mut filter = PackageFilter::default();
    filter.set_regex("(?i)timber|linen").unwrap();
    assert_eq!(ids(&engine.query(&filter, SortCriterion::Recent)), vec![4, 2]);
}

// =============================================================================
// Related and featured
// =============================================================================

#[test]
fn e2e_related_excludes_self_and_respects_limit() {
    let engine = builtin_engine();
    let package = engine.find_by_slug("traditional-elegance-revival").found().unwrap();

    assert_eq!(ids(&engine.related_to(package, 3)), vec![1, 2, 4]);
    assert_eq!(engine.related_to(package, 10).len(), 5);
    assert!(engine.related_to(package, 0).is_empty());
}

#[test]
fn e2e_featured_takes_leading_packages() {
    let engine = builtin_engine();
    assert_eq!(ids(&engine.featured(5)), vec![1, 2, 3, 4, 5]);
    assert_eq!(engine.featured(50).len(), 6);
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn e2e_sample_catalog_fields() {
    let engine = sample_engine();
    let cabin = engine.find_by_slug("rustic-cabin").found().unwrap();
    assert_eq!(cabin.category, "Rustic");
    assert!(cabin.best_time.is_none());

    let studio = engine.find_by_slug("modern-studio").found().unwrap();
    assert!(studio.price.is_custom());
    assert!(studio.service_level.is_none());

    assert_eq!(engine.catalog().testimonials().len(), 1);
    assert!(engine.catalog().design_option("standard").is_some());
}

#[test]
fn e2e_broken_user_catalog_falls_back_to_builtin() {
    let (catalog, errors) = loader::load(Some(&fixture("broken_catalog.json"))).unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], CatalogError::DuplicateId { id: 1 }));
}

#[test]
fn e2e_missing_user_catalog_falls_back_to_builtin() {
    let (catalog, errors) = loader::load(Some(&fixture("no_such_catalog.json"))).unwrap();
    assert_eq!(catalog.len(), 6);
    assert!(matches!(errors[0], CatalogError::Io { .. }));
}
