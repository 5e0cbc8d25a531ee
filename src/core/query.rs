// Showroom - core/query.rs
//
// Catalog query engine: slug lookup, multi-key sorting, category and text
// filtering, distinct categories, related packages.
// Core layer: pure logic over an injected read-only catalog. Every operation
// returns a fresh sequence; the catalog order is never touched.

use crate::core::catalog::Catalog;
use crate::core::model::{Package, Price};
use crate::util::constants;
use crate::util::error::QueryError;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Lookup
// =============================================================================

/// Three-state result of a slug lookup.
///
/// `Pending` is what a view holds before the query has run, so "loading"
/// can be rendered separately from "not found".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lookup<'a> {
    #[default]
    Pending,
    Found(&'a Package),
    Absent,
}

impl<'a> Lookup<'a> {
    pub fn found(&self) -> Option<&'a Package> {
        match self {
            Lookup::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Lookup::Pending)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }
}

// =============================================================================
// Sort criteria
// =============================================================================

/// Supported orderings for package lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortCriterion {
    /// Catalog order.
    #[default]
    Recommended,
    /// Highest id first.
    Recent,
    /// Cheapest first; custom pricing last.
    PriceLow,
    /// Most expensive first; custom pricing last.
    PriceHigh,
    /// Highest rating first.
    Rating,
    /// Basic tier first; packages without a tier last.
    LevelBasic,
    /// Complete tier first; packages without a tier last.
    LevelPremium,
    /// Title A-Z.
    TitleAsc,
    /// Title Z-A.
    TitleDesc,
}

impl SortCriterion {
    /// Returns all variants in menu order.
    pub fn all() -> &'static [SortCriterion] {
        &[
            SortCriterion::Recommended,
            SortCriterion::Recent,
            SortCriterion::PriceLow,
            SortCriterion::PriceHigh,
            SortCriterion::Rating,
            SortCriterion::LevelBasic,
            SortCriterion::LevelPremium,
            SortCriterion::TitleAsc,
            SortCriterion::TitleDesc,
        ]
    }

    /// Wire key, e.g. "price-low".
    pub fn key(&self) -> &'static str {
        match self {
            SortCriterion::Recommended => "recommended",
            SortCriterion::Recent => "recent",
            SortCriterion::PriceLow => "price-low",
            SortCriterion::PriceHigh => "price-high",
            SortCriterion::Rating => "rating",
            SortCriterion::LevelBasic => "level-basic",
            SortCriterion::LevelPremium => "level-premium",
            SortCriterion::TitleAsc => "title-asc",
            SortCriterion::TitleDesc => "title-desc",
        }
    }

    /// Human-readable label for sort menus.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::Recommended => "Recommended",
            SortCriterion::Recent => "Most Recent",
            SortCriterion::PriceLow => "Price: Low to High",
            SortCriterion::PriceHigh => "Price: High to Low",
            SortCriterion::Rating => "Highest Rated",
            SortCriterion::LevelBasic => "Service Level: Basic to Complete",
            SortCriterion::LevelPremium => "Service Level: Complete to Basic",
            SortCriterion::TitleAsc => "Title (A-Z)",
            SortCriterion::TitleDesc => "Title (Z-A)",
        }
    }

    /// Parse a key, falling back to `Recent` when it is not recognised.
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            tracing::debug!(key, "Unrecognised sort key, using most recent");
            SortCriterion::Recent
        })
    }

    /// Ordering between two packages under this criterion.
    ///
    /// Packages with no comparable key (custom price, no service level)
    /// compare greater than every keyed package in both directions, so
    /// they always land at the end.
    pub fn compare(&self, a: &Package, b: &Package) -> Ordering {
        match self {
            SortCriterion::Recommended => Ordering::Equal,
            SortCriterion::Recent => b.id.cmp(&a.id),
            SortCriterion::PriceLow => keyed_last(price_key(&a.price), price_key(&b.price), false),
            SortCriterion::PriceHigh => keyed_last(price_key(&a.price), price_key(&b.price), true),
            SortCriterion::Rating => b.rating.total_cmp(&a.rating),
            SortCriterion::LevelBasic => keyed_last(level_key(a), level_key(b), false),
            SortCriterion::LevelPremium => keyed_last(level_key(a), level_key(b), true),
            SortCriterion::TitleAsc => collate(&a.title, &b.title),
            SortCriterion::TitleDesc => collate(&b.title, &a.title),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortCriterion {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriterion::all()
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| QueryError::UnknownSortKey { key: s.to_string() })
    }
}

/// Totally ordered wrapper so prices can go through `keyed_last`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PriceKey(f64);

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.total_cmp(&other.0))
    }
}

fn price_key(price: &Price) -> Option<PriceKey> {
    price.amount().map(PriceKey)
}

/// Tier table ordinal; unmapped durations have none.
fn level_key(package: &Package) -> Option<u8> {
    package.service_level.map(|level| level.ordinal())
}

/// Compare optional keys with `None` always last, whichever the direction.
fn keyed_last<K: PartialOrd>(a: Option<K>, b: Option<K>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Locale-style title collation: case-folded comparison first, exact text
/// as the tiebreak so the order is total.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

// =============================================================================
// Filters
// =============================================================================

/// Category selection for list views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Packages whose category equals this label, ignoring case.
    Label(String),
}

impl CategoryFilter {
    /// Parse a label; the sentinel "all" (any case) selects everything.
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case(constants::ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Label(label.to_string())
        }
    }

    pub fn matches(&self, package: &Package) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Label(label) => package.in_category(label),
        }
    }

    /// Label as it would be written back to a session or URL.
    pub fn as_label(&self) -> &str {
        match self {
            CategoryFilter::All => constants::ALL_CATEGORIES,
            CategoryFilter::Label(label) => label,
        }
    }
}

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    /// Category restriction.
    pub category: CategoryFilter,

    /// Substring title search (case-insensitive). Empty = no filter.
    pub text_search: String,

    /// Compiled regex matched against title and description. None = no filter.
    pub regex_search: Option<Regex>,
}

impl PackageFilter {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.category == CategoryFilter::All
            && self.text_search.is_empty()
            && self.regex_search.is_none()
    }

    /// Filter on a single category label.
    pub fn category(label: &str) -> Self {
        Self {
            category: CategoryFilter::parse(label),
            ..Default::default()
        }
    }

    /// Set the regex search pattern, compiling it.
    /// Returns an error if the pattern is invalid or too long.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), QueryError> {
        if pattern.is_empty() {
            self.regex_search = None;
            return Ok(());
        }
        if pattern.len() > constants::MAX_REGEX_PATTERN_LENGTH {
            return Err(QueryError::RegexTooLong {
                length: pattern.len(),
                max_length: constants::MAX_REGEX_PATTERN_LENGTH,
            });
        }
        let regex = Regex::new(pattern).map_err(|e| QueryError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.regex_search = Some(regex);
        Ok(())
    }

    fn matches(&self, package: &Package, text_lower: &str) -> bool {
        if !self.category.matches(package) {
            return false;
        }

        if !text_lower.is_empty() && !package.title.to_lowercase().contains(text_lower) {
            return false;
        }

        if let Some(ref regex) = self.regex_search {
            if !regex.is_match(&package.title) && !regex.is_match(&package.description) {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Read-only query operations over an injected catalog.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
}

impl QueryEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the package with exactly this slug (case-sensitive).
    pub fn find_by_slug(&self, slug: &str) -> Lookup<'_> {
        match self.catalog.packages().iter().find(|p| p.slug == slug) {
            Some(p) => Lookup::Found(p),
            None => {
                tracing::debug!(slug, "Slug lookup found nothing");
                Lookup::Absent
            }
        }
    }

    /// Whole catalog in the given order.
    pub fn sort_by(&self, criterion: SortCriterion) -> Vec<&Package> {
        let mut sorted: Vec<&Package> = self.catalog.packages().iter().collect();
        sort_packages(&mut sorted, criterion);
        sorted
    }

    /// Packages in a category, or everything for "all".
    pub fn filter_by_category(&self, label: &str) -> Vec<&Package> {
        let filter = CategoryFilter::parse(label);
        self.catalog
            .packages()
            .iter()
            .filter(|p| filter.matches(p))
            .collect()
    }

    /// Categories in order of first appearance, without duplicates.
    ///
    /// Duplicates are detected ignoring case; the first spelling wins.
    pub fn distinct_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.catalog
            .packages()
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(c.to_lowercase()))
            .collect()
    }

    /// Up to `limit` packages other than `package`, in catalog order.
    pub fn related_to(&self, package: &Package, limit: usize) -> Vec<&Package> {
        self.catalog
            .packages()
            .iter()
            .filter(|p| p.id != package.id)
            .take(limit)
            .collect()
    }

    /// The first `count` packages, as shown by the featured slider.
    pub fn featured(&self, count: usize) -> Vec<&Package> {
        self.catalog.packages().iter().take(count).collect()
    }

    /// Apply filters, returning indices of matching packages in catalog order.
    pub fn apply_filter(&self, filter: &PackageFilter) -> Vec<usize> {
        let packages = self.catalog.packages();
        if filter.is_empty() {
            return (0..packages.len()).collect();
        }

        let text_lower = filter.text_search.to_lowercase();

        packages
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p, &text_lower))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Filter then sort, returning catalog indices in display order.
    pub fn query_indices(&self, filter: &PackageFilter, criterion: SortCriterion) -> Vec<usize> {
        let packages = self.catalog.packages();
        let mut indices = self.apply_filter(filter);
        if criterion != SortCriterion::Recommended {
            indices.sort_by(|&a, &b| criterion.compare(&packages[a], &packages[b]));
        }

        tracing::debug!(
            sort = criterion.key(),
            category = filter.category.as_label(),
            results = indices.len(),
            "Catalog query"
        );
        indices
    }

    /// Filter then sort: the list-view pipeline.
    pub fn query(&self, filter: &PackageFilter, criterion: SortCriterion) -> Vec<&Package> {
        let packages = self.catalog.packages();
        self.query_indices(filter, criterion)
            .into_iter()
            .filter_map(|idx| packages.get(idx))
            .collect()
    }
}

/// Stable in-place sort so equal keys keep their relative order.
fn sort_packages(packages: &mut [&Package], criterion: SortCriterion) {
    if criterion != SortCriterion::Recommended {
        packages.sort_by(|a, b| criterion.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ServiceLevel;

    fn make_package(id: u32, title: &str, price: Price, rating: f64, duration: &str) -> Package {
        Package {
            id,
            slug: format!("pkg-{id}"),
            title: title.to_string(),
            category: Package::derive_category(title),
            image: String::new(),
            duration: duration.to_string(),
            service_level: ServiceLevel::from_duration(duration),
            rating,
            review_count: 0,
            location: String::new(),
            price,
            description: format!("{title} description"),
            best_time: None,
            room_size: None,
            highlights: Vec::new(),
            services: Vec::new(),
        }
    }

    fn engine(packages: Vec<Package>) -> QueryEngine {
        QueryEngine::new(Arc::new(
            Catalog::new(packages, Vec::new(), Vec::new()).unwrap(),
        ))
    }

    fn fixture() -> QueryEngine {
        engine(vec![
            make_package(1, "Modern Loft", Price::Amount(300.0), 4.5, "Standard"),
            make_package(2, "Rustic Cabin", Price::Custom, 4.9, "3 Weeks"),
            make_package(3, "modern Studio", Price::Amount(100.0), 4.5, "Complete"),
            make_package(4, "Coastal Villa", Price::Amount(200.0), 3.0, "Basic"),
            make_package(5, "Zen Garden", Price::Amount(100.0), 4.9, "Flexible"),
        ])
    }

    fn ids(packages: &[&Package]) -> Vec<u32> {
        packages.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_find_by_slug_exact() {
        let e = fixture();
        assert_eq!(e.find_by_slug("pkg-3").found().map(|p| p.id), Some(3));
        assert!(e.find_by_slug("PKG-3").is_absent());
        assert!(e.find_by_slug("").is_absent());
        assert!(Lookup::default().is_pending());
    }

    #[test]
    fn test_recommended_keeps_catalog_order() {
        let e = fixture();
        assert_eq!(ids(&e.sort_by(SortCriterion::Recommended)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_recent_is_descending_id() {
        let e = fixture();
        assert_eq!(ids(&e.sort_by(SortCriterion::Recent)), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_price_sorts_put_custom_last() {
        let e = fixture();
        // 3 and 5 tie at 100; stable sort keeps 3 before 5.
        assert_eq!(ids(&e.sort_by(SortCriterion::PriceLow)), vec![3, 5, 4, 1, 2]);
        assert_eq!(ids(&e.sort_by(SortCriterion::PriceHigh)), vec![1, 4, 3, 5, 2]);
    }

    #[test]
    fn test_rating_descending_stable() {
        let e = fixture();
        assert_eq!(ids(&e.sort_by(SortCriterion::Rating)), vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn test_level_sorts_put_unmapped_last() {
        let e = fixture();
        assert_eq!(ids(&e.sort_by(SortCriterion::LevelBasic)), vec![4, 1, 3, 2, 5]);
        assert_eq!(ids(&e.sort_by(SortCriterion::LevelPremium)), vec![3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_level_key_follows_tier_table() {
        let basic = make_package(1, "A", Price::Custom, 1.0, "Basic");
        let complete = make_package(2, "B", Price::Custom, 1.0, "Complete");
        let loose = make_package(3, "C", Price::Custom, 1.0, "2 Weeks");
        assert_eq!(level_key(&basic), Some(ServiceLevel::Basic.ordinal()));
        assert_eq!(level_key(&complete), Some(4));
        assert_eq!(level_key(&loose), None);
        assert_eq!(
            SortCriterion::LevelBasic.compare(&basic, &complete),
            Ordering::Less
        );
    }

    #[test]
    fn test_title_sorts_ignore_case() {
        let e = fixture();
        assert_eq!(ids(&e.sort_by(SortCriterion::TitleAsc)), vec![4, 1, 3, 2, 5]);
        assert_eq!(ids(&e.sort_by(SortCriterion::TitleDesc)), vec![5, 2, 3, 1, 4]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("price-low".parse::<SortCriterion>().unwrap(), SortCriterion::PriceLow);
        assert!(matches!(
            "cheapest".parse::<SortCriterion>(),
            Err(QueryError::UnknownSortKey { .. })
        ));
        assert_eq!(SortCriterion::from_key_or_default("cheapest"), SortCriterion::Recent);
        for c in SortCriterion::all() {
            assert_eq!(c.key().parse::<SortCriterion>().unwrap(), *c);
        }
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let e = fixture();
        assert_eq!(ids(&e.filter_by_category("MODERN")), vec![1, 3]);
        assert_eq!(ids(&e.filter_by_category("All")), vec![1, 2, 3, 4, 5]);
        assert!(e.filter_by_category("Nonexistent").is_empty());
    }

    #[test]
    fn test_distinct_categories_first_spelling_wins() {
        let e = fixture();
        assert_eq!(
            e.distinct_categories(),
            vec!["Modern", "Rustic", "Coastal", "Zen"]
        );
    }

    #[test]
    fn test_related_excludes_self_and_limits() {
        let e = fixture();
        let first = &e.catalog().packages()[0];
        assert_eq!(ids(&e.related_to(first, 3)), vec![2, 3, 4]);
        let third = &e.catalog().packages()[2];
        assert_eq!(ids(&e.related_to(third, 10)), vec![1, 2, 4, 5]);
        assert!(e.related_to(first, 0).is_empty());
    }

    #[test]
    fn test_featured_takes_prefix() {
        let e = fixture();
        assert_eq!(ids(&e.featured(2)), vec![1, 2]);
        assert_eq!(e.featured(50).len(), 5);
    }

    #[test]
    fn test_text_search_matches_title_substring() {
        let e = fixture();
        let filter = PackageFilter {
            text_search: "STUD".to_string(),
            ..Default::default()
        };
        assert_eq!(e.apply_filter(&filter), vec![2]);
    }

    #[test]
    fn test_regex_filter_checks_description() {
        let e = fixture();
        let mut filter = PackageFilter::default();
        filter.set_regex(r"(Cabin|Villa) description").unwrap();
        assert_eq!(e.apply_filter(&filter), vec![1, 3]);
    }

    #[test]
    fn test_invalid_regex() {
        let mut filter = PackageFilter::default();
        assert!(matches!(
            filter.set_regex("[invalid"),
            Err(QueryError::InvalidRegex { .. })
        ));
        let long = "a".repeat(constants::MAX_REGEX_PATTERN_LENGTH + 1);
        assert!(matches!(
            filter.set_regex(&long),
            Err(QueryError::RegexTooLong { .. })
        ));
    }

    #[test]
    fn test_query_combines_filter_and_sort() {
        let e = fixture();
        let filter = PackageFilter::category("modern");
        assert_eq!(ids(&e.query(&filter, SortCriterion::PriceLow)), vec![3, 1]);
    }

    #[test]
    fn test_queries_do_not_mutate_catalog() {
        let e = fixture();
        let before = ids(&e.sort_by(SortCriterion::Recommended));
        let first = ids(&e.sort_by(SortCriterion::PriceHigh));
        let second = ids(&e.sort_by(SortCriterion::PriceHigh));
        assert_eq!(first, second);
        assert_eq!(ids(&e.sort_by(SortCriterion::Recommended)), before);
    }
}
