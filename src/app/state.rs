// Showroom - app/state.rs
//
// Browse state for list and detail views. Holds the query engine, the
// current sort and filter, the visible list, and the detail lookup.
// Owned by whichever front-end is driving the catalog (the CLI here).

use crate::core::catalog::Catalog;
use crate::core::model::Package;
use crate::core::query::{Lookup, PackageFilter, QueryEngine, SortCriterion};
use std::sync::Arc;

/// What the detail view currently shows, by catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DetailState {
    #[default]
    Pending,
    Found(usize),
    Absent,
}

/// Top-level browse state.
#[derive(Debug)]
pub struct BrowseState {
    engine: QueryEngine,

    /// Current list ordering.
    pub sort: SortCriterion,

    /// Current filter configuration.
    pub filter: PackageFilter,

    /// Catalog indices of the visible list, in display order.
    visible: Vec<usize>,

    detail: DetailState,
}

impl BrowseState {
    /// Create state over a catalog with the default ordering and no filter.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut state = Self {
            engine: QueryEngine::new(catalog),
            sort: SortCriterion::default(),
            filter: PackageFilter::default(),
            visible: Vec::new(),
            detail: DetailState::Pending,
        };
        state.refresh();
        state
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Recompute the visible list from the current sort and filter.
    pub fn refresh(&mut self) {
        self.visible = self.engine.query_indices(&self.filter, self.sort);
    }

    /// Change the ordering and refresh.
    pub fn set_sort(&mut self, sort: SortCriterion) {
        self.sort = sort;
        self.refresh();
    }

    /// Replace the filter and refresh.
    pub fn set_filter(&mut self, filter: PackageFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// Packages currently listed, in display order.
    pub fn visible(&self) -> Vec<&Package> {
        let packages = self.engine.catalog().packages();
        self.visible
            .iter()
            .filter_map(|&idx| packages.get(idx))
            .collect()
    }

    /// Resolve a slug for the detail view.
    pub fn open(&mut self, slug: &str) -> Lookup<'_> {
        let packages = self.engine.catalog().packages();
        self.detail = match packages.iter().position(|p| p.slug == slug) {
            Some(idx) => DetailState::Found(idx),
            None => DetailState::Absent,
        };
        self.detail()
    }

    /// Return the detail view to its not-yet-queried state.
    pub fn close(&mut self) {
        self.detail = DetailState::Pending;
    }

    /// Current detail lookup.
    pub fn detail(&self) -> Lookup<'_> {
        match self.detail {
            DetailState::Pending => Lookup::Pending,
            DetailState::Found(idx) => self
                .engine
                .catalog()
                .packages()
                .get(idx)
                .map_or(Lookup::Absent, Lookup::Found),
            DetailState::Absent => Lookup::Absent,
        }
    }

    /// Packages related to the open detail, if any.
    pub fn related(&self, limit: usize) -> Vec<&Package> {
        match self.detail().found() {
            Some(package) => self.engine.related_to(package, limit),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BrowseState {
        BrowseState::new(Arc::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn test_initial_list_is_catalog_order() {
        let s = state();
        let ids: Vec<u32> = s.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(s.detail().is_pending());
    }

    #[test]
    fn test_sort_and_filter_refresh_list() {
        let mut s = state();
        s.set_sort(SortCriterion::PriceLow);
        let ids: Vec<u32> = s.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 4, 3, 5, 6]);

        s.set_filter(PackageFilter::category("luxury"));
        let ids: Vec<u32> = s.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_open_close_detail() {
        let mut s = state();
        assert_eq!(
            s.open("industrial-loft-transformation").found().map(|p| p.id),
            Some(4)
        );
        assert_eq!(s.related(3).len(), 3);
        assert!(s.open("nowhere").is_absent());
        assert!(s.related(3).is_empty());
        s.close();
        assert!(s.detail().is_pending());
    }
}
