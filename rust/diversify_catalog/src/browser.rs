// src/browser.rs
//
// Filter-bar state for a listing page. Each setter swaps in new criteria and
// sends the user back to page 1; the page itself is always recomputed from
// the immutable catalog.

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::criteria::{Accreditation, Criteria, SortKey};
use crate::models::Amount;
use crate::pipeline::{self, CatalogPage};

#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Catalog,
    criteria: Criteria,
    page_size: usize,
    page: usize,
}

impl CatalogBrowser {
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        CatalogBrowser {
            catalog,
            criteria: Criteria::default(),
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn with_config(catalog: Catalog, config: &CatalogConfig) -> Self {
        Self::new(catalog, config.page_size)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    fn update(&mut self, change: impl FnOnce(Criteria) -> Criteria) {
        let current = std::mem::take(&mut self.criteria);
        self.set_criteria(change(current));
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.update(|c| c.with_category(category));
    }

    pub fn set_risk_level(&mut self, risk_level: Option<u8>) {
        self.update(|c| c.with_risk_level(risk_level));
    }

    pub fn set_max_min_investment(&mut self, max_min_investment: Option<Amount>) {
        self.update(|c| c.with_max_min_investment(max_min_investment));
    }

    pub fn set_accreditation(&mut self, accreditation: Accreditation) {
        self.update(|c| c.with_accreditation(accreditation));
    }

    pub fn set_liquidity_level(&mut self, liquidity_level: Option<u8>) {
        self.update(|c| c.with_liquidity_level(liquidity_level));
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.update(|c| c.with_sort(sort));
    }

    // Clears every filter but keeps the chosen sort order
    pub fn reset_filters(&mut self) {
        let sort = self.criteria.sort;
        self.set_criteria(Criteria::default().with_sort(sort));
    }

    pub fn total_pages(&self) -> usize {
        let matching = self
            .catalog
            .investments()
            .iter()
            .filter(|i| self.criteria.matches(i))
            .count();
        pipeline::total_pages(matching, self.page_size)
    }

    /// Moves to `page`, clamped to the pages that exist. Returns the page
    /// actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = pipeline::clamp_page(page, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn current_page(&self) -> CatalogPage<'_> {
        self.catalog.view(&self.criteria, self.page_size, self.page)
    }
}
