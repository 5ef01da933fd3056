// src/pipeline.rs

use serde::Serialize;

use crate::criteria::Criteria;
use crate::models::Investment;

// One page of the filtered, sorted catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Investment>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl CatalogPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// Pages are 1-based. Anything outside `[1, total_pages]` is pulled back
/// into range; with no pages at all the answer is page 1.
pub fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.clamp(1, total_pages.max(1))
}

pub fn paginate<'a>(rows: &[&'a Investment], page_size: usize, page_number: usize) -> CatalogPage<'a> {
    let page_size = page_size.max(1);
    let total_count = rows.len();
    let total_pages = total_pages(total_count, page_size);
    let page = clamp_page(page_number, total_pages);

    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    CatalogPage {
        items: rows[start..end].to_vec(),
        page,
        page_size,
        total_count,
        total_pages,
    }
}

/// Filters, sorts and paginates `catalog` without modifying it.
pub fn view<'a>(
    catalog: &'a [Investment],
    criteria: &Criteria,
    page_size: usize,
    page_number: usize,
) -> CatalogPage<'a> {
    let rows = criteria.apply(catalog);
    let page = paginate(&rows, page_size, page_number);
    tracing::trace!(
        total_count = page.total_count,
        page = page.page,
        total_pages = page.total_pages,
        "catalog view"
    );
    page
}
