//! Session state for one catalog browsing session.

use tracing::debug;

use crate::detail::DetailView;
use crate::filter::{characteristic_options, difficulty_options, filter_items, FieldFilter, FilterCriteria};
use crate::item::Item;
use crate::paging::{page_buttons, page_slice, total_pages, PageButton, Pager, PAGE_SIZE};

/// Items, filter criteria, page cursor and detail modal for one session.
///
/// Any change to the criteria moves back to page 1.
#[derive(Debug, Clone, Default)]
pub struct Browser {
    items: Vec<Item>,
    criteria: FilterCriteria,
    pager: Pager,
    detail: DetailView,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the fetched item set.
    pub fn set_items(&mut self, items: Vec<Item>) {
        debug!(count = items.len(), "catalog loaded");
        self.items = items;
        self.pager.reset();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.pager.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: FieldFilter) {
        self.criteria.difficulty = difficulty;
        self.pager.reset();
    }

    pub fn set_characteristic(&mut self, characteristic: FieldFilter) {
        self.criteria.characteristic = characteristic;
        self.pager.reset();
    }

    pub fn difficulty_options(&self) -> Vec<FieldFilter> {
        difficulty_options(&self.items)
    }

    pub fn characteristic_options(&self) -> Vec<FieldFilter> {
        characteristic_options(&self.items)
    }

    /// Every item matching the criteria.
    pub fn filtered(&self) -> Vec<&Item> {
        filter_items(&self.items, &self.criteria)
    }

    /// The slice of [`Browser::filtered`] on the current page.
    pub fn current_page(&self) -> Vec<&Item> {
        page_slice(&self.filtered(), self.pager.page(), PAGE_SIZE).to_vec()
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), PAGE_SIZE)
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous()
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.next(total)
    }

    pub fn jump_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        self.pager.jump(page, total)
    }

    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_buttons(self.pager.page(), self.total_pages())
    }

    /// Opens the detail view for the `row`-th item of the current page.
    ///
    /// Returns `false` if there is no such row.
    pub fn select(&mut self, row: usize) -> bool {
        let Some(item) = self.current_page().get(row).map(|item| (*item).clone()) else {
            return false;
        };
        debug!(id = %item.id, "item selected");
        self.detail.open(item);
        true
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }
}
