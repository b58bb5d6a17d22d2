//! Gallery page state.
//!
//! One store owns everything the gallery page mutates: the loaded records,
//! the filter, the category bar expansion and the detail modal. Views query
//! it instead of keeping their own copies.

use crate::catalog::{self, Category};
use crate::filter::{CategoryFilter, FilterState};
use crate::gallery::{render_gallery, GalleryView};
use crate::modal::{CloseTrigger, ModalController};
use crate::source::{LoadState, LOAD_FAILED_MESSAGE};
use crate::types::{PromptRecord, RecordId};

#[derive(Debug, Clone, Default)]
pub struct GalleryStore {
    records: Vec<PromptRecord>,
    filter: FilterState,
    categories_expanded: bool,
    modal: ModalController,
    load_state: LoadState,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with records already loaded
    pub fn with_records(records: Vec<PromptRecord>) -> Self {
        let mut store = Self::new();
        store.set_records(records);
        store
    }

    pub fn set_records(&mut self, records: Vec<PromptRecord>) {
        self.records = records;
        self.load_state = LoadState::Ready;
    }

    /// Record that loading failed; the page stays otherwise inert.
    pub fn fail_loading(&mut self) {
        self.load_state = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    /// Select a category id from the bar (`"all"` clears the restriction).
    pub fn select_category(&mut self, id: &str) {
        self.filter.active_category = CategoryFilter::parse(id);
    }

    pub fn is_active_category(&self, id: &str) -> bool {
        self.filter.active_category.as_id() == id
    }

    pub fn toggle_categories(&mut self) {
        self.categories_expanded = !self.categories_expanded;
    }

    pub fn categories_expanded(&self) -> bool {
        self.categories_expanded
    }

    pub fn visible_categories(&self) -> &'static [Category] {
        catalog::visible_categories(self.categories_expanded)
    }

    pub fn visible_records(&self) -> Vec<&PromptRecord> {
        self.filter.apply(&self.records)
    }

    /// Count shown next to the search box
    pub fn visible_count(&self) -> usize {
        self.visible_records().len()
    }

    pub fn gallery_view(&self) -> GalleryView {
        render_gallery(self.visible_records())
    }

    /// Open the detail modal; unknown ids are ignored.
    pub fn open_modal(&mut self, id: &RecordId) -> bool {
        self.modal.open(&self.records, id)
    }

    pub fn close_modal(&mut self, trigger: CloseTrigger) {
        self.modal.close(trigger);
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn selected_record(&self) -> Option<&PromptRecord> {
        self.modal.record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> GalleryStore {
        GalleryStore::with_records(vec![
            PromptRecord::new(1, "Cat", "a fluffy cat", &["animal"]),
            PromptRecord::new(2, "Car", "a red car", &["vehicle"]),
        ])
    }

    #[test]
    fn starts_loading() {
        assert_eq!(GalleryStore::new().load_state(), &LoadState::Loading);
        assert_eq!(store().load_state(), &LoadState::Ready);
    }

    #[test]
    fn failure_shows_static_message() {
        let mut store = GalleryStore::new();
        store.fail_loading();
        assert_eq!(
            store.load_state(),
            &LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn category_keeps_search_term() {
        let mut store = store();
        store.set_search("car");
        store.select_category("vehicle");
        assert_eq!(store.visible_count(), 1);
        store.select_category("animal");
        assert_eq!(store.visible_count(), 0);
        assert!(store.gallery_view().shows_no_results());
        assert!(store.is_active_category("animal"));
    }

    #[test]
    fn all_category_restores_everything() {
        let mut store = store();
        store.select_category("animal");
        store.select_category("all");
        assert_eq!(store.visible_count(), 2);
        assert!(store.is_active_category("all"));
    }

    #[test]
    fn modal_opens_on_full_collection() {
        let mut store = store();
        store.set_search("zzz");
        // Filtered out of the grid, still resolvable by id
        assert!(store.open_modal(&RecordId::Int(2)));
        store.close_modal(CloseTrigger::Escape);
        assert!(store.selected_record().is_none());
    }

    #[test]
    fn toggle_expands_category_bar() {
        let mut store = store();
        let collapsed = store.visible_categories().len();
        store.toggle_categories();
        assert!(store.visible_categories().len() > collapsed);
    }
}
