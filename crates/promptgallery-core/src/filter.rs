//! Filter engine: search text plus category selection.
//!
//! Filtering is a linear, order-preserving scan. The same
//! `(search_term, active_category)` always yields the same records in
//! collection order.

use serde::{Deserialize, Serialize};

use crate::catalog::ALL_CATEGORY;
use crate::types::PromptRecord;

/// Category selection of the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction (the `"all"` sentinel)
    #[default]
    All,
    /// Only records tagged with this category id
    Only(String),
}

impl CategoryFilter {
    /// Parse a category id, mapping the `"all"` sentinel to [`CategoryFilter::All`]
    pub fn parse(id: &str) -> Self {
        if id == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }

    /// Category id as shown in the catalog
    pub fn as_id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY,
            CategoryFilter::Only(id) => id,
        }
    }

    /// Whether a record passes the category filter
    pub fn accepts(&self, record: &PromptRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => record.categories.iter().any(|c| c == id),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(id: String) -> Self {
        CategoryFilter::parse(&id)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_id().to_string()
    }
}

/// Transient filter state of the gallery page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub active_category: CategoryFilter,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, active_category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.into(),
            active_category,
        }
    }

    /// Whether a record passes both the text and category filters
    pub fn matches(&self, record: &PromptRecord) -> bool {
        self.active_category.accepts(record) && matches_text(record, &self.search_term)
    }

    /// Apply the filter to a collection
    pub fn apply<'a>(&self, records: &'a [PromptRecord]) -> Vec<&'a PromptRecord> {
        filter_records(records, &self.search_term, &self.active_category)
    }
}

/// Case-insensitive substring match against title, prompt body and category ids.
///
/// An empty term matches every record.
pub fn matches_text(record: &PromptRecord, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.prompt.to_lowercase().contains(&needle)
        || record
            .categories
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
}

/// Filter a collection by search term and category, preserving order.
pub fn filter_records<'a>(
    records: &'a [PromptRecord],
    search_term: &str,
    active_category: &CategoryFilter,
) -> Vec<&'a PromptRecord> {
    let filtered: Vec<&PromptRecord> = records
        .iter()
        .filter(|r| active_category.accepts(r) && matches_text(r, search_term))
        .collect();

    tracing::debug!(
        search_term,
        category = active_category.as_id(),
        count = filtered.len(),
        "Filtered prompts"
    );
    filtered
}
