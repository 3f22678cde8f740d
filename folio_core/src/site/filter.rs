use serde::{Deserialize, Serialize};

use super::Toggle;
use crate::constants::FILTER_ALL;
use crate::utils::error::FolioError;

/// A portfolio entry that can be shown or hidden by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub title: String,
    /// Lowercase category name
    pub category: String,
    #[serde(skip)]
    pub active: bool,
}

impl FilterItem {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into().to_lowercase(),
            active: true,
        }
    }
}

/// Category filter with a dropdown (small screens) and a button row.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    items: Vec<FilterItem>,
    buttons: Vec<String>,
    active_button: usize,
    select_value: String,
    dropdown: Toggle,
}

impl CategoryFilter {
    /// Creates a filter; the first button starts out active and every item is shown.
    /// Categories are lowercased so deserialized items match like built ones.
    pub fn new(mut items: Vec<FilterItem>, buttons: Vec<String>) -> Self {
        for item in &mut items {
            item.category = item.category.to_lowercase();
            item.active = true;
        }
        let select_value = buttons.first().cloned().unwrap_or_default();
        Self {
            items,
            buttons,
            active_button: 0,
            select_value,
            dropdown: Toggle::default(),
        }
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn visible(&self) -> impl Iterator<Item = &FilterItem> {
        self.items.iter().filter(|item| item.active)
    }

    /// Label shown in the select box.
    pub fn select_value(&self) -> &str {
        &self.select_value
    }

    pub fn active_button(&self) -> usize {
        self.active_button
    }

    pub fn dropdown(&self) -> Toggle {
        self.dropdown
    }

    /// Opens or closes the dropdown.
    pub fn click_select(&mut self) -> bool {
        self.dropdown.toggle()
    }

    /// Picks a category from the dropdown, closing it.
    pub fn click_select_item(&mut self, label: &str) {
        self.dropdown.toggle();
        self.select(label);
    }

    /// Picks a category from the button row.
    pub fn click_filter_button(&mut self, index: usize) -> Result<(), FolioError> {
        let label = self
            .buttons
            .get(index)
            .cloned()
            .ok_or(FolioError::UnknownFilterButton(index))?;
        self.select(&label);
        self.active_button = index;
        Ok(())
    }

    /// Shows the items matching `label` (case-insensitive), or all of them for "all".
    pub fn select(&mut self, label: &str) {
        let value = label.to_lowercase();
        self.select_value = label.to_string();
        for item in &mut self.items {
            item.active = value == FILTER_ALL || value == item.category;
        }
        tracing::debug!(category = %value, visible = self.visible().count(), "filter applied");
    }
}
