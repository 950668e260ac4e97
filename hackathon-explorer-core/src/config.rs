use serde::{Deserialize, Serialize};

/// Text shown by the hackathon list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Section heading
    pub title: String,

    /// Shown instead of the grid when nothing matches
    pub empty_message: String,

    pub search_placeholder: String,

    /// Summary text of the filter dropdown
    pub filter_label: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            title: "Explore Challenges".to_string(),
            empty_message: "Looks like your search yielded no results.".to_string(),
            search_placeholder: "Search".to_string(),
            filter_label: "Filter".to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn new(title: String) -> Self {
        Self {
            title,
            ..Default::default()
        }
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn with_filter_label(mut self, label: impl Into<String>) -> Self {
        self.filter_label = label.into();
        self
    }
}
