use std::fmt;

/// Value of the "show everything" entry in both filter controls.
pub const ALL: &str = "all";

/// Normalized form used when comparing control labels with item categories.
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Currently selected filter value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Category(String),
}

impl FilterSelection {
    /// Parse a control label ("All", "Web design", ...) into a selection.
    pub fn parse(label: &str) -> Self {
        let value = normalize(label);
        if value == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Category(value)
        }
    }

    pub fn matches(&self, item: &FilterItem) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(category) => *category == item.category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL,
            FilterSelection::Category(category) => category,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content entry tagged with a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    pub category: String,
}

impl FilterItem {
    pub fn new(category: &str) -> Self {
        Self {
            category: normalize(category),
        }
    }
}

/// Filter items plus the value shared by the dropdown and the button row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    items: Vec<FilterItem>,
    selection: FilterSelection,
    /// Label shown in the dropdown head, as authored.
    label: String,
}

impl Filter {
    pub fn new(items: Vec<FilterItem>) -> Self {
        Self {
            items,
            selection: FilterSelection::All,
            label: "All".to_string(),
        }
    }

    /// Select by control label. Both control variants read from this one value,
    /// so whichever triggered the change the other reflects it too.
    pub fn select(&mut self, label: &str) -> &FilterSelection {
        self.selection = FilterSelection::parse(label);
        self.label = label.trim().to_string();
        log::debug!("filter selected: {}", self.selection);
        &self.selection
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a control with this label is the selected one.
    pub fn is_selected(&self, label: &str) -> bool {
        FilterSelection::parse(label) == self.selection
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.items
            .get(index)
            .map(|item| self.selection.matches(item))
            .unwrap_or(false)
    }

    /// Indices of the visible items, in authored order.
    pub fn visible(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.selection.matches(item))
            .map(|(index, _)| index)
            .collect()
    }
}
