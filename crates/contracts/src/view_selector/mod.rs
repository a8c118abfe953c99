//! Page navigation and category filtering for the single-page layout.
//!
//! The selector owns every piece of "which one is active" state: the visible
//! page, the active nav item (always the one targeting the visible page) and
//! the filter selection shared by the dropdown and the button row.

pub mod filter;
pub mod query;
pub mod toggle;

pub use filter::{Filter, FilterItem, FilterSelection};
pub use query::QueryParams;
pub use toggle::Toggle;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewSelectorError {
    #[error("no page matches navigation label '{0}'")]
    UnknownPage(String),
    #[error("duplicate page key '{0}'")]
    DuplicatePage(String),
    #[error("at least one page is required")]
    NoPages,
    #[error("page labels must not be empty")]
    EmptyLabel,
    #[error("initial page '{0}' does not exist")]
    UnknownInitialPage(String),
}

/// Page key for a navigation label: "About" targets the "about" page.
pub fn page_key(label: &str) -> String {
    filter::normalize(label)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub target_page_key: String,
}

impl NavItem {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.trim().to_string(),
            target_page_key: page_key(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub page_key: String,
}

/// Outcome of a page selection, used by the UI to update the URL and scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChange {
    pub previous: String,
    pub current: String,
}

impl PageChange {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelector {
    nav_items: Vec<NavItem>,
    pages: Vec<Page>,
    active: usize,
    filter: Filter,
}

impl ViewSelector {
    /// Build a selector with one nav item and one page per label.
    pub fn new(
        labels: &[&str],
        initial: &str,
        filter_items: Vec<FilterItem>,
    ) -> Result<Self, ViewSelectorError> {
        if labels.is_empty() {
            return Err(ViewSelectorError::NoPages);
        }

        let nav_items: Vec<NavItem> = labels.iter().map(|label| NavItem::new(label)).collect();
        let mut pages: Vec<Page> = Vec::with_capacity(nav_items.len());
        for item in &nav_items {
            if item.target_page_key.is_empty() {
                return Err(ViewSelectorError::EmptyLabel);
            }
            if pages.iter().any(|p| p.page_key == item.target_page_key) {
                return Err(ViewSelectorError::DuplicatePage(item.target_page_key.clone()));
            }
            pages.push(Page {
                page_key: item.target_page_key.clone(),
            });
        }

        let initial_key = page_key(initial);
        let active = pages
            .iter()
            .position(|p| p.page_key == initial_key)
            .ok_or(ViewSelectorError::UnknownInitialPage(initial_key))?;

        Ok(Self {
            nav_items,
            pages,
            active,
            filter: Filter::new(filter_items),
        })
    }

    /// Show the page targeted by `label` and mark its nav item active.
    ///
    /// An unmatched label leaves the current page visible and returns
    /// [`ViewSelectorError::UnknownPage`].
    pub fn select_page(&mut self, label: &str) -> Result<PageChange, ViewSelectorError> {
        let key = page_key(label);
        let index = self
            .pages
            .iter()
            .position(|p| p.page_key == key)
            .ok_or_else(|| ViewSelectorError::UnknownPage(label.to_string()))?;

        let previous = self.pages[self.active].page_key.clone();
        self.active = index;
        log::debug!("page selected: {} -> {}", previous, key);

        Ok(PageChange {
            previous,
            current: key,
        })
    }

    pub fn select_filter(&mut self, label: &str) -> &FilterSelection {
        self.filter.select(label)
    }

    pub fn nav_items(&self) -> &[NavItem] {
        &self.nav_items
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn visible_page(&self) -> &Page {
        &self.pages[self.active]
    }

    pub fn is_page_visible(&self, key: &str) -> bool {
        self.visible_page().page_key == key
    }

    pub fn active_nav(&self) -> &NavItem {
        &self.nav_items[self.active]
    }

    pub fn is_nav_active(&self, label: &str) -> bool {
        self.active_nav().target_page_key == page_key(label)
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> ViewSelector {
        ViewSelector::new(
            &["About", "Resume", "Portfolio"],
            "About",
            vec![
                FilterItem::new("web"),
                FilterItem::new("mobile"),
                FilterItem::new("design"),
            ],
        )
        .unwrap()
    }

    fn visible_count(s: &ViewSelector) -> usize {
        s.pages()
            .iter()
            .filter(|p| s.is_page_visible(&p.page_key))
            .count()
    }

    fn active_count(s: &ViewSelector) -> usize {
        s.nav_items()
            .iter()
            .filter(|n| s.is_nav_active(&n.label))
            .count()
    }

    #[test]
    fn test_initial_state() {
        let s = selector();
        assert_eq!(s.visible_page().page_key, "about");
        assert_eq!(s.active_nav().label, "About");
        assert_eq!(visible_count(&s), 1);
    }

    #[test]
    fn test_select_page_keeps_single_visible_and_active() {
        let mut s = selector();
        let labels: Vec<String> = s.nav_items().iter().map(|n| n.label.clone()).collect();
        for label in labels {
            let change = s.select_page(&label).unwrap();
            assert_eq!(change.current, page_key(&label));
            assert_eq!(s.visible_page().page_key, page_key(&label));
            assert_eq!(s.active_nav().label, label);
            assert_eq!(visible_count(&s), 1);
            assert_eq!(active_count(&s), 1);
        }
    }

    #[test]
    fn test_select_resume_scenario() {
        let mut s = selector();
        let change = s.select_page("Resume").unwrap();
        assert!(change.changed());
        assert_eq!(change.previous, "about");
        assert_eq!(s.visible_page().page_key, "resume");
        assert!(s.is_nav_active("Resume"));
        assert!(!s.is_nav_active("About"));

        let url = QueryParams::parse("?tab=about&post=7")
            .unwrap()
            .with_tab(&change.current)
            .to_search()
            .unwrap();
        assert_eq!(url, "?tab=resume");
    }

    #[test]
    fn test_select_same_page_is_not_a_change() {
        let mut s = selector();
        let change = s.select_page("about").unwrap();
        assert!(!change.changed());
    }

    #[test]
    fn test_unknown_page_keeps_current() {
        let mut s = selector();
        s.select_page("Portfolio").unwrap();
        let err = s.select_page("Blog").unwrap_err();
        assert_eq!(err, ViewSelectorError::UnknownPage("Blog".to_string()));
        assert_eq!(s.visible_page().page_key, "portfolio");
        assert_eq!(visible_count(&s), 1);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            ViewSelector::new(&[], "About", vec![]).unwrap_err(),
            ViewSelectorError::NoPages
        );
        assert_eq!(
            ViewSelector::new(&["About", "about"], "About", vec![]).unwrap_err(),
            ViewSelectorError::DuplicatePage("about".to_string())
        );
        assert_eq!(
            ViewSelector::new(&["About", " "], "About", vec![]).unwrap_err(),
            ViewSelectorError::EmptyLabel
        );
        assert_eq!(
            ViewSelector::new(&["About"], "Contact", vec![]).unwrap_err(),
            ViewSelectorError::UnknownInitialPage("contact".to_string())
        );
    }

    #[test]
    fn test_filter_scenario() {
        let mut s = selector();
        assert_eq!(
            s.select_filter("Mobile"),
            &FilterSelection::Category("mobile".to_string())
        );
        assert_eq!(s.filter().visible(), vec![1]);
        s.select_filter("All");
        assert_eq!(s.filter().visible(), vec![0, 1, 2]);
    }

    #[test]
    fn test_page_and_filter_are_independent() {
        let mut s = selector();
        s.select_filter("web");
        s.select_page("Resume").unwrap();
        assert_eq!(s.filter().visible(), vec![0]);
    }
}
