//! Poem panels on the blog page: show/hide and copy, indexed by poem id.

use serde::Deserialize;
use std::collections::BTreeSet;
use thiserror::Error;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoemError {
    #[error("unknown poem id {0}")]
    UnknownPoem(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Poem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemShelf {
    poems: Vec<Poem>,
    open: BTreeSet<u32>,
    copied: BTreeSet<u32>,
}

impl PoemShelf {
    pub fn new(poems: Vec<Poem>) -> Self {
        Self {
            poems,
            open: BTreeSet::new(),
            copied: BTreeSet::new(),
        }
    }

    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    pub fn get(&self, id: u32) -> Result<&Poem, PoemError> {
        self.poems
            .iter()
            .find(|p| p.id == id)
            .ok_or(PoemError::UnknownPoem(id))
    }

    /// Show or hide a poem panel; returns whether it is now open.
    pub fn toggle_poem(&mut self, id: u32) -> Result<bool, PoemError> {
        self.get(id)?;
        let open = if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        };
        log::debug!("poem {} open={}", id, open);
        Ok(open)
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open.contains(&id)
    }

    /// Page scrolling is locked while any poem panel is open.
    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }

    /// Text to put on the clipboard; the poem's copy label switches to "Copied".
    pub fn copy_poem(&mut self, id: u32) -> Result<String, PoemError> {
        let text = self.get(id)?.text.clone();
        self.copied.insert(id);
        Ok(text)
    }

    pub fn copy_label(&self, id: u32) -> &'static str {
        if self.copied.contains(&id) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> PoemShelf {
        PoemShelf::new(
            (1..=3)
                .map(|id| Poem {
                    id,
                    title: format!("Poem {}", id),
                    excerpt: String::new(),
                    text: format!("line of poem {}", id),
                })
                .collect(),
        )
    }

    #[test]
    fn test_toggle_poem_and_scroll_lock() {
        let mut s = shelf();
        assert!(!s.scroll_locked());
        assert_eq!(s.toggle_poem(2), Ok(true));
        assert!(s.is_open(2));
        assert!(s.scroll_locked());
        assert_eq!(s.toggle_poem(3), Ok(true));
        assert_eq!(s.toggle_poem(2), Ok(false));
        assert!(s.scroll_locked());
        assert_eq!(s.toggle_poem(3), Ok(false));
        assert!(!s.scroll_locked());
    }

    #[test]
    fn test_copy_poem_marks_only_that_label() {
        let mut s = shelf();
        assert_eq!(s.copy_label(1), COPY_LABEL);
        assert_eq!(s.copy_poem(1).unwrap(), "line of poem 1");
        assert_eq!(s.copy_label(1), COPIED_LABEL);
        assert_eq!(s.copy_label(2), COPY_LABEL);
    }

    #[test]
    fn test_unknown_poem() {
        let mut s = shelf();
        assert_eq!(s.toggle_poem(9), Err(PoemError::UnknownPoem(9)));
        assert_eq!(s.copy_poem(9), Err(PoemError::UnknownPoem(9)));
        assert!(!s.scroll_locked());
    }
}
