//! Small document-level effects that have no reactive owner.

use web_sys::window;

/// Class on `<html>` that disables page scrolling.
const SCROLL_LOCK_CLASS: &str = "overflow";

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn set_scroll_lock(locked: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(SCROLL_LOCK_CLASS, locked) {
        log::error!("failed to toggle scroll lock: {:?}", e);
    }
}

/// `content` of a `<meta name="...">` tag in the host page, if present.
pub fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Inline `display` value for content the view selector shows or hides, so
/// visibility does not depend on the stylesheet being loaded.
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(display(true), "block");
        assert_eq!(display(false), "none");
    }
}
