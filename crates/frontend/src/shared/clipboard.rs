//! Clipboard utilities for copying text to clipboard

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard
///
/// Uses the Web Clipboard API; a rejected write is logged and otherwise ignored.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                log::warn!("clipboard write failed: {:?}", e);
            }
        }
    });
}
