pub mod api_utils;
pub mod clipboard;
pub mod dom;
pub mod icons;
pub mod modal;
pub mod typed_text;
