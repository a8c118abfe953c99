//! View state and content model for the portfolio site.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! frontend crate owns rendering and event wiring while the rules about
//! which page, filter, poem or modal is shown live (and are tested) here.

pub mod contact;
pub mod poetry;
pub mod site;
pub mod testimonials;
pub mod typewriter;
pub mod view_selector;
