use contracts::poetry::PoemShelf;
use contracts::site::SiteConfig;
use contracts::testimonials::{Testimonial, TestimonialModal};
use contracts::view_selector::{QueryParams, Toggle, ViewSelector, ViewSelectorError};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::dom;

/// Page-wide UI state, provided once by `App` and shared via context.
#[derive(Clone, Copy)]
pub struct PortfolioContext {
    pub site: &'static SiteConfig,
    pub selector: RwSignal<ViewSelector>,
    pub sidebar: RwSignal<Toggle>,
    pub filter_select: RwSignal<Toggle>,
    pub testimonial: RwSignal<TestimonialModal>,
    pub poems: RwSignal<PoemShelf>,
}

pub fn use_portfolio() -> PortfolioContext {
    use_context::<PortfolioContext>().expect("PortfolioContext context not found")
}

impl PortfolioContext {
    pub fn new(site: &'static SiteConfig) -> Result<Self, ViewSelectorError> {
        Ok(Self {
            site,
            selector: RwSignal::new(site.view_selector()?),
            sidebar: RwSignal::new(Toggle::default()),
            filter_select: RwSignal::new(Toggle::default()),
            testimonial: RwSignal::new(TestimonialModal::default()),
            poems: RwSignal::new(site.poem_shelf()),
        })
    }

    /// Restore the page named by `?tab=` and follow back/forward navigation.
    pub fn init_router_integration(&self) {
        self.sync_from_location();

        let this = *self;
        let on_popstate = Closure::wrap(Box::new(move |_: web_sys::Event| {
            this.sync_from_location();
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = window() {
            let _ = w
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
            // Lives for the whole page
            on_popstate.forget();
        }
    }

    /// Lock document scrolling while a poem panel is open.
    pub fn init_scroll_lock(&self) {
        let poems = self.poems;
        Effect::new(move |_| {
            dom::set_scroll_lock(poems.with(|shelf| shelf.scroll_locked()));
        });
    }

    fn sync_from_location(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let tab = match QueryParams::parse(&search) {
            Ok(params) => params.tab().map(str::to_string),
            Err(e) => {
                log::warn!("ignoring query string '{}': {}", search, e);
                None
            }
        };
        let label = tab.unwrap_or_else(|| self.site.initial_page().to_string());
        let result = self.selector.try_update(|s| s.select_page(&label));
        if let Some(Err(e)) = result {
            log::warn!("{}; keeping current page", e);
        }
    }

    /// Show the page for a nav label, scroll to the top and record `?tab=`.
    pub fn select_page(&self, label: &str) {
        match self.selector.try_update(|s| s.select_page(label)) {
            Some(Ok(change)) => {
                dom::scroll_to_top();
                push_tab(&change.current);
            }
            Some(Err(e)) => log::warn!("{}", e),
            None => {}
        }
    }

    pub fn select_filter(&self, label: &str) {
        self.selector.update(|s| {
            s.select_filter(label);
        });
    }

    /// Dropdown variant: also collapses the dropdown.
    pub fn select_filter_from_dropdown(&self, label: &str) {
        self.select_filter(label);
        self.filter_select.update(|t| t.close());
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar.update(|t| {
            t.toggle();
        });
    }

    pub fn toggle_filter_select(&self) {
        self.filter_select.update(|t| {
            t.toggle();
        });
    }

    pub fn open_testimonial(&self, testimonial: Testimonial) {
        self.testimonial.update(|m| m.open(testimonial));
    }

    pub fn close_testimonial(&self) {
        self.testimonial.update(|m| m.close());
    }

    pub fn toggle_poem(&self, id: u32) {
        if let Some(Err(e)) = self.poems.try_update(|shelf| shelf.toggle_poem(id)) {
            log::warn!("{}", e);
        }
    }

    pub fn copy_poem(&self, id: u32) {
        match self.poems.try_update(|shelf| shelf.copy_poem(id)) {
            Some(Ok(text)) => copy_to_clipboard(&text),
            Some(Err(e)) => log::warn!("{}", e),
            None => {}
        }
    }
}

/// Push a history entry for the new tab without reloading.
fn push_tab(page_key: &str) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let search = location.search().unwrap_or_default();
    let params = QueryParams::parse(&search).unwrap_or_else(|e| {
        log::warn!("dropping unparsable query string '{}': {}", search, e);
        QueryParams::default()
    });
    let new_search = match params.with_tab(page_key).to_search() {
        Ok(s) => s,
        Err(e) => {
            log::error!("failed to encode tab '{}': {}", page_key, e);
            return;
        }
    };
    if new_search == search {
        return;
    }

    let pathname = location.pathname().unwrap_or_default();
    let new_url = format!("{}{}", pathname, new_search);
    if let Ok(history) = w.history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
            log::error!("failed to push history state: {:?}", e);
        }
    }
}
