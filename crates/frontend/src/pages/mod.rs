//! Content sections of the single-page layout. All of them are rendered
//! up front; only the one selected in the view selector carries `active`.

pub mod about;
pub mod blog;
pub mod contact;
pub mod portfolio;
pub mod resume;

use crate::layout::global_context::use_portfolio;
use crate::shared::dom::display;
use leptos::prelude::*;

fn page_body(key: &str, title: &str) -> AnyView {
    match key {
        "about" => view! { <about::About /> }.into_any(),
        "resume" => view! { <resume::Resume /> }.into_any(),
        "portfolio" => view! { <portfolio::Portfolio /> }.into_any(),
        "blog" => view! { <blog::Blog /> }.into_any(),
        "contact" => view! { <contact::Contact /> }.into_any(),
        _ => {
            log::warn!("no content for page '{}'", key);
            view! { <p class="page-empty">{format!("{} is coming soon.", title)}</p> }.into_any()
        }
    }
}

#[component]
pub fn Pages() -> impl IntoView {
    let ctx = use_portfolio();
    let pages: Vec<(String, String)> = ctx.selector.with_untracked(|s| {
        s.nav_items()
            .iter()
            .map(|n| (n.target_page_key.clone(), n.label.clone()))
            .collect()
    });

    pages
        .into_iter()
        .map(|(key, title)| {
            let key_active = key.clone();
            let key_display = key.clone();
            view! {
                <article
                    class=format!("{} page", key)
                    class:active=move || ctx.selector.with(|s| s.is_page_visible(&key_active))
                    style:display=move || {
                        display(ctx.selector.with(|s| s.is_page_visible(&key_display)))
                    }
                    data-page=key.clone()
                >
                    <header>
                        <h2 class="h2 article-title">{title.clone()}</h2>
                    </header>
                    {page_body(&key, &title)}
                </article>
            }
        })
        .collect_view()
}
