use crate::layout::global_context::use_portfolio;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_portfolio();
    let labels: Vec<String> = ctx
        .selector
        .with_untracked(|s| s.nav_items().iter().map(|n| n.label.clone()).collect());

    view! {
        <nav class="navbar">
            <ul class="navbar-list">
                {labels.into_iter().map(|label| {
                    let label_active = label.clone();
                    let label_click = label.clone();
                    view! {
                        <li class="navbar-item">
                            <button
                                class="navbar-link"
                                class:active=move || ctx.selector.with(|s| s.is_nav_active(&label_active))
                                on:click=move |_| ctx.select_page(&label_click)
                            >
                                {label}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
