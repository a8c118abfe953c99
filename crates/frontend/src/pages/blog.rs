//! Poems with a read/close panel and a copy button each.

use crate::layout::global_context::use_portfolio;
use crate::shared::dom::display;
use leptos::prelude::*;

#[component]
pub fn Blog() -> impl IntoView {
    let ctx = use_portfolio();

    view! {
        <section class="blog-posts">
            <ul class="blog-posts-list">
                {ctx.site.poems.iter().map(|poem| {
                    let id = poem.id;
                    let is_open = move || ctx.poems.with(|shelf| shelf.is_open(id));
                    view! {
                        <li class="blog-post-item">
                            <div class="blog-content">
                                <h3 class="h3 blog-item-title">{poem.title.clone()}</h3>
                                <p class="blog-text">{poem.excerpt.clone()}</p>
                                <button class="blog-read-btn" on:click=move |_| ctx.toggle_poem(id)>
                                    "Read"
                                </button>
                            </div>

                            <div
                                class=format!("poetry poetry-{}", id)
                                class:poetry-display=is_open
                                style:display=move || display(is_open())
                            >
                                <div class="poetry-header">
                                    <h3 class="h3">{poem.title.clone()}</h3>
                                    <button
                                        id=format!("btn-{}", id)
                                        class="poetry-copy-btn"
                                        on:click=move |_| ctx.copy_poem(id)
                                    >
                                        {move || ctx.poems.with(|shelf| shelf.copy_label(id))}
                                    </button>
                                    <button class="poetry-close-btn" on:click=move |_| ctx.toggle_poem(id)>
                                        "Close"
                                    </button>
                                </div>
                                <pre id=format!("copy-poetry-{}", id) class="poetry-text">
                                    {poem.text.clone()}
                                </pre>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
