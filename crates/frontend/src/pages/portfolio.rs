//! Project list with the category filter.
//!
//! Large screens get a row of buttons, small screens a dropdown; both read
//! the same selection from the view selector so they never disagree.

use contracts::view_selector::filter::{normalize, ALL};
use crate::layout::global_context::use_portfolio;
use crate::shared::dom::display;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Portfolio() -> impl IntoView {
    let ctx = use_portfolio();
    let portfolio = &ctx.site.portfolio;

    let mut labels = vec!["All".to_string()];
    labels.extend(
        portfolio
            .categories
            .iter()
            .filter(|c| normalize(c) != ALL)
            .cloned(),
    );
    let labels = StoredValue::new(labels);

    let is_selected = move |label: &str| ctx.selector.with(|s| s.filter().is_selected(label));

    view! {
        <section class="projects">
            <ul class="filter-list">
                {labels.get_value().into_iter().map(|label| {
                    let label_click = label.clone();
                    let label_active = label.clone();
                    view! {
                        <li class="filter-item">
                            <button
                                class:active=move || is_selected(&label_active)
                                on:click=move |_| ctx.select_filter(&label_click)
                            >
                                {label}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <div class="filter-select-box">
                <button
                    class="filter-select"
                    class:active=move || ctx.filter_select.with(|t| t.is_open())
                    on:click=move |_| ctx.toggle_filter_select()
                >
                    <div class="select-value">
                        {move || ctx.selector.with(|s| s.filter().label().to_string())}
                    </div>
                    <div class="select-icon">{icon("chevron-down")}</div>
                </button>
                <ul
                    class="select-list"
                    style:display=move || display(ctx.filter_select.with(|t| t.is_open()))
                >
                    {labels.get_value().into_iter().map(|label| {
                        let label_click = label.clone();
                        view! {
                            <li class="select-item">
                                <button on:click=move |_| ctx.select_filter_from_dropdown(&label_click)>
                                    {label}
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>

            <ul class="project-list">
                {portfolio.projects.iter().enumerate().map(|(index, project)| {
                    let href = project.url.clone().unwrap_or_else(|| "#".to_string());
                    view! {
                        <li
                            class="project-item"
                            class:active=move || ctx.selector.with(|s| s.filter().is_visible(index))
                            style:display=move || {
                                display(ctx.selector.with(|s| s.filter().is_visible(index)))
                            }
                            data-category=project.category.to_lowercase()
                        >
                            <a href=href>
                                <figure class="project-img">
                                    <div class="project-item-icon-box">{icon("eye")}</div>
                                    <img src=project.image.clone() alt=project.title.clone() loading="lazy" />
                                </figure>
                                <h3 class="project-title">{project.title.clone()}</h3>
                                <p class="project-category">{project.category.clone()}</p>
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
