use crate::layout::global_context::PortfolioContext;
use crate::layout::Shell;
use contracts::site::site;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = match site()
        .map_err(str::to_string)
        .and_then(|site| PortfolioContext::new(site).map_err(|e| e.to_string()))
    {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("failed to load site content: {}", e);
            return view! {
                <main class="load-error">
                    <p>"This page could not be loaded."</p>
                </main>
            }
            .into_any();
        }
    };

    // Provide the page state to the whole app via context.
    provide_context(ctx);
    ctx.init_router_integration();
    ctx.init_scroll_lock();

    view! { <Shell /> }.into_any()
}
