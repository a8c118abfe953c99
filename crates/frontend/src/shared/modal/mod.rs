use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle overlay click
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-container active">
            <div class="overlay active" on:click=handle_overlay_click></div>
            <section class="testimonials-modal" on:click=stop_propagation>
                <button class="modal-close-btn" on:click=handle_close>
                    {icon("x")}
                </button>
                {children()}
            </section>
        </div>
    }
}
