use crate::layout::global_context::use_portfolio;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_portfolio();
    let about = &ctx.site.about;

    // Escape closes the testimonial modal
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape"
                    && ctx.testimonial.with_untracked(|m| m.is_open())
                {
                    ctx.close_testimonial();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let on_close = Callback::new(move |_| ctx.close_testimonial());

    view! {
        <section class="about-text">
            {about.paragraphs.iter().map(|p| view! { <p>{p.clone()}</p> }).collect_view()}
        </section>

        <section class="service">
            <h3 class="h3 service-title">"What I'm doing"</h3>
            <ul class="service-list">
                {about.services.iter().map(|service| view! {
                    <li class="service-item">
                        <div class="service-content-box">
                            <h4 class="h4 service-item-title">{service.title.clone()}</h4>
                            <p class="service-item-text">{service.text.clone()}</p>
                        </div>
                    </li>
                }).collect_view()}
            </ul>
        </section>

        <section class="testimonials">
            <h3 class="h3 testimonials-title">"Testimonials"</h3>
            <ul class="testimonials-list has-scrollbar">
                {ctx.site.testimonials.iter().map(|t| {
                    let shown = t.clone();
                    view! {
                        <li class="testimonials-item">
                            <div class="content-card" on:click=move |_| ctx.open_testimonial(shown.clone())>
                                <figure class="testimonials-avatar-box">
                                    <img src=t.avatar.clone() alt=t.name.clone() width="60" />
                                </figure>
                                <h4 class="h4 testimonials-item-title">{t.name.clone()}</h4>
                                <div class="testimonials-text">
                                    <p>{t.text.clone()}</p>
                                </div>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>

        <Show when=move || ctx.testimonial.with(|m| m.is_open())>
            <Modal on_close=on_close>
                {move || ctx.testimonial.with(|m| m.shown().cloned()).map(|t| view! {
                    <div class="modal-img-wrapper">
                        <figure class="modal-avatar-box">
                            <img src=t.avatar.clone() alt=t.name.clone() width="80" />
                        </figure>
                    </div>
                    <div class="modal-content">
                        <h4 class="h3 modal-title">{t.name.clone()}</h4>
                        <div>
                            <p>{t.text.clone()}</p>
                        </div>
                    </div>
                })}
            </Modal>
        </Show>
    }
}
