pub mod api;

use contracts::contact::ContactMessage;
use crate::layout::global_context::use_portfolio;
use crate::shared::api_utils::contact_endpoint;
use crate::shared::icons::icon;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_portfolio();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let status = RwSignal::new(None::<String>);

    let form_message = move || ContactMessage {
        name: name.get(),
        email: email.get(),
        message: message.get(),
    };
    let can_submit = move || !sending.get() && form_message().is_valid();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match form_message().into_request() {
            Ok(request) => request,
            Err(e) => {
                status.set(Some(e.to_string()));
                return;
            }
        };

        sending.set(true);
        status.set(None);
        let endpoint = contact_endpoint(ctx.site);
        let owner = ctx.site.profile.name.clone();
        spawn_local(async move {
            match api::send_contact(&endpoint, &request).await {
                Ok(()) => {
                    log::info!("contact message delivered for {}", request.email);
                    if let Some(w) = web_sys::window() {
                        if let Err(e) = w.alert_with_message(&request.acknowledgement(&owner)) {
                            log::warn!("failed to show acknowledgement: {:?}", e);
                        }
                    }
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(e) => {
                    log::error!("contact submission failed: {}", e);
                    status.set(Some(
                        "Your message could not be sent right now. Please try again later."
                            .to_string(),
                    ));
                }
            }
            sending.set(false);
        });
    };

    view! {
        <section class="contact-form">
            <h3 class="h3 form-title">"Contact Form"</h3>
            <form class="form" on:submit=on_submit>
                <div class="input-wrapper">
                    <input
                        id="name"
                        type="text"
                        name="fullname"
                        class="form-input"
                        placeholder="Full name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        id="email"
                        type="email"
                        name="email"
                        class="form-input"
                        placeholder="Email address"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <textarea
                    id="message"
                    name="message"
                    class="form-input"
                    placeholder="Your Message"
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                {move || status.get().map(|text| view! { <p class="form-status">{text}</p> })}
                <button class="form-btn" type="submit" disabled=move || !can_submit()>
                    {icon("send")}
                    <span>{move || if sending.get() { "Sending..." } else { "Send Message" }}</span>
                </button>
            </form>
        </section>
    }
}
