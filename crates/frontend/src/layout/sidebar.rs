//! Profile card with the collapsible contact list (collapsed on mobile).

use crate::layout::global_context::use_portfolio;
use crate::shared::icons::icon;
use crate::shared::typed_text::TypedText;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_portfolio();
    let profile = &ctx.site.profile;
    let is_open = move || ctx.sidebar.with(|t| t.is_open());
    let mailto = format!("mailto:{}", profile.email);

    view! {
        <aside class="sidebar" class:active=is_open>
            <div class="sidebar-info">
                <figure class="avatar-box">
                    <img src=profile.avatar.clone() alt=profile.name.clone() width="80" />
                </figure>
                <div class="info-content">
                    <h1 class="name" title=profile.name.clone()>{profile.name.clone()}</h1>
                    <TypedText config=ctx.site.typed.clone() />
                </div>
                <button class="info_more-btn" on:click=move |_| ctx.toggle_sidebar()>
                    <span>{move || if is_open() { "Hide Contacts" } else { "Show Contacts" }}</span>
                    {icon("chevron-down")}
                </button>
            </div>

            <div class="sidebar-info_more">
                <div class="separator"></div>
                <ul class="contacts-list">
                    <li class="contact-item">
                        <div class="icon-box">{icon("mail")}</div>
                        <div class="contact-info">
                            <p class="contact-title">"Email"</p>
                            <a href=mailto class="contact-link">{profile.email.clone()}</a>
                        </div>
                    </li>
                    {profile.phone.clone().map(|phone| {
                        let tel = format!("tel:{}", phone.replace([' ', '(', ')', '-'], ""));
                        view! {
                            <li class="contact-item">
                                <div class="icon-box">{icon("phone")}</div>
                                <div class="contact-info">
                                    <p class="contact-title">"Phone"</p>
                                    <a href=tel class="contact-link">{phone}</a>
                                </div>
                            </li>
                        }
                    })}
                    {profile.location.clone().map(|location| view! {
                        <li class="contact-item">
                            <div class="icon-box">{icon("location")}</div>
                            <div class="contact-info">
                                <p class="contact-title">"Location"</p>
                                <address>{location}</address>
                            </div>
                        </li>
                    })}
                </ul>
                <div class="separator"></div>
                <ul class="social-list">
                    {profile.socials.iter().map(|social| view! {
                        <li class="social-item">
                            <a href=social.url.clone() class="social-link" target="_blank" rel="noopener">
                                {icon(&social.name)}
                            </a>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </aside>
    }
}
