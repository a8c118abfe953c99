use contracts::site::TimelineEntry;
use crate::layout::global_context::use_portfolio;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn Timeline(
    title: &'static str,
    icon_name: &'static str,
    entries: &'static [TimelineEntry],
) -> impl IntoView {
    view! {
        <section class="timeline">
            <div class="title-wrapper">
                <div class="icon-box">{icon(icon_name)}</div>
                <h3 class="h3">{title}</h3>
            </div>
            <ol class="timeline-list">
                {entries.iter().map(|entry| view! {
                    <li class="timeline-item">
                        <h4 class="h4 timeline-item-title">{entry.title.clone()}</h4>
                        <span>{entry.period.clone()}</span>
                        <p class="timeline-text">{entry.text.clone()}</p>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn Resume() -> impl IntoView {
    let ctx = use_portfolio();
    let resume = &ctx.site.resume;

    view! {
        <Timeline title="Education" icon_name="book" entries=resume.education.as_slice() />
        <Timeline title="Experience" icon_name="briefcase" entries=resume.experience.as_slice() />

        <section class="skill">
            <h3 class="h3 skills-title">"My skills"</h3>
            <ul class="skills-list content-card">
                {resume.skills.iter().map(|skill| view! {
                    <li class="skills-item">
                        <div class="title-wrapper">
                            <h5 class="h5">{skill.name.clone()}</h5>
                            <span class="skill-level">{format!("{}%", skill.level)}</span>
                        </div>
                        <div class="skill-progress-bg">
                            <div class="skill-progress-fill" style:width=format!("{}%", skill.level)></div>
                        </div>
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}
