use contracts::typewriter::{Typewriter, TypewriterConfig};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Title that types and deletes the configured strings in turn.
#[component]
pub fn TypedText(config: TypewriterConfig) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let mut typewriter = Typewriter::new(config);

    spawn_local(async move {
        TimeoutFuture::new(typewriter.start_delay_ms()).await;
        while let Some(step) = typewriter.tick() {
            // Stop once the owning view has been disposed
            if text.try_set(step.text).is_some() {
                break;
            }
            match step.next_delay_ms {
                Some(ms) => TimeoutFuture::new(ms).await,
                None => break,
            }
        }
    });

    view! {
        <p class="title">
            <span class="typed">{move || text.get()}</span>
            <span class="typed-cursor" aria-hidden="true">"|"</span>
        </p>
    }
}
