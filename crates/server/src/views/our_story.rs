use client_core::{RevealTracker, ScrollMetrics, ScrollProgress};
use leptos::prelude::*;
use shared::domain::OUR_STORY_ANCHOR;

use crate::content::TIMELINE;

/// Rendered at scroll position zero; the stylesheet's scroll-driven
/// animations take over from these initial values in the browser.
#[component]
pub(crate) fn OurStoryPage() -> impl IntoView {
    let progress = ScrollProgress::mount(ScrollMetrics::default());
    let reveal = RevealTracker::new(TIMELINE.len());
    let fill = format!("--progress: {}%", progress.percent());

    view! {
        <section id=OUR_STORY_ANCHOR class="timeline-page">
            <header class="timeline-header">
                <h1>"Our Story"</h1>
                <p>
                    "From our founding in 2022 to becoming a trusted SAP talent partner for industry leaders"
                </p>
            </header>
            <div class="timeline">
                <div class="timeline-track">
                    <div class="timeline-fill" style=fill></div>
                </div>
                {TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let side = if index % 2 == 0 { "left" } else { "right" };
                        let state = if reveal.is_visible(index) { "revealed" } else { "pending-reveal" };
                        view! {
                            <article class=format!("timeline-entry {side} {state}")>
                                <span class="timeline-year">{entry.year}</span>
                                <h3>{entry.title}</h3>
                                <p>{entry.description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
