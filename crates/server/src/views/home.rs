use client_core::{
    carousel::{rotation_interval, NARROW_VIEWPORT_WIDTH},
    Carousel,
};
use leptos::prelude::*;
use shared::domain::PageId;

use super::nav_href;
use crate::content::{CLIENTS, HOME_STATS, JOBS, SLIDES};

/// Keyframes and per-viewport intervals for the hero rotation. Slides sit in
/// one grid cell and each runs the same cycle shifted by its offset.
pub(crate) fn rotation_css(slides: usize) -> String {
    if slides < 2 {
        return String::new();
    }
    let wide = rotation_interval(NARROW_VIEWPORT_WIDTH).as_millis();
    let narrow = rotation_interval(NARROW_VIEWPORT_WIDTH - 1).as_millis();
    let window = 100.0 / slides as f64;
    let fade = window * 0.08;
    format!(
        ".hero {{ --slide-count: {slides}; --rotation-interval: {wide}ms; }}\n\
         @media (max-width: {max}px) {{ .hero {{ --rotation-interval: {narrow}ms; }} }}\n\
         @keyframes hero-rotate {{ \
         0% {{ opacity: 0; visibility: visible; }} \
         {fade:.3}%, {hold:.3}% {{ opacity: 1; visibility: visible; }} \
         {window:.3}%, 100% {{ opacity: 0; visibility: hidden; }} }}",
        max = NARROW_VIEWPORT_WIDTH - 1,
        hold = window - fade,
    )
}

#[component]
pub(crate) fn HomePage(carousel: Carousel) -> impl IntoView {
    let next = format!("/?slide={}", carousel.next_index());
    let len = carousel.len();

    view! {
        <style>{rotation_css(len)}</style>
        <section class="hero">
            <div class="hero-slides">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        let current = index == carousel.current();
                        // Offset 0 is the requested slide; the rest follow in order.
                        let offset = (index + len - carousel.current()) % len;
                        let class = if current { "hero-slide active" } else { "hero-slide" };
                        let hidden = (!current).then_some("true");
                        view! {
                            <div class=class style=format!("--slide-offset: {offset}") aria-hidden=hidden>
                                <h1>{slide.title}</h1>
                                <p>{slide.description}</p>
                                <a class="btn" href=format!("#{}", slide.anchor)>{slide.cta}</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="hero-dots">
                {(0..len)
                    .map(|index| {
                        let class = if index == carousel.current() { "dot active" } else { "dot" };
                        view! {
                            <a
                                class=class
                                href=format!("/?slide={index}")
                                aria-label=format!("Go to slide {}", index + 1)
                            ></a>
                        }
                    })
                    .collect_view()}
                <a class="hero-next" href=next>"Next"</a>
            </div>
        </section>

        <section id="clients" class="clients">
            <h2>"Trusted by " <span class="accent">"Industry Leaders"</span></h2>
            <p class="lead">"We partner with forward-thinking companies to deliver exceptional SAP talent"</p>
            <ul class="client-strip">
                {CLIENTS.iter().map(|name| view! { <li>{*name}</li> }).collect_view()}
            </ul>
        </section>

        <section id="about" class="about">
            <div>
                <h2>"About " <span class="accent">"Fisker IT"</span></h2>
                <p>
                    "We connect talented IT professionals with leading companies. Our contractors have successfully delivered 6 major projects for clients including Tech Mahindra, United Therapeutics, GE Aviation, and ERP Fixers."
                </p>
                <p>
                    "With a 90% retention rate and 24-hour response time, we pride ourselves on building lasting relationships between exceptional talent and forward-thinking organizations."
                </p>
            </div>
            <dl class="stats">
                {HOME_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <dt>{stat.value}</dt>
                                <dd>{stat.label}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>

        <section id="join" class="join">
            <h2>"Join Our Team"</h2>
            <p>
                "Join our growing team of 20+ contractors working with companies like Tech Mahindra, United Therapeutics, and GE Aviation. Currently hiring for 2 SAP positions with 24-hour response time."
            </p>
            <div class="job-grid">
                {JOBS
                    .iter()
                    .map(|job| {
                        view! {
                            <article class="job-card">
                                <h3>{job.title}</h3>
                                <p>{job.description}</p>
                                <span class="salary">{job.salary}</span>
                                <a class="btn" href=nav_href(PageId::Recruitment)>"Apply Now →"</a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
