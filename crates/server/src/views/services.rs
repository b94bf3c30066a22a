use leptos::prelude::*;
use shared::domain::PageId;

use super::nav_href;
use crate::content::{PROCESS_STEPS, SERVICES, SERVICE_STATS};

#[component]
pub(crate) fn ServicesPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Our Services"</h1>
            <p>"Transforming the industry with the right skills at the right time."</p>
        </section>

        <section class="stats-band">
            <h2>"Tailored solutions with the right resources at the right time."</h2>
            <dl class="stats">
                {SERVICE_STATS
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

        <section class="services">
            <h2>"What We Offer"</h2>
            <p class="lead">"Tailored services for the technology sector"</p>
            <div class="service-grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="service-card" tabindex="0">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul>
                                    {service
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="process">
            <h2>"Our Process"</h2>
            <p class="lead">"Proven methodology for successful hiring"</p>
            <ol class="process-steps">
                {PROCESS_STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, (title, description))| {
                        view! {
                            <li class="process-step">
                                <span class="step-number">{index + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>

        <section class="cta-band">
            <h2>"Ready to Build Your Team?"</h2>
            <p>"Let's discuss how we can help you find the right technology talent."</p>
            <a class="btn btn-light" href=nav_href(PageId::Contact)>"Get Started Today"</a>
        </section>
    }
}
