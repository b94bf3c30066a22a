use client_core::RecruitmentState;
use leptos::prelude::*;
use shared::forms::MAX_RESUME_BYTES;

use super::StatusBanner;
use crate::content::FAQS;

#[component]
pub(crate) fn RecruitmentPage(state: RecruitmentState) -> impl IntoView {
    let RecruitmentState { form, faq } = state;
    let submitting = form.is_submitting();
    let message = form.message().cloned();
    let fields = form.fields().clone();
    let submit_label = if submitting { "Submitting..." } else { "Submit Application" };

    view! {
        <section class="page-hero">
            <h1>"Join Our Network"</h1>
            <p>
                "We connect top talent to cutting-edge opportunities in IT and beyond."
                <br/>
                "Shape the future with industry-leading companies."
            </p>
            <a class="btn btn-light" href="#apply">"Apply Now"</a>
        </section>

        <section class="why">
            <h2>"Why Work With Us"</h2>
            <p>
                "We believe every candidate deserves personalized support, transparent communication, and direct access to hiring managers. Your success is our mission."
            </p>
        </section>

        <section id="apply" class="form-section">
            <h2>"Apply Now"</h2>
            <StatusBanner message=message/>
            <form
                class="site-form"
                method="post"
                action="/recruitment/apply"
                enctype="multipart/form-data"
            >
                <div class="form-row">
                    <label>
                        "First Name *"
                        <input type="text" name="first_name" value=fields.first_name required/>
                    </label>
                    <label>
                        "Last Name *"
                        <input type="text" name="last_name" value=fields.last_name required/>
                    </label>
                </div>
                <label>
                    "Email *"
                    <input type="email" name="user_email" value=fields.email required/>
                </label>
                <label>
                    "Phone"
                    <input type="tel" name="phone" value=fields.phone/>
                </label>
                <label>
                    "Description (your experience, role interests) *"
                    <textarea name="message" rows="5" required>{fields.description}</textarea>
                </label>
                <label>
                    {format!("Resume * (max {} MB)", MAX_RESUME_BYTES / (1024 * 1024))}
                    <input type="file" name="resume" accept=".pdf,.doc,.docx" required/>
                </label>
                <button type="submit" class="btn" disabled=submitting>{submit_label}</button>
            </form>
        </section>

        <section class="faq">
            <h2>"Frequently Asked Questions"</h2>
            <div class="faq-list">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let open = faq.is_expanded(index);
                        let href = match faq.toggled(index).expanded() {
                            Some(next) => format!("/?faq={next}#faq-{next}"),
                            None => "/#faq".to_string(),
                        };
                        let class = if open { "faq-item open" } else { "faq-item" };
                        view! {
                            <div class=class id=format!("faq-{index}")>
                                <a class="faq-question" href=href aria-expanded=open.to_string()>
                                    {entry.question}
                                    <span class="chevron">{if open { "▲" } else { "▼" }}</span>
                                </a>
                                {open.then(|| view! { <p class="faq-answer">{entry.answer}</p> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
