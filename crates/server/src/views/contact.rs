use client_core::FormController;
use leptos::prelude::*;
use shared::forms::ContactForm;

use super::StatusBanner;
use crate::content::CONTACT_EMAIL;

#[component]
pub(crate) fn ContactPage(form: FormController<ContactForm>) -> impl IntoView {
    let submitting = form.is_submitting();
    let message = form.message().cloned();
    let fields = form.fields().clone();
    let submit_label = if submitting { "Sending..." } else { "Send Message" };

    view! {
        <section class="page-hero">
            <h1>"Get in Touch"</h1>
            <p>"We'd love to hear from you. Send us a message and we'll respond as soon as possible."</p>
        </section>

        <section class="contact">
            <aside class="contact-info">
                <h2>"Let's Talk"</h2>
                <p>
                    "Whether you have questions about our services, need support, or want to explore partnership opportunities, we're here to help."
                </p>
                <div class="contact-method">
                    <h3>"Email Us"</h3>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </div>
                <div class="contact-method">
                    <h3>"Response Time"</h3>
                    <p>"Usually within 24 hours"</p>
                </div>
                <div class="tip">
                    <h3>"Quick Tip"</h3>
                    <p>
                        "The more details you provide about your inquiry, the better we can assist you. Don't hesitate to be specific!"
                    </p>
                </div>
            </aside>

            <div class="form-section">
                <h2>"Send a Message"</h2>
                <p class="lead">"Fill out the form below and we'll get back to you shortly."</p>
                <StatusBanner message=message/>
                <form class="site-form" method="post" action="/contact" enctype="multipart/form-data">
                    <div class="form-row">
                        <label>
                            "First Name *"
                            <input type="text" name="first_name" value=fields.first_name required/>
                        </label>
                        <label>
                            "Last Name"
                            <input type="text" name="last_name" value=fields.last_name/>
                        </label>
                    </div>
                    <label>
                        "Email *"
                        <input type="email" name="user_email" value=fields.email required/>
                    </label>
                    <label>
                        "Message *"
                        <textarea name="message" rows="6" required>{fields.message}</textarea>
                    </label>
                    <button type="submit" class="btn" disabled=submitting>{submit_label}</button>
                </form>
            </div>
        </section>
    }
}
