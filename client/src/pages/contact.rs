//! Contact page: business details, quick actions, and the enquiry form.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactForm, ContactState, SERVICE_OPTIONS, SubmitStatus};
use crate::util::links::{QUOTE_REQUEST, tel_href, whatsapp_href};
use crate::util::site_config::SiteConfig;

const SUCCESS_TEXT: &str = "Thank you! Your message has been sent successfully. We'll get back to you soon.";
const FAILURE_TEXT: &str = "Sorry, there was an error sending your message. Please try again or contact us directly.";

const BUSINESS_HOURS: [&str; 3] = ["Mon - Fri: 8:00 AM - 10:00 PM", "Sat - Sun: 9:00 AM - 8:00 PM", "24/7 Emergency Delivery"];

const MINI_FAQ: [(&str, &str); 4] = [
    ("How quickly can you pick up?", "For same-day delivery, we can pick up within 2 hours of booking."),
    ("Do you deliver on weekends?", "Yes, we offer 7-day delivery service across all emirates."),
    ("What areas do you cover?", "We deliver to all seven emirates and offer international shipping."),
    ("How can I track my package?", "Use our online tracking system or contact us directly for updates."),
];

/// One labelled text control bound to a form field.
#[component]
fn FormInput(
    state: RwSignal<ContactState>,
    field: ContactField,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let value = move || state.with(|s| s.form.value(field).to_owned());
    let error = move || state.with(|s| s.errors.get(field));

    view! {
        <div class="form-field">
            <label for=field.id()>{field.label()}</label>
            <input
                type=input_type.unwrap_or("text")
                id=field.id()
                name=field.id()
                placeholder=placeholder.unwrap_or_default()
                required=field.required()
                class:form-field__control--invalid=move || error().is_some()
                prop:value=value
                on:input=move |ev| state.update(|s| s.update(field, event_target_value(&ev)))
            />
            {move || error().map(|message| view! { <p class="form-field__error">{message}</p> })}
        </div>
    }
}

/// Post `form` in the background and record the outcome.
#[cfg(feature = "hydrate")]
fn send(state: RwSignal<ContactState>, endpoint: String, form: ContactForm) {
    leptos::task::spawn_local(async move {
        let outcome = crate::net::form_submit::submit_contact(&endpoint, &form).await;
        state.update(|s| s.finish_submit(outcome));
    });
}

#[cfg(not(feature = "hydrate"))]
fn send(_state: RwSignal<ContactState>, _endpoint: String, _form: ContactForm) {}

#[component]
fn EnquiryForm(state: RwSignal<ContactState>, endpoint: String) -> impl IntoView {
    let endpoint = StoredValue::new(endpoint);
    let submitting = move || state.with(ContactState::is_submitting);
    let status = move || state.with(|s| s.status);
    let message_error = move || state.with(|s| s.errors.get(ContactField::Message));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = state.try_update(ContactState::begin_submit).flatten() else {
            return;
        };
        send(state, endpoint.get_value(), form);
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <Show when=move || status() == SubmitStatus::Succeeded>
                <div class="notice notice--success" role="status">{SUCCESS_TEXT}</div>
            </Show>
            <Show when=move || status() == SubmitStatus::Failed>
                <div class="notice notice--error" role="alert">{FAILURE_TEXT}</div>
            </Show>

            <div class="grid grid--2">
                <FormInput state=state field=ContactField::Name placeholder="Your full name" />
                <FormInput state=state field=ContactField::Email input_type="email" placeholder="your.email@example.com" />
            </div>
            <div class="grid grid--2">
                <FormInput state=state field=ContactField::Phone input_type="tel" placeholder="+971 50 123 4567" />
                <div class="form-field">
                    <label for=ContactField::Service.id()>{ContactField::Service.label()}</label>
                    <select
                        id=ContactField::Service.id()
                        name=ContactField::Service.id()
                        prop:value=move || state.with(|s| s.form.service.clone())
                        on:change=move |ev| state.update(|s| s.update(ContactField::Service, event_target_value(&ev)))
                    >
                        <option value="">"Select a service"</option>
                        {SERVICE_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="form-field">
                <label for=ContactField::Message.id()>{ContactField::Message.label()}</label>
                <textarea
                    id=ContactField::Message.id()
                    name=ContactField::Message.id()
                    rows="6"
                    required=true
                    placeholder="Tell us about your delivery requirements..."
                    class:form-field__control--invalid=move || message_error().is_some()
                    prop:value=move || state.with(|s| s.form.message.clone())
                    on:input=move |ev| state.update(|s| s.update(ContactField::Message, event_target_value(&ev)))
                ></textarea>
                {move || message_error().map(|message| view! { <p class="form-field__error">{message}</p> })}
            </div>

            <button type="submit" class="btn btn--primary btn--block" disabled=submitting>
                {move || if submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let state = RwSignal::new(ContactState::default());
    let whatsapp = whatsapp_href(&config.whatsapp_number, QUOTE_REQUEST);
    let tel = tel_href(&config.phone);
    let mailto = format!("mailto:{}", config.contact_email);

    view! {
        <div class="page">
            <div class="container">
                <header class="page__intro">
                    <h1>"Contact Us"</h1>
                    <p>"Get in touch with us for all your delivery needs. We're here to help 24/7!"</p>
                </header>

                <div class="grid grid--2 contact-layout">
                    <div class="contact-info">
                        <section class="panel">
                            <h2>"Get In Touch"</h2>
                            <div class="contact-info__item">
                                <span class="round-icon tone-blue" aria-hidden="true">"☎"</span>
                                <div>
                                    <h3>"Phone"</h3>
                                    <a href=tel.clone()>{config.phone.clone()}</a>
                                    <p class="muted">"Available 24/7"</p>
                                </div>
                            </div>
                            <div class="contact-info__item">
                                <span class="round-icon tone-green" aria-hidden="true">"✉"</span>
                                <div>
                                    <h3>"Email"</h3>
                                    <a href=mailto>{config.contact_email.clone()}</a>
                                    <p class="muted">"We respond within 2 hours"</p>
                                </div>
                            </div>
                            <div class="contact-info__item">
                                <span class="round-icon tone-purple" aria-hidden="true">"⌖"</span>
                                <div>
                                    <h3>"Address"</h3>
                                    <p>{config.address.clone()}</p>
                                </div>
                            </div>
                            <div class="contact-info__item">
                                <span class="round-icon tone-orange" aria-hidden="true">"◷"</span>
                                <div>
                                    <h3>"Business Hours"</h3>
                                    {BUSINESS_HOURS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                                </div>
                            </div>
                        </section>

                        <section class="panel panel--muted">
                            <h3>"Quick Actions"</h3>
                            <a href=whatsapp target="_blank" rel="noopener noreferrer" class="btn btn--whatsapp btn--block">
                                "WhatsApp Us"
                            </a>
                            <a href=tel class="btn btn--primary btn--block">"Call Now"</a>
                        </section>
                    </div>

                    <section class="panel">
                        <h2>"Send us a Message"</h2>
                        <EnquiryForm state=state endpoint=config.form_endpoint.clone() />
                    </section>
                </div>

                <section class="section contact-faq">
                    <h2 class="section-heading">"Frequently Asked Questions"</h2>
                    <div class="grid grid--2">
                        {MINI_FAQ
                            .iter()
                            .map(|(question, answer)| {
                                view! {
                                    <div class="panel panel--muted">
                                        <h3>{*question}</h3>
                                        <p>{*answer}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
