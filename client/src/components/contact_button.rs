//! Floating messaging-app button shown on every page.

use leptos::prelude::*;

use crate::util::links::{GENERAL_ENQUIRY, whatsapp_href};
use crate::util::site_config::SiteConfig;

#[component]
pub fn ContactButton() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let href = whatsapp_href(&config.whatsapp_number, GENERAL_ENQUIRY);

    view! {
        <a
            class="contact-button"
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Contact us on WhatsApp"
        >
            <span class="contact-button__icon" aria-hidden="true">"💬"</span>
        </a>
    }
}
