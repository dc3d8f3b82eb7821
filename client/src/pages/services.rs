//! Service catalogue with starting prices, coverage, and pricing notes.

use leptos::prelude::*;

use crate::routes::SiteRoute;
use crate::util::links::tel_href;
use crate::util::site_config::SiteConfig;

#[derive(Clone, Copy)]
struct Offering {
    glyph: &'static str,
    tone: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    price_from_aed: u32,
}

const OFFERINGS: &[Offering] = &[
    Offering {
        glyph: "⏱",
        tone: "tone-primary",
        title: "Same Day Delivery",
        description: "Get your packages delivered within the same day across UAE",
        features: &[
            "Pickup within 2 hours",
            "Delivery within 6-8 hours",
            "Real-time tracking",
            "SMS & email notifications",
        ],
        price_from_aed: 25,
    },
    Offering {
        glyph: "🚚",
        tone: "tone-secondary",
        title: "Express Delivery",
        description: "Fast next-day delivery service for urgent requirements",
        features: &["Next-day delivery guarantee", "Nationwide coverage", "Priority handling", "Insurance included"],
        price_from_aed: 15,
    },
    Offering {
        glyph: "📦",
        tone: "tone-yellow",
        title: "Standard Delivery",
        description: "Reliable and affordable delivery within 2-3 business days",
        features: &["2-3 business days delivery", "Cost-effective solution", "Secure packaging", "Proof of delivery"],
        price_from_aed: 10,
    },
    Offering {
        glyph: "🌐",
        tone: "tone-purple",
        title: "International Shipping",
        description: "Send packages worldwide with our international shipping service",
        features: &["Global coverage", "Customs clearance", "Door-to-door service", "Multiple shipping options"],
        price_from_aed: 50,
    },
];

const EXTRAS: &[(&str, &str, &str)] = &[
    ("🛡", "Package Insurance", "Protect your valuable items with comprehensive insurance coverage"),
    ("💵", "Cash on Delivery", "Collect payments on behalf of your business with our COD service"),
    ("📦", "Packaging Service", "Professional packaging service to ensure safe delivery"),
];

pub const EMIRATES: [&str; 7] = [
    "Dubai",
    "Abu Dhabi",
    "Sharjah",
    "Ajman",
    "Fujairah",
    "Ras Al Khaimah",
    "Umm Al Quwain",
];

const INCLUDED: &[&str] = &["Pickup and delivery", "Real-time tracking", "SMS notifications", "Customer support"];

const SURCHARGES: &[&str] = &[
    "Fuel surcharge may apply",
    "Remote area delivery charges",
    "Special handling for fragile items",
    "Weekend and holiday delivery",
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let tel = tel_href(&config.phone);
    let call_label = format!("Call: {}", config.phone);

    view! {
        <div class="page">
            <div class="container">
                <header class="page__intro">
                    <h1>"Our Delivery Services"</h1>
                    <p>
                        "Choose from our comprehensive range of delivery solutions designed to meet your specific "
                        "needs and budget requirements."
                    </p>
                </header>

                <div class="grid grid--2 offerings">
                    {OFFERINGS
                        .iter()
                        .map(|offering| {
                            view! {
                                <article class="offering">
                                    <div class=format!("round-icon {}", offering.tone) aria-hidden="true">
                                        {offering.glyph}
                                    </div>
                                    <h3>{offering.title}</h3>
                                    <p>{offering.description}</p>
                                    <h4>"Features:"</h4>
                                    <ul class="dot-list">
                                        {offering.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                    </ul>
                                    <div class="offering__footer">
                                        <div class="offering__price">
                                            {format!("Starting from AED {}", offering.price_from_aed)}
                                        </div>
                                        <a href=SiteRoute::Contact.href() class="btn btn--primary">"Get Quote"</a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>

                <section class="extras">
                    <h2>"Additional Services"</h2>
                    <div class="grid grid--3">
                        {EXTRAS
                            .iter()
                            .map(|(glyph, title, text)| {
                                view! {
                                    <div class="panel panel--muted extra">
                                        <div class="round-icon tone-primary" aria-hidden="true">{*glyph}</div>
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="panel panel--tinted coverage">
                    <h2>"Service Coverage Areas"</h2>
                    <div class="grid grid--7">
                        {EMIRATES.iter().map(|name| view! { <div class="coverage__item">{*name}</div> }).collect_view()}
                    </div>
                    <p>"We provide delivery services across all seven emirates of the UAE"</p>
                </section>

                <section class="panel panel--dark pricing">
                    <h2>"Transparent Pricing"</h2>
                    <div class="grid grid--2">
                        <div>
                            <h3>"What's Included:"</h3>
                            <ul class="dot-list">
                                {INCLUDED.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h3>"Additional Charges:"</h3>
                            <ul class="plain-list">
                                {SURCHARGES.iter().map(|item| view! { <li>{format!("• {item}")}</li> }).collect_view()}
                            </ul>
                        </div>
                    </div>
                </section>

                <section class="closing">
                    <h2>"Ready to Ship?"</h2>
                    <p>"Get an instant quote for your delivery needs or contact our team for custom solutions"</p>
                    <div class="closing__actions">
                        <a href=SiteRoute::Contact.href() class="btn btn--primary btn--large">"Get Instant Quote"</a>
                        <a href=tel class="btn btn--outline btn--large">{call_label}</a>
                    </div>
                </section>
            </div>
        </div>
    }
}
