//! Frequently asked questions, grouped into categories.
//!
//! Each answer toggles on its own; several can be open at once. Open state
//! lives in a page-scoped [`FaqState`] and resets on navigation.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use leptos::prelude::*;

use crate::routes::SiteRoute;
use crate::state::ui::{FaqKey, FaqState};
use crate::util::links::{FAQ_QUESTION, tel_href, whatsapp_href};
use crate::util::site_config::SiteConfig;

#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FaqCategory {
    pub title: &'static str,
    pub entries: &'static [FaqEntry],
}

pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        title: "General Questions",
        entries: &[
            FaqEntry {
                question: "What areas do you deliver to?",
                answer: "We provide delivery services across all seven emirates of the UAE: Dubai, Abu Dhabi, \
                         Sharjah, Ajman, Fujairah, Ras Al Khaimah, and Umm Al Quwain. We also offer international \
                         shipping to selected countries.",
            },
            FaqEntry {
                question: "What are your operating hours?",
                answer: "We operate 24/7 for deliveries. Our customer service is available from 8 AM to 10 PM \
                         daily. For urgent deliveries outside business hours, you can contact us via WhatsApp or \
                         our emergency hotline.",
            },
            FaqEntry {
                question: "How can I track my package?",
                answer: "You can track your package using the tracking number provided via SMS and email. Visit \
                         our tracking page, enter your tracking number, and get real-time updates on your delivery \
                         status.",
            },
            FaqEntry {
                question: "Do you provide insurance for packages?",
                answer: "Yes, we offer comprehensive insurance coverage for your packages. Basic insurance is \
                         included in all our services, and additional coverage is available for high-value items.",
            },
        ],
    },
    FaqCategory {
        title: "Pricing & Payment",
        entries: &[
            FaqEntry {
                question: "How are delivery charges calculated?",
                answer: "Delivery charges are based on several factors including distance, package weight and \
                         size, delivery speed, and any special handling requirements. Contact us for a personalized \
                         quote.",
            },
            FaqEntry {
                question: "What payment methods do you accept?",
                answer: "We accept cash, credit/debit cards, bank transfers, and digital payments. For business \
                         accounts, we also offer monthly billing and credit terms.",
            },
            FaqEntry {
                question: "Do you offer bulk delivery discounts?",
                answer: "Yes, we offer attractive discounts for bulk deliveries and regular customers. Contact our \
                         sales team to discuss volume pricing and corporate packages.",
            },
            FaqEntry {
                question: "Are there any additional charges?",
                answer: "Additional charges may apply for remote areas, weekend/holiday deliveries, special \
                         handling, and fuel surcharges. All charges are clearly communicated before booking.",
            },
        ],
    },
    FaqCategory {
        title: "Delivery Services",
        entries: &[
            FaqEntry {
                question: "What is same-day delivery?",
                answer: "Same-day delivery means your package will be picked up and delivered within the same day. \
                         Pickup is usually within 2 hours of booking, and delivery within 6-8 hours depending on the \
                         distance.",
            },
            FaqEntry {
                question: "Can I schedule a specific delivery time?",
                answer: "Yes, we offer scheduled delivery options. You can choose specific time slots for delivery, \
                         though this may incur additional charges. Contact us to arrange scheduled deliveries.",
            },
            FaqEntry {
                question: "What if the recipient is not available?",
                answer: "If the recipient is not available, we will attempt delivery up to 3 times. We also offer \
                         safe drop-off options, delivery to neighbors (with permission), or holding at our facility \
                         for pickup.",
            },
            FaqEntry {
                question: "Do you deliver on weekends and holidays?",
                answer: "Yes, we provide delivery services on weekends and public holidays. Additional charges may \
                         apply for weekend and holiday deliveries.",
            },
        ],
    },
    FaqCategory {
        title: "Package Requirements",
        entries: &[
            FaqEntry {
                question: "What items can I send?",
                answer: "We accept most general items including documents, electronics, clothing, gifts, and \
                         business materials. Prohibited items include hazardous materials, illegal substances, and \
                         perishable food items.",
            },
            FaqEntry {
                question: "What are the size and weight limits?",
                answer: "Standard packages can be up to 30kg and 100cm in any dimension. For larger or heavier \
                         items, we offer special handling services. Contact us for oversized package requirements.",
            },
            FaqEntry {
                question: "Do you provide packaging services?",
                answer: "Yes, we offer professional packaging services to ensure your items are properly protected \
                         during transit. This includes bubble wrap, boxes, and special packaging for fragile items.",
            },
            FaqEntry {
                question: "How should I prepare my package?",
                answer: "Ensure items are properly packed in sturdy boxes or envelopes. Include clear delivery \
                         addresses and contact information. For fragile items, use appropriate padding and mark the \
                         package clearly.",
            },
        ],
    },
    FaqCategory {
        title: "Business Services",
        entries: &[
            FaqEntry {
                question: "Do you offer corporate accounts?",
                answer: "Yes, we provide dedicated corporate accounts with special rates, monthly billing, dedicated \
                         account managers, and priority support for businesses with regular delivery needs.",
            },
            FaqEntry {
                question: "Can you handle e-commerce deliveries?",
                answer: "Absolutely! We specialize in e-commerce deliveries with features like cash-on-delivery, \
                         return management, bulk shipping, and integration with popular e-commerce platforms.",
            },
            FaqEntry {
                question: "Do you provide cash-on-delivery services?",
                answer: "Yes, we offer cash-on-delivery (COD) services where we collect payment from the recipient \
                         and transfer it to you. This is perfect for e-commerce businesses and online sellers.",
            },
            FaqEntry {
                question: "What reporting do you provide for business customers?",
                answer: "Business customers receive detailed delivery reports, analytics, and tracking data. We \
                         provide monthly statements, delivery performance metrics, and custom reporting as needed.",
            },
        ],
    },
];

const QUICK_LINKS: &[(&str, &str, SiteRoute, &str)] = &[
    ("Get a Quote", "Need pricing for your delivery requirements?", SiteRoute::Contact, "Request Quote →"),
    ("Track Package", "Check the status of your current delivery", SiteRoute::Track, "Track Now →"),
    ("Our Services", "Learn more about our delivery options", SiteRoute::Services, "View Services →"),
];

#[component]
fn FaqItem(key: FaqKey, entry: FaqEntry, faq: RwSignal<FaqState>) -> impl IntoView {
    let is_open = move || faq.with(|state| state.is_open(key));
    let panel_id = key.panel_id();

    view! {
        <div class="faq-item">
            <button
                type="button"
                class="faq-item__question"
                aria-controls=panel_id.clone()
                aria-expanded=move || is_open().to_string()
                on:click=move |_| faq.update(|state| state.toggle(key))
            >
                <h3>{entry.question}</h3>
                <span class="faq-item__chevron" aria-hidden="true">{move || if is_open() { "▲" } else { "▼" }}</span>
            </button>
            <Show when=is_open>
                <div class="faq-item__answer" id=panel_id.clone()>
                    <p>{entry.answer}</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let faq = RwSignal::new(FaqState::default());
    let whatsapp = whatsapp_href(&config.whatsapp_number, FAQ_QUESTION);
    let tel = tel_href(&config.phone);
    let call_label = format!("Call: {}", config.phone);

    view! {
        <div class="page">
            <div class="container container--narrow">
                <header class="page__intro">
                    <h1>"Frequently Asked Questions"</h1>
                    <p>"Find answers to common questions about our delivery services, pricing, and policies"</p>
                </header>

                <div class="faq">
                    {FAQ_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(category_index, category)| {
                            view! {
                                <section class="faq-category">
                                    <h2 class="faq-category__title">{category.title}</h2>
                                    <div class="faq-category__items">
                                        {category
                                            .entries
                                            .iter()
                                            .enumerate()
                                            .map(|(item_index, entry)| {
                                                view! {
                                                    <FaqItem
                                                        key=FaqKey::new(category_index, item_index)
                                                        entry=*entry
                                                        faq=faq
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </section>
                            }
                        })
                        .collect_view()}
                </div>

                <section class="banner faq-help">
                    <h2>"Still Have Questions?"</h2>
                    <p>
                        "Can't find the answer you're looking for? Our customer support team is here to help you "
                        "with any questions or concerns."
                    </p>
                    <div class="banner__actions">
                        <a href=whatsapp target="_blank" rel="noopener noreferrer" class="btn btn--whatsapp">
                            "WhatsApp Support"
                        </a>
                        <a href=tel class="btn btn--light">{call_label}</a>
                        <a href=SiteRoute::Contact.href() class="btn btn--ghost">"Contact Form"</a>
                    </div>
                </section>

                <div class="grid grid--3 quick-links">
                    {QUICK_LINKS
                        .iter()
                        .map(|(title, text, route, cta)| {
                            view! {
                                <div class="panel panel--muted">
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                    <a href=route.href() class="link-arrow">{*cta}</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
