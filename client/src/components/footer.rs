//! Site footer with company details and quick links.

use leptos::prelude::*;

use crate::routes::SiteRoute;
use crate::util::links::tel_href;
use crate::util::site_config::SiteConfig;

const QUICK_LINKS: &[(SiteRoute, &str)] = &[
    (SiteRoute::About, "About Us"),
    (SiteRoute::Services, "Our Services"),
    (SiteRoute::Track, "Track Order"),
    (SiteRoute::Faq, "FAQ"),
];

const FOOTER_SERVICES: &[&str] = &[
    "Same Day Delivery",
    "Express Delivery",
    "Bulk Delivery",
    "International Shipping",
];

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let tel = tel_href(&config.phone);
    let mailto = format!("mailto:{}", config.contact_email);
    let copyright = format!("© 2024 {}. All rights reserved.", config.company_name);

    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div class="site-footer__about">
                    <a href=SiteRoute::Home.href() class="site-footer__logo">
                        <span aria-hidden="true">"🚚"</span>
                        <span>{config.company_name}</span>
                    </a>
                    <p class="site-footer__blurb">
                        "Your trusted delivery partner across the UAE. We provide fast, reliable, "
                        "and affordable delivery services for businesses and individuals."
                    </p>
                    <ul class="site-footer__contact">
                        <li>
                            <span aria-hidden="true">"📞"</span>
                            <a href=tel>{config.phone}</a>
                        </li>
                        <li>
                            <span aria-hidden="true">"✉"</span>
                            <a href=mailto>{config.contact_email}</a>
                        </li>
                        <li>
                            <span aria-hidden="true">"📍"</span>
                            <span>{config.address}</span>
                        </li>
                    </ul>
                </div>

                <div>
                    <h3 class="site-footer__heading">"Quick Links"</h3>
                    <ul class="site-footer__list">
                        {QUICK_LINKS
                            .iter()
                            .map(|(route, label)| {
                                view! {
                                    <li>
                                        <a href=route.href()>{*label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="site-footer__heading">"Services"</h3>
                    <ul class="site-footer__list">
                        {FOOTER_SERVICES.iter().map(|name| view! { <li>{*name}</li> }).collect_view()}
                    </ul>
                </div>
            </div>

            <div class="container site-footer__bottom">
                <p>{copyright}</p>
            </div>
        </footer>
    }
}
