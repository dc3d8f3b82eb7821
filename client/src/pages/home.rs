//! Landing page: hero, feature grid, service preview, and call to action.
//!
//! The hero runs a timed entrance; everything below the fold animates on
//! scroll and reverses when scrolled back above its start point.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::animate::use_animations;
use crate::routes::SiteRoute;
use crate::util::animation::{AnimationSchedule, AnimationSpec, Ease, Position, Preset, Timeline};
use crate::util::links::tel_href;
use crate::util::site_config::SiteConfig;

#[derive(Clone, Copy)]
struct Feature {
    glyph: &'static str,
    tone: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        glyph: "🚚",
        tone: "tone-primary",
        title: "Fast Delivery",
        text: "Same-day and express delivery options available across UAE",
    },
    Feature {
        glyph: "⏱",
        tone: "tone-secondary",
        title: "24/7 Service",
        text: "Round-the-clock delivery service for urgent requirements",
    },
    Feature {
        glyph: "🛡",
        tone: "tone-yellow",
        title: "Secure & Safe",
        text: "Your packages are insured and handled with utmost care",
    },
    Feature {
        glyph: "★",
        tone: "tone-purple",
        title: "5-Star Rated",
        text: "Trusted by thousands of customers across UAE",
    },
];

#[derive(Clone, Copy)]
struct ServicePreview {
    title: &'static str,
    text: &'static str,
    points: &'static [&'static str],
}

const SERVICE_PREVIEWS: &[ServicePreview] = &[
    ServicePreview {
        title: "Same Day Delivery",
        text: "Need it delivered today? Our same-day delivery service ensures your packages reach their \
               destination within hours.",
        points: &["Pickup within 2 hours", "Delivery within 6-8 hours", "Real-time tracking"],
    },
    ServicePreview {
        title: "Express Delivery",
        text: "Fast and reliable express delivery service for urgent business and personal needs across UAE.",
        points: &["Next-day delivery", "Nationwide coverage", "Competitive pricing"],
    },
    ServicePreview {
        title: "Bulk Delivery",
        text: "Special rates for bulk deliveries. Perfect for e-commerce businesses and large-scale \
               distribution needs.",
        points: &["Volume discounts", "Dedicated support", "Flexible scheduling"],
    },
];

/// Hero entrance: title, then subtitle, description and buttons, each
/// overlapping the previous step.
pub fn hero_timeline() -> Timeline {
    Timeline::new()
        .then(
            AnimationSpec::new(".hero-title", Preset::FadeInUp)
                .from_y(100.0)
                .duration(1000.0)
                .ease(Ease::Power3Out),
        )
        .then_at(AnimationSpec::new(".hero-subtitle", Preset::FadeInUp), Position::Overlap(500.0))
        .then_at(
            AnimationSpec::new(".hero-description", Preset::FadeInUp).from_y(30.0).duration(600.0),
            Position::Overlap(300.0),
        )
        .then_at(
            AnimationSpec::new(".hero-buttons", Preset::FadeInUp).from_y(30.0).duration(600.0),
            Position::Overlap(200.0),
        )
}

pub fn home_schedule() -> AnimationSchedule {
    AnimationSchedule::new()
        .with_timeline(hero_timeline())
        .with(AnimationSpec::new(".section-title", Preset::Reveal).on_scroll())
        .with(AnimationSpec::new(".feature-card", Preset::ScaleIn).stagger(200.0).on_scroll_of(".features-section"))
        .with(AnimationSpec::new(".service-card", Preset::FadeInUp).stagger(200.0).on_scroll_of(".services-section"))
        .with(AnimationSpec::new(".cta-content", Preset::FadeInUp).on_scroll_of(".cta-section"))
        .with(AnimationSpec::new(".feature-icon", Preset::Floating).delay(1500.0))
        // Hover effects go last so they layer over the entrance animations.
        .with(AnimationSpec::new(".btn--primary", Preset::Pulse).on_hover())
        .with(AnimationSpec::new(".feature-card, .service-card", Preset::Lift).on_hover())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let call_label = format!("Call Now: {}", config.phone);
    let tel = tel_href(&config.phone);
    let why_title = format!("Why Choose {}?", config.company_name);

    use_animations(home_schedule());

    view! {
        <section class="hero">
            <div class="container hero__inner">
                <h1 class="hero-title">
                    <span class="hero-subtitle">"Fast & Reliable"</span>
                    <span class="hero-title__accent">"Delivery Services"</span>
                    <span class="hero-title__tail">"Across UAE"</span>
                </h1>
                <p class="hero-description">
                    "Your trusted delivery partner in the UAE. We provide same-day delivery, express shipping, "
                    "and reliable courier services for businesses and individuals."
                </p>
                <div class="hero-buttons">
                    <a href=SiteRoute::Contact.href() class="btn btn--primary btn--large">
                        "Get Instant Quote →"
                    </a>
                    <a href=SiteRoute::Track.href() class="btn btn--outline btn--large">
                        "Track Your Order"
                    </a>
                </div>
            </div>
        </section>

        <section class="section features-section">
            <div class="container">
                <div class="section__intro">
                    <h2 class="section-title">{why_title}</h2>
                    <p>"We combine speed, reliability, and affordability to deliver exceptional service"</p>
                </div>
                <div class="grid grid--4">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <div class=format!("feature-icon {}", feature.tone) aria-hidden="true">
                                        {feature.glyph}
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section section--muted services-section">
            <div class="container">
                <div class="section__intro">
                    <h2 class="section-title">"Our Services"</h2>
                    <p>"Comprehensive delivery solutions tailored to your needs"</p>
                </div>
                <div class="grid grid--3">
                    {SERVICE_PREVIEWS
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <h3>{service.title}</h3>
                                    <p>{service.text}</p>
                                    <ul class="service-card__points">
                                        {service.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                                    </ul>
                                    <a href=SiteRoute::Services.href() class="link-arrow">"Learn More →"</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section cta-section">
            <div class="container cta-content">
                <h2>"Ready to Get Started?"</h2>
                <p>"Get an instant quote for your delivery needs or contact us for custom solutions"</p>
                <div class="cta-content__actions">
                    <a href=SiteRoute::Contact.href() class="btn btn--light">"Get Quote Now →"</a>
                    <a href=tel class="btn btn--ghost">{call_label}</a>
                </div>
            </div>
        </section>
    }
}
