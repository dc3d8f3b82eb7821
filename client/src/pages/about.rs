//! Company background, impact numbers, and values.

use leptos::prelude::*;

use crate::util::site_config::SiteConfig;

const STATS: &[(&str, &str)] = &[
    ("50K+", "Deliveries Completed"),
    ("5K+", "Happy Customers"),
    ("7", "Emirates Covered"),
    ("99%", "On-Time Delivery"),
];

#[derive(Clone, Copy)]
struct Value {
    glyph: &'static str,
    tone: &'static str,
    title: &'static str,
    text: &'static str,
}

const VALUES: &[Value] = &[
    Value {
        glyph: "🚚",
        tone: "tone-primary",
        title: "Reliability",
        text: "We deliver on our promises, ensuring your packages reach their destination safely and on time.",
    },
    Value {
        glyph: "👥",
        tone: "tone-secondary",
        title: "Customer First",
        text: "Our customers are at the center of everything we do. Their satisfaction is our success.",
    },
    Value {
        glyph: "🏆",
        tone: "tone-yellow",
        title: "Excellence",
        text: "We strive for excellence in every delivery, continuously improving our services.",
    },
    Value {
        glyph: "♥",
        tone: "tone-red",
        title: "Community",
        text: "We are committed to supporting local businesses and communities across the UAE.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let company = use_context::<SiteConfig>().unwrap_or_default().company_name;

    view! {
        <div class="page">
            <div class="container">
                <header class="page__intro">
                    <h1>{format!("About {company}")}</h1>
                    <p>
                        "We are UAE's leading delivery service provider, committed to connecting people "
                        "and businesses through fast, reliable, and affordable delivery solutions."
                    </p>
                </header>

                <div class="grid grid--2 about-story">
                    <div>
                        <h2>"Our Story"</h2>
                        <p>
                            {format!("Founded in 2020, {company} started with a simple mission: ")}
                            "to make delivery services more accessible, reliable, and affordable for everyone in the UAE."
                        </p>
                        <p>
                            "What began as a small local delivery service has grown into one of the most trusted "
                            "delivery networks across the Emirates, serving thousands of customers daily with our "
                            "commitment to excellence."
                        </p>
                        <p>
                            "Today, we continue to innovate and expand our services, always keeping our customers' "
                            "needs at the heart of everything we do."
                        </p>
                    </div>
                    <div class="panel panel--muted">
                        <h3>"Our Mission"</h3>
                        <p>
                            "To provide exceptional delivery services that exceed customer expectations while "
                            "contributing to the growth of businesses and communities across the UAE."
                        </p>
                        <h3>"Our Vision"</h3>
                        <p>
                            "To be the most trusted and innovative delivery service provider in the UAE, setting new "
                            "standards for speed, reliability, and customer satisfaction."
                        </p>
                    </div>
                </div>

                <section class="panel panel--tinted stats">
                    <h2>"Our Impact in Numbers"</h2>
                    <div class="grid grid--4">
                        {STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="stat">
                                        <div class="stat__value">{*value}</div>
                                        <div class="stat__label">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="values">
                    <h2>"Our Core Values"</h2>
                    <div class="grid grid--4">
                        {VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <div class="value">
                                        <div class=format!("round-icon {}", value.tone) aria-hidden="true">
                                            {value.glyph}
                                        </div>
                                        <h3>{value.title}</h3>
                                        <p>{value.text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="team">
                    <h2>"Meet Our Team"</h2>
                    <p>
                        "Our dedicated team of professionals works around the clock to ensure your delivery "
                        "experience is seamless and satisfactory."
                    </p>
                    <div class="banner">
                        <h3>"Join Our Growing Team"</h3>
                        <p>
                            "We're always looking for passionate individuals to join our mission of delivering "
                            "excellence across the UAE."
                        </p>
                        <button type="button" class="btn btn--light">"View Career Opportunities"</button>
                    </div>
                </section>
            </div>
        </div>
    }
}
