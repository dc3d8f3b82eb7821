//! Track page: code entry, mock lookup, and shipment timeline.

use leptos::prelude::*;

use crate::net::tracking::DEMO_CODES;
use crate::net::types::{StepIcon, TimelineEvent, TrackingRecord};
use crate::state::tracking::TrackState;
use crate::util::links::{TRACKING_HELP, tel_href, whatsapp_href};
use crate::util::site_config::SiteConfig;

fn glyph(icon: StepIcon) -> &'static str {
    match icon {
        StepIcon::Check => "✔",
        StepIcon::Package => "▣",
        StepIcon::Truck => "⛟",
    }
}

#[component]
fn TimelineStep(event: TimelineEvent, last: bool) -> impl IntoView {
    let (icon, tone) = event.icon();
    let step_class = if event.completed { "timeline-step timeline-step--done" } else { "timeline-step" };

    view! {
        <li class=step_class>
            <div class="timeline-step__marker">
                <span class=format!("timeline-step__icon {tone}") aria-hidden="true">{glyph(icon)}</span>
                {(!last).then(|| view! { <span class="timeline-step__rail"></span> })}
            </div>
            <div class="timeline-step__body">
                <div class="timeline-step__header">
                    <h4>{event.status.label()}</h4>
                    <span class="muted">{event.time}</span>
                </div>
                <p>{event.description}</p>
                <p class="muted">{event.location}</p>
            </div>
        </li>
    }
}

#[component]
fn TrackingResult(record: &'static TrackingRecord) -> impl IntoView {
    let (delivery_label, delivery_time) = record.delivery_summary();
    let last = record.timeline.len().saturating_sub(1);

    view! {
        <section class="panel tracking-result">
            <div class="tracking-result__header">
                <div>
                    <h2>"Tracking Details"</h2>
                    <p class="muted">"Tracking Number: " <strong>{record.tracking_number}</strong></p>
                </div>
                <span class=format!("status-badge {}", record.status.badge_class())>{record.status.label()}</span>
            </div>

            <div class="grid grid--3 tracking-result__facts">
                <div>
                    <h3>"Service"</h3>
                    <p>{record.service}</p>
                </div>
                <div>
                    <h3>"From"</h3>
                    <p>{record.sender}</p>
                </div>
                <div>
                    <h3>"To"</h3>
                    <p>{record.recipient}</p>
                </div>
            </div>
            <p class="tracking-result__delivery">{delivery_label}<strong>{delivery_time}</strong></p>

            <h3>"Delivery Timeline"</h3>
            <ol class="timeline">
                {record
                    .timeline
                    .iter()
                    .enumerate()
                    .map(|(index, event)| view! { <TimelineStep event=*event last=index == last /> })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn start_lookup(state: RwSignal<TrackState>, code: String) {
    leptos::task::spawn_local(async move {
        let outcome = crate::net::tracking::lookup_tracking(code).await;
        state.update(|s| s.resolve(outcome));
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_lookup(_state: RwSignal<TrackState>, _code: String) {}

#[component]
pub fn TrackPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let state = RwSignal::new(TrackState::default());
    let loading = move || state.with(|s| s.loading);
    let whatsapp = whatsapp_href(&config.whatsapp_number, TRACKING_HELP);
    let tel = tel_href(&config.phone);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(code) = state.try_update(TrackState::begin).flatten() else {
            return;
        };
        start_lookup(state, code);
    };

    view! {
        <div class="page">
            <div class="container container--narrow">
                <header class="page__intro">
                    <h1>"Track Your Package"</h1>
                    <p>"Enter your tracking number to get real-time updates on your delivery"</p>
                </header>

                <section class="panel">
                    <form class="track-form" on:submit=on_submit>
                        <label for="tracking-number" class="sr-only">"Tracking number"</label>
                        <input
                            type="text"
                            id="tracking-number"
                            placeholder="Enter tracking number (e.g., UAE123456)"
                            prop:value=move || state.with(|s| s.input.clone())
                            on:input=move |ev| state.update(|s| s.input = event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn--primary" disabled=loading>
                            {move || if loading() { "Tracking..." } else { "Track" }}
                        </button>
                    </form>
                    {move || {
                        state
                            .with(|s| s.error.clone())
                            .map(|err| view! { <div class="notice notice--error" role="alert">{err.to_string()}</div> })
                    }}
                </section>

                {move || state.with(|s| s.result).map(|record| view! { <TrackingResult record=record /> })}

                <section class="panel panel--tinted demo-codes">
                    <h3>"Demo Tracking Numbers"</h3>
                    <p>"Try these sample tracking numbers to see how our tracking system works:"</p>
                    <ul>
                        {DEMO_CODES
                            .iter()
                            .map(|(code, description)| {
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="demo-codes__code"
                                            on:click=move |_| state.update(|s| s.input = (*code).to_owned())
                                        >
                                            {*code}
                                        </button>
                                        " - "
                                        {*description}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="panel track-help">
                    <h3>"Need Help?"</h3>
                    <p>"Can't find your package or have questions about your delivery? Our customer support team is here to help."</p>
                    <div class="banner__actions">
                        <a href=whatsapp target="_blank" rel="noopener noreferrer" class="btn btn--whatsapp">
                            "WhatsApp Support"
                        </a>
                        <a href=tel class="btn btn--primary">"Call Support"</a>
                    </div>
                </section>
            </div>
        </div>
    }
}
