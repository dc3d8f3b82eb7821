//! Site header: logo, navigation, quote call to action, and mobile menu.
//!
//! DESIGN
//! ======
//! Desktop links and the call to action carry `nav-item` so the entrance
//! schedule can stagger them. Mobile links close the menu on click so the
//! next page never opens with the menu expanded.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::animate::use_animations;
use crate::routes::SiteRoute;
use crate::state::ui::MenuState;
use crate::util::animation::{AnimationSchedule, AnimationSpec, Preset};
use crate::util::site_config::SiteConfig;

/// Header slides down, then the logo, then each nav item 100 ms apart.
pub fn header_schedule() -> AnimationSchedule {
    AnimationSchedule::new()
        .with(AnimationSpec::new(".site-header", Preset::SlideDown { distance_px: 100.0 }))
        .with(AnimationSpec::new(".site-header__logo", Preset::SlideDown { distance_px: 20.0 }).delay(200.0))
        .with(
            AnimationSpec::new(".site-header .nav-item", Preset::SlideDown { distance_px: 20.0 })
                .duration(600.0)
                .delay(500.0)
                .stagger(100.0),
        )
}

#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let menu = RwSignal::new(MenuState::default());
    let close_menu = move |_: leptos::ev::MouseEvent| menu.update(MenuState::close);

    use_animations(header_schedule());

    view! {
        <header class="site-header">
            <div class="container site-header__bar">
                <a href=SiteRoute::Home.href() class="site-header__logo">
                    <span class="site-header__logo-icon" aria-hidden="true">"🚚"</span>
                    <span class="site-header__logo-text">{config.company_name}</span>
                </a>

                <nav class="site-header__nav" aria-label="Main">
                    {SiteRoute::ALL
                        .iter()
                        .map(|route| {
                            view! {
                                <a href=route.href() class="nav-item site-header__link">
                                    {route.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="nav-item site-header__cta">
                    <a href=SiteRoute::Contact.href() class="btn btn--primary">"Get Quote"</a>
                </div>

                <button
                    class="site-header__toggle"
                    type="button"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().open.to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || if menu.get().open { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu.get().open>
                <nav class="container site-header__mobile" aria-label="Mobile">
                    {SiteRoute::ALL
                        .iter()
                        .map(|route| {
                            view! {
                                <a href=route.href() class="site-header__mobile-link" on:click=close_menu>
                                    {route.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=SiteRoute::Contact.href() class="btn btn--primary" on:click=close_menu>
                        "Get Quote"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
