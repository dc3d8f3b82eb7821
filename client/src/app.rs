//! Root application component with routing and the page chrome.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    client_body::ClientBody, client_only::ClientOnly, contact_button::ContactButton, footer::Footer, header::Header,
    scroll_progress::ScrollProgress,
};
use crate::pages::{
    about::AboutPage, contact::ContactPage, faq::FaqPage, home::HomePage, not_found::NotFoundPage,
    services::ServicesPage, track::TrackPage,
};
use crate::routes::SiteRoute;
use crate::util::site_config::SiteConfig;

const DESCRIPTION: &str = "Professional delivery services across UAE. Same-day delivery, express shipping, and \
                           reliable courier services in Dubai, Abu Dhabi, Sharjah and all emirates.";
const KEYWORDS: &str = "UAE delivery, Dubai courier, Abu Dhabi delivery, same day delivery, express shipping, \
                        courier services";

/// HTML document rendered for every exported route.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides [`SiteConfig`] and wraps every page in the shared chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Link rel="icon" href="/favicon.ico"/>
        <Meta name="description" content=DESCRIPTION/>
        <Meta name="keywords" content=KEYWORDS/>
        <Meta name="author" content="UAE Delivery Express"/>
        <Meta name="robots" content="index, follow"/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:title" content=SiteRoute::Home.title()/>
        <Meta property="og:description" content=DESCRIPTION/>
        <Meta property="og:locale" content="en_AE"/>

        <ClientBody>
            <Router>
                <ClientOnly>
                    <ScrollProgress/>
                </ClientOnly>
                <Header/>
                <main class="site-main">
                    <Routes fallback=|| view! { <Title text="Page Not Found | UAE Delivery Express"/> <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=|| view! { <Title text=SiteRoute::Home.title()/> <HomePage/> }/>
                        <Route path=StaticSegment("about") view=|| view! { <Title text=SiteRoute::About.title()/> <AboutPage/> }/>
                        <Route path=StaticSegment("services") view=|| view! { <Title text=SiteRoute::Services.title()/> <ServicesPage/> }/>
                        <Route path=StaticSegment("track") view=|| view! { <Title text=SiteRoute::Track.title()/> <TrackPage/> }/>
                        <Route path=StaticSegment("faq") view=|| view! { <Title text=SiteRoute::Faq.title()/> <FaqPage/> }/>
                        <Route path=StaticSegment("contact") view=|| view! { <Title text=SiteRoute::Contact.title()/> <ContactPage/> }/>
                    </Routes>
                </main>
                <Footer/>
                <ContactButton/>
            </Router>
        </ClientBody>
    }
}
