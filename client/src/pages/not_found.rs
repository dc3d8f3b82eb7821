use leptos::prelude::*;

use crate::routes::SiteRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container page__intro">
                <h1>"Page not found."</h1>
                <a href=SiteRoute::Home.href() class="btn btn--primary">"Back to Home"</a>
            </div>
        </div>
    }
}
