//! Body wrapper that keeps browser-extension attributes off `<body>`.

use leptos::prelude::*;

/// Strips extension-injected `<body>` attributes after mount and keeps
/// watching for them until unmounted. Renders `children` unchanged.
#[component]
pub fn ClientBody(children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::hydration::BodyAttributeWatch;

        let watch = StoredValue::new_local(None::<BodyAttributeWatch>);
        Effect::new(move |_| watch.set_value(BodyAttributeWatch::start()));
        on_cleanup(move || watch.set_value(None));
    }

    children()
}
