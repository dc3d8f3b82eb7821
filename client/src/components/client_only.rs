//! Render children only after the client has mounted.

use leptos::prelude::*;

/// Shows `fallback` during SSR and the first client pass, then `children`.
///
/// Keeps browser-only markup out of the static HTML so hydration never sees
/// a mismatch for it.
#[component]
pub fn ClientOnly(#[prop(optional, into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));

    view! {
        <Show when=move || mounted.get() fallback=fallback>
            {children()}
        </Show>
    }
}
