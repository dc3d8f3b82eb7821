//! Hydration-safety helpers for browser-extension interference.
//!
//! Some extensions (Grammarly, LanguageTool, ColorZilla) write attributes onto
//! `<body>` before hydration runs, which the framework then reports as a
//! server/client mismatch. We strip those attributes on mount and keep
//! stripping them for as long as the page shell is alive.
//!
//! TRADE-OFFS
//! ==========
//! Cleanup is best-effort and cosmetic. DOM failures are logged at debug level
//! and otherwise ignored; SSR and native builds compile the watch out entirely.

#[cfg(test)]
#[path = "hydration_test.rs"]
mod hydration_test;

/// Attributes removed from `<body>` on every cleanup pass.
pub const STRIPPED_ATTRIBUTES: [&str; 5] = [
    "cz-shortcut-listen",
    "data-new-gr-c-s-check-loaded",
    "data-gr-ext-installed",
    "data-lt-installed",
    "spellcheck",
];

/// Attributes whose mutation triggers another cleanup pass.
///
/// `spellcheck` is deliberately absent: pages may toggle it themselves.
pub const OBSERVED_ATTRIBUTES: [&str; 4] = [
    "cz-shortcut-listen",
    "data-new-gr-c-s-check-loaded",
    "data-gr-ext-installed",
    "data-lt-installed",
];

/// Minimal attribute access needed by the cleanup pass.
pub trait AttributeHost {
    fn has_attribute(&self, name: &str) -> bool;
    fn remove_attribute(&self, name: &str);
}

/// Remove every known extension attribute present on `host`.
///
/// Returns the attributes that were actually removed.
pub fn strip_extension_attributes<H: AttributeHost + ?Sized>(host: &H) -> Vec<&'static str> {
    let mut removed = Vec::new();
    for attr in STRIPPED_ATTRIBUTES {
        if host.has_attribute(attr) {
            host.remove_attribute(attr);
            log::debug!("removed browser extension attribute: {attr}");
            removed.push(attr);
        }
    }
    removed
}

/// Whether a diagnostic message is caused by a known extension attribute.
pub fn is_extension_noise(message: &str) -> bool {
    OBSERVED_ATTRIBUTES.iter().any(|attr| message.contains(attr))
}

#[cfg(feature = "hydrate")]
impl AttributeHost for web_sys::Element {
    fn has_attribute(&self, name: &str) -> bool {
        web_sys::Element::has_attribute(self, name)
    }

    fn remove_attribute(&self, name: &str) {
        if let Err(err) = web_sys::Element::remove_attribute(self, name) {
            log::debug!("failed to remove attribute {name}: {err:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
pub use watch::BodyAttributeWatch;

#[cfg(feature = "hydrate")]
mod watch {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::{OBSERVED_ATTRIBUTES, strip_extension_attributes};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>;

    /// Live observation of `<body>` attribute mutations.
    ///
    /// Starting the watch runs one cleanup pass immediately. Dropping it
    /// disconnects the observer.
    pub struct BodyAttributeWatch {
        observer: web_sys::MutationObserver,
        _callback: ObserverCallback,
    }

    impl BodyAttributeWatch {
        /// Start watching the document body. Returns `None` outside a browser
        /// or when the observer cannot be attached.
        pub fn start() -> Option<Self> {
            let body: web_sys::Element = web_sys::window()?.document()?.body()?.into();
            strip_extension_attributes(&body);

            let target = body.clone();
            let callback: ObserverCallback = Closure::new(
                move |records: js_sys::Array, _observer: web_sys::MutationObserver| {
                    let touched = records
                        .iter()
                        .filter_map(|record| record.dyn_ref::<web_sys::MutationRecord>().map(web_sys::MutationRecord::type_))
                        .any(|kind| kind == "attributes");
                    if touched {
                        strip_extension_attributes(&target);
                    }
                },
            );

            let observer = match web_sys::MutationObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => observer,
                Err(err) => {
                    log::debug!("mutation observer unavailable: {err:?}");
                    return None;
                }
            };

            let init = web_sys::MutationObserverInit::new();
            init.set_attributes(true);
            let filter = OBSERVED_ATTRIBUTES
                .iter()
                .map(|attr| JsValue::from_str(attr))
                .collect::<js_sys::Array>();
            init.set_attribute_filter(&filter);

            if let Err(err) = observer.observe_with_options(&body, &init) {
                log::debug!("failed to observe body attributes: {err:?}");
                return None;
            }

            Some(Self { observer, _callback: callback })
        }
    }

    impl Drop for BodyAttributeWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}
