use super::*;
use std::cell::RefCell;
use std::collections::BTreeSet;

#[derive(Default)]
struct FakeBody {
    attrs: RefCell<BTreeSet<String>>,
}

impl FakeBody {
    fn with(attrs: &[&str]) -> Self {
        Self { attrs: RefCell::new(attrs.iter().map(|a| (*a).to_owned()).collect()) }
    }

    fn names(&self) -> Vec<String> {
        self.attrs.borrow().iter().cloned().collect()
    }
}

impl AttributeHost for FakeBody {
    fn has_attribute(&self, name: &str) -> bool {
        self.attrs.borrow().contains(name)
    }

    fn remove_attribute(&self, name: &str) {
        self.attrs.borrow_mut().remove(name);
    }
}

#[test]
fn strip_removes_only_known_extension_attributes() {
    let body = FakeBody::with(&["class", "data-gr-ext-installed", "cz-shortcut-listen", "lang"]);
    let removed = strip_extension_attributes(&body);
    assert_eq!(removed, vec!["cz-shortcut-listen", "data-gr-ext-installed"]);
    assert_eq!(body.names(), vec!["class".to_owned(), "lang".to_owned()]);
}

#[test]
fn strip_removes_spellcheck_even_though_it_is_not_observed() {
    let body = FakeBody::with(&["spellcheck"]);
    assert_eq!(strip_extension_attributes(&body), vec!["spellcheck"]);
    assert!(!OBSERVED_ATTRIBUTES.contains(&"spellcheck"));
}

#[test]
fn strip_on_clean_body_is_noop() {
    let body = FakeBody::with(&["class"]);
    assert!(strip_extension_attributes(&body).is_empty());
    assert_eq!(body.names(), vec!["class".to_owned()]);
}

#[test]
fn repeated_strip_is_idempotent() {
    let body = FakeBody::with(&STRIPPED_ATTRIBUTES);
    assert_eq!(strip_extension_attributes(&body).len(), STRIPPED_ATTRIBUTES.len());
    assert!(strip_extension_attributes(&body).is_empty());
    assert!(body.names().is_empty());
}

#[test]
fn observed_attributes_are_a_subset_of_stripped() {
    for attr in OBSERVED_ATTRIBUTES {
        assert!(STRIPPED_ATTRIBUTES.contains(&attr), "{attr}");
    }
}

#[test]
fn extension_noise_matches_known_attribute_names() {
    assert!(is_extension_noise(
        "Warning: Extra attributes from the server: data-new-gr-c-s-check-loaded,data-gr-ext-installed"
    ));
    assert!(is_extension_noise("attribute cz-shortcut-listen did not match"));
    assert!(!is_extension_noise("hydration mismatch on <main>"));
    assert!(!is_extension_noise("spellcheck differs"));
}
