use super::*;

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_starts_closed_and_toggles() {
    let mut menu = MenuState::default();
    assert!(!menu.open);
    menu.toggle();
    assert!(menu.open);
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState { open: true };
    menu.close();
    menu.close();
    assert!(!menu.open);
}

// =============================================================
// FaqState
// =============================================================

#[test]
fn faq_toggle_twice_restores_closed() {
    let mut faq = FaqState::default();
    let key = FaqKey::new(1, 2);
    faq.toggle(key);
    assert!(faq.is_open(key));
    faq.toggle(key);
    assert!(!faq.is_open(key));
    assert_eq!(faq.open_count(), 0);
}

#[test]
fn faq_items_open_independently() {
    let mut faq = FaqState::default();
    faq.toggle(FaqKey::new(0, 0));
    faq.toggle(FaqKey::new(0, 1));
    faq.toggle(FaqKey::new(3, 0));
    assert_eq!(faq.open_count(), 3);
    faq.toggle(FaqKey::new(0, 1));
    assert!(faq.is_open(FaqKey::new(0, 0)));
    assert!(!faq.is_open(FaqKey::new(0, 1)));
    assert!(faq.is_open(FaqKey::new(3, 0)));
}

#[test]
fn same_item_index_in_other_category_is_distinct() {
    let mut faq = FaqState::default();
    faq.toggle(FaqKey::new(0, 2));
    assert!(!faq.is_open(FaqKey::new(1, 2)));
}

#[test]
fn panel_id_encodes_key() {
    assert_eq!(FaqKey::new(4, 3).panel_id(), "faq-4-3");
}
