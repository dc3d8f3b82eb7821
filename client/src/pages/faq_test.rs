use super::*;

#[test]
fn five_categories_of_four_questions() {
    assert_eq!(FAQ_CATEGORIES.len(), 5);
    for category in FAQ_CATEGORIES {
        assert_eq!(category.entries.len(), 4, "{}", category.title);
    }
}

#[test]
fn entries_have_text() {
    for category in FAQ_CATEGORIES {
        for entry in category.entries {
            assert!(entry.question.ends_with('?'), "{}", entry.question);
            assert!(!entry.answer.is_empty());
            assert!(!entry.answer.contains("  "), "{}", entry.question);
        }
    }
}

#[test]
fn every_entry_has_a_distinct_key() {
    let mut faq = FaqState::default();
    for (category_index, category) in FAQ_CATEGORIES.iter().enumerate() {
        for item_index in 0..category.entries.len() {
            faq.toggle(FaqKey::new(category_index, item_index));
        }
    }
    assert_eq!(faq.open_count(), 20);
}
