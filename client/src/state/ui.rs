//! Local UI chrome state (mobile menu, FAQ accordion).
//!
//! DESIGN
//! ======
//! Keeps transient presentation flags out of page content so the toggling
//! rules stay plain and testable. Instances live in component-scoped signals
//! and vanish on navigation.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::BTreeSet;

/// Header state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link closes the mobile menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Identifies one FAQ entry by category and position within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaqKey {
    pub category: usize,
    pub item: usize,
}

impl FaqKey {
    #[must_use]
    pub fn new(category: usize, item: usize) -> Self {
        Self { category, item }
    }

    /// DOM id used for `aria-controls`.
    #[must_use]
    pub fn panel_id(self) -> String {
        format!("faq-{}-{}", self.category, self.item)
    }
}

/// Set of expanded FAQ entries. Entries open independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    open: BTreeSet<FaqKey>,
}

impl FaqState {
    pub fn toggle(&mut self, key: FaqKey) {
        if !self.open.remove(&key) {
            self.open.insert(key);
        }
    }

    #[must_use]
    pub fn is_open(&self, key: FaqKey) -> bool {
        self.open.contains(&key)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
