//! Single-selection state for the showcase panels.

use crate::config::PageConfig;

/// Identifier selected when the page loads.
pub const INITIAL_EXAMPLE: i64 = 1;

/// Holds the selected showcase panel and derives highlight classes from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveExampleSelector {
    selected: i64,
    active_class: String,
    glow_class: String,
}

impl Default for ActiveExampleSelector {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

impl ActiveExampleSelector {
    /// Build the selector with [`INITIAL_EXAMPLE`] selected.
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            selected: INITIAL_EXAMPLE,
            active_class: config.active_class.clone(),
            glow_class: config.glow_class.clone(),
        }
    }

    /// Replace the selection with `id`. Any identifier is accepted.
    pub fn select(&mut self, id: i64) {
        tracing::trace!(from = self.selected, to = id, "showcase selection changed");
        self.selected = id;
    }

    /// Currently selected identifier.
    #[must_use]
    pub const fn selected(&self) -> i64 {
        self.selected
    }

    /// Whether `id` is the selected panel.
    #[must_use]
    pub const fn is_selected(&self, id: i64) -> bool {
        self.selected == id
    }

    /// Button class for `id`, empty unless selected.
    #[must_use]
    pub fn active_class(&self, id: i64) -> &str {
        if self.is_selected(id) {
            &self.active_class
        } else {
            ""
        }
    }

    /// Input glow class for `id`, empty unless selected.
    #[must_use]
    pub fn glow_class(&self, id: i64) -> &str {
        if self.is_selected(id) {
            &self.glow_class
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ActiveExampleSelector, INITIAL_EXAMPLE};
    use crate::config::PageConfig;

    #[test]
    fn first_example_is_selected_initially() {
        let selector = ActiveExampleSelector::default();
        assert_eq!(selector.selected(), INITIAL_EXAMPLE);
        assert!(selector.is_selected(1));
        assert!(!selector.is_selected(2));
        assert_eq!(selector.active_class(1), "btn-info");
        assert_eq!(selector.glow_class(1), "glow");
        assert_eq!(selector.glow_class(2), "");
    }

    #[test]
    fn select_moves_highlight() {
        let mut selector = ActiveExampleSelector::default();
        selector.select(3);
        assert!(selector.is_selected(3));
        assert!(!selector.is_selected(1));
        assert_eq!(selector.active_class(3), "btn-info");
        assert_eq!(selector.active_class(1), "");
        assert_eq!(selector.glow_class(1), "");
    }

    #[test]
    fn any_identifier_is_accepted() {
        let mut selector = ActiveExampleSelector::default();
        for id in [0, -7, 42, i64::MAX, i64::MIN] {
            selector.select(id);
            assert_eq!(selector.selected(), id);
            assert!(selector.is_selected(id));
            assert_eq!(selector.glow_class(id), "glow");
        }
    }

    #[test]
    fn classes_follow_config() {
        let config = PageConfig {
            active_class: "btn-primary".to_string(),
            glow_class: "ring".to_string(),
            ..PageConfig::default()
        };
        let mut selector = ActiveExampleSelector::new(&config);
        selector.select(2);
        assert_eq!(selector.active_class(2), "btn-primary");
        assert_eq!(selector.glow_class(2), "ring");
        assert_eq!(selector.active_class(1), "");
    }
}
