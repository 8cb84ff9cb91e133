//! Expanded/collapsed state for every documented example.

use std::collections::BTreeMap;

use crate::config::PageConfig;
use crate::core::examples::ExampleId;

/// Tracks which examples currently show their code and the matching copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleVisibilityToggle {
    expanded: BTreeMap<ExampleId, bool>,
    collapsed_class: String,
    show_label: String,
    hide_label: String,
}

impl Default for ExampleVisibilityToggle {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

impl ExampleVisibilityToggle {
    /// Build the toggle with every example collapsed.
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            expanded: ExampleId::all().into_iter().map(|id| (id, false)).collect(),
            collapsed_class: config.collapsed_class.clone(),
            show_label: config.show_code_label.clone(),
            hide_label: config.hide_code_label.clone(),
        }
    }

    /// Flip the example named by `key`. Unknown keys leave the state untouched.
    pub fn toggle(&mut self, key: &str) {
        match ExampleId::parse(key) {
            Ok(id) => self.toggle_example(id),
            Err(err) => tracing::debug!(error = %err, "ignoring toggle"),
        }
    }

    /// Flip the expanded flag of `id`.
    pub fn toggle_example(&mut self, id: ExampleId) {
        if let Some(flag) = self.expanded.get_mut(&id) {
            *flag = !*flag;
            tracing::trace!(example = %id, expanded = *flag, "example toggled");
        }
    }

    /// Whether the example named by `key` is expanded; `false` when unknown.
    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        ExampleId::parse(key).is_ok_and(|id| self.expanded(id))
    }

    /// Whether `id` is expanded.
    #[must_use]
    pub fn expanded(&self, id: ExampleId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    /// Button copy for the example named by `key`, `None` when unknown.
    #[must_use]
    pub fn button_label(&self, key: &str) -> Option<&str> {
        ExampleId::parse(key).ok().map(|id| self.label_for(id))
    }

    /// Button copy for `id`.
    #[must_use]
    pub fn label_for(&self, id: ExampleId) -> &str {
        if self.expanded(id) {
            &self.hide_label
        } else {
            &self.show_label
        }
    }

    /// Collapsed class for the example named by `key`.
    ///
    /// Empty when the example is expanded or the key is unknown.
    #[must_use]
    pub fn collapsed_class(&self, key: &str) -> &str {
        ExampleId::parse(key).map_or("", |id| self.collapsed_class_for(id))
    }

    /// Collapsed class for `id`, empty while expanded.
    #[must_use]
    pub fn collapsed_class_for(&self, id: ExampleId) -> &str {
        if self.expanded(id) {
            ""
        } else {
            &self.collapsed_class
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExampleVisibilityToggle;
    use crate::config::PageConfig;
    use crate::core::examples::ExampleId;

    #[test]
    fn every_example_starts_collapsed() {
        let toggle = ExampleVisibilityToggle::default();
        for id in ExampleId::all() {
            assert!(!toggle.is_expanded(id.key()));
            assert_eq!(toggle.button_label(id.key()), Some("Show example code"));
            assert_eq!(toggle.collapsed_class(id.key()), "examples-hide");
        }
    }

    #[test]
    fn toggle_expands_only_the_target() {
        let mut toggle = ExampleVisibilityToggle::default();
        toggle.toggle("mail");
        assert!(toggle.is_expanded("mail"));
        assert_eq!(toggle.button_label("mail"), Some("Hide example code"));
        assert_eq!(toggle.collapsed_class("mail"), "");
        assert!(!toggle.expanded(ExampleId::Article));
        assert_eq!(toggle.collapsed_class_for(ExampleId::Article), "examples-hide");
    }

    #[test]
    fn toggling_twice_restores_state() {
        let mut toggle = ExampleVisibilityToggle::default();
        for id in ExampleId::all() {
            toggle.toggle_example(id);
            toggle.toggle_example(id);
            assert!(!toggle.expanded(id));
            assert_eq!(toggle.label_for(id), "Show example code");
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut toggle = ExampleVisibilityToggle::default();
        let before = toggle.clone();
        toggle.toggle("unknown");
        assert_eq!(toggle, before);
        assert!(!toggle.is_expanded("unknown"));
        assert_eq!(toggle.button_label("unknown"), None);
        assert_eq!(toggle.collapsed_class("unknown"), "");
    }

    #[test]
    fn copy_and_class_follow_config() {
        let config = PageConfig {
            collapsed_class: "hidden".to_string(),
            show_code_label: "Show".to_string(),
            hide_code_label: "Hide".to_string(),
            ..PageConfig::default()
        };
        let mut toggle = ExampleVisibilityToggle::new(&config);
        assert_eq!(toggle.collapsed_class("heroes"), "hidden");
        toggle.toggle("heroes");
        assert_eq!(toggle.button_label("heroes"), Some("Hide"));
        toggle.toggle("heroes");
        assert_eq!(toggle.button_label("heroes"), Some("Show"));
    }

    #[test]
    fn label_tracks_expanded_flag() {
        let mut toggle = ExampleVisibilityToggle::default();
        toggle.toggle("ajaxPost");
        toggle.toggle("ddg");
        toggle.toggle("ajaxPost");
        for id in ExampleId::all() {
            let hidden = toggle.label_for(id) == "Hide example code";
            assert_eq!(hidden, toggle.expanded(id), "{id}");
        }
    }
}
