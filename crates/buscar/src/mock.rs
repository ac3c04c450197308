//! Mock node for testing filter behavior without a browser.
//!
//! Filters only see the [`Element`] accessor set, so a plain value with
//! builder-style setters is enough to exercise every predicate, both in
//! this crate's tests and in consumers defining custom kinds.

use crate::node::Element;

/// In-memory [`Element`] implementation
#[derive(Debug, Clone)]
pub struct MockElement {
    tag_name: String,
    text: String,
    value: String,
    visible: bool,
    checked: bool,
    selected: Vec<String>,
}

impl MockElement {
    /// Create a visible, unchecked element with the given tag name
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            text: String::new(),
            value: String::new(),
            visible: true,
            checked: false,
            selected: Vec::new(),
        }
    }

    /// Set the rendered text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the form value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set visibility
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the checked state
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the selected option texts
    #[must_use]
    pub fn with_selected<I, S>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected.into_iter().map(Into::into).collect();
        self
    }
}

impl Element for MockElement {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn tag_name(&self) -> String {
        self.tag_name.clone()
    }

    fn selected_option_texts(&self) -> Vec<String> {
        self.selected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod mock_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let element = MockElement::new("input");
            assert_eq!(element.tag_name(), "input");
            assert!(element.is_visible());
            assert!(!element.is_checked());
            assert!(element.text().is_empty());
            assert!(element.selected_option_texts().is_empty());
        }

        #[test]
        fn test_builder_round_trips_accessors() {
            let element = MockElement::new("select")
                .with_text("Languages")
                .with_value("rust")
                .visible(false)
                .checked(true)
                .with_selected(vec!["Rust", "Ruby"]);

            assert_eq!(element.text(), "Languages");
            assert_eq!(element.value(), "rust");
            assert!(!element.is_visible());
            assert!(element.is_checked());
            assert_eq!(
                element.selected_option_texts(),
                vec!["Rust".to_string(), "Ruby".to_string()]
            );
        }
    }
}
