//! Locator values supplied by test authors.
//!
//! A locator is the free-form value identifying what to find: a plain
//! string (`"Sign in"`, `"#main .title"`), a symbolic identifier
//! (typically an element id), or a compiled regular expression.

use std::fmt;

use regex::Regex;

/// A caller-supplied value identifying what to find
#[derive(Debug, Clone)]
pub enum Locator {
    /// Free-form text: a CSS selector, xpath string, label, link text, …
    Text(String),
    /// Symbolic identifier; the auto-detect signal for the `id` kind
    Symbol(String),
    /// Compiled regular expression
    Pattern(Regex),
}

impl Locator {
    /// Create a text locator
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a symbolic locator (e.g. an element id)
    #[must_use]
    pub fn symbol(value: impl Into<String>) -> Self {
        Self::Symbol(value.into())
    }

    /// Whether this locator is a symbolic identifier
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// The raw string form, as handed to xpath builders
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(value) | Self::Symbol(value) => value,
            Self::Pattern(pattern) => pattern.as_str(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Regex> for Locator {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod locator_tests {
        use super::*;

        #[test]
        fn test_text_locator_from_str() {
            let locator = Locator::from("Sign in");
            assert!(matches!(locator, Locator::Text(_)));
            assert_eq!(locator.as_str(), "Sign in");
        }

        #[test]
        fn test_symbol_locator() {
            let locator = Locator::symbol("main_nav");
            assert!(locator.is_symbol());
            assert_eq!(locator.as_str(), "main_nav");
        }

        #[test]
        fn test_text_locator_is_not_symbol() {
            assert!(!Locator::text("main_nav").is_symbol());
        }

        #[test]
        fn test_pattern_locator() {
            let locator = Locator::from(Regex::new("Fo+").unwrap());
            assert!(matches!(locator, Locator::Pattern(_)));
            assert_eq!(locator.as_str(), "Fo+");
        }

        #[test]
        fn test_display_renders_raw_value() {
            assert_eq!(Locator::text("Welcome").to_string(), "Welcome");
            assert_eq!(Locator::symbol("foo").to_string(), "foo");
        }
    }
}
