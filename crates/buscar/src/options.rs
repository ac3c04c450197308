//! Caller-supplied option maps and the building/filtering split.
//!
//! A resolution call carries a single option map. Keys recognized as
//! filter options by the chosen selector definition are moved into a
//! filter map consumed after node retrieval; everything else is passed
//! through untouched to the xpath builder.

use std::collections::{BTreeSet, HashMap};

use regex::Regex;

/// A single option value
#[derive(Debug, Clone)]
pub enum OptionValue {
    /// Boolean flag (`visible`, `checked`, `unchecked`)
    Bool(bool),
    /// Plain string (`with`, literal `text`, xpath options like `href`)
    Str(String),
    /// Compiled pattern (`text` given as a regex, or after normalization)
    Pattern(Regex),
    /// Ordered list of strings (`selected`)
    List(Vec<String>),
}

impl OptionValue {
    /// Truthiness used by flag-style filters: only `Bool(false)` is falsy
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// The boolean payload, if this is a flag
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The string payload, if this is a plain string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The compiled pattern, if this is a pattern
    #[must_use]
    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            Self::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// The list payload, if this is a list
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Regex> for OptionValue {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// String-keyed option map
#[derive(Debug, Clone, Default)]
pub struct Options {
    entries: HashMap<String, OptionValue>,
}

impl Options {
    /// Create an empty option map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert an option
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an option by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Remove an option, returning its value
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.remove(key)
    }

    /// Whether a key is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of options
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over key/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Split into `(xpath_options, filter_options)`.
    ///
    /// Every key present in `filter_keys` moves into the filter map;
    /// everything else stays on the xpath side. Each input key lands in
    /// exactly one of the two maps. Absent keys stay absent.
    #[must_use]
    pub fn split(self, filter_keys: &BTreeSet<String>) -> (Self, Self) {
        let mut xpath_options = Self::new();
        let mut filter_options = Self::new();
        for (key, value) in self.entries {
            if filter_keys.contains(&key) {
                filter_options.entries.insert(key, value);
            } else {
                xpath_options.entries.insert(key, value);
            }
        }
        (xpath_options, filter_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    mod value_tests {
        use super::*;

        #[test]
        fn test_truthiness() {
            assert!(OptionValue::Bool(true).is_truthy());
            assert!(!OptionValue::Bool(false).is_truthy());
            assert!(OptionValue::from("yes").is_truthy());
            assert!(OptionValue::from(vec!["a"]).is_truthy());
        }

        #[test]
        fn test_accessors() {
            assert_eq!(OptionValue::from(true).as_bool(), Some(true));
            assert_eq!(OptionValue::from("v").as_str(), Some("v"));
            assert_eq!(
                OptionValue::from(vec!["a", "b"]).as_list(),
                Some(&["a".to_string(), "b".to_string()][..])
            );
            assert!(OptionValue::from(Regex::new("x").unwrap())
                .as_pattern()
                .is_some());
            assert!(OptionValue::from(true).as_str().is_none());
        }
    }

    mod split_tests {
        use super::*;

        #[test]
        fn test_split_moves_recognized_keys() {
            let options = Options::new()
                .with("text", "Foo")
                .with("visible", true)
                .with("href", "/home");
            let (xpath_options, filter_options) = options.split(&keys(&["text", "visible"]));

            assert!(filter_options.contains_key("text"));
            assert!(filter_options.contains_key("visible"));
            assert!(xpath_options.contains_key("href"));
            assert!(!xpath_options.contains_key("text"));
            assert!(!filter_options.contains_key("href"));
        }

        #[test]
        fn test_split_is_exhaustive_and_non_overlapping() {
            let options = Options::new()
                .with("a", "1")
                .with("b", "2")
                .with("c", "3");
            let (xpath_options, filter_options) = options.split(&keys(&["b"]));
            assert_eq!(xpath_options.len() + filter_options.len(), 3);
            for key in ["a", "b", "c"] {
                let in_xpath = xpath_options.contains_key(key);
                let in_filter = filter_options.contains_key(key);
                assert!(in_xpath != in_filter, "key {key} must land on one side");
            }
        }

        #[test]
        fn test_absent_keys_stay_absent() {
            let (xpath_options, filter_options) = Options::new().split(&keys(&["text"]));
            assert!(xpath_options.is_empty());
            assert!(filter_options.is_empty());
            assert!(filter_options.get("text").is_none());
        }
    }
}
