//! XPath expressions produced by selector definitions.
//!
//! The expression-building step is opaque to the resolution pipeline: a
//! builder returns either a single query string or a union of
//! alternative query strings whose results are logically OR'ed when the
//! external driver executes them.

use std::sync::Arc;

use crate::locator::Locator;
use crate::options::Options;

/// Result of an xpath-building step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XPathExpression {
    /// One query string
    Single(String),
    /// Several alternative query strings, unioned on execution
    Union(Vec<String>),
}

impl XPathExpression {
    /// Decompose into the ordered list of alternative query strings.
    ///
    /// A `Single` yields a one-element list; a `Union` yields one entry
    /// per alternative in production order.
    #[must_use]
    pub fn into_xpaths(self) -> Vec<String> {
        match self {
            Self::Single(xpath) => vec![xpath],
            Self::Union(xpaths) => xpaths,
        }
    }
}

impl From<String> for XPathExpression {
    fn from(xpath: String) -> Self {
        Self::Single(xpath)
    }
}

impl From<&str> for XPathExpression {
    fn from(xpath: &str) -> Self {
        Self::Single(xpath.to_string())
    }
}

impl From<Vec<String>> for XPathExpression {
    fn from(xpaths: Vec<String>) -> Self {
        Self::Union(xpaths)
    }
}

/// An xpath-building step: `(locator, xpath_options) -> expression`
pub type XPathBuilderFn = Arc<dyn Fn(&Locator, &Options) -> XPathExpression + Send + Sync>;
