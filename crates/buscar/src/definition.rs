//! Named selector definitions and their builder.
//!
//! A definition bundles everything one query kind needs: the
//! xpath-building step, an optional auto-detection predicate, a
//! failure-message builder, and the ordered filter predicates with the
//! option keys they consume. Definitions are built once, registered,
//! and never mutated afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::expression::{XPathBuilderFn, XPathExpression};
use crate::locator::Locator;
use crate::node::Element;
use crate::options::Options;
use crate::registry::SelectorRegistry;
use crate::result::{BuscarError, BuscarResult};

/// Post-retrieval filter predicate: `(node, filter_options) -> bool`
pub type FilterFn = Arc<dyn Fn(&dyn Element, &Options) -> bool + Send + Sync>;

/// Auto-detection predicate: `(locator) -> bool`
pub type MatchFn = Arc<dyn Fn(&Locator) -> bool + Send + Sync>;

/// Failure-message builder: `(best-effort node, locator) -> message`
pub type FailureMessageFn = Arc<dyn Fn(Option<&dyn Element>, &Locator) -> String + Send + Sync>;

/// A named query kind: xpath building plus post-query filtering
#[derive(Clone)]
pub struct SelectorDefinition {
    name: String,
    xpath: XPathBuilderFn,
    match_predicate: Option<MatchFn>,
    failure_message: Option<FailureMessageFn>,
    filters: Vec<FilterFn>,
    filter_keys: BTreeSet<String>,
}

impl SelectorDefinition {
    /// Start building a definition with the given name
    #[must_use]
    pub fn builder(name: impl Into<String>) -> SelectorBuilder {
        SelectorBuilder {
            name: name.into(),
            xpath: None,
            match_predicate: None,
            failure_message: None,
            filters: Vec::new(),
            filter_keys: BTreeSet::new(),
        }
    }

    /// Unique registry key
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the xpath-building step
    #[must_use]
    pub fn build_xpath(&self, locator: &Locator, xpath_options: &Options) -> XPathExpression {
        (self.xpath)(locator, xpath_options)
    }

    /// Whether auto-detection accepts this locator.
    ///
    /// Definitions without a match predicate always answer `false`; they
    /// can only be reached by explicit name.
    #[must_use]
    pub fn matches(&self, locator: &Locator) -> bool {
        self.match_predicate
            .as_ref()
            .is_some_and(|predicate| predicate(locator))
    }

    /// Human-readable diagnostic for a failed query
    #[must_use]
    pub fn failure_message(&self, node: Option<&dyn Element>, locator: &Locator) -> String {
        match &self.failure_message {
            Some(builder) => builder(node, locator),
            None => format!("Unable to find {} '{locator}'", self.name),
        }
    }

    /// Filter predicates in evaluation order (inherited first)
    #[must_use]
    pub fn filters(&self) -> &[FilterFn] {
        &self.filters
    }

    /// Option keys consumed by this definition's filters
    #[must_use]
    pub fn filter_keys(&self) -> &BTreeSet<String> {
        &self.filter_keys
    }
}

impl fmt::Debug for SelectorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorDefinition")
            .field("name", &self.name)
            .field("auto_detectable", &self.match_predicate.is_some())
            .field("filters", &self.filters.len())
            .field("filter_keys", &self.filter_keys)
            .finish()
    }
}

/// Builder for [`SelectorDefinition`]
#[derive(Clone)]
pub struct SelectorBuilder {
    name: String,
    xpath: Option<XPathBuilderFn>,
    match_predicate: Option<MatchFn>,
    failure_message: Option<FailureMessageFn>,
    filters: Vec<FilterFn>,
    filter_keys: BTreeSet<String>,
}

impl SelectorBuilder {
    /// Snapshot the parent's xpath builder, failure message, filters and
    /// filter keys into this builder.
    ///
    /// This is a copy taken now: removing or re-registering the parent
    /// later never affects definitions built from this snapshot. The
    /// parent's filters run before any declared on the child. Call
    /// `inherit` before the setters that should override parent fields.
    #[must_use]
    pub fn inherit(mut self, parent: &SelectorDefinition) -> Self {
        self.xpath = Some(parent.xpath.clone());
        self.failure_message = parent.failure_message.clone();
        let mut filters = parent.filters.clone();
        filters.append(&mut self.filters);
        self.filters = filters;
        self.filter_keys
            .extend(parent.filter_keys.iter().cloned());
        self
    }

    /// Look up `parent` in `registry` and inherit from it
    pub fn inherit_from(self, registry: &SelectorRegistry, parent: &str) -> BuscarResult<Self> {
        let definition = registry
            .find(parent)
            .ok_or_else(|| BuscarError::ParentNotFound {
                child: self.name.clone(),
                parent: parent.to_string(),
            })?;
        Ok(self.inherit(&definition))
    }

    /// Set the xpath-building step (replaces any inherited one)
    #[must_use]
    pub fn xpath<F>(mut self, builder: F) -> Self
    where
        F: Fn(&Locator, &Options) -> XPathExpression + Send + Sync + 'static,
    {
        self.xpath = Some(Arc::new(builder));
        self
    }

    /// Set the auto-detection predicate
    #[must_use]
    pub fn matches<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Locator) -> bool + Send + Sync + 'static,
    {
        self.match_predicate = Some(Arc::new(predicate));
        self
    }

    /// Set the failure-message builder (replaces any inherited one)
    #[must_use]
    pub fn failure_message<F>(mut self, builder: F) -> Self
    where
        F: Fn(Option<&dyn Element>, &Locator) -> String + Send + Sync + 'static,
    {
        self.failure_message = Some(Arc::new(builder));
        self
    }

    /// Append a filter predicate
    #[must_use]
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn Element, &Options) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(predicate));
        self
    }

    /// Declare option keys consumed by this definition's filters
    #[must_use]
    pub fn filter_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.filter_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Finish building.
    ///
    /// Fails with [`BuscarError::MissingXPathBuilder`] when no xpath
    /// step was set or inherited — a configuration error surfaced at
    /// registration time rather than masked during resolution.
    pub fn build(self) -> BuscarResult<SelectorDefinition> {
        let xpath = self.xpath.ok_or(BuscarError::MissingXPathBuilder {
            name: self.name.clone(),
        })?;
        Ok(SelectorDefinition {
            name: self.name,
            xpath,
            match_predicate: self.match_predicate,
            failure_message: self.failure_message,
            filters: self.filters,
            filter_keys: self.filter_keys,
        })
    }
}

impl fmt::Debug for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorBuilder")
            .field("name", &self.name)
            .field("has_xpath", &self.xpath.is_some())
            .field("filters", &self.filters.len())
            .field("filter_keys", &self.filter_keys)
            .finish()
    }
}
