//! Locator resolution: from call arguments to a ready-to-run query.
//!
//! `Resolver::normalize` picks a selector definition (explicitly named
//! or auto-detected), splits caller options into xpath-building vs
//! node-filtering halves, normalizes filter values, and produces an
//! immutable [`ResolvedQuery`]. Resolution is pure and synchronous;
//! executing the resulting xpaths against a live document belongs to
//! the external driver.

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::definition::SelectorDefinition;
use crate::locator::Locator;
use crate::node::Element;
use crate::options::{OptionValue, Options};
use crate::registry::SelectorRegistry;
use crate::result::{BuscarError, BuscarResult};

/// Read-only configuration consumed during resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Kind used when no explicit name resolves and auto-detection finds nothing
    pub default_selector: String,
    /// Default for the `visible` filter option when the caller omits it
    pub ignore_hidden_elements: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_selector: "xpath".to_string(),
            ignore_hidden_elements: false,
        }
    }
}

impl ResolverConfig {
    /// Set the default selector name
    #[must_use]
    pub fn with_default_selector(mut self, name: impl Into<String>) -> Self {
        self.default_selector = name.into();
        self
    }

    /// Set the ignore-hidden-elements default
    #[must_use]
    pub const fn with_ignore_hidden_elements(mut self, ignore: bool) -> Self {
        self.ignore_hidden_elements = ignore;
        self
    }
}

/// Arguments to [`Resolver::normalize`], covering the four call shapes:
/// `locator`, `(locator, options)`, `(kind, locator)` and
/// `(kind, locator, options)`. The trailing options map is what tells
/// the two-argument forms apart, expressed here through tuple types.
#[derive(Debug, Clone)]
pub struct QueryArgs {
    /// Explicit kind name, when given
    pub kind: Option<String>,
    /// The locator value
    pub locator: Locator,
    /// Trailing options, empty when omitted
    pub options: Options,
}

impl From<Locator> for QueryArgs {
    fn from(locator: Locator) -> Self {
        Self {
            kind: None,
            locator,
            options: Options::new(),
        }
    }
}

impl From<&str> for QueryArgs {
    fn from(locator: &str) -> Self {
        Self::from(Locator::from(locator))
    }
}

impl From<String> for QueryArgs {
    fn from(locator: String) -> Self {
        Self::from(Locator::from(locator))
    }
}

impl From<Regex> for QueryArgs {
    fn from(pattern: Regex) -> Self {
        Self::from(Locator::from(pattern))
    }
}

impl From<(Locator, Options)> for QueryArgs {
    fn from((locator, options): (Locator, Options)) -> Self {
        Self {
            kind: None,
            locator,
            options,
        }
    }
}

impl From<(&str, Options)> for QueryArgs {
    fn from((locator, options): (&str, Options)) -> Self {
        Self {
            kind: None,
            locator: locator.into(),
            options,
        }
    }
}

impl From<(&str, Locator)> for QueryArgs {
    fn from((kind, locator): (&str, Locator)) -> Self {
        Self {
            kind: Some(kind.to_string()),
            locator,
            options: Options::new(),
        }
    }
}

impl From<(&str, &str)> for QueryArgs {
    fn from((kind, locator): (&str, &str)) -> Self {
        Self {
            kind: Some(kind.to_string()),
            locator: locator.into(),
            options: Options::new(),
        }
    }
}

impl From<(&str, Locator, Options)> for QueryArgs {
    fn from((kind, locator, options): (&str, Locator, Options)) -> Self {
        Self {
            kind: Some(kind.to_string()),
            locator,
            options,
        }
    }
}

impl From<(&str, &str, Options)> for QueryArgs {
    fn from((kind, locator, options): (&str, &str, Options)) -> Self {
        Self {
            kind: Some(kind.to_string()),
            locator: locator.into(),
            options,
        }
    }
}

/// Resolves locators against a registry under a configuration
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    registry: &'a SelectorRegistry,
    config: ResolverConfig,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with default configuration
    #[must_use]
    pub fn new(registry: &'a SelectorRegistry) -> Self {
        Self {
            registry,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with an explicit configuration
    #[must_use]
    pub fn with_config(registry: &'a SelectorRegistry, config: ResolverConfig) -> Self {
        Self { registry, config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve call arguments into an immutable query description.
    ///
    /// An unknown explicit name silently falls back to the configured
    /// default selector; only a missing default too is an error.
    pub fn normalize(&self, args: impl Into<QueryArgs>) -> BuscarResult<ResolvedQuery> {
        let QueryArgs {
            kind,
            locator,
            options,
        } = args.into();

        let definition = self.resolve_definition(kind.as_deref(), &locator)?;
        let (xpath_options, mut filter_options) = options.split(definition.filter_keys());
        self.normalize_filter_options(&mut filter_options, &definition);

        let xpaths = definition
            .build_xpath(&locator, &xpath_options)
            .into_xpaths();
        if xpaths.is_empty() {
            return Err(BuscarError::EmptyXPathSet {
                name: definition.name().to_string(),
            });
        }
        trace!(
            kind = definition.name(),
            alternatives = xpaths.len(),
            "resolved locator"
        );

        Ok(ResolvedQuery {
            definition,
            locator,
            xpath_options,
            filter_options,
            xpaths,
        })
    }

    fn resolve_definition(
        &self,
        kind: Option<&str>,
        locator: &Locator,
    ) -> BuscarResult<Arc<SelectorDefinition>> {
        let chosen = match kind {
            Some(name) => {
                debug!(kind = name, "explicit selector");
                self.registry.find(name)
            }
            None => self
                .registry
                .all()
                .find(|definition| definition.matches(locator))
                .cloned(),
        };

        if let Some(definition) = chosen {
            return Ok(definition);
        }

        debug!(
            default = self.config.default_selector.as_str(),
            "falling back to default selector"
        );
        self.registry
            .find(&self.config.default_selector)
            .ok_or_else(|| BuscarError::SelectorNotFound {
                name: kind
                    .unwrap_or(self.config.default_selector.as_str())
                    .to_string(),
            })
    }

    /// Apply the per-key normalization rules to recognized filter options.
    fn normalize_filter_options(&self, filter_options: &mut Options, definition: &SelectorDefinition) {
        if let Some(OptionValue::Str(literal)) = filter_options.get("text") {
            let pattern = Regex::new(&regex::escape(literal))
                .expect("escaped literal is always a valid pattern");
            filter_options.insert("text", pattern);
        }

        if definition.filter_keys().contains("visible") && !filter_options.contains_key("visible") {
            filter_options.insert("visible", self.config.ignore_hidden_elements);
        }

        if let Some(OptionValue::Str(single)) = filter_options.get("selected") {
            let single = single.clone();
            filter_options.insert("selected", vec![single]);
        }
    }
}

/// An immutable, ready-to-run query description
#[derive(Debug, Clone)]
pub struct ResolvedQuery {
    definition: Arc<SelectorDefinition>,
    locator: Locator,
    xpath_options: Options,
    filter_options: Options,
    xpaths: Vec<String>,
}

impl ResolvedQuery {
    /// Name of the resolved definition
    #[must_use]
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// The original locator, echoed back
    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Alternative query strings, logically OR'ed on execution; never empty
    #[must_use]
    pub fn xpaths(&self) -> &[String] {
        &self.xpaths
    }

    /// Options passed through to the xpath builder
    #[must_use]
    pub fn xpath_options(&self) -> &Options {
        &self.xpath_options
    }

    /// Normalized filter options
    #[must_use]
    pub fn filter_options(&self) -> &Options {
        &self.filter_options
    }

    /// Whether a candidate node survives the definition's filters.
    ///
    /// True iff no filters are declared or every filter accepts;
    /// evaluation runs in declaration order (inherited filters first)
    /// and short-circuits on the first rejection.
    #[must_use]
    pub fn filter(&self, node: &dyn Element) -> bool {
        self.definition
            .filters()
            .iter()
            .all(|predicate| predicate(node, &self.filter_options))
    }

    /// Human-readable diagnostic for a failed query
    #[must_use]
    pub fn failure_message(&self, node: Option<&dyn Element>) -> String {
        self.definition.failure_message(node, &self.locator)
    }
}
