//! Buscar: selector registry and locator resolution for browser test queries.
//!
//! Buscar (Spanish: "to find") turns a test author's locator — a string,
//! a symbolic identifier, or a regular expression — plus a named or
//! auto-detected query kind into xpath alternatives and a post-query
//! filter, ready for an external DOM driver to execute.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     BUSCAR Resolution Pipeline                   │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────────┐         │
//! │   │ Caller     │    │ Selector   │    │ ResolvedQuery  │         │
//! │   │ args       │───►│ Registry + │───►│ xpaths +       │         │
//! │   │ (locator)  │    │ Resolver   │    │ filter + msg   │         │
//! │   └────────────┘    └────────────┘    └────────────────┘         │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution is pure and synchronous. Query execution, sessions and
//! waiting belong to the driver consuming the [`ResolvedQuery`].
//!
//! # Example
//!
//! ```
//! use buscar::{Options, Resolver, SelectorRegistry};
//!
//! let registry = SelectorRegistry::with_builtins();
//! let resolver = Resolver::new(&registry);
//!
//! let query = resolver
//!     .normalize(("link", "Home", Options::new().with("text", "Home")))
//!     .unwrap();
//! assert_eq!(query.name(), "link");
//! assert!(!query.xpaths().is_empty());
//! ```

mod builtins;
mod definition;
mod expression;
mod locator;
/// Mock node for testing filter behavior without a browser
pub mod mock;
mod node;
mod options;
mod registry;
mod resolver;
mod result;

pub use builtins::register_builtins;
pub use definition::{FailureMessageFn, FilterFn, MatchFn, SelectorBuilder, SelectorDefinition};
pub use expression::{XPathBuilderFn, XPathExpression};
pub use locator::Locator;
pub use node::Element;
pub use options::{OptionValue, Options};
pub use registry::SelectorRegistry;
pub use resolver::{QueryArgs, ResolvedQuery, Resolver, ResolverConfig};
pub use result::{BuscarError, BuscarResult};
