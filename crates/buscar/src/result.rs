//! Result and error types for Buscar.

use thiserror::Error;

/// Result type for Buscar operations
pub type BuscarResult<T> = Result<T, BuscarError>;

/// Errors that can occur in Buscar
#[derive(Debug, Error)]
pub enum BuscarError {
    /// No selector definition could be resolved for a name
    #[error("No selector registered under '{name}' and no usable default selector")]
    SelectorNotFound {
        /// Name that failed to resolve
        name: String,
    },

    /// Inheritance target missing at build time
    #[error("Selector '{child}' inherits from unknown selector '{parent}'")]
    ParentNotFound {
        /// Definition being built
        child: String,
        /// Missing parent name
        parent: String,
    },

    /// Definition registered without an xpath-building step
    #[error("Selector '{name}' has no xpath builder")]
    MissingXPathBuilder {
        /// Definition name
        name: String,
    },

    /// An xpath builder produced zero query alternatives
    #[error("Selector '{name}' produced an empty set of xpath alternatives")]
    EmptyXPathSet {
        /// Definition name
        name: String,
    },
}
