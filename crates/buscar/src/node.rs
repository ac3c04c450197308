//! Node capability interface consumed by filter predicates.
//!
//! The external DOM driver owns node handles; filters only need this
//! narrow accessor set. Query execution, waiting and session handling
//! live entirely on the driver side.

/// Accessor set a candidate DOM node must expose to be filterable
pub trait Element {
    /// Rendered text content
    fn text(&self) -> String;

    /// Whether the node is currently visible
    fn is_visible(&self) -> bool;

    /// Current value (form controls)
    fn value(&self) -> String;

    /// Whether the node is checked (checkboxes, radio buttons)
    fn is_checked(&self) -> bool;

    /// Lowercase tag name
    fn tag_name(&self) -> String;

    /// Text of the currently selected `<option>` children
    fn selected_option_texts(&self) -> Vec<String>;
}
