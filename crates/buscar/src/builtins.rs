//! Built-in selector kinds.
//!
//! These mirror the classic acceptance-testing vocabulary: raw xpath,
//! css, id, the form-field family (field, fillable_field, radio_button,
//! checkbox, select, option, file_field), links and buttons, content
//! and table lookup. The concrete xpath strings are simplified
//! renderings; the contract lives in the kinds' names, filters and
//! inheritance edges, not in the exact query syntax.

use crate::definition::SelectorDefinition;
use crate::expression::XPathExpression;
use crate::locator::Locator;
use crate::node::Element;
use crate::options::{OptionValue, Options};
use crate::registry::SelectorRegistry;

/// Register the built-in kinds in auto-detection precedence order
pub fn register_builtins(registry: &mut SelectorRegistry) {
    registry.add(xpath_kind());
    let kinds = [
        css_kind,
        id_kind,
        field_kind,
        fieldset_kind,
        link_or_button_kind,
        link_kind,
        button_kind,
        fillable_field_kind,
        radio_button_kind,
        checkbox_kind,
        select_kind,
        option_kind,
        file_field_kind,
    ];
    for kind in kinds {
        let definition = kind(registry);
        registry.add(definition);
    }
    registry.add(content_kind());
    let table = table_kind(registry);
    registry.add(table);
}

fn inherit(registry: &SelectorRegistry, child: &str, parent: &str) -> crate::definition::SelectorBuilder {
    SelectorDefinition::builder(child)
        .inherit_from(registry, parent)
        .expect("built-in parents register before their children")
}

fn xpath_kind() -> SelectorDefinition {
    SelectorDefinition::builder("xpath")
        .xpath(|locator, _| XPathExpression::from(locator.as_str()))
        .filter(text_and_visibility_filter)
        .filter_keys(["text", "visible"])
        .build()
        .expect("built-in definitions are well-formed")
}

fn css_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "css", "xpath")
        .xpath(|locator, _| XPathExpression::from(css_to_xpaths(locator.as_str())))
        .build()
        .expect("built-in definitions are well-formed")
}

fn id_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "id", "xpath")
        .xpath(|locator, _| {
            XPathExpression::from(format!(".//*[@id={}]", xpath_literal(locator.as_str())))
        })
        .matches(Locator::is_symbol)
        .build()
        .expect("built-in definitions are well-formed")
}

fn field_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "field", "xpath")
        .xpath(|locator, _| {
            XPathExpression::from(vec![
                labelled_control(
                    "input",
                    Some("not(@type='submit' or @type='image' or @type='hidden')"),
                    locator,
                ),
                labelled_control("textarea", None, locator),
                labelled_control("select", None, locator),
            ])
        })
        .filter(field_state_filter)
        .filter_keys(["with", "checked", "unchecked", "selected"])
        .build()
        .expect("built-in definitions are well-formed")
}

fn fieldset_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "fieldset", "xpath")
        .xpath(|locator, _| {
            let literal = xpath_literal(locator.as_str());
            XPathExpression::from(format!(
                ".//fieldset[@id={literal} or legend[normalize-space(text())={literal}]]"
            ))
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn link_or_button_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "link_or_button", "field")
        .xpath(|locator, options| {
            let mut alternatives = vec![link_xpath(locator, options)];
            alternatives.extend(button_xpaths(locator));
            XPathExpression::from(alternatives)
        })
        .failure_message(|_, locator| format!("no link or button '{locator}' found"))
        .build()
        .expect("built-in definitions are well-formed")
}

fn link_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "link", "xpath")
        .xpath(|locator, options| XPathExpression::from(link_xpath(locator, options)))
        .failure_message(|_, locator| {
            format!("no link with title, id or text '{locator}' found")
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn button_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "button", "field")
        .xpath(|locator, _| XPathExpression::from(button_xpaths(locator)))
        .failure_message(|_, locator| {
            format!("no button with value or id or text '{locator}' found")
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn fillable_field_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "fillable_field", "field")
        .xpath(|locator, _| {
            XPathExpression::from(vec![
                labelled_control(
                    "input",
                    Some(
                        "not(@type='submit' or @type='image' or @type='hidden' \
                         or @type='radio' or @type='checkbox' or @type='file')",
                    ),
                    locator,
                ),
                labelled_control("textarea", None, locator),
            ])
        })
        .failure_message(|_, locator| {
            format!(
                "no text field, text area or password field with id, name, or label '{locator}' found"
            )
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn radio_button_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    typed_input_kind(
        registry,
        "radio_button",
        "radio",
        "no radio button with id, name, or label",
    )
}

fn checkbox_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    typed_input_kind(
        registry,
        "checkbox",
        "checkbox",
        "no checkbox with id, name, or label",
    )
}

fn select_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "select", "field")
        .xpath(|locator, _| XPathExpression::from(labelled_control("select", None, locator)))
        .failure_message(|_, locator| {
            format!("no select box with id, name, or label '{locator}' found")
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn option_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "option", "field")
        .xpath(|locator, _| {
            XPathExpression::from(format!(
                ".//option[normalize-space(text())={}]",
                xpath_literal(locator.as_str())
            ))
        })
        .failure_message(|node, locator| {
            let mut message = format!("no option with text '{locator}'");
            if node.is_some_and(|node| node.tag_name() == "select") {
                message.push_str(" in the select box");
            }
            message
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn file_field_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    typed_input_kind(
        registry,
        "file_field",
        "file",
        "no file field with id, name, or label",
    )
}

fn content_kind() -> SelectorDefinition {
    SelectorDefinition::builder("content")
        .xpath(|locator, _| {
            XPathExpression::from(format!(
                ".//*[text()[contains(normalize-space(.), {})]]",
                xpath_literal(locator.as_str())
            ))
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn table_kind(registry: &SelectorRegistry) -> SelectorDefinition {
    inherit(registry, "table", "xpath")
        .xpath(|locator, _| {
            let literal = xpath_literal(locator.as_str());
            XPathExpression::from(format!(
                ".//table[@id={literal} or caption[normalize-space(text())={literal}]]"
            ))
        })
        .build()
        .expect("built-in definitions are well-formed")
}

fn typed_input_kind(
    registry: &SelectorRegistry,
    name: &str,
    input_type: &str,
    message_prefix: &str,
) -> SelectorDefinition {
    let input_type = input_type.to_string();
    let message_prefix = message_prefix.to_string();
    inherit(registry, name, "field")
        .xpath(move |locator, _| {
            XPathExpression::from(labelled_control(
                "input",
                Some(&format!("@type='{input_type}'")),
                locator,
            ))
        })
        .failure_message(move |_, locator| format!("{message_prefix} '{locator}' found"))
        .build()
        .expect("built-in definitions are well-formed")
}

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

fn text_and_visibility_filter(node: &dyn Element, options: &Options) -> bool {
    if let Some(expected) = options.get("text") {
        let matched = match expected {
            OptionValue::Pattern(pattern) => pattern.is_match(&node.text()),
            OptionValue::Str(literal) => node.text().contains(literal.as_str()),
            other => panic!("text filter expects a string or pattern, got {other:?}"),
        };
        if !matched {
            return false;
        }
    }
    if options.get("visible").is_some_and(OptionValue::is_truthy) && !node.is_visible() {
        return false;
    }
    true
}

fn field_state_filter(node: &dyn Element, options: &Options) -> bool {
    if let Some(expected) = options.get("with") {
        let expected = expected
            .as_str()
            .unwrap_or_else(|| panic!("with filter expects a string, got {expected:?}"));
        if node.value() != expected {
            return false;
        }
    }
    if options.get("checked").is_some_and(OptionValue::is_truthy) && !node.is_checked() {
        return false;
    }
    if options.get("unchecked").is_some_and(OptionValue::is_truthy) && node.is_checked() {
        return false;
    }
    if let Some(expected) = options.get("selected") {
        let expected = expected
            .as_list()
            .unwrap_or_else(|| panic!("selected filter expects a list, got {expected:?}"));
        if !has_selected_options(node, expected) {
            return false;
        }
    }
    true
}

/// Every expected value must appear among the node's selected option
/// texts; duplicates and order are irrelevant.
fn has_selected_options(node: &dyn Element, expected: &[String]) -> bool {
    let actual = node.selected_option_texts();
    expected.iter().all(|value| actual.contains(value))
}

// ---------------------------------------------------------------------------
// XPath string assembly
// ---------------------------------------------------------------------------

/// A control reachable by id, name, or the label pointing at it
fn labelled_control(tag: &str, type_predicate: Option<&str>, locator: &Locator) -> String {
    let literal = xpath_literal(locator.as_str());
    let type_predicate = type_predicate.map_or_else(String::new, |p| format!("[{p}]"));
    format!(
        ".//{tag}{type_predicate}[@id={literal} or @name={literal} \
         or @id=//label[normalize-space(text())={literal}]/@for]"
    )
}

fn link_xpath(locator: &Locator, options: &Options) -> String {
    let literal = xpath_literal(locator.as_str());
    let mut xpath = format!(
        ".//a[@href][@id={literal} or @title={literal} \
         or normalize-space(text())={literal} or .//img[@alt={literal}]]"
    );
    if let Some(href) = options.get("href").and_then(OptionValue::as_str) {
        xpath.push_str(&format!("[@href={}]", xpath_literal(href)));
    }
    xpath
}

fn button_xpaths(locator: &Locator) -> Vec<String> {
    let literal = xpath_literal(locator.as_str());
    vec![
        format!(
            ".//input[@type='submit' or @type='image' or @type='button']\
             [@id={literal} or @value={literal} or @title={literal}]"
        ),
        format!(
            ".//button[@id={literal} or @value={literal} or normalize-space(text())={literal}]"
        ),
    ]
}

/// Quote a string for embedding in an xpath expression.
///
/// Values holding both quote characters need the `concat` workaround
/// since xpath 1.0 has no escaping.
fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{value}'")
    } else if !value.contains('"') {
        format!("\"{value}\"")
    } else {
        let parts: Vec<String> = value
            .split('\'')
            .map(|part| format!("'{part}'"))
            .collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

// ---------------------------------------------------------------------------
// CSS translation
// ---------------------------------------------------------------------------

/// Translate a css selector list into xpath alternatives, one per
/// comma-separated group.
fn css_to_xpaths(css: &str) -> Vec<String> {
    css.split(',')
        .map(|group| css_group_to_xpath(group.trim()))
        .collect()
}

fn css_group_to_xpath(group: &str) -> String {
    let spaced = group.replace('>', " > ");
    let mut xpath = String::from(".");
    let mut axis = "//";
    for token in spaced.split_whitespace() {
        if token == ">" {
            axis = "/";
            continue;
        }
        xpath.push_str(axis);
        xpath.push_str(&css_simple_to_xpath(token));
        axis = "//";
    }
    if xpath == "." {
        xpath.push_str("//*");
    }
    xpath
}

/// One compound selector: optional tag plus `#id` / `.class` /
/// `[attr]` / `[attr=value]` steps.
fn css_simple_to_xpath(simple: &str) -> String {
    let name_end = simple.find(['#', '.', '[']).unwrap_or(simple.len());
    let (name, mut rest) = simple.split_at(name_end);
    let mut xpath = String::from(if name.is_empty() || name == "*" {
        "*"
    } else {
        name
    });

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix('#') {
            let end = tail.find(['#', '.', '[']).unwrap_or(tail.len());
            let (id, next) = tail.split_at(end);
            xpath.push_str(&format!("[@id={}]", xpath_literal(id)));
            rest = next;
        } else if let Some(tail) = rest.strip_prefix('.') {
            let end = tail.find(['#', '.', '[']).unwrap_or(tail.len());
            let (class, next) = tail.split_at(end);
            xpath.push_str(&format!(
                "[contains(concat(' ', normalize-space(@class), ' '), {})]",
                xpath_literal(&format!(" {class} "))
            ));
            rest = next;
        } else if let Some(tail) = rest.strip_prefix('[') {
            let end = tail.find(']').unwrap_or(tail.len());
            let (attribute, next) = tail.split_at(end);
            rest = next.strip_prefix(']').unwrap_or(next);
            match attribute.split_once('=') {
                Some((name, value)) => {
                    let value = value.trim_matches(|c| c == '"' || c == '\'');
                    xpath.push_str(&format!("[@{name}={}]", xpath_literal(value)));
                }
                None => xpath.push_str(&format!("[@{attribute}]")),
            }
        } else {
            break;
        }
    }
    xpath
}
