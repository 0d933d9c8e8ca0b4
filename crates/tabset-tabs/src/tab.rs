//! Tab records
//!
//! A `Tab` is the normalized form of one declared pane. The navigation list
//! draws its header from it, the panel list draws `content`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

use crate::node::{flatten_children, Element, Key, VNode, DEFAULT_SLOT};

const TAB_ATTR: &str = "tab";
const TAB_SLOT: &str = "tab";
const CLOSE_ICON_SLOT: &str = "closeIcon";

/// Attributes lifted into typed fields; everything else lands in `Tab::extra`.
const KNOWN_ATTRS: &[&str] = &[
    "tab",
    "disabled",
    "closable",
    "forceRender",
    "active",
    "destroyInactiveTabPane",
    "animated",
];

/// Header content of a tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Text(String),
    Nodes(Vec<VNode>),
}

impl Label {
    pub fn text(&self) -> String {
        match self {
            Label::Text(text) => text.clone(),
            Label::Nodes(nodes) => nodes.iter().map(VNode::text_content).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub key: Key,
    /// Header content
    pub label: Option<Label>,
    /// Header is not clickable
    pub disabled: bool,
    /// `None` means closable whenever the widget is editable
    pub closable: Option<bool>,
    /// Render the pane even before it is first shown
    pub force_render: bool,
    /// Declared as active by the pane itself
    pub active: bool,
    /// Drop the pane content once it becomes inactive
    pub destroy_inactive_content: bool,
    /// Per-pane animation flag
    pub animated: bool,
    /// Custom close icon
    pub close_icon: Option<Vec<VNode>>,
    /// Pane body
    pub content: Vec<VNode>,
    /// Remaining attributes, camelCased
    pub extra: BTreeMap<String, Value>,
    /// The declaration this record came from
    pub node: Element,
}

impl Tab {
    pub fn new(key: impl Into<Key>) -> Self {
        let key = key.into();
        Self {
            node: Element::tab_pane(key.clone()),
            key,
            label: None,
            disabled: false,
            closable: None,
            force_render: false,
            active: false,
            destroy_inactive_content: false,
            animated: false,
            close_icon: None,
            content: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Build a record from a declared element. `index` is the position in the
    /// normalized list and stands in for a missing key.
    pub fn from_element(element: &Element, index: usize) -> Self {
        let attrs = element.camelized_attrs();

        let key = match &element.key {
            Some(key) => key.clone(),
            None => {
                tracing::debug!(index, "Tab declared without a key, using its position");
                Key::from(index)
            }
        };

        let label = match attrs.get(TAB_ATTR) {
            Some(value) if !value.is_null() => Some(Label::Text(value_text(value))),
            _ => element
                .get_slot(TAB_SLOT)
                .map(|nodes| Label::Nodes(flatten_children(nodes))),
        };

        let extra = attrs
            .iter()
            .filter(|(name, _)| !KNOWN_ATTRS.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Self {
            key,
            label,
            disabled: flag(&attrs, "disabled"),
            closable: attrs.get("closable").map(attr_flag),
            force_render: flag(&attrs, "forceRender"),
            active: flag(&attrs, "active"),
            destroy_inactive_content: flag(&attrs, "destroyInactiveTabPane"),
            animated: flag(&attrs, "animated"),
            close_icon: element.get_slot(CLOSE_ICON_SLOT).cloned(),
            content: element
                .get_slot(DEFAULT_SLOT)
                .map(|nodes| flatten_children(nodes))
                .unwrap_or_default(),
            extra,
            node: element.clone(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(Label::Text(label.into()));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    /// Whether an editable widget shows a remove button for this tab
    pub fn is_removable(&self, editable: bool) -> bool {
        editable && self.closable != Some(false) && !self.disabled
    }

    /// Get display label (with fallback to the key)
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.text(),
            None => self.key.to_string(),
        }
    }
}

/// Normalize declared children into tab records, in declaration order.
pub fn parse_tab_list(children: &[VNode]) -> Vec<Tab> {
    let tabs: Vec<Tab> = flatten_children(children)
        .iter()
        .filter_map(|node| match node {
            VNode::Element(element) => Some(element),
            _ => None,
        })
        .enumerate()
        .map(|(index, element)| Tab::from_element(element, index))
        .collect();

    let mut seen = HashSet::with_capacity(tabs.len());
    for tab in &tabs {
        if !seen.insert(&tab.key) {
            tracing::warn!(tab_key = %tab.key, "Duplicate tab key");
        }
    }

    tracing::trace!(count = tabs.len(), "Parsed tab list");

    tabs
}

fn flag(attrs: &BTreeMap<String, Value>, name: &str) -> bool {
    attrs.get(name).map(attr_flag).unwrap_or(false)
}

/// A bare attribute arrives as an empty string and means `true`;
/// anything else follows JavaScript truthiness.
pub fn attr_flag(value: &Value) -> bool {
    match value {
        Value::String(s) if s.is_empty() => true,
        other => is_truthy(other),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pane(key: &str, label: &str) -> VNode {
        Element::tab_pane(key)
            .attr("tab", label)
            .child(VNode::text(format!("Content of {}", label)))
            .into()
    }

    #[test]
    fn test_parse_keeps_declaration_order() {
        let tabs = parse_tab_list(&[pane("1", "One"), pane("2", "Two"), pane("3", "Three")]);

        let keys: Vec<&str> = tabs.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
        assert_eq!(tabs[1].display_label(), "Two");
        assert_eq!(tabs[1].content, vec![VNode::text("Content of Two")]);
    }

    #[test]
    fn test_parse_filters_non_elements() {
        let children = vec![
            VNode::Comment("placeholder".to_string()),
            pane("a", "A"),
            VNode::text("stray"),
            VNode::Fragment(vec![pane("b", "B"), VNode::text("\n  ")]),
        ];

        let tabs = parse_tab_list(&children);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].key, Key::from("a"));
        assert_eq!(tabs[1].key, Key::from("b"));
    }

    #[test]
    fn test_empty_string_flags_are_true() {
        let element = Element::tab_pane("x")
            .flag("disabled")
            .flag("closable")
            .flag("force-render")
            .flag("active")
            .flag("destroy-inactive-tab-pane");

        let tab = Tab::from_element(&element, 0);
        assert!(tab.disabled);
        assert_eq!(tab.closable, Some(true));
        assert!(tab.force_render);
        assert!(tab.active);
        assert!(tab.destroy_inactive_content);
    }

    #[test]
    fn test_flag_truthiness() {
        assert!(attr_flag(&json!("")));
        assert!(attr_flag(&json!(true)));
        assert!(attr_flag(&json!("false")));
        assert!(attr_flag(&json!(1)));
        assert!(!attr_flag(&json!(false)));
        assert!(!attr_flag(&json!(0)));
        assert!(!attr_flag(&json!(null)));
    }

    #[test]
    fn test_closable_is_tri_state() {
        let unset = Tab::from_element(&Element::tab_pane("a"), 0);
        assert_eq!(unset.closable, None);
        assert!(unset.is_removable(true));
        assert!(!unset.is_removable(false));

        let off = Tab::from_element(&Element::tab_pane("b").attr("closable", false), 1);
        assert_eq!(off.closable, Some(false));
        assert!(!off.is_removable(true));

        let disabled = Tab::from_element(&Element::tab_pane("c").flag("disabled"), 2);
        assert!(!disabled.is_removable(true));
    }

    #[test]
    fn test_label_attr_wins_over_slot() {
        let element = Element::tab_pane("a")
            .attr("tab", "From attr")
            .slot("tab", vec![VNode::text("From slot")]);
        assert_eq!(Tab::from_element(&element, 0).display_label(), "From attr");

        let element = Element::tab_pane("b").slot("tab", vec![VNode::text("From slot")]);
        let tab = Tab::from_element(&element, 0);
        assert_eq!(tab.label, Some(Label::Nodes(vec![VNode::text("From slot")])));
        assert_eq!(tab.display_label(), "From slot");
    }

    #[test]
    fn test_missing_key_uses_position() {
        let children = vec![
            VNode::from(Element::new("tab-pane").attr("tab", "First")),
            VNode::from(Element::new("tab-pane").attr("tab", "Second")),
        ];

        let tabs = parse_tab_list(&children);
        assert_eq!(tabs[0].key, Key::from("0"));
        assert_eq!(tabs[1].key, Key::from("1"));
        assert_eq!(tabs[1].display_label(), "Second");
    }

    #[test]
    fn test_unknown_attrs_pass_through() {
        let element = Element::tab_pane("a")
            .attr("data-testid", "pane-a")
            .attr("tab", "A");
        let tab = Tab::from_element(&element, 0);

        assert_eq!(tab.extra.get("dataTestid"), Some(&json!("pane-a")));
        assert!(!tab.extra.contains_key("tab"));
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let tabs = parse_tab_list(&[pane("a", "A"), pane("a", "Again")]);
        assert_eq!(tabs.len(), 2);
    }
}
