//! Virtual child nodes
//!
//! The tabs widget receives its panes as a tree of declared nodes. Only the
//! shape matters here; drawing them is the renderer's job.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::TabError;

/// Name of the slot that holds an element's children.
pub const DEFAULT_SLOT: &str = "default";

/// Tag used for declared tab panes.
pub const TAB_PANE_TAG: &str = "tab-pane";

/// Stable identity of a tab
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "String")]
pub struct Key(String);

impl Key {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Self(key.to_string())
    }
}

impl From<usize> for Key {
    fn from(key: usize) -> Self {
        Self(key.to_string())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl TryFrom<Value> for Key {
    type Error = TabError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(TabError::InvalidKey(other.to_string())),
        }
    }
}

/// A declared node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum VNode {
    Element(Element),
    Fragment(Vec<VNode>),
    Text(String),
    Comment(String),
}

impl VNode {
    pub fn text(text: impl Into<String>) -> Self {
        VNode::Text(text.into())
    }

    /// Plain text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text(text) => text.clone(),
            VNode::Comment(_) => String::new(),
            VNode::Fragment(nodes) => nodes.iter().map(VNode::text_content).collect(),
            VNode::Element(element) => element
                .get_slot(DEFAULT_SLOT)
                .map(|nodes| nodes.iter().map(VNode::text_content).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<Element> for VNode {
    fn from(element: Element) -> Self {
        VNode::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub key: Option<Key>,
    #[serde(default)]
    pub attrs: BTreeMap<String, Value>,
    #[serde(default)]
    pub slots: BTreeMap<String, Vec<VNode>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// A tab pane declaration with the given key
    pub fn tab_pane(key: impl Into<Key>) -> Self {
        Self::new(TAB_PANE_TAG).with_key(key)
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Declare a bare attribute (`<tab-pane disabled>`), which arrives as an empty string
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn slot(mut self, name: impl Into<String>, nodes: Vec<VNode>) -> Self {
        self.slots.insert(name.into(), nodes);
        self
    }

    /// Append a node to the default slot
    pub fn child(mut self, node: impl Into<VNode>) -> Self {
        self.slots
            .entry(DEFAULT_SLOT.to_string())
            .or_default()
            .push(node.into());
        self
    }

    pub fn get_slot(&self, name: &str) -> Option<&Vec<VNode>> {
        self.slots.get(name)
    }

    /// Attributes with their names converted to camelCase.
    /// When both spellings are declared, the later one in name order wins.
    pub fn camelized_attrs(&self) -> BTreeMap<String, Value> {
        self.attrs
            .iter()
            .map(|(name, value)| (camelize(name), value.clone()))
            .collect()
    }
}

/// `force-render` -> `forceRender`
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    if upper_next {
        out.push('-');
    }
    out
}

/// Flatten fragments depth first, dropping comments and blank text
pub fn flatten_children(nodes: &[VNode]) -> Vec<VNode> {
    let mut out = Vec::with_capacity(nodes.len());
    flatten_into(nodes, &mut out);
    out
}

fn flatten_into(nodes: &[VNode], out: &mut Vec<VNode>) {
    for node in nodes {
        match node {
            VNode::Fragment(children) => flatten_into(children, out),
            VNode::Comment(_) => {}
            VNode::Text(text) if text.trim().is_empty() => {}
            other => out.push(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("force-render"), "forceRender");
        assert_eq!(camelize("destroy-inactive-tab-pane"), "destroyInactiveTabPane");
        assert_eq!(camelize("disabled"), "disabled");
        assert_eq!(camelize("forceRender"), "forceRender");
    }

    #[test]
    fn test_flatten_children() {
        let nodes = vec![
            VNode::Comment("v-if".to_string()),
            VNode::Fragment(vec![
                Element::tab_pane("a").into(),
                VNode::text("   "),
                VNode::Fragment(vec![Element::tab_pane("b").into()]),
            ]),
            VNode::text("loose text"),
            Element::tab_pane("c").into(),
        ];

        let flat = flatten_children(&nodes);
        assert_eq!(flat.len(), 4);
        assert!(matches!(&flat[0], VNode::Element(e) if e.key == Some(Key::from("a"))));
        assert!(matches!(&flat[1], VNode::Element(e) if e.key == Some(Key::from("b"))));
        assert_eq!(flat[2], VNode::text("loose text"));
        assert!(matches!(&flat[3], VNode::Element(e) if e.key == Some(Key::from("c"))));
    }

    #[test]
    fn test_key_from_json() {
        let key: Key = serde_json::from_value(json!("tab-1")).unwrap();
        assert_eq!(key.as_str(), "tab-1");

        let key: Key = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(key, Key::from(3i64));

        assert!(serde_json::from_value::<Key>(json!(true)).is_err());
    }

    #[test]
    fn test_element_from_json() {
        let node: VNode = serde_json::from_value(json!({
            "type": "element",
            "value": {
                "tag": "tab-pane",
                "key": 1,
                "attrs": { "force-render": "" },
                "slots": { "default": [{ "type": "text", "value": "Content 1" }] }
            }
        }))
        .unwrap();

        let VNode::Element(element) = node else {
            panic!("expected element");
        };
        assert_eq!(element.key, Some(Key::from("1")));
        assert_eq!(element.camelized_attrs().get("forceRender"), Some(&json!("")));
        assert_eq!(VNode::Element(element).text_content(), "Content 1");
    }
}
