//! The design tree: nodes, kinds, props and style records.

mod style;

pub use style::{Style, StyleField};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

/// Opaque node identifier, unique across a session and never reused.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Button,
    Input,
    Text,
    Image,
    #[serde(alias = "div")]
    Container,
    Card,
    Grid,
}

impl Kind {
    /// Palette order.
    pub const ALL: [Kind; 7] = [
        Kind::Button,
        Kind::Input,
        Kind::Text,
        Kind::Image,
        Kind::Container,
        Kind::Card,
        Kind::Grid,
    ];

    /// Whether nodes of this kind may hold children.
    pub const fn is_container(&self) -> bool {
        matches!(self, Kind::Container | Kind::Card | Kind::Grid)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Button => "button",
            Kind::Input => "input",
            Kind::Text => "text",
            Kind::Image => "image",
            Kind::Container => "container",
            Kind::Card => "card",
            Kind::Grid => "grid",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Kind::Button => "Button",
            Kind::Input => "Input",
            Kind::Text => "Text",
            Kind::Image => "Image",
            Kind::Container => "Container",
            Kind::Card => "Card",
            Kind::Grid => "Grid",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Kind::Button => "🔘",
            Kind::Input => "📝",
            Kind::Text => "📄",
            Kind::Image => "🖼",
            Kind::Container => "📦",
            Kind::Card => "🃏",
            Kind::Grid => "⚏",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "button" => Ok(Kind::Button),
            "input" => Ok(Kind::Input),
            "text" => Ok(Kind::Text),
            "image" => Ok(Kind::Image),
            "container" | "div" => Ok(Kind::Container),
            "card" => Ok(Kind::Card),
            "grid" => Ok(Kind::Grid),
            _ => Err(TreeError::UnknownKind(s.to_string())),
        }
    }
}

/// Kind-specific string properties (`text`, `placeholder`, `src`, `alt`, ...).
pub type Props = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: Kind,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub children: Vec<Node>,
    /// Informational only; the `children` vectors own the tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
}

impl Node {
    /// A bare node with no props, style or children.
    pub fn new(id: NodeId, kind: Kind) -> Self {
        Self {
            id,
            kind,
            props: Props::new(),
            style: Style::default(),
            children: Vec::new(),
            parent_id: None,
        }
    }

    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Merge a patch into this node. Kind, id and position are untouched.
    pub fn apply(&mut self, patch: &NodePatch) {
        for (key, value) in &patch.props {
            if value.is_empty() {
                self.props.remove(key);
            } else {
                self.props.insert(key.clone(), value.clone());
            }
        }
        self.style.merge(&patch.style);
    }
}

/// Partial edit of a node's props and style.
///
/// A prop with an empty value is removed; a style field set to an empty
/// string is cleared. Unset style fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodePatch {
    pub props: Props,
    pub style: Style,
}

impl NodePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn style(mut self, field: StyleField, value: impl Into<String>) -> Self {
        self.style.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.style == Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_containers() {
        let containers: Vec<_> = Kind::ALL.iter().filter(|k| k.is_container()).collect();
        assert_eq!(containers, [&Kind::Container, &Kind::Card, &Kind::Grid]);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("button".parse::<Kind>(), Ok(Kind::Button));
        assert_eq!(" Grid ".parse::<Kind>(), Ok(Kind::Grid));
        assert_eq!("div".parse::<Kind>(), Ok(Kind::Container));
        assert_eq!(
            "slider".parse::<Kind>(),
            Err(TreeError::UnknownKind("slider".into()))
        );
    }

    #[test]
    fn test_kind_display_roundtrips_through_from_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_node_id_generate_is_unique() {
        let a = NodeId::generate();
        let b = NodeId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_node_prop_ignores_empty_values() {
        let mut node = Node::new(NodeId::new("n1"), Kind::Text);
        node.props.insert("text".into(), String::new());
        assert_eq!(node.prop("text"), None);
        node.props.insert("text".into(), "Hi".into());
        assert_eq!(node.prop("text"), Some("Hi"));
    }

    #[test]
    fn test_apply_patch() {
        let mut node = Node::new(NodeId::new("n1"), Kind::Button);
        node.props.insert("text".into(), "Button".into());
        node.props.insert("onClick".into(), "handle".into());
        node.style.set(StyleField::Width, "100px");

        let patch = NodePatch::new()
            .prop("text", "Save")
            .prop("onClick", "")
            .style(StyleField::Width, "")
            .style(StyleField::Color, "#ffffff");
        node.apply(&patch);

        assert_eq!(node.prop("text"), Some("Save"));
        assert!(!node.props.contains_key("onClick"));
        assert_eq!(node.style.get(StyleField::Width), None);
        assert_eq!(node.style.get(StyleField::Color), Some("#ffffff"));
        assert_eq!(node.kind, Kind::Button);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut node = Node::new(NodeId::new("n1"), Kind::Card);
        node.style.set(StyleField::Padding, "16px");
        let before = node.clone();
        let patch = NodePatch::new();
        assert!(patch.is_empty());
        node.apply(&patch);
        assert_eq!(node, before);
    }

    #[test]
    fn test_node_json_shape() {
        let mut node = Node::new(NodeId::new("abc"), Kind::Container);
        node.style.set(StyleField::BackgroundColor, "#fff");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "container");
        assert_eq!(json["style"]["backgroundColor"], "#fff");
        assert!(json.get("parentId").is_none());

        let back: Node = serde_json::from_value(serde_json::json!({
            "id": "x", "type": "div", "parentId": "abc"
        }))
        .unwrap();
        assert_eq!(back.kind, Kind::Container);
        assert_eq!(back.parent_id, Some(NodeId::new("abc")));
        assert!(back.children.is_empty());
    }
}
