//! The editing session: one tree, one selection, one writer.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::codegen;
use crate::config::CodegenOptions;
use crate::error::{Result, TreeError};
use crate::factory;
use crate::node::{Kind, Node, NodeId, NodePatch};
use crate::tree;

/// What is being dragged: a palette entry or a node already on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragPayload {
    New(Kind),
    Existing(NodeId),
}

/// JSON form of a drag payload.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DragItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    component: Option<Node>,
    #[serde(default)]
    is_new: bool,
}

impl DragPayload {
    pub fn from_json(json: &str) -> Result<Self> {
        let item: DragItem =
            serde_json::from_str(json).map_err(|e| TreeError::MalformedPayload(e.to_string()))?;
        if item.is_new {
            return Ok(DragPayload::New(item.kind.parse()?));
        }
        match item.component {
            Some(node) => Ok(DragPayload::Existing(node.id)),
            None => Err(TreeError::MalformedPayload(
                "payload is neither new nor carries a component".into(),
            )),
        }
    }

    /// `tree` supplies the node snapshot for [`DragPayload::Existing`].
    pub fn to_json(&self, tree: &[Node]) -> Result<String> {
        let item = match self {
            DragPayload::New(kind) => DragItem {
                kind: kind.to_string(),
                component: None,
                is_new: true,
            },
            DragPayload::Existing(id) => {
                let node = tree::find_by_id(tree, id)
                    .ok_or_else(|| TreeError::NodeNotFound(id.clone()))?;
                DragItem {
                    kind: node.kind.to_string(),
                    component: Some(node.clone()),
                    is_new: false,
                }
            }
        };
        serde_json::to_string(&item).map_err(|e| TreeError::MalformedPayload(e.to_string()))
    }
}

/// Owns the design tree and the selection.
///
/// Every mutation swaps in a tree produced by [`crate::tree`]. Rejected
/// operations are logged and leave the session as it was; the return value
/// says whether anything changed.
#[derive(Debug, Default)]
pub struct Session {
    tree: Vec<Node>,
    selected: Option<NodeId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &[Node] {
        &self.tree
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn node_count(&self) -> usize {
        tree::count(&self.tree)
    }

    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        tree::find_by_id(&self.tree, id)
    }

    /// The selected node, looked up afresh in the current tree.
    pub fn selected(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.find(id))
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    /// Create a `kind` node and place it under `target` (root when `None`).
    /// The new node becomes the selection.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, kind: Kind, target: Option<&NodeId>) -> Option<NodeId> {
        let node = factory::create(kind);
        let id = node.id.clone();
        match tree::insert(&self.tree, node, target) {
            Ok(next) => {
                self.tree = next;
                self.selected = Some(id.clone());
                debug!(%id, "added {kind}");
                Some(id)
            }
            Err(e) => {
                warn!("add rejected: {e}");
                None
            }
        }
    }

    /// [`Session::add`] from a kind name supplied by the presentation layer.
    pub fn add_named(&mut self, kind: &str, target: Option<&NodeId>) -> Option<NodeId> {
        match kind.parse::<Kind>() {
            Ok(kind) => self.add(kind, target),
            Err(e) => {
                warn!("add rejected: {e}");
                None
            }
        }
    }

    /// Handle a drop on `target` (the canvas itself when `None`).
    pub fn apply_drop(&mut self, payload: &DragPayload, target: Option<&NodeId>) -> bool {
        match payload {
            DragPayload::New(kind) => self.add(*kind, target).is_some(),
            DragPayload::Existing(id) => self.relocate(id, target),
        }
    }

    /// Same as [`Session::apply_drop`] for a JSON payload. Malformed payloads
    /// are discarded.
    pub fn apply_drop_json(&mut self, json: &str, target: Option<&NodeId>) -> bool {
        match DragPayload::from_json(json) {
            Ok(payload) => self.apply_drop(&payload, target),
            Err(e) => {
                warn!("drop discarded: {e}");
                false
            }
        }
    }

    /// Move `id` under `target`. Refuses targets inside the moved subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn relocate(&mut self, id: &NodeId, target: Option<&NodeId>) -> bool {
        if let Some(t) = target
            && tree::contains(&self.tree, id, t)
        {
            warn!(%id, target = %t, "move rejected: target is inside the moved node");
            return false;
        }
        match tree::move_node(&self.tree, id, target) {
            Ok(next) => {
                self.tree = next;
                debug!(%id, "moved");
                true
            }
            Err(e) => {
                warn!("move rejected: {e}");
                false
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn edit(&mut self, id: &NodeId, patch: &NodePatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        match tree::update(&self.tree, id, patch) {
            Ok(next) => {
                let changed = next != self.tree;
                self.tree = next;
                changed
            }
            Err(e) => {
                warn!("edit rejected: {e}");
                false
            }
        }
    }

    /// Remove `id` and its subtree. Clears the selection if it went with it.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: &NodeId) -> bool {
        if self.find(id).is_none() {
            warn!(%id, "delete rejected: no such node");
            return false;
        }
        self.tree = tree::remove(&self.tree, id);
        if self.selected.is_some() && self.selected().is_none() {
            self.selected = None;
        }
        debug!(%id, "deleted");
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected.clone() {
            Some(id) => self.delete(&id),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.selected = None;
    }

    pub fn generate(&self, options: &CodegenOptions) -> String {
        codegen::generate(&self.tree, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::StyleField;

    #[test]
    fn test_add_selects_new_node() {
        let mut session = Session::new();
        let id = session.add(Kind::Button, None).unwrap();
        assert_eq!(session.selected().map(|n| &n.id), Some(&id));
        assert_eq!(session.node_count(), 1);
    }

    #[test]
    fn test_add_to_missing_container_is_silent_noop() {
        let mut session = Session::new();
        session.add(Kind::Card, None).unwrap();
        let before = session.tree().to_vec();
        assert!(session.add(Kind::Text, Some(&NodeId::new("ghost"))).is_none());
        assert_eq!(session.tree(), before.as_slice());
    }

    #[test]
    fn test_add_named_unknown_kind() {
        let mut session = Session::new();
        assert!(session.add_named("carousel", None).is_none());
        assert!(session.add_named("div", None).is_some());
        assert_eq!(session.tree()[0].kind, Kind::Container);
    }

    #[test]
    fn test_selection_follows_edits() {
        let mut session = Session::new();
        let id = session.add(Kind::Text, None).unwrap();
        assert!(session.edit(&id, &NodePatch::new().prop("text", "Hello")));
        assert_eq!(session.selected().and_then(|n| n.prop("text")), Some("Hello"));
    }

    #[test]
    fn test_edit_without_change() {
        let mut session = Session::new();
        let id = session.add(Kind::Text, None).unwrap();
        assert!(!session.edit(&id, &NodePatch::new()));
        assert!(!session.edit(&id, &NodePatch::new().prop("text", "Text Element")));
        assert!(!session.edit(&NodeId::new("ghost"), &NodePatch::new().prop("text", "x")));
    }

    #[test]
    fn test_delete_clears_selection_of_descendant() {
        let mut session = Session::new();
        let card = session.add(Kind::Card, None).unwrap();
        let text = session.add(Kind::Text, Some(&card)).unwrap();
        assert_eq!(session.selected_id(), Some(&text));
        assert!(session.delete(&card));
        assert!(session.selected().is_none());
        assert!(session.selected_id().is_none());
        assert!(session.is_empty());
        assert!(!session.delete(&card));
    }

    #[test]
    fn test_relocate_into_descendant_refused() {
        let mut session = Session::new();
        let outer = session.add(Kind::Container, None).unwrap();
        let inner = session.add(Kind::Grid, Some(&outer)).unwrap();
        let before = session.tree().to_vec();
        assert!(!session.relocate(&outer, Some(&inner)));
        assert!(!session.relocate(&outer, Some(&outer)));
        assert_eq!(session.tree(), before.as_slice());
    }

    #[test]
    fn test_drop_existing_keeps_style() {
        let mut session = Session::new();
        let a = session.add(Kind::Container, None).unwrap();
        let b = session.add(Kind::Button, None).unwrap();
        session.edit(&b, &NodePatch::new().style(StyleField::Width, "120px"));
        let before = session.find(&b).cloned().unwrap();

        assert!(session.apply_drop(&DragPayload::Existing(b.clone()), Some(&a)));
        let after = session.find(&b).unwrap();
        assert_eq!(after.style, before.style);
        assert_eq!(after.props, before.props);
        assert_eq!(after.parent_id.as_ref(), Some(&a));
        assert_eq!(session.tree().len(), 1);
    }

    #[test]
    fn test_drop_json_payloads() {
        let mut session = Session::new();
        assert!(session.apply_drop_json(r#"{"type":"grid","isNew":true}"#, None));
        assert!(!session.apply_drop_json("not json", None));
        assert!(!session.apply_drop_json(r#"{"type":"grid"}"#, None));
        assert_eq!(session.node_count(), 1);

        let grid = session.tree()[0].id.clone();
        let text = session.add(Kind::Text, None).unwrap();
        let json = DragPayload::Existing(text.clone()).to_json(session.tree()).unwrap();
        assert!(session.apply_drop_json(&json, Some(&grid)));
        assert_eq!(session.tree()[0].children[0].id, text);
    }

    #[test]
    fn test_payload_json_roundtrip() {
        let json = DragPayload::New(Kind::Card).to_json(&[]).unwrap();
        assert_eq!(DragPayload::from_json(&json).unwrap(), DragPayload::New(Kind::Card));
        assert!(matches!(
            DragPayload::Existing(NodeId::new("x")).to_json(&[]),
            Err(TreeError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.add(Kind::Image, None);
        session.clear();
        assert!(session.is_empty());
        assert!(session.selected().is_none());
    }
}
