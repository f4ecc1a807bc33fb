//! Tree engine properties over small hand-built trees.

use rad_canvas::factory::{create, create_with_id};
use rad_canvas::tree::{self, find_by_id};
use rad_canvas::{Kind, Node, NodeId, NodePatch, Session, StyleField, TreeError};
use rstest::{fixture, rstest};

#[fixture]
fn nested() -> Vec<Node> {
    let t = tree::insert(&[], create_with_id(Kind::Container, "root-a".into()), None).unwrap();
    let t = tree::insert(&t, create_with_id(Kind::Card, "card".into()), Some(&"root-a".into())).unwrap();
    let t = tree::insert(&t, create_with_id(Kind::Button, "btn".into()), Some(&"card".into())).unwrap();
    let t = tree::insert(&t, create_with_id(Kind::Grid, "root-b".into()), None).unwrap();
    tree::insert(&t, create_with_id(Kind::Image, "img".into()), Some(&"root-b".into())).unwrap()
}

#[rstest]
#[case::empty(vec![])]
#[case::nested(nested())]
fn given_absent_id_when_finding_then_returns_none(#[case] t: Vec<Node>) {
    assert!(find_by_id(&t, &NodeId::new("definitely-not-here")).is_none());
}

#[rstest]
#[case::empty(vec![])]
#[case::nested(nested())]
fn given_root_insert_when_finding_then_returns_node(#[case] t: Vec<Node>) {
    let n = create(Kind::Text);
    let out = tree::insert(&t, n.clone(), None).unwrap();
    assert_eq!(find_by_id(&out, &n.id), Some(&n));
}

#[rstest]
#[case::root(None)]
#[case::container(Some("root-b"))]
#[case::deep(Some("card"))]
fn given_insert_then_remove_when_id_was_absent_then_tree_is_restored(#[case] target: Option<&str>) {
    let t = nested();
    let n = create(Kind::Input);
    let target = target.map(NodeId::new);
    let inserted = tree::insert(&t, n.clone(), target.as_ref()).unwrap();
    assert_eq!(tree::count(&inserted), tree::count(&t) + 1);
    assert_eq!(tree::remove(&inserted, &n.id), t);
}

#[rstest]
fn given_empty_patch_when_updating_then_tree_unchanged(nested: Vec<Node>) {
    for (_, n) in tree::iter(&nested) {
        assert_eq!(tree::update(&nested, &n.id, &NodePatch::new()).unwrap(), nested);
    }
}

#[rstest]
#[case::to_root(None)]
#[case::to_other_container(Some("root-b"))]
#[case::to_parent_of_parent(Some("root-a"))]
fn given_move_when_relocating_then_props_and_style_survive(#[case] target: Option<&str>) {
    let t = nested();
    let patch = NodePatch::new()
        .prop("text", "Go")
        .style(StyleField::Width, "64px");
    let t = tree::update(&t, &"btn".into(), &patch).unwrap();
    let before = find_by_id(&t, &"btn".into()).cloned().unwrap();

    let target = target.map(NodeId::new);
    let moved = tree::move_node(&t, &"btn".into(), target.as_ref()).unwrap();
    let after = find_by_id(&moved, &"btn".into()).unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.props, before.props);
    assert_eq!(after.style, before.style);
    assert_eq!(after.parent_id, target);
    assert_eq!(tree::count(&moved), tree::count(&t));
}

#[rstest]
fn given_unknown_target_when_inserting_then_error_and_input_intact(nested: Vec<Node>) {
    let snapshot = nested.clone();
    let err = tree::insert(&nested, create(Kind::Text), Some(&"ghost".into())).unwrap_err();
    assert_eq!(err, TreeError::ContainerNotFound("ghost".into()));
    assert_eq!(nested, snapshot);
}

#[rstest]
fn given_nested_tree_when_inserting_anywhere_then_ids_stay_unique(nested: Vec<Node>) {
    let mut t = nested;
    for target in ["root-a", "card", "root-b"] {
        t = tree::insert(&t, create(Kind::Text), Some(&target.into())).unwrap();
    }
    let mut ids: Vec<_> = tree::iter(&t).into_iter().map(|(_, n)| n.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn given_empty_session_when_building_container_with_button_then_remove_restores() {
    let mut session = Session::new();
    let container = session.add(Kind::Container, None).unwrap();
    assert_eq!(session.tree().len(), 1);

    let button = session.add(Kind::Button, Some(&container)).unwrap();
    assert_eq!(session.tree()[0].children.len(), 1);
    assert_eq!(session.tree()[0].children[0].kind, Kind::Button);
    assert_eq!(session.tree()[0].children[0].parent_id.as_ref(), Some(&container));

    assert!(session.delete(&button));
    assert_eq!(session.tree()[0].children.len(), 0);
}

#[test]
fn given_leaf_target_when_adding_then_session_ignores_it() {
    let mut session = Session::new();
    let button = session.add(Kind::Button, None).unwrap();
    assert!(session.add(Kind::Text, Some(&button)).is_none());
    assert_eq!(session.node_count(), 1);
    assert!(session.tree()[0].children.is_empty());
}
