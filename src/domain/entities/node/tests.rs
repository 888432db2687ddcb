use std::path::Path;

use super::*;

fn entry(label: &str, path: &str) -> TreeNode {
    TreeNode::entry(label, path)
}

#[test]
fn group_starts_empty_and_collapsed() {
    let group = TreeNode::group("Work");
    assert!(group.is_group());
    assert_eq!(group.kind(), NodeKind::Group);
    assert!(group.children().is_empty());
    assert!(!group.expanded());
    assert_eq!(group.file_path(), None);
    assert_eq!(group.parent_label(), None);
    assert_eq!(group.icon(), None);
}

#[test]
fn entry_carries_its_file() {
    let entry = entry("a.rs", "/ws/a.rs");
    assert!(!entry.is_group());
    assert_eq!(entry.file_path(), Some(Path::new("/ws/a.rs")));
}

#[test]
fn unbacked_entry_has_no_file() {
    let entry = TreeNode::entry_unbacked("Settings");
    assert_eq!(entry.kind(), NodeKind::Entry);
    assert_eq!(entry.file_path(), None);
}

#[test]
fn node_ids_are_distinct() {
    let a = TreeNode::group("A");
    let b = TreeNode::group("B");
    assert_ne!(a.id(), b.id());
}

#[test]
fn add_child_appends_and_expands() {
    let mut group = TreeNode::group("Work");
    let outcome = group.add_child(entry("a.rs", "/ws/a.rs")).unwrap();
    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(group.children().len(), 1);
    assert!(group.expanded());
}

#[test]
fn add_child_to_entry_is_a_structural_violation() {
    // The rejected node's children must stay untouched.
    let mut leaf = entry("a.rs", "/ws/a.rs");
    let err = leaf.add_child(entry("b.rs", "/ws/b.rs")).unwrap_err();
    assert_eq!(
        err,
        StructuralViolation::ChildOfEntry {
            label: "a.rs".to_string()
        }
    );
    assert!(leaf.children().is_empty());
}

#[test]
fn duplicate_identity_is_discarded() {
    // Same (label, file) pair leaves the children unchanged.
    let mut group = TreeNode::group("Work");
    group.add_child(entry("a.rs", "/ws/a.rs")).unwrap();
    let outcome = group.add_child(entry("a.rs", "/ws/a.rs")).unwrap();
    assert_eq!(outcome, AddOutcome::Duplicate);
    assert_eq!(group.children().len(), 1);
}

#[test]
fn same_label_different_file_is_not_a_duplicate() {
    let mut group = TreeNode::group("Work");
    group.add_child(entry("mod.rs", "/ws/a/mod.rs")).unwrap();
    let outcome = group.add_child(entry("mod.rs", "/ws/b/mod.rs")).unwrap();
    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(group.children().len(), 2);
}

#[test]
fn child_index_matches_by_identity_not_reference() {
    let mut group = TreeNode::group("Work");
    group.add_child(entry("a.rs", "/ws/a.rs")).unwrap();
    group.add_child(entry("b.rs", "/ws/b.rs")).unwrap();

    let probe = entry("b.rs", "/ws/b.rs");
    assert_eq!(group.child_index_of(&probe), Some(1));
    assert!(group.has_child(&probe));

    let absent = entry("c.rs", "/ws/c.rs");
    assert_eq!(group.child_index_of(&absent), None);
    assert!(!group.has_child(&absent));
}

#[test]
fn remove_child_by_identity() {
    let mut group = TreeNode::group("Work");
    group.add_child(entry("a.rs", "/ws/a.rs")).unwrap();
    group.add_child(entry("b.rs", "/ws/b.rs")).unwrap();

    assert!(group.remove_child(&entry("a.rs", "/ws/a.rs")));
    assert_eq!(group.children().len(), 1);
    assert_eq!(group.children()[0].label(), "b.rs");

    // Absent child reports false and changes nothing.
    assert!(!group.remove_child(&entry("a.rs", "/ws/a.rs")));
    assert_eq!(group.children().len(), 1);
}

#[test]
fn parent_label_is_entry_only() {
    let mut group = TreeNode::group("Work");
    let err = group.set_parent_label("Other").unwrap_err();
    assert_eq!(
        err,
        StructuralViolation::ParentLabelOnGroup {
            label: "Work".to_string()
        }
    );

    let mut entry = entry("a.rs", "/ws/a.rs");
    entry.set_parent_label("Work").unwrap();
    assert_eq!(entry.parent_label(), Some("Work"));
}

#[test]
fn icon_is_group_only() {
    use crate::domain::value_objects::GroupIcon;

    let mut entry = entry("a.rs", "/ws/a.rs");
    let err = entry.set_icon(GroupIcon::Red).unwrap_err();
    assert_eq!(
        err,
        StructuralViolation::IconOnEntry {
            label: "a.rs".to_string()
        }
    );

    let mut group = TreeNode::group("Work");
    group.set_icon(GroupIcon::Green).unwrap();
    assert_eq!(group.icon(), Some(GroupIcon::Green));
}

#[test]
fn record_roundtrip_preserves_structure() {
    // Labels, kinds, paths, order, and backrefs all survive.
    use crate::domain::value_objects::GroupIcon;

    let mut group = TreeNode::group("Work");
    group.set_icon(GroupIcon::Blue).unwrap();
    for (label, path) in [("a.rs", "/ws/a.rs"), ("b.rs", "/ws/b.rs")] {
        let mut e = entry(label, path);
        e.set_parent_label("Work").unwrap();
        group.add_child(e).unwrap();
    }

    let restored = TreeNode::from_record(group.to_record()).unwrap();

    assert_eq!(restored.label(), "Work");
    assert_eq!(restored.kind(), NodeKind::Group);
    assert_eq!(restored.icon(), Some(GroupIcon::Blue));
    assert_eq!(restored.children().len(), 2);
    for (restored_child, original_child) in restored.children().iter().zip(group.children()) {
        assert_eq!(restored_child.label(), original_child.label());
        assert_eq!(restored_child.file_path(), original_child.file_path());
        assert_eq!(restored_child.parent_label(), Some("Work"));
    }
    // Re-adding children through add_child re-applies the expanded rule.
    assert!(restored.expanded());
}

#[test]
fn from_record_suppresses_duplicate_children() {
    let mut group = TreeNode::group("Work");
    group.add_child(entry("a.rs", "/ws/a.rs")).unwrap();
    let mut record = group.to_record();

    // Duplicate the single child record.
    let dup = record.children.iter().next().unwrap().clone();
    record.children = vec![dup.clone(), dup].into_iter().collect();

    let restored = TreeNode::from_record(record).unwrap();
    assert_eq!(restored.children().len(), 1);
}
