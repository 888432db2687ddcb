//! End-to-end persistence tests: the store against the real JSON state
//! repository and the in-memory editor host.

use std::path::Path;

use tempfile::tempdir;

use tabgroups::infrastructure::{JsonStateStore, MemoryEditor};
use tabgroups::{FileCandidate, GroupIcon, StateStore, StoreOptions, TreeStore};

fn store_at(dir: &Path) -> TreeStore<JsonStateStore, MemoryEditor> {
    let state = JsonStateStore::at_path(dir.join("state.json"));
    TreeStore::new(state, MemoryEditor::new(), StoreOptions::default())
}

#[test]
fn scenario_roundtrips_through_the_json_document() {
    let dir = tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.restore().unwrap();
    assert!(store.is_empty());

    let work = store.add_group("Work").unwrap();
    store
        .add_entries(work, vec![FileCandidate::new("a.ts", "/ws/a.ts")])
        .unwrap();

    let mut restored = store_at(dir.path());
    restored.restore().unwrap();

    assert_eq!(restored.forest().len(), 1);
    let group = &restored.forest()[0];
    assert_eq!(group.label(), "Work");
    assert_eq!(group.children().len(), 1);
    let entry = &group.children()[0];
    assert_eq!(entry.label(), "a.ts");
    assert_eq!(entry.file_path(), Some(Path::new("/ws/a.ts")));
    assert_eq!(entry.parent_label(), Some("Work"));
}

#[test]
fn document_wire_format_is_stable() {
    let dir = tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.restore().unwrap();
    let work = store.add_group("Work").unwrap();
    store.set_group_icon(work, GroupIcon::Blue).unwrap();
    store
        .add_entries(work, vec![FileCandidate::new("a.ts", "/ws/a.ts")])
        .unwrap();

    let state = JsonStateStore::at_path(dir.path().join("state.json"));
    let doc = state.load().unwrap().unwrap();
    let json = serde_json::to_string(&doc).unwrap();

    insta::assert_snapshot!(
        json,
        @r#"{"key_0":{"label":"Work","file":null,"kind":"Group","icon":"blue","children":{"key_0":{"label":"a.ts","file":"/ws/a.ts","kind":"Entry","children":{},"parentLabel":"Work"}}}}"#
    );
}

#[test]
fn every_mutation_rewrites_the_document() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("state.json");

    let mut store = store_at(dir.path());
    store.restore().unwrap();

    let work = store.add_group("Work").unwrap();
    assert!(state_path.exists());

    store
        .add_entries(work, vec![FileCandidate::new("a.ts", "/ws/a.ts")])
        .unwrap();
    let after_add = std::fs::read_to_string(&state_path).unwrap();
    assert!(after_add.contains("a.ts"));

    store.remove_group(work).unwrap();
    let after_remove = std::fs::read_to_string(&state_path).unwrap();
    assert!(!after_remove.contains("Work"));
}

#[test]
fn twelve_entries_keep_their_order_across_restarts() {
    // Positional keys sort numerically on restore; a string sort would
    // shuffle key_10 and key_11 before key_2.
    let dir = tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.restore().unwrap();
    let work = store.add_group("Work").unwrap();
    let candidates: Vec<FileCandidate> = (0..12)
        .map(|i| FileCandidate::new(format!("f{}.rs", i), format!("/ws/f{}.rs", i)))
        .collect();
    store.add_entries(work, candidates).unwrap();

    let mut restored = store_at(dir.path());
    restored.restore().unwrap();

    let labels: Vec<String> = restored.forest()[0]
        .children()
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    let expected: Vec<String> = (0..12).map(|i| format!("f{}.rs", i)).collect();
    assert_eq!(labels, expected);
}

#[test]
fn icons_and_group_order_survive_restore() {
    let dir = tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.restore().unwrap();
    let b = store.add_group("B").unwrap();
    store.add_group("A").unwrap();
    store.set_group_icon(b, GroupIcon::Red).unwrap();
    store.move_down(b).unwrap();

    let mut restored = store_at(dir.path());
    restored.restore().unwrap();

    let labels: Vec<&str> = restored.forest().iter().map(|g| g.label()).collect();
    assert_eq!(labels, vec!["A", "B"]);
    assert_eq!(restored.forest()[1].icon(), Some(GroupIcon::Red));
}
