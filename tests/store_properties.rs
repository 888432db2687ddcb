//! Property tests for the store's core invariants.

use proptest::prelude::*;

use tabgroups::infrastructure::{MemoryEditor, MemoryStateStore};
use tabgroups::{FileCandidate, OpenTab, StoreOptions, TreeDocument, TreeStore};

fn store_with_tabs(tabs: Vec<OpenTab>) -> TreeStore<MemoryStateStore, MemoryEditor> {
    TreeStore::new(
        MemoryStateStore::new(),
        MemoryEditor::with_tabs(tabs),
        StoreOptions::default(),
    )
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,3}"
}

proptest! {
    /// No sequence of add_group calls ever produces two root groups
    /// with the same label.
    #[test]
    fn group_labels_stay_unique(names in prop::collection::vec(name_strategy(), 0..12)) {
        let mut store = store_with_tabs(Vec::new());
        for name in &names {
            let _ = store.add_group(name);
        }

        let mut seen = std::collections::HashSet::new();
        for group in store.forest() {
            prop_assert!(seen.insert(group.label().to_string()));
        }

        let unique: std::collections::HashSet<&String> = names.iter().collect();
        prop_assert_eq!(store.forest().len(), unique.len());
    }

    /// Any valid forest round-trips losslessly through the document.
    #[test]
    fn forest_roundtrips_through_the_document(
        groups in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..6), 0..4)
    ) {
        let mut store = store_with_tabs(Vec::new());
        for (g, entries) in groups.iter().enumerate() {
            let name = format!("group{}", g);
            let id = store.add_group(&name).unwrap();
            let candidates: Vec<FileCandidate> = entries
                .iter()
                .enumerate()
                .map(|(e, byte)| {
                    FileCandidate::new(
                        format!("file{}_{}.rs", e, byte),
                        format!("/ws/file{}_{}.rs", e, byte),
                    )
                })
                .collect();
            store.add_entries(id, candidates).unwrap();
        }

        let doc = TreeDocument::from_forest(store.forest());
        let json = serde_json::to_string(&doc).unwrap();
        let restored: TreeDocument = serde_json::from_str(&json).unwrap();
        let forest = restored.into_forest().unwrap();

        prop_assert_eq!(forest.len(), store.forest().len());
        for (restored_group, group) in forest.iter().zip(store.forest()) {
            prop_assert_eq!(restored_group.label(), group.label());
            prop_assert_eq!(restored_group.icon(), group.icon());
            prop_assert_eq!(restored_group.children().len(), group.children().len());
            for (restored_entry, entry) in restored_group.children().iter().zip(group.children()) {
                prop_assert_eq!(restored_entry.label(), entry.label());
                prop_assert_eq!(restored_entry.file_path(), entry.file_path());
                prop_assert_eq!(restored_entry.parent_label(), entry.parent_label());
            }
        }
    }

    /// After a sync, matched entries lead in tab order
    /// and unmatched entries follow in their original relative order.
    #[test]
    fn sync_orders_matched_before_unmatched(
        entry_count in 2usize..8,
        open_mask in prop::collection::vec(any::<bool>(), 8)
    ) {
        let labels: Vec<String> = (0..entry_count).map(|i| format!("f{}.rs", i)).collect();

        // Open a subset, in reverse order for a visible reordering.
        let tabs: Vec<OpenTab> = labels
            .iter()
            .enumerate()
            .rev()
            .filter(|(i, _)| open_mask[*i])
            .map(|(_, label)| OpenTab::file(label.clone(), format!("/ws/{}", label)))
            .collect();
        let any_open = !tabs.is_empty();
        let tab_labels: Vec<String> = tabs.iter().map(|t| t.label().to_string()).collect();

        let mut store = store_with_tabs(tabs);
        let id = store.add_group("Work").unwrap();
        let candidates: Vec<FileCandidate> = labels
            .iter()
            .map(|label| FileCandidate::new(label.clone(), format!("/ws/{}", label)))
            .collect();
        store.add_entries(id, candidates).unwrap();

        let result = store.sync_group_to_open_tabs(id);

        let after: Vec<String> = store.forest()[0]
            .children()
            .iter()
            .map(|c| c.label().to_string())
            .collect();

        if !any_open {
            prop_assert!(result.is_err());
            prop_assert_eq!(after, labels);
        } else {
            prop_assert!(result.is_ok());

            // Matched entries come first, in tab order.
            let matched_len = tab_labels.len();
            prop_assert_eq!(&after[..matched_len], &tab_labels[..]);

            // Unmatched entries keep their original relative order.
            let expected_unmatched: Vec<String> = labels
                .iter()
                .filter(|label| !tab_labels.contains(*label))
                .cloned()
                .collect();
            prop_assert_eq!(&after[matched_len..], &expected_unmatched[..]);
        }
    }

    /// Moving at a boundary errors and never mutates; moving in the
    /// middle swaps exactly one adjacent pair.
    #[test]
    fn moves_respect_boundaries(entry_count in 1usize..6, position in 0usize..6, up in any::<bool>()) {
        prop_assume!(position < entry_count);

        let mut store = store_with_tabs(Vec::new());
        let id = store.add_group("Work").unwrap();
        let candidates: Vec<FileCandidate> = (0..entry_count)
            .map(|i| FileCandidate::new(format!("f{}.rs", i), format!("/ws/f{}.rs", i)))
            .collect();
        store.add_entries(id, candidates).unwrap();

        let before: Vec<String> = store.forest()[0]
            .children()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        let target = store.forest()[0].children()[position].id();

        let result = if up { store.move_up(target) } else { store.move_down(target) };

        let after: Vec<String> = store.forest()[0]
            .children()
            .iter()
            .map(|c| c.label().to_string())
            .collect();

        let at_boundary = if up { position == 0 } else { position + 1 == entry_count };
        if at_boundary {
            prop_assert!(result.is_err());
            prop_assert_eq!(after, before);
        } else {
            prop_assert!(result.is_ok());
            let mut expected = before.clone();
            let swap_with = if up { position - 1 } else { position + 1 };
            expected.swap(position, swap_with);
            prop_assert_eq!(after, expected);
        }
    }
}
