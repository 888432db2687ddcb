//! Persisted document shape
//!
//! The durable document is a positional map of serialized groups:
//! `{"key_0": <group>, "key_1": <group>, ...}`, each group nesting its
//! entries under the same `key_N` scheme. Keys carry order only; restore
//! sorts them by their numeric suffix, since a plain string sort would
//! put `key_10` before `key_2`.

use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::entities::node::{NodeKind, StructuralViolation, TreeNode};
use crate::domain::value_objects::GroupIcon;

/// An ordered sequence persisted as a `key_0..key_N` map
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedSeq<T>(Vec<T>);

// Hand-written so `KeyedSeq<T>: Default` holds without `T: Default`.
impl<T> Default for KeyedSeq<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> KeyedSeq<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> FromIterator<T> for KeyedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for KeyedSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn positional_index(key: &str) -> Option<u64> {
    key.strip_prefix("key_")?.parse().ok()
}

impl<T: Serialize> Serialize for KeyedSeq<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, item) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("key_{}", i), item)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for KeyedSeq<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyedSeqVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedSeqVisitor<T> {
            type Value = KeyedSeq<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with positional key_N keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut keyed: Vec<(u64, T)> = Vec::new();
                while let Some((key, value)) = access.next_entry::<String, T>()? {
                    let index = positional_index(&key).ok_or_else(|| {
                        serde::de::Error::custom(format!("invalid positional key '{}'", key))
                    })?;
                    keyed.push((index, value));
                }
                keyed.sort_by_key(|(index, _)| *index);
                Ok(KeyedSeq(keyed.into_iter().map(|(_, value)| value).collect()))
            }
        }

        deserializer.deserialize_map(KeyedSeqVisitor(PhantomData))
    }
}

/// Wire shape of one tree node
///
/// Groups omit `parentLabel`; entries omit `icon`. `file` is written
/// explicitly (null for groups) to keep the document shape stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub label: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<GroupIcon>,
    #[serde(default)]
    pub children: KeyedSeq<NodeRecord>,
    #[serde(
        rename = "parentLabel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_label: Option<String>,
}

/// The whole durable document: the forest's groups, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeDocument {
    groups: KeyedSeq<NodeRecord>,
}

impl TreeDocument {
    /// Serialize a forest into its durable shape
    pub fn from_forest(forest: &[TreeNode]) -> Self {
        Self {
            groups: forest.iter().map(TreeNode::to_record).collect(),
        }
    }

    /// Rebuild the forest, preserving group and entry order
    pub fn into_forest(self) -> Result<Vec<TreeNode>, StructuralViolation> {
        self.groups.into_iter().map(TreeNode::from_record).collect()
    }

    pub fn groups(&self) -> impl Iterator<Item = &NodeRecord> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
