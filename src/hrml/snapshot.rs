//! Tree snapshot - a normalized, serializable view of a parsed [`TagTree`]
//!
//! Formatters consume the snapshot instead of walking the arena themselves. Roots, children
//! and attributes all appear in name order, so output is deterministic.

use super::tree::{TagId, TagTree};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSnapshot {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<TagSnapshot>,
}

impl TagSnapshot {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: TagSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub roots: Vec<TagSnapshot>,
}

pub fn snapshot_tag(tree: &TagTree, id: TagId) -> TagSnapshot {
    let tag = tree.tag(id);
    TagSnapshot {
        name: tag.name().to_string(),
        attributes: tag
            .attributes()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        children: tag
            .children()
            .map(|child| snapshot_tag(tree, child))
            .collect(),
    }
}

pub fn snapshot_from_tree(tree: &TagTree) -> DocumentSnapshot {
    DocumentSnapshot {
        roots: tree.roots().map(|id| snapshot_tag(tree, id)).collect(),
    }
}
