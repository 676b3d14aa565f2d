//! Tag tree
//!
//! Tags are stored in an arena owned by [`TagTree`] and addressed by [`TagId`]. Parent and
//! child links are ids, so the parent back-reference never owns anything. Top-level tags are
//! indexed by name in a separate root map, which makes the tree a forest.
//!
//! Re-inserting a name that already exists under the same parent replaces the earlier tag.
//! The replaced subtree stays in the arena but is no longer reachable.

use super::diagnostics::Diagnostics;
use std::collections::BTreeMap;

/// Handle to a tag inside a [`TagTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(usize);

impl TagId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A markup element: a name, its attributes and its named children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: BTreeMap<String, String>,
    children: BTreeMap<String, TagId>,
    parent: Option<TagId>,
}

impl Tag {
    fn new(name: &str, parent: Option<TagId>) -> Self {
        Self {
            name: name.to_string(),
            attributes: BTreeMap::new(),
            children: BTreeMap::new(),
            parent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<TagId> {
        self.parent
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attributes in key order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute, returning the value it replaced
    pub fn set_attribute(&mut self, key: &str, value: &str) -> Option<String> {
        self.attributes.insert(key.to_string(), value.to_string())
    }

    pub fn child(&self, name: &str) -> Option<TagId> {
        self.children.get(name).copied()
    }

    /// Children in name order
    pub fn children(&self) -> impl Iterator<Item = TagId> + '_ {
        self.children.values().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TagTree {
    tags: Vec<Tag>,
    roots: BTreeMap<String, TagId>,
}

impl TagTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) a top-level tag
    pub fn insert_root(&mut self, name: &str) -> TagId {
        let id = self.alloc(name, None);
        self.roots.insert(name.to_string(), id);
        id
    }

    /// Create (or replace) a child of `parent`
    pub fn insert_child(&mut self, parent: TagId, name: &str) -> TagId {
        let id = self.alloc(name, Some(parent));
        self.tags[parent.0].children.insert(name.to_string(), id);
        id
    }

    fn alloc(&mut self, name: &str, parent: Option<TagId>) -> TagId {
        let id = TagId(self.tags.len());
        self.tags.push(Tag::new(name, parent));
        id
    }

    /// Ids are only handed out by this tree, so indexing cannot go out of bounds
    /// unless an id from another tree is used.
    pub fn tag(&self, id: TagId) -> &Tag {
        &self.tags[id.0]
    }

    pub fn tag_mut(&mut self, id: TagId) -> &mut Tag {
        &mut self.tags[id.0]
    }

    pub fn root(&self, name: &str) -> Option<TagId> {
        self.roots.get(name).copied()
    }

    /// Root tags in name order
    pub fn roots(&self) -> impl Iterator<Item = TagId> + '_ {
        self.roots.values().copied()
    }

    /// Look up `name` among the children of `parent`, or among the roots when `parent` is `None`
    pub fn child_of(&self, parent: Option<TagId>, name: &str) -> Option<TagId> {
        match parent {
            Some(id) => self.tag(id).child(name),
            None => self.root(name),
        }
    }

    /// Walk `path` from the roots down, one segment per level.
    ///
    /// Returns `None` on an empty path or at the first segment that does not exist, warning
    /// about the missing segment.
    pub fn lookup<S: AsRef<str>>(
        &self,
        path: &[S],
        diagnostics: &dyn Diagnostics,
    ) -> Option<TagId> {
        let mut current = None;
        for segment in path {
            let segment = segment.as_ref();
            match self.child_of(current, segment) {
                Some(id) => current = Some(id),
                None => {
                    diagnostics.warning(&format!("Tag could not be found, tag: {}", segment));
                    return None;
                }
            }
        }
        current
    }

    /// Number of ancestors of `id`
    pub fn depth(&self, id: TagId) -> usize {
        let mut depth = 0;
        let mut current = self.tag(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.tag(parent).parent;
        }
        depth
    }

    /// Number of tags reachable from the roots
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<TagId> = self.roots().collect();
        while let Some(id) = pending.pop() {
            count += 1;
            pending.extend(self.tag(id).children());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hrml::diagnostics::{CollectingDiagnostics, NullDiagnostics};

    fn sample() -> (TagTree, TagId, TagId) {
        let mut tree = TagTree::new();
        let a = tree.insert_root("a");
        let b = tree.insert_child(a, "b");
        tree.insert_root("c");
        (tree, a, b)
    }

    #[test]
    fn test_insert_sets_parent_links() {
        let (tree, a, b) = sample();
        assert_eq!(tree.tag(b).parent(), Some(a));
        assert_eq!(tree.tag(a).parent(), None);
        assert_eq!(tree.tag(a).child("b"), Some(b));
        assert_eq!(tree.depth(b), 1);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_lookup_descends_from_roots() {
        let (tree, _, b) = sample();
        assert_eq!(tree.lookup(&["a", "b"], &NullDiagnostics), Some(b));
        assert!(tree.lookup(&["c"], &NullDiagnostics).is_some());
        assert_eq!(tree.lookup::<&str>(&[], &NullDiagnostics), None);
    }

    #[test]
    fn test_lookup_miss_warns_once() {
        let (tree, _, _) = sample();
        let sink = CollectingDiagnostics::new();
        assert_eq!(tree.lookup(&["a", "x", "b"], &sink), None);
        assert_eq!(sink.warnings(), vec!["Tag could not be found, tag: x"]);
    }

    #[test]
    fn test_reinsert_replaces_sibling() {
        let (mut tree, a, old_b) = sample();
        tree.tag_mut(old_b).set_attribute("k", "v");
        let new_b = tree.insert_child(a, "b");

        assert_ne!(old_b, new_b);
        assert_eq!(tree.tag(a).child("b"), Some(new_b));
        assert_eq!(tree.tag(new_b).attribute("k"), None);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let (mut tree, a, _) = sample();
        assert_eq!(tree.tag_mut(a).set_attribute("x", "1"), None);
        assert_eq!(
            tree.tag_mut(a).set_attribute("x", "2"),
            Some("1".to_string())
        );
        assert_eq!(tree.tag(a).attribute("x"), Some("2"));
    }
}
