//! JSON output of the tree snapshot

use crate::hrml::error::HrmlError;
use crate::hrml::snapshot::snapshot_from_tree;
use crate::hrml::tree::TagTree;

pub fn to_json_str(tree: &TagTree) -> Result<String, HrmlError> {
    let snapshot = snapshot_from_tree(tree);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
