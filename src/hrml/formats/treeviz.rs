//! Treeviz formatter for tag trees
//!
//! One line per tag, nesting drawn with box connectors, attributes listed after the name:
//!
//! ```text
//! ⧉ Document (2 roots)
//! ├─ ◇ a x="1"
//! │ └─ ◇ b
//! └─ ◇ c
//! ```
//!
//! Attribute values longer than 30 characters are truncated.

use crate::hrml::snapshot::{snapshot_from_tree, DocumentSnapshot, TagSnapshot};
use crate::hrml::tree::TagTree;

const MAX_VALUE_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(snapshot: &TagSnapshot) -> String {
    let mut label = snapshot.name.clone();
    for (key, value) in &snapshot.attributes {
        label.push_str(&format!(" {}=\"{}\"", key, truncate(value, MAX_VALUE_CHARS)));
    }
    label
}

fn format_snapshot(
    snapshot: &TagSnapshot,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format!("{}{} ◇ {}\n", prefix, connector, label(snapshot));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, &child_prefix, i, child_count));
    }

    output
}

fn format_document_snapshot(snapshot: &DocumentSnapshot) -> String {
    let count = snapshot.roots.len();
    let noun = if count == 1 { "root" } else { "roots" };
    let mut output = format!("⧉ Document ({} {})\n", count, noun);

    for (i, root) in snapshot.roots.iter().enumerate() {
        output.push_str(&format_snapshot(root, "", i, count));
    }

    output
}

pub fn to_treeviz_str(tree: &TagTree) -> String {
    format_document_snapshot(&snapshot_from_tree(tree))
}
