//! Serialization of a snapshot into its on-disk document.
//!
//! The document is JSON: directories become objects, files become strings, keys keep the
//! walk order and non-ASCII text is written as-is. Any JSON reader (and any YAML 1.2
//! reader) parses it back into the same nested shape.

use crate::SnapshotError;
use crate::tree::DirectoryNode;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Renders the tree as an indented document, `indent` spaces per nesting level.
pub fn format_tree(tree: &DirectoryNode, indent: usize) -> Result<String, SnapshotError> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::with_capacity(1024);
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    tree.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Renders the tree and writes it to `path` in one write.
pub fn write_tree_to_file(
    tree: &DirectoryNode,
    path: impl AsRef<Path>,
    indent: usize,
) -> Result<(), SnapshotError> {
    let content = format_tree(tree, indent)?;
    fs::write(&path, content).map_err(|e| SnapshotError::io(path.as_ref(), e))?;
    Ok(())
}
