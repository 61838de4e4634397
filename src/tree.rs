//! The in-memory snapshot: a tree of directories whose leaves are file contents.

use crate::error::SnapshotError;
use crate::types::FileContent;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::{Component, Path};

/// A node of the snapshot: a directory or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(DirectoryNode),
    File(FileContent),
}

impl TreeNode {
    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            TreeNode::Directory(dir) => Some(dir),
            TreeNode::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileContent> {
        match self {
            TreeNode::File(content) => Some(content),
            TreeNode::Directory(_) => None,
        }
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeNode::Directory(dir) => dir.serialize(serializer),
            TreeNode::File(content) => content.serialize(serializer),
        }
    }
}

/// A directory's entries, kept in the order the walk inserted them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    entries: Vec<(String, TreeNode)>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, node: TreeNode) -> Result<(), SnapshotError> {
        if self.get(&name).is_some() {
            return Err(SnapshotError::DuplicateEntry(name));
        }
        self.entries.push((name, node));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    /// Looks up a node by its path relative to this directory.
    pub fn lookup(&self, relative: impl AsRef<Path>) -> Option<&TreeNode> {
        let mut current: Option<&TreeNode> = None;
        for component in relative.as_ref().components() {
            let Component::Normal(name) = component else {
                continue;
            };
            let dir = match current {
                None => self,
                Some(node) => node.as_directory()?,
            };
            current = Some(dir.get(&name.to_string_lossy())?);
        }
        current
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts files anywhere below this directory.
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                TreeNode::Directory(dir) => dir.file_count(),
                TreeNode::File(_) => 1,
            })
            .sum()
    }
}

impl Serialize for DirectoryNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

/// Assembles a [`DirectoryNode`] from a depth-first stream of entries.
///
/// Entries arrive with their depth below the root (children of the root are at depth 1).
/// Open directories sit on a stack; an entry at depth `d` first closes every directory
/// deeper than `d - 1` into its parent.
pub(crate) struct TreeBuilder {
    stack: Vec<(String, DirectoryNode)>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            stack: vec![(String::new(), DirectoryNode::new())],
        }
    }

    pub(crate) fn enter_dir(&mut self, depth: usize, name: String) -> Result<(), SnapshotError> {
        self.close_to(depth)?;
        self.stack.push((name, DirectoryNode::new()));
        Ok(())
    }

    pub(crate) fn add_file(
        &mut self,
        depth: usize,
        name: String,
        content: FileContent,
    ) -> Result<(), SnapshotError> {
        self.close_to(depth)?;
        match self.stack.last_mut() {
            Some((_, dir)) => dir.insert(name, TreeNode::File(content)),
            None => Ok(()),
        }
    }

    pub(crate) fn finish(mut self) -> Result<DirectoryNode, SnapshotError> {
        self.close_to(1)?;
        Ok(self
            .stack
            .pop()
            .map(|(_, root)| root)
            .unwrap_or_default())
    }

    fn close_to(&mut self, depth: usize) -> Result<(), SnapshotError> {
        while self.stack.len() > depth.max(1) {
            if let Some((name, dir)) = self.stack.pop() {
                if let Some((_, parent)) = self.stack.last_mut() {
                    parent.insert(name, TreeNode::Directory(dir))?;
                }
            }
        }
        Ok(())
    }
}
