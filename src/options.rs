use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";
pub const DEFAULT_OUTPUT_FILE: &str = "estrutura.yaml";
pub const DEFAULT_INDENT: usize = 4;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotOptions {
    pub root: PathBuf,
    pub ignore_file: String,
    pub output_file: PathBuf,
    pub indent: usize,
}
impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            indent: DEFAULT_INDENT,
        }
    }
}
impl SnapshotOptions {
    /// Where the snapshot document lands: `output_file` resolved against `root`.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_file)
    }
}
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    options: SnapshotOptions,
}
impl SnapshotBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapshotOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.options.ignore_file = name.into();
        self
    }
    pub fn output_file(mut self, path: impl AsRef<Path>) -> Self {
        self.options.output_file = path.as_ref().to_path_buf();
        self
    }
    pub fn indent(mut self, width: usize) -> Self {
        self.options.indent = width;
        self
    }
    pub fn build(self) -> SnapshotOptions {
        self.options
    }
}
