//! # Treesnap
//!
//! `treesnap` captures a directory tree, structure and file contents, into a single
//! structured document. Paths matching the patterns of a `.gitignore`-style file at the
//! root are left out; excluded directories are pruned before they are ever listed.
//!
//! The pipeline has three stages:
//!
//! - [`load_exclusions`] reads the ignore file into an [`ExclusionSet`].
//! - [`walk`] traverses the tree depth-first and builds a [`DirectoryNode`]. Files that
//!   cannot be read are kept, with a [`ReadFailure`] in place of their content.
//! - [`output::write_tree_to_file`] writes the tree as an indented JSON document.
//!
//! [`generate`] runs all three for a [`SnapshotOptions`].
//!
//! # Features
//!
//! - `logging` (default): emits debug and warning events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treesnap::{SnapshotBuilder, generate};
//!
//! let options = SnapshotBuilder::new(".")
//!     .ignore_file(".gitignore")
//!     .output_file("estrutura.yaml")
//!     .indent(4)
//!     .build();
//!
//! let written = generate(&options).expect("Failed to snapshot directory");
//! println!("Snapshot written to {}", written.display());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod patterns;
mod tree;
mod types;

pub use engine::{generate, snapshot, walk};
pub use error::SnapshotError;
pub use options::{
    DEFAULT_IGNORE_FILE, DEFAULT_INDENT, DEFAULT_OUTPUT_FILE, SnapshotBuilder, SnapshotOptions,
};
pub use patterns::{ExclusionPattern, ExclusionSet, load_exclusions};
pub use tree::{DirectoryNode, TreeNode};
pub use types::{FileContent, ReadFailure};
