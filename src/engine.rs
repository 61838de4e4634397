use crate::error::SnapshotError;
use crate::options::SnapshotOptions;
use crate::output::write_tree_to_file;
use crate::patterns::{ExclusionSet, load_exclusions};
use crate::tree::{DirectoryNode, TreeBuilder};
use crate::types::{FileContent, ReadFailure};
use ignore::{DirEntry, WalkBuilder};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, exclusions: &ExclusionSet, skip: Option<&Path>) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(files_first);
        let base = root.to_path_buf();
        let exclusions = exclusions.clone();
        let skip = skip.map(Path::to_path_buf);
        builder.filter_entry(move |entry| keep_entry(entry, &base, &exclusions, skip.as_deref()));
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<DirEntry, SnapshotError>> {
        self.inner
            .map(|result| result.map_err(|e| SnapshotError::Walk(e.to_string())))
    }
}
/// Files before subdirectories, each group by name.
fn files_first(a: &Path, b: &Path) -> Ordering {
    a.is_dir()
        .cmp(&b.is_dir())
        .then_with(|| a.file_name().cmp(&b.file_name()))
}
fn keep_entry(entry: &DirEntry, base: &Path, exclusions: &ExclusionSet, skip: Option<&Path>) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if skip.is_some_and(|s| s == entry.path()) {
        return false;
    }
    let Ok(relative) = entry.path().strip_prefix(base) else {
        return true;
    };
    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
    if exclusions.is_excluded(relative, is_dir) {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Excluded {} {}",
            if is_dir { "directory" } else { "file" },
            relative.display()
        );
        return false;
    }
    true
}
fn read_file_content(path: &Path) -> Result<String, ReadFailure> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
/// Walks `root` depth-first and captures every file not excluded by `exclusions`.
///
/// Excluded directories are pruned before they are listed. Files that cannot be read
/// are recorded with a [`ReadFailure`] instead of aborting the walk. `skip` names a
/// single path left out regardless of the patterns.
///
/// # Errors
///
/// Returns [`SnapshotError::Walk`] if a directory cannot be enumerated, and
/// [`SnapshotError::NonUtf8Name`] for a name that cannot become a document key.
pub fn walk(
    root: &Path,
    exclusions: &ExclusionSet,
    skip: Option<&Path>,
) -> Result<DirectoryNode, SnapshotError> {
    let mut tree = TreeBuilder::new();
    for entry in Walker::new(root, exclusions, skip).into_iter() {
        let entry = entry?;
        let depth = entry.depth();
        if depth == 0 {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            return Err(SnapshotError::NonUtf8Name(entry.path().to_path_buf()));
        };
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            tree.enter_dir(depth, name)?;
            continue;
        }
        if file_type.is_symlink() && entry.path().is_dir() {
            #[cfg(feature = "logging")]
            tracing::debug!("Not following directory link {}", entry.path().display());
            continue;
        }
        let content = FileContent::from(read_file_content(entry.path()));
        if let FileContent::Unreadable(_failure) = &content {
            #[cfg(feature = "logging")]
            tracing::warn!("Could not read {}: {}", entry.path().display(), _failure.message());
        }
        tree.add_file(depth, name, content)?;
    }
    tree.finish()
}
/// Loads the exclusion patterns for `options.root` and walks it.
///
/// The configured output document is left out of the walk, so a snapshot never
/// contains a previous snapshot.
pub fn snapshot(options: &SnapshotOptions) -> Result<DirectoryNode, SnapshotError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting snapshot with root: {}", options.root.display());
    let exclusions = load_exclusions(&options.root, &options.ignore_file)?;
    let output = options.output_path();
    walk(&options.root, &exclusions, Some(&output))
}
/// Runs the whole pipeline and returns the path of the written document.
pub fn generate(options: &SnapshotOptions) -> Result<PathBuf, SnapshotError> {
    let tree = snapshot(options)?;
    let output = options.output_path();
    write_tree_to_file(&tree, &output, options.indent)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} files to {}",
        tree.file_count(),
        output.display()
    );
    Ok(output)
}
