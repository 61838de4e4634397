//! Loading `.gitignore`-style exclusion patterns and testing paths against them.
//!
//! Each pattern excludes a path when it either equals one of the path's segments or
//! glob-matches the path. Globs without a leading `/` match the whole relative path or
//! any trailing run of its segments, so `*.log` excludes `a/b/debug.log`. A leading `/`
//! anchors the glob to the base directory.
//!
//! A trailing `/` is stripped from the pattern text but remembered: such patterns only
//! ever exclude directories.

use crate::error::SnapshotError;
use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::path::{Component, Path};

/// A single line of the ignore file, normalized.
#[derive(Debug, Clone)]
pub struct ExclusionPattern {
    text: String,
    directory_only: bool,
    matcher: Option<GlobMatcher>,
}

impl ExclusionPattern {
    /// Normalizes one raw line. Returns `None` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let directory_only = line.ends_with('/');
        let text = line.trim_end_matches('/');
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            directory_only,
            matcher: compile_glob(text),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_directory_only(&self) -> bool {
        self.directory_only
    }

    /// Whether the pattern compiled as a glob. Uncompiled patterns still match by segment.
    pub fn is_glob(&self) -> bool {
        self.matcher.is_some()
    }

    fn matches(&self, segments: &[String], joined: &str, is_dir: bool) -> bool {
        if !self.directory_only {
            return segments.iter().any(|s| *s == self.text) || self.glob_matches(joined);
        }
        // Every directory on the path is a candidate; a file's own name never is.
        let dirs = if is_dir {
            segments.len()
        } else {
            segments.len().saturating_sub(1)
        };
        (1..=dirs).any(|n| {
            let dir = &segments[..n];
            dir[n - 1] == self.text || self.glob_matches(&dir.join("/"))
        })
    }

    fn glob_matches(&self, path: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(path))
    }
}

fn compile_glob(text: &str) -> Option<GlobMatcher> {
    let glob = match text.strip_prefix('/') {
        Some(anchored) => anchored.to_string(),
        None if text.starts_with("**/") => text.to_string(),
        None => format!("**/{}", text),
    };
    match GlobBuilder::new(&glob).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Pattern '{}' is not a valid glob, matching by name only: {}", text, _e);
            None
        }
    }
}

/// The set of patterns loaded from the ignore file. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<ExclusionPattern>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from ignore-file content, one pattern per line.
    pub fn parse(content: &str) -> Self {
        let mut set = Self::new();
        for pattern in content.lines().filter_map(ExclusionPattern::parse) {
            set.insert(pattern);
        }
        set
    }

    fn insert(&mut self, pattern: ExclusionPattern) {
        let duplicate = self.patterns.iter().any(|p| {
            p.text == pattern.text && p.directory_only == pattern.directory_only
        });
        if !duplicate {
            self.patterns.push(pattern);
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExclusionPattern> {
        self.patterns.iter()
    }

    /// Tests a path relative to the base directory.
    ///
    /// The empty path (the base directory itself) is never excluded.
    pub fn is_excluded(&self, relative: &Path, is_dir: bool) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if segments.is_empty() {
            return false;
        }
        let joined = segments.join("/");
        self.patterns
            .iter()
            .any(|p| p.matches(&segments, &joined, is_dir))
    }
}

/// Reads `ignore_file` from `root`. A missing file yields an empty set; any other
/// failure to read or decode it is an error.
pub fn load_exclusions(root: &Path, ignore_file: &str) -> Result<ExclusionSet, SnapshotError> {
    let path = root.join(ignore_file);
    if !path.exists() {
        #[cfg(feature = "logging")]
        tracing::debug!("No ignore file at {}, nothing excluded", path.display());
        return Ok(ExclusionSet::new());
    }
    let content = fs::read_to_string(&path).map_err(|e| SnapshotError::io(&path, e))?;
    let set = ExclusionSet::parse(&content);
    #[cfg(feature = "logging")]
    tracing::debug!("Loaded {} exclusion patterns from {}", set.len(), path.display());
    Ok(set)
}
