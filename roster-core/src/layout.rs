//! Per-run repository layout.
//!
//! The resolved root, README path, and excluded-filename set are passed
//! explicitly into both the mapping loader and the reconciler driver; no
//! component reads process-wide state. Lifecycle is a single run.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Extension (without dot) an agent file must carry to be scanned.
pub const AGENT_FILE_EXT: &str = "md";

/// Markdown files at the repo root that are never agent declarations.
pub const DEFAULT_EXCLUDED: [&str; 2] = ["README.md", "WARP.md"];

/// Resolved filesystem layout for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    /// Repository root holding the agent files.
    pub root: PathBuf,
    /// The README containing the agent table.
    pub readme: PathBuf,
    /// Filenames excluded from the agent scan (case-sensitive match).
    pub excluded: BTreeSet<String>,
}

impl RepoLayout {
    /// Layout rooted at `root` with the default README path and exclusions.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let readme = root.join("README.md");
        let excluded = DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect();
        Self {
            root,
            readme,
            excluded,
        }
    }

    /// Replace the excluded-filename set.
    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `name` is excluded from the agent scan.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }
}

impl AsRef<Path> for RepoLayout {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_points_at_readme() {
        let layout = RepoLayout::at("/repo");
        assert_eq!(layout.readme, PathBuf::from("/repo/README.md"));
        assert!(layout.is_excluded("README.md"));
        assert!(layout.is_excluded("WARP.md"));
    }

    #[test]
    fn exclusion_is_case_sensitive() {
        let layout = RepoLayout::at("/repo");
        assert!(!layout.is_excluded("readme.md"));
        assert!(!layout.is_excluded("warp.md"));
    }

    #[test]
    fn with_excluded_replaces_the_set() {
        let layout = RepoLayout::at("/repo").with_excluded(["NOTES.md"]);
        assert!(layout.is_excluded("NOTES.md"));
        assert!(!layout.is_excluded("README.md"));
    }
}
