//! Discovered packages and the walking collaborator contract
//!
//! `PackageWalker` is the discovery seam: the generator core never
//! traverses the repository itself. `FsWalker` is a batteries-included
//! implementation for callers that want gitignore-aware filesystem
//! discovery; anything that can replay packages into a callback (a test
//! fixture, a cached index, a VCS listing) satisfies the trait equally.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A directory-scoped grouping of source files built as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Absolute directory of the package within the repository
    pub dir: PathBuf,
}

impl Package {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Yields discovered packages to a per-package callback.
///
/// The callback is invoked exactly once per package, synchronously; each
/// invocation completes before the next package is delivered. Callers must
/// not assume any particular traversal order.
pub trait PackageWalker {
    fn walk(&self, root: &Path, on_package: &mut dyn FnMut(&Package));
}

/// Filesystem walker yielding one package per directory that contains at
/// least one file with a configured source extension.
///
/// Built on the `ignore` crate, so `.gitignore` rules and hidden-file
/// conventions apply. Traversal errors (unreadable directories, broken
/// symlinks) are logged and skipped.
#[derive(Debug, Clone)]
pub struct FsWalker {
    extensions: Vec<String>,
}

impl FsWalker {
    /// Create a walker recognizing files with any of `extensions`
    /// (without the leading dot).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|want| want == ext))
    }
}

impl PackageWalker for FsWalker {
    fn walk(&self, root: &Path, on_package: &mut dyn FnMut(&Package)) {
        let mut dirs = BTreeSet::new();
        for entry in WalkBuilder::new(root).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            let is_file = entry.file_type().is_some_and(|ty| ty.is_file());
            if is_file && self.is_source(entry.path()) {
                if let Some(dir) = entry.path().parent() {
                    dirs.insert(dir.to_path_buf());
                }
            }
        }
        for dir in dirs {
            on_package(&Package::new(dir));
        }
    }
}
