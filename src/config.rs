//! Configuration for the generator core
//!
//! All configuration is supplied read-only by the caller: the absolute
//! repository root, the build-file name, the repository import prefix used
//! by the fallback file, and the load vocabulary table mapping recognized
//! rule kinds to the import source that provides them. Mason reads no
//! environment variables and keeps no process-wide state.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default name of the generated build file in each directory
pub const DEFAULT_BUILD_FILE_NAME: &str = "BUILD";

/// Default import source providing the recognized rule kinds
pub const DEFAULT_RULES_SOURCE: &str = "//build:rules.bzl";

/// The rule kind declaring the repository-wide import prefix
pub const PREFIX_KIND: &str = "repo_prefix";

/// Rule kinds recognized by the default vocabulary
pub const DEFAULT_KINDS: [&str; 5] = [
    PREFIX_KIND,
    "library",
    "binary",
    "test",
    "foreign_library",
];

/// Vocabulary table mapping rule kinds to the import source providing them.
///
/// Modeled as a table rather than inline branches so adding kinds, or
/// splitting kinds across sources, is a data edit rather than an algorithm
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadTable {
    sources: BTreeMap<String, String>,
}

impl LoadTable {
    /// An empty vocabulary recognizing no kinds.
    pub fn empty() -> Self {
        Self {
            sources: BTreeMap::new(),
        }
    }

    /// A vocabulary where every kind in `kinds` is provided by `source`.
    pub fn with_source<I, S>(source: &str, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::empty();
        for kind in kinds {
            table.insert(kind, source);
        }
        table
    }

    /// Register `kind` as provided by `source`.
    pub fn insert(&mut self, kind: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(kind.into(), source.into());
    }

    /// The import source providing `kind`, if recognized.
    pub fn source_for(&self, kind: &str) -> Option<&str> {
        self.sources.get(kind).map(String::as_str)
    }

    /// All `(kind, source)` entries in lexicographic kind order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources
            .iter()
            .map(|(kind, source)| (kind.as_str(), source.as_str()))
    }

    /// Number of recognized kinds.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the vocabulary recognizes no kinds.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for LoadTable {
    fn default() -> Self {
        Self::with_source(DEFAULT_RULES_SOURCE, DEFAULT_KINDS)
    }
}

/// Generator configuration, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the repository root
    pub repo_root: PathBuf,

    /// Repository-wide import prefix declared by the fallback root file
    #[serde(default)]
    pub prefix: String,

    /// Name of the generated build file in each directory
    #[serde(default = "default_build_file_name")]
    pub build_file_name: String,

    /// Recognized rule kinds and the import sources providing them
    #[serde(default)]
    pub load_table: LoadTable,
}

fn default_build_file_name() -> String {
    DEFAULT_BUILD_FILE_NAME.to_string()
}

impl Config {
    /// Create a configuration with the default build-file name and
    /// vocabulary.
    pub fn new(repo_root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            repo_root: repo_root.into(),
            prefix: prefix.into(),
            build_file_name: default_build_file_name(),
            load_table: LoadTable::default(),
        }
    }
}
