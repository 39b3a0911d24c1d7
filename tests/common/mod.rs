//! Shared fixtures for Mason integration tests.
//!
//! Provides a replay walker and a canned rule generator so scenarios can
//! drive the assembly core without touching the filesystem.

use std::collections::BTreeMap;
use std::path::Path;

use mason::{CallExpr, Expr, Package, PackageWalker, Rule, RuleGenerator};

/// Walker that replays a fixed list of package directories.
pub struct StaticWalker {
    pub dirs: Vec<String>,
}

impl StaticWalker {
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }
}

impl PackageWalker for StaticWalker {
    fn walk(&self, _root: &Path, on_package: &mut dyn FnMut(&Package)) {
        for dir in &self.dirs {
            on_package(&Package::new(dir.clone()));
        }
    }
}

/// Rule generator serving canned kinds keyed by relative directory.
pub struct TableRules {
    pub kinds: BTreeMap<String, Vec<String>>,
}

impl TableRules {
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Vec<&'a str>)>,
    {
        Self {
            kinds: entries
                .into_iter()
                .map(|(dir, kinds)| {
                    (
                        dir.to_string(),
                        kinds.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl RuleGenerator for TableRules {
    fn generate(&self, rel: &str, _pkg: &Package) -> Vec<Rule> {
        self.kinds
            .get(rel)
            .map(|kinds| kinds.iter().map(|kind| rule(kind)).collect())
            .unwrap_or_default()
    }
}

/// A minimal invocation of `kind`, named after the kind.
pub fn rule(kind: &str) -> Rule {
    Rule::new(
        kind,
        CallExpr::new(kind).kwarg("name", Expr::string(format!("{}_target", kind))),
    )
}
