//! Load-statement synthesis
//!
//! Computes the minimal `load` statement a build file needs: the subset of
//! recognized kinds actually invoked in the file, each named once, sorted
//! lexicographically. The result depends only on which kinds are present,
//! never on rule order or multiplicity, so equal kind sets always produce
//! identical statements.

use std::collections::BTreeMap;

use crate::config::LoadTable;
use crate::syntax::{CallExpr, Expr};

/// Builds minimal load statements from a file's statement list.
pub struct LoadStatementBuilder<'a> {
    table: &'a LoadTable,
}

impl<'a> LoadStatementBuilder<'a> {
    pub fn new(table: &'a LoadTable) -> Self {
        Self { table }
    }

    /// Compute the load statements required by `statements`.
    ///
    /// Returns at most one statement per distinct import source, ordered by
    /// source; with a single-source vocabulary that is at most one statement
    /// total. Empty when no recognized kind is invoked.
    pub fn build(&self, statements: &[Expr]) -> Vec<Expr> {
        let mut by_source: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (kind, source) in self.table.entries() {
            let invoked = statements
                .iter()
                .any(|stmt| stmt.call_function() == Some(kind));
            if invoked {
                by_source.entry(source).or_default().push(kind);
            }
        }
        by_source
            .into_iter()
            .map(|(source, kinds)| load_expr(source, &kinds))
            .collect()
    }
}

/// Construct one compact `load` call importing `kinds` from `source`.
///
/// Kinds are sorted and deduplicated here so every caller gets the same
/// deterministic rendering.
pub fn load_expr(source: &str, kinds: &[&str]) -> Expr {
    let mut kinds = kinds.to_vec();
    kinds.sort_unstable();
    kinds.dedup();

    let mut call = CallExpr::new("load").arg(Expr::string(source));
    for kind in kinds {
        call = call.arg(Expr::string(kind));
    }
    Expr::Call(call)
}
