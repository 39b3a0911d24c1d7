//! Root fallback file synthesis
//!
//! Downstream tooling expects a root build file declaring the repository's
//! import prefix even when the root directory itself has no buildable
//! sources. When a walk finishes without touching the root, the generator
//! appends the file built here.

use std::path::PathBuf;

use crate::config::{Config, DEFAULT_RULES_SOURCE, PREFIX_KIND};
use crate::generator::BuildFile;
use crate::load::load_expr;
use crate::syntax::{CallExpr, Expr};

/// Synthesize the root build file: a load statement naming only the
/// prefix-declaration kind, followed by one invocation of that kind
/// populated with the configured prefix.
pub fn fallback_file(config: &Config) -> BuildFile {
    let source = config
        .load_table
        .source_for(PREFIX_KIND)
        .unwrap_or(DEFAULT_RULES_SOURCE);
    BuildFile {
        path: PathBuf::from(&config.build_file_name),
        statements: vec![
            load_expr(source, &[PREFIX_KIND]),
            Expr::Call(CallExpr::new(PREFIX_KIND).arg(Expr::string(config.prefix.clone()))),
        ],
    }
}
