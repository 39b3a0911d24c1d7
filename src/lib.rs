//! Mason - declarative build-file generator
//!
//! Mason assembles per-directory build-configuration files for a source
//! repository from already-discovered package metadata and already-computed
//! build rules. It decides which `load` statement each file needs, fixes
//! statement ordering, and guarantees a root-level build file always exists
//! even when the repository root has no buildable sources.
//!
//! Discovery and rule inference are collaborator concerns: callers supply a
//! [`PackageWalker`] and a [`RuleGenerator`] and receive an ordered list of
//! [`BuildFile`]s. Serializing statements into the target syntax and writing
//! them to disk is left to the consumer.

pub mod config;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod load;
pub mod package;
pub mod rules;
pub mod syntax;

// Re-exports for convenience
pub use config::{Config, LoadTable, DEFAULT_BUILD_FILE_NAME, DEFAULT_RULES_SOURCE, PREFIX_KIND};
pub use error::{MasonError, MasonResult};
pub use fallback::fallback_file;
pub use generator::{BuildFile, Generator};
pub use load::{load_expr, LoadStatementBuilder};
pub use package::{FsWalker, Package, PackageWalker};
pub use rules::{Rule, RuleGenerator};
pub use syntax::{CallExpr, Expr};
