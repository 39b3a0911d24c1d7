//! Build rules and the rule-generation collaborator contract

use serde::{Deserialize, Serialize};

use crate::package::Package;
use crate::syntax::CallExpr;

/// A single declarative build invocation for one target.
///
/// The call expression is opaque to the generator core: only `kind` is
/// inspected, to decide what the file's `load` statement must import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Kind identifier, e.g. `library` or `test`
    pub kind: String,
    /// The rule's call expression, emitted verbatim
    pub call: CallExpr,
}

impl Rule {
    pub fn new(kind: impl Into<String>, call: CallExpr) -> Self {
        Self {
            kind: kind.into(),
            call,
        }
    }
}

/// Computes the ordered rule list for one package.
///
/// `rel` is the package directory relative to the repository root, always
/// normalized to forward slashes regardless of the host separator; it is
/// empty for the root itself. Implementations are expected to be pure:
/// Mason may call `generate` repeatedly with the same arguments and
/// preserves the returned order in the emitted file.
pub trait RuleGenerator {
    fn generate(&self, rel: &str, pkg: &Package) -> Vec<Rule>;
}
