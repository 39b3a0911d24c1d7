//! Build-file assembly
//!
//! The orchestration core: drives the package walker, asks the rule
//! generator for each package's rules, and assembles one [`BuildFile`] per
//! package with its load statement first. When the walk never touched the
//! repository root, a fallback root file is appended last.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::error::{MasonError, MasonResult};
use crate::fallback::fallback_file;
use crate::load::LoadStatementBuilder;
use crate::package::{Package, PackageWalker};
use crate::rules::RuleGenerator;
use crate::syntax::Expr;

/// One generated build file: its repository-relative path and ordered
/// statements.
///
/// Serializing `statements` into the target declarative syntax and
/// persisting the result to `path` is the consumer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFile {
    pub path: PathBuf,
    pub statements: Vec<Expr>,
}

/// Generates build files for every package a walker discovers.
pub struct Generator<G> {
    config: Config,
    rules: G,
}

impl<G: RuleGenerator> Generator<G> {
    pub fn new(config: Config, rules: G) -> Self {
        Self { config, rules }
    }

    /// Generate one build file per package discovered by `walker`, in the
    /// walker's order, plus a fallback root file when no package occupied
    /// the repository root.
    ///
    /// Packages whose directory cannot be expressed relative to the
    /// configured root are logged and skipped; the result is always a
    /// best-effort, possibly partial list.
    pub fn generate<W: PackageWalker>(&self, walker: &W) -> Vec<BuildFile> {
        let mut files = Vec::new();
        let mut have_root_file = false;

        walker.walk(&self.config.repo_root, &mut |pkg| {
            let rel = match self.relative_dir(pkg) {
                Ok(rel) => rel,
                Err(err) => {
                    warn!(dir = %pkg.dir.display(), %err, "skipping package");
                    return;
                }
            };
            if rel.is_empty() {
                have_root_file = true;
            }
            files.push(self.generate_one(&rel, pkg));
        });

        if !have_root_file {
            // The root directory had no buildable sources, but a root file
            // declaring the repository prefix must still exist.
            files.push(fallback_file(&self.config));
        }

        files
    }

    /// Assemble the build file for one package.
    fn generate_one(&self, rel: &str, pkg: &Package) -> BuildFile {
        let rules = self.rules.generate(rel, pkg);

        let path = if rel.is_empty() {
            PathBuf::from(&self.config.build_file_name)
        } else {
            Path::new(rel).join(&self.config.build_file_name)
        };

        let mut statements: Vec<Expr> = rules.into_iter().map(|r| Expr::Call(r.call)).collect();
        let loads = LoadStatementBuilder::new(&self.config.load_table).build(&statements);
        statements.splice(0..0, loads);

        BuildFile { path, statements }
    }

    /// Express the package directory relative to the repository root, in
    /// forward-slash form. Empty string means the root itself.
    fn relative_dir(&self, pkg: &Package) -> MasonResult<String> {
        let rel = pkg
            .dir
            .strip_prefix(&self.config.repo_root)
            .map_err(|_| MasonError::OutsideRoot {
                dir: pkg.dir.clone(),
                root: self.config.repo_root.clone(),
            })?;

        let mut parts = Vec::new();
        for component in rel.components() {
            match component {
                Component::Normal(part) => match part.to_str() {
                    Some(part) => parts.push(part),
                    None => {
                        return Err(MasonError::NonUnicodePath {
                            dir: pkg.dir.clone(),
                        })
                    }
                },
                Component::CurDir => {}
                // `..`, a second root, or a drive prefix would escape the
                // repository.
                _ => {
                    return Err(MasonError::OutsideRoot {
                        dir: pkg.dir.clone(),
                        root: self.config.repo_root.clone(),
                    })
                }
            }
        }
        Ok(parts.join("/"))
    }
}
