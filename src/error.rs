//! Error types for Mason
//!
//! Uses `thiserror` for library errors. Path resolution is the only
//! operation in the core that can fail; the generator logs these errors
//! and skips the affected package rather than aborting the run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mason operations
pub type MasonResult<T> = Result<T, MasonError>;

/// Main error type for Mason operations
#[derive(Error, Debug)]
pub enum MasonError {
    /// Package directory cannot be expressed relative to the repository root
    #[error("package directory '{dir}' is not under repository root '{root}'")]
    OutsideRoot { dir: PathBuf, root: PathBuf },

    /// Package directory contains a component that is not valid Unicode
    #[error("package directory '{dir}' contains a non-Unicode path component")]
    NonUnicodePath { dir: PathBuf },
}
