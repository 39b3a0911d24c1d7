//! Minimal declarative-expression model
//!
//! A small, self-owned representation of the statements Mason emits: rule
//! invocations and `load` statements. Owning this model keeps the generator
//! decoupled from any one build tool's native AST library. Consumers
//! serialize expressions into their target syntax; the compact `Display`
//! form exists for tests and quick inspection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A declarative expression: the building block of build-file statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// A quoted string literal
    String(String),
    /// A bare token rendered verbatim (identifiers, numbers, booleans)
    Literal(String),
    /// A bracketed list of expressions
    List(Vec<Expr>),
    /// A function invocation
    Call(CallExpr),
}

impl Expr {
    /// Convenience constructor for a string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    /// The function name if this expression is a call, `None` otherwise.
    pub fn call_function(&self) -> Option<&str> {
        match self {
            Expr::Call(call) => Some(&call.function),
            _ => None,
        }
    }
}

/// A function invocation with positional and keyword arguments.
///
/// Rule invocations are typically all-keyword (`library(name = "x", ...)`)
/// while `load` statements are all-positional; both shapes share this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
    pub function: String,
    pub args: Vec<Expr>,
    pub kwargs: Vec<(String, Expr)>,
}

impl CallExpr {
    /// Create a call of `function` with no arguments.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: Expr) -> Self {
        self.args.push(arg);
        self
    }

    /// Append a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: Expr) -> Self {
        self.kwargs.push((name.into(), value));
        self
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::String(s) => write!(f, "{:?}", s),
            Expr::Literal(token) => f.write_str(token),
            Expr::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Expr::Call(call) => write!(f, "{}", call),
        }
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        let mut first = true;
        for arg in &self.args {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}", arg)?;
        }
        for (name, value) in &self.kwargs {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{} = {}", name, value)?;
        }
        f.write_str(")")
    }
}
