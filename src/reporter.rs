//! Build diagnostics

use crate::error::{BuildError, QueryError};

/// A fatal problem reported during a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub errors: Vec<QueryError>,
}

/// Collects and logs build diagnostics
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fatal diagnostic and return the error that ends the build
    pub fn panic_on_build(&mut self, message: &str, errors: Vec<QueryError>) -> BuildError {
        tracing::error!("{}", message);
        for error in &errors {
            tracing::error!("  {}", error);
        }

        self.diagnostics.push(Diagnostic {
            message: message.to_string(),
            errors: errors.clone(),
        });

        BuildError::QueryFailed {
            message: message.to_string(),
            errors,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
