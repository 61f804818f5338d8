//! Human-readable failure reports carrying the whole causal chain.

use std::error::Error;
use std::fmt;

/// Snapshot of an error and every `source()` below it, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    message: String,
    causes: Vec<String>,
}

impl ErrorReport {
    pub fn new(error: &(dyn Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut current = error.source();
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }
        Self {
            message: error.to_string(),
            causes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// Innermost message of the chain.
    pub fn root_cause(&self) -> &str {
        self.causes.last().unwrap_or(&self.message)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for (depth, cause) in self.causes.iter().enumerate() {
            write!(f, "\n{:indent$}caused by: {}", "", cause, indent = (depth + 1) * 2)?;
        }
        Ok(())
    }
}
