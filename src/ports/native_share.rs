//! Native share sheet port definition.

use std::fmt;

/// Why a native share did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share prompt.
    Cancelled,
    /// Anything else; callers fall back to the clipboard.
    Failed(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Cancelled => write!(f, "share cancelled"),
            ShareError::Failed(reason) => write!(f, "{}", reason),
        }
    }
}

/// Port for a platform share mechanism.
pub trait NativeShare {
    fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError>;
}
