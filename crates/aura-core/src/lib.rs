//! Shared primitives used across Aura storefront crates.

use core::fmt;

/// Result alias used across the workspace.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Top-level error type shared by the storefront crates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontError {
    pub code: &'static str,
    pub message: String,
}

impl StorefrontError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for StorefrontError {}
