//! Greeter construction and formatted greeting output.
//!
//! A [`Greeter`] holds a validated, immutable name and renders the product
//! greeting from it. Validation happens once at construction; every accessor
//! afterwards is infallible.

use thiserror::Error;

use crate::product::{DEFAULT_NAME, VERSION};

/// Error raised when a greeter is constructed with an unusable name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreeterError {
    /// The supplied name was empty or contained only whitespace.
    #[error("Name must not be null or empty")]
    InvalidArgument,
}

/// A named greeter, frozen after construction.
///
/// The name is guaranteed non-empty and is stored verbatim - accepted names
/// are never trimmed or otherwise normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    /// Create a greeter with the default product name.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Create a greeter with a custom name.
    ///
    /// # Errors
    ///
    /// Returns [`GreeterError::InvalidArgument`] when the name is empty or
    /// consists only of whitespace.
    pub fn with_name(name: impl Into<String>) -> Result<Self, GreeterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GreeterError::InvalidArgument);
        }
        Ok(Self { name })
    }

    /// The stored name, never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the greeting: `Hello from <name> (v<version>)!`
    ///
    /// The name is substituted literally, with no escaping or
    /// locale-sensitive formatting.
    pub fn greeting(&self) -> String {
        format!("Hello from {} (v{})!", self.name, VERSION)
    }

    /// Whether this greeter still carries the default product name.
    pub fn is_default_name(&self) -> bool {
        self.name == DEFAULT_NAME
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}
