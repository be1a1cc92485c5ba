//! # Reprodocs - Reproducible Documentation Greeter
//!
//! Reprodocs is the demonstration crate used to exercise the documentation
//! toolchain behind byte-for-byte reproducible documentation archives.
//!
//! ## Overview
//!
//! The crate is deliberately small: a greeter that renders a fixed product
//! greeting, and a build-info reporter that summarizes product and host
//! identity on a single line. The surrounding archive pipeline diffs that
//! output across machines, so every rendered string is deterministic for a
//! given toolchain and platform.
//!
//! ## Modules
//!
//! - [`greeter`] - Named greeter construction and greeting output
//! - [`build_info`] - Single-line product/host identity diagnostic
//! - [`product`] - Process-wide product identity constants
//!
//! ## Example
//!
//! ```
//! use reprodocs::greeter::Greeter;
//!
//! let greeter = Greeter::new();
//! assert_eq!(greeter.greeting(), "Hello from Reproducible Docs (v1.0.0)!");
//! assert!(greeter.is_default_name());
//! ```

pub mod build_info;
pub mod greeter;

/// Product identity constants, fixed for the lifetime of the process.
pub mod product {
    /// Greeter name used when no custom name is supplied.
    pub const DEFAULT_NAME: &str = "Reproducible Docs";
    /// Product version rendered into greetings and build info.
    pub const VERSION: &str = "1.0.0";
}
