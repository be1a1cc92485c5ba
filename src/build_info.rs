//! Build and host identity reporting.
//!
//! Produces the single-line diagnostic used to spot-check that documentation
//! archives built from this source are reproducible across environments.

use crate::product::{DEFAULT_NAME, VERSION};

/// Toolchain version captured by the build script; empty when the toolchain
/// could not report one.
const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

/// Render the build-info line:
/// `Build Info: <product> v<version> | Java <runtime_version> | <os>`
///
/// The `Java` token is kept verbatim for compatibility with the historical
/// output that downstream archive checks expect. A missing runtime version
/// renders as the empty string; this call never fails.
pub fn build_info() -> String {
    format!(
        "Build Info: {} v{} | Java {} | {}",
        DEFAULT_NAME,
        VERSION,
        RUNTIME_VERSION,
        std::env::consts::OS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_prefix() {
        assert!(build_info().starts_with("Build Info: Reproducible Docs v1.0.0 | Java "));
    }

    #[test]
    fn test_build_info_separator_count() {
        assert_eq!(build_info().matches(" | ").count(), 2);
    }

    #[test]
    fn test_build_info_single_line() {
        assert!(!build_info().contains('\n'));
    }

    #[test]
    fn test_build_info_idempotent() {
        assert_eq!(build_info(), build_info());
    }
}
