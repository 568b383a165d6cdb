//! OncoTree FHIR core - environment bootstrap and conversion logic.
//!
//! This crate contains everything with zero CLI dependencies:
//! the bootstrap orchestrator that prepares a Python virtual environment
//! and launches the converter, and a native port of the OncoTree to
//! FHIR CodeSystem conversion itself.

pub mod bootstrap;
pub mod config;
pub mod convert;
pub mod fhir;
pub mod logging;
pub mod oncotree;
pub mod orchestrator;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
