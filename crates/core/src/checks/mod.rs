//! Semantic checks over foreign-name annotations.
//!
//! - `validator`: per-declaration entry point (applicability, well-formedness).
//! - `consistency`: names inherited through overrides must agree.
//! - `chain`: override-chain walking shared with export.

pub mod chain;
pub mod consistency;
pub mod validator;

pub use consistency::OverrideNameConsistencyChecker;
pub use validator::DeclarationNameValidator;
