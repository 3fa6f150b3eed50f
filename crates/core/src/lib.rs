//! namecheck-core
//!
//! Validation of foreign-name annotations on compiler declarations, and
//! resolution of the names those declarations export to a foreign platform.
//!
//! The host compiler supplies declarations through [`model::DeclarationHost`];
//! this crate checks annotations on them ([`checks`]), reports problems as
//! [`diagnostics::Diagnostic`]s, and resolves exported names ([`export`]).
//! Everything is a pure function of host data: no I/O outside of the
//! [`config`] and graph loaders used by frontends.

pub mod checks;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod model;
pub mod names;
pub mod services;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
