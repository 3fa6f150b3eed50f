//! Whole-graph services built on the per-declaration checks.

pub mod pass;

pub use pass::{NamingPass, PassReport, ResolvedName};
