//! Exported (foreign) names.
//!
//! [`ExportNameResolver`] turns a declaration into the names the interface
//! generator uses; [`stubs`] assembles those names into the exported object
//! model. Resolution never reports diagnostics: missing or partial names fall
//! back to the host's native name.

pub mod stubs;

use serde::Serialize;
use tracing::trace;

use crate::checks::chain::first_base;
use crate::error::HostResult;
use crate::model::{DeclId, DeclarationHost};
use crate::names::NameSpec;

/// Target convention an artifact is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// The primary foreign platform (`name`).
    Primary,
    /// The companion platform with its own naming rules (`swiftName`).
    Secondary,
}

/// Final foreign names of one declaration or slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedName {
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Emit `primary` without decoration.
    pub exact: bool,
}

impl ExportedName {
    /// Name for `platform`; the secondary platform falls back to the primary name.
    pub fn name_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Primary => &self.primary,
            Platform::Secondary => self.secondary.as_deref().unwrap_or(&self.primary),
        }
    }
}

/// Computes exported names from annotations and native names.
pub struct ExportNameResolver<'h> {
    host: &'h dyn DeclarationHost,
}

impl<'h> ExportNameResolver<'h> {
    pub fn new(host: &'h dyn DeclarationHost) -> Self {
        Self { host }
    }

    /// Resolve the exported names of `id`.
    ///
    /// Fails only on host contract violations met while walking overrides.
    pub fn resolve_export_name(&self, id: DeclId) -> HostResult<ExportedName> {
        let spec = self.effective_spec(id)?;
        let native = self.host.native_name(id)?;
        let exported = match spec {
            Some(spec) => ExportedName {
                primary: spec.primary.unwrap_or(native),
                secondary: spec.secondary,
                exact: spec.exact,
            },
            None => ExportedName { primary: native, secondary: None, exact: false },
        };
        trace!(decl = %id, primary = %exported.primary, "resolved exported name");
        Ok(exported)
    }

    /// Annotation that governs the names of `id`.
    ///
    /// Overrides take their names from the root of the first-base chain, since
    /// their own annotations are rejected by validation. Parameters and
    /// receivers take the slot at the same position of their function's root.
    pub fn effective_spec(&self, id: DeclId) -> HostResult<Option<NameSpec>> {
        if let Some((owner, index)) = self.host.slot_owner(id)? {
            let root = first_base(self.host, owner)?;
            let slot = self.host.name_slots(root)?.get(index).copied().flatten();
            return match slot {
                Some(slot) => Ok(NameSpec::from_annotation(self.host.annotation(slot)?)),
                None => Ok(None),
            };
        }
        let root = first_base(self.host, id)?;
        Ok(NameSpec::from_annotation(self.host.annotation(root)?))
    }
}
