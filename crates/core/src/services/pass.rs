use serde::Serialize;
use tracing::info;

use crate::checks::DeclarationNameValidator;
use crate::config::{CheckerConfig, ExportConfig};
use crate::diagnostics::{count_by_kind, Diagnostic, DiagnosticKind};
use crate::error::HostResult;
use crate::export::stubs::{ExportedClass, InterfaceBuilder};
use crate::export::{ExportNameResolver, ExportedName};
use crate::model::{DeclId, DeclarationHost};

/// Outcome of validating a whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub declarations_checked: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl PassReport {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn counts(&self) -> Vec<(DiagnosticKind, usize)> {
        count_by_kind(&self.diagnostics)
    }
}

/// Exported names of one declaration, as listed by [`NamingPass::resolve_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedName {
    pub id: DeclId,
    pub kind: &'static str,
    pub native: String,
    pub exported: ExportedName,
}

/// Runs validation and export over every declaration of a host, in host order.
pub struct NamingPass<'h> {
    host: &'h dyn DeclarationHost,
    config: CheckerConfig,
}

impl<'h> NamingPass<'h> {
    pub fn new(host: &'h dyn DeclarationHost, config: CheckerConfig) -> Self {
        Self { host, config }
    }

    /// Validate every declaration. User problems end up in the report; only a
    /// host contract violation aborts the pass.
    pub fn run(&self) -> HostResult<PassReport> {
        let validator = DeclarationNameValidator::new(self.host, self.config);
        let ids = self.host.declaration_ids();
        let mut diagnostics = Vec::new();
        for &id in &ids {
            validator.validate(id, &mut diagnostics)?;
        }
        info!(
            declarations = ids.len(),
            diagnostics = diagnostics.len(),
            "foreign-name validation finished"
        );
        Ok(PassReport { declarations_checked: ids.len(), diagnostics })
    }

    /// Exported names of every declaration.
    pub fn resolve_all(&self) -> HostResult<Vec<ResolvedName>> {
        let resolver = ExportNameResolver::new(self.host);
        self.host
            .declaration_ids()
            .into_iter()
            .map(|id| {
                Ok(ResolvedName {
                    id,
                    kind: self.host.kind(id)?.label(),
                    native: self.host.native_name(id)?,
                    exported: resolver.resolve_export_name(id)?,
                })
            })
            .collect()
    }

    /// Exported interface model of every class-like declaration.
    pub fn export_interfaces(&self, config: ExportConfig) -> HostResult<Vec<ExportedClass>> {
        InterfaceBuilder::new(self.host, config).build_all()
    }
}
