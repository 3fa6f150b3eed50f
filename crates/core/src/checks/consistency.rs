use tracing::debug;

use crate::checks::chain::{check_arity, first_base, slot_specs};
use crate::config::CheckerConfig;
use crate::diagnostics::{Diagnostic, DiagnosticArg, DiagnosticKind, DiagnosticSink};
use crate::error::HostResult;
use crate::model::{DeclId, DeclarationHost, SourcePosition};
use crate::names::NameSpec;

/// Verifies that every base of an override resolves to the same foreign names.
pub struct OverrideNameConsistencyChecker<'h> {
    host: &'h dyn DeclarationHost,
    compare_exact: bool,
}

impl<'h> OverrideNameConsistencyChecker<'h> {
    pub fn new(host: &'h dyn DeclarationHost, config: CheckerConfig) -> Self {
        Self { host, compare_exact: config.override_equality.compares_exact() }
    }

    /// Check `id` against the roots of all of its immediate bases.
    ///
    /// Reports at most one `IncompatibleNameOverride`, at `report_at`, and
    /// returns whether the names were consistent. Declarations without
    /// override edges are trivially consistent.
    pub fn check(
        &self,
        id: DeclId,
        report_at: &SourcePosition,
        sink: &mut dyn DiagnosticSink,
    ) -> HostResult<bool> {
        let bases = self.host.overrides(id)?;
        if bases.is_empty() {
            return Ok(true);
        }

        let mut roots = Vec::with_capacity(bases.len());
        for &base in bases {
            check_arity(self.host, id, base)?;
            let root = first_base(self.host, base)?;
            roots.push(slot_specs(self.host, root)?);
        }

        if all_equal(&roots, self.compare_exact) {
            return Ok(true);
        }

        let member = self.host.native_name(id)?;
        let mut containers = Vec::with_capacity(bases.len());
        let mut diagnostic =
            Diagnostic::new(DiagnosticKind::IncompatibleNameOverride, report_at.clone());
        for &base in bases {
            let container = match self.host.container(base)? {
                Some(container) => self.host.native_name(container)?,
                None => "<top level>".to_string(),
            };
            let position = self.host.position(base)?.clone();
            diagnostic = diagnostic.with_related(position, format!("inherited from {container}"));
            containers.push(container);
        }
        let diagnostic = diagnostic
            .with_message(format!(
                "'{member}' inherits different foreign names from {}",
                containers.join(", ")
            ))
            .with_arg(DiagnosticArg::Declaration(member))
            .with_arg(DiagnosticArg::Containers(containers));

        debug!(decl = %id, "incompatible foreign names across override bases");
        sink.report(diagnostic);
        Ok(false)
    }
}

/// Slot-wise comparison of every root against the first one.
fn all_equal(roots: &[Vec<Option<NameSpec>>], compare_exact: bool) -> bool {
    let Some((first, rest)) = roots.split_first() else {
        return true;
    };
    rest.iter().all(|current| {
        current.len() == first.len()
            && first.iter().zip(current).all(|pair| match pair {
                (None, None) => true,
                (Some(a), Some(b)) => a.same_names(b, compare_exact),
                _ => false,
            })
    })
}
