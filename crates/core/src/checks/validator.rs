use tracing::{debug, trace};

use crate::checks::consistency::OverrideNameConsistencyChecker;
use crate::config::{CharPolicy, CheckerConfig};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::error::HostResult;
use crate::model::{DeclId, DeclKind, Declaration, DeclarationHost};
use crate::names::grammar::{invalid_chars, render_chars};
use crate::names::NameSpec;

/// Per-declaration entry point of name validation.
///
/// Stateless apart from the borrowed host and the policy; one instance can
/// validate any number of declarations, in any order, any number of times.
pub struct DeclarationNameValidator<'h> {
    host: &'h dyn DeclarationHost,
    config: CheckerConfig,
    consistency: OverrideNameConsistencyChecker<'h>,
}

impl<'h> DeclarationNameValidator<'h> {
    pub fn new(host: &'h dyn DeclarationHost, config: CheckerConfig) -> Self {
        Self { host, config, consistency: OverrideNameConsistencyChecker::new(host, config) }
    }

    pub fn config(&self) -> CheckerConfig {
        self.config
    }

    /// Validate one declaration, reporting every problem to `sink`.
    ///
    /// Only host contract violations end validation early. Parameters and
    /// receivers are validated as slots of their owning function, and
    /// synthesized members through their class, so calling this on them
    /// directly reports nothing.
    pub fn validate(&self, id: DeclId, sink: &mut dyn DiagnosticSink) -> HostResult<()> {
        let decl = self.host.declaration(id)?;
        if matches!(decl.kind, DeclKind::Parameter | DeclKind::Receiver) {
            trace!(decl = %id, "slot declarations are validated with their owner");
            return Ok(());
        }
        if decl.synthetic {
            trace!(decl = %id, "synthesized members are checked through their class");
            return Ok(());
        }
        debug!(decl = %id, name = %decl.name, kind = decl.kind.label(), "validating foreign names");

        self.check_slots(decl, sink)?;

        if decl.is_override() {
            self.consistency.check(id, &decl.position, sink)?;
        }

        for &fake in self.host.fake_override_members(id)? {
            trace!(class = %id, member = %fake, "checking synthesized member");
            self.consistency.check(fake, &decl.position, sink)?;
        }
        Ok(())
    }

    fn check_slots(&self, decl: &Declaration, sink: &mut dyn DiagnosticSink) -> HostResult<()> {
        let is_override = decl.is_override();
        for slot in decl.name_slots().into_iter().flatten() {
            let slot_decl = self.host.declaration(slot)?;
            let Some(spec) = NameSpec::from_annotation(slot_decl.annotation.as_ref()) else {
                continue;
            };
            let position = slot_decl.annotation_position();
            if is_override {
                let diagnostic =
                    Diagnostic::new(DiagnosticKind::InapplicableNameAnnotation, position.clone());
                self.emit(sink, diagnostic);
                continue;
            }
            self.check_spec(&spec, slot_decl, sink);
        }
        Ok(())
    }

    fn check_spec(&self, spec: &NameSpec, decl: &Declaration, sink: &mut dyn DiagnosticSink) {
        let position = decl.annotation_position();

        if spec.is_empty() {
            let diagnostic =
                Diagnostic::new(DiagnosticKind::InvalidNameAnnotation, position.clone());
            self.emit(sink, diagnostic);
        }

        let invalid = invalid_chars(spec);
        match self.config.char_policy {
            CharPolicy::Split => {
                if !invalid.first.is_empty() {
                    let diagnostic =
                        Diagnostic::new(DiagnosticKind::InvalidNameFirstChar, position.clone())
                            .with_chars(render_chars(&invalid.first));
                    self.emit(sink, diagnostic);
                }
                if !invalid.interior.is_empty() {
                    let diagnostic =
                        Diagnostic::new(DiagnosticKind::InvalidNameChars, position.clone())
                            .with_chars(render_chars(&invalid.interior));
                    self.emit(sink, diagnostic);
                }
            }
            CharPolicy::Merged => {
                if !invalid.is_empty() {
                    let diagnostic =
                        Diagnostic::new(DiagnosticKind::InvalidCharacters, position.clone())
                            .with_chars(render_chars(&invalid.merged()));
                    self.emit(sink, diagnostic);
                }
            }
        }

        if spec.exact && !decl.kind.is_class() {
            self.emit(
                sink,
                Diagnostic::new(DiagnosticKind::InapplicableExactNameAnnotation, position.clone()),
            );
        }
        if spec.exact && spec.primary.is_none() {
            let diagnostic =
                Diagnostic::new(DiagnosticKind::MissingExactNameAnnotation, position.clone());
            self.emit(sink, diagnostic);
        }
    }

    fn emit(&self, sink: &mut dyn DiagnosticSink, diagnostic: Diagnostic) {
        debug!(code = diagnostic.code, position = %diagnostic.position, "reporting diagnostic");
        sink.report(diagnostic);
    }
}
