//! Diagnostics produced by name validation.
//!
//! Every user-facing problem becomes a [`Diagnostic`] handed to a
//! [`DiagnosticSink`]; nothing here is fatal. The shapes are plain data so
//! reports can be serialized and compared byte for byte across runs.

pub mod render;

use std::fmt;

use serde::Serialize;

use crate::model::SourcePosition;

/// Kind of problem found on a declaration or one of its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Annotation written on an override instead of the chain root.
    InapplicableNameAnnotation,
    /// Annotation with neither a primary nor a secondary name.
    InvalidNameAnnotation,
    /// A name starts with a character outside `[A-Za-z_]`.
    InvalidNameFirstChar,
    /// A name contains characters outside `[A-Za-z0-9_]`.
    InvalidNameChars,
    /// Merged form of the two checks above.
    InvalidCharacters,
    /// `exact` on something that is not class-like.
    InapplicableExactNameAnnotation,
    /// `exact` without a primary name.
    MissingExactNameAnnotation,
    /// Bases of an override disagree on their foreign names.
    IncompatibleNameOverride,
}

impl DiagnosticKind {
    pub const fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::InapplicableNameAnnotation => "NAME0001",
            DiagnosticKind::InvalidNameAnnotation => "NAME0002",
            DiagnosticKind::InvalidNameFirstChar => "NAME0003",
            DiagnosticKind::InvalidNameChars => "NAME0004",
            DiagnosticKind::InvalidCharacters => "NAME0005",
            DiagnosticKind::InapplicableExactNameAnnotation => "NAME0006",
            DiagnosticKind::MissingExactNameAnnotation => "NAME0007",
            DiagnosticKind::IncompatibleNameOverride => "NAME0008",
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            DiagnosticKind::InapplicableNameAnnotation => {
                "foreign names can only be declared on the root of an override chain"
            }
            DiagnosticKind::InvalidNameAnnotation => {
                "foreign-name annotation must specify a name or a secondary name"
            }
            DiagnosticKind::InvalidNameFirstChar => "foreign name starts with invalid characters",
            DiagnosticKind::InvalidNameChars => "foreign name contains invalid characters",
            DiagnosticKind::InvalidCharacters => "foreign name contains invalid characters",
            DiagnosticKind::InapplicableExactNameAnnotation => {
                "exact foreign names are only applicable to classes, objects and interfaces"
            }
            DiagnosticKind::MissingExactNameAnnotation => {
                "exact foreign names require a primary name"
            }
            DiagnosticKind::IncompatibleNameOverride => {
                "member inherits different foreign names"
            }
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Structured argument attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DiagnosticArg {
    /// Offending characters, deduplicated.
    Chars(String),
    /// Name of the declaration the diagnostic is about.
    Declaration(String),
    /// Containing declarations of conflicting bases, in edge order.
    Containers(Vec<String>),
}

/// Secondary location giving context, e.g. a conflicting base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Related {
    pub position: SourcePosition,
    pub message: String,
}

/// A user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: &'static str,
    pub message: String,
    pub position: SourcePosition,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<DiagnosticArg>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<Related>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: SourcePosition) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: kind.summary().to_string(),
            position,
            args: Vec::new(),
            related: Vec::new(),
        }
    }

    /// Offending characters; also folded into the message.
    pub fn with_chars(mut self, chars: impl Into<String>) -> Self {
        let chars = chars.into();
        self.message = format!("{}: '{}'", self.message, chars);
        self.args.push(DiagnosticArg::Chars(chars));
        self
    }

    pub fn with_arg(mut self, arg: DiagnosticArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_related(mut self, position: SourcePosition, message: impl Into<String>) -> Self {
        self.related.push(Related { position, message: message.into() });
        self
    }

    pub fn chars(&self) -> Option<&str> {
        self.args.iter().find_map(|arg| match arg {
            DiagnosticArg::Chars(chars) => Some(chars.as_str()),
            _ => None,
        })
    }
}

/// Receiver of diagnostics. The host decides what to do with them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Count diagnostics per kind, in kind order.
pub fn count_by_kind(diagnostics: &[Diagnostic]) -> Vec<(DiagnosticKind, usize)> {
    let mut counts: Vec<(DiagnosticKind, usize)> = Vec::new();
    for diagnostic in diagnostics {
        match counts.iter_mut().find(|(kind, _)| *kind == diagnostic.kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((diagnostic.kind, 1)),
        }
    }
    counts.sort_by_key(|(kind, _)| *kind);
    counts
}
