//! Host-facing declaration model.
//!
//! The naming subsystem never owns the host compiler's declarations. It reads
//! them through [`DeclarationHost`], which this module defines together with
//! the plain data shapes a host fills in:
//! - `DeclId`: stable, ordered identifier of a declaration.
//! - `DeclKind`: tagged variant describing what the declaration is and which
//!   name slots it carries.
//! - `Declaration`: one declaration with its override edges and annotation.
//! - `DeclarationGraph`: an in-memory host, loadable from JSON/YAML dumps.

mod builder;
mod graph;
mod host;

pub use builder::GraphBuilder;
pub use graph::{load_graph, DeclarationGraph, GraphFile};
pub(crate) use graph::is_yaml;
pub use host::DeclarationHost;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a declaration supplied by the host.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DeclId(pub u32);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decl#{}", self.0)
    }
}

/// Position of a declaration or annotation in user source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self { file: file.into(), line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Flavor of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassFlavor {
    #[default]
    Class,
    Interface,
    /// Singleton declaration; exported like a class with a shared accessor.
    Object,
}

/// What a declaration is, and which other declarations fill its name slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclKind {
    Class {
        #[serde(default)]
        flavor: ClassFlavor,
        /// User-written members, in declaration order.
        #[serde(default)]
        members: Vec<DeclId>,
        /// Compiler-synthesized members standing in for inherited ones.
        #[serde(default)]
        fake_overrides: Vec<DeclId>,
    },
    Function {
        #[serde(default)]
        receiver: Option<DeclId>,
        #[serde(default)]
        parameters: Vec<DeclId>,
    },
    Property,
    Parameter,
    Receiver,
}

impl DeclKind {
    pub fn is_class(&self) -> bool {
        matches!(self, DeclKind::Class { .. })
    }

    /// Functions and properties: the declarations that take part in overriding.
    pub fn is_callable(&self) -> bool {
        matches!(self, DeclKind::Function { .. } | DeclKind::Property)
    }

    /// Slots carried by a declaration of this kind, owner first.
    ///
    /// Functions always report a receiver slot (empty when there is no
    /// receiver) so that slot lists of functions with the same parameter count
    /// line up position by position.
    pub fn name_slots(&self, owner: DeclId) -> Vec<Option<DeclId>> {
        match self {
            DeclKind::Function { receiver, parameters } => {
                let mut slots = Vec::with_capacity(parameters.len() + 2);
                slots.push(Some(owner));
                slots.push(*receiver);
                slots.extend(parameters.iter().copied().map(Some));
                slots
            }
            _ => vec![Some(owner)],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeclKind::Class { flavor: ClassFlavor::Interface, .. } => "interface",
            DeclKind::Class { flavor: ClassFlavor::Object, .. } => "object",
            DeclKind::Class { .. } => "class",
            DeclKind::Function { .. } => "function",
            DeclKind::Property => "property",
            DeclKind::Parameter => "parameter",
            DeclKind::Receiver => "receiver",
        }
    }
}

/// Arguments of a foreign-name annotation, as decoded by the host.
///
/// Every argument is optional; an omitted argument takes the annotation's
/// default (`""` for names, `false` for `exact`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnotationArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

impl AnnotationArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_swift_name(mut self, swift_name: impl Into<String>) -> Self {
        self.swift_name = Some(swift_name.into());
        self
    }

    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }
}

/// An annotation instance attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(flatten)]
    pub args: AnnotationArgs,
    /// Where the annotation itself was written, if the host tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<SourcePosition>,
}

impl Annotation {
    pub fn new(args: AnnotationArgs) -> Self {
        Self { args, position: None }
    }

    pub fn at(mut self, position: SourcePosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// A declaration as supplied by the host compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: DeclId,
    /// Native (source-language) name, the fallback for export.
    pub name: String,
    #[serde(flatten)]
    pub kind: DeclKind,
    pub position: SourcePosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
    /// Outgoing override edges ("this overrides ..."), in host order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<DeclId>,
    /// Enclosing declaration (class for members, function for slots).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<DeclId>,
    /// True for compiler-synthesized fake overrides and their slots.
    #[serde(default)]
    pub synthetic: bool,
}

impl Declaration {
    pub fn new(
        id: DeclId,
        name: impl Into<String>,
        kind: DeclKind,
        position: SourcePosition,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            position,
            annotation: None,
            overrides: Vec::new(),
            container: None,
            synthetic: false,
        }
    }

    pub fn is_override(&self) -> bool {
        !self.overrides.is_empty()
    }

    pub fn name_slots(&self) -> Vec<Option<DeclId>> {
        self.kind.name_slots(self.id)
    }

    /// Position diagnostics about this declaration's annotation should use.
    pub fn annotation_position(&self) -> &SourcePosition {
        self.annotation.as_ref().and_then(|a| a.position.as_ref()).unwrap_or(&self.position)
    }
}
