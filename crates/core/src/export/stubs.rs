//! Exported interface object model.
//!
//! These are plain data holders: one [`ExportedClass`] per class-like
//! declaration, with its methods and properties, named by
//! [`ExportNameResolver`]. The decoration applied here (class prefixes,
//! nested-class prefixes, selector building) is the interface generator's
//! convention, not part of name resolution.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::ExportConfig;
use crate::error::{HostError, HostResult};
use crate::export::{ExportNameResolver, Platform};
use crate::model::{ClassFlavor, DeclId, DeclKind, DeclarationHost};

/// Accessor name exported for singleton declarations.
pub const SINGLETON_ACCESSOR: &str = "shared";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportedClassKind {
    /// Concrete class or singleton.
    Interface,
    /// Interface declarations export as protocols.
    Protocol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedParameter {
    pub name: String,
    pub swift_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedProperty {
    pub name: String,
    pub swift_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedMethod {
    /// Concatenated selectors.
    pub name: String,
    pub selectors: Vec<String>,
    /// Secondary-platform signature, e.g. `index(of:)`.
    pub swift_name: String,
    /// Receiver first (when present), then value parameters.
    pub parameters: Vec<ExportedParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum ExportedMember {
    Method(ExportedMethod),
    Property(ExportedProperty),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedClass {
    pub kind: ExportedClassKind,
    pub name: String,
    pub swift_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singleton_accessor: Option<String>,
    pub members: Vec<ExportedMember>,
}

/// Assembles exported classes from a host graph.
pub struct InterfaceBuilder<'h> {
    host: &'h dyn DeclarationHost,
    resolver: ExportNameResolver<'h>,
    config: ExportConfig,
}

impl<'h> InterfaceBuilder<'h> {
    pub fn new(host: &'h dyn DeclarationHost, config: ExportConfig) -> Self {
        Self { host, resolver: ExportNameResolver::new(host), config }
    }

    /// Every class-like declaration, in host order.
    pub fn build_all(&self) -> HostResult<Vec<ExportedClass>> {
        let mut classes = Vec::new();
        for id in self.host.declaration_ids() {
            if self.host.kind(id)?.is_class() {
                classes.push(self.build_class(id)?);
            }
        }
        Ok(classes)
    }

    pub fn build_class(&self, id: DeclId) -> HostResult<ExportedClass> {
        let DeclKind::Class { flavor, members, .. } = self.host.kind(id)? else {
            return Err(HostError::KindMismatch { decl: id, expected: "class" });
        };
        let (name, swift_name) = self.class_names(id)?;
        let kind = match flavor {
            ClassFlavor::Interface => ExportedClassKind::Protocol,
            ClassFlavor::Class | ClassFlavor::Object => ExportedClassKind::Interface,
        };
        let singleton_accessor =
            matches!(flavor, ClassFlavor::Object).then(|| SINGLETON_ACCESSOR.to_string());

        let mut exported_members = Vec::with_capacity(members.len());
        for &member in members {
            match self.host.kind(member)? {
                DeclKind::Function { .. } => {
                    exported_members.push(ExportedMember::Method(self.build_method(member)?))
                }
                DeclKind::Property => {
                    let names = self.resolver.resolve_export_name(member)?;
                    exported_members.push(ExportedMember::Property(ExportedProperty {
                        name: names.name_for(Platform::Primary).to_string(),
                        swift_name: names.name_for(Platform::Secondary).to_string(),
                    }))
                }
                // Nested classes are exported as classes of their own.
                _ => {}
            }
        }

        Ok(ExportedClass { kind, name, swift_name, singleton_accessor, members: exported_members })
    }

    /// Decorated primary and secondary class names.
    ///
    /// A nested class is prefixed with its enclosing classes' exported names,
    /// stopping at the first `exact` one; the outermost gets the configured
    /// prefix.
    fn class_names(&self, id: DeclId) -> HostResult<(String, String)> {
        let mut primary = String::new();
        let mut secondary = String::new();
        let mut visited = HashSet::from([id]);
        let mut current = id;
        loop {
            let names = self.resolver.resolve_export_name(current)?;
            primary.insert_str(0, names.name_for(Platform::Primary));
            if !secondary.is_empty() {
                secondary.insert(0, '.');
            }
            secondary.insert_str(0, names.name_for(Platform::Secondary));
            if names.exact {
                return Ok((primary, secondary));
            }
            let Some(outer) = self.enclosing_class(current)? else {
                let prefix = self.config.class_prefix.as_deref().unwrap_or("");
                primary.insert_str(0, prefix);
                return Ok((primary, secondary));
            };
            if !visited.insert(outer) {
                return Err(HostError::CyclicContainer { start: id, repeated: outer });
            }
            current = outer;
        }
    }

    fn enclosing_class(&self, id: DeclId) -> HostResult<Option<DeclId>> {
        match self.host.container(id)? {
            Some(container) if self.host.kind(container)?.is_class() => Ok(Some(container)),
            _ => Ok(None),
        }
    }

    pub fn build_method(&self, id: DeclId) -> HostResult<ExportedMethod> {
        let names = self.resolver.resolve_export_name(id)?;
        let mut parameters = Vec::new();
        for slot in self.host.name_slots(id)?.into_iter().skip(1).flatten() {
            let slot_names = self.resolver.resolve_export_name(slot)?;
            parameters.push(ExportedParameter {
                name: slot_names.name_for(Platform::Primary).to_string(),
                swift_name: slot_names.name_for(Platform::Secondary).to_string(),
            });
        }
        let selectors = build_selectors(names.name_for(Platform::Primary), &parameters);
        let swift_name = build_swift_signature(names.name_for(Platform::Secondary), &parameters);
        Ok(ExportedMethod { name: selectors.concat(), selectors, swift_name, parameters })
    }
}

/// `name` alone without parameters; otherwise `nameFirst:` then `param:` for
/// each further parameter.
pub fn build_selectors(name: &str, parameters: &[ExportedParameter]) -> Vec<String> {
    let Some((first, rest)) = parameters.split_first() else {
        return vec![name.to_string()];
    };
    let mut selectors = Vec::with_capacity(parameters.len());
    selectors.push(format!("{name}{}:", capitalize(&first.name)));
    selectors.extend(rest.iter().map(|p| format!("{}:", p.name)));
    selectors
}

/// `name(p1:p2:)`, or `name()` without parameters.
pub fn build_swift_signature(name: &str, parameters: &[ExportedParameter]) -> String {
    let labels: String = parameters.iter().map(|p| format!("{}:", p.swift_name)).collect();
    format!("{name}({labels})")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
