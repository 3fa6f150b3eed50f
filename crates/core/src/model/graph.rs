use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{HostError, HostResult};
use crate::model::{DeclId, DeclKind, Declaration, DeclarationHost};

/// On-disk shape of a declaration dump.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    pub declarations: Vec<Declaration>,
}

/// In-memory host built from a list of declarations.
///
/// Construction checks references (every id points at a declaration of the
/// right kind) and rejects container cycles. Override cycles are left alone:
/// those are detected by the walks that would otherwise loop on them.
#[derive(Debug, Clone)]
pub struct DeclarationGraph {
    declarations: Vec<Declaration>,
    index: HashMap<DeclId, usize>,
}

impl DeclarationGraph {
    pub fn new(declarations: Vec<Declaration>) -> HostResult<Self> {
        let mut index = HashMap::with_capacity(declarations.len());
        for (position, decl) in declarations.iter().enumerate() {
            if index.insert(decl.id, position).is_some() {
                return Err(HostError::DuplicateDeclaration(decl.id));
            }
        }
        let graph = Self { declarations, index };
        for decl in &graph.declarations {
            graph.check_references(decl)?;
        }
        for decl in &graph.declarations {
            graph.check_container_chain(decl.id)?;
        }
        Ok(graph)
    }

    pub fn from_file(file: GraphFile) -> HostResult<Self> {
        Self::new(file.declarations)
    }

    pub fn to_file(&self) -> GraphFile {
        GraphFile { declarations: self.declarations.clone() }
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// First declaration with the given native name, in declaration order.
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    fn get(&self, id: DeclId) -> HostResult<&Declaration> {
        self.index
            .get(&id)
            .map(|&i| &self.declarations[i])
            .ok_or(HostError::UnknownDeclaration(id))
    }

    fn expect_kind(
        &self,
        id: DeclId,
        expected: &'static str,
        accept: impl Fn(&DeclKind) -> bool,
    ) -> HostResult<&Declaration> {
        let decl = self.get(id)?;
        if accept(&decl.kind) {
            Ok(decl)
        } else {
            Err(HostError::KindMismatch { decl: id, expected })
        }
    }

    fn check_container_chain(&self, start: DeclId) -> HostResult<()> {
        let mut visited = HashSet::from([start]);
        let mut current = start;
        while let Some(container) = self.get(current)?.container {
            if !visited.insert(container) {
                return Err(HostError::CyclicContainer { start, repeated: container });
            }
            current = container;
        }
        Ok(())
    }

    fn check_references(&self, decl: &Declaration) -> HostResult<()> {
        for base in &decl.overrides {
            self.get(*base)?;
        }
        if let Some(container) = decl.container {
            self.get(container)?;
        }
        if decl.synthetic && decl.annotation.is_some() {
            return Err(HostError::MalformedAnnotation {
                decl: decl.id,
                reason: "synthesized declarations cannot carry annotations".into(),
            });
        }
        match &decl.kind {
            DeclKind::Class { members, fake_overrides, .. } => {
                for member in members {
                    self.get(*member)?;
                }
                for fake in fake_overrides {
                    let member =
                        self.expect_kind(*fake, "function or property", DeclKind::is_callable)?;
                    if !member.synthetic {
                        return Err(HostError::UnsyntheticFakeOverride {
                            class: decl.id,
                            member: *fake,
                        });
                    }
                }
            }
            DeclKind::Function { receiver, parameters } => {
                if let Some(receiver) = receiver {
                    self.expect_kind(*receiver, "receiver", |k| matches!(k, DeclKind::Receiver))?;
                }
                for parameter in parameters {
                    self.expect_kind(*parameter, "parameter", |k| {
                        matches!(k, DeclKind::Parameter)
                    })?;
                }
            }
            DeclKind::Property | DeclKind::Parameter | DeclKind::Receiver => {}
        }
        Ok(())
    }
}

impl DeclarationHost for DeclarationGraph {
    fn declaration(&self, id: DeclId) -> HostResult<&Declaration> {
        self.get(id)
    }

    fn declaration_ids(&self) -> Vec<DeclId> {
        self.declarations.iter().map(|d| d.id).collect()
    }
}

/// Load a declaration dump from disk. `.yaml`/`.yml` files are read as YAML,
/// anything else as JSON.
pub fn load_graph(path: &Path) -> Result<DeclarationGraph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read declaration graph at {}", path.display()))?;
    let file: GraphFile = if is_yaml(path) {
        serde_yaml::from_str(&text).context("Failed to parse declaration graph YAML")?
    } else {
        serde_json::from_str(&text).context("Failed to parse declaration graph JSON")?
    };
    DeclarationGraph::from_file(file)
        .with_context(|| format!("Invalid declaration graph in {}", path.display()))
}

pub(crate) fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yaml") | Some("yml"))
}
