use crate::error::HostResult;
use crate::model::{
    Annotation, AnnotationArgs, ClassFlavor, DeclId, DeclKind, Declaration, DeclarationGraph,
    SourcePosition,
};

/// Incremental construction of a [`DeclarationGraph`].
///
/// Ids are handed out in creation order and every declaration gets its own
/// line in `file`, so diagnostics on built graphs have stable positions.
/// Intended for hosts that translate their own model on the fly, and for tests.
///
/// # Panics
///
/// Methods taking a [`DeclId`] panic when the id was not handed out by this
/// builder. Reference problems in the finished graph are reported by
/// [`GraphBuilder::build`] instead.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    file: String,
    declarations: Vec<Declaration>,
}

impl GraphBuilder {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into(), declarations: Vec::new() }
    }

    fn push(&mut self, name: &str, kind: DeclKind, container: Option<DeclId>) -> DeclId {
        let id = DeclId(self.declarations.len() as u32);
        let position = SourcePosition::new(self.file.clone(), id.0 + 1, 1);
        let mut decl = Declaration::new(id, name, kind, position);
        decl.container = container;
        self.declarations.push(decl);
        id
    }

    fn decl_mut(&mut self, id: DeclId) -> &mut Declaration {
        &mut self.declarations[id.0 as usize]
    }

    fn add_member(&mut self, class: DeclId, member: DeclId, synthetic: bool) {
        if let DeclKind::Class { members, fake_overrides, .. } = &mut self.decl_mut(class).kind {
            if synthetic {
                fake_overrides.push(member);
            } else {
                members.push(member);
            }
        }
    }

    /// Top-level or nested class-like declaration.
    pub fn class(&mut self, container: Option<DeclId>, name: &str, flavor: ClassFlavor) -> DeclId {
        let kind = DeclKind::Class { flavor, members: Vec::new(), fake_overrides: Vec::new() };
        let id = self.push(name, kind, container);
        if let Some(container) = container {
            self.add_member(container, id, false);
        }
        id
    }

    pub fn property(&mut self, container: Option<DeclId>, name: &str) -> DeclId {
        let id = self.push(name, DeclKind::Property, container);
        if let Some(container) = container {
            self.add_member(container, id, false);
        }
        id
    }

    pub fn function(&mut self, container: Option<DeclId>, name: &str) -> DeclId {
        let kind = DeclKind::Function { receiver: None, parameters: Vec::new() };
        let id = self.push(name, kind, container);
        if let Some(container) = container {
            self.add_member(container, id, false);
        }
        id
    }

    /// Extension receiver of `function`.
    pub fn receiver(&mut self, function: DeclId, name: &str) -> DeclId {
        let id = self.push(name, DeclKind::Receiver, Some(function));
        if let DeclKind::Function { receiver, .. } = &mut self.decl_mut(function).kind {
            *receiver = Some(id);
        }
        id
    }

    /// Next value parameter of `function`.
    pub fn parameter(&mut self, function: DeclId, name: &str) -> DeclId {
        let id = self.push(name, DeclKind::Parameter, Some(function));
        if let DeclKind::Function { parameters, .. } = &mut self.decl_mut(function).kind {
            parameters.push(id);
        }
        id
    }

    /// Attach an annotation, positioned on the declaration's own line.
    pub fn annotate(&mut self, id: DeclId, args: AnnotationArgs) -> &mut Self {
        let position = self.decl_mut(id).position.clone();
        self.decl_mut(id).annotation = Some(Annotation::new(args).at(position));
        self
    }

    pub fn overrides(&mut self, id: DeclId, base: DeclId) -> &mut Self {
        self.decl_mut(id).overrides.push(base);
        self
    }

    /// Synthesize a fake override in `class` for members inherited from `bases`.
    ///
    /// The synthesized member mirrors the name and slot shape of the first base.
    ///
    /// # Panics
    ///
    /// Panics when `bases` is empty.
    pub fn fake_override(&mut self, class: DeclId, bases: &[DeclId]) -> DeclId {
        assert!(!bases.is_empty(), "fake override of {class} needs at least one base");
        let template = self.declarations[bases[0].0 as usize].clone();
        let kind = match &template.kind {
            DeclKind::Function { .. } => {
                DeclKind::Function { receiver: None, parameters: Vec::new() }
            }
            other => other.clone(),
        };
        let id = self.push(&template.name, kind, Some(class));
        self.decl_mut(id).synthetic = true;
        self.decl_mut(id).overrides.extend_from_slice(bases);
        if let DeclKind::Function { receiver, parameters } = template.kind {
            if let Some(receiver) = receiver {
                let name = self.declarations[receiver.0 as usize].name.clone();
                let slot = self.receiver(id, &name);
                self.decl_mut(slot).synthetic = true;
            }
            for parameter in parameters {
                let name = self.declarations[parameter.0 as usize].name.clone();
                let slot = self.parameter(id, &name);
                self.decl_mut(slot).synthetic = true;
            }
        }
        self.add_member(class, id, true);
        id
    }

    pub fn build(self) -> HostResult<DeclarationGraph> {
        DeclarationGraph::new(self.declarations)
    }
}
