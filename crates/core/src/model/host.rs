use crate::error::{HostError, HostResult};
use crate::model::{Annotation, DeclId, DeclKind, Declaration, SourcePosition};

/// Read-only view of the host compiler's declarations.
///
/// Implementors only have to supply lookup and iteration; everything the
/// naming subsystem consumes is derived from the returned [`Declaration`]s.
/// Hosts with their own native-name transform override [`native_name`].
///
/// [`native_name`]: DeclarationHost::native_name
pub trait DeclarationHost {
    fn declaration(&self, id: DeclId) -> HostResult<&Declaration>;

    /// Every declaration id, in the host's stable declaration order.
    fn declaration_ids(&self) -> Vec<DeclId>;

    fn kind(&self, id: DeclId) -> HostResult<&DeclKind> {
        Ok(&self.declaration(id)?.kind)
    }

    fn overrides(&self, id: DeclId) -> HostResult<&[DeclId]> {
        Ok(&self.declaration(id)?.overrides)
    }

    fn annotation(&self, id: DeclId) -> HostResult<Option<&Annotation>> {
        Ok(self.declaration(id)?.annotation.as_ref())
    }

    fn position(&self, id: DeclId) -> HostResult<&SourcePosition> {
        Ok(&self.declaration(id)?.position)
    }

    fn container(&self, id: DeclId) -> HostResult<Option<DeclId>> {
        Ok(self.declaration(id)?.container)
    }

    /// Synthesized members of a class; empty for anything that is not a class.
    fn fake_override_members(&self, id: DeclId) -> HostResult<&[DeclId]> {
        match &self.declaration(id)?.kind {
            DeclKind::Class { fake_overrides, .. } => Ok(fake_overrides),
            _ => Ok(&[]),
        }
    }

    fn native_name(&self, id: DeclId) -> HostResult<String> {
        Ok(self.declaration(id)?.name.clone())
    }

    /// Name slots of `id`: the declaration itself, then for functions the
    /// receiver slot and each value parameter.
    fn name_slots(&self, id: DeclId) -> HostResult<Vec<Option<DeclId>>> {
        Ok(self.declaration(id)?.name_slots())
    }

    /// Owning function of a parameter or receiver, and its slot index there.
    fn slot_owner(&self, id: DeclId) -> HostResult<Option<(DeclId, usize)>> {
        let decl = self.declaration(id)?;
        if !matches!(decl.kind, DeclKind::Parameter | DeclKind::Receiver) {
            return Ok(None);
        }
        let Some(owner) = decl.container else {
            return Ok(None);
        };
        let index = self
            .name_slots(owner)?
            .iter()
            .position(|slot| *slot == Some(id))
            .ok_or(HostError::KindMismatch { decl: id, expected: "slot of its container" })?;
        Ok(Some((owner, index)))
    }
}
