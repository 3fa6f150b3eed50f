use std::collections::HashSet;

use tracing::trace;

use crate::error::{HostError, HostResult};
use crate::model::{DeclId, DeclarationHost};
use crate::names::NameSpec;

/// Follow first override edges from `start` until a declaration that
/// overrides nothing, checking slot arity on every step.
///
/// A revisited declaration means the host supplied a cyclic graph; the walk
/// stops with [`HostError::CyclicOverride`] instead of looping.
pub fn first_base(host: &dyn DeclarationHost, start: DeclId) -> HostResult<DeclId> {
    let mut visited = HashSet::from([start]);
    let mut current = start;
    loop {
        let Some(&next) = host.overrides(current)?.first() else {
            trace!(%start, root = %current, "resolved first base");
            return Ok(current);
        };
        check_arity(host, current, next)?;
        if !visited.insert(next) {
            return Err(HostError::CyclicOverride { start, repeated: next });
        }
        current = next;
    }
}

/// A declaration and a base it directly overrides must carry the same slots.
pub fn check_arity(host: &dyn DeclarationHost, overriding: DeclId, base: DeclId) -> HostResult<()> {
    let overriding_slots = host.name_slots(overriding)?.len();
    let base_slots = host.name_slots(base)?.len();
    if overriding_slots != base_slots {
        return Err(HostError::ArityMismatch { overriding, overriding_slots, base, base_slots });
    }
    Ok(())
}

/// Name specs of every slot of `id`: declaration, receiver, parameters.
pub fn slot_specs(host: &dyn DeclarationHost, id: DeclId) -> HostResult<Vec<Option<NameSpec>>> {
    host.name_slots(id)?
        .into_iter()
        .map(|slot| match slot {
            Some(slot) => Ok(NameSpec::from_annotation(host.annotation(slot)?)),
            None => Ok(None),
        })
        .collect()
}
