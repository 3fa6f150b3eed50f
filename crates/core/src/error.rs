use thiserror::Error;

use crate::model::DeclId;

/// Fatal error raised when the host hands us data that breaks its contract.
///
/// These are never user-facing diagnostics: a malformed annotation written by
/// a user becomes a `Diagnostic`, while a malformed *graph* supplied by the
/// host compiler ends the pass with one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A declaration id was referenced but never supplied.
    #[error("Unknown declaration {0}")]
    UnknownDeclaration(DeclId),

    /// The same id was supplied twice.
    #[error("Duplicate declaration {0}")]
    DuplicateDeclaration(DeclId),

    /// Following override edges from `start` came back to `repeated`.
    #[error("Cyclic override graph: walking from {start} revisited {repeated}")]
    CyclicOverride { start: DeclId, repeated: DeclId },

    /// Following container links from `start` came back to `repeated`.
    #[error("Cyclic container chain: walking from {start} revisited {repeated}")]
    CyclicContainer { start: DeclId, repeated: DeclId },

    /// A class lists a member as a fake override, but the member is not synthesized.
    #[error("Fake override {member} of {class} is not marked synthetic")]
    UnsyntheticFakeOverride { class: DeclId, member: DeclId },

    /// A declaration and a base it directly overrides disagree on their slot shape.
    #[error("{overriding} has {overriding_slots} name slots but its base {base} has {base_slots}")]
    ArityMismatch { overriding: DeclId, overriding_slots: usize, base: DeclId, base_slots: usize },

    /// A reference points at a declaration of the wrong kind.
    #[error("Declaration {decl} is not a {expected}")]
    KindMismatch { decl: DeclId, expected: &'static str },

    /// An annotation was attached where the host can never place one.
    #[error("Malformed annotation on {decl}: {reason}")]
    MalformedAnnotation { decl: DeclId, reason: String },
}

/// Convenience result type for operations over a host graph.
pub type HostResult<T> = Result<T, HostError>;
