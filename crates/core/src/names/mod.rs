//! Parsed foreign-name annotations.
//!
//! A [`NameSpec`] exists only for declarations that carry the annotation:
//! `None` means "no foreign name requested", which is different from an
//! annotation whose names are both blank.

pub mod grammar;

use serde::Serialize;

use crate::model::{Annotation, SourcePosition};

/// Validated shape of one foreign-name annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSpec {
    /// Primary foreign identifier; `None` when omitted or blank.
    pub primary: Option<String>,
    /// Secondary-platform identifier; `None` when omitted or blank.
    pub secondary: Option<String>,
    /// Emit `primary` verbatim, without decoration.
    pub exact: bool,
    /// Where the annotation was written, for diagnostics only.
    #[serde(skip)]
    pub origin: Option<SourcePosition>,
}

impl NameSpec {
    /// Parse an annotation instance. Total: never fails and never reports.
    pub fn parse(annotation: &Annotation) -> Self {
        let args = &annotation.args;
        Self {
            primary: non_blank(args.name.as_deref()),
            secondary: non_blank(args.swift_name.as_deref()),
            exact: args.exact.unwrap_or(false),
            origin: annotation.position.clone(),
        }
    }

    /// Parse an optional annotation; absence stays absence.
    pub fn from_annotation(annotation: Option<&Annotation>) -> Option<Self> {
        annotation.map(Self::parse)
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Present names, primary first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.primary.as_deref().into_iter().chain(self.secondary.as_deref())
    }

    /// Equality used across override chains.
    ///
    /// Names always participate; `exact` only when `compare_exact` is set.
    pub fn same_names(&self, other: &NameSpec, compare_exact: bool) -> bool {
        self.primary == other.primary
            && self.secondary == other.secondary
            && (!compare_exact || self.exact == other.exact)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}
