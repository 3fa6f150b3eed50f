//! Identifier grammar for foreign names.
//!
//! Only plain ASCII identifiers are accepted, for secondary names too:
//! first character in `[A-Za-z_]`, the rest in `[A-Za-z0-9_]`.

use crate::names::NameSpec;

pub fn is_valid_first_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_valid_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Offending characters of a name spec, as reported to users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidChars {
    /// First characters outside `[A-Za-z_]`.
    pub first: Vec<char>,
    /// Characters anywhere in a name outside `[A-Za-z0-9_]`.
    pub interior: Vec<char>,
}

impl InvalidChars {
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.interior.is_empty()
    }

    /// Union of both sets, first-character offenders first.
    pub fn merged(&self) -> Vec<char> {
        let mut merged = self.first.clone();
        for c in &self.interior {
            push_unique(&mut merged, *c);
        }
        merged
    }
}

/// Collect invalid characters of every present name of `spec`.
///
/// Each list is deduplicated and keeps first-appearance order, primary name
/// before secondary name.
pub fn invalid_chars(spec: &NameSpec) -> InvalidChars {
    let mut found = InvalidChars::default();
    for name in spec.names() {
        if let Some(first) = name.chars().next() {
            if !is_valid_first_char(first) {
                push_unique(&mut found.first, first);
            }
        }
        for c in name.chars().filter(|c| !is_valid_char(*c)) {
            push_unique(&mut found.interior, c);
        }
    }
    found
}

fn push_unique(chars: &mut Vec<char>, c: char) {
    if !chars.contains(&c) {
        chars.push(c);
    }
}

pub fn render_chars(chars: &[char]) -> String {
    chars.iter().collect()
}
