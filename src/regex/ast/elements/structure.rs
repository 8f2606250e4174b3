//! Sequences, alternations and back-references

use super::super::range::IndexRange;
use super::super::source::{RegexSource, SourceCharacter};
use crate::regex::automaton::StateId;

/// Items matched one after the other; may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTree {
    items: Vec<StateId>,
}

impl SequenceTree {
    pub(crate) fn new(items: Vec<StateId>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[StateId] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Alternatives in the order they were written, with the `|` between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjunctionTree {
    alternatives: Vec<StateId>,
    or_operators: Vec<SourceCharacter>,
}

impl DisjunctionTree {
    pub(crate) fn new(alternatives: Vec<StateId>, or_operators: Vec<SourceCharacter>) -> Self {
        Self {
            alternatives,
            or_operators,
        }
    }

    pub fn alternatives(&self) -> &[StateId] {
        &self.alternatives
    }

    pub fn or_operators(&self) -> &[SourceCharacter] {
        &self.or_operators
    }
}

/// `\1`, `\k<name>`, `(?P=name)` and similar
///
/// The referenced capturing group is resolved after the tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackReferenceTree {
    group_name: String,
    key: Option<SourceCharacter>,
    group: Option<StateId>,
}

impl BackReferenceTree {
    /// Read the group name from the characters delimiting it
    ///
    /// When `start` is one of `<`, `'`, `{` or `=` the name sits strictly
    /// between `start` and `end`. Otherwise the reference is numerical and
    /// the digits run from `start` to `end` inclusive.
    pub fn new(
        source: &RegexSource,
        key: Option<SourceCharacter>,
        start: &SourceCharacter,
        end: &SourceCharacter,
    ) -> Self {
        let group_name = match start.character {
            '<' | '\'' | '{' | '=' => source.substring_at(&IndexRange::new(
                start.range.beginning + 1,
                end.range.beginning,
            )),
            _ => source.substring_at(&start.range.merge(&end.range)),
        };
        Self {
            group_name: group_name.to_string(),
            key,
            group: None,
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// The `k` of `\k<name>`, absent for numerical references
    pub fn key(&self) -> Option<&SourceCharacter> {
        self.key.as_ref()
    }

    pub fn is_named_group(&self) -> bool {
        self.key.is_some()
    }

    pub fn is_numerical(&self) -> bool {
        self.key.is_none()
    }

    /// The referenced group number, `None` for named references
    pub fn group_number(&self) -> Option<u32> {
        if !self.is_numerical() {
            return None;
        }
        self.group_name.parse().ok()
    }

    /// The capturing group this reference was resolved to
    pub fn group(&self) -> Option<StateId> {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: Option<StateId>) {
        self.group = group;
    }
}
