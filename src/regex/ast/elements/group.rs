//! Groups: capturing, non-capturing, atomic, lookaround and conditional
//!
//! All group-like nodes share a [`GroupTree`] part holding the optional
//! element and the header token (the text from the opening parenthesis up to
//! the element, e.g. `(?<name>` or `(?=`).

use super::super::flags::FlagSet;
use super::super::source::{RegexToken, SourceCharacter};
use crate::regex::automaton::StateId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTree {
    element: Option<StateId>,
    header: Option<RegexToken>,
}

impl GroupTree {
    pub(crate) fn new(element: Option<StateId>, header: Option<RegexToken>) -> Self {
        Self { element, header }
    }

    /// The group body; only non-capturing groups without a body and
    /// condition-like groups have none
    pub fn element(&self) -> Option<StateId> {
        self.element
    }

    /// Absent when the group has no element
    pub fn header(&self) -> Option<&RegexToken> {
        self.header.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturingGroupTree {
    pub(crate) group: GroupTree,
    name: Option<String>,
    group_number: u32,
}

impl CapturingGroupTree {
    pub(crate) fn new(group: GroupTree, name: Option<String>, group_number: u32) -> Self {
        Self {
            group,
            name,
            group_number,
        }
    }

    pub fn group(&self) -> &GroupTree {
        &self.group
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn group_number(&self) -> u32 {
        self.group_number
    }
}

/// `(?:...)` and `(?flags-flags:...)`, or a bare `(?flags)` without element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonCapturingGroupTree {
    pub(crate) group: GroupTree,
    enabled_flags: FlagSet,
    disabled_flags: FlagSet,
}

impl NonCapturingGroupTree {
    pub(crate) fn new(group: GroupTree, enabled_flags: FlagSet, disabled_flags: FlagSet) -> Self {
        Self {
            group,
            enabled_flags,
            disabled_flags,
        }
    }

    pub fn group(&self) -> &GroupTree {
        &self.group
    }

    pub fn enabled_flags(&self) -> &FlagSet {
        &self.enabled_flags
    }

    pub fn disabled_flags(&self) -> &FlagSet {
        &self.disabled_flags
    }
}

/// `(?>...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicGroupTree {
    pub(crate) group: GroupTree,
}

impl AtomicGroupTree {
    pub(crate) fn new(group: GroupTree) -> Self {
        Self { group }
    }

    pub fn group(&self) -> &GroupTree {
        &self.group
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ahead,
    Behind,
}

/// `(?=...)`, `(?!...)`, `(?<=...)` and `(?<!...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookAroundTree {
    pub(crate) group: GroupTree,
    polarity: Polarity,
    direction: Direction,
    inner: StateId,
}

impl LookAroundTree {
    pub(crate) fn new(group: GroupTree, polarity: Polarity, direction: Direction, inner: StateId) -> Self {
        Self {
            group,
            polarity,
            direction,
            inner,
        }
    }

    pub fn group(&self) -> &GroupTree {
        &self.group
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_negative(&self) -> bool {
        self.polarity == Polarity::Negative
    }

    pub fn is_behind(&self) -> bool {
        self.direction == Direction::Behind
    }

    /// The first successor of the lookaround
    ///
    /// The element itself, wrapped in a negation state when negative and in
    /// a start-of-lookbehind state when looking behind.
    pub fn inner(&self) -> StateId {
        self.inner
    }
}

/// The `(1)` or `(name)` condition of a conditional subpattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceConditionTree {
    pub(crate) group: GroupTree,
    reference: String,
}

impl ReferenceConditionTree {
    pub(crate) fn new(reference: String) -> Self {
        Self {
            group: GroupTree::new(None, None),
            reference,
        }
    }

    pub fn group(&self) -> &GroupTree {
        &self.group
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }
}

/// `(?(condition)yes|no)`
///
/// The condition is either a [`ReferenceConditionTree`] or a lookaround.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalSubpatternTree {
    pub(crate) group: GroupTree,
    condition: StateId,
    yes_pattern: StateId,
    pipe: Option<SourceCharacter>,
    no_pattern: Option<StateId>,
}

impl ConditionalSubpatternTree {
    pub(crate) fn new(
        condition: StateId,
        yes_pattern: StateId,
        pipe: Option<SourceCharacter>,
        no_pattern: Option<StateId>,
    ) -> Self {
        Self {
            group: GroupTree::new(None, None),
            condition,
            yes_pattern,
            pipe,
            no_pattern,
        }
    }

    pub fn group(&self) -> &GroupTree {
        &self.group
    }

    pub fn condition(&self) -> StateId {
        self.condition
    }

    pub fn yes_pattern(&self) -> StateId {
        self.yes_pattern
    }

    pub fn pipe(&self) -> Option<&SourceCharacter> {
        self.pipe.as_ref()
    }

    pub fn no_pattern(&self) -> Option<StateId> {
        self.no_pattern
    }
}
