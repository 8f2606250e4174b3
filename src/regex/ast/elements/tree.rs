//! The regex tree node
//!
//! Every node of the syntax tree is a [`RegexTree`]: its range, a snapshot of
//! the flags active where it was written, the kind-specific payload in
//! [`RegexNode`], and the write-once continuation that the linking pass
//! fills in.
//!
//! Children are referenced by [`StateId`] into the owning
//! [`Automaton`](crate::regex::automaton::Automaton), so the tree and the
//! glue states created while linking share one arena.

use super::super::flags::FlagSet;
use super::super::range::IndexRange;
use super::super::traits::RegexSyntaxElement;
use super::character::{BoundaryTree, CharacterTree, EscapedCharacterClassTree};
use super::character_class::CharacterClassTree;
use super::group::{
    AtomicGroupTree, CapturingGroupTree, ConditionalSubpatternTree, GroupTree, LookAroundTree,
    NonCapturingGroupTree, ReferenceConditionTree,
};
use super::repetition::RepetitionTree;
use super::structure::{BackReferenceTree, DisjunctionTree, SequenceTree};
use crate::regex::automaton::{StateId, TransitionType};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// The kind of a tree node as seen by analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    BackReference,
    Boundary,
    CharacterClass,
    Disjunction,
    Dot,
    EscapedCharacterClass,
    CapturingGroup,
    NonCapturingGroup,
    AtomicGroup,
    LookAround,
    Character,
    Repetition,
    Sequence,
    MiscEscapeSequence,
    ConditionalSubpatterns,
}

/// Kind-specific payload of a tree node
#[derive(Debug, Clone)]
pub enum RegexNode {
    Character(CharacterTree),
    Dot,
    Boundary(BoundaryTree),
    Sequence(SequenceTree),
    Disjunction(DisjunctionTree),
    CapturingGroup(CapturingGroupTree),
    NonCapturingGroup(NonCapturingGroupTree),
    AtomicGroup(AtomicGroupTree),
    LookAround(LookAroundTree),
    BackReference(BackReferenceTree),
    ReferenceCondition(ReferenceConditionTree),
    Repetition(RepetitionTree),
    CharacterClass(CharacterClassTree),
    EscapedCharacterClass(EscapedCharacterClassTree),
    /// An escape sequence whose meaning does not matter to any analysis
    MiscEscapeSequence,
    ConditionalSubpattern(ConditionalSubpatternTree),
}

impl RegexNode {
    pub fn kind(&self) -> Kind {
        match self {
            RegexNode::Character(_) => Kind::Character,
            RegexNode::Dot => Kind::Dot,
            RegexNode::Boundary(_) => Kind::Boundary,
            RegexNode::Sequence(_) => Kind::Sequence,
            RegexNode::Disjunction(_) => Kind::Disjunction,
            RegexNode::CapturingGroup(_) => Kind::CapturingGroup,
            RegexNode::NonCapturingGroup(_) => Kind::NonCapturingGroup,
            RegexNode::AtomicGroup(_) => Kind::AtomicGroup,
            RegexNode::LookAround(_) => Kind::LookAround,
            // a reference condition checks a group the same way a back-reference does
            RegexNode::BackReference(_) | RegexNode::ReferenceCondition(_) => Kind::BackReference,
            RegexNode::Repetition(_) => Kind::Repetition,
            RegexNode::CharacterClass(_) => Kind::CharacterClass,
            RegexNode::EscapedCharacterClass(_) => Kind::EscapedCharacterClass,
            RegexNode::MiscEscapeSequence => Kind::MiscEscapeSequence,
            RegexNode::ConditionalSubpattern(_) => Kind::ConditionalSubpatterns,
        }
    }

    /// Name of the node type, used for snapshots and diagnostics
    pub fn node_type(&self) -> &'static str {
        match self {
            RegexNode::Character(_) => "Character",
            RegexNode::Dot => "Dot",
            RegexNode::Boundary(_) => "Boundary",
            RegexNode::Sequence(_) => "Sequence",
            RegexNode::Disjunction(_) => "Disjunction",
            RegexNode::CapturingGroup(_) => "CapturingGroup",
            RegexNode::NonCapturingGroup(_) => "NonCapturingGroup",
            RegexNode::AtomicGroup(_) => "AtomicGroup",
            RegexNode::LookAround(_) => "LookAround",
            RegexNode::BackReference(_) => "BackReference",
            RegexNode::ReferenceCondition(_) => "ReferenceCondition",
            RegexNode::Repetition(_) => "Repetition",
            RegexNode::CharacterClass(_) => "CharacterClass",
            RegexNode::EscapedCharacterClass(_) => "EscapedCharacterClass",
            RegexNode::MiscEscapeSequence => "MiscEscapeSequence",
            RegexNode::ConditionalSubpattern(_) => "ConditionalSubpattern",
        }
    }

    /// The group part of group-like nodes
    pub fn group(&self) -> Option<&GroupTree> {
        match self {
            RegexNode::CapturingGroup(tree) => Some(&tree.group),
            RegexNode::NonCapturingGroup(tree) => Some(&tree.group),
            RegexNode::AtomicGroup(tree) => Some(&tree.group),
            RegexNode::LookAround(tree) => Some(&tree.group),
            RegexNode::ReferenceCondition(tree) => Some(&tree.group),
            RegexNode::ConditionalSubpattern(tree) => Some(&tree.group),
            _ => None,
        }
    }

    pub fn incoming_transition_type(&self) -> TransitionType {
        match self {
            RegexNode::Character(_)
            | RegexNode::Dot
            | RegexNode::CharacterClass(_)
            | RegexNode::EscapedCharacterClass(_)
            | RegexNode::MiscEscapeSequence => TransitionType::Character,
            RegexNode::BackReference(_) => TransitionType::BackReference,
            _ => TransitionType::Epsilon,
        }
    }
}

/// A node of the syntax tree, and a state of the automaton once linked
#[derive(Debug, Clone)]
pub struct RegexTree {
    range: IndexRange,
    active_flags: FlagSet,
    node: RegexNode,
    continuation: OnceCell<StateId>,
}

impl RegexTree {
    pub(crate) fn new(range: IndexRange, active_flags: FlagSet, node: RegexNode) -> Self {
        Self {
            range,
            active_flags,
            node,
            continuation: OnceCell::new(),
        }
    }

    pub fn node(&self) -> &RegexNode {
        &self.node
    }

    pub(crate) fn node_mut(&mut self) -> &mut RegexNode {
        &mut self.node
    }

    pub fn kind(&self) -> Kind {
        self.node.kind()
    }

    pub fn node_type(&self) -> &'static str {
        self.node.node_type()
    }

    /// Check whether this node is of any of the given kinds
    pub fn is(&self, kinds: &[Kind]) -> bool {
        kinds.contains(&self.kind())
    }

    pub fn active_flags(&self) -> &FlagSet {
        &self.active_flags
    }

    pub fn group(&self) -> Option<&GroupTree> {
        self.node.group()
    }

    pub fn incoming_transition_type(&self) -> TransitionType {
        self.node.incoming_transition_type()
    }

    /// The state following this one
    ///
    /// # Panics
    ///
    /// If called before the continuation was set.
    pub fn continuation(&self) -> StateId {
        match self.continuation.get() {
            Some(next) => *next,
            None => panic!("RegexTree continuation read before it was set"),
        }
    }

    pub fn try_continuation(&self) -> Option<StateId> {
        self.continuation.get().copied()
    }

    pub fn has_continuation(&self) -> bool {
        self.continuation.get().is_some()
    }

    /// Store the continuation, handing back the one already stored on a second call
    pub(crate) fn store_continuation(&self, next: StateId) -> Result<(), StateId> {
        self.continuation.set(next).map_err(|_| self.continuation())
    }
}

impl RegexSyntaxElement for RegexTree {
    fn range(&self) -> IndexRange {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::ast::elements::character::BoundaryType;

    fn tree(node: RegexNode) -> RegexTree {
        RegexTree::new(IndexRange::new(0, 1), FlagSet::new(), node)
    }

    #[test]
    fn test_kind_and_transition() {
        let character = tree(RegexNode::Character(CharacterTree::new('a' as u32, false)));
        assert_eq!(character.kind(), Kind::Character);
        assert_eq!(
            character.incoming_transition_type(),
            TransitionType::Character
        );

        let boundary = tree(RegexNode::Boundary(BoundaryTree::new(BoundaryType::LineEnd)));
        assert_eq!(boundary.kind(), Kind::Boundary);
        assert_eq!(boundary.incoming_transition_type(), TransitionType::Epsilon);
        assert!(boundary.is(&[Kind::Dot, Kind::Boundary]));
        assert!(!boundary.is(&[Kind::Dot]));
    }

    #[test]
    fn test_continuation_is_write_once() {
        let dot = tree(RegexNode::Dot);
        assert!(!dot.has_continuation());
        assert_eq!(dot.try_continuation(), None);

        let first = StateId::from_index(4);
        assert_eq!(dot.store_continuation(first), Ok(()));
        assert_eq!(dot.store_continuation(StateId::from_index(5)), Err(first));
        assert_eq!(dot.continuation(), first);
    }

    #[test]
    #[should_panic(expected = "continuation read before it was set")]
    fn test_continuation_before_set_panics() {
        tree(RegexNode::Dot).continuation();
    }
}
