//! Automaton states
//!
//! A [`State`] is either a tree node or one of the glue states that the
//! linking pass inserts where no tree node marks a control-flow joint.
//! Glue states point at the tree node they belong to and borrow its flags;
//! only the start and final states carry flags of their own.

use crate::regex::ast::{FlagSet, RegexTree};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a state in an [`Automaton`](super::Automaton)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(u32);

impl StateId {
    /// # Panics
    ///
    /// If `index` does not fit in a `u32`.
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) => StateId(index),
            Err(_) => panic!("state index {} exceeds the StateId range", index),
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happens when the automaton moves into a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionType {
    Epsilon,
    Character,
    BackReference,
    LookaroundBacktracking,
    Negation,
}

/// A choice point with a fixed successor order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchState {
    pub parent: StateId,
    pub successors: Vec<StateId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfRepetitionState {
    pub parent: StateId,
    pub continuation: StateId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfCapturingGroupState {
    pub group: StateId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfLookaroundState {
    pub lookaround: StateId,
}

/// Entry into the element of a negative lookaround
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegationState {
    pub lookaround: StateId,
    pub content: StateId,
}

/// Entry into a lookbehind; scanning continues backwards from here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOfLookBehindState {
    pub lookaround: StateId,
    pub content: StateId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfConditionalSubpatternsState {
    pub parent: StateId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartState {
    pub root: StateId,
    pub flags: FlagSet,
}

/// The end-of-regex sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalState {
    pub flags: FlagSet,
}

#[derive(Debug, Clone)]
pub enum State {
    Tree(RegexTree),
    Branch(BranchState),
    EndOfRepetition(EndOfRepetitionState),
    EndOfCapturingGroup(EndOfCapturingGroupState),
    EndOfLookaround(EndOfLookaroundState),
    Negation(NegationState),
    StartOfLookBehind(StartOfLookBehindState),
    EndOfConditionalSubpatterns(EndOfConditionalSubpatternsState),
    Start(StartState),
    Final(FinalState),
}

impl State {
    pub fn as_tree(&self) -> Option<&RegexTree> {
        match self {
            State::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, State::Tree(_))
    }

    /// Name of the state, the node type for tree nodes
    pub fn name(&self) -> &'static str {
        match self {
            State::Tree(tree) => tree.node_type(),
            State::Branch(_) => "Branch",
            State::EndOfRepetition(_) => "EndOfRepetition",
            State::EndOfCapturingGroup(_) => "EndOfCapturingGroup",
            State::EndOfLookaround(_) => "EndOfLookaround",
            State::Negation(_) => "Negation",
            State::StartOfLookBehind(_) => "StartOfLookBehind",
            State::EndOfConditionalSubpatterns(_) => "EndOfConditionalSubpatterns",
            State::Start(_) => "Start",
            State::Final(_) => "Final",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_id_display() {
        let id = StateId::from_index(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "#7");
    }

    #[test]
    fn test_state_id_upper_bound() {
        assert_eq!(StateId::from_index(u32::MAX as usize).index(), u32::MAX as usize);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "exceeds the StateId range")]
    fn test_state_id_out_of_range_panics() {
        StateId::from_index(u32::MAX as usize + 1);
    }

    #[test]
    fn test_state_names() {
        let branch = State::Branch(BranchState {
            parent: StateId::from_index(0),
            successors: vec![],
        });
        assert_eq!(branch.name(), "Branch");
        assert!(!branch.is_tree());
        assert!(branch.as_tree().is_none());
    }
}
