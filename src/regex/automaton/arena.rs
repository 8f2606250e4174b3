//! Arena of automaton states
//!
//! Tree nodes and glue states live side by side in one `Vec`, addressed by
//! [`StateId`]. Continuations, branch successors and parent links are plain
//! ids, so the loops created by repetitions need no shared ownership.
//!
//! ```text
//! a(b|c)*d
//!
//!   'a' -> Repetition -> Disjunction -> 'b' -+
//!            ^   |                    -> 'c' -+
//!            |   v                            |
//!            |  EndOfRepetition -> 'd'        |
//!            +-----------------------------------+
//! ```
//!
//! All queries here are read-only. The only mutation after construction is
//! the write-once continuation, see [`linking`](super::linking).

use super::state::{State, StateId, TransitionType};
use crate::regex::ast::{
    AutomatonError, FlagSet, RegexNode, RegexSource, RegexSyntaxElement, RegexTree,
};

#[derive(Debug, Clone)]
pub struct Automaton {
    source: RegexSource,
    states: Vec<State>,
}

impl Automaton {
    pub fn new(source: RegexSource) -> Self {
        Self {
            source,
            states: Vec::new(),
        }
    }

    pub fn source(&self) -> &RegexSource {
        &self.source
    }

    pub(crate) fn push(&mut self, state: State) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(state);
        id
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.states.len()).map(StateId::from_index)
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    /// # Panics
    ///
    /// If `id` does not belong to this automaton.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn try_tree(&self, id: StateId) -> Result<&RegexTree, AutomatonError> {
        self.get(id)
            .and_then(State::as_tree)
            .ok_or(AutomatonError::NotATree { state: id })
    }

    /// # Panics
    ///
    /// If `id` is a glue state.
    pub fn tree(&self, id: StateId) -> &RegexTree {
        match self.try_tree(id) {
            Ok(tree) => tree,
            Err(error) => panic!("{}", error),
        }
    }

    pub(crate) fn tree_mut(&mut self, id: StateId) -> Result<&mut RegexTree, AutomatonError> {
        match self.states.get_mut(id.index()) {
            Some(State::Tree(tree)) => Ok(tree),
            _ => Err(AutomatonError::NotATree { state: id }),
        }
    }

    /// The pattern text of a tree node; glue states have none
    pub fn text(&self, id: StateId) -> &str {
        match self.get(id).and_then(State::as_tree) {
            Some(tree) => tree.text(&self.source),
            None => "",
        }
    }

    /// The continuation of any state, `Ok(None)` only for the final state
    pub fn try_continuation(&self, id: StateId) -> Result<Option<StateId>, AutomatonError> {
        match self.get(id) {
            Some(State::Tree(tree)) => tree
                .try_continuation()
                .map(Some)
                .ok_or(AutomatonError::ContinuationNotSet { state: id }),
            Some(State::Branch(branch)) => self.try_continuation(branch.parent),
            Some(State::EndOfRepetition(end)) => Ok(Some(end.continuation)),
            Some(State::EndOfCapturingGroup(end)) => self.try_continuation(end.group),
            Some(State::EndOfLookaround(end)) => self.try_continuation(end.lookaround),
            Some(State::Negation(negation)) => Ok(Some(negation.content)),
            Some(State::StartOfLookBehind(start)) => Ok(Some(start.content)),
            Some(State::EndOfConditionalSubpatterns(end)) => self.try_continuation(end.parent),
            Some(State::Start(start)) => Ok(Some(start.root)),
            Some(State::Final(_)) => Ok(None),
            None => Err(AutomatonError::NotATree { state: id }),
        }
    }

    /// The continuation of any state, `None` only for the final state
    ///
    /// # Panics
    ///
    /// If the continuation of the tree node behind `id` was not set yet.
    pub fn continuation(&self, id: StateId) -> Option<StateId> {
        match self.try_continuation(id) {
            Ok(next) => next,
            Err(error) => panic!("{}", error),
        }
    }

    /// The states the automaton may move to from `id`, in preference order
    pub fn successors(&self, id: StateId) -> Vec<StateId> {
        let tree = match self.state(id) {
            State::Tree(tree) => tree,
            State::Branch(branch) => return branch.successors.clone(),
            State::Final(_) => return Vec::new(),
            _ => return self.continuation(id).into_iter().collect(),
        };
        match tree.node() {
            RegexNode::Sequence(sequence) => match sequence.items().first() {
                Some(first) => vec![*first],
                None => vec![tree.continuation()],
            },
            RegexNode::Disjunction(disjunction) => disjunction.alternatives().to_vec(),
            RegexNode::LookAround(lookaround) => vec![lookaround.inner(), tree.continuation()],
            RegexNode::Repetition(repetition) => {
                let quantifier = repetition.quantifier();
                if quantifier.minimum_repetitions() > 0 {
                    vec![repetition.element()]
                } else if quantifier.maximum_repetitions() == Some(0) {
                    vec![tree.continuation()]
                } else if repetition.is_reluctant() {
                    vec![tree.continuation(), repetition.element()]
                } else {
                    vec![repetition.element(), tree.continuation()]
                }
            }
            node => match node.group().and_then(|group| group.element()) {
                Some(element) => vec![element],
                None => vec![tree.continuation()],
            },
        }
    }

    pub fn incoming_transition_type(&self, id: StateId) -> TransitionType {
        match self.state(id) {
            State::Tree(tree) => tree.incoming_transition_type(),
            State::Negation(_) => TransitionType::Negation,
            State::StartOfLookBehind(_) => TransitionType::LookaroundBacktracking,
            _ => TransitionType::Epsilon,
        }
    }

    /// The flags in effect at `id`; glue states report those of their tree node
    pub fn active_flags(&self, id: StateId) -> &FlagSet {
        match self.state(id) {
            State::Tree(tree) => tree.active_flags(),
            State::Branch(branch) => self.active_flags(branch.parent),
            State::EndOfRepetition(end) => self.active_flags(end.parent),
            State::EndOfCapturingGroup(end) => self.active_flags(end.group),
            State::EndOfLookaround(end) => self.active_flags(end.lookaround),
            State::Negation(negation) => self.active_flags(negation.lookaround),
            State::StartOfLookBehind(start) => self.active_flags(start.lookaround),
            State::EndOfConditionalSubpatterns(end) => self.active_flags(end.parent),
            State::Start(start) => &start.flags,
            State::Final(end) => &end.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::ast::{CharacterTree, IndexRange, RegexDialect};
    use crate::regex::automaton::state::FinalState;

    fn automaton() -> Automaton {
        Automaton::new(RegexSource::new("ab", RegexDialect::Java))
    }

    fn character(offset: i32, character: char) -> State {
        State::Tree(RegexTree::new(
            IndexRange::new(offset, offset + 1),
            FlagSet::new(),
            RegexNode::Character(CharacterTree::new(character as u32, false)),
        ))
    }

    #[test]
    fn test_push_and_lookup() {
        let mut automaton = automaton();
        let a = automaton.push(character(0, 'a'));
        let b = automaton.push(character(1, 'b'));
        assert_eq!(automaton.len(), 2);
        assert_eq!(automaton.ids().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(automaton.text(b), "b");
        assert_eq!(
            automaton.incoming_transition_type(a),
            TransitionType::Character
        );
    }

    #[test]
    fn test_unset_continuation() {
        let mut automaton = automaton();
        let a = automaton.push(character(0, 'a'));
        assert_eq!(
            automaton.try_continuation(a),
            Err(AutomatonError::ContinuationNotSet { state: a })
        );
    }

    #[test]
    fn test_final_state() {
        let mut automaton = automaton();
        let end = automaton.push(State::Final(FinalState {
            flags: FlagSet::with_flags(FlagSet::MULTILINE),
        }));
        assert_eq!(automaton.continuation(end), None);
        assert!(automaton.successors(end).is_empty());
        assert_eq!(automaton.text(end), "");
        assert!(automaton.active_flags(end).contains(FlagSet::MULTILINE));
        assert_eq!(
            automaton.try_tree(end).unwrap_err(),
            AutomatonError::NotATree { state: end }
        );
    }
}
