//! Continuation linking
//!
//! Setting the continuation of a node cascades into its children, creating
//! the glue states each kind needs on the way:
//!
//! - Sequence: only the last item receives it; the items were chained to
//!   each other when the sequence was built
//! - Disjunction: every alternative receives the same continuation
//! - Non-capturing and atomic groups: the element receives it unchanged
//! - Capturing groups, lookarounds, reference conditions: stored only; the
//!   element was already linked to the group's end state at construction
//! - Repetition: the node continues to an end-of-repetition state, and the
//!   element loops back through a branch (`min >= 1`) or the node itself
//! - Conditional subpattern: the condition continues to a branch between
//!   the yes pattern and the no pattern (or the continuation)
//!
//! A continuation can be set once. Setting it again is a fault in the order
//! of construction calls and panics, or returns
//! [`AutomatonError::ContinuationAlreadySet`] from the `try_` variant.

use super::arena::Automaton;
use super::state::{BranchState, EndOfRepetitionState, State, StateId};
use crate::regex::ast::{AutomatonError, RegexNode};

/// What linking a node does beyond storing its continuation
enum LinkPlan {
    StoreOnly,
    Forward(StateId),
    FanOut(Vec<StateId>),
    Repetition {
        element: StateId,
        minimum: u32,
        maximum: Option<u32>,
        reluctant: bool,
    },
    Conditional {
        condition: StateId,
        yes_pattern: StateId,
        no_pattern: Option<StateId>,
    },
}

impl LinkPlan {
    fn for_node(node: &RegexNode) -> Self {
        match node {
            RegexNode::Sequence(sequence) => match sequence.items().last() {
                Some(last) => LinkPlan::Forward(*last),
                None => LinkPlan::StoreOnly,
            },
            RegexNode::Disjunction(disjunction) => {
                LinkPlan::FanOut(disjunction.alternatives().to_vec())
            }
            RegexNode::NonCapturingGroup(group) => match group.group().element() {
                Some(element) => LinkPlan::Forward(element),
                None => LinkPlan::StoreOnly,
            },
            RegexNode::AtomicGroup(group) => match group.group().element() {
                Some(element) => LinkPlan::Forward(element),
                None => LinkPlan::StoreOnly,
            },
            RegexNode::Repetition(repetition) => LinkPlan::Repetition {
                element: repetition.element(),
                minimum: repetition.quantifier().minimum_repetitions(),
                maximum: repetition.quantifier().maximum_repetitions(),
                reluctant: repetition.is_reluctant(),
            },
            RegexNode::ConditionalSubpattern(conditional) => LinkPlan::Conditional {
                condition: conditional.condition(),
                yes_pattern: conditional.yes_pattern(),
                no_pattern: conditional.no_pattern(),
            },
            _ => LinkPlan::StoreOnly,
        }
    }

    fn rule(&self) -> &'static str {
        match self {
            LinkPlan::StoreOnly => "store",
            LinkPlan::Forward(_) => "forward",
            LinkPlan::FanOut(_) => "fan-out",
            LinkPlan::Repetition { .. } => "repetition",
            LinkPlan::Conditional { .. } => "conditional",
        }
    }
}

impl Automaton {
    /// Link the tree node `id` to `next` and cascade into its children
    ///
    /// # Panics
    ///
    /// If `id` is not a tree node, or if the continuation of `id` or of one
    /// of the children it cascades into was already set.
    pub fn set_continuation(&mut self, id: StateId, next: StateId) {
        if let Err(error) = self.try_set_continuation(id, next) {
            panic!("{}", error);
        }
    }

    /// Non-panicking [`set_continuation`](Self::set_continuation)
    ///
    /// The check for `id` itself happens before any glue state is created.
    /// A failure further down the cascade leaves the nodes linked so far
    /// in place.
    pub fn try_set_continuation(&mut self, id: StateId, next: StateId) -> Result<(), AutomatonError> {
        let tree = self.try_tree(id)?;
        if tree.has_continuation() {
            return Err(AutomatonError::ContinuationAlreadySet { state: id });
        }
        let plan = LinkPlan::for_node(tree.node());
        log::trace!("link {} ({}) -> {} [{}]", id, tree.node_type(), next, plan.rule());

        match plan {
            LinkPlan::StoreOnly => self.store(id, next),
            LinkPlan::Forward(child) => {
                self.store(id, next)?;
                self.try_set_continuation(child, next)
            }
            LinkPlan::FanOut(children) => {
                self.store(id, next)?;
                children
                    .into_iter()
                    .try_for_each(|child| self.try_set_continuation(child, next))
            }
            LinkPlan::Repetition {
                element,
                minimum,
                maximum,
                reluctant,
            } => {
                let end = self.push(State::EndOfRepetition(EndOfRepetitionState {
                    parent: id,
                    continuation: next,
                }));
                self.store(id, end)?;
                let element_next = if maximum == Some(1) {
                    end
                } else if minimum >= 1 {
                    let successors = if reluctant { vec![end, id] } else { vec![id, end] };
                    self.push(State::Branch(BranchState {
                        parent: id,
                        successors,
                    }))
                } else {
                    id
                };
                self.try_set_continuation(element, element_next)
            }
            LinkPlan::Conditional {
                condition,
                yes_pattern,
                no_pattern,
            } => {
                self.store(id, next)?;
                let branch = self.push(State::Branch(BranchState {
                    parent: id,
                    successors: vec![yes_pattern, no_pattern.unwrap_or(next)],
                }));
                self.try_set_continuation(condition, branch)
            }
        }
    }

    fn store(&self, id: StateId, next: StateId) -> Result<(), AutomatonError> {
        self.try_tree(id)?
            .store_continuation(next)
            .map_err(|_| AutomatonError::ContinuationAlreadySet { state: id })
    }
}
