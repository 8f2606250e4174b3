//! Graph queries over a linked automaton
//!
//! These follow successors, so unlike the tree visitor they see loops and
//! shared continuations. Every walk keeps a visited set and terminates.

use crate::regex::ast::{BoundaryType, FlagSet, Kind, RegexNode};
use crate::regex::automaton::{Automaton, State, StateId, TransitionType};
use std::collections::{HashMap, HashSet};

/// Memoized reachability between pairs of states
///
/// The cache is bounded; once full, unanswered queries return the
/// configured default instead of walking the graph.
#[derive(Debug, Clone)]
pub struct ReachabilityChecker {
    default_answer: bool,
    cache_limit: usize,
    cache: HashMap<(StateId, StateId), bool>,
    limit_reported: bool,
}

impl ReachabilityChecker {
    pub const DEFAULT_CACHE_LIMIT: usize = 5_000;

    pub fn new(default_answer: bool) -> Self {
        Self {
            default_answer,
            cache_limit: Self::DEFAULT_CACHE_LIMIT,
            cache: HashMap::new(),
            limit_reported: false,
        }
    }

    pub fn with_cache_limit(mut self, cache_limit: usize) -> Self {
        self.cache_limit = cache_limit;
        self
    }

    pub fn default_answer(&self) -> bool {
        self.default_answer
    }

    pub fn cache_limit(&self) -> usize {
        self.cache_limit
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.limit_reported = false;
    }

    /// Whether `goal` can be reached from `start` along successors
    pub fn can_reach(&mut self, automaton: &Automaton, start: StateId, goal: StateId) -> bool {
        if start == goal {
            return true;
        }
        let pair = (start, goal);
        if let Some(answer) = self.cache.get(&pair) {
            return *answer;
        }
        if self.cache.len() >= self.cache_limit {
            if !self.limit_reported {
                log::warn!(
                    "reachability cache full at {} entries, answering {}",
                    self.cache_limit,
                    self.default_answer
                );
                self.limit_reported = true;
            }
            return self.default_answer;
        }
        // in-progress pairs count as unreachable, which cuts cycles
        self.cache.insert(pair, false);
        let result = automaton
            .successors(start)
            .into_iter()
            .any(|successor| self.can_reach(automaton, successor, goal));
        self.cache.insert(pair, result);
        result
    }

    /// Whether `goal` can be reached from `start` after consuming at least one character
    ///
    /// A lookaround is skipped over: only its continuation counts.
    pub fn can_reach_with_consuming_input(
        &mut self,
        automaton: &Automaton,
        start: StateId,
        goal: StateId,
    ) -> bool {
        self.consuming_walk(automaton, start, goal, &mut HashSet::new())
    }

    fn consuming_walk(
        &mut self,
        automaton: &Automaton,
        start: StateId,
        goal: StateId,
        visited: &mut HashSet<StateId>,
    ) -> bool {
        if start == goal || !visited.insert(start) {
            return false;
        }
        if is_tree_of_kind(automaton, start, Kind::LookAround) {
            return match automaton.continuation(start) {
                Some(next) => self.consuming_walk(automaton, next, goal, visited),
                None => false,
            };
        }
        for successor in automaton.successors(start) {
            let reached = if automaton.incoming_transition_type(successor) == TransitionType::Character {
                !is_line_break_or_period_after_end_boundary(automaton, visited, successor)
                    && self.can_reach(automaton, successor, goal)
            } else {
                self.consuming_walk(automaton, successor, goal, visited)
            };
            if reached {
                return true;
            }
        }
        false
    }
}

/// Whether `goal` can be reached from `start` without consuming input
///
/// Only epsilon and negation transitions are followed, plus line breaks and
/// DOTALL dots right after `$` or `\Z`. An end-of-lookaround goal counts as
/// reached, but nothing behind it does.
pub fn can_reach_without_consuming_input(automaton: &Automaton, start: StateId, goal: StateId) -> bool {
    non_consuming_walk(automaton, start, goal, false, &mut HashSet::new())
}

/// Like [`can_reach_without_consuming_input`], but never crossing a boundary
pub fn can_reach_without_consuming_input_nor_crossing_boundaries(
    automaton: &Automaton,
    start: StateId,
    goal: StateId,
) -> bool {
    non_consuming_walk(automaton, start, goal, true, &mut HashSet::new())
}

fn non_consuming_walk(
    automaton: &Automaton,
    start: StateId,
    goal: StateId,
    stop_at_boundaries: bool,
    visited: &mut HashSet<StateId>,
) -> bool {
    if start == goal {
        return true;
    }
    if visited.contains(&start) || (stop_at_boundaries && is_tree_of_kind(automaton, start, Kind::Boundary)) {
        return false;
    }
    visited.insert(start);
    for successor in automaton.successors(start) {
        if successor == goal && matches!(automaton.state(successor), State::EndOfLookaround(_)) {
            return true;
        }
        let followed = matches!(
            automaton.incoming_transition_type(successor),
            TransitionType::Epsilon | TransitionType::Negation
        ) || is_line_break_or_period_after_end_boundary(automaton, visited, successor);
        if followed && non_consuming_walk(automaton, successor, goal, stop_at_boundaries, visited) {
            return true;
        }
    }
    false
}

/// `$` and `\Z` do not consume a trailing line break, so an escaped
/// character (or a DOTALL dot) after one of them can still match
fn is_line_break_or_period_after_end_boundary(
    automaton: &Automaton,
    visited: &HashSet<StateId>,
    state: StateId,
) -> bool {
    let candidate = match automaton.state(state).as_tree().map(|tree| tree.node()) {
        Some(RegexNode::Character(character)) => character.is_escape_sequence(),
        Some(RegexNode::Dot) => automaton.active_flags(state).contains(FlagSet::DOTALL),
        _ => false,
    };
    candidate
        && visited.iter().any(|visited_state| {
            matches!(
                boundary_type(automaton, *visited_state),
                Some(BoundaryType::InputEndFinalTerminator | BoundaryType::LineEnd)
            )
        })
}

fn is_tree_of_kind(automaton: &Automaton, state: StateId, kind: Kind) -> bool {
    automaton
        .state(state)
        .as_tree()
        .map_or(false, |tree| tree.kind() == kind)
}

fn boundary_type(automaton: &Automaton, state: StateId) -> Option<BoundaryType> {
    match automaton.state(state).as_tree().map(|tree| tree.node()) {
        Some(RegexNode::Boundary(boundary)) => Some(boundary.boundary_type()),
        _ => None,
    }
}

/// `$`, `\Z` or `\z`
pub fn is_end_boundary(automaton: &Automaton, state: StateId) -> bool {
    boundary_type(automaton, state).map_or(false, |boundary| boundary.is_end())
}

/// Whether every path from `start` hits an end boundary before the final state
pub fn is_anchored_at_end(automaton: &Automaton, start: StateId) -> bool {
    anchored_walk(automaton, start, &mut HashSet::new())
}

fn anchored_walk(automaton: &Automaton, start: StateId, visited: &mut HashSet<StateId>) -> bool {
    if is_end_boundary(automaton, start) {
        return true;
    }
    if matches!(automaton.state(start), State::Final(_)) {
        return false;
    }
    visited.insert(start);
    for successor in automaton.successors(start) {
        if !visited.contains(&successor) && !anchored_walk(automaton, successor, visited) {
            return false;
        }
    }
    true
}

/// Whether nothing from `start` on can consume input before the final state
///
/// Lookarounds are skipped over like in
/// [`ReachabilityChecker::can_reach_with_consuming_input`].
pub fn only_matches_empty_suffix(automaton: &Automaton, start: StateId) -> bool {
    empty_suffix_walk(automaton, start, &mut HashSet::new())
}

fn empty_suffix_walk(automaton: &Automaton, start: StateId, visited: &mut HashSet<StateId>) -> bool {
    if matches!(automaton.state(start), State::Final(_)) || !visited.insert(start) {
        return true;
    }
    if is_tree_of_kind(automaton, start, Kind::LookAround) {
        return match automaton.continuation(start) {
            Some(next) => empty_suffix_walk(automaton, next, visited),
            None => true,
        };
    }
    if automaton.incoming_transition_type(start) != TransitionType::Epsilon {
        return false;
    }
    automaton
        .successors(start)
        .into_iter()
        .all(|successor| empty_suffix_walk(automaton, successor, visited))
}
