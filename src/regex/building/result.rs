//! The linked regex

use crate::regex::ast::{FlagSet, RegexSource, RegexTree};
use crate::regex::automaton::{Automaton, StateId};

/// A fully linked tree together with its start and final states
///
/// Read-only from here on; any number of visitors and analyses may walk it.
#[derive(Debug, Clone)]
pub struct Regex {
    automaton: Automaton,
    root: StateId,
    start: StateId,
    final_state: StateId,
}

impl Regex {
    pub(crate) fn new(automaton: Automaton, root: StateId, start: StateId, final_state: StateId) -> Self {
        Self {
            automaton,
            root,
            start,
            final_state,
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn source(&self) -> &RegexSource {
        self.automaton.source()
    }

    pub fn root(&self) -> StateId {
        self.root
    }

    pub fn root_tree(&self) -> &RegexTree {
        self.automaton.tree(self.root)
    }

    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// The end-of-regex state the root continues to
    pub fn final_state(&self) -> StateId {
        self.final_state
    }

    /// The flags in effect before the first character of the pattern
    pub fn initial_flags(&self) -> &FlagSet {
        self.automaton.active_flags(self.start)
    }
}
