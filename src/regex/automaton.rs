//! The automaton state graph
//!
//! Once a tree is linked, every node and every glue state can answer four
//! questions: its continuation, its successors, the transition type that
//! leads into it, and the flags active there. Analyses walk this graph
//! through [`Automaton`] and never touch the linking rules.

pub mod arena;
pub mod linking;
pub mod state;

pub use arena::Automaton;
pub use state::{
    BranchState, EndOfCapturingGroupState, EndOfConditionalSubpatternsState,
    EndOfLookaroundState, EndOfRepetitionState, FinalState, NegationState, StartOfLookBehindState,
    StartState, State, StateId, TransitionType,
};
