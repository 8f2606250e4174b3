//! Error types for tree construction and automaton linking

use crate::regex::ast::range::IndexRange;
use crate::regex::automaton::StateId;
use std::fmt;

/// Invalid input handed to a node constructor
///
/// These are caller faults: the parser that produced the constructor calls is
/// expected to turn them into a diagnostic on the analyzed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// `\p` or `\P` without a `{...}` property
    MissingProperty { marker: char, range: IndexRange },
    /// A `{...}` property after a marker other than `p` or `P`
    UnexpectedProperty { marker: char, range: IndexRange },
    /// A curly brace bound that is not a non-negative integer
    InvalidQuantifierBound { text: String, range: IndexRange },
    /// An inline flag letter that has no meaning
    UnknownFlag(char),
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstError::MissingProperty { marker, range } => {
                write!(f, "\\{} needs a property string at {}", marker, range)
            }
            AstError::UnexpectedProperty { marker, range } => write!(
                f,
                "Only \\p can have a property string, found \\{} at {}",
                marker, range
            ),
            AstError::InvalidQuantifierBound { text, range } => {
                write!(f, "Invalid quantifier bound '{}' at {}", text, range)
            }
            AstError::UnknownFlag(letter) => write!(f, "Unknown flag '{}'", letter),
        }
    }
}

impl std::error::Error for AstError {}

/// Misuse of the write-once continuation of a tree node
///
/// Any of these means the sequence of construction calls was wrong; the
/// panicking accessors on [`Automaton`](crate::regex::automaton::Automaton)
/// report the same conditions as panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    ContinuationAlreadySet { state: StateId },
    ContinuationNotSet { state: StateId },
    NotATree { state: StateId },
    NotABackReference { state: StateId },
}

impl fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomatonError::ContinuationAlreadySet { state } => {
                write!(f, "Continuation of {} set more than once", state)
            }
            AutomatonError::ContinuationNotSet { state } => {
                write!(f, "Continuation of {} read before it was set", state)
            }
            AutomatonError::NotATree { state } => {
                write!(f, "State {} is not a syntax tree", state)
            }
            AutomatonError::NotABackReference { state } => {
                write!(f, "State {} is not a back-reference", state)
            }
        }
    }
}

impl std::error::Error for AutomatonError {}
