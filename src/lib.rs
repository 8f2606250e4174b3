//! # regex-automaton
//!
//! Regular expressions as range-annotated syntax trees that double as an
//! automaton state graph, for static analysis of patterns written in Java,
//! PHP or Python.
//!
//! A parser (not part of this crate) feeds node constructions bottom-up into
//! an [`AutomatonBuilder`](regex::building::AutomatonBuilder). Finishing the
//! root runs a single top-down pass that sets every node's continuation and
//! inserts the glue states for branches, repetition ends, group ends and
//! lookarounds. The result can be read in two ways:
//!
//! - as a tree, through [`RegexVisitor`](regex::ast::RegexVisitor)
//! - as a graph, through the continuation and successor queries on
//!   [`Automaton`](regex::automaton::Automaton) and the helpers in
//!   [`analysis`](regex::analysis)
//!
//! Nothing here matches strings. The graph models topology and quantifier
//! semantics only.
//!
//! For test helpers, see the [testing module](regex::testing).

pub mod regex;
