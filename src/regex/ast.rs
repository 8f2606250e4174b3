//! Syntax tree of a regular expression
//!
//! The tree is built bottom-up by a parser through
//! [`AutomatonBuilder`](crate::regex::building::AutomatonBuilder). Every node
//! records the range of pattern text that produced it and a copy of the
//! flags active at that point.
//!
//! ## Layout
//!
//! - [`range`] and [`source`]: offsets and the pattern text they index
//! - [`flags`]: the active flag set with per-flag provenance
//! - [`elements`]: node payloads, one file per family
//! - [`traits`]: the syntax element trait and the tree visitor
//! - [`snapshot`]: a serializable view of a tree for tests and tooling

pub mod elements;
pub mod error;
pub mod flags;
pub mod range;
pub mod snapshot;
pub mod source;
pub mod traits;

pub use elements::*;
pub use error::{AstError, AutomatonError};
pub use flags::FlagSet;
pub use range::IndexRange;
pub use snapshot::{snapshot_regex, snapshot_tree, AstSnapshot};
pub use source::{RegexDialect, RegexFeature, RegexSource, RegexToken, SourceCharacter};
pub use traits::{RegexSyntaxElement, RegexVisitor};
