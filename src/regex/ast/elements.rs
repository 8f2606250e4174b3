//! Tree node payloads
//!
//! Each file holds the payload types of one family of nodes. The node
//! wrapper with range, flags and continuation is [`tree::RegexTree`].

pub mod character;
pub mod character_class;
pub mod group;
pub mod repetition;
pub mod structure;
pub mod tree;

pub use character::{BoundaryTree, BoundaryType, CharacterTree, EscapedCharacterClassTree};
pub use character_class::{
    CharacterClassElement, CharacterClassElementKind, CharacterClassTree, CharacterRangeTree,
    ClassElement, PosixCharacterClassElementTree, RangeEndpoint,
};
pub use group::{
    AtomicGroupTree, CapturingGroupTree, ConditionalSubpatternTree, Direction, GroupTree,
    LookAroundTree, NonCapturingGroupTree, Polarity, ReferenceConditionTree,
};
pub use repetition::{
    CurlyBraceQuantifier, Modifier, Quantifier, QuantifierForm, RepetitionTree,
    SimpleQuantifierKind,
};
pub use structure::{BackReferenceTree, DisjunctionTree, SequenceTree};
pub use tree::{Kind, RegexNode, RegexTree};
