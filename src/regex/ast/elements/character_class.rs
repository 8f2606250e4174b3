//! Character classes
//!
//! The contents of `[...]` form their own small tree. Class elements are not
//! automaton states: they are never quantified or linked, and only the
//! enclosing [`CharacterClassTree`] takes part in matching.
//!
//! ```text
//! [a-z&&[^aeiou]\d]
//!  Intersection
//!    Range a-z
//!    Union
//!      Nested [^aeiou]
//!      Escaped \d
//! ```

use super::super::flags::FlagSet;
use super::super::range::IndexRange;
use super::super::source::{RegexToken, SourceCharacter};
use super::super::traits::RegexSyntaxElement;
use super::character::{CharacterTree, EscapedCharacterClassTree};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClassElementKind {
    Intersection,
    Union,
    CharacterRange,
    EscapedCharacterClass,
    PlainCharacter,
    /// An escaped character outside the Basic Multilingual Plane
    UnicodeCodePoint,
    MiscEscapeSequence,
    NestedCharacterClass,
    PosixClass,
}

/// One endpoint of a character range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEndpoint {
    pub range: IndexRange,
    pub character: CharacterTree,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRangeTree {
    lower_bound: RangeEndpoint,
    upper_bound: RangeEndpoint,
}

impl CharacterRangeTree {
    pub fn new(lower_bound: RangeEndpoint, upper_bound: RangeEndpoint) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    pub fn lower_bound(&self) -> &RangeEndpoint {
        &self.lower_bound
    }

    pub fn upper_bound(&self) -> &RangeEndpoint {
        &self.upper_bound
    }

    /// Whether `code_point` lies within the bounds, ignoring flags
    pub fn contains_code_point(&self, code_point: u32) -> bool {
        self.lower_bound.character.code_point_or_unit() <= code_point
            && code_point <= self.upper_bound.character.code_point_or_unit()
    }
}

/// `[:alpha:]` or `[:^alpha:]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosixCharacterClassElementTree {
    negation: bool,
    property: String,
}

impl PosixCharacterClassElementTree {
    pub fn new(negation: bool, property: impl Into<String>) -> Self {
        Self {
            negation,
            property: property.into(),
        }
    }

    pub fn is_negation(&self) -> bool {
        self.negation
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassElement {
    Union(Vec<CharacterClassElement>),
    Intersection {
        classes: Vec<CharacterClassElement>,
        and_operators: Vec<RegexToken>,
    },
    Range(CharacterRangeTree),
    Escaped(EscapedCharacterClassTree),
    Character(CharacterTree),
    MiscEscapeSequence,
    Nested(CharacterClassTree),
    Posix(PosixCharacterClassElementTree),
}

/// An element of a character class with its range and active flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClassElement {
    range: IndexRange,
    active_flags: FlagSet,
    element: ClassElement,
}

impl CharacterClassElement {
    pub fn new(range: IndexRange, active_flags: &FlagSet, element: ClassElement) -> Self {
        Self {
            range,
            active_flags: active_flags.clone(),
            element,
        }
    }

    pub fn element(&self) -> &ClassElement {
        &self.element
    }

    pub fn active_flags(&self) -> &FlagSet {
        &self.active_flags
    }

    pub fn kind(&self) -> CharacterClassElementKind {
        match &self.element {
            ClassElement::Union(_) => CharacterClassElementKind::Union,
            ClassElement::Intersection { .. } => CharacterClassElementKind::Intersection,
            ClassElement::Range(_) => CharacterClassElementKind::CharacterRange,
            ClassElement::Escaped(_) => CharacterClassElementKind::EscapedCharacterClass,
            ClassElement::Character(character)
                if character.is_escape_sequence() && character.is_supplementary() =>
            {
                CharacterClassElementKind::UnicodeCodePoint
            }
            ClassElement::Character(_) => CharacterClassElementKind::PlainCharacter,
            ClassElement::MiscEscapeSequence => CharacterClassElementKind::MiscEscapeSequence,
            ClassElement::Nested(_) => CharacterClassElementKind::NestedCharacterClass,
            ClassElement::Posix(_) => CharacterClassElementKind::PosixClass,
        }
    }

    pub fn is(&self, kinds: &[CharacterClassElementKind]) -> bool {
        kinds.contains(&self.kind())
    }

    /// Direct sub-elements of unions, intersections and nested classes
    pub fn children(&self) -> Vec<&CharacterClassElement> {
        match &self.element {
            ClassElement::Union(classes) | ClassElement::Intersection { classes, .. } => {
                classes.iter().collect()
            }
            ClassElement::Nested(class) => vec![class.contents()],
            _ => Vec::new(),
        }
    }
}

impl RegexSyntaxElement for CharacterClassElement {
    fn range(&self) -> IndexRange {
        self.range
    }
}

/// `[...]` or `[^...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClassTree {
    opening_bracket: SourceCharacter,
    negated: bool,
    contents: Box<CharacterClassElement>,
}

impl CharacterClassTree {
    pub fn new(opening_bracket: SourceCharacter, negated: bool, contents: CharacterClassElement) -> Self {
        Self {
            opening_bracket,
            negated,
            contents: Box::new(contents),
        }
    }

    pub fn opening_bracket(&self) -> &SourceCharacter {
        &self.opening_bracket
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn contents(&self) -> &CharacterClassElement {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(offset: i32, character: char) -> CharacterClassElement {
        CharacterClassElement::new(
            IndexRange::new(offset, offset + 1),
            &FlagSet::new(),
            ClassElement::Character(CharacterTree::new(character as u32, false)),
        )
    }

    fn endpoint(offset: i32, character: char) -> RangeEndpoint {
        RangeEndpoint {
            range: IndexRange::new(offset, offset + 1),
            character: CharacterTree::new(character as u32, false),
        }
    }

    #[test]
    fn test_element_kinds() {
        assert_eq!(character(1, 'a').kind(), CharacterClassElementKind::PlainCharacter);

        let code_point = CharacterClassElement::new(
            IndexRange::new(1, 12),
            &FlagSet::new(),
            ClassElement::Character(CharacterTree::new(0x1F600, true)),
        );
        assert_eq!(code_point.kind(), CharacterClassElementKind::UnicodeCodePoint);

        let range = CharacterClassElement::new(
            IndexRange::new(1, 4),
            &FlagSet::new(),
            ClassElement::Range(CharacterRangeTree::new(endpoint(1, 'a'), endpoint(3, 'z'))),
        );
        assert!(range.is(&[
            CharacterClassElementKind::CharacterRange,
            CharacterClassElementKind::Union
        ]));
    }

    #[test]
    fn test_range_contains() {
        let range = CharacterRangeTree::new(endpoint(1, 'a'), endpoint(3, 'f'));
        assert!(range.contains_code_point('c' as u32));
        assert!(!range.contains_code_point('g' as u32));
    }

    #[test]
    fn test_children() {
        let union = CharacterClassElement::new(
            IndexRange::new(1, 3),
            &FlagSet::new(),
            ClassElement::Union(vec![character(1, 'a'), character(2, 'b')]),
        );
        assert_eq!(union.children().len(), 2);

        let nested = CharacterClassElement::new(
            IndexRange::new(0, 4),
            &FlagSet::new(),
            ClassElement::Nested(CharacterClassTree::new(
                SourceCharacter::new(IndexRange::new(0, 1), '['),
                true,
                union,
            )),
        );
        assert_eq!(nested.children().len(), 1);
        assert_eq!(nested.children()[0].kind(), CharacterClassElementKind::Union);
        assert!(character(1, 'a').children().is_empty());
    }

    #[test]
    fn test_posix_class() {
        let posix = PosixCharacterClassElementTree::new(true, "alpha");
        assert!(posix.is_negation());
        assert_eq!(posix.property(), "alpha");
    }
}
