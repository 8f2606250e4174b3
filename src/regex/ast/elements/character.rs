//! Single-character trees
//!
//! Characters, escaped character classes like `\d` or `\p{Lu}`, and boundaries
//! like `^` or `\b`. Characters and escaped classes may also appear inside a
//! `[...]` class, so their payloads are shared with the
//! [character class](super::character_class) elements.

use super::super::error::AstError;
use super::super::range::IndexRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal character, possibly written as an escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterTree {
    code_point: u32,
    is_escape_sequence: bool,
}

impl CharacterTree {
    pub fn new(code_point: u32, is_escape_sequence: bool) -> Self {
        Self {
            code_point,
            is_escape_sequence,
        }
    }

    /// The code point, or a lone surrogate unit for dialects that allow them
    pub fn code_point_or_unit(&self) -> u32 {
        self.code_point
    }

    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }

    /// The character as text, U+FFFD for lone surrogates
    pub fn character_as_string(&self) -> String {
        self.as_char()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string()
    }

    pub fn is_escape_sequence(&self) -> bool {
        self.is_escape_sequence
    }

    /// Outside the Basic Multilingual Plane
    pub fn is_supplementary(&self) -> bool {
        self.code_point > 0xFFFF
    }
}

/// The zero-width assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryType {
    LineStart,
    LineEnd,
    Word,
    /// `\b{g}`
    UnicodeExtendedGraphemeCluster,
    NonWord,
    InputStart,
    PreviousMatchEnd,
    InputEndFinalTerminator,
    InputEnd,
}

impl BoundaryType {
    const ALL: [BoundaryType; 9] = [
        BoundaryType::LineStart,
        BoundaryType::LineEnd,
        BoundaryType::Word,
        BoundaryType::UnicodeExtendedGraphemeCluster,
        BoundaryType::NonWord,
        BoundaryType::InputStart,
        BoundaryType::PreviousMatchEnd,
        BoundaryType::InputEndFinalTerminator,
        BoundaryType::InputEnd,
    ];

    pub fn key(&self) -> char {
        match self {
            BoundaryType::LineStart => '^',
            BoundaryType::LineEnd => '$',
            BoundaryType::Word | BoundaryType::UnicodeExtendedGraphemeCluster => 'b',
            BoundaryType::NonWord => 'B',
            BoundaryType::InputStart => 'A',
            BoundaryType::PreviousMatchEnd => 'G',
            BoundaryType::InputEndFinalTerminator => 'Z',
            BoundaryType::InputEnd => 'z',
        }
    }

    /// The boundary written with `key`; `b` resolves to the word boundary
    pub fn for_key(key: char) -> Option<BoundaryType> {
        Self::ALL.iter().copied().find(|boundary| boundary.key() == key)
    }

    pub fn is_end(&self) -> bool {
        matches!(
            self,
            BoundaryType::LineEnd | BoundaryType::InputEnd | BoundaryType::InputEndFinalTerminator
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryTree {
    boundary_type: BoundaryType,
}

impl BoundaryTree {
    pub fn new(boundary_type: BoundaryType) -> Self {
        Self { boundary_type }
    }

    pub fn boundary_type(&self) -> BoundaryType {
        self.boundary_type
    }
}

/// `\d`, `\W`, `\p{Alpha}` and friends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedCharacterClassTree {
    marker: char,
    property: Option<String>,
}

impl EscapedCharacterClassTree {
    /// A class without property string; `range` is only used for the error
    pub fn new(marker: char, range: IndexRange) -> Result<Self, AstError> {
        let tree = Self {
            marker,
            property: None,
        };
        if tree.is_property() {
            return Err(AstError::MissingProperty { marker, range });
        }
        Ok(tree)
    }

    /// A `\p{...}` or `\P{...}` class
    pub fn with_property(
        marker: char,
        property: impl Into<String>,
        range: IndexRange,
    ) -> Result<Self, AstError> {
        let tree = Self {
            marker,
            property: Some(property.into()),
        };
        if !tree.is_property() {
            return Err(AstError::UnexpectedProperty { marker, range });
        }
        Ok(tree)
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Uppercase markers (`\D`, `\W`, `\P{..}`) match the complement
    pub fn is_negation(&self) -> bool {
        self.marker.is_uppercase()
    }

    pub fn is_property(&self) -> bool {
        self.marker.eq_ignore_ascii_case(&'p')
    }

    /// Present if and only if `is_property` is true
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }
}

impl fmt::Display for EscapedCharacterClassTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "\\{}{{{}}}", self.marker, property),
            None => write!(f, "\\{}", self.marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_as_string() {
        assert_eq!(CharacterTree::new('a' as u32, false).character_as_string(), "a");
        assert_eq!(
            CharacterTree::new(0x1F600, true).character_as_string(),
            "\u{1F600}"
        );
        assert_eq!(
            CharacterTree::new(0xD800, true).character_as_string(),
            "\u{FFFD}"
        );
        assert!(CharacterTree::new(0x1F600, true).is_supplementary());
    }

    #[test]
    fn test_boundary_for_key() {
        assert_eq!(BoundaryType::for_key('^'), Some(BoundaryType::LineStart));
        assert_eq!(BoundaryType::for_key('b'), Some(BoundaryType::Word));
        assert_eq!(BoundaryType::for_key('z'), Some(BoundaryType::InputEnd));
        assert_eq!(BoundaryType::for_key('q'), None);
        assert!(BoundaryType::InputEndFinalTerminator.is_end());
        assert!(!BoundaryType::Word.is_end());
    }

    #[test]
    fn test_escaped_class() {
        let digits = EscapedCharacterClassTree::new('D', IndexRange::new(0, 2)).expect("valid");
        assert!(digits.is_negation());
        assert!(!digits.is_property());
        assert_eq!(digits.property(), None);
        assert_eq!(digits.to_string(), "\\D");

        let upper = EscapedCharacterClassTree::with_property('p', "Lu", IndexRange::new(0, 6))
            .expect("valid");
        assert!(upper.is_property());
        assert!(!upper.is_negation());
        assert_eq!(upper.property(), Some("Lu"));
        assert_eq!(upper.to_string(), "\\p{Lu}");
    }

    #[test]
    fn test_escaped_class_property_mismatch() {
        assert_eq!(
            EscapedCharacterClassTree::new('p', IndexRange::new(0, 2)),
            Err(AstError::MissingProperty {
                marker: 'p',
                range: IndexRange::new(0, 2)
            })
        );
        assert_eq!(
            EscapedCharacterClassTree::with_property('d', "Lu", IndexRange::new(0, 6)),
            Err(AstError::UnexpectedProperty {
                marker: 'd',
                range: IndexRange::new(0, 6)
            })
        );
    }
}
