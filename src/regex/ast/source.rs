//! Pattern text and the leaves that point into it
//!
//! [`RegexSource`] owns the pattern text together with the dialect it is
//! written in. Syntax elements never hold the text themselves, they keep an
//! [`IndexRange`] and resolve it against the source on demand.
//!
//! The two smallest syntax elements also live here:
//!
//! - [`SourceCharacter`] - a single logical character, possibly an escape
//!   sequence such as `\t`, with its own range
//! - [`RegexToken`] - an arbitrary slice of the pattern (a group header, the
//!   digits of a curly brace quantifier, an `&&` operator)

use super::range::IndexRange;
use super::traits::RegexSyntaxElement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Syntax features that differ between regex dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegexFeature {
    Recursion,
    ConditionalSubpattern,
    PosixCharacterClass,
    PythonSyntaxGroupName,
    DotnetSyntaxGroupName,
    PerlSyntaxGroupName,
    JavaSyntaxGroupName,
    AtomicGroup,
    PossessiveQuantifier,
    EscapedCharacterClass,
    UnescapedCurlyBracket,
    /// Backslashes must themselves be escaped in the host language's strings
    BackslashEscaping,
}

/// The host language whose regex flavour is being modeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegexDialect {
    Java,
    Php,
    Python,
}

impl RegexDialect {
    pub fn default_features(&self) -> BTreeSet<RegexFeature> {
        match self {
            RegexDialect::Java => [RegexFeature::JavaSyntaxGroupName].into_iter().collect(),
            RegexDialect::Php => [
                RegexFeature::Recursion,
                RegexFeature::ConditionalSubpattern,
                RegexFeature::PosixCharacterClass,
            ]
            .into_iter()
            .collect(),
            RegexDialect::Python => [
                RegexFeature::Recursion,
                RegexFeature::ConditionalSubpattern,
                RegexFeature::PythonSyntaxGroupName,
                RegexFeature::UnescapedCurlyBracket,
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl fmt::Display for RegexDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexDialect::Java => write!(f, "java"),
            RegexDialect::Php => write!(f, "php"),
            RegexDialect::Python => write!(f, "python"),
        }
    }
}

/// The pattern text being analyzed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexSource {
    text: String,
    dialect: RegexDialect,
    features: BTreeSet<RegexFeature>,
}

impl RegexSource {
    /// Create a source with the dialect's default feature set
    pub fn new(text: impl Into<String>, dialect: RegexDialect) -> Self {
        Self {
            text: text.into(),
            dialect,
            features: dialect.default_features(),
        }
    }

    /// Add features on top of the dialect defaults
    pub fn with_features<I>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = RegexFeature>,
    {
        self.features.extend(features);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn dialect(&self) -> RegexDialect {
        self.dialect
    }

    pub fn features(&self) -> &BTreeSet<RegexFeature> {
        &self.features
    }

    pub fn supports_feature(&self, feature: RegexFeature) -> bool {
        self.features.contains(&feature)
    }

    /// The text covered by `range`
    ///
    /// The ending is clamped to the pattern length. The inaccessible range and
    /// ranges that do not fall on character boundaries yield an empty string.
    pub fn substring_at(&self, range: &IndexRange) -> &str {
        match range.span() {
            Some(span) => {
                let end = span.end.min(self.text.len());
                let start = span.start.min(end);
                self.text.get(start..end).unwrap_or("")
            }
            None => "",
        }
    }
}

/// A single logical character of the pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceCharacter {
    pub range: IndexRange,
    pub character: char,
    pub is_escape_sequence: bool,
}

impl SourceCharacter {
    pub fn new(range: IndexRange, character: char) -> Self {
        Self {
            range,
            character,
            is_escape_sequence: false,
        }
    }

    /// A character written as an escape sequence, e.g. `\n` or `\x41`
    pub fn escaped(range: IndexRange, character: char) -> Self {
        Self {
            range,
            character,
            is_escape_sequence: true,
        }
    }
}

impl RegexSyntaxElement for SourceCharacter {
    fn range(&self) -> IndexRange {
        self.range
    }
}

/// An arbitrary slice of the pattern text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegexToken {
    pub range: IndexRange,
}

impl RegexToken {
    pub fn new(range: IndexRange) -> Self {
        Self { range }
    }
}

impl RegexSyntaxElement for RegexToken {
    fn range(&self) -> IndexRange {
        self.range
    }
}
