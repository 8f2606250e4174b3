//! Offset ranges for regex syntax elements
//!
//! Every syntax element answers "what text produced me" through an [`IndexRange`]:
//! a pair of byte offsets into the pattern text held by the
//! [`RegexSource`](super::source::RegexSource).
//!
//! ## Key Design
//!
//! - **Value type**: ranges are `Copy`; `merge` and `extend_to` return new ranges
//! - **Half-open**: `beginning` is inclusive, `ending` is exclusive
//! - **Inaccessible marker**: synthetic elements that have no source text use
//!   [`IndexRange::inaccessible`] (both offsets are -1)
//! - **Ending may overshoot**: only sentinel ranges point past the end of the
//!   pattern; `RegexSource::substring_at` clamps them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// Beginning and ending offsets of a syntax element in the pattern text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    pub beginning: i32,
    pub ending: i32,
}

impl IndexRange {
    pub fn new(beginning: i32, ending: i32) -> Self {
        Self { beginning, ending }
    }

    /// The marker range for elements that were not written in the pattern
    pub fn inaccessible() -> Self {
        Self::new(-1, -1)
    }

    pub fn is_inaccessible(&self) -> bool {
        self.beginning < 0 || self.ending < 0
    }

    /// A range from the start of `self` to the end of `other`
    ///
    /// Used to combine a delimiter with what follows it, e.g. an opening
    /// parenthesis with the closing one.
    pub fn merge(&self, other: &IndexRange) -> Self {
        self.extend_to(other.ending)
    }

    /// Same beginning, new ending
    pub fn extend_to(&self, new_end: i32) -> Self {
        Self::new(self.beginning, new_end)
    }

    /// Check if `other` lies entirely within this range
    pub fn contains(&self, other: &IndexRange) -> bool {
        self.beginning <= other.beginning && other.ending <= self.ending
    }

    pub fn len(&self) -> usize {
        (self.ending - self.beginning).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte span covered by this range, `None` for the inaccessible marker
    pub fn span(&self) -> Option<ByteRange<usize>> {
        if self.is_inaccessible() {
            None
        } else {
            Some(self.beginning as usize..self.ending as usize)
        }
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.beginning, self.ending)
    }
}

impl From<ByteRange<usize>> for IndexRange {
    fn from(span: ByteRange<usize>) -> Self {
        Self::new(span.start as i32, span.end as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_takes_other_ending() {
        let paren = IndexRange::new(2, 3);
        let closing = IndexRange::new(7, 8);
        assert_eq!(paren.merge(&closing), IndexRange::new(2, 8));
    }

    #[test]
    fn test_extend_to() {
        let range = IndexRange::new(4, 5);
        assert_eq!(range.extend_to(9), IndexRange::new(4, 9));
        assert_eq!(range, IndexRange::new(4, 5));
    }

    #[test]
    fn test_contains() {
        let outer = IndexRange::new(0, 10);
        assert!(outer.contains(&IndexRange::new(0, 10)));
        assert!(outer.contains(&IndexRange::new(3, 4)));
        assert!(!outer.contains(&IndexRange::new(3, 11)));
        assert!(!IndexRange::new(3, 4).contains(&outer));
    }

    #[test]
    fn test_inaccessible() {
        let range = IndexRange::inaccessible();
        assert!(range.is_inaccessible());
        assert_eq!(range.span(), None);
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_span_and_len() {
        let range = IndexRange::new(2, 6);
        assert_eq!(range.span(), Some(2..6));
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
        assert!(IndexRange::new(3, 3).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", IndexRange::new(1, 5)), "1-5");
        assert_eq!(format!("{}", IndexRange::inaccessible()), "-1--1");
    }

    #[test]
    fn test_from_byte_range() {
        assert_eq!(IndexRange::from(3..7), IndexRange::new(3, 7));
    }
}
