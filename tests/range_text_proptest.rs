//! Property-based tests for ranges and the text they select

use proptest::prelude::*;
use regex_automaton::regex::ast::{IndexRange, RegexDialect, RegexSource, RegexSyntaxElement, RegexTree};
use regex_automaton::regex::testing::TreeFixture;

/// A pattern of plain characters with a sub-span of it
fn pattern_and_span() -> impl Strategy<Value = (String, usize, usize)> {
    "[a-z0-9]{1,24}".prop_flat_map(|pattern| {
        let len = pattern.len();
        (Just(pattern), 0..=len).prop_flat_map(move |(pattern, start)| {
            (Just(pattern), Just(start), start..=len)
        })
    })
}

fn index_range() -> impl Strategy<Value = IndexRange> {
    (0i32..100, 0i32..100).prop_map(|(a, b)| IndexRange::new(a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn node_text_is_the_pattern_substring((pattern, start, end) in pattern_and_span()) {
        let mut fixture = TreeFixture::new(&pattern);
        let characters: Vec<_> = (0..pattern.len()).map(|offset| fixture.character(offset)).collect();
        let items = characters[start..end].to_vec();
        let sequence = fixture.sequence(start..end, items);
        let regex = fixture.finish(sequence);
        let automaton = regex.automaton();

        for id in automaton.ids() {
            if let Some(tree) = automaton.state(id).as_tree() {
                let span = tree_span(tree);
                prop_assert_eq!(automaton.text(id), &pattern[span]);
            }
        }
        prop_assert_eq!(automaton.text(sequence), &pattern[start..end]);
    }

    #[test]
    fn merge_spans_from_self_to_other(left in index_range(), right in index_range()) {
        let merged = left.merge(&right);
        prop_assert_eq!(merged.beginning, left.beginning);
        prop_assert_eq!(merged.ending, right.ending);
        if left.ending <= right.ending && right.beginning >= left.beginning {
            prop_assert!(merged.contains(&left));
            prop_assert!(merged.contains(&right));
        }
    }

    #[test]
    fn contains_is_reflexive_and_transitive(a in index_range(), b in index_range(), c in index_range()) {
        prop_assert!(a.contains(&a));
        if a.contains(&b) && b.contains(&c) {
            prop_assert!(a.contains(&c));
        }
    }

    #[test]
    fn extend_to_keeps_beginning(range in index_range(), new_end in 0i32..200) {
        let extended = range.extend_to(new_end);
        prop_assert_eq!(extended.beginning, range.beginning);
        prop_assert_eq!(extended.ending, new_end);
    }

    #[test]
    fn substring_never_panics(pattern in "[a-z]{0,12}", range in index_range()) {
        let source = RegexSource::new(pattern.clone(), RegexDialect::Java);
        let text = source.substring_at(&range);
        prop_assert!(text.len() <= pattern.len());
        prop_assert!(pattern.contains(text));
    }
}

fn tree_span(tree: &RegexTree) -> std::ops::Range<usize> {
    tree.range().span().expect("written nodes have a span")
}

#[test]
fn test_inaccessible_range_selects_nothing() {
    let source = RegexSource::new("abc", RegexDialect::Java);
    assert_eq!(source.substring_at(&IndexRange::inaccessible()), "");
}

#[test]
fn test_overshooting_range_is_clamped() {
    let source = RegexSource::new("abc", RegexDialect::Java);
    assert_eq!(source.substring_at(&IndexRange::new(1, 10)), "bc");
}
