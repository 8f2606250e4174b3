//! Resolving back-references to capturing groups

use regex_automaton::regex::ast::{AutomatonError, Kind, RegexNode};
use regex_automaton::regex::automaton::{StateId, TransitionType};
use regex_automaton::regex::building::Regex;
use regex_automaton::regex::testing::{assert_state, TreeFixture};

fn resolved_group(regex: &Regex, reference: StateId) -> Option<StateId> {
    match regex.automaton().tree(reference).node() {
        RegexNode::BackReference(tree) => tree.group(),
        other => panic!("Expected a back-reference, found {:?}", other),
    }
}

#[test]
fn test_numbered_reference_resolves_by_group_number() {
    let mut fixture = TreeFixture::new("(a)\\1");
    let a = fixture.character(1);
    let group = fixture.capturing_group(0..3, 1, a);
    let reference = fixture.numbered_back_reference(3..5);
    let sequence = fixture.sequence(0..5, vec![group, reference]);
    assert_eq!(fixture.builder().resolve_back_references(), 1);
    let regex = fixture.finish(sequence);

    assert_state(&regex, reference)
        .is_kind(Kind::BackReference)
        .text_is("\\1")
        .transition_is(TransitionType::BackReference)
        .continuation_is(regex.final_state());
    assert_eq!(resolved_group(&regex, reference), Some(group));

    match regex.automaton().tree(reference).node() {
        RegexNode::BackReference(tree) => {
            assert!(tree.is_numerical());
            assert_eq!(tree.group_number(), Some(1));
            assert_eq!(tree.group_name(), "1");
        }
        other => panic!("Expected a back-reference, found {:?}", other),
    }
}

#[test]
fn test_named_reference_resolves_by_group_name() {
    let mut fixture = TreeFixture::new("(?<n>a)\\k<n>");
    let a = fixture.character(5);
    let group = fixture.named_group(0..7, "n", 1, a);
    let opener = fixture.source_character(7);
    let key = fixture.source_character(8);
    let start = fixture.source_character(9);
    let end = fixture.source_character(11);
    let flags = fixture.flags().clone();
    let reference = fixture
        .builder()
        .back_reference(&opener, Some(key), &start, &end, &flags);
    let sequence = fixture.sequence(0..12, vec![group, reference]);
    assert_eq!(fixture.builder().resolve_back_references(), 1);
    let regex = fixture.finish(sequence);

    assert_state(&regex, reference).text_is("\\k<n>");
    assert_eq!(resolved_group(&regex, reference), Some(group));
    match regex.automaton().tree(reference).node() {
        RegexNode::BackReference(tree) => {
            assert!(tree.is_named_group());
            assert_eq!(tree.group_name(), "n");
            assert_eq!(tree.group_number(), None);
        }
        other => panic!("Expected a back-reference, found {:?}", other),
    }
}

#[test]
fn test_unknown_group_stays_unresolved() {
    let mut fixture = TreeFixture::new("(a)\\2");
    let a = fixture.character(1);
    let group = fixture.capturing_group(0..3, 1, a);
    let reference = fixture.numbered_back_reference(3..5);
    let sequence = fixture.sequence(0..5, vec![group, reference]);
    assert_eq!(fixture.builder().resolve_back_references(), 0);
    let regex = fixture.finish(sequence);

    assert_eq!(resolved_group(&regex, reference), None);
}

#[test]
fn test_set_group_links_and_unlinks() {
    let mut fixture = TreeFixture::new("(a)\\1");
    let a = fixture.character(1);
    let group = fixture.capturing_group(0..3, 1, a);
    let reference = fixture.numbered_back_reference(3..5);
    let sequence = fixture.sequence(0..5, vec![group, reference]);

    fixture
        .builder()
        .set_group(reference, Some(group))
        .expect("reference accepts a group");
    fixture
        .builder()
        .set_group(reference, None)
        .expect("reference accepts no group");
    assert_eq!(
        fixture.builder().set_group(a, Some(group)),
        Err(AutomatonError::NotABackReference { state: a })
    );

    let regex = fixture.finish(sequence);
    assert_eq!(resolved_group(&regex, reference), None);
}
