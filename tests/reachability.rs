//! Graph queries over linked automata

use regex_automaton::regex::analysis::{
    can_reach_without_consuming_input, can_reach_without_consuming_input_nor_crossing_boundaries,
    is_anchored_at_end, is_end_boundary, only_matches_empty_suffix, ReachabilityChecker,
};
use regex_automaton::regex::ast::{BoundaryType, Direction, Polarity};
use regex_automaton::regex::testing::TreeFixture;

#[test]
fn test_can_reach_follows_successors() {
    let mut fixture = TreeFixture::new("a*b");
    let a = fixture.character(0);
    let star = fixture.repeat(a);
    let b = fixture.character(2);
    let sequence = fixture.sequence(0..3, vec![star, b]);
    let regex = fixture.finish(sequence);
    let automaton = regex.automaton();

    assert!(ReachabilityChecker::new(false).can_reach(automaton, a, b));
    assert!(ReachabilityChecker::new(false).can_reach(automaton, sequence, regex.final_state()));
    assert!(ReachabilityChecker::new(false).can_reach(automaton, b, b));
    assert!(!ReachabilityChecker::new(false).can_reach(automaton, b, a));
}

#[test]
fn test_full_cache_answers_default() {
    let mut fixture = TreeFixture::new("ab");
    let a = fixture.character(0);
    let b = fixture.character(1);
    let sequence = fixture.sequence(0..2, vec![a, b]);
    let regex = fixture.finish(sequence);
    let automaton = regex.automaton();

    let mut optimistic = ReachabilityChecker::new(true).with_cache_limit(0);
    assert!(optimistic.can_reach(automaton, b, a));

    let mut pessimistic = ReachabilityChecker::new(false).with_cache_limit(0);
    assert!(!pessimistic.can_reach(automaton, a, b));

    let mut checker = ReachabilityChecker::new(true);
    assert!(!checker.can_reach(automaton, b, a));
    checker.clear_cache();
    assert!(checker.can_reach(automaton, a, b));
}

#[test]
fn test_consuming_reachability_skips_lookaround_content() {
    let mut fixture = TreeFixture::new("(?=a)");
    let a = fixture.character(3);
    let lookahead = fixture.look_around(0..5, Polarity::Positive, Direction::Ahead, a);
    let regex = fixture.finish(lookahead);
    let automaton = regex.automaton();
    let end = regex.final_state();

    assert!(ReachabilityChecker::new(false).can_reach(automaton, lookahead, a));
    assert!(!ReachabilityChecker::new(false).can_reach_with_consuming_input(automaton, lookahead, a));
    assert!(!ReachabilityChecker::new(false).can_reach_with_consuming_input(automaton, lookahead, end));
}

#[test]
fn test_consuming_reachability_through_characters() {
    let mut fixture = TreeFixture::new("ab");
    let a = fixture.character(0);
    let b = fixture.character(1);
    let sequence = fixture.sequence(0..2, vec![a, b]);
    let regex = fixture.finish(sequence);
    let automaton = regex.automaton();

    let mut checker = ReachabilityChecker::new(false);
    assert!(checker.can_reach_with_consuming_input(automaton, sequence, regex.final_state()));
    assert!(!ReachabilityChecker::new(false).can_reach_with_consuming_input(automaton, b, a));
}

#[test]
fn test_non_consuming_reachability_stops_at_characters() {
    let mut fixture = TreeFixture::new("a*");
    let a = fixture.character(0);
    let star = fixture.repeat(a);
    let regex = fixture.finish(star);
    assert!(can_reach_without_consuming_input(
        regex.automaton(),
        regex.start_state(),
        regex.final_state()
    ));

    let mut fixture = TreeFixture::new("a");
    let a = fixture.character(0);
    let regex = fixture.finish(a);
    assert!(!can_reach_without_consuming_input(
        regex.automaton(),
        regex.start_state(),
        regex.final_state()
    ));
}

#[test]
fn test_boundaries_block_only_the_boundary_aware_walk() {
    let mut fixture = TreeFixture::new("$");
    let dollar = fixture.boundary(0..1, BoundaryType::LineEnd);
    let regex = fixture.finish(dollar);
    let automaton = regex.automaton();

    assert!(can_reach_without_consuming_input(automaton, regex.start_state(), regex.final_state()));
    assert!(!can_reach_without_consuming_input_nor_crossing_boundaries(
        automaton,
        regex.start_state(),
        regex.final_state()
    ));
}

#[test]
fn test_line_break_after_end_boundary_does_not_consume() {
    let mut fixture = TreeFixture::new("$\\n");
    let dollar = fixture.boundary(0..1, BoundaryType::LineEnd);
    let line_break = fixture.escaped_character(1..3, '\n');
    let sequence = fixture.sequence(0..3, vec![dollar, line_break]);
    let regex = fixture.finish(sequence);
    assert!(can_reach_without_consuming_input(
        regex.automaton(),
        sequence,
        regex.final_state()
    ));

    let mut fixture = TreeFixture::new("\\n");
    let line_break = fixture.escaped_character(0..2, '\n');
    let regex = fixture.finish(line_break);
    assert!(!can_reach_without_consuming_input(
        regex.automaton(),
        regex.start_state(),
        regex.final_state()
    ));
}

#[test]
fn test_anchoring_at_end() {
    let mut fixture = TreeFixture::new("a$");
    let a = fixture.character(0);
    let dollar = fixture.boundary(1..2, BoundaryType::LineEnd);
    let sequence = fixture.sequence(0..2, vec![a, dollar]);
    let regex = fixture.finish(sequence);
    let automaton = regex.automaton();

    assert!(is_end_boundary(automaton, dollar));
    assert!(!is_end_boundary(automaton, a));
    assert!(is_anchored_at_end(automaton, regex.start_state()));

    let mut fixture = TreeFixture::new("a|b$");
    let a = fixture.character(0);
    let b = fixture.character(2);
    let dollar = fixture.boundary(3..4, BoundaryType::LineEnd);
    let anchored = fixture.sequence(2..4, vec![b, dollar]);
    let disjunction = fixture.disjunction(0..4, vec![a, anchored]);
    let regex = fixture.finish(disjunction);

    assert!(!is_anchored_at_end(regex.automaton(), regex.start_state()));
    assert!(is_anchored_at_end(regex.automaton(), anchored));
}

#[test]
fn test_start_boundary_is_not_an_end() {
    let mut fixture = TreeFixture::new("^a");
    let caret = fixture.boundary(0..1, BoundaryType::LineStart);
    let a = fixture.character(1);
    let sequence = fixture.sequence(0..2, vec![caret, a]);
    let regex = fixture.finish(sequence);

    assert!(!is_end_boundary(regex.automaton(), caret));
    assert!(!is_anchored_at_end(regex.automaton(), regex.start_state()));
}

#[test]
fn test_empty_suffix_after_lookaround_and_boundary() {
    let mut fixture = TreeFixture::new("a(?=b)$");
    let a = fixture.character(0);
    let b = fixture.character(4);
    let lookahead = fixture.look_around(1..6, Polarity::Positive, Direction::Ahead, b);
    let dollar = fixture.boundary(6..7, BoundaryType::LineEnd);
    let sequence = fixture.sequence(0..7, vec![a, lookahead, dollar]);
    let regex = fixture.finish(sequence);
    let automaton = regex.automaton();

    assert!(only_matches_empty_suffix(automaton, lookahead));
    assert!(only_matches_empty_suffix(automaton, dollar));
    assert!(!only_matches_empty_suffix(automaton, a));
    assert!(!only_matches_empty_suffix(automaton, sequence));
}
