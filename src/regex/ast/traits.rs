//! Shared traits for syntax elements
//!
//! [`RegexSyntaxElement`] gives every element its range and text.
//! [`RegexVisitor`] walks the syntax tree over child links only, in the
//! order the pattern is read. It never follows continuations, so it
//! terminates on patterns whose automaton has loops.
//!
//! # Example
//!
//! ```ignore
//! struct GroupCounter(usize);
//!
//! impl RegexVisitor for GroupCounter {
//!     fn visit_capturing_group(&mut self, automaton: &Automaton, id: StateId, group: &CapturingGroupTree) {
//!         self.0 += 1;
//!         walk_group(self, automaton, group.group());
//!     }
//! }
//!
//! let mut counter = GroupCounter(0);
//! counter.visit_regex(&regex);
//! ```

use super::elements::{
    AtomicGroupTree, BackReferenceTree, BoundaryTree, CapturingGroupTree, CharacterClassElement,
    CharacterClassTree, CharacterRangeTree, CharacterTree, ClassElement, ConditionalSubpatternTree,
    DisjunctionTree, EscapedCharacterClassTree, GroupTree, Kind, LookAroundTree,
    NonCapturingGroupTree, PosixCharacterClassElementTree, RegexNode, RepetitionTree, SequenceTree,
};
use super::range::IndexRange;
use super::source::RegexSource;
use crate::regex::automaton::{Automaton, StateId};
use crate::regex::building::Regex;

/// Anything written in the pattern
pub trait RegexSyntaxElement {
    fn range(&self) -> IndexRange;

    /// The pattern text at [`range`](Self::range)
    fn text<'s>(&self, source: &'s RegexSource) -> &'s str {
        source.substring_at(&self.range())
    }
}

/// Tree visitor with a default structural walk
///
/// Override the methods for the node kinds of interest; call the matching
/// `walk_*` function from an override to keep descending.
pub trait RegexVisitor {
    /// Called before anything of `regex` is visited
    fn before(&mut self, _regex: &Regex) {}

    /// Called after the whole of `regex` was visited
    fn after(&mut self, _regex: &Regex) {}

    fn visit_regex(&mut self, regex: &Regex) {
        self.before(regex);
        self.visit(regex.automaton(), regex.root());
        self.after(regex);
    }

    /// Dispatch on the kind of the tree node `id`
    fn visit(&mut self, automaton: &Automaton, id: StateId) {
        walk_tree(self, automaton, id);
    }

    fn visit_character(&mut self, _automaton: &Automaton, _id: StateId, _character: &CharacterTree) {}

    fn visit_dot(&mut self, _automaton: &Automaton, _id: StateId) {}

    fn visit_boundary(&mut self, _automaton: &Automaton, _id: StateId, _boundary: &BoundaryTree) {}

    fn visit_sequence(&mut self, automaton: &Automaton, _id: StateId, sequence: &SequenceTree) {
        walk_sequence(self, automaton, sequence);
    }

    fn visit_disjunction(&mut self, automaton: &Automaton, _id: StateId, disjunction: &DisjunctionTree) {
        walk_disjunction(self, automaton, disjunction);
    }

    /// Shared behaviour of all group kinds
    fn visit_group(&mut self, automaton: &Automaton, _id: StateId, group: &GroupTree) {
        walk_group(self, automaton, group);
    }

    fn visit_capturing_group(&mut self, automaton: &Automaton, id: StateId, group: &CapturingGroupTree) {
        self.visit_group(automaton, id, group.group());
    }

    fn visit_non_capturing_group(
        &mut self,
        automaton: &Automaton,
        id: StateId,
        group: &NonCapturingGroupTree,
    ) {
        self.visit_group(automaton, id, group.group());
    }

    fn visit_atomic_group(&mut self, automaton: &Automaton, id: StateId, group: &AtomicGroupTree) {
        self.visit_group(automaton, id, group.group());
    }

    fn visit_look_around(&mut self, automaton: &Automaton, id: StateId, lookaround: &LookAroundTree) {
        self.visit_group(automaton, id, lookaround.group());
    }

    fn visit_back_reference(
        &mut self,
        _automaton: &Automaton,
        _id: StateId,
        _reference: &BackReferenceTree,
    ) {
    }

    fn visit_repetition(&mut self, automaton: &Automaton, _id: StateId, repetition: &RepetitionTree) {
        self.visit(automaton, repetition.element());
    }

    fn visit_character_class(&mut self, automaton: &Automaton, _id: StateId, class: &CharacterClassTree) {
        self.visit_in_class(automaton, class.contents());
    }

    fn visit_escaped_character_class(
        &mut self,
        _automaton: &Automaton,
        _id: StateId,
        _class: &EscapedCharacterClassTree,
    ) {
    }

    fn visit_misc_escape_sequence(&mut self, _automaton: &Automaton, _id: StateId) {}

    fn visit_conditional_subpattern(
        &mut self,
        automaton: &Automaton,
        _id: StateId,
        conditional: &ConditionalSubpatternTree,
    ) {
        walk_conditional_subpattern(self, automaton, conditional);
    }

    /// Dispatch on the kind of a character class element
    fn visit_in_class(&mut self, automaton: &Automaton, element: &CharacterClassElement) {
        walk_class_element(self, automaton, element);
    }

    fn visit_character_class_union(
        &mut self,
        automaton: &Automaton,
        _element: &CharacterClassElement,
        classes: &[CharacterClassElement],
    ) {
        for class in classes {
            self.visit_in_class(automaton, class);
        }
    }

    fn visit_character_class_intersection(
        &mut self,
        automaton: &Automaton,
        _element: &CharacterClassElement,
        classes: &[CharacterClassElement],
    ) {
        for class in classes {
            self.visit_in_class(automaton, class);
        }
    }

    fn visit_character_range(
        &mut self,
        _automaton: &Automaton,
        _element: &CharacterClassElement,
        _range: &CharacterRangeTree,
    ) {
    }

    fn visit_character_in_class(
        &mut self,
        _automaton: &Automaton,
        _element: &CharacterClassElement,
        _character: &CharacterTree,
    ) {
    }

    fn visit_escaped_character_class_in_class(
        &mut self,
        _automaton: &Automaton,
        _element: &CharacterClassElement,
        _class: &EscapedCharacterClassTree,
    ) {
    }

    fn visit_misc_escape_sequence_in_class(
        &mut self,
        _automaton: &Automaton,
        _element: &CharacterClassElement,
    ) {
    }

    fn visit_nested_character_class(
        &mut self,
        automaton: &Automaton,
        _element: &CharacterClassElement,
        class: &CharacterClassTree,
    ) {
        self.visit_in_class(automaton, class.contents());
    }

    fn visit_posix_character_class(
        &mut self,
        _automaton: &Automaton,
        _element: &CharacterClassElement,
        _class: &PosixCharacterClassElementTree,
    ) {
    }
}

/// Call the visitor method matching the kind of `id`
pub fn walk_tree<V: RegexVisitor + ?Sized>(visitor: &mut V, automaton: &Automaton, id: StateId) {
    let tree = automaton.tree(id);
    match tree.node() {
        RegexNode::Character(character) => visitor.visit_character(automaton, id, character),
        RegexNode::Dot => visitor.visit_dot(automaton, id),
        RegexNode::Boundary(boundary) => visitor.visit_boundary(automaton, id, boundary),
        RegexNode::Sequence(sequence) => visitor.visit_sequence(automaton, id, sequence),
        RegexNode::Disjunction(disjunction) => {
            visitor.visit_disjunction(automaton, id, disjunction)
        }
        RegexNode::CapturingGroup(group) => visitor.visit_capturing_group(automaton, id, group),
        RegexNode::NonCapturingGroup(group) => {
            visitor.visit_non_capturing_group(automaton, id, group)
        }
        RegexNode::AtomicGroup(group) => visitor.visit_atomic_group(automaton, id, group),
        RegexNode::LookAround(lookaround) => visitor.visit_look_around(automaton, id, lookaround),
        RegexNode::BackReference(reference) => {
            visitor.visit_back_reference(automaton, id, reference)
        }
        // only reachable as a condition, which the conditional walk skips
        RegexNode::ReferenceCondition(_) => {}
        RegexNode::Repetition(repetition) => visitor.visit_repetition(automaton, id, repetition),
        RegexNode::CharacterClass(class) => visitor.visit_character_class(automaton, id, class),
        RegexNode::EscapedCharacterClass(class) => {
            visitor.visit_escaped_character_class(automaton, id, class)
        }
        RegexNode::MiscEscapeSequence => visitor.visit_misc_escape_sequence(automaton, id),
        RegexNode::ConditionalSubpattern(conditional) => {
            visitor.visit_conditional_subpattern(automaton, id, conditional)
        }
    }
}

pub fn walk_sequence<V: RegexVisitor + ?Sized>(
    visitor: &mut V,
    automaton: &Automaton,
    sequence: &SequenceTree,
) {
    for item in sequence.items() {
        visitor.visit(automaton, *item);
    }
}

pub fn walk_disjunction<V: RegexVisitor + ?Sized>(
    visitor: &mut V,
    automaton: &Automaton,
    disjunction: &DisjunctionTree,
) {
    for alternative in disjunction.alternatives() {
        visitor.visit(automaton, *alternative);
    }
}

pub fn walk_group<V: RegexVisitor + ?Sized>(visitor: &mut V, automaton: &Automaton, group: &GroupTree) {
    if let Some(element) = group.element() {
        visitor.visit(automaton, element);
    }
}

/// Visit a lookaround condition, then the yes pattern, then the no pattern
pub fn walk_conditional_subpattern<V: RegexVisitor + ?Sized>(
    visitor: &mut V,
    automaton: &Automaton,
    conditional: &ConditionalSubpatternTree,
) {
    let condition = conditional.condition();
    if automaton.tree(condition).is(&[Kind::LookAround]) {
        visitor.visit(automaton, condition);
    }
    visitor.visit(automaton, conditional.yes_pattern());
    if let Some(no_pattern) = conditional.no_pattern() {
        visitor.visit(automaton, no_pattern);
    }
}

/// Call the visitor method matching the kind of a class element
pub fn walk_class_element<V: RegexVisitor + ?Sized>(
    visitor: &mut V,
    automaton: &Automaton,
    element: &CharacterClassElement,
) {
    match element.element() {
        ClassElement::Union(classes) => {
            visitor.visit_character_class_union(automaton, element, classes)
        }
        ClassElement::Intersection { classes, .. } => {
            visitor.visit_character_class_intersection(automaton, element, classes)
        }
        ClassElement::Range(range) => visitor.visit_character_range(automaton, element, range),
        ClassElement::Escaped(class) => {
            visitor.visit_escaped_character_class_in_class(automaton, element, class)
        }
        ClassElement::Character(character) => {
            visitor.visit_character_in_class(automaton, element, character)
        }
        ClassElement::MiscEscapeSequence => {
            visitor.visit_misc_escape_sequence_in_class(automaton, element)
        }
        ClassElement::Nested(class) => visitor.visit_nested_character_class(automaton, element, class),
        ClassElement::Posix(class) => visitor.visit_posix_character_class(automaton, element, class),
    }
}
