//! Testing utilities for trees and automata
//!
//! Hand-writing ranges for every node quickly gets out of sync with the
//! pattern they describe. [`TreeFixture`] wraps an [`AutomatonBuilder`] and
//! takes byte offsets into the pattern instead, reading characters from the
//! pattern itself:
//!
//! ```rust,ignore
//! let mut fixture = TreeFixture::new("ab*");
//! let a = fixture.character(0);
//! let b = fixture.character(1);
//! let star = fixture.repeat(b);
//! let root = fixture.sequence(0..3, vec![a, star]);
//! let regex = fixture.finish(root);
//! ```
//!
//! [`assert_state`] then checks the linked graph fluently:
//!
//! ```rust,ignore
//! assert_state(&regex, a).continuation_is(star);
//! assert_state(&regex, star)
//!     .successors_are(&[b, regex.automaton().tree(star).continuation()])
//!     .transition_is(TransitionType::Epsilon);
//! ```

use crate::regex::ast::{
    BoundaryType, Direction, FlagSet, IndexRange, Kind, Modifier, Polarity, Quantifier,
    RegexDialect, RegexSource, RegexSyntaxElement, SimpleQuantifierKind, SourceCharacter,
};
use crate::regex::automaton::{StateId, TransitionType};
use crate::regex::building::{AutomatonBuilder, Regex};
use std::ops::Range;

fn index_range(range: Range<usize>) -> IndexRange {
    IndexRange::from(range)
}

/// Builds trees over a pattern from byte offsets
pub struct TreeFixture {
    builder: AutomatonBuilder,
    flags: FlagSet,
}

impl TreeFixture {
    pub fn new(pattern: &str) -> Self {
        Self::with_dialect(pattern, RegexDialect::Java)
    }

    pub fn with_dialect(pattern: &str, dialect: RegexDialect) -> Self {
        Self {
            builder: AutomatonBuilder::new(RegexSource::new(pattern, dialect)),
            flags: FlagSet::new(),
        }
    }

    /// Flags passed to every constructor from now on
    pub fn set_flags(&mut self, flags: FlagSet) {
        self.flags = flags;
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    pub fn builder(&mut self) -> &mut AutomatonBuilder {
        &mut self.builder
    }

    /// The source character at `offset`
    ///
    /// # Panics
    ///
    /// If `offset` is not on a character boundary of the pattern.
    pub fn source_character(&self, offset: usize) -> SourceCharacter {
        let text = self.builder.source().text();
        let character = text
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or_else(|| panic!("no character at offset {} of `{}`", offset, text));
        SourceCharacter::new(index_range(offset..offset + character.len_utf8()), character)
    }

    /// A plain character read from the pattern at `offset`
    pub fn character(&mut self, offset: usize) -> StateId {
        let character = self.source_character(offset);
        let flags = self.flags.clone();
        self.builder
            .character(character.range, character.character as u32, false, &flags)
    }

    /// A character written as an escape sequence spanning `range`
    pub fn escaped_character(&mut self, range: Range<usize>, character: char) -> StateId {
        let flags = self.flags.clone();
        self.builder
            .character(index_range(range), character as u32, true, &flags)
    }

    pub fn dot(&mut self, offset: usize) -> StateId {
        let flags = self.flags.clone();
        self.builder.dot(index_range(offset..offset + 1), &flags)
    }

    pub fn boundary(&mut self, range: Range<usize>, boundary_type: BoundaryType) -> StateId {
        let flags = self.flags.clone();
        self.builder.boundary(index_range(range), boundary_type, &flags)
    }

    pub fn sequence(&mut self, range: Range<usize>, items: Vec<StateId>) -> StateId {
        let flags = self.flags.clone();
        self.builder.sequence(index_range(range), items, &flags)
    }

    /// A disjunction whose `|` characters are found between the alternatives
    pub fn disjunction(&mut self, range: Range<usize>, alternatives: Vec<StateId>) -> StateId {
        let or_operators = alternatives
            .windows(2)
            .map(|pair| {
                let previous = self.builder.automaton().tree(pair[0]);
                self.source_character(previous.range().ending as usize)
            })
            .collect();
        let flags = self.flags.clone();
        self.builder
            .disjunction(index_range(range), alternatives, or_operators, &flags)
    }

    pub fn capturing_group(&mut self, range: Range<usize>, group_number: u32, element: StateId) -> StateId {
        let flags = self.flags.clone();
        self.builder
            .capturing_group(index_range(range), None, group_number, element, &flags)
    }

    pub fn named_group(&mut self, range: Range<usize>, name: &str, group_number: u32, element: StateId) -> StateId {
        let flags = self.flags.clone();
        self.builder.capturing_group(
            index_range(range),
            Some(name.to_string()),
            group_number,
            element,
            &flags,
        )
    }

    pub fn non_capturing_group(&mut self, range: Range<usize>, element: Option<StateId>) -> StateId {
        let flags = self.flags.clone();
        self.builder.non_capturing_group(
            index_range(range),
            FlagSet::new(),
            FlagSet::new(),
            element,
            &flags,
        )
    }

    pub fn atomic_group(&mut self, range: Range<usize>, element: StateId) -> StateId {
        let flags = self.flags.clone();
        self.builder.atomic_group(index_range(range), element, &flags)
    }

    pub fn look_around(
        &mut self,
        range: Range<usize>,
        polarity: Polarity,
        direction: Direction,
        element: StateId,
    ) -> StateId {
        let flags = self.flags.clone();
        self.builder
            .look_around(index_range(range), polarity, direction, element, &flags)
    }

    /// A numerical back-reference such as `\1` spanning `range`
    pub fn numbered_back_reference(&mut self, range: Range<usize>) -> StateId {
        let opener = self.source_character(range.start);
        let start = self.source_character(range.start + 1);
        let end = self.source_character(range.end - 1);
        let flags = self.flags.clone();
        self.builder.back_reference(&opener, None, &start, &end, &flags)
    }

    /// A simple quantifier `*`, `+` or `?` at `offset`, followed by an optional modifier
    pub fn quantifier(&self, offset: usize) -> Quantifier {
        let text = self.builder.source().text();
        let kind = match text.as_bytes().get(offset) {
            Some(b'*') => SimpleQuantifierKind::Star,
            Some(b'+') => SimpleQuantifierKind::Plus,
            Some(b'?') => SimpleQuantifierKind::QuestionMark,
            _ => panic!("no quantifier at offset {} of `{}`", offset, text),
        };
        let (modifier, length) = match text.as_bytes().get(offset + 1) {
            Some(b'?') => (Modifier::Reluctant, 2),
            Some(b'+') => (Modifier::Possessive, 2),
            _ => (Modifier::Greedy, 1),
        };
        Quantifier::simple(index_range(offset..offset + length), modifier, kind)
    }

    /// `element` repeated by the simple quantifier that follows it in the pattern
    pub fn repeat(&mut self, element: StateId) -> StateId {
        let element_range = self.builder.automaton().tree(element).range();
        let quantifier = self.quantifier(element_range.ending as usize);
        let range = element_range.merge(&quantifier.range());
        let flags = self.flags.clone();
        self.builder.repetition(range, element, quantifier, &flags)
    }

    pub fn repetition(&mut self, range: Range<usize>, element: StateId, quantifier: Quantifier) -> StateId {
        let flags = self.flags.clone();
        self.builder
            .repetition(index_range(range), element, quantifier, &flags)
    }

    pub fn finish(self, root: StateId) -> Regex {
        let flags = self.flags.clone();
        self.builder.finish(root, &flags)
    }
}

/// Create an assertion builder for the state `id` of a linked regex
pub fn assert_state(regex: &Regex, id: StateId) -> StateAssertion<'_> {
    StateAssertion {
        regex,
        id,
        context: format!("state {} of `{}`", id, regex.source().text()),
    }
}

pub struct StateAssertion<'a> {
    regex: &'a Regex,
    id: StateId,
    context: String,
}

impl<'a> StateAssertion<'a> {
    fn describe(&self, id: StateId) -> String {
        let automaton = self.regex.automaton();
        let text = automaton.text(id);
        if text.is_empty() {
            format!("{} {}", automaton.state(id).name(), id)
        } else {
            format!("{} {} `{}`", automaton.state(id).name(), id, text)
        }
    }

    pub fn continuation_is(self, expected: StateId) -> Self {
        let actual = self.regex.automaton().continuation(self.id);
        assert_eq!(
            actual,
            Some(expected),
            "{}: Expected continuation {}, found {}",
            self.context,
            self.describe(expected),
            actual.map_or("none".to_string(), |id| self.describe(id))
        );
        self
    }

    pub fn has_no_continuation(self) -> Self {
        let actual = self.regex.automaton().continuation(self.id);
        assert!(
            actual.is_none(),
            "{}: Expected no continuation, found {:?}",
            self.context,
            actual
        );
        self
    }

    pub fn successors_are(self, expected: &[StateId]) -> Self {
        let actual = self.regex.automaton().successors(self.id);
        assert_eq!(
            actual,
            expected,
            "{}: Expected successors [{}], found [{}]",
            self.context,
            expected.iter().map(|id| self.describe(*id)).collect::<Vec<_>>().join(", "),
            actual.iter().map(|id| self.describe(*id)).collect::<Vec<_>>().join(", ")
        );
        self
    }

    pub fn successor_count(self, expected: usize) -> Self {
        let actual = self.regex.automaton().successors(self.id).len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} successors, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn transition_is(self, expected: TransitionType) -> Self {
        let actual = self.regex.automaton().incoming_transition_type(self.id);
        assert_eq!(
            actual, expected,
            "{}: Expected incoming transition {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn is_kind(self, expected: Kind) -> Self {
        let actual = self.regex.automaton().state(self.id).as_tree().map(|tree| tree.kind());
        assert_eq!(
            actual,
            Some(expected),
            "{}: Expected a {:?} tree, found {}",
            self.context,
            expected,
            self.describe(self.id)
        );
        self
    }

    /// Assert the state is a glue state with the given name, e.g. `"Branch"`
    pub fn is_glue(self, expected: &str) -> Self {
        let state = self.regex.automaton().state(self.id);
        assert!(
            !state.is_tree() && state.name() == expected,
            "{}: Expected a {} state, found {}",
            self.context,
            expected,
            self.describe(self.id)
        );
        self
    }

    pub fn text_is(self, expected: &str) -> Self {
        let actual = self.regex.automaton().text(self.id);
        assert_eq!(
            actual, expected,
            "{}: Expected text '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    /// Assert the active flags at this state, compared by bit mask
    pub fn flags_are(self, expected: u32) -> Self {
        let actual = self.regex.automaton().active_flags(self.id).mask();
        assert_eq!(
            actual, expected,
            "{}: Expected flags {:#x}, found {:#x}",
            self.context, expected, actual
        );
        self
    }

    /// Continue asserting on the continuation of this state
    pub fn continuation(self) -> StateAssertion<'a> {
        let next = match self.regex.automaton().continuation(self.id) {
            Some(next) => next,
            None => panic!("{}: Expected a continuation, found none", self.context),
        };
        StateAssertion {
            regex: self.regex,
            id: next,
            context: format!("{} -> continuation {}", self.context, next),
        }
    }

    /// Continue asserting on the successor at `index`
    pub fn successor(self, index: usize) -> StateAssertion<'a> {
        let successors = self.regex.automaton().successors(self.id);
        assert!(
            index < successors.len(),
            "{}: Successor index {} out of bounds ({} successors)",
            self.context,
            index,
            successors.len()
        );
        StateAssertion {
            regex: self.regex,
            id: successors[index],
            context: format!("{} -> successor[{}] {}", self.context, index, successors[index]),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }
}
