//! Automaton builder
//!
//! A parser drives the builder bottom-up: leaves first, then the composites
//! that reference them by [`StateId`], then [`AutomatonBuilder::finish`] on
//! the root. Every constructor takes the flags active at that point of the
//! pattern and stores its own copy.
//!
//! Some links are made while building, not in the final pass:
//!
//! - sequence items are chained to their successors
//! - a capturing group's element continues to an end-of-group state
//! - a lookaround's element continues to an end-of-lookaround state
//! - both patterns of a conditional continue to an end-of-conditional state
//!
//! A node can therefore be used as a child of exactly one composite. Reusing
//! it sets its continuation twice and panics.

use super::result::Regex;
use crate::regex::ast::{
    AstError, AtomicGroupTree, AutomatonError, BackReferenceTree, BoundaryTree, BoundaryType,
    CapturingGroupTree, CharacterClassTree, CharacterTree, ConditionalSubpatternTree, Direction,
    DisjunctionTree, EscapedCharacterClassTree, FlagSet, GroupTree, IndexRange, LookAroundTree,
    NonCapturingGroupTree, Polarity, Quantifier, ReferenceConditionTree, RegexNode, RegexSource,
    RegexSyntaxElement, RegexToken, RegexTree, RepetitionTree, SequenceTree, SourceCharacter,
};
use crate::regex::automaton::{
    Automaton, EndOfCapturingGroupState, EndOfConditionalSubpatternsState, EndOfLookaroundState,
    FinalState, NegationState, StartOfLookBehindState, StartState, State, StateId,
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    automaton: Automaton,
}

impl AutomatonBuilder {
    pub fn new(source: RegexSource) -> Self {
        Self {
            automaton: Automaton::new(source),
        }
    }

    pub fn source(&self) -> &RegexSource {
        self.automaton.source()
    }

    /// The states built so far
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    fn push_tree(&mut self, range: IndexRange, flags: &FlagSet, node: RegexNode) -> StateId {
        self.automaton
            .push(State::Tree(RegexTree::new(range, flags.clone(), node)))
    }

    /// The header of a group: its text up to the start of the element
    fn group(&self, range: IndexRange, element: Option<StateId>) -> GroupTree {
        let header = element.map(|element| {
            let element_start = self.automaton.tree(element).range().beginning;
            RegexToken::new(IndexRange::new(range.beginning, element_start))
        });
        GroupTree::new(element, header)
    }

    pub fn character(
        &mut self,
        range: IndexRange,
        code_point: u32,
        is_escape_sequence: bool,
        flags: &FlagSet,
    ) -> StateId {
        let character = CharacterTree::new(code_point, is_escape_sequence);
        self.push_tree(range, flags, RegexNode::Character(character))
    }

    pub fn dot(&mut self, range: IndexRange, flags: &FlagSet) -> StateId {
        self.push_tree(range, flags, RegexNode::Dot)
    }

    pub fn boundary(&mut self, range: IndexRange, boundary_type: BoundaryType, flags: &FlagSet) -> StateId {
        let boundary = BoundaryTree::new(boundary_type);
        self.push_tree(range, flags, RegexNode::Boundary(boundary))
    }

    pub fn misc_escape_sequence(&mut self, range: IndexRange, flags: &FlagSet) -> StateId {
        self.push_tree(range, flags, RegexNode::MiscEscapeSequence)
    }

    /// `\d`, `\S` and other classes without property string
    pub fn escaped_character_class(
        &mut self,
        backslash: &SourceCharacter,
        marker: &SourceCharacter,
        flags: &FlagSet,
    ) -> Result<StateId, AstError> {
        let range = backslash.range.merge(&marker.range);
        let class = EscapedCharacterClassTree::new(marker.character, range)?;
        Ok(self.push_tree(range, flags, RegexNode::EscapedCharacterClass(class)))
    }

    /// `\p{...}` and `\P{...}`
    pub fn escaped_property_class(
        &mut self,
        backslash: &SourceCharacter,
        marker: &SourceCharacter,
        opening_curly_brace: &SourceCharacter,
        closing_curly_brace: &SourceCharacter,
        flags: &FlagSet,
    ) -> Result<StateId, AstError> {
        let range = backslash.range.merge(&closing_curly_brace.range);
        let property = self
            .source()
            .substring_at(&IndexRange::new(
                opening_curly_brace.range.beginning + 1,
                closing_curly_brace.range.beginning,
            ))
            .to_string();
        let class = EscapedCharacterClassTree::with_property(marker.character, property, range)?;
        Ok(self.push_tree(range, flags, RegexNode::EscapedCharacterClass(class)))
    }

    pub fn character_class(&mut self, range: IndexRange, class: CharacterClassTree, flags: &FlagSet) -> StateId {
        self.push_tree(range, flags, RegexNode::CharacterClass(class))
    }

    /// # Panics
    ///
    /// If an item already has a continuation.
    pub fn sequence(&mut self, range: IndexRange, items: Vec<StateId>, flags: &FlagSet) -> StateId {
        for pair in items.windows(2) {
            self.automaton.set_continuation(pair[0], pair[1]);
        }
        self.push_tree(range, flags, RegexNode::Sequence(SequenceTree::new(items)))
    }

    pub fn disjunction(
        &mut self,
        range: IndexRange,
        alternatives: Vec<StateId>,
        or_operators: Vec<SourceCharacter>,
        flags: &FlagSet,
    ) -> StateId {
        let disjunction = DisjunctionTree::new(alternatives, or_operators);
        self.push_tree(range, flags, RegexNode::Disjunction(disjunction))
    }

    /// # Panics
    ///
    /// If `element` already has a continuation.
    pub fn capturing_group(
        &mut self,
        range: IndexRange,
        name: Option<String>,
        group_number: u32,
        element: StateId,
        flags: &FlagSet,
    ) -> StateId {
        let group = CapturingGroupTree::new(self.group(range, Some(element)), name, group_number);
        let id = self.push_tree(range, flags, RegexNode::CapturingGroup(group));
        let end = self
            .automaton
            .push(State::EndOfCapturingGroup(EndOfCapturingGroupState { group: id }));
        self.automaton.set_continuation(element, end);
        id
    }

    /// `(?i-m:...)`, or `(?i-m)` when `element` is `None`
    pub fn non_capturing_group(
        &mut self,
        range: IndexRange,
        enabled_flags: FlagSet,
        disabled_flags: FlagSet,
        element: Option<StateId>,
        flags: &FlagSet,
    ) -> StateId {
        let group = NonCapturingGroupTree::new(self.group(range, element), enabled_flags, disabled_flags);
        self.push_tree(range, flags, RegexNode::NonCapturingGroup(group))
    }

    pub fn atomic_group(&mut self, range: IndexRange, element: StateId, flags: &FlagSet) -> StateId {
        let group = AtomicGroupTree::new(self.group(range, Some(element)));
        self.push_tree(range, flags, RegexNode::AtomicGroup(group))
    }

    /// # Panics
    ///
    /// If `element` already has a continuation.
    pub fn look_around(
        &mut self,
        range: IndexRange,
        polarity: Polarity,
        direction: Direction,
        element: StateId,
        flags: &FlagSet,
    ) -> StateId {
        // Wrapper states point at the lookaround, pushed right after them
        let wrappers = usize::from(polarity == Polarity::Negative) + usize::from(direction == Direction::Behind);
        let id = StateId::from_index(self.automaton.len() + wrappers);
        let mut inner = element;
        if polarity == Polarity::Negative {
            inner = self.automaton.push(State::Negation(NegationState {
                lookaround: id,
                content: inner,
            }));
        }
        if direction == Direction::Behind {
            inner = self
                .automaton
                .push(State::StartOfLookBehind(StartOfLookBehindState {
                    lookaround: id,
                    content: inner,
                }));
        }

        let lookaround = LookAroundTree::new(self.group(range, Some(element)), polarity, direction, inner);
        let pushed = self.push_tree(range, flags, RegexNode::LookAround(lookaround));
        debug_assert_eq!(pushed, id);
        let end = self
            .automaton
            .push(State::EndOfLookaround(EndOfLookaroundState { lookaround: id }));
        self.automaton.set_continuation(element, end);
        id
    }

    /// A back-reference spanning from `opener` (the backslash or `(`) to `end`
    ///
    /// See [`BackReferenceTree::new`] for how `start` and `end` delimit the
    /// group name.
    pub fn back_reference(
        &mut self,
        opener: &SourceCharacter,
        key: Option<SourceCharacter>,
        start: &SourceCharacter,
        end: &SourceCharacter,
        flags: &FlagSet,
    ) -> StateId {
        let range = opener.range.merge(&end.range);
        let reference = BackReferenceTree::new(self.source(), key, start, end);
        self.push_tree(range, flags, RegexNode::BackReference(reference))
    }

    pub fn reference_condition(
        &mut self,
        range: IndexRange,
        reference: impl Into<String>,
        flags: &FlagSet,
    ) -> StateId {
        let condition = ReferenceConditionTree::new(reference.into());
        self.push_tree(range, flags, RegexNode::ReferenceCondition(condition))
    }

    pub fn repetition(
        &mut self,
        range: IndexRange,
        element: StateId,
        quantifier: Quantifier,
        flags: &FlagSet,
    ) -> StateId {
        let repetition = RepetitionTree::new(element, quantifier);
        self.push_tree(range, flags, RegexNode::Repetition(repetition))
    }

    /// `(?(condition)yes|no)` spanning from `opening_paren` to `closing_paren`
    ///
    /// # Panics
    ///
    /// If either pattern already has a continuation.
    #[allow(clippy::too_many_arguments)]
    pub fn conditional_subpattern(
        &mut self,
        opening_paren: &SourceCharacter,
        closing_paren: &SourceCharacter,
        condition: StateId,
        yes_pattern: StateId,
        pipe: Option<SourceCharacter>,
        no_pattern: Option<StateId>,
        flags: &FlagSet,
    ) -> StateId {
        let range = opening_paren.range.merge(&closing_paren.range);
        let conditional = ConditionalSubpatternTree::new(condition, yes_pattern, pipe, no_pattern);
        let id = self.push_tree(range, flags, RegexNode::ConditionalSubpattern(conditional));
        let end = self
            .automaton
            .push(State::EndOfConditionalSubpatterns(EndOfConditionalSubpatternsState {
                parent: id,
            }));
        self.automaton.set_continuation(yes_pattern, end);
        if let Some(no_pattern) = no_pattern {
            self.automaton.set_continuation(no_pattern, end);
        }
        id
    }

    /// Link a back-reference to its capturing group, or unlink it with `None`
    pub fn set_group(&mut self, reference: StateId, group: Option<StateId>) -> Result<(), AutomatonError> {
        match self.automaton.tree_mut(reference)?.node_mut() {
            RegexNode::BackReference(back_reference) => {
                back_reference.set_group(group);
                Ok(())
            }
            _ => Err(AutomatonError::NotABackReference { state: reference }),
        }
    }

    /// Link every back-reference to the capturing group it names
    ///
    /// Numerical references match group numbers, named references match
    /// group names. References to unknown groups stay unresolved. Returns the
    /// number of resolved references.
    pub fn resolve_back_references(&mut self) -> usize {
        let mut by_number = HashMap::new();
        let mut by_name = HashMap::new();
        let mut references = Vec::new();
        for id in self.automaton.ids() {
            match self.automaton.state(id).as_tree().map(RegexTree::node) {
                Some(RegexNode::CapturingGroup(group)) => {
                    by_number.insert(group.group_number(), id);
                    if let Some(name) = group.name() {
                        by_name.insert(name.to_string(), id);
                    }
                }
                Some(RegexNode::BackReference(_)) => references.push(id),
                _ => {}
            }
        }

        let mut resolved = 0;
        for reference in references {
            let target = match self.automaton.tree(reference).node() {
                RegexNode::BackReference(back_reference) => match back_reference.group_number() {
                    Some(number) => by_number.get(&number).copied(),
                    None => by_name.get(back_reference.group_name()).copied(),
                },
                _ => None,
            };
            match target {
                Some(group) => {
                    if self.set_group(reference, Some(group)).is_ok() {
                        resolved += 1;
                    }
                }
                None => log::warn!(
                    "back-reference {} `{}` names no capturing group",
                    reference,
                    self.automaton.text(reference)
                ),
            }
        }
        log::debug!("resolved {} back-references", resolved);
        resolved
    }

    /// Link `root` to a fresh final state and wrap everything up
    ///
    /// # Panics
    ///
    /// If any continuation reached from `root` was already set.
    pub fn finish(self, root: StateId, initial_flags: &FlagSet) -> Regex {
        match self.try_finish(root, initial_flags) {
            Ok(regex) => regex,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_finish(mut self, root: StateId, initial_flags: &FlagSet) -> Result<Regex, AutomatonError> {
        self.automaton.try_tree(root)?;
        let final_state = self.automaton.push(State::Final(FinalState {
            flags: initial_flags.clone(),
        }));
        let start = self.automaton.push(State::Start(StartState {
            root,
            flags: initial_flags.clone(),
        }));
        self.automaton.try_set_continuation(root, final_state)?;
        log::debug!(
            "linked regex `{}`: {} states, root {}",
            self.automaton.source().text(),
            self.automaton.len(),
            root
        );
        Ok(Regex::new(self.automaton, root, start, final_state))
    }
}
