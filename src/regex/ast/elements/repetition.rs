//! Repetition and quantifiers
//!
//! A [`RepetitionTree`] applies a [`Quantifier`] to an element. Quantifiers come
//! in two syntactic forms, `*` `+` `?` and curly braces `{m}` `{m,}` `{m,n}`,
//! each optionally followed by a reluctant `?` or possessive `+` modifier.
//!
//! The modifier does not change the repetition bounds. It only decides in
//! which order the automaton offers "repeat" and "stop" as successors, see
//! [`Automaton::successors`](crate::regex::automaton::Automaton::successors).

use super::super::error::AstError;
use super::super::range::IndexRange;
use super::super::source::{RegexSource, RegexToken};
use super::super::traits::RegexSyntaxElement;
use crate::regex::automaton::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Greedy,
    Reluctant,
    Possessive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimpleQuantifierKind {
    Star,
    Plus,
    QuestionMark,
}

impl fmt::Display for SimpleQuantifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleQuantifierKind::Star => write!(f, "*"),
            SimpleQuantifierKind::Plus => write!(f, "+"),
            SimpleQuantifierKind::QuestionMark => write!(f, "?"),
        }
    }
}

/// The tokens of a `{m,n}` quantifier together with their parsed values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlyBraceQuantifier {
    minimum_token: Option<RegexToken>,
    comma_token: Option<RegexToken>,
    maximum_token: Option<RegexToken>,
    minimum: u32,
    maximum: Option<u32>,
}

impl CurlyBraceQuantifier {
    pub fn minimum_token(&self) -> Option<&RegexToken> {
        self.minimum_token.as_ref()
    }

    pub fn comma_token(&self) -> Option<&RegexToken> {
        self.comma_token.as_ref()
    }

    pub fn maximum_token(&self) -> Option<&RegexToken> {
        self.maximum_token.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantifierForm {
    Simple(SimpleQuantifierKind),
    CurlyBrace(CurlyBraceQuantifier),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantifier {
    range: IndexRange,
    modifier: Modifier,
    form: QuantifierForm,
}

impl Quantifier {
    pub fn simple(range: IndexRange, modifier: Modifier, kind: SimpleQuantifierKind) -> Self {
        Self {
            range,
            modifier,
            form: QuantifierForm::Simple(kind),
        }
    }

    /// A curly brace quantifier whose bounds are read from the token text
    ///
    /// A missing minimum token means 0. Without a comma the quantifier is
    /// fixed (`{m}`); with a comma but no maximum token it is open ended.
    pub fn curly_brace(
        source: &RegexSource,
        range: IndexRange,
        modifier: Modifier,
        minimum_token: Option<RegexToken>,
        comma_token: Option<RegexToken>,
        maximum_token: Option<RegexToken>,
    ) -> Result<Self, AstError> {
        let minimum = match &minimum_token {
            Some(token) => parse_bound(source, token)?,
            None => 0,
        };
        let maximum = match &maximum_token {
            Some(token) => Some(parse_bound(source, token)?),
            None => None,
        };
        Ok(Self {
            range,
            modifier,
            form: QuantifierForm::CurlyBrace(CurlyBraceQuantifier {
                minimum_token,
                comma_token,
                maximum_token,
                minimum,
                maximum,
            }),
        })
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn form(&self) -> &QuantifierForm {
        &self.form
    }

    pub fn minimum_repetitions(&self) -> u32 {
        match &self.form {
            QuantifierForm::Simple(SimpleQuantifierKind::Plus) => 1,
            QuantifierForm::Simple(_) => 0,
            QuantifierForm::CurlyBrace(curly) => curly.minimum,
        }
    }

    /// `None` means unbounded
    pub fn maximum_repetitions(&self) -> Option<u32> {
        match &self.form {
            QuantifierForm::Simple(SimpleQuantifierKind::QuestionMark) => Some(1),
            QuantifierForm::Simple(_) => None,
            QuantifierForm::CurlyBrace(curly) if curly.comma_token.is_none() => {
                Some(curly.minimum)
            }
            QuantifierForm::CurlyBrace(curly) => curly.maximum,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        self.maximum_repetitions().is_none()
    }

    /// `{m}` without a comma
    pub fn is_fixed(&self) -> bool {
        matches!(&self.form, QuantifierForm::CurlyBrace(curly) if curly.comma_token.is_none())
    }
}

impl RegexSyntaxElement for Quantifier {
    fn range(&self) -> IndexRange {
        self.range
    }
}

fn parse_bound(source: &RegexSource, token: &RegexToken) -> Result<u32, AstError> {
    let text = token.text(source);
    text.parse::<u32>()
        .map_err(|_| AstError::InvalidQuantifierBound {
            text: text.to_string(),
            range: token.range,
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionTree {
    element: StateId,
    quantifier: Quantifier,
}

impl RepetitionTree {
    pub(crate) fn new(element: StateId, quantifier: Quantifier) -> Self {
        Self {
            element,
            quantifier,
        }
    }

    pub fn element(&self) -> StateId {
        self.element
    }

    pub fn quantifier(&self) -> &Quantifier {
        &self.quantifier
    }

    pub fn is_possessive(&self) -> bool {
        self.quantifier.modifier() == Modifier::Possessive
    }

    pub fn is_reluctant(&self) -> bool {
        self.quantifier.modifier() == Modifier::Reluctant
    }
}
