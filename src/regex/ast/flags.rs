//! Active regex flags
//!
//! A [`FlagSet`] is a bitmask of the flags in effect at some point of the
//! pattern, plus the provenance of each bit: which character of the pattern
//! (e.g. the `i` of `(?i)`) switched it on. Provenance is kept for diagnostics
//! only and never influences semantics.
//!
//! The set is mutated while a parser walks the pattern. Every tree node keeps
//! its own copy, so flags toggled inside one group never leak into siblings
//! built later.

use super::error::AstError;
use super::source::SourceCharacter;
use std::collections::HashMap;

/// Bitmask of active flags with per-bit provenance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    mask: u32,
    flag_characters: HashMap<u32, SourceCharacter>,
}

impl FlagSet {
    pub const UNIX_LINES: u32 = 0x01;
    pub const CASE_INSENSITIVE: u32 = 0x02;
    pub const COMMENTS: u32 = 0x04;
    pub const MULTILINE: u32 = 0x08;
    pub const LITERAL: u32 = 0x10;
    pub const DOTALL: u32 = 0x20;
    pub const UNICODE_CASE: u32 = 0x40;
    pub const CANON_EQ: u32 = 0x80;
    pub const UNICODE_CHARACTER_CLASS: u32 = 0x100;

    /// Inline flag letters in the order they are rendered
    const LETTERS: [(char, u32); 7] = [
        ('d', Self::UNIX_LINES),
        ('i', Self::CASE_INSENSITIVE),
        ('x', Self::COMMENTS),
        ('m', Self::MULTILINE),
        ('s', Self::DOTALL),
        ('u', Self::UNICODE_CASE),
        ('U', Self::UNICODE_CHARACTER_CLASS),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(initial_flags: u32) -> Self {
        let mut flags = Self::new();
        flags.add(initial_flags);
        flags
    }

    /// Parse a string of inline flag letters such as `"im"`
    pub fn from_letters(letters: &str) -> Result<Self, AstError> {
        let mut flags = Self::new();
        for letter in letters.chars() {
            let flag = Self::flag_for_letter(letter).ok_or(AstError::UnknownFlag(letter))?;
            flags.add(flag);
        }
        Ok(flags)
    }

    pub fn flag_for_letter(letter: char) -> Option<u32> {
        Self::LETTERS
            .iter()
            .find(|(candidate, _)| *candidate == letter)
            .map(|(_, flag)| *flag)
    }

    /// The inline letters of the flags in this set, e.g. `"iu"`
    pub fn letters(&self) -> String {
        Self::LETTERS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(letter, _)| *letter)
            .collect()
    }

    pub fn contains(&self, flag: u32) -> bool {
        self.mask & flag != 0
    }

    /// The character that switched `flag` on, if it was set from within the pattern
    ///
    /// Returns `None` for flags passed in from outside the pattern, so this must
    /// not be used to check membership.
    pub fn character_for_flag(&self, flag: u32) -> Option<&SourceCharacter> {
        self.flag_characters.get(&flag)
    }

    pub fn add(&mut self, flag: u32) {
        // UNICODE_CHARACTER_CLASS implies UNICODE_CASE, both when enabling and disabling
        if flag & Self::UNICODE_CHARACTER_CLASS != 0 {
            self.mask |= Self::UNICODE_CASE;
        }
        self.mask |= flag;
    }

    /// Add `flag` and remember `character` as the provenance of each of its bits
    pub fn add_from_source(&mut self, flag: u32, character: SourceCharacter) {
        self.add(flag);
        for bit in bits(flag) {
            self.flag_characters.insert(bit, character.clone());
        }
    }

    pub fn add_all(&mut self, other: &FlagSet) {
        self.mask |= other.mask;
        self.flag_characters.extend(
            other
                .flag_characters
                .iter()
                .map(|(bit, character)| (*bit, character.clone())),
        );
    }

    pub fn remove_all(&mut self, other: &FlagSet) {
        self.mask &= !other.mask;
        let mask = self.mask;
        self.flag_characters.retain(|bit, _| mask & bit != 0);
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

fn bits(flag: u32) -> impl Iterator<Item = u32> {
    (0..u32::BITS)
        .map(|shift| 1u32 << shift)
        .filter(move |bit| flag & bit != 0)
}
