//! Property-based tests for flag sets

use proptest::prelude::*;
use regex_automaton::regex::ast::{FlagSet, IndexRange, SourceCharacter};

/// Any combination of the defined flag bits
fn flag_bits() -> impl Strategy<Value = u32> {
    0u32..0x200
}

fn letter_at(offset: i32, letter: char) -> SourceCharacter {
    SourceCharacter::new(IndexRange::new(offset, offset + 1), letter)
}

proptest! {
    #[test]
    fn unicode_character_class_implies_unicode_case(initial in flag_bits(), extra in flag_bits()) {
        let mut flags = FlagSet::with_flags(initial);
        flags.add(extra | FlagSet::UNICODE_CHARACTER_CLASS);
        prop_assert!(flags.contains(FlagSet::UNICODE_CHARACTER_CLASS));
        prop_assert!(flags.contains(FlagSet::UNICODE_CASE));
    }

    #[test]
    fn add_only_sets_bits(initial in flag_bits(), extra in flag_bits()) {
        let mut flags = FlagSet::with_flags(initial);
        flags.add(extra);
        prop_assert_eq!(flags.mask() & initial, initial);
        prop_assert_eq!(flags.mask() & extra, extra);
        prop_assert_eq!(flags.is_empty(), flags.mask() == 0);
    }

    #[test]
    fn copies_evolve_independently(initial in flag_bits(), extra in flag_bits(), removed in flag_bits()) {
        let mut original = FlagSet::new();
        original.add_from_source(initial, letter_at(2, 'i'));
        let before = original.clone();

        let mut copy = original.clone();
        copy.add_from_source(extra, letter_at(7, 'm'));
        copy.remove_all(&FlagSet::with_flags(removed));

        prop_assert_eq!(&original, &before);
        for bit in (0..9).map(|shift| 1u32 << shift) {
            prop_assert_eq!(original.character_for_flag(bit), before.character_for_flag(bit));
        }
    }

    #[test]
    fn remove_all_clears_exactly_the_given_bits(initial in flag_bits(), removed in flag_bits()) {
        let mut flags = FlagSet::new();
        flags.add_from_source(initial, letter_at(0, 'x'));
        let removed = FlagSet::with_flags(removed);
        let expected = flags.mask() & !removed.mask();
        flags.remove_all(&removed);
        prop_assert_eq!(flags.mask(), expected);
        for bit in (0..9).map(|shift| 1u32 << shift) {
            prop_assert_eq!(flags.character_for_flag(bit).is_some(), expected & bit != 0 && initial & bit != 0);
        }
    }
}

#[test]
fn test_latest_writer_is_the_provenance() {
    let mut flags = FlagSet::new();
    flags.add_from_source(FlagSet::CASE_INSENSITIVE, letter_at(2, 'i'));
    flags.add_from_source(FlagSet::CASE_INSENSITIVE, letter_at(9, 'i'));
    assert_eq!(
        flags.character_for_flag(FlagSet::CASE_INSENSITIVE),
        Some(&letter_at(9, 'i'))
    );
}

#[test]
fn test_flags_from_outside_have_no_provenance() {
    let flags = FlagSet::with_flags(FlagSet::DOTALL);
    assert!(flags.contains(FlagSet::DOTALL));
    assert_eq!(flags.character_for_flag(FlagSet::DOTALL), None);
}

#[test]
fn test_add_all_merges_masks_and_provenance() {
    let mut left = FlagSet::new();
    left.add_from_source(FlagSet::MULTILINE, letter_at(3, 'm'));
    let mut right = FlagSet::new();
    right.add_from_source(FlagSet::COMMENTS, letter_at(4, 'x'));

    left.add_all(&right);
    assert!(left.contains(FlagSet::MULTILINE));
    assert!(left.contains(FlagSet::COMMENTS));
    assert_eq!(left.character_for_flag(FlagSet::COMMENTS), Some(&letter_at(4, 'x')));
}

#[test]
fn test_letters_round_trip_through_inline_flags() {
    let flags = FlagSet::from_letters("ims").expect("known letters");
    assert!(flags.contains(FlagSet::CASE_INSENSITIVE));
    assert!(flags.contains(FlagSet::MULTILINE));
    assert!(flags.contains(FlagSet::DOTALL));
    assert_eq!(FlagSet::from_letters(&flags.letters()), Ok(flags));
}
