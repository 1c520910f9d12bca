use pretty_assertions::assert_eq;
use taiko_pattern::pattern::prelude::*;

use super::{compile_err, compile_pairs};

#[test]
fn triplet_of_two() {
    assert_eq!(
        compile_pairs("(kd)"),
        vec![("1k6d".to_owned(), ON_BEAT), ("6d2".to_owned(), ONE_THIRD)]
    );
}

#[test]
fn triplet_of_three() {
    assert_eq!(
        compile_pairs("(kdk)"),
        vec![
            ("1k6d".to_owned(), ON_BEAT),
            ("6d6k".to_owned(), ON_BEAT),
            ("6k1".to_owned(), TWO_THIRDS),
        ]
    );
}

#[test]
fn duplet_of_two() {
    assert_eq!(
        compile_pairs("[kd]"),
        vec![("1k8d".to_owned(), ON_BEAT), ("8d".to_owned(), ONE_HALF)]
    );
}

#[test]
fn case_insensitive() {
    assert_eq!(compile_pairs("(KD)"), compile_pairs("(kd)"));
    assert_eq!(compile_pairs("Dk"), compile_pairs("dk"));
}

#[test]
fn example_from_help_message() {
    let labels: Vec<_> = compile("(kkkdddk)kdd(kkkd)d[kkd]d k")
        .unwrap()
        .into_iter()
        .map(|token| token.label().to_owned())
        .collect();
    assert_eq!(
        labels,
        [
            "1k6k", "6k6k", "6k1d6d", "6d6d", "6d1k", // (kkkdddk)
            "1k", "1d", "1d", //
            "1k6k", "6k6k", "6k1d", // (kkkd)
            "1d", //
            "1k8k", "8k1d", // [kkd]
            "1d", "bk", "1k",
        ]
    );
}

#[test]
fn mixed_groups_keep_their_offsets() {
    let offsets: Vec<_> = compile_pairs("(dk)k[dk](kdk)")
        .into_iter()
        .map(|(_, offset)| offset)
        .collect();
    assert_eq!(
        offsets,
        [
            ON_BEAT, ONE_THIRD, ON_BEAT, ON_BEAT, ONE_HALF, ON_BEAT, ON_BEAT, TWO_THIRDS
        ]
    );
}

#[test]
fn empty_source() {
    assert!(compile("").unwrap().is_empty());
}

#[test]
fn invalid_character() {
    assert_eq!(compile_err("kx"), PatternError::InvalidCharacter('x'));
    let err = compile("dk{d}").unwrap_err();
    assert_eq!(err.content(), &PatternError::InvalidCharacter('{'));
    assert_eq!(err.as_span(), (2, 3));
}

#[test]
fn invalid_character_is_checked_first() {
    // `((` would be a duplicate, but the character set is checked before it.
    assert_eq!(compile_err("((kd)x"), PatternError::InvalidCharacter('x'));
}

#[test]
fn duplicated_symbols() {
    assert_eq!(compile_err("(("), PatternError::DuplicateSymbol('('));
    assert_eq!(compile_err("))"), PatternError::DuplicateSymbol(')'));
    assert_eq!(compile_err("[[k]"), PatternError::DuplicateSymbol('['));
    // The duplicate check comes before the count check.
    assert_eq!(compile_err("((kd)"), PatternError::DuplicateSymbol('('));
}

#[test]
fn unbalanced() {
    assert_eq!(compile_err("(kd"), PatternError::UnbalancedCounts);
    assert_eq!(compile_err("(kd)k)"), PatternError::UnbalancedCounts);
    assert_eq!(compile_err("k)(d"), PatternError::UnmatchedSymbol(')'));
    assert_eq!(
        compile_err("(kd][dk)"),
        PatternError::MismatchedSymbol {
            expected: ')',
            found: ']'
        }
    );
}

#[test]
fn nested() {
    assert_eq!(compile_err("(k[dk]d)"), PatternError::NestedGroup('['));
    assert_eq!(compile_err("[k(d)k]"), PatternError::NestedGroup('('));
}

#[test]
fn empty_group_is_rejected_by_default() {
    assert_eq!(
        compile_err("k()"),
        PatternError::EmptyGroup(GroupKind::Triplet)
    );
    assert_eq!(
        compile_err("[]d"),
        PatternError::EmptyGroup(GroupKind::Duplet)
    );
}

#[test]
fn never_emits_sentinel_labels() {
    for src in ["kx", "((", "(kd", "(k[d])", "pinga"] {
        assert!(compile(src).is_err(), "{src:?}");
    }
}
