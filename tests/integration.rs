use middlesnake::myers::{diff, diff_by, find_middle_snake, EditOp, EditScript};
use middlesnake::patch::apply;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::thread;

fn lcs_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    let mut table = vec![vec![0; new.len() + 1]; old.len() + 1];
    for i in 0..old.len() {
        for j in 0..new.len() {
            table[i + 1][j + 1] = if old[i] == new[j] {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }
    table[old.len()][new.len()]
}

proptest! {
    #[test]
    fn test_round_trip(
        old in prop::collection::vec(0i32..5, 0..40),
        new in prop::collection::vec(0i32..5, 0..40),
    ) {
        let script = diff(&old, &new);
        prop_assert_eq!(apply(&script, &old, &new), Ok(new));
    }

    #[test]
    fn test_minimality(
        old in prop::collection::vec(0u8..3, 0..=12),
        new in prop::collection::vec(0u8..3, 0..=12),
    ) {
        let script = diff(&old, &new);
        let lcs = lcs_len(&old, &new);
        prop_assert_eq!(script.deletions().count(), old.len() - lcs);
        prop_assert_eq!(script.insertions().count(), new.len() - lcs);
    }

    #[test]
    fn test_idempotence(els in prop::collection::vec(any::<char>(), 0..50)) {
        prop_assert!(diff(&els, &els).is_empty());
    }
}

#[test]
fn test_integer_scenario() {
    let old = [1, 4, 27, 21, 23, 24, 26, 28, 13];
    let new = [1, 4, 20, 21, 22, 23, 24, 25, 26, 13];
    let script = diff(&old, &new);

    let deleted: Vec<i32> = script.deletions().map(|p| old[p]).collect();
    let inserted: Vec<i32> = script.insertions().map(|p| new[p]).collect();
    assert_eq!(deleted, vec![27, 28]);
    assert_eq!(inserted, vec![20, 22, 25]);
    assert_eq!(script.distance(), 5);

    let kept: Vec<i32> = old
        .iter()
        .enumerate()
        .filter(|(i, _)| !script.deletions().any(|p| p == *i))
        .map(|(_, v)| *v)
        .collect();
    assert_eq!(kept, vec![1, 4, 21, 23, 24, 26, 13]);
    assert_eq!(apply(&script, &old, &new), Ok(new.to_vec()));
}

#[test]
fn test_all_inserts() {
    let script = diff(&[], &[1, 2, 3]);
    let expected: EditScript = (0..3).map(EditOp::insert).collect();
    assert_eq!(script, expected);
    assert_eq!(script.distance(), 3);
}

#[test]
fn test_all_deletes() {
    let script = diff(&[1, 2, 3], &[]);
    let expected: EditScript = (0..3).map(EditOp::delete).collect();
    assert_eq!(script, expected);
    assert_eq!(script.distance(), 3);
}

#[test]
fn test_equal_sequences() {
    let els = ["x", "y", "z"];
    assert_eq!(diff(&els, &els), EditScript::default());
}

#[test]
fn test_classic_strings() {
    let old: Vec<char> = "ABCABBA".chars().collect();
    let new: Vec<char> = "CBABAC".chars().collect();
    let script = diff(&old, &new);
    assert_eq!(script.distance(), 5);
    let snake = find_middle_snake(&old, &new, &mut |a: &char, b: &char| a == b);
    assert_eq!(snake.distance, 5);

    let replayed: String = apply(&script, &old, &new).unwrap().into_iter().collect();
    assert_eq!(replayed, "CBABAC");
}

#[test]
fn test_records_with_key_comparator() {
    struct Line {
        number: usize,
        text: &'static str,
    }

    let old = vec![
        Line { number: 1, text: "fn main() {" },
        Line { number: 2, text: "    old();" },
        Line { number: 3, text: "}" },
    ];
    let new = vec![
        Line { number: 10, text: "fn main() {" },
        Line { number: 11, text: "    new();" },
        Line { number: 12, text: "}" },
    ];
    let script = diff_by(&old, &new, |a, b| a.text == b.text);
    assert_eq!(script.as_slice(), &[EditOp::delete(1), EditOp::insert(1)]);
    let inserted: Vec<usize> = script.insertions().map(|p| new[p].number).collect();
    assert_eq!(inserted, vec![11]);
    let deleted: Vec<usize> = script.deletions().map(|p| old[p].number).collect();
    assert_eq!(deleted, vec![2]);
}

#[test]
fn test_concurrent_diffs() {
    let inputs: Vec<(Vec<u16>, Vec<u16>)> = (0..8u16)
        .map(|seed| {
            let old = (0..200).map(|i| (i * 7 + seed) % 13).collect();
            let new = (0..180).map(|i| (i * 5 + seed) % 11).collect();
            (old, new)
        })
        .collect();

    let sequential: Vec<EditScript> = inputs.iter().map(|(o, n)| diff(o, n)).collect();
    let concurrent: Vec<EditScript> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(o, n)| scope.spawn(move || diff(o, n)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });
    assert_eq!(sequential, concurrent);
}
