mod types;
pub use types::*;

use crate::error::PatchError;
use crate::myers::{EditKind, EditScript};
use std::iter::Peekable;

/// Lays `script` over sequences of length `old_len` and `new_len`, pairing
/// every kept old element with its new counterpart.
///
/// At each step an insertion at the current new index is taken first, then a
/// deletion at the current old index, otherwise both elements are kept. Once
/// one side runs out the other side's remaining operations are flushed.
pub fn align(script: &EditScript, old_len: usize, new_len: usize) -> Result<Vec<Row>, PatchError> {
    check_range(script, EditKind::Delete, old_len)?;
    check_range(script, EditKind::Insert, new_len)?;

    let deletes = script.deletions().count();
    let inserts = script.insertions().count();
    let kept_old = old_len.saturating_sub(deletes);
    let kept_new = new_len.saturating_sub(inserts);
    if deletes > old_len || inserts > new_len || kept_old != kept_new {
        return Err(PatchError::LengthMismatch { kept_old, kept_new });
    }

    let mut dels = script.deletions().peekable();
    let mut ins = script.insertions().peekable();
    let mut rows = Vec::with_capacity(kept_old + deletes + inserts);
    let (mut i, mut j) = (0, 0);

    while i < old_len && j < new_len {
        if ins.next_if_eq(&j).is_some() {
            rows.push(Row::Added { new: j });
            j += 1;
        } else if dels.next_if_eq(&i).is_some() {
            rows.push(Row::Deleted { old: i });
            i += 1;
        } else {
            rows.push(Row::Unchanged { old: i, new: j });
            i += 1;
            j += 1;
        }
    }
    while i < old_len {
        take(&mut dels, i, EditKind::Delete)?;
        rows.push(Row::Deleted { old: i });
        i += 1;
    }
    while j < new_len {
        take(&mut ins, j, EditKind::Insert)?;
        rows.push(Row::Added { new: j });
        j += 1;
    }

    if let Some(position) = dels.next() {
        return Err(PatchError::Unaligned {
            kind: EditKind::Delete,
            position,
        });
    }
    if let Some(position) = ins.next() {
        return Err(PatchError::Unaligned {
            kind: EditKind::Insert,
            position,
        });
    }
    Ok(rows)
}

/// Replays `script` on `old`, pulling inserted elements from `new`.
///
/// For a script produced by `diff(old, new)` the result equals `new`.
pub fn apply<T: Clone>(script: &EditScript, old: &[T], new: &[T]) -> Result<Vec<T>, PatchError> {
    let rows = align(script, old.len(), new.len())?;
    Ok(rows
        .into_iter()
        .filter_map(|row| match row {
            Row::Unchanged { old: i, .. } => Some(old[i].clone()),
            Row::Added { new: j } => Some(new[j].clone()),
            Row::Deleted { .. } => None,
        })
        .collect())
}

fn check_range(script: &EditScript, kind: EditKind, len: usize) -> Result<(), PatchError> {
    match script
        .iter()
        .find(|op| op.kind == kind && op.position >= len)
    {
        Some(op) => Err(PatchError::PositionOutOfRange {
            kind,
            position: op.position,
            len,
        }),
        None => Ok(()),
    }
}

fn take<I: Iterator<Item = usize>>(
    ops: &mut Peekable<I>,
    expected: usize,
    kind: EditKind,
) -> Result<(), PatchError> {
    match ops.next() {
        Some(position) if position == expected => Ok(()),
        Some(position) => Err(PatchError::Unaligned { kind, position }),
        None => Err(PatchError::Unaligned {
            kind,
            position: expected,
        }),
    }
}
