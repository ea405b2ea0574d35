/// Which side of the diff an `EditOp` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EditKind {
    /// An element present in the new sequence only.
    Insert,
    /// An element present in the old sequence only.
    Delete,
}

/// A single edit.
///
/// `position` is absolute: an index into the old sequence for `Delete`,
/// an index into the new sequence for `Insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditOp {
    pub kind: EditKind,
    pub position: usize,
}

impl EditOp {
    pub fn delete(position: usize) -> Self {
        EditOp {
            kind: EditKind::Delete,
            position,
        }
    }

    pub fn insert(position: usize) -> Self {
        EditOp {
            kind: EditKind::Insert,
            position,
        }
    }
}

/// Result of the Myers diff functions.
///
/// Operations are kept in edit-graph order, so deletions are ascending by
/// old position and insertions are ascending by new position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    pub(crate) fn from_ops(ops: Vec<EditOp>) -> Self {
        EditScript { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of edits, each insert and each delete costing one.
    pub fn distance(&self) -> usize {
        self.ops.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    pub fn as_slice(&self) -> &[EditOp] {
        &self.ops
    }

    /// Old-sequence positions to remove, ascending.
    pub fn deletions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions(EditKind::Delete)
    }

    /// New-sequence positions to insert, ascending.
    pub fn insertions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions(EditKind::Insert)
    }

    fn positions(&self, kind: EditKind) -> impl Iterator<Item = usize> + '_ {
        self.ops
            .iter()
            .filter(move |op| op.kind == kind)
            .map(|op| op.position)
    }
}

impl IntoIterator for EditScript {
    type Item = EditOp;
    type IntoIter = std::vec::IntoIter<EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl FromIterator<EditOp> for EditScript {
    fn from_iter<I: IntoIterator<Item = EditOp>>(iter: I) -> Self {
        EditScript {
            ops: iter.into_iter().collect(),
        }
    }
}

/// A snake lying on a shortest edit path, as found by the bidirectional search.
///
/// The path runs diagonally from `(x, y)` to `(u, v)`; the two points are equal
/// when the snake is empty. `distance` is the edit distance of the whole
/// sub-problem the snake was searched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub distance: usize,
    pub x: usize,
    pub y: usize,
    pub u: usize,
    pub v: usize,
}

impl Snake {
    /// True when the snake moves in both coordinates.
    pub fn is_diagonal(&self) -> bool {
        self.x != self.u && self.y != self.v
    }
}
