mod diagonal;
mod snake;
pub mod types;

pub use snake::find_middle_snake;
pub use types::*;

use crate::error::DiffError;
use snake::find_middle_snake_within;
use std::ops::Range;
use tracing::debug;

/// Computes the shortest edit script between two sequences using the
/// linear-space variant of the Myers algorithm.
///
/// # Examples
///
/// ```
/// use middlesnake::myers::{diff, EditOp};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let script = diff(&old, &new);
/// assert_eq!(script.as_slice(), &[EditOp::delete(1), EditOp::insert(2)]);
/// ```
pub fn diff<T: PartialEq>(old: &[T], new: &[T]) -> EditScript {
    diff_by(old, new, |a, b| a == b)
}

/// Like [`diff`], comparing elements with `eq` instead of `PartialEq`.
///
/// `eq` is called with an old element first and a new element second.
pub fn diff_by<T, U, F>(old: &[T], new: &[U], eq: F) -> EditScript
where
    F: FnMut(&T, &U) -> bool,
{
    match DiffOptions::new().diff_by(old, new, eq) {
        Ok(script) => script,
        Err(err) => unreachable!("unbounded diff failed: {err}"),
    }
}

/// Settings for a diff run.
///
/// The default is an unbounded search, which never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    max_distance: Option<usize>,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up with [`DiffError::DistanceExceeded`] once it is known that
    /// more than `max` edits are needed.
    ///
    /// Only the top-level search is bounded, so an input that fails does so
    /// after roughly `(N + M) * max / 2` comparisons.
    pub fn max_distance(mut self, max: usize) -> Self {
        self.max_distance = Some(max);
        self
    }

    pub fn diff<T: PartialEq>(&self, old: &[T], new: &[T]) -> Result<EditScript, DiffError> {
        self.diff_by(old, new, |a, b| a == b)
    }

    pub fn diff_by<T, U, F>(&self, old: &[T], new: &[U], mut eq: F) -> Result<EditScript, DiffError>
    where
        F: FnMut(&T, &U) -> bool,
    {
        debug!(
            old_len = old.len(),
            new_len = new.len(),
            max_distance = ?self.max_distance,
            "diff start"
        );
        let script = shortest_edit_script(old, new, &mut eq, self.max_distance)?;
        debug!(ops = script.len(), "diff done");
        Ok(script)
    }
}

/// A pending sub-problem: the part of the edit graph spanned by two ranges.
struct Frame {
    old: Range<usize>,
    new: Range<usize>,
}

/// Splits the edit graph at middle snakes until every piece is a pure run of
/// deletions or insertions.
///
/// Pieces are kept on an explicit stack, prefix on top of suffix, so the
/// operations come out in edit-graph order without native recursion.
fn shortest_edit_script<T, U, F>(
    old: &[T],
    new: &[U],
    eq: &mut F,
    max_distance: Option<usize>,
) -> Result<EditScript, DiffError>
where
    F: FnMut(&T, &U) -> bool,
{
    if let Some(max) = max_distance {
        if (old.is_empty() || new.is_empty()) && old.len() + new.len() > max {
            debug!(max, "distance bound exceeded");
            return Err(DiffError::DistanceExceeded { max });
        }
    }

    let mut bound = max_distance;
    let mut ops = Vec::new();
    let mut stack = vec![Frame {
        old: 0..old.len(),
        new: 0..new.len(),
    }];

    while let Some(Frame { old: ro, new: rn }) = stack.pop() {
        let (ox, oy) = (ro.start, rn.start);
        let n = ro.len();
        let m = rn.len();

        if n > 0 && m > 0 {
            let (a, b) = (&old[ro.clone()], &new[rn.clone()]);
            // only the first frame popped is the whole problem
            let snake = match bound.take() {
                Some(max) => find_middle_snake_within(a, b, eq, max.div_ceil(2))
                    .filter(|snake| snake.distance <= max)
                    .ok_or_else(|| {
                        debug!(max, "distance bound exceeded");
                        DiffError::DistanceExceeded { max }
                    })?,
                None => find_middle_snake(a, b, eq),
            };

            if snake.distance > 1 || snake.is_diagonal() {
                stack.push(Frame {
                    old: ox + snake.u..ro.end,
                    new: oy + snake.v..rn.end,
                });
                stack.push(Frame {
                    old: ox..ox + snake.x,
                    new: oy..oy + snake.y,
                });
            } else if m > n {
                // the first n elements match, one insertion remains
                stack.push(Frame {
                    old: ro.end..ro.end,
                    new: oy + n..rn.end,
                });
            } else if m < n {
                stack.push(Frame {
                    old: ox + m..ro.end,
                    new: rn.end..rn.end,
                });
            }
        } else if n > 0 {
            ops.extend(ro.map(EditOp::delete));
        } else if m > 0 {
            ops.extend(rn.map(EditOp::insert));
        }
    }

    Ok(EditScript::from_ops(ops))
}
