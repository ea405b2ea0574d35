use crate::myers::EditKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("no edit script of length {max} or less exists")]
    DistanceExceeded { max: usize },
}

/// Reasons an `EditScript` cannot be laid over a pair of sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("{kind:?} at position {position} is outside a sequence of length {len}")]
    PositionOutOfRange {
        kind: EditKind,
        position: usize,
        len: usize,
    },
    #[error("script keeps {kept_old} old elements but {kept_new} new elements")]
    LengthMismatch { kept_old: usize, kept_new: usize },
    #[error("{kind:?} at position {position} could not be aligned")]
    Unaligned { kind: EditKind, position: usize },
}
