//! Linear-space Myers diff.
//!
//! [`myers::diff`] finds a shortest edit script between two sequences by
//! repeatedly locating a middle snake and splitting the edit graph around it,
//! as described in "An O(ND) Difference Algorithm and Its Variations"
//! (Myers, 1986). [`patch`] lays a script back over its inputs.

pub mod error;
pub mod myers;
pub mod patch;

pub use error::{DiffError, PatchError};
pub use myers::{diff, diff_by, DiffOptions, EditKind, EditOp, EditScript, Snake};
