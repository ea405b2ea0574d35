/// One step of walking an `EditScript` over its two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// `old[old]` and `new[new]` are the same kept element.
    Unchanged { old: usize, new: usize },
    /// `old[old]` is removed.
    Deleted { old: usize },
    /// `new[new]` is added.
    Added { new: usize },
}
