//! Domain types for warpband-io.

use warpband_dtw::Sequence;

/// Identifier of a sequence, parsed from the first CSV column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceId(String);

impl SequenceId {
    /// Create a new identifier from a non-empty string.
    pub(crate) fn new(id: String) -> Self {
        debug_assert!(!id.is_empty(), "sequence ID must not be empty");
        Self(id)
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SequenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Labelled sequences loaded from CSV, in file order.
///
/// Sequences may differ in length.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Identifiers, one per row.
    pub ids: Vec<SequenceId>,
    /// Validated sequences, aligned with `ids`.
    pub sequences: Vec<Sequence>,
}

impl Dataset {
    /// Return the number of sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Return true if the dataset holds no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Return the shortest and longest sequence lengths, or `None` when empty.
    #[must_use]
    pub fn length_range(&self) -> Option<(usize, usize)> {
        let lens = self.sequences.iter().map(Sequence::len);
        Some((lens.clone().min()?, lens.max()?))
    }
}
