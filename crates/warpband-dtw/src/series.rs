//! Sequence types with validation guarantees.

use std::ops::Index;

use crate::error::DistanceError;

/// Owned, validated sequence. Guaranteed non-empty with all finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence(Vec<f64>);

impl Sequence {
    /// Create a new sequence, validating that it is non-empty and all values are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DistanceError::EmptySequence`] | `values` is empty |
    /// | [`DistanceError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(values: Vec<f64>) -> Result<Self, DistanceError> {
        validate(&values)?;
        Ok(Self(values))
    }

    /// Borrow this sequence as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView(&self.0)
    }

    /// Return the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed [`Sequence`]; present for the
    /// `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for Sequence {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Sequence {
    type Error = DistanceError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

/// Borrowed, validated, read-only view over an ordered numeric sequence.
///
/// The caller owns the data; the view only guarantees that it stays
/// unmodified for as long as the borrow lives, which covers the whole of a
/// distance call.
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a>(&'a [f64]);

impl<'a> SequenceView<'a> {
    /// Create a new view, validating that the slice is non-empty and all values are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DistanceError::EmptySequence`] | `slice` is empty |
    /// | [`DistanceError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(slice: &'a [f64]) -> Result<Self, DistanceError> {
        validate(slice)?;
        Ok(Self(slice))
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed view; present for the
    /// `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the value at a 1-based `position`, or `None` outside `1..=len`.
    #[must_use]
    pub fn value(&self, position: usize) -> Option<f64> {
        position.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }
}

impl Index<usize> for SequenceView<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[f64]> for SequenceView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

fn validate(values: &[f64]) -> Result<(), DistanceError> {
    if values.is_empty() {
        return Err(DistanceError::EmptySequence);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(DistanceError::NonFiniteValue { index });
    }
    Ok(())
}
