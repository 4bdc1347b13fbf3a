use std::ops::Index;

use ndarray::ArrayD;

/// An ordered set of state entries, each with its own fixed shape.
///
/// Entries are independent `f64` arrays: a scalar is a zero-dimensional
/// array, a vector is one-dimensional, and so on. A system may mix shapes
/// freely, so an entry's shape is only meaningful relative to the same entry
/// at another point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State(Vec<ArrayD<f64>>);

impl State {
    /// Creates a state from its entries.
    #[must_use]
    pub fn new(entries: Vec<ArrayD<f64>>) -> Self {
        Self(entries)
    }

    /// Creates a state with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the state has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entry at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArrayD<f64>> {
        self.0.get(index)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ArrayD<f64>> {
        self.0.iter()
    }

    /// Returns the shape of every entry, in order.
    #[must_use]
    pub fn shapes(&self) -> Vec<Vec<usize>> {
        self.0.iter().map(|entry| entry.shape().to_vec()).collect()
    }

    /// Returns `true` if `other` has the same number of entries and every
    /// entry has the same shape as its counterpart in `self`.
    #[must_use]
    pub fn has_shapes_of(&self, other: &State) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.shape() == b.shape())
    }

    /// Consumes the state and returns its entries.
    #[must_use]
    pub fn into_inner(self) -> Vec<ArrayD<f64>> {
        self.0
    }
}

impl From<Vec<ArrayD<f64>>> for State {
    fn from(entries: Vec<ArrayD<f64>>) -> Self {
        Self(entries)
    }
}

impl FromIterator<ArrayD<f64>> for State {
    fn from_iter<T: IntoIterator<Item = ArrayD<f64>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for State {
    type Output = ArrayD<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a ArrayD<f64>;
    type IntoIter = std::slice::Iter<'a, ArrayD<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
