//! Extension methods for ordered sequences.

use smallvec::{Array, SmallVec};

/// Emptiness check and first-match removal for ordered sequences.
///
/// Removal always preserves the relative order of the remaining elements.
pub trait SequenceExt<T> {
    /// Whether the sequence holds no elements.
    fn is_empty_seq(&self) -> bool;

    /// Removes and returns the first element matching `predicate`.
    fn remove_first_by<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool;

    /// Removes and returns the first element equal to `value`.
    fn remove_first(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_first_by(|item| item == value)
    }
}

impl<T> SequenceExt<T> for Vec<T> {
    fn is_empty_seq(&self) -> bool {
        self.is_empty()
    }

    fn remove_first_by<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.iter().position(predicate)?;
        Some(self.remove(index))
    }
}

impl<A: Array> SequenceExt<A::Item> for SmallVec<A> {
    fn is_empty_seq(&self) -> bool {
        self.is_empty()
    }

    fn remove_first_by<F>(&mut self, predicate: F) -> Option<A::Item>
    where
        F: FnMut(&A::Item) -> bool,
    {
        let index = self.iter().position(predicate)?;
        Some(self.remove(index))
    }
}
