//! Method-call syntax for the sequence combinators.
//!
//! [`SequenceExt`] is implemented for `[T]`, so slices, arrays and `Vec`s all
//! pick it up through auto-deref. Each method delegates to the free function of
//! the same operation in [`crate::sequence`].

use super::{every, filter, find, find_index, find_or_default, iterate, map, reduce, some};

/// Index-aware combinators as methods on slices.
///
/// The `_indexed` suffix keeps these methods from colliding with the
/// iterator-style names already on slices and `Vec` (`map`, `filter`, ...).
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::SequenceExt;
///
/// let values = vec![1, 2, 3, 4];
///
/// assert_eq!(values.filter_indexed(|_, value| value % 2 == 0), vec![2, 4]);
/// assert_eq!(values.find_indexed(|_, value| value % 2 == 0), Some(&2));
/// assert!(!values.every_indexed(|_, value| value % 2 == 0));
/// assert!(values.some_indexed(|_, value| value % 2 == 0));
/// assert_eq!(values.reduce_indexed(0, |_, accumulator, _| accumulator + 1), 4);
/// ```
pub trait SequenceExt<T> {
    /// Calls `callback` for each element, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `callback`.
    fn iterate_indexed<E, F>(&self, callback: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>;

    /// Builds a new vector of `transform(index, &element)`.
    fn map_indexed<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(usize, &T) -> U;

    /// Keeps the elements matching `predicate`, in order.
    fn filter_indexed<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize, &T) -> bool;

    /// Folds left to right starting from `initial`.
    fn reduce_indexed<B, F>(&self, initial: B, reducer: F) -> B
    where
        F: FnMut(usize, B, &T) -> B;

    /// Returns the first element matching `predicate`.
    fn find_indexed<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(usize, &T) -> bool;

    /// Returns the position of the first element matching `predicate`.
    fn find_index_indexed<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(usize, &T) -> bool;

    /// Returns the first match and `true`, or `T::default()` and `false`.
    fn find_or_default_indexed<F>(&self, predicate: F) -> (T, bool)
    where
        T: Clone + Default,
        F: FnMut(usize, &T) -> bool;

    /// Returns `true` if every element matches `predicate`.
    fn every_indexed<F>(&self, predicate: F) -> bool
    where
        F: FnMut(usize, &T) -> bool;

    /// Returns `true` if at least one element matches `predicate`.
    fn some_indexed<F>(&self, predicate: F) -> bool
    where
        F: FnMut(usize, &T) -> bool;
}

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn iterate_indexed<E, F>(&self, callback: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>,
    {
        iterate(self, callback)
    }

    #[inline]
    fn map_indexed<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        map(self, transform)
    }

    #[inline]
    fn filter_indexed<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize, &T) -> bool,
    {
        filter(self, predicate)
    }

    #[inline]
    fn reduce_indexed<B, F>(&self, initial: B, reducer: F) -> B
    where
        F: FnMut(usize, B, &T) -> B,
    {
        reduce(self, initial, reducer)
    }

    #[inline]
    fn find_indexed<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(usize, &T) -> bool,
    {
        find(self, predicate)
    }

    #[inline]
    fn find_index_indexed<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(usize, &T) -> bool,
    {
        find_index(self, predicate)
    }

    #[inline]
    fn find_or_default_indexed<F>(&self, predicate: F) -> (T, bool)
    where
        T: Clone + Default,
        F: FnMut(usize, &T) -> bool,
    {
        find_or_default(self, predicate)
    }

    #[inline]
    fn every_indexed<F>(&self, predicate: F) -> bool
    where
        F: FnMut(usize, &T) -> bool,
    {
        every(self, predicate)
    }

    #[inline]
    fn some_indexed<F>(&self, predicate: F) -> bool
    where
        F: FnMut(usize, &T) -> bool,
    {
        some(self, predicate)
    }
}
