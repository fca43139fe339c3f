//! Short-circuiting, index-aware queries.
//!
//! Every function here stops calling its predicate as soon as the answer is
//! known.

/// Returns a reference to the first element for which
/// `predicate(index, &element)` holds.
///
/// Elements after the first match are never passed to the predicate.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::find;
///
/// let values = [1, 2, 3, 4];
/// assert_eq!(find(&values, |_, value| value % 2 == 0), Some(&2));
/// assert_eq!(find(&values, |_, value| *value > 10), None);
/// ```
pub fn find<T, F>(sequence: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(usize, &T) -> bool,
{
    sequence
        .iter()
        .enumerate()
        .find(|(index, element)| predicate(*index, *element))
        .map(|(_, element)| element)
}

/// Returns the position of the first element for which
/// `predicate(index, &element)` holds.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::find_index;
///
/// let queue = ["idle", "idle", "busy", "idle"];
/// assert_eq!(find_index(&queue, |_, state| *state == "busy"), Some(2));
/// assert_eq!(find_index(&queue, |_, state| *state == "dead"), None);
/// ```
pub fn find_index<T, F>(sequence: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(usize, &T) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if predicate(index, element) {
            return Some(index);
        }
    }
    None
}

/// Returns the first matching element together with a found flag.
///
/// When nothing matches, returns `(T::default(), false)`. Prefer [`find`]
/// unless a default-valued result is what the caller wants.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::find_or_default;
///
/// let values = [1, 2, 3, 4];
/// assert_eq!(find_or_default(&values, |_, value| value % 2 == 0), (2, true));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(find_or_default(&empty, |_, _| true), (0, false));
/// ```
pub fn find_or_default<T, F>(sequence: &[T], predicate: F) -> (T, bool)
where
    T: Clone + Default,
    F: FnMut(usize, &T) -> bool,
{
    find(sequence, predicate).map_or_else(
        || (T::default(), false),
        |element| (element.clone(), true),
    )
}

/// Returns `true` if `predicate(index, &element)` holds for every element.
///
/// Stops at the first element that fails. An empty sequence gives `true`.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::every;
///
/// let values = [2, 4, 5, 6];
/// assert!(!every(&values, |_, value| value % 2 == 0));
/// assert!(every(&values, |index, _| index < values.len()));
///
/// let empty: [i32; 0] = [];
/// assert!(every(&empty, |_, _| false));
/// ```
pub fn every<T, F>(sequence: &[T], mut predicate: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if !predicate(index, element) {
            return false;
        }
    }
    true
}

/// Returns `true` if `predicate(index, &element)` holds for at least one
/// element.
///
/// Stops at the first element that matches. An empty sequence gives `false`.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::some;
///
/// let values = [1, 3, 4];
/// assert!(some(&values, |_, value| value % 2 == 0));
///
/// let empty: [i32; 0] = [];
/// assert!(!some(&empty, |_, _| true));
/// ```
pub fn some<T, F>(sequence: &[T], mut predicate: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if predicate(index, element) {
            return true;
        }
    }
    false
}
