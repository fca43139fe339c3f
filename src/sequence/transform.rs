//! Index-aware transformations that build new collections or values.
//!
//! None of these functions has an error channel. The input slice is only
//! borrowed, and results are freshly allocated.

/// Builds a new vector by applying `transform(index, &element)` to each
/// element.
///
/// The result always has the same length as the input, and element `i` of the
/// result is `transform(i, &sequence[i])`.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::map;
///
/// let names = ["ada", "grace", "barbara"];
/// let labelled = map(&names, |index, name| format!("{index}:{name}"));
/// assert_eq!(labelled, vec!["0:ada", "1:grace", "2:barbara"]);
/// ```
pub fn map<T, U, F>(sequence: &[T], mut transform: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    let mut result = Vec::with_capacity(sequence.len());
    for (index, element) in sequence.iter().enumerate() {
        result.push(transform(index, element));
    }
    result
}

/// Returns the elements for which `predicate(index, &element)` holds, in
/// their original order.
///
/// No match (or an empty input) gives an empty vector.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::filter;
///
/// let readings = [3, 8, 1, 9, 4];
/// assert_eq!(filter(&readings, |_, value| *value > 3), vec![8, 9, 4]);
///
/// // Every other element, by position
/// assert_eq!(filter(&readings, |index, _| index % 2 == 0), vec![3, 1, 4]);
/// ```
pub fn filter<T, F>(sequence: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    let mut result = Vec::new();
    for (index, element) in sequence.iter().enumerate() {
        if predicate(index, element) {
            result.push(element.clone());
        }
    }
    result
}

/// Folds the sequence from left to right into a single value.
///
/// Starting from `initial`, each step computes
/// `accumulator = reducer(index, accumulator, &element)`. An empty sequence
/// returns `initial` untouched.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::reduce;
///
/// let prices = [250, 1200, 99];
/// let total = reduce(&prices, 0, |_, accumulator, price| accumulator + price);
/// assert_eq!(total, 1549);
///
/// let weighted = reduce(&prices, 0, |index, accumulator, price| accumulator + index * price);
/// assert_eq!(weighted, 1200 + 2 * 99);
/// ```
pub fn reduce<T, B, F>(sequence: &[T], initial: B, mut reducer: F) -> B
where
    F: FnMut(usize, B, &T) -> B,
{
    let mut accumulator = initial;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = reducer(index, accumulator, element);
    }
    accumulator
}
