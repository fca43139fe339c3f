//! Fallible, index-aware traversal.

use crate::trace::short_circuited;

/// Calls `callback(index, &element)` for each element, in order.
///
/// Traversal stops at the first callback that returns `Err`; that error is
/// returned unchanged and no later element is visited.
///
/// # Arguments
///
/// * `sequence` - The elements to visit
/// * `callback` - Called with each element's position and a reference to it
///
/// # Errors
///
/// Returns the first error produced by `callback`.
///
/// # Examples
///
/// ```rust
/// use fungi::sequence::iterate;
///
/// let ports = [8080, 8081, 0, 8083];
/// let mut bound = Vec::new();
///
/// let result = iterate(&ports, |index, port| {
///     if *port == 0 {
///         return Err(format!("invalid port at {index}"));
///     }
///     bound.push(*port);
///     Ok(())
/// });
///
/// assert_eq!(result, Err("invalid port at 2".to_string()));
/// assert_eq!(bound, vec![8080, 8081]);
/// ```
pub fn iterate<T, E, F>(sequence: &[T], mut callback: F) -> Result<(), E>
where
    F: FnMut(usize, &T) -> Result<(), E>,
{
    for (index, element) in sequence.iter().enumerate() {
        callback(index, element).inspect_err(|_| short_circuited("iterate", index))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterate_empty_never_calls_back() {
        let empty: [u8; 0] = [];
        let mut calls = 0;
        let result: Result<(), ()> = iterate(&empty, |_, _| {
            calls += 1;
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_iterate_passes_positions_in_order() {
        let letters = ['a', 'b', 'c'];
        let mut seen = Vec::new();
        let result: Result<(), ()> = iterate(&letters, |index, letter| {
            seen.push((index, *letter));
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn test_iterate_returns_first_error_only() {
        let values = [1, -2, -3];
        let result = iterate(&values, |_, value| {
            if *value < 0 { Err(*value) } else { Ok(()) }
        });
        assert_eq!(result, Err(-2));
    }
}
