//! Index-aware combinators over ordered sequences.
//!
//! Every function takes a borrowed slice and a callback that receives the
//! element's position and a reference to the element. Traversal always runs
//! from index 0 upwards, and inputs are never mutated.
//!
//! - [`iterate`]: Visit each element, stopping at the first error
//! - [`map`]: Transform every element into a new `Vec`
//! - [`filter`]: Keep the elements matching a predicate
//! - [`reduce`]: Fold left to right into a single value
//! - [`find`], [`find_index`], [`find_or_default`]: Locate the first match
//! - [`every`], [`some`]: Universal and existential checks
//! - [`SequenceExt`]: All of the above as methods on slices
//!
//! # Short-circuiting
//!
//! [`iterate`], the `find` family, [`every`] and [`some`] stop invoking the
//! callback as soon as the outcome is decided. [`map`], [`filter`] and
//! [`reduce`] always visit every element.
//!
//! # Examples
//!
//! ```rust
//! use fungi::sequence::{every, filter, find, some};
//!
//! let values = [1, 2, 3, 4];
//! let is_even = |_: usize, value: &i32| value % 2 == 0;
//!
//! assert_eq!(filter(&values, is_even), vec![2, 4]);
//! assert_eq!(find(&values, is_even), Some(&2));
//! assert!(!every(&values, is_even));
//! assert!(some(&values, is_even));
//! ```

mod ext;
mod search;
mod transform;
mod traverse;

pub use ext::SequenceExt;
pub use search::{every, find, find_index, find_or_default, some};
pub use transform::{filter, map, reduce};
pub use traverse::iterate;
