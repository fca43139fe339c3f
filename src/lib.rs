//! # fungi
//!
//! Small, index-aware higher-order functions over in-memory ordered
//! sequences.
//!
//! ## Overview
//!
//! Each combinator is a single synchronous pass over a borrowed slice. The
//! callback receives the element's position alongside a reference to the
//! element, and traversal always runs from the first element to the last.
//!
//! - **Control**: [`process`](control::process()) and [`process!`] run fallible
//!   steps in order, returning the first error unchanged
//! - **Sequence**: [`iterate`](sequence::iterate), [`map`](sequence::map),
//!   [`filter`](sequence::filter), [`reduce`](sequence::reduce),
//!   [`find`](sequence::find), [`every`](sequence::every) and
//!   [`some`](sequence::some), plus the [`SequenceExt`](sequence::SequenceExt)
//!   method-syntax trait
//!
//! Nothing runs in parallel, nothing is lazy, and inputs are never mutated.
//! Errors are only ever propagated, never collected or wrapped.
//!
//! ## Feature Flags
//!
//! - `control`: [`process`](control::process()), [`Step`](control::Step) and
//!   [`process!`]
//! - `sequence`: The sequence combinators and [`SequenceExt`](sequence::SequenceExt)
//! - `tracing`: Emit a `trace`-level event when `process` or `iterate`
//!   short-circuits
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fungi::prelude::*;
//!
//! let values = [1, 2, 3, 4];
//!
//! assert_eq!(filter(&values, |_, value| value % 2 == 0), vec![2, 4]);
//! assert_eq!(values.reduce_indexed(0, |_, count, _| count + 1), 4);
//!
//! let outcome: Result<(), &str> = process!(
//!     || iterate(&values, |_, value| if *value > 0 { Ok(()) } else { Err("negative") }),
//!     || Err("stopped"),
//! );
//! assert_eq!(outcome, Err("stopped"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every combinator, [`SequenceExt`](crate::sequence::SequenceExt)
/// and the [`process!`](crate::process) macro.
///
/// # Usage
///
/// ```rust
/// use fungi::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "control")]
    pub use crate::process;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(any(feature = "control", feature = "sequence"))]
mod trace;
